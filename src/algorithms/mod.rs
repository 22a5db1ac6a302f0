//! Strategies for building certificates.
//!
//! - [`backtrack`]: exhaustive search with a node budget.
//! - [`greedy`]: forward heuristics choosing one active agent at a time.
//! - [`reverse`]: heuristics pulling the target back toward the source.
//! - [`forward_sweep`]: the strategy that only consumes agents behind the payload.
//!
//! Every strategy implements [`Solver`], so experiments can run them
//! interchangeably.

pub mod backtrack;
pub mod greedy;
pub mod reverse;
mod sweep;

pub use backtrack::{BacktrackSearch, SearchConfig, SearchOutcome, SearchReport, SearchStats};
pub use greedy::{GreedyHeuristic, GreedyRule};
pub use reverse::{ReverseCriterion, ReverseHeuristic, ReverseRun};
pub use sweep::{forward_sweep, ForwardSweep};

pub(crate) use sweep::descend;

use std::fmt::Display;

use rand::RngCore;

use crate::certificate::Certificate;
use crate::instance::RelayInstance;

/// How a solver's attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verdict {
    /// The certificate delivers the payload to the target.
    Delivered,
    /// The solver did not deliver. Only exhaustive search makes this a proof.
    Undelivered,
    /// The solver gave up before deciding.
    Inconclusive,
}

/// Outcome of one solver run on one instance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attempt {
    pub certificate: Certificate,
    /// Payload position reached by replaying `certificate` from the source.
    pub reach: f64,
    pub verdict: Verdict,
}

impl Attempt {
    pub fn is_delivered(&self) -> bool {
        self.verdict == Verdict::Delivered
    }
}

impl Display for Attempt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:?}: certificate {} reaching {}",
            self.verdict, self.certificate, self.reach
        )
    }
}

/// A strategy that tries to relay the payload of an instance to a target.
///
/// Implementations start from the source and leave the instance in its
/// construction-time state.
pub trait Solver: Send + Sync {
    fn solve(&self, instance: &mut RelayInstance, target: f64, rng: &mut dyn RngCore) -> Attempt;

    /// Returns a human-readable name for this solver.
    fn name(&self) -> &str;
}

/// Builds an [`Attempt`] from a certificate by replaying it.
pub(crate) fn replay_attempt(
    instance: &mut RelayInstance,
    certificate: Certificate,
    target: f64,
) -> Attempt {
    let reach = certificate.reach(instance);
    let verdict = if reach >= target {
        Verdict::Delivered
    } else {
        Verdict::Undelivered
    };
    Attempt {
        certificate,
        reach,
        verdict,
    }
}
