//! Greedy forward heuristics.
//!
//! At every step the active region around the payload is recomputed and one
//! agent is moved:
//!
//! - If some agent sits behind the payload, the one with the highest residual
//!   capacity (`energy - distance`) moves. Such agents never hurt.
//! - Otherwise the [`GreedyRule`] picks among the agents ahead.
//!
//! The loop ends when no agent is active. It never backtracks, so a run takes
//! at most one step per agent.
//!
//! # Module Structure
//!
//! - [`metrics`] - pair simulations used by the pairwise rules
//! - [`ordering`] - first-wins scans over candidate ids
//! - `engine` - selection and the greedy loop

mod engine;
pub mod metrics;
pub mod ordering;

use std::fmt::Display;

use rand::RngCore;

use super::{replay_attempt, Attempt, Solver};
use crate::certificate::Certificate;
use crate::instance::RelayInstance;

/// How to pick among the agents ahead of the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GreedyRule {
    /// Smallest distance to the payload.
    Closest,
    /// Smallest `position + energy`.
    LowestReach,
    /// Largest residual capacity.
    HighestCapacity,
    /// Smallest residual capacity.
    LowestCapacity,
    /// Winner of a single scan of pairwise "who goes first" duels.
    Pairwise,
    /// First agent of the best ordered pair.
    BrutePair,
    /// Uniformly random active agent, behind or ahead of the payload.
    RandomSampling,
}

impl GreedyRule {
    pub const ALL: [GreedyRule; 7] = [
        GreedyRule::Closest,
        GreedyRule::LowestReach,
        GreedyRule::HighestCapacity,
        GreedyRule::LowestCapacity,
        GreedyRule::Pairwise,
        GreedyRule::BrutePair,
        GreedyRule::RandomSampling,
    ];

    /// Rules that never consult the random generator.
    pub const DETERMINISTIC: [GreedyRule; 6] = [
        GreedyRule::Closest,
        GreedyRule::LowestReach,
        GreedyRule::HighestCapacity,
        GreedyRule::LowestCapacity,
        GreedyRule::Pairwise,
        GreedyRule::BrutePair,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            GreedyRule::Closest => "closest",
            GreedyRule::LowestReach => "lowest_reach",
            GreedyRule::HighestCapacity => "highest_capacity",
            GreedyRule::LowestCapacity => "lowest_capacity",
            GreedyRule::Pairwise => "pairwise",
            GreedyRule::BrutePair => "brute_pair",
            GreedyRule::RandomSampling => "random_sampling",
        }
    }
}

impl Display for GreedyRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Greedy heuristic driven by one [`GreedyRule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreedyHeuristic {
    rule: GreedyRule,
}

impl GreedyHeuristic {
    pub fn new(rule: GreedyRule) -> Self {
        Self { rule }
    }

    pub fn rule(&self) -> GreedyRule {
        self.rule
    }

    /// Certificate built greedily from the source, and its reach.
    ///
    /// The instance is reset before and after. `rng` is only consulted by
    /// [`GreedyRule::RandomSampling`].
    pub fn run(&self, instance: &mut RelayInstance, rng: &mut dyn RngCore) -> (Certificate, f64) {
        let (certificate, reach) = engine::run(self.rule, instance, rng);
        tracing::debug!(
            rule = self.rule.name(),
            steps = certificate.len(),
            reach,
            "greedy run finished"
        );
        (certificate, reach)
    }
}

impl Solver for GreedyHeuristic {
    fn solve(&self, instance: &mut RelayInstance, target: f64, rng: &mut dyn RngCore) -> Attempt {
        let (certificate, _) = self.run(instance, rng);
        replay_attempt(instance, certificate, target)
    }

    fn name(&self) -> &str {
        self.rule.name()
    }
}
