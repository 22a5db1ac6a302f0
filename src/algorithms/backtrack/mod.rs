//! Exhaustive certificate search.
//!
//! The search explores orderings of active agents depth first:
//!
//! 1. **Forced descent**: agents behind the payload never hurt, so they are
//!    consumed immediately (first in scan order) without branching.
//! 2. **Branching**: each agent ahead of the payload is tried as the next
//!    mover, in shuffled order. Moves are undone through O(1) snapshots.
//! 3. **Budget**: every visited node counts. Past the budget the search stops
//!    and reports [`SearchOutcome::Exhausted`] rather than a verdict.
//!
//! With `forced_descent` off the search branches on every active agent. That
//! mode is slower and is used to measure the size of the plain search tree.
//!
//! # Module Structure
//!
//! - `frame` - explicit stack frames and node results
//! - `engine` - the search loop

mod engine;
mod frame;


use std::fmt::Display;

use rand::RngCore;

use super::{replay_attempt, Attempt, Solver, Verdict};
use crate::certificate::Certificate;
use crate::instance::RelayInstance;

use engine::Session;

/// Search settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Maximum number of visited nodes. `None` searches to completion.
    pub node_budget: Option<u64>,
    /// Consume agents behind the payload without branching.
    pub forced_descent: bool,
    /// Try the children of each node in random order.
    pub shuffle: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            node_budget: None,
            forced_descent: true,
            shuffle: true,
        }
    }
}

/// Counters of one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Visited nodes, including the one that tripped the budget.
    pub nodes: u64,
    /// Visited nodes that reached the target or had no children.
    pub leaves: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchOutcome {
    /// A certificate delivering the payload to the target.
    Found(Certificate),
    /// The node budget ran out before a verdict.
    Exhausted,
    /// No ordering of the agents reaches the target.
    Impossible,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
}

impl SearchReport {
    pub fn certificate(&self) -> Option<&Certificate> {
        match &self.outcome {
            SearchOutcome::Found(certificate) => Some(certificate),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self.outcome, SearchOutcome::Found(_))
    }

    pub fn is_exhausted(&self) -> bool {
        self.outcome == SearchOutcome::Exhausted
    }
}

impl Display for SearchReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.outcome {
            SearchOutcome::Found(certificate) => write!(f, "found {certificate}")?,
            SearchOutcome::Exhausted => write!(f, "budget exhausted")?,
            SearchOutcome::Impossible => write!(f, "impossible")?,
        }
        write!(
            f,
            " ({} nodes, {} leaves)",
            self.stats.nodes, self.stats.leaves
        )
    }
}

/// Depth-first certificate search.
///
/// # Example
///
/// ```
/// use ddlp::algorithms::{BacktrackSearch, SearchOutcome};
/// use ddlp::instance::{Agent, RelayInstance};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let agents = vec![
///     Agent::new(0.1, 0.1),
///     Agent::new(0.2, 0.1),
///     Agent::new(0.3, 0.4),
///     Agent::new(0.4, 0.6),
/// ];
/// let mut instance = RelayInstance::new(agents, 0.0);
/// let report = BacktrackSearch::default().search(&mut instance, 0.8, &mut StdRng::seed_from_u64(7));
/// assert_eq!(report.outcome, SearchOutcome::Found(vec![2, 0, 1, 3].into()));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktrackSearch {
    config: SearchConfig,
}

impl BacktrackSearch {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Searches for a certificate reaching `target` from the instance source.
    ///
    /// The instance is reset before and after the search.
    pub fn search(
        &self,
        instance: &mut RelayInstance,
        target: f64,
        rng: &mut dyn RngCore,
    ) -> SearchReport {
        tracing::debug!(
            agents = instance.len(),
            source = instance.origin(),
            target,
            budget = ?self.config.node_budget,
            "starting certificate search"
        );

        let (outcome, stats) = Session::new(instance, &self.config, target).run(rng);
        let report = SearchReport { outcome, stats };

        tracing::debug!(
            nodes = report.stats.nodes,
            leaves = report.stats.leaves,
            found = report.is_found(),
            exhausted = report.is_exhausted(),
            "certificate search finished"
        );
        report
    }
}

impl Solver for BacktrackSearch {
    fn solve(&self, instance: &mut RelayInstance, target: f64, rng: &mut dyn RngCore) -> Attempt {
        let verdict = match self.search(instance, target, rng).outcome {
            SearchOutcome::Found(certificate) => {
                return replay_attempt(instance, certificate, target)
            }
            SearchOutcome::Exhausted => Verdict::Inconclusive,
            SearchOutcome::Impossible => Verdict::Undelivered,
        };
        Attempt {
            certificate: Certificate::new(),
            reach: instance.origin(),
            verdict,
        }
    }

    fn name(&self) -> &str {
        if self.config.forced_descent {
            "backtrack"
        } else {
            "plain_backtrack"
        }
    }
}
