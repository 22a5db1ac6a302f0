//! Reverse heuristics: pull the target back to the source.
//!
//! Instead of pushing the payload forward, a reverse heuristic starts at the
//! target and repeatedly picks an agent whose reach window covers the current
//! target. An agent at `x` with energy `e` can deliver a payload to `t` when
//! it picks the payload up at `x - s`, where `s = (x + e - t) / 2` is its
//! pull-back. That pick-up point becomes the new target. The run succeeds once
//! the target falls to or behind the source; the chosen agents, read
//! backwards, form a forward certificate.
//!
//! The instance is never mutated.

use std::fmt::Display;

use rand::RngCore;

use super::{replay_attempt, Attempt, Solver};
use crate::certificate::Certificate;
use crate::instance::{Agent, AgentId, RelayInstance};

/// Which covering agent to pick next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReverseCriterion {
    MaxPosition,
    MinPosition,
    MaxPullback,
    MinPullback,
    /// Highest leftmost reach. Ties go to the agent met last.
    HighestLeftmostReach,
}

impl ReverseCriterion {
    pub const ALL: [ReverseCriterion; 5] = [
        ReverseCriterion::MaxPosition,
        ReverseCriterion::MinPosition,
        ReverseCriterion::MaxPullback,
        ReverseCriterion::MinPullback,
        ReverseCriterion::HighestLeftmostReach,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            ReverseCriterion::MaxPosition => "max_x",
            ReverseCriterion::MinPosition => "min_x",
            ReverseCriterion::MaxPullback => "max_s",
            ReverseCriterion::MinPullback => "min_s",
            ReverseCriterion::HighestLeftmostReach => "hlr",
        }
    }
}

impl Display for ReverseCriterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of a reverse construction.
///
/// On failure both lists are empty. A target already at or behind the source
/// is solved with empty lists.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReverseRun {
    /// Agents in forward order.
    pub certificate: Certificate,
    /// `targets[i]` is where agent `certificate[i]` picks the payload up.
    pub targets: Vec<f64>,
    pub solved: bool,
}

impl ReverseRun {
    pub fn is_solved(&self) -> bool {
        self.solved
    }
}

/// Rounds to 10 decimal places, so that coverage tests tolerate the error
/// accumulated by repeated pull-backs.
fn round10(value: f64) -> f64 {
    (value * 1e10).round() / 1e10
}

fn pullback(agent: &Agent, target: f64) -> f64 {
    (agent.rightmost_reach() - target) / 2.0
}

fn covers(agent: &Agent, target: f64) -> bool {
    let target = round10(target);
    round10(agent.leftmost_reach()) < target && target <= round10(agent.rightmost_reach())
}

/// Reverse heuristic driven by one [`ReverseCriterion`].
///
/// # Example
///
/// ```
/// use ddlp::algorithms::{ReverseCriterion, ReverseHeuristic};
/// use ddlp::instance::Agent;
///
/// let agents = [
///     Agent::new(0.1, 0.1),
///     Agent::new(0.2, 0.1),
///     Agent::new(0.3, 0.4),
///     Agent::new(0.4, 0.6),
/// ];
/// let run = ReverseHeuristic::new(ReverseCriterion::HighestLeftmostReach).run(&agents, 0.0, 0.8);
/// assert_eq!(&run.certificate[..], &[2, 0, 1, 3]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReverseHeuristic {
    criterion: ReverseCriterion,
}

impl ReverseHeuristic {
    pub fn new(criterion: ReverseCriterion) -> Self {
        Self { criterion }
    }

    pub fn criterion(&self) -> ReverseCriterion {
        self.criterion
    }

    /// Builds a certificate from `target` back to `source`.
    pub fn run(&self, agents: &[Agent], source: f64, target: f64) -> ReverseRun {
        let mut available: Vec<AgentId> = (0..agents.len()).collect();
        let mut certificate = Vec::new();
        let mut targets = Vec::new();
        let mut current = target;

        while current > source {
            let candidates: Vec<AgentId> = available
                .iter()
                .copied()
                .filter(|&id| covers(&agents[id], current))
                .collect();
            let Some(chosen) = self.pick(&candidates, agents, current) else {
                tracing::debug!(
                    criterion = self.criterion.name(),
                    target = current,
                    "reverse run found no covering agent"
                );
                return ReverseRun::default();
            };

            current = agents[chosen].position() - pullback(&agents[chosen], current);
            certificate.push(chosen);
            targets.push(current);
            available.retain(|&id| id != chosen);
        }

        certificate.reverse();
        targets.reverse();
        tracing::debug!(
            criterion = self.criterion.name(),
            steps = certificate.len(),
            "reverse run reached the source"
        );
        ReverseRun {
            certificate: certificate.into(),
            targets,
            solved: true,
        }
    }

    fn pick(&self, candidates: &[AgentId], agents: &[Agent], target: f64) -> Option<AgentId> {
        let (&first, rest) = candidates.split_first()?;
        let key = |id: AgentId| {
            let agent = &agents[id];
            match self.criterion {
                ReverseCriterion::MaxPosition | ReverseCriterion::MinPosition => agent.position(),
                ReverseCriterion::MaxPullback | ReverseCriterion::MinPullback => {
                    pullback(agent, target)
                }
                ReverseCriterion::HighestLeftmostReach => agent.leftmost_reach(),
            }
        };

        let mut best = first;
        let mut best_key = key(first);
        for &id in rest {
            let value = key(id);
            let better = match self.criterion {
                ReverseCriterion::MaxPosition | ReverseCriterion::MaxPullback => value > best_key,
                ReverseCriterion::MinPosition | ReverseCriterion::MinPullback => value < best_key,
                ReverseCriterion::HighestLeftmostReach => value >= best_key,
            };
            if better {
                best = id;
                best_key = value;
            }
        }
        Some(best)
    }
}

impl Solver for ReverseHeuristic {
    fn solve(&self, instance: &mut RelayInstance, target: f64, _rng: &mut dyn RngCore) -> Attempt {
        let run = self.run(instance.agents(), instance.origin(), target);
        replay_attempt(instance, run.certificate, target)
    }

    fn name(&self) -> &str {
        self.criterion.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::Verdict;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn scenario() -> Vec<Agent> {
        vec![
            Agent::new(0.1, 0.1),
            Agent::new(0.2, 0.1),
            Agent::new(0.3, 0.4),
            Agent::new(0.4, 0.6),
        ]
    }

    fn run(criterion: ReverseCriterion) -> ReverseRun {
        ReverseHeuristic::new(criterion).run(&scenario(), 0.0, 0.8)
    }

    #[test]
    fn successful_criteria() {
        for criterion in [
            ReverseCriterion::MinPosition,
            ReverseCriterion::MinPullback,
            ReverseCriterion::HighestLeftmostReach,
        ] {
            let run = run(criterion);
            assert!(run.is_solved(), "{criterion}");
            assert_eq!(&run.certificate[..], &[2, 0, 1, 3], "{criterion}");
            assert_eq!(run.targets, vec![0.0, 0.1, 0.2, 0.30000000000000004]);
        }
    }

    #[test]
    fn failing_criteria_return_empty_runs() {
        for criterion in [ReverseCriterion::MaxPosition, ReverseCriterion::MaxPullback] {
            let run = run(criterion);
            assert!(!run.is_solved(), "{criterion}");
            assert!(run.targets.is_empty());
        }
    }

    #[test]
    fn round_trip_reaches_target() {
        let mut instance = RelayInstance::new(scenario(), 0.0);
        for criterion in ReverseCriterion::ALL {
            let run = run(criterion);
            if run.is_solved() {
                assert!(run.certificate.reach(&mut instance) >= 0.8, "{criterion}");
            }
        }
    }

    #[test]
    fn target_behind_source_is_trivially_solved() {
        let heuristic = ReverseHeuristic::new(ReverseCriterion::HighestLeftmostReach);
        let run = heuristic.run(&scenario(), 1.0, 0.5);
        assert!(run.is_solved());
        assert!(run.certificate.is_empty());
        assert!(run.targets.is_empty());
    }

    #[test]
    fn hlr_ties_go_to_later_agent() {
        // Two identical agents: the one picked first ends up last.
        let agents = [Agent::new(1.0, 1.0), Agent::new(1.0, 1.0)];
        let run = ReverseHeuristic::new(ReverseCriterion::HighestLeftmostReach).run(&agents, 0.5, 1.5);
        assert_eq!(&run.certificate[..], &[0, 1]);
        assert_eq!(run.targets, vec![0.375, 0.75]);

        let run = ReverseHeuristic::new(ReverseCriterion::MaxPosition).run(&agents, 0.5, 1.5);
        assert_eq!(&run.certificate[..], &[1, 0]);
    }

    #[test]
    fn exact_left_edge_does_not_cover() {
        let agent = Agent::new(1.0, 1.0);
        assert!(!covers(&agent, 0.0));
        assert!(covers(&agent, 2.0));
        assert!(!covers(&agent, 2.1));
    }

    #[test]
    fn coverage_tolerates_rounding_noise() {
        let agent = Agent::new(0.3, 0.4);
        assert!(0.1 * 7.0 > agent.rightmost_reach());
        assert!(covers(&agent, 0.1 * 7.0));
    }

    #[test]
    fn solver_replays_forward() {
        let mut instance = RelayInstance::new(scenario(), 0.0);
        let mut rng = StdRng::seed_from_u64(0);
        let hlr = ReverseHeuristic::new(ReverseCriterion::HighestLeftmostReach);
        let attempt = hlr.solve(&mut instance, 0.8, &mut rng);
        assert_eq!(attempt.verdict, Verdict::Delivered);
        assert_eq!(attempt.reach, 0.8);
        assert_eq!(hlr.name(), "hlr");
    }
}
