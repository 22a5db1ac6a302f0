//! Experiment runners over random instances.
//!
//! Every runner validates its configuration, then evaluates
//! `config.trials` independent instances (see [`run_trials`]). Counting
//! runners return how many trials satisfied the property; fractional runners
//! return the mean of a per-trial score.

use std::fmt;

use rand::RngCore;

use super::config::ExperimentConfig;
use super::error::ExperimentError;
use super::stats::mean;
use super::trials::run_trials;
use crate::algorithms::{
    forward_sweep, BacktrackSearch, GreedyHeuristic, GreedyRule, ReverseCriterion,
    ReverseHeuristic, SearchConfig, SearchOutcome,
};
use crate::connectivity::{symmetric_windows, IntervalGraph};
use crate::instance::{upper_bound, RelayInstance};

/// Random-sampling attempts allowed per instance by [`random_sampling_hit`].
pub const RANDOM_SAMPLING_ATTEMPTS: usize = 100;

fn count(results: Vec<bool>) -> usize {
    results.into_iter().filter(|&hit| hit).count()
}

fn mean_score(results: Vec<f64>) -> f64 {
    mean(&results).unwrap_or(0.0)
}

/// Trials whose instance admits a certificate, according to the exhaustive
/// search. Searches that run out of budget count as unsolvable.
pub fn solvable_trials(config: &ExperimentConfig) -> Result<usize, ExperimentError> {
    config.validate()?;
    let search = BacktrackSearch::new(config.search());
    let target = config.target();
    Ok(count(run_trials(config, |instance, rng| {
        search.search(instance, target, rng).is_found()
    })))
}

/// Trials solved by the forward sweep alone.
pub fn sweep_trials(config: &ExperimentConfig) -> Result<usize, ExperimentError> {
    config.validate()?;
    let target = config.target();
    Ok(count(run_trials(config, |instance, _| {
        forward_sweep(instance).1 >= target
    })))
}

/// Trials solved by the highest-leftmost-reach reverse heuristic.
pub fn reverse_trials(config: &ExperimentConfig) -> Result<usize, ExperimentError> {
    config.validate()?;
    let hlr = ReverseHeuristic::new(ReverseCriterion::HighestLeftmostReach);
    let (source, target) = (config.source(), config.target());
    Ok(count(run_trials(config, |instance, _| {
        hlr.run(instance.agents(), source, target).is_solved()
    })))
}

/// Node budget of [`node_blowup_trials`]: `ln(100) * 3 * width / radius`,
/// rounded down.
pub fn blowup_budget(config: &ExperimentConfig) -> u64 {
    (100f64.ln() * 3.0 * config.width / config.radius).floor() as u64
}

/// Trials whose exhaustive search needs more than [`blowup_budget`] nodes.
///
/// `config.node_budget` is ignored.
pub fn node_blowup_trials(config: &ExperimentConfig) -> Result<usize, ExperimentError> {
    config.validate()?;
    let search = BacktrackSearch::new(SearchConfig {
        node_budget: Some(blowup_budget(config)),
        ..SearchConfig::default()
    });
    let target = config.target();
    Ok(count(run_trials(config, |instance, rng| {
        search.search(instance, target, rng).is_exhausted()
    })))
}

/// Trials whose symmetric reach windows form a connected interval graph.
pub fn connected_trials(config: &ExperimentConfig) -> Result<usize, ExperimentError> {
    config.validate()?;
    Ok(count(run_trials(config, |instance, _| {
        IntervalGraph::new(&symmetric_windows(instance.agents())).is_connected()
    })))
}

/// Mean over trials of the largest `k / n` such that the hlr reverse
/// heuristic delivers from the source to `k / n` of the instance's upper
/// bound, where `n` is the number of agents. A trial scores `0` when no such
/// `k` exists.
pub fn hlr_optimum_fraction(config: &ExperimentConfig) -> Result<f64, ExperimentError> {
    config.validate()?;
    let hlr = ReverseHeuristic::new(ReverseCriterion::HighestLeftmostReach);
    let source = config.source();
    Ok(mean_score(run_trials(config, |instance, _| {
        let agents = instance.agents();
        let n = agents.len();
        let bound = upper_bound(agents);
        (1..=n)
            .rev()
            .find(|&k| {
                let target = k as f64 * bound / n as f64;
                hlr.run(agents, source, target).is_solved()
            })
            .map_or(0.0, |k| k as f64 / n as f64)
    })))
}

/// Mean over trials of `1 / leaves`, where `leaves` is the number of leaves
/// plain backtracking explores before finding a certificate. Unsolvable
/// trials score `0`.
pub fn leaf_fraction(config: &ExperimentConfig) -> Result<f64, ExperimentError> {
    config.validate()?;
    let search = BacktrackSearch::new(SearchConfig {
        forced_descent: false,
        ..config.search()
    });
    let target = config.target();
    Ok(mean_score(run_trials(config, |instance, rng| {
        let report = search.search(instance, target, rng);
        if report.is_found() {
            1.0 / report.stats.leaves as f64
        } else {
            0.0
        }
    })))
}

/// Mean over trials of `1 / k`, where `k` is the number of random-sampling
/// runs needed to deliver, out of [`RANDOM_SAMPLING_ATTEMPTS`]. Trials that
/// never deliver score `0`.
pub fn random_sampling_hit(config: &ExperimentConfig) -> Result<f64, ExperimentError> {
    config.validate()?;
    let sampler = GreedyHeuristic::new(GreedyRule::RandomSampling);
    let target = config.target();
    Ok(mean_score(run_trials(config, |instance, rng| {
        (1..=RANDOM_SAMPLING_ATTEMPTS)
            .find(|_| sampler.run(instance, rng).1 >= target)
            .map_or(0.0, |attempt| 1.0 / attempt as f64)
    })))
}

/// A heuristic whose solvability verdict is compared with the exhaustive
/// search by [`disagreement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contender {
    Reverse(ReverseCriterion),
    Greedy(GreedyRule),
}

impl Contender {
    /// Heuristics compared by [`disagreement`], in report order.
    pub const ALL: [Contender; 10] = [
        Contender::Reverse(ReverseCriterion::MaxPosition),
        Contender::Reverse(ReverseCriterion::MinPosition),
        Contender::Reverse(ReverseCriterion::MaxPullback),
        Contender::Reverse(ReverseCriterion::MinPullback),
        Contender::Reverse(ReverseCriterion::HighestLeftmostReach),
        Contender::Greedy(GreedyRule::Closest),
        Contender::Greedy(GreedyRule::LowestReach),
        Contender::Greedy(GreedyRule::HighestCapacity),
        Contender::Greedy(GreedyRule::LowestCapacity),
        Contender::Greedy(GreedyRule::RandomSampling),
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Contender::Reverse(criterion) => criterion.name(),
            Contender::Greedy(rule) => rule.name(),
        }
    }

    /// Whether this heuristic delivers the payload from the instance source
    /// to `target`.
    pub fn delivers(&self, instance: &mut RelayInstance, target: f64, rng: &mut dyn RngCore) -> bool {
        match *self {
            Contender::Reverse(criterion) => ReverseHeuristic::new(criterion)
                .run(instance.agents(), instance.origin(), target)
                .is_solved(),
            Contender::Greedy(rule) => GreedyHeuristic::new(rule).run(instance, rng).1 >= target,
        }
    }
}

impl fmt::Display for Contender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How often each heuristic's verdict differs from the exhaustive search.
#[derive(Debug, Clone, PartialEq)]
pub struct Disagreement {
    /// Trials the exhaustive search decided within its budget.
    pub decided: usize,
    /// Decided trials that were solvable.
    pub solvable: usize,
    /// Per heuristic, decided trials where it disagreed with the search.
    pub counts: Vec<(Contender, usize)>,
}

impl Disagreement {
    /// Disagreement count of `contender`, if it was compared.
    pub fn count(&self, contender: Contender) -> Option<usize> {
        self.counts
            .iter()
            .find(|(c, _)| *c == contender)
            .map(|&(_, n)| n)
    }
}

impl fmt::Display for Disagreement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "=== Disagreement ({} decided, {} solvable) ===",
            self.decided, self.solvable
        )?;
        for (i, (contender, n)) in self.counts.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  {:<18} {}", contender.name(), n)?;
        }
        Ok(())
    }
}

/// Compares every [`Contender`] with the exhaustive search.
///
/// Trials where the search exhausts its budget are skipped.
pub fn disagreement(config: &ExperimentConfig) -> Result<Disagreement, ExperimentError> {
    config.validate()?;
    let search = BacktrackSearch::new(config.search());
    let target = config.target();

    let trials = run_trials(config, |instance, rng| {
        let solvable = match search.search(instance, target, rng).outcome {
            SearchOutcome::Found(_) => true,
            SearchOutcome::Impossible => false,
            SearchOutcome::Exhausted => return None,
        };
        let differs: Vec<bool> = Contender::ALL
            .iter()
            .map(|contender| contender.delivers(instance, target, rng) != solvable)
            .collect();
        Some((solvable, differs))
    });

    let mut report = Disagreement {
        decided: 0,
        solvable: 0,
        counts: Contender::ALL.iter().map(|&c| (c, 0)).collect(),
    };
    for (solvable, differs) in trials.into_iter().flatten() {
        report.decided += 1;
        report.solvable += usize::from(solvable);
        for (slot, differs) in report.counts.iter_mut().zip(differs) {
            slot.1 += usize::from(differs);
        }
    }

    tracing::debug!(
        decided = report.decided,
        solvable = report.solvable,
        "disagreement experiment finished"
    );
    Ok(report)
}

/// Scalar experiments that can fill a density grid.
///
/// Counting experiments are reported as the fraction of trials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Experiment {
    Solvable,
    Sweep,
    Reverse,
    NodeBlowup,
    Connected,
    HlrOptimum,
    LeafFraction,
    RandomSamplingHit,
}

impl Experiment {
    pub const ALL: [Experiment; 8] = [
        Experiment::Solvable,
        Experiment::Sweep,
        Experiment::Reverse,
        Experiment::NodeBlowup,
        Experiment::Connected,
        Experiment::HlrOptimum,
        Experiment::LeafFraction,
        Experiment::RandomSamplingHit,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Experiment::Solvable => "solvable",
            Experiment::Sweep => "sweep",
            Experiment::Reverse => "reverse",
            Experiment::NodeBlowup => "node_blowup",
            Experiment::Connected => "connected",
            Experiment::HlrOptimum => "hlr_optimum",
            Experiment::LeafFraction => "leaf_fraction",
            Experiment::RandomSamplingHit => "random_sampling_hit",
        }
    }

    /// Value of this experiment for one configuration, in `[0, 1]`.
    pub fn evaluate(&self, config: &ExperimentConfig) -> Result<f64, ExperimentError> {
        let fraction = |n: usize| n as f64 / config.trials as f64;
        match self {
            Experiment::Solvable => solvable_trials(config).map(fraction),
            Experiment::Sweep => sweep_trials(config).map(fraction),
            Experiment::Reverse => reverse_trials(config).map(fraction),
            Experiment::NodeBlowup => node_blowup_trials(config).map(fraction),
            Experiment::Connected => connected_trials(config).map(fraction),
            Experiment::HlrOptimum => hlr_optimum_fraction(config),
            Experiment::LeafFraction => leaf_fraction(config),
            Experiment::RandomSamplingHit => random_sampling_hit(config),
        }
    }
}

impl fmt::Display for Experiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
