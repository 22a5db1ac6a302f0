//! Independent seeded trials.
//!
//! Trial `i` draws everything from `StdRng::seed_from_u64(seed + i)`, so a
//! trial's result does not depend on which thread runs it or in what order.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::config::ExperimentConfig;
use super::generator::random_instance;
use crate::instance::RelayInstance;

/// Generator for trial `index` of an experiment seeded with `seed`.
pub fn trial_rng(seed: u64, index: usize) -> StdRng {
    StdRng::seed_from_u64(seed.wrapping_add(index as u64))
}

fn run_one<T, F>(config: &ExperimentConfig, index: usize, trial: &F) -> T
where
    F: Fn(&mut RelayInstance, &mut StdRng) -> T,
{
    let mut rng = trial_rng(config.seed, index);
    let mut instance = random_instance(config, &mut rng);
    trial(&mut instance, &mut rng)
}

/// Runs `trial` on `config.trials` random instances and collects the results
/// in trial order.
///
/// The closure receives a fresh instance and the trial's generator, already
/// advanced past instance generation.
#[cfg(not(feature = "parallel"))]
pub fn run_trials<T, F>(config: &ExperimentConfig, trial: F) -> Vec<T>
where
    T: Send,
    F: Fn(&mut RelayInstance, &mut StdRng) -> T + Sync,
{
    (0..config.trials)
        .map(|index| run_one(config, index, &trial))
        .collect()
}

/// Runs `trial` on `config.trials` random instances and collects the results
/// in trial order.
///
/// The closure receives a fresh instance and the trial's generator, already
/// advanced past instance generation. Trials run on the rayon pool.
#[cfg(feature = "parallel")]
pub fn run_trials<T, F>(config: &ExperimentConfig, trial: F) -> Vec<T>
where
    T: Send,
    F: Fn(&mut RelayInstance, &mut StdRng) -> T + Sync,
{
    use rayon::prelude::*;

    (0..config.trials)
        .into_par_iter()
        .map(|index| run_one(config, index, &trial))
        .collect()
}
