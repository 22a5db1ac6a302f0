//! Randomized experiments over uniformly generated instances.
//!
//! # Module Structure
//!
//! - [`config`]: experiment and density grid parameters
//! - [`generator`]: random agent placement
//! - [`trials`]: seeded per-trial execution, optionally on rayon
//! - [`suite`]: the experiment runners
//! - [`density`]: sweeps of an experiment over `(radius, agents)`
//! - [`stats`]: descriptive statistics

pub mod config;
pub mod density;
pub mod error;
pub mod generator;
pub mod stats;
pub mod suite;
pub mod trials;

pub use config::{ExperimentConfig, GridConfig};
pub use density::{density_grid, DensityGrid};
pub use error::ExperimentError;
pub use generator::{random_instance, uniform_agents};
pub use stats::{mean, stdev, variance, Summary};
pub use suite::{
    blowup_budget, connected_trials, disagreement, hlr_optimum_fraction, leaf_fraction,
    node_blowup_trials, random_sampling_hit, reverse_trials, solvable_trials, sweep_trials,
    Contender, Disagreement, Experiment, RANDOM_SAMPLING_ATTEMPTS,
};
pub use trials::{run_trials, trial_rng};
