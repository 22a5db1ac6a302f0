//! Random instance generation.

use rand::{Rng, RngCore};

use super::config::ExperimentConfig;
use crate::instance::{sort_by_leftmost_reach, Agent, RelayInstance};

/// `count` agents with positions uniform on `[0, width)` and energies uniform
/// on `[0, radius)`, sorted by leftmost reach.
///
/// # Panics
///
/// Panics if `width` or `radius` is not finite, or if `radius` is negative
/// (see [`Agent::new`]).
pub fn uniform_agents(rng: &mut dyn RngCore, width: f64, radius: f64, count: usize) -> Vec<Agent> {
    let mut agents: Vec<Agent> = (0..count)
        .map(|_| Agent::new(width * rng.gen::<f64>(), radius * rng.gen::<f64>()))
        .collect();
    sort_by_leftmost_reach(&mut agents);
    agents
}

/// A random instance for one trial of `config`, with the payload at the source.
pub fn random_instance(config: &ExperimentConfig, rng: &mut dyn RngCore) -> RelayInstance {
    let agents = uniform_agents(rng, config.width, config.radius, config.agents);
    RelayInstance::new(agents, config.source())
}
