//! Forward sweep: consume agents behind the payload, never ahead of it.

use rand::RngCore;

use super::{replay_attempt, Attempt, Solver};
use crate::certificate::Certificate;
use crate::instance::{RelayInstance, Snapshot};
use crate::region::CandidatePool;

/// Repeatedly moves the first left-active agent of `pool` until none is left.
///
/// A left-active agent always pushes, so every step advances the payload.
/// Each moved agent is appended to `certificate`, removed from `pool`, and its
/// pre-move snapshot pushed to `undo`.
pub(crate) fn descend(
    instance: &mut RelayInstance,
    pool: &mut CandidatePool,
    certificate: &mut Certificate,
    undo: &mut Vec<Snapshot>,
) {
    loop {
        let region = pool.partition(instance.agents(), instance.payload());
        let Some(&agent) = region.left.first() else {
            break;
        };
        undo.push(instance.snapshot(agent));
        instance.move_agent(agent);
        certificate.push(agent);
        pool.remove(agent);
    }
}

/// Certificate and reach of the forward sweep from the source.
///
/// The instance is reset before and after.
pub fn forward_sweep(instance: &mut RelayInstance) -> (Certificate, f64) {
    instance.reset();
    let mut pool = CandidatePool::from_instance(instance);
    let mut certificate = Certificate::new();
    let mut undo = Vec::new();
    descend(instance, &mut pool, &mut certificate, &mut undo);
    let reach = instance.payload();
    instance.reset();

    tracing::debug!(steps = certificate.len(), reach, "forward sweep finished");
    (certificate, reach)
}

/// [`Solver`] adapter for [`forward_sweep`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardSweep;

impl Solver for ForwardSweep {
    fn solve(&self, instance: &mut RelayInstance, target: f64, _rng: &mut dyn RngCore) -> Attempt {
        let (certificate, _) = forward_sweep(instance);
        replay_attempt(instance, certificate, target)
    }

    fn name(&self) -> &str {
        "forward_sweep"
    }
}
