//! Core greedy loop.

use rand::seq::SliceRandom;
use rand::RngCore;

use super::ordering::{brute_pair_winner, max_by_key, min_by_key, pairwise_winner};
use super::GreedyRule;
use crate::certificate::Certificate;
use crate::instance::{AgentId, RelayInstance};
use crate::region::{ActiveRegion, CandidatePool};

/// Picks the next mover, or `None` when no agent is active.
pub fn select(
    rule: GreedyRule,
    region: &ActiveRegion,
    instance: &RelayInstance,
    rng: &mut dyn RngCore,
) -> Option<AgentId> {
    let agents = instance.agents();
    let payload = instance.payload();
    let capacity = |id: AgentId| agents[id].residual_capacity(payload);

    let right = &region.right;
    match rule {
        GreedyRule::RandomSampling => region.all().choose(rng).copied(),
        _ if !region.left.is_empty() => max_by_key(&region.left, capacity),
        GreedyRule::Closest => min_by_key(right, |id| agents[id].distance_to(payload)),
        GreedyRule::LowestReach => min_by_key(right, |id| agents[id].rightmost_reach()),
        GreedyRule::HighestCapacity => max_by_key(right, capacity),
        GreedyRule::LowestCapacity => min_by_key(right, capacity),
        GreedyRule::Pairwise => pairwise_winner(right, agents, payload),
        GreedyRule::BrutePair => brute_pair_winner(right, agents, payload),
    }
}

/// Moves the selected agent until none is active.
///
/// Runs from the source and resets the instance at the end.
pub fn run(
    rule: GreedyRule,
    instance: &mut RelayInstance,
    rng: &mut dyn RngCore,
) -> (Certificate, f64) {
    instance.reset();
    let mut pool = CandidatePool::from_instance(instance);
    let mut certificate = Certificate::new();

    loop {
        let region = pool.partition(instance.agents(), instance.payload());
        let Some(agent) = select(rule, &region, instance, rng) else {
            break;
        };
        instance.move_agent(agent);
        certificate.push(agent);
        pool.remove(agent);
    }

    let reach = instance.payload();
    instance.reset();
    (certificate, reach)
}
