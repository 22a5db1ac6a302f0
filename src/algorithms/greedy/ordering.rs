//! Picking one agent out of a non-empty active set.
//!
//! Every scan starts from the first id and only replaces the incumbent on a
//! strict improvement, so ties go to the agent met first.

use std::cmp::Ordering;

use super::metrics::{goes_first, pair_reach};
use crate::instance::{Agent, AgentId};

/// The id with the largest key. `None` for an empty slice.
pub fn max_by_key(ids: &[AgentId], mut key: impl FnMut(AgentId) -> f64) -> Option<AgentId> {
    first_by(ids, |candidate, best| {
        key(candidate).partial_cmp(&key(best)).unwrap_or(Ordering::Equal) == Ordering::Greater
    })
}

/// The id with the smallest key. `None` for an empty slice.
pub fn min_by_key(ids: &[AgentId], mut key: impl FnMut(AgentId) -> f64) -> Option<AgentId> {
    first_by(ids, |candidate, best| {
        key(candidate).partial_cmp(&key(best)).unwrap_or(Ordering::Equal) == Ordering::Less
    })
}

/// Pairwise winner by a single scan: the incumbent is replaced by any agent
/// that should go before it.
///
/// Exact only if "goes first" is transitive on the given set, which is not
/// guaranteed.
pub fn pairwise_winner(ids: &[AgentId], agents: &[Agent], payload: f64) -> Option<AgentId> {
    first_by(ids, |candidate, best| {
        goes_first(&agents[candidate], &agents[best], payload)
    })
}

/// The agent starting the best ordered pair of distinct agents.
///
/// With a single candidate, that candidate.
pub fn brute_pair_winner(ids: &[AgentId], agents: &[Agent], payload: f64) -> Option<AgentId> {
    let mut best = *ids.first()?;
    let mut best_reach = f64::NEG_INFINITY;
    for &first in ids {
        for &second in ids {
            if first == second {
                continue;
            }
            let reach = pair_reach(&agents[first], &agents[second], payload);
            if reach > best_reach {
                best = first;
                best_reach = reach;
            }
        }
    }
    Some(best)
}

fn first_by(
    ids: &[AgentId],
    mut better: impl FnMut(AgentId, AgentId) -> bool,
) -> Option<AgentId> {
    let (&first, rest) = ids.split_first()?;
    Some(
        rest.iter()
            .fold(first, |best, &candidate| if better(candidate, best) { candidate } else { best }),
    )
}
