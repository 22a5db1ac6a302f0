//! Active-region partitioning of candidate agents around the payload.
//!
//! Given a payload position, every still-available agent falls in one of four
//! classes:
//!
//! - **useless**: `position + energy <= payload`. Since the payload never moves
//!   backward, the agent can never push it again.
//! - **left**: `position <= payload` and not useless. The agent overlaps the
//!   payload from behind; using it never hurts.
//! - **right**: `position > payload` and `position - energy < payload`. The
//!   agent reaches the payload from ahead.
//! - **unreachable**: everything else, for now.
//!
//! [`CandidatePool`] keeps the candidates sorted by leftmost reach, which lets
//! the scan stop at the first unreachable agent and drop useless agents
//! permanently. Reusing the same pool across a search session keeps the total
//! pruning work linear in the number of agents.

use crate::instance::{Agent, AgentId, RelayInstance};

/// Agents that can currently influence the payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveRegion {
    /// Agents overlapping the payload from behind, in scan order.
    pub left: Vec<AgentId>,
    /// Agents reaching the payload from ahead, in scan order.
    pub right: Vec<AgentId>,
}

impl ActiveRegion {
    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }

    /// All active agents, left ones first.
    pub fn all(&self) -> Vec<AgentId> {
        self.left.iter().chain(&self.right).copied().collect()
    }
}

/// Candidate agent ids kept sorted ascending by leftmost reach.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidatePool {
    ids: Vec<AgentId>,
}

impl CandidatePool {
    /// Pools every agent of `agents`, sorted by leftmost reach (stable).
    pub fn new(agents: &[Agent]) -> Self {
        Self::from_ids(agents, 0..agents.len())
    }

    /// Pools the agents of an instance that still have their energy.
    pub fn from_instance(instance: &RelayInstance) -> Self {
        Self::from_ids(instance.agents(), instance.available())
    }

    /// Pools the given ids, sorted by the leftmost reach of their agents.
    pub fn from_ids(agents: &[Agent], ids: impl IntoIterator<Item = AgentId>) -> Self {
        let mut ids: Vec<AgentId> = ids.into_iter().collect();
        ids.sort_by(|&a, &b| agents[a].cmp_by_leftmost_reach(&agents[b]));
        Self { ids }
    }

    pub fn ids(&self) -> &[AgentId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: AgentId) -> bool {
        self.ids.contains(&id)
    }

    /// Removes one agent from the pool. Returns whether it was present.
    pub fn remove(&mut self, id: AgentId) -> bool {
        match self.ids.iter().position(|&candidate| candidate == id) {
            Some(index) => {
                self.ids.remove(index);
                true
            }
            None => false,
        }
    }

    /// Splits the pool around `payload`, dropping useless agents for good.
    ///
    /// The scan stops at the first agent whose leftmost reach is at or beyond
    /// the payload: every later agent is unreachable too because of the sort
    /// order.
    pub fn partition(&mut self, agents: &[Agent], payload: f64) -> ActiveRegion {
        let mut region = ActiveRegion::default();
        let mut kept = 0;
        let mut scanned = 0;

        while scanned < self.ids.len() {
            let id = self.ids[scanned];
            let agent = &agents[id];

            if agent.rightmost_reach() <= payload {
                scanned += 1;
                continue;
            }
            if agent.position() <= payload {
                region.left.push(id);
            } else if agent.leftmost_reach() < payload {
                region.right.push(id);
            } else {
                break;
            }

            self.ids[kept] = id;
            kept += 1;
            scanned += 1;
        }

        self.ids.drain(kept..scanned);
        region
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::sort_by_leftmost_reach;

    fn sample_agents() -> Vec<Agent> {
        let mut agents: Vec<Agent> = [
            (-2.0, 2.0),
            (-2.0, 1.0),
            (-2.0, 0.0),
            (-1.0, 1.0),
            (-1.0, 2.0),
            (-0.5, 3.0),
            (0.0, 0.0),
            (0.0, 2.0),
            (1.0, 1.0),
            (1.0, 2.0),
            (2.0, 2.0),
            (2.0, 1.0),
            (5.0, 2.0),
            (6.0, 2.0),
        ]
        .into_iter()
        .map(|(x, e)| Agent::new(x, e))
        .collect();
        sort_by_leftmost_reach(&mut agents);
        agents
    }

    fn values(agents: &[Agent], ids: &[AgentId]) -> Vec<(f64, f64)> {
        ids.iter()
            .map(|&id| (agents[id].position(), agents[id].energy()))
            .collect()
    }

    #[test]
    fn partition_splits_left_and_right() {
        let agents = sample_agents();
        let mut pool = CandidatePool::new(&agents);
        let region = pool.partition(&agents, 0.0);

        assert_eq!(
            values(&agents, &region.left),
            vec![(-0.5, 3.0), (-1.0, 2.0), (0.0, 2.0)]
        );
        assert_eq!(values(&agents, &region.right), vec![(1.0, 2.0)]);
    }

    #[test]
    fn partition_prunes_useless_agents() {
        let agents = sample_agents();
        let mut pool = CandidatePool::new(&agents);
        pool.partition(&agents, 0.0);

        assert_eq!(
            values(&agents, pool.ids()),
            vec![
                (-0.5, 3.0),
                (-1.0, 2.0),
                (0.0, 2.0),
                (1.0, 2.0),
                (1.0, 1.0),
                (2.0, 2.0),
                (2.0, 1.0),
                (5.0, 2.0),
                (6.0, 2.0),
            ]
        );
        for &id in pool.ids() {
            assert!(agents[id].rightmost_reach() > 0.0);
        }
    }

    #[test]
    fn pruning_is_idempotent() {
        let agents = sample_agents();
        let mut pool = CandidatePool::new(&agents);
        let first = pool.partition(&agents, 0.0);
        let after_first = pool.clone();
        let second = pool.partition(&agents, 0.0);

        assert_eq!(first, second);
        assert_eq!(pool, after_first);
    }

    #[test]
    fn useless_agents_never_reported() {
        let agents = sample_agents();
        let payload = 1.5;
        let mut pool = CandidatePool::new(&agents);
        let region = pool.partition(&agents, payload);

        for id in region.all() {
            assert!(agents[id].rightmost_reach() > payload);
        }
        let active = values(&agents, &region.all());
        assert!(!active.contains(&(5.0, 2.0)));
        assert!(!active.contains(&(6.0, 2.0)));
        assert!(!values(&agents, pool.ids()).contains(&(-1.0, 2.0)));
    }

    #[test]
    fn scan_stops_at_first_unreachable_agent() {
        let agents = vec![Agent::new(5.0, 1.0), Agent::new(6.0, 1.5), Agent::new(0.0, 5.0)];
        let mut pool = CandidatePool::from_ids(&agents, [0, 1, 2]);
        assert_eq!(pool.ids(), &[2, 0, 1]);

        let region = pool.partition(&agents, 3.0);
        assert_eq!(region.left, vec![2]);
        assert!(region.right.is_empty());
        assert_eq!(pool.ids(), &[2, 0, 1]);
    }

    #[test]
    fn pool_from_instance_skips_exhausted_agents() {
        let agents = vec![Agent::new(0.5, 1.0), Agent::new(1.0, 1.0)];
        let mut instance = RelayInstance::new(agents, 0.0);
        instance.move_agent(0);
        let pool = CandidatePool::from_instance(&instance);
        assert_eq!(pool.ids(), &[1]);
    }

    #[test]
    fn remove_drops_single_id() {
        let agents = vec![Agent::new(0.0, 1.0), Agent::new(0.0, 1.0)];
        let mut pool = CandidatePool::new(&agents);
        assert!(pool.remove(1));
        assert!(!pool.remove(1));
        assert_eq!(pool.ids(), &[0]);
    }
}
