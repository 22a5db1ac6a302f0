//! Mutable relay state over a fixed set of agents.

use std::fmt::Display;

use super::agent::{Agent, AgentId};

/// O(1) undo record: the payload position and one agent's exhaustion flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    payload: f64,
    agent: AgentId,
    exhausted: bool,
}

impl Snapshot {
    pub const fn payload(&self) -> f64 {
        self.payload
    }

    pub const fn agent(&self) -> AgentId {
        self.agent
    }
}

/// Payload relay simulation over a fixed, ordered set of agents.
///
/// # Invariants
///
/// - The agent list is set at construction and never reordered; agents are
///   identified by their index ([`AgentId`]).
/// - The payload only moves forward under [`move_agent`](Self::move_agent).
/// - [`reset`](Self::reset) restores the construction-time state, so one
///   instance can be reused across many certificate attempts.
///
/// # Example
///
/// ```
/// use ddlp::instance::{Agent, RelayInstance};
///
/// let mut relay = RelayInstance::new(vec![Agent::new(0.5, 1.0), Agent::new(2.0, 1.0)], 0.0);
/// assert!(relay.move_agent(0));
/// assert_eq!(relay.payload(), 0.5);
/// assert!(!relay.move_agent(0)); // already exhausted
/// relay.reset();
/// assert_eq!(relay.payload(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RelayInstance {
    agents: Vec<Agent>,
    payload: f64,
    origin: f64,
    exhausted: Vec<bool>,
}

impl RelayInstance {
    /// Creates an instance with the payload at `source` and every agent fresh.
    pub fn new(agents: Vec<Agent>, source: f64) -> Self {
        let exhausted = vec![false; agents.len()];
        Self {
            agents,
            payload: source,
            origin: source,
            exhausted,
        }
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Returns the agent with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range.
    pub fn agent(&self, id: AgentId) -> Agent {
        self.agents[id]
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Current payload position.
    pub fn payload(&self) -> f64 {
        self.payload
    }

    /// Payload position at construction.
    pub fn origin(&self) -> f64 {
        self.origin
    }

    pub fn is_exhausted(&self, id: AgentId) -> bool {
        self.exhausted[id]
    }

    /// Ids of agents that still have their energy.
    pub fn available(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.exhausted
            .iter()
            .enumerate()
            .filter(|(_, used)| !**used)
            .map(|(id, _)| id)
    }

    /// Lets agent `id` walk to the payload and push it as far right as its
    /// remaining energy allows.
    ///
    /// Silently does nothing when the agent is exhausted or cannot strictly
    /// reach the payload. Returns whether the payload moved.
    pub fn move_agent(&mut self, id: AgentId) -> bool {
        if self.exhausted[id] {
            return false;
        }
        let agent = self.agents[id];
        if !agent.can_push(self.payload) {
            return false;
        }
        self.payload = agent.push_from(self.payload);
        self.exhausted[id] = true;
        true
    }

    /// Applies [`move_agent`](Self::move_agent) to each id in order.
    pub fn move_sequence(&mut self, ids: &[AgentId]) {
        for &id in ids {
            self.move_agent(id);
        }
    }

    /// Restores the payload to its origin and refills every agent.
    pub fn reset(&mut self) {
        self.payload = self.origin;
        self.exhausted.iter_mut().for_each(|used| *used = false);
    }

    /// Captures what a move of agent `id` can change.
    pub fn snapshot(&self, id: AgentId) -> Snapshot {
        Snapshot {
            payload: self.payload,
            agent: id,
            exhausted: self.exhausted[id],
        }
    }

    /// Rolls back to a snapshot taken by [`snapshot`](Self::snapshot).
    ///
    /// Snapshots of a move sequence must be restored in reverse order.
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.payload = snapshot.payload;
        self.exhausted[snapshot.agent] = snapshot.exhausted;
    }
}

impl Display for RelayInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "payload {} (origin {})", self.payload, self.origin)?;
        for (id, agent) in self.agents.iter().enumerate() {
            write!(
                f,
                "\nagent {}: {} exhausted: {}",
                id, agent, self.exhausted[id]
            )?;
        }
        Ok(())
    }
}
