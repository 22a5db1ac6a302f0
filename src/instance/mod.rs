//! Agents and the relay state machine they act on.

mod agent;
mod error;
mod loader;
mod relay;

pub use agent::{sort_by_leftmost_reach, upper_bound, Agent, AgentId};
pub use error::InstanceError;
pub use loader::{load_agents, parse_agents};
pub use relay::{RelayInstance, Snapshot};
