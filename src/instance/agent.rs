//! Energy-bounded agents on the line.

use std::cmp::Ordering;
use std::fmt::Display;

use super::error::InstanceError;
use crate::connectivity::Interval;

/// Identity of an agent: its index in the canonical agent list of an instance.
///
/// Two agents with the same position and energy are still distinct agents,
/// each usable once, so identity is never derived from the agent's value.
pub type AgentId = usize;

/// Mobile agent with a position and an energy budget.
///
/// An agent can interact with the payload while the payload lies strictly
/// inside its reach window `[position - energy, position + energy]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    position: f64,
    energy: f64,
}

impl Agent {
    /// Creates an agent at `position` with `energy`.
    ///
    /// # Panics
    ///
    /// Panics if the position is not finite or the energy is negative or not finite.
    pub fn new(position: f64, energy: f64) -> Self {
        match Self::try_new(position, energy) {
            Ok(agent) => agent,
            Err(err) => panic!("{err}"),
        }
    }

    /// Creates an agent, rejecting non-finite positions and negative energies.
    pub fn try_new(position: f64, energy: f64) -> Result<Self, InstanceError> {
        if !position.is_finite() {
            return Err(InstanceError::InvalidPosition(position));
        }
        if !energy.is_finite() || energy < 0.0 {
            return Err(InstanceError::InvalidEnergy(energy));
        }
        Ok(Self { position, energy })
    }

    pub const fn position(&self) -> f64 {
        self.position
    }

    pub const fn energy(&self) -> f64 {
        self.energy
    }

    /// Leftmost payload position this agent can touch: `position - energy`.
    pub fn leftmost_reach(&self) -> f64 {
        self.position - self.energy
    }

    /// Rightmost payload position this agent can push to: `position + energy`.
    pub fn rightmost_reach(&self) -> f64 {
        self.position + self.energy
    }

    /// The closed reach window `[position - energy, position + energy]`.
    pub fn reach_window(&self) -> Interval {
        Interval::new(self.leftmost_reach(), self.rightmost_reach())
    }

    /// Distance the agent has to walk to meet a payload at `payload`.
    pub fn distance_to(&self, payload: f64) -> f64 {
        (payload - self.position).abs()
    }

    /// Energy left after walking to the payload. Positive iff the agent can push it.
    pub fn residual_capacity(&self, payload: f64) -> f64 {
        self.energy - self.distance_to(payload)
    }

    /// Returns true if the agent can move a payload at `payload` forward.
    ///
    /// Reaching the payload with exactly zero energy left does not count.
    pub fn can_push(&self, payload: f64) -> bool {
        self.distance_to(payload) < self.energy
    }

    /// Payload position after this agent pushes a payload at `payload`.
    ///
    /// Returns `payload` unchanged when the agent cannot push it.
    pub fn push_from(&self, payload: f64) -> f64 {
        let distance = self.distance_to(payload);
        if distance < self.energy {
            payload + (self.energy - distance)
        } else {
            payload
        }
    }

    /// Orders agents by leftmost reach, the canonical scanning order.
    pub fn cmp_by_leftmost_reach(&self, other: &Agent) -> Ordering {
        self.leftmost_reach().total_cmp(&other.leftmost_reach())
    }
}

impl Display for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.position, self.energy)
    }
}

/// Sorts agents by leftmost reach, keeping the input order among ties.
pub fn sort_by_leftmost_reach(agents: &mut [Agent]) {
    agents.sort_by(Agent::cmp_by_leftmost_reach);
}

/// Largest reach any agent could ever push the payload to.
///
/// Returns `0.0` for an empty list.
pub fn upper_bound(agents: &[Agent]) -> f64 {
    agents
        .iter()
        .map(Agent::rightmost_reach)
        .reduce(f64::max)
        .unwrap_or(0.0)
}
