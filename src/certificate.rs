//! Certificates: ordered agent sequences that relay the payload.

use std::fmt::Display;
use std::ops::Deref;

use thiserror::Error;

use crate::instance::{AgentId, RelayInstance};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CertificateError {
    #[error("Invalid certificate digit '{found}' at position {position}")]
    InvalidDigit { position: usize, found: char },

    #[error("Agent {agent} does not exist in an instance of {len} agents")]
    UnknownAgent { agent: AgentId, len: usize },

    #[error("Agent {0} appears more than once in the certificate")]
    RepeatedAgent(AgentId),
}

/// Ordered sequence of agent ids.
///
/// A certificate is valid for a target `T` iff replaying it from the source
/// with [`RelayInstance::move_sequence`] leaves the payload at or beyond `T`.
/// Agents that cannot push when their turn comes are skipped silently, so any
/// sequence of known ids is replayable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Certificate(Vec<AgentId>);

impl Certificate {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, agent: AgentId) {
        self.0.push(agent);
    }

    pub fn pop(&mut self) -> Option<AgentId> {
        self.0.pop()
    }

    pub fn into_inner(self) -> Vec<AgentId> {
        self.0
    }

    /// Checks that every id exists in an instance of `len` agents and that no
    /// id is repeated.
    pub fn check(&self, len: usize) -> Result<(), CertificateError> {
        let mut seen = vec![false; len];
        for &agent in &self.0 {
            if agent >= len {
                return Err(CertificateError::UnknownAgent { agent, len });
            }
            if std::mem::replace(&mut seen[agent], true) {
                return Err(CertificateError::RepeatedAgent(agent));
            }
        }
        Ok(())
    }

    /// Final payload position after replaying the certificate from the source.
    ///
    /// The instance is reset before and after the replay.
    ///
    /// # Panics
    ///
    /// Panics if the certificate names an agent the instance does not have.
    pub fn reach(&self, instance: &mut RelayInstance) -> f64 {
        instance.reset();
        instance.move_sequence(&self.0);
        let reach = instance.payload();
        instance.reset();
        reach
    }

    /// Returns true if replaying the certificate delivers the payload to `target`.
    pub fn is_valid_for(&self, instance: &mut RelayInstance, target: f64) -> bool {
        self.reach(instance) >= target
    }

    /// Replays the certificate from the source, recording every step.
    ///
    /// The instance is reset before and after the replay.
    pub fn trace(&self, instance: &mut RelayInstance) -> Trace {
        instance.reset();
        let steps = self
            .0
            .iter()
            .map(|&agent| {
                let before = instance.payload();
                instance.move_agent(agent);
                TraceStep {
                    agent,
                    position: instance.agent(agent).position(),
                    energy: instance.agent(agent).energy(),
                    before,
                    after: instance.payload(),
                }
            })
            .collect();
        instance.reset();
        Trace { steps }
    }

    /// Encodes the certificate as one decimal digit per agent.
    ///
    /// Returns `None` if an id does not fit in a single digit.
    pub fn to_digits(&self) -> Option<String> {
        self.0
            .iter()
            .map(|&agent| u32::try_from(agent).ok().and_then(|a| char::from_digit(a, 10)))
            .collect()
    }

    /// Decodes a digit string produced by [`to_digits`](Self::to_digits).
    pub fn from_digits(digits: &str) -> Result<Self, CertificateError> {
        digits
            .chars()
            .enumerate()
            .map(|(position, found)| {
                found
                    .to_digit(10)
                    .map(|digit| digit as AgentId)
                    .ok_or(CertificateError::InvalidDigit { position, found })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl Deref for Certificate {
    type Target = [AgentId];

    fn deref(&self) -> &[AgentId] {
        &self.0
    }
}

impl From<Vec<AgentId>> for Certificate {
    fn from(ids: Vec<AgentId>) -> Self {
        Self(ids)
    }
}

impl FromIterator<AgentId> for Certificate {
    fn from_iter<I: IntoIterator<Item = AgentId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Display for Certificate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// One replayed move.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraceStep {
    pub agent: AgentId,
    pub position: f64,
    pub energy: f64,
    /// Payload position before the move.
    pub before: f64,
    /// Payload position after the move. Equal to `before` when the agent could not push.
    pub after: f64,
}

impl TraceStep {
    pub fn displacement(&self) -> f64 {
        self.after - self.before
    }

    /// How far behind the agent the payload was, as a fraction of its energy.
    ///
    /// `0.0` when the payload was ahead of the agent or out of its reach.
    pub fn back_fraction(&self) -> f64 {
        let fraction = (self.position - self.before) / self.energy;
        if (0.0..=1.0).contains(&fraction) {
            fraction
        } else {
            0.0
        }
    }
}

/// Step-by-step record of a certificate replay.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trace {
    steps: Vec<TraceStep>,
}

impl Trace {
    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    /// Payload position after the last step, if any.
    pub fn reach(&self) -> Option<f64> {
        self.steps.last().map(|step| step.after)
    }

    /// Each push as a fraction of `radius`, rounded to two decimals.
    pub fn displacements(&self, radius: f64) -> Vec<f64> {
        self.steps
            .iter()
            .map(|step| round2(step.displacement() / radius))
            .collect()
    }

    /// [`TraceStep::back_fraction`] of every step, rounded to two decimals.
    pub fn back_fractions(&self) -> Vec<f64> {
        self.steps
            .iter()
            .map(|step| round2(step.back_fraction()))
            .collect()
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Agent;

    fn scenario() -> RelayInstance {
        RelayInstance::new(
            vec![
                Agent::new(0.1, 0.1),
                Agent::new(0.2, 0.1),
                Agent::new(0.3, 0.4),
                Agent::new(0.4, 0.6),
            ],
            0.0,
        )
    }

    #[test]
    fn reach_replays_and_resets() {
        let mut instance = scenario();
        let certificate = Certificate::from(vec![2, 0, 1, 3]);
        assert_eq!(certificate.reach(&mut instance), 0.8);
        assert_eq!(instance.payload(), 0.0);
        assert!(certificate.is_valid_for(&mut instance, 0.8));
        assert!(!certificate.is_valid_for(&mut instance, 0.81));
    }

    #[test]
    fn order_matters() {
        let mut instance = scenario();
        assert_eq!(Certificate::from(vec![2, 3]).reach(&mut instance), 0.4);
        assert!(Certificate::from(vec![3, 2]).reach(&mut instance) < 0.5);
    }

    #[test]
    fn empty_certificate_reaches_source() {
        let mut instance = scenario();
        assert_eq!(Certificate::new().reach(&mut instance), 0.0);
        assert!(Certificate::new().is_valid_for(&mut instance, 0.0));
    }

    #[test]
    fn digits_both_ways() {
        let certificate = Certificate::from(vec![2, 0, 1, 3]);
        assert_eq!(certificate.to_digits().as_deref(), Some("2013"));
        assert_eq!(Certificate::from_digits("2013"), Ok(certificate));
        assert_eq!(Certificate::from_digits(""), Ok(Certificate::new()));
        assert_eq!(Certificate::from(vec![12]).to_digits(), None);
    }

    #[test]
    fn bad_digit_is_reported() {
        assert_eq!(
            Certificate::from_digits("20x3"),
            Err(CertificateError::InvalidDigit {
                position: 2,
                found: 'x'
            })
        );
    }

    #[test]
    fn check_rejects_unknown_and_repeated_agents() {
        assert_eq!(
            Certificate::from(vec![0, 4]).check(4),
            Err(CertificateError::UnknownAgent { agent: 4, len: 4 })
        );
        assert_eq!(
            Certificate::from(vec![1, 0, 1]).check(4),
            Err(CertificateError::RepeatedAgent(1))
        );
        assert_eq!(Certificate::from(vec![3, 2, 1, 0]).check(4), Ok(()));
    }

    #[test]
    fn trace_records_each_move() {
        let mut instance = RelayInstance::new(vec![Agent::new(1.0, 2.0), Agent::new(2.0, 2.0)], 0.0);
        let trace = Certificate::from(vec![0, 1]).trace(&mut instance);

        // Agent 0 walks back 1 and pushes to 1.0; agent 1 walks back 1 and pushes to 2.0.
        assert_eq!(trace.reach(), Some(2.0));
        assert_eq!(trace.displacements(2.0), vec![0.5, 0.5]);
        assert_eq!(trace.back_fractions(), vec![0.5, 0.5]);
        assert_eq!(instance.payload(), 0.0);
    }

    #[test]
    fn back_fraction_is_zero_when_payload_ahead() {
        let mut instance = RelayInstance::new(vec![Agent::new(-1.0, 3.0)], 0.0);
        let trace = Certificate::from(vec![0]).trace(&mut instance);
        assert_eq!(trace.steps()[0].after, 2.0);
        assert_eq!(trace.back_fractions(), vec![0.0]);
    }

    #[test]
    fn error_display() {
        let e = CertificateError::RepeatedAgent(3);
        assert_eq!(e.to_string(), "Agent 3 appears more than once in the certificate");
    }
}
