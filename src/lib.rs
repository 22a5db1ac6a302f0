//! ddlp - Data Delivery on a Line by energy-bounded agents
//!
//! A payload sits at a source on the real line and must reach a target.
//! Agents with a position and an energy budget may each act once: walk to the
//! payload and carry it forward with whatever energy is left. This crate
//! decides whether a delivery order (a certificate) exists, builds orders
//! heuristically, analyses the connectivity of agent reach windows and runs
//! randomized experiments over all of the above.

pub mod algorithms;
pub mod certificate;
pub mod connectivity;
pub mod experiments;
pub mod instance;
pub mod region;

pub use algorithms::{Attempt, Solver, Verdict};
pub use certificate::{Certificate, CertificateError};
pub use instance::{Agent, AgentId, InstanceError, RelayInstance};
