//! Interval connectivity of agent reach windows.

mod error;
mod graph;
mod interval;
mod interval_set;
mod windows;

pub use error::ConnectivityError;
pub use graph::IntervalGraph;
pub use interval::Interval;
pub use interval_set::IntervalSet;
pub use windows::{asymmetric_windows, symmetric_windows};
