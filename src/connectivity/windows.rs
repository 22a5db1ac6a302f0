//! Interaction windows derived from agents.

use super::error::ConnectivityError;
use super::interval::Interval;
use crate::instance::Agent;

/// Symmetric reach windows `[x - e, x + e]`, one per agent.
pub fn symmetric_windows(agents: &[Agent]) -> Vec<Interval> {
    agents.iter().map(Agent::reach_window).collect()
}

/// Asymmetric windows `[x - a·e, x + (1 - 2a)·e]`, one per agent.
///
/// `a` is the fraction of its energy an agent spends walking back to fetch
/// the payload. `a = 0` gives `[x, x + e]`, `a = 1` collapses every window to
/// the point `x - e`.
pub fn asymmetric_windows(agents: &[Agent], a: f64) -> Result<Vec<Interval>, ConnectivityError> {
    if !(0.0..=1.0).contains(&a) {
        return Err(ConnectivityError::AsymmetryOutOfRange(a));
    }
    Ok(agents
        .iter()
        .map(|agent| {
            let x = agent.position();
            let e = agent.energy();
            Interval::new(x - a * e, x + (1.0 - 2.0 * a) * e)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetric_matches_reach_window() {
        let agents = [Agent::new(1.0, 0.5), Agent::new(3.0, 2.0)];
        assert_eq!(
            symmetric_windows(&agents),
            vec![Interval::new(0.5, 1.5), Interval::new(1.0, 5.0)]
        );
    }

    #[test]
    fn asymmetric_extremes() {
        let agents = [Agent::new(2.0, 1.0)];
        assert_eq!(
            asymmetric_windows(&agents, 0.0).unwrap(),
            vec![Interval::new(2.0, 3.0)]
        );
        assert_eq!(
            asymmetric_windows(&agents, 0.5).unwrap(),
            vec![Interval::new(1.5, 2.0)]
        );
        assert_eq!(
            asymmetric_windows(&agents, 1.0).unwrap(),
            vec![Interval::new(1.0, 1.0)]
        );
    }

    #[test]
    fn asymmetry_outside_unit_range_is_rejected() {
        let agents = [Agent::new(0.0, 1.0)];
        assert_eq!(
            asymmetric_windows(&agents, -0.1),
            Err(ConnectivityError::AsymmetryOutOfRange(-0.1))
        );
        assert!(asymmetric_windows(&agents, f64::NAN).is_err());
    }
}
