use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ExperimentError {
    #[error("Line width must be positive and finite, got {0}")]
    InvalidWidth(f64),

    #[error("Epsilon {epsilon} leaves no room between source and target on a line of width {width}")]
    InvalidEpsilon { width: f64, epsilon: f64 },

    #[error("Agent radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    #[error("At least one trial is required")]
    NoTrials,

    #[error("Density grid needs max_agents > min_agents, got {min_agents}..{max_agents}")]
    EmptyGrid { min_agents: usize, max_agents: usize },

    #[error("Density grid radius range is invalid: min {min}, max {max}")]
    InvalidRadiusRange { min: f64, max: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_epsilon_display() {
        let e = ExperimentError::InvalidEpsilon {
            width: 1.0,
            epsilon: 0.5,
        };
        assert_eq!(
            e.to_string(),
            "Epsilon 0.5 leaves no room between source and target on a line of width 1"
        );
    }

    #[test]
    fn no_trials_display() {
        assert_eq!(
            ExperimentError::NoTrials.to_string(),
            "At least one trial is required"
        );
    }

    #[test]
    fn empty_grid_display() {
        let e = ExperimentError::EmptyGrid {
            min_agents: 5,
            max_agents: 5,
        };
        assert!(e.to_string().contains("5..5"));
    }
}
