//! Configuration for randomized experiments.

use super::error::ExperimentError;
use crate::algorithms::SearchConfig;

/// Parameters of one experiment cell.
///
/// Instances are `agents` agents placed uniformly on `[0, width)` with
/// energies uniform on `[0, radius)`. The payload starts at `epsilon` and must
/// reach `width - epsilon`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperimentConfig {
    /// Length of the line segment agents are placed on.
    pub width: f64,
    /// Margin between the segment ends and the source/target.
    pub epsilon: f64,
    /// Upper bound (exclusive) of agent energies.
    pub radius: f64,
    /// Number of agents per instance.
    pub agents: usize,
    /// Number of independent instances.
    pub trials: usize,
    /// Base seed. Trial `i` uses `seed + i`.
    pub seed: u64,
    /// Node budget of every exhaustive search. `None` is unbounded.
    pub node_budget: Option<u64>,
}

impl ExperimentConfig {
    pub fn source(&self) -> f64 {
        self.epsilon
    }

    pub fn target(&self) -> f64 {
        self.width - self.epsilon
    }

    /// Search settings used by the solvability experiments.
    pub fn search(&self) -> SearchConfig {
        SearchConfig {
            node_budget: self.node_budget,
            ..SearchConfig::default()
        }
    }

    pub fn validate(&self) -> Result<(), ExperimentError> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(ExperimentError::InvalidWidth(self.width));
        }
        if !self.epsilon.is_finite() || self.epsilon < 0.0 || self.source() >= self.target() {
            return Err(ExperimentError::InvalidEpsilon {
                width: self.width,
                epsilon: self.epsilon,
            });
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ExperimentError::InvalidRadius(self.radius));
        }
        if self.trials == 0 {
            return Err(ExperimentError::NoTrials);
        }
        Ok(())
    }
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            width: 1.0,
            epsilon: 0.05,
            radius: 0.2,
            agents: 10,
            trials: 100,
            seed: 0,
            node_budget: None,
        }
    }
}

/// Axes of a density sweep over `(radius, agents)`.
///
/// The grid is square with `max_agents - min_agents` rows and columns. Row `i`
/// uses radius `min_radius + (i + 1) * max_radius / rows`; column `j` uses
/// `min_agents + j` agents.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    pub min_radius: f64,
    pub max_radius: f64,
    pub min_agents: usize,
    pub max_agents: usize,
}

impl GridConfig {
    /// Number of rows, which is also the number of columns.
    pub fn size(&self) -> usize {
        self.max_agents.saturating_sub(self.min_agents)
    }

    pub fn radius(&self, row: usize) -> f64 {
        self.min_radius + (row + 1) as f64 * self.max_radius / self.size() as f64
    }

    pub fn agents(&self, col: usize) -> usize {
        self.min_agents + col
    }

    pub fn validate(&self) -> Result<(), ExperimentError> {
        if self.max_agents <= self.min_agents {
            return Err(ExperimentError::EmptyGrid {
                min_agents: self.min_agents,
                max_agents: self.max_agents,
            });
        }
        if !self.min_radius.is_finite()
            || !self.max_radius.is_finite()
            || self.min_radius < 0.0
            || self.max_radius <= 0.0
        {
            return Err(ExperimentError::InvalidRadiusRange {
                min: self.min_radius,
                max: self.max_radius,
            });
        }
        Ok(())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            min_radius: 0.0,
            max_radius: 0.5,
            min_agents: 1,
            max_agents: 21,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = ExperimentConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.source(), 0.05);
        assert_eq!(cfg.target(), 0.95);
        assert_eq!(cfg.search().node_budget, None);
        assert!(cfg.search().forced_descent);
    }

    #[test]
    fn epsilon_must_leave_room() {
        let cfg = ExperimentConfig {
            epsilon: 0.5,
            ..ExperimentConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ExperimentError::InvalidEpsilon {
                width: 1.0,
                epsilon: 0.5
            })
        );
    }

    #[test]
    fn radius_and_trials_are_checked() {
        let cfg = ExperimentConfig {
            radius: 0.0,
            ..ExperimentConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ExperimentError::InvalidRadius(0.0)));

        let cfg = ExperimentConfig {
            trials: 0,
            ..ExperimentConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ExperimentError::NoTrials));
    }

    #[test]
    fn grid_axes() {
        let grid = GridConfig {
            min_radius: 0.0,
            max_radius: 1.0,
            min_agents: 2,
            max_agents: 6,
        };
        assert!(grid.validate().is_ok());
        assert_eq!(grid.size(), 4);
        assert_eq!(grid.radius(0), 0.25);
        assert_eq!(grid.radius(3), 1.0);
        assert_eq!(grid.agents(0), 2);
        assert_eq!(grid.agents(3), 5);
    }

    #[test]
    fn empty_grid_is_rejected() {
        let grid = GridConfig {
            min_agents: 3,
            max_agents: 3,
            ..GridConfig::default()
        };
        assert!(matches!(grid.validate(), Err(ExperimentError::EmptyGrid { .. })));
    }
}
