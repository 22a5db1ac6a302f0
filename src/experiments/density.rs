//! Experiments evaluated over a `(radius, agents)` grid.

use std::fmt;

use super::config::{ExperimentConfig, GridConfig};
use super::error::ExperimentError;
use super::suite::Experiment;

/// Values of one experiment over a density grid.
///
/// `values[i][j]` was measured with radius `radii[i]` and `agents[j]` agents.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DensityGrid {
    pub experiment: Experiment,
    pub radii: Vec<f64>,
    pub agents: Vec<usize>,
    pub values: Vec<Vec<f64>>,
}

impl DensityGrid {
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.values.get(row)?.get(col).copied()
    }

    pub fn rows(&self) -> usize {
        self.radii.len()
    }

    pub fn cols(&self) -> usize {
        self.agents.len()
    }
}

impl fmt::Display for DensityGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>8}", self.experiment.name())?;
        for n in &self.agents {
            write!(f, " {n:>6}")?;
        }
        for (radius, row) in self.radii.iter().zip(&self.values) {
            writeln!(f)?;
            write!(f, "{radius:>8.4}")?;
            for value in row {
                write!(f, " {value:>6.3}")?;
            }
        }
        Ok(())
    }
}

/// Evaluates `experiment` on every cell of `grid`.
///
/// Each cell runs `base` with the cell's radius and agent count; the other
/// parameters (width, epsilon, trials, seed, node budget) come from `base`.
pub fn density_grid(
    grid: &GridConfig,
    base: &ExperimentConfig,
    experiment: Experiment,
) -> Result<DensityGrid, ExperimentError> {
    grid.validate()?;
    let size = grid.size();
    let radii: Vec<f64> = (0..size).map(|i| grid.radius(i)).collect();
    let agents: Vec<usize> = (0..size).map(|j| grid.agents(j)).collect();

    let mut values = Vec::with_capacity(size);
    for (i, &radius) in radii.iter().enumerate() {
        let row = agents
            .iter()
            .map(|&n| {
                experiment.evaluate(&ExperimentConfig {
                    radius,
                    agents: n,
                    ..base.clone()
                })
            })
            .collect::<Result<Vec<f64>, ExperimentError>>()?;
        tracing::info!(
            experiment = experiment.name(),
            row = i + 1,
            rows = size,
            radius,
            "density grid row finished"
        );
        values.push(row);
    }

    Ok(DensityGrid {
        experiment,
        radii,
        agents,
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> ExperimentConfig {
        ExperimentConfig {
            trials: 5,
            seed: 2,
            ..ExperimentConfig::default()
        }
    }

    #[test]
    fn grid_shape_and_axes() {
        let grid = GridConfig {
            min_radius: 0.0,
            max_radius: 0.3,
            min_agents: 2,
            max_agents: 5,
        };
        let density = density_grid(&grid, &base(), Experiment::Sweep).unwrap();
        assert_eq!(density.rows(), 3);
        assert_eq!(density.cols(), 3);
        assert_eq!(density.agents, vec![2, 3, 4]);
        assert_eq!(density.radii, vec![grid.radius(0), grid.radius(1), grid.radius(2)]);
        for row in &density.values {
            assert!(row.iter().all(|v| (0.0..=1.0).contains(v)));
        }
        assert_eq!(density.get(3, 0), None);
    }

    #[test]
    fn cells_match_direct_evaluation() {
        let grid = GridConfig {
            min_radius: 0.0,
            max_radius: 0.4,
            min_agents: 3,
            max_agents: 5,
        };
        let density = density_grid(&grid, &base(), Experiment::Connected).unwrap();
        let cell = ExperimentConfig {
            radius: grid.radius(1),
            agents: 4,
            ..base()
        };
        assert_eq!(
            density.get(1, 1),
            Some(Experiment::Connected.evaluate(&cell).unwrap())
        );
    }

    #[test]
    fn invalid_grid_or_base_is_rejected() {
        let grid = GridConfig {
            min_agents: 4,
            max_agents: 2,
            ..GridConfig::default()
        };
        assert!(matches!(
            density_grid(&grid, &base(), Experiment::Sweep),
            Err(ExperimentError::EmptyGrid { .. })
        ));

        let grid = GridConfig {
            min_agents: 1,
            max_agents: 2,
            ..GridConfig::default()
        };
        let bad = ExperimentConfig {
            trials: 0,
            ..base()
        };
        assert_eq!(
            density_grid(&grid, &bad, Experiment::Sweep),
            Err(ExperimentError::NoTrials)
        );
    }

    #[test]
    fn display_layout() {
        let density = DensityGrid {
            experiment: Experiment::Solvable,
            radii: vec![0.25, 0.5],
            agents: vec![3, 4],
            values: vec![vec![0.0, 0.5], vec![1.0, 0.75]],
        };
        assert_eq!(
            density.to_string(),
            "solvable      3      4\n  0.2500  0.000  0.500\n  0.5000  1.000  0.750"
        );
    }
}
