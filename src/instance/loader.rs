//! Agent list files: one `position,energy` pair per line.

use std::path::Path;

use super::agent::{sort_by_leftmost_reach, Agent};
use super::error::InstanceError;

/// Parses an agent list and sorts it by leftmost reach.
///
/// Blank lines are skipped. Any other row that is not two comma-separated
/// numbers aborts the whole parse.
pub fn parse_agents(text: &str) -> Result<Vec<Agent>, InstanceError> {
    let mut agents = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let row = raw.trim();
        if row.is_empty() {
            continue;
        }

        let parse_error = || InstanceError::Parse {
            line,
            content: raw.to_string(),
        };

        let mut fields = row.split(',').map(str::trim);
        let (Some(position), Some(energy), None) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(parse_error());
        };
        let position: f64 = position.parse().map_err(|_| parse_error())?;
        let energy: f64 = energy.parse().map_err(|_| parse_error())?;

        let agent = Agent::try_new(position, energy).map_err(|source| {
            InstanceError::InvalidAgent {
                line,
                source: Box::new(source),
            }
        })?;
        agents.push(agent);
    }

    sort_by_leftmost_reach(&mut agents);
    tracing::debug!(agents = agents.len(), "parsed agent list");
    Ok(agents)
}

/// Reads and parses an agent list file. See [`parse_agents`].
pub fn load_agents(path: impl AsRef<Path>) -> Result<Vec<Agent>, InstanceError> {
    let text = std::fs::read_to_string(path)?;
    parse_agents(&text)
}
