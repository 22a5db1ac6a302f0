use thiserror::Error;

/// Errors raised while building agents or loading agent lists.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InstanceError {
    #[error("Agent energy must be a finite non-negative number, got {0}")]
    InvalidEnergy(f64),

    #[error("Agent position must be finite, got {0}")]
    InvalidPosition(f64),

    #[error("Line {line}: expected `position,energy`, got {content:?}")]
    Parse { line: usize, content: String },

    #[error("Line {line}: {source}")]
    InvalidAgent {
        line: usize,
        #[source]
        source: Box<InstanceError>,
    },

    #[error("Cannot read agent file: {0}")]
    Io(String),
}

impl From<std::io::Error> for InstanceError {
    fn from(err: std::io::Error) -> Self {
        InstanceError::Io(err.to_string())
    }
}
