use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConnectivityError {
    #[error("Asymmetry parameter must lie in [0, 1], got {0}")]
    AsymmetryOutOfRange(f64),
}
