use thiserror::Error;

/// Everything here is recoverable and surfaced to the user as a plain message.
#[derive(Debug, Error)]
pub enum EstimateError {
    #[error("invalid charge request: {0}")]
    InvalidInput(String),

    /// Structurally impossible while the band table covers 0-100%, but kept as
    /// an explicit result so a future table edit cannot turn into a panic.
    #[error("SOC range {start}-{end}% does not overlap any charging band")]
    NoOverlap { start: f64, end: f64 },

    #[error("invalid cost input: {0}")]
    InvalidCostInput(String),
}
