use thiserror::Error;

/// Failure to parse a chain identifier from its hex form.
#[derive(Debug, Error)]
pub enum IdError {
    #[error("Invalid identifier length: expected {expected} bytes, got {got}")]
    Length { expected: usize, got: usize },

    #[error("Invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),
}
