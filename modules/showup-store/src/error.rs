use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Codec error: {0}")]
    Codec(#[from] serde_json::Error),
}
