use thiserror::Error;

pub type Result<T> = std::result::Result<T, IpfsError>;

#[derive(Debug, Error)]
pub enum IpfsError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Gateway error (status {status}): {message}")]
    Gateway { status: u16, message: String },
}

impl From<reqwest::Error> for IpfsError {
    fn from(err: reqwest::Error) -> Self {
        IpfsError::Network(err.to_string())
    }
}
