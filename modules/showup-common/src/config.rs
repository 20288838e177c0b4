use std::env;

/// Application configuration loaded from environment variables.
/// Everything has a default; nothing is required.
#[derive(Debug, Clone)]
pub struct Config {
    /// IPFS gateway base URL, without a trailing slash.
    pub ipfs_gateway: String,
    /// Timeout for a single metadata fetch, in seconds.
    pub fetch_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            ipfs_gateway: env::var("IPFS_GATEWAY")
                .unwrap_or_else(|_| "https://ipfs.io/ipfs".to_string())
                .trim_end_matches('/')
                .to_string(),
            fetch_timeout_secs: env::var("FETCH_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .expect("FETCH_TIMEOUT_SECS must be a number"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ipfs_gateway: "https://ipfs.io/ipfs".to_string(),
            fetch_timeout_secs: 30,
        }
    }
}
