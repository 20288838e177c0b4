pub mod error;

pub use error::{IpfsError, Result};

use std::time::Duration;

use tracing::debug;

/// Client for a path-style IPFS gateway (`<gateway>/<cid>/<path>`).
pub struct IpfsClient {
    client: reqwest::Client,
    gateway: String,
}

impl IpfsClient {
    pub fn new(gateway: &str, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            gateway: gateway.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the raw bytes of a content path (e.g. `Qm.../data.json`).
    pub async fn cat(&self, path: &str) -> Result<Vec<u8>> {
        let url = self.resource_url(path);
        debug!(%url, "Fetching content from gateway");

        let resp = self.client.get(&url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(IpfsError::Gateway {
                status: status.as_u16(),
                message,
            });
        }

        Ok(resp.bytes().await?.to_vec())
    }

    /// The absolute gateway URL for a content path.
    pub fn resource_url(&self, path: &str) -> String {
        format!("{}/{}", self.gateway, path.trim_start_matches('/'))
    }
}
