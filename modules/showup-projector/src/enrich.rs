//! Best-effort metadata enrichment from IPFS.
//!
//! Event creators pin a `data.json` document under the CID they put on
//! chain. Enrichment fetches it once, at event creation, and extracts
//! optional string fields. Every failure mode (gateway unreachable, payload
//! not JSON, field missing or wrongly typed) degrades to an absent field,
//! never an error. Event creation does not wait on retries because there
//! are none.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use ipfs_client::{IpfsClient, IpfsError};

/// Placeholder shown for events whose metadata carries no image (or whose
/// metadata never arrived).
pub const DEFAULT_EVENT_IMAGE: &str =
    "https://ipfs.io/ipfs/bafybeibssbrlptcefbqfh4vpw2wlmqfj2kgxt3nil4yujxbmdznau3t5wi/event.png";

/// Fetch-by-path seam over the content store. Implemented by [`IpfsClient`]
/// and by test stubs.
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    async fn cat(&self, path: &str) -> Result<Vec<u8>, IpfsError>;
}

#[async_trait]
impl ContentFetcher for IpfsClient {
    async fn cat(&self, path: &str) -> Result<Vec<u8>, IpfsError> {
        IpfsClient::cat(self, path).await
    }
}

/// Descriptive fields extracted from a metadata document. `image` is the
/// raw path from the document, not yet resolved against the gateway.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventMetadata {
    pub name: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub image: Option<String>,
}

/// Single-shot metadata enricher.
pub struct Enricher {
    fetcher: Arc<dyn ContentFetcher>,
    gateway: String,
}

impl Enricher {
    pub fn new(fetcher: Arc<dyn ContentFetcher>, gateway: &str) -> Self {
        Self {
            fetcher,
            gateway: gateway.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch and parse `<cid>/data.json`. `None` means "no metadata", which
    /// is a degraded result, not an error.
    pub async fn enrich(&self, cid: &str) -> Option<EventMetadata> {
        let path = format!("{cid}/data.json");

        let bytes = match self.fetcher.cat(&path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(cid, error = %e, "Metadata fetch failed; event keeps defaults");
                return None;
            }
        };

        let value: Value = match serde_json::from_slice(&bytes) {
            Ok(value) => value,
            Err(e) => {
                warn!(cid, error = %e, "Metadata document is not valid JSON");
                return None;
            }
        };

        let Some(object) = value.as_object() else {
            debug!(cid, "Metadata document is not a JSON object");
            return None;
        };

        Some(EventMetadata {
            name: string_field(object, "name"),
            description: string_field(object, "description"),
            link: string_field(object, "link"),
            image: string_field(object, "image"),
        })
    }

    /// Resolve the event's image URL: the document's image path appended to
    /// the CID under the gateway, or the fixed placeholder when absent.
    pub fn image_url(&self, cid: &str, image_path: Option<&str>) -> String {
        match image_path {
            Some(path) => format!("{}/{cid}{path}", self.gateway),
            None => DEFAULT_EVENT_IMAGE.to_string(),
        }
    }
}

fn string_field(object: &Map<String, Value>, field: &str) -> Option<String> {
    object.get(field).and_then(Value::as_str).map(str::to_owned)
}
