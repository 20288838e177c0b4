//! Generic, domain-agnostic key-value entity store seam.
//!
//! Stores opaque JSON entities under `(EntityKind, key)`. Zero knowledge of
//! signals or projection logic; consumers provide types that serialize to
//! `serde_json::Value`. The store is assumed durable and read-after-write
//! consistent within a single process. Store failures are fatal to the
//! projection path, never retried here.

pub mod error;
pub mod memory;
pub mod store;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use store::{load_as, save_as, EntityStore};
