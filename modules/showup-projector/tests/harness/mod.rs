//! Shared test fixtures: in-memory wiring and canned signals.

use std::sync::Arc;

use async_trait::async_trait;

use ipfs_client::IpfsError;
use showup_common::{Address, Config, EventId, Signal};
use showup_projector::{ContentFetcher, Pipeline, Projector};
use showup_store::MemoryStore;

/// Fetcher whose gateway is always unreachable.
pub struct FailingFetcher;

#[async_trait]
impl ContentFetcher for FailingFetcher {
    async fn cat(&self, _path: &str) -> Result<Vec<u8>, IpfsError> {
        Err(IpfsError::Network("gateway unreachable".to_string()))
    }
}

/// Fetcher that returns the same bytes for every path.
pub struct StaticFetcher(pub Vec<u8>);

#[async_trait]
impl ContentFetcher for StaticFetcher {
    async fn cat(&self, _path: &str) -> Result<Vec<u8>, IpfsError> {
        Ok(self.0.clone())
    }
}

pub fn pipeline_with(store: Arc<MemoryStore>, fetcher: Arc<dyn ContentFetcher>) -> Pipeline {
    Pipeline::new(Projector::new(store, fetcher, &Config::default()))
}

pub fn event_id(n: u8) -> EventId {
    EventId::new([n; 32])
}

pub fn address(n: u8) -> Address {
    Address::new([n; 20])
}

pub fn created(event_id: EventId, owner: Address, max_capacity: u64) -> Signal {
    Signal::EventCreated {
        event_id,
        creator_address: owner,
        event_timestamp: 1_000,
        max_capacity,
        deposit: 5,
        event_data_cid: "Qm123".to_string(),
    }
}

pub fn rsvp(event_id: EventId, attendee_address: Address) -> Signal {
    Signal::NewRsvp {
        event_id,
        attendee_address,
    }
}

pub fn confirmed(event_id: EventId, attendee_address: Address) -> Signal {
    Signal::ConfirmedAttendee {
        event_id,
        attendee_address,
    }
}

pub fn paid_out(event_id: EventId) -> Signal {
    Signal::DepositsPaidOut { event_id }
}
