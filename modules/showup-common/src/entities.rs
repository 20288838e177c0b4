//! Derived entity records — the queryable shape downstream layers read.
//!
//! Entities are owned by the entity store: every mutation is persisted
//! immediately, nothing lives only in memory. Counters are derived state,
//! recomputable by replaying the signal stream from scratch.

use serde::{Deserialize, Serialize};

use crate::types::{Address, EventId};

/// A participant, created lazily on first reference from any signal.
/// Counters only ever go up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub address: Address,
    pub total_rsvps: u64,
    pub total_attended_events: u64,
}

impl Account {
    pub const fn new(address: Address) -> Self {
        Self {
            address,
            total_rsvps: 0,
            total_attended_events: 0,
        }
    }
}

/// A tracked event. Created exactly once, by the creation signal; every
/// other handler requires it to already exist. `paid_out` moves false→true
/// at most once and never reverts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub event_owner: Address,
    pub event_timestamp: u64,
    pub max_capacity: u64,
    pub deposit: u64,
    pub paid_out: bool,
    pub total_rsvps: u64,
    pub total_confirmed_attendees: u64,

    // Descriptive fields from IPFS enrichment. Absent when the metadata
    // document was unreachable or malformed at creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub image_url: String,
}

/// Join record: one attendee RSVP'd to one event. At most one per pair;
/// its creation is the sole trigger for the RSVP counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rsvp {
    pub attendee: Address,
    pub event: EventId,
}

/// Join record: one attendee was confirmed at one event. A confirmation may
/// exist without a prior RSVP for the same pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    pub attendee: Address,
    pub event: EventId,
}
