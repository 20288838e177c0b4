//! Chain signal vocabulary — the facts the contract emits.
//!
//! Every variant mirrors one contract log. Signals serialize to
//! `serde_json::Value` so the envelope stays schema-agnostic; the projector
//! decodes payloads back with [`Signal::from_payload`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{Address, EventId};

/// One contract log, decoded. The `type` tag is the envelope's
/// `signal_type` string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Signal {
    EventCreated {
        event_id: EventId,
        creator_address: Address,
        event_timestamp: u64,
        max_capacity: u64,
        deposit: u64,
        event_data_cid: String,
    },

    NewRsvp {
        event_id: EventId,
        attendee_address: Address,
    },

    ConfirmedAttendee {
        event_id: EventId,
        attendee_address: Address,
    },

    DepositsPaidOut {
        event_id: EventId,
    },
}

impl Signal {
    /// The snake_case signal type string for this variant.
    pub fn signal_type(&self) -> &'static str {
        match self {
            Signal::EventCreated { .. } => "event_created",
            Signal::NewRsvp { .. } => "new_rsvp",
            Signal::ConfirmedAttendee { .. } => "confirmed_attendee",
            Signal::DepositsPaidOut { .. } => "deposits_paid_out",
        }
    }

    /// Serialize this signal to a JSON Value for the envelope payload.
    pub fn to_payload(&self) -> Value {
        serde_json::to_value(self).expect("Signal serialization should never fail")
    }

    /// Deserialize a signal from an envelope payload.
    pub fn from_payload(payload: &Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(payload.clone())
    }
}

// ---------------------------------------------------------------------------
// ChainSignal — the source's delivery envelope
// ---------------------------------------------------------------------------

/// A signal as delivered by the chain source. Ordered by
/// `(block_number, log_index)`; the source delivers at-least-once in that
/// order and the projector tolerates redelivery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainSignal {
    pub block_number: u64,
    pub log_index: u32,
    pub tx_hash: Option<String>,
    pub signal_type: String,
    pub payload: Value,
}

impl ChainSignal {
    /// Wrap a decoded signal in an envelope. Used by tests and local replay;
    /// the live source builds envelopes straight from logs.
    pub fn new(block_number: u64, log_index: u32, signal: &Signal) -> Self {
        Self {
            block_number,
            log_index,
            tx_hash: None,
            signal_type: signal.signal_type().to_string(),
            payload: signal.to_payload(),
        }
    }

    pub fn with_tx_hash(mut self, tx_hash: impl Into<String>) -> Self {
        self.tx_hash = Some(tx_hash.into());
        self
    }
}
