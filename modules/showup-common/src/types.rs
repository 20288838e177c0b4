//! Typed chain identifiers and store addressing.
//!
//! Event ids and participant addresses are fixed-width byte values. Keeping
//! the widths in the types (instead of passing hex strings around) makes the
//! concatenated participation key collision-free: a 32-byte event id followed
//! by a 20-byte address can never be confused with any other pair.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::IdError;

// ---------------------------------------------------------------------------
// Fixed-width identifiers
// ---------------------------------------------------------------------------

/// A chain event identifier. 32 bytes, rendered as 0x-prefixed lower-case hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventId([u8; 32]);

/// A participant address. 20 bytes, rendered as 0x-prefixed lower-case hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address([u8; 20]);

fn decode_fixed<const N: usize>(s: &str) -> Result<[u8; N], IdError> {
    let hex_str = s.strip_prefix("0x").unwrap_or(s);
    let raw = hex::decode(hex_str)?;
    let got = raw.len();
    raw.try_into().map_err(|_| IdError::Length { expected: N, got })
}

impl EventId {
    pub const LEN: usize = 32;

    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn from_hex(s: &str) -> Result<Self, IdError> {
        decode_fixed(s).map(Self)
    }

    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl Address {
    pub const LEN: usize = 20;

    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    pub fn from_hex(s: &str) -> Result<Self, IdError> {
        decode_fixed(s).map(Self)
    }

    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for EventId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl FromStr for Address {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

// Identifiers cross the store boundary as their canonical hex strings.

impl Serialize for EventId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EventId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Composite participation key
// ---------------------------------------------------------------------------

/// Key for a join entity tying one attendee to one event: the event id's hex
/// followed by the attendee's hex, event first. Both components are
/// fixed-width, so the concatenation addresses exactly one pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParticipationKey {
    event: EventId,
    attendee: Address,
}

impl ParticipationKey {
    pub const fn new(event: EventId, attendee: Address) -> Self {
        Self { event, attendee }
    }

    pub const fn event(&self) -> EventId {
        self.event
    }

    pub const fn attendee(&self) -> Address {
        self.attendee
    }
}

impl fmt::Display for ParticipationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.event, self.attendee)
    }
}

// ---------------------------------------------------------------------------
// Store namespaces
// ---------------------------------------------------------------------------

/// The namespace a derived entity lives under in the entity store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Account,
    Event,
    Rsvp,
    Confirmation,
}

impl EntityKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            EntityKind::Account => "account",
            EntityKind::Event => "event",
            EntityKind::Rsvp => "rsvp",
            EntityKind::Confirmation => "confirmation",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
