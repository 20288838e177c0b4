//! Per-signal projection handlers.
//!
//! One signal in, idempotent entity mutations out. The dispatch table is
//! total: every decodable signal maps to exactly one handler; an undecodable
//! payload is reported, not fatal. A signal referencing an event this
//! projector never saw is input drift, dropped silently with no mutation.

use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, warn};

use showup_common::{
    Account, Address, ChainSignal, Config, Confirmation, EntityKind, Event, EventId,
    ParticipationKey, Rsvp, Signal,
};
use showup_store::{load_as, save_as, EntityStore};

use crate::accounts::resolve_account;
use crate::enrich::{ContentFetcher, Enricher};

/// Result of applying a single signal.
#[derive(Debug)]
pub enum ApplyResult {
    /// The signal produced an entity mutation.
    Applied,
    /// The signal was a no-op: duplicate delivery or a dangling event reference.
    NoOp,
    /// The signal payload could not be decoded.
    DecodeError(String),
}

/// Which join entity a participation signal touches, and thereby which
/// counter pair moves when the join record is first created.
#[derive(Debug, Clone, Copy)]
enum Participation {
    Rsvp,
    Confirmation,
}

impl Participation {
    const fn join_kind(self) -> EntityKind {
        match self {
            Participation::Rsvp => EntityKind::Rsvp,
            Participation::Confirmation => EntityKind::Confirmation,
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Participation::Rsvp => "RSVP",
            Participation::Confirmation => "confirmation",
        }
    }
}

/// Projects chain signals into the derived entity graph.
pub struct Projector {
    store: Arc<dyn EntityStore>,
    enricher: Enricher,
}

impl Projector {
    pub fn new(
        store: Arc<dyn EntityStore>,
        fetcher: Arc<dyn ContentFetcher>,
        config: &Config,
    ) -> Self {
        let enricher = Enricher::new(fetcher, &config.ipfs_gateway);
        Self { store, enricher }
    }

    /// Apply a single signal. Idempotent under redelivery.
    ///
    /// Handlers run load → compute → persist to completion; the caller must
    /// apply signals one at a time, in source order, for the check-then-create
    /// sequences to be race-free ([`crate::pipeline::Pipeline`] does).
    pub async fn apply(&self, signal: &ChainSignal) -> Result<ApplyResult> {
        let parsed = match Signal::from_payload(&signal.payload) {
            Ok(s) => s,
            Err(e) => {
                warn!(
                    block = signal.block_number,
                    log_index = signal.log_index,
                    error = %e,
                    "Failed to decode signal payload"
                );
                return Ok(ApplyResult::DecodeError(e.to_string()));
            }
        };

        match parsed {
            Signal::EventCreated {
                event_id,
                creator_address,
                event_timestamp,
                max_capacity,
                deposit,
                event_data_cid,
            } => {
                self.on_event_created(
                    event_id,
                    creator_address,
                    event_timestamp,
                    max_capacity,
                    deposit,
                    &event_data_cid,
                )
                .await
            }
            Signal::NewRsvp {
                event_id,
                attendee_address,
            } => {
                self.on_participation(Participation::Rsvp, event_id, attendee_address)
                    .await
            }
            Signal::ConfirmedAttendee {
                event_id,
                attendee_address,
            } => {
                self.on_participation(Participation::Confirmation, event_id, attendee_address)
                    .await
            }
            Signal::DepositsPaidOut { event_id } => self.on_deposits_paid_out(event_id).await,
        }
    }

    // =====================================================================
    // Event creation
    // =====================================================================

    async fn on_event_created(
        &self,
        event_id: EventId,
        creator_address: Address,
        event_timestamp: u64,
        max_capacity: u64,
        deposit: u64,
        event_data_cid: &str,
    ) -> Result<ApplyResult> {
        let key = event_id.to_string();

        if load_as::<Event>(&*self.store, EntityKind::Event, &key)
            .await?
            .is_some()
        {
            debug!(%event_id, "Event already projected, skipping duplicate");
            return Ok(ApplyResult::NoOp);
        }

        let metadata = self.enricher.enrich(event_data_cid).await.unwrap_or_default();
        let image_url = self
            .enricher
            .image_url(event_data_cid, metadata.image.as_deref());

        let event = Event {
            id: event_id,
            event_owner: creator_address,
            event_timestamp,
            max_capacity,
            deposit,
            paid_out: false,
            total_rsvps: 0,
            total_confirmed_attendees: 0,
            name: metadata.name,
            description: metadata.description,
            link: metadata.link,
            image_url,
        };

        save_as(&*self.store, EntityKind::Event, &key, &event).await?;
        debug!(%event_id, "Event projected");
        Ok(ApplyResult::Applied)
    }

    // =====================================================================
    // Participation (RSVP / confirmation) — one algorithm, two counter pairs
    // =====================================================================

    async fn on_participation(
        &self,
        participation: Participation,
        event_id: EventId,
        attendee: Address,
    ) -> Result<ApplyResult> {
        let event_key = event_id.to_string();

        // Dangling event reference: the stream drifted past something we never
        // projected. Drop with no mutation at all.
        let Some(mut event) = load_as::<Event>(&*self.store, EntityKind::Event, &event_key).await?
        else {
            debug!(
                %event_id,
                %attendee,
                kind = participation.label(),
                "Unknown event referenced, dropping signal"
            );
            return Ok(ApplyResult::NoOp);
        };

        let key = ParticipationKey::new(event_id, attendee).to_string();
        let join_kind = participation.join_kind();

        if self.store.load(join_kind, &key).await?.is_some() {
            debug!(
                %event_id,
                %attendee,
                kind = participation.label(),
                "Pair already recorded, skipping duplicate"
            );
            return Ok(ApplyResult::NoOp);
        }

        let mut account = resolve_account(&*self.store, &attendee).await?;

        match participation {
            Participation::Rsvp => {
                let record = Rsvp {
                    attendee,
                    event: event_id,
                };
                save_as(&*self.store, join_kind, &key, &record).await?;
                event.total_rsvps += 1;
                account.total_rsvps += 1;
            }
            Participation::Confirmation => {
                let record = Confirmation {
                    attendee,
                    event: event_id,
                };
                save_as(&*self.store, join_kind, &key, &record).await?;
                event.total_confirmed_attendees += 1;
                account.total_attended_events += 1;
            }
        }

        save_as(&*self.store, EntityKind::Event, &event_key, &event).await?;
        save_as(
            &*self.store,
            EntityKind::Account,
            &account.address.to_string(),
            &account,
        )
        .await?;

        debug!(%event_id, %attendee, kind = participation.label(), "Participation recorded");
        Ok(ApplyResult::Applied)
    }

    // =====================================================================
    // Payout
    // =====================================================================

    async fn on_deposits_paid_out(&self, event_id: EventId) -> Result<ApplyResult> {
        let key = event_id.to_string();

        let Some(mut event) = load_as::<Event>(&*self.store, EntityKind::Event, &key).await? else {
            debug!(%event_id, "Unknown event referenced by payout, dropping signal");
            return Ok(ApplyResult::NoOp);
        };

        // Unconditional set: the flag never reverts, so redelivery lands on
        // an already-true value.
        event.paid_out = true;
        save_as(&*self.store, EntityKind::Event, &key, &event).await?;

        debug!(%event_id, "Deposits marked paid out");
        Ok(ApplyResult::Applied)
    }

    /// Look up an account without creating it. Test and query convenience.
    pub async fn account(&self, address: &Address) -> Result<Option<Account>> {
        Ok(load_as(&*self.store, EntityKind::Account, &address.to_string()).await?)
    }

    /// Look up a projected event. Test and query convenience.
    pub async fn event(&self, event_id: &EventId) -> Result<Option<Event>> {
        Ok(load_as(&*self.store, EntityKind::Event, &event_id.to_string()).await?)
    }
}
