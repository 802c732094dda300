use chrono::{DateTime, Duration, Utc};
use std::num::NonZeroUsize;
use tracing::{error, info};
use turnstile_catalog::PricingTable;
use turnstile_core::{GuestRecord, RecordStore, StoreError};
use turnstile_shared::{GuestEntry, TicketRecord};
use uuid::Uuid;

pub const VALIDITY_WINDOW_HOURS: i64 = 24;

/// Guests collected for one ticket, before an id is assigned
#[derive(Debug, Clone)]
pub struct TicketSession {
    expected_guests: NonZeroUsize,
    guests: Vec<GuestRecord>,
    pricing: PricingTable,
    validity: Duration,
}

impl TicketSession {
    pub fn new(expected_guests: NonZeroUsize) -> Self {
        Self {
            expected_guests,
            guests: Vec::new(),
            pricing: PricingTable::default(),
            validity: Duration::hours(VALIDITY_WINDOW_HOURS),
        }
    }

    pub fn with_validity(mut self, validity: Duration) -> Self {
        self.validity = validity;
        self
    }

    pub fn expected_guests(&self) -> usize {
        self.expected_guests.get()
    }

    pub fn guests(&self) -> &[GuestRecord] {
        &self.guests
    }

    /// Append in intake order. Staying within the expected count is the caller's job.
    pub fn add_guest(&mut self, guest: GuestRecord) {
        self.guests.push(guest);
    }

    pub fn is_full(&self) -> bool {
        self.guests.len() >= self.expected_guests.get()
    }

    pub fn total_price(&self) -> u32 {
        self.guests.iter().map(|g| self.pricing.price_for(g)).sum()
    }

    /// Persisted form of the session as of `now`.
    pub fn snapshot(&self, now: DateTime<Utc>) -> TicketRecord {
        TicketRecord {
            guests: self
                .guests
                .iter()
                .map(|g| GuestEntry {
                    details: g.details(),
                    ticket_price: self.pricing.price_for(g),
                })
                .collect(),
            total_price: self.total_price(),
            validity: self.expiry_from(now).timestamp_millis(),
        }
    }

    /// `now` plus the validity window, saturating at the latest representable instant.
    fn expiry_from(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now.checked_add_signed(self.validity)
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    pub async fn finalize(self, store: &dyn RecordStore) -> IssuedTicket {
        self.finalize_at(store, Utc::now()).await
    }

    /// Mint a ticket id and save the snapshot.
    ///
    /// A failed save is logged and kept on the returned ticket; the ticket is issued regardless.
    pub async fn finalize_at(self, store: &dyn RecordStore, now: DateTime<Utc>) -> IssuedTicket {
        let id = Uuid::new_v4();
        let record = self.snapshot(now);

        let save_error = match store.merge_put(&id.to_string(), &record).await {
            Ok(()) => {
                info!(
                    "Ticket {} issued for {} guest(s), total {}",
                    id,
                    record.guests.len(),
                    record.total_price
                );
                None
            }
            Err(e) => {
                error!("Error saving ticket {}: {}", id, e);
                Some(e)
            }
        };

        IssuedTicket {
            id,
            guests: self.guests,
            record,
            save_error,
        }
    }
}

/// A finalized session. The id is fixed and nothing about it changes afterwards.
#[derive(Debug)]
pub struct IssuedTicket {
    id: Uuid,
    guests: Vec<GuestRecord>,
    record: TicketRecord,
    save_error: Option<StoreError>,
}

impl IssuedTicket {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn guests(&self) -> &[GuestRecord] {
        &self.guests
    }

    pub fn record(&self) -> &TicketRecord {
        &self.record
    }

    pub fn total_price(&self) -> u32 {
        self.record.total_price
    }

    pub fn is_saved(&self) -> bool {
        self.save_error.is_none()
    }

    pub fn save_error(&self) -> Option<&StoreError> {
        self.save_error.as_ref()
    }
}
