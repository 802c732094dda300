use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, warn};
use turnstile_core::{RecordStore, StoreError};
use turnstile_shared::GuestEntry;

/// Message shown for both unknown and expired tickets.
pub const INVALID_OR_EXPIRED: &str = "Ticket is invalid or expired!";

/// Looks up issued tickets and checks they are still within their validity window
pub struct TicketVerifier {
    store: Arc<dyn RecordStore>,
}

impl TicketVerifier {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn verify(&self, ticket_id: &str) -> Result<Vec<GuestEntry>, VerifyError> {
        self.verify_at(ticket_id, Utc::now()).await
    }

    pub async fn verify_at(
        &self,
        ticket_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Vec<GuestEntry>, VerifyError> {
        debug!("Verifying ticket {}", ticket_id);

        let record = self
            .store
            .get(ticket_id)
            .await?
            .ok_or_else(|| VerifyError::NotFound(ticket_id.to_string()))?;

        if record.is_expired_at(now.timestamp_millis()) {
            warn!("Ticket {} expired at {}", ticket_id, record.validity);
            return Err(VerifyError::Expired(ticket_id.to_string()));
        }

        Ok(record.guests)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    #[error("Ticket not found: {0}")]
    NotFound(String),

    #[error("Ticket expired: {0}")]
    Expired(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl VerifyError {
    /// What the user is told. Unknown and expired tickets read the same.
    pub fn user_message(&self) -> String {
        match self {
            VerifyError::NotFound(_) | VerifyError::Expired(_) => INVALID_OR_EXPIRED.to_string(),
            VerifyError::Store(e) => e.to_string(),
        }
    }
}
