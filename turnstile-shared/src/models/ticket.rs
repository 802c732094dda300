use serde::{Deserialize, Serialize};

/// One guest line of an issued ticket, as it is written to the record store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestEntry {
    pub details: String,
    pub ticket_price: u32,
}

/// Durable form of a finalized ticket session, keyed by ticket id in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketRecord {
    pub guests: Vec<GuestEntry>,
    pub total_price: u32,
    /// Expiry as epoch milliseconds.
    pub validity: i64,
}

impl TicketRecord {
    /// A ticket is no longer valid once `now_ms` reaches its expiry.
    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        now_ms >= self.validity
    }
}
