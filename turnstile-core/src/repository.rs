use async_trait::async_trait;
use turnstile_shared::TicketRecord;

/// Key-value persistence for issued tickets, keyed by ticket id.
///
/// Writes are additive: `merge_put` adds one entry and leaves every existing entry
/// untouched. Implementations do a plain read-modify-write with no locking, so two
/// processes finalizing against the same backend at once may lose an update.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn get(&self, ticket_id: &str) -> Result<Option<TicketRecord>, StoreError>;

    async fn merge_put(&self, ticket_id: &str, record: &TicketRecord) -> Result<(), StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Record store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Record store is corrupt: {0}")]
    Corrupt(String),

    #[error("Failed to encode ticket record: {0}")]
    Serialize(String),

    #[error("Ticket already exists in store: {0}")]
    DuplicateKey(String),
}
