use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;
use turnstile_core::{RecordStore, StoreError};
use turnstile_shared::TicketRecord;

/// In-process record store, used by tests and dry runs.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: Mutex<HashMap<String, TicketRecord>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: impl IntoIterator<Item = (String, TicketRecord)>) -> Self {
        Self {
            records: Mutex::new(records.into_iter().collect()),
        }
    }

    pub async fn len(&self) -> usize {
        self.records.lock().await.len()
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn get(&self, ticket_id: &str) -> Result<Option<TicketRecord>, StoreError> {
        Ok(self.records.lock().await.get(ticket_id).cloned())
    }

    async fn merge_put(&self, ticket_id: &str, record: &TicketRecord) -> Result<(), StoreError> {
        let mut records = self.records.lock().await;
        if records.contains_key(ticket_id) {
            return Err(StoreError::DuplicateKey(ticket_id.to_string()));
        }
        records.insert(ticket_id.to_string(), record.clone());
        Ok(())
    }
}
