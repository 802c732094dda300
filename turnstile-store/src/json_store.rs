use async_trait::async_trait;
use serde_json::{Map, Value};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use turnstile_core::{RecordStore, StoreError};
use turnstile_shared::TicketRecord;

/// Record store backed by a single JSON object on disk: `{ "<ticket id>": TicketRecord, ... }`.
///
/// A missing file reads as an empty store. Entries this crate cannot decode are kept
/// as raw JSON and written back unchanged on merge.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<Map<String, Value>, StoreError> {
        let text = match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No record store at {}, treating as empty", self.path.display());
                return Ok(Map::new());
            }
            Err(e) => return Err(StoreError::Io(e)),
        };

        if text.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&text) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(StoreError::Corrupt(format!(
                "{} does not hold a JSON object",
                self.path.display()
            ))),
            Err(e) => Err(StoreError::Corrupt(format!("{}: {}", self.path.display(), e))),
        }
    }
}

#[async_trait]
impl RecordStore for JsonFileStore {
    async fn get(&self, ticket_id: &str) -> Result<Option<TicketRecord>, StoreError> {
        let mut all = self.read_all().await?;
        match all.remove(ticket_id) {
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|e| StoreError::Corrupt(format!("ticket {}: {}", ticket_id, e))),
            None => Ok(None),
        }
    }

    async fn merge_put(&self, ticket_id: &str, record: &TicketRecord) -> Result<(), StoreError> {
        let mut all = self.read_all().await?;
        if all.contains_key(ticket_id) {
            return Err(StoreError::DuplicateKey(ticket_id.to_string()));
        }

        let value = serde_json::to_value(record).map_err(|e| StoreError::Serialize(e.to_string()))?;
        all.insert(ticket_id.to_string(), value);

        let body = serde_json::to_string(&Value::Object(all))
            .map_err(|e| StoreError::Serialize(e.to_string()))?;
        tokio::fs::write(&self.path, body).await?;

        info!("Ticket {} saved to {}", ticket_id, self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use turnstile_shared::GuestEntry;

    fn record(total: u32) -> TicketRecord {
        TicketRecord {
            guests: vec![GuestEntry {
                details: "Ana 30 9876543210 ana@example.com".to_string(),
                ticket_price: total,
            }],
            total_price: total,
            validity: 1_700_000_000_000,
        }
    }

    #[tokio::test]
    async fn test_missing_file_is_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("history.json"));
        assert!(store.get("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_merge_creates_file_and_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("history.json"));

        store.merge_put("t-1", &record(500)).await.unwrap();

        assert_eq!(store.get("t-1").await.unwrap(), Some(record(500)));
        let raw: Value =
            serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(raw["t-1"]["totalPrice"], 500);
        assert_eq!(raw["t-1"]["guests"][0]["ticketPrice"], 500);
    }

    #[tokio::test]
    async fn test_merge_keeps_existing_entries_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        let prior = r#"{"old":{"guests":[{"details":"Bo 70 1234567890 bo@example.com","ticketPrice":300}],"totalPrice":300,"validity":1},"foreign":{"note":"left alone"}}"#;
        std::fs::write(&path, prior).unwrap();

        let store = JsonFileStore::new(&path);
        store.merge_put("new", &record(100)).await.unwrap();

        let raw: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let before: Value = serde_json::from_str(prior).unwrap();
        assert_eq!(raw["old"], before["old"]);
        assert_eq!(raw["foreign"], before["foreign"]);
        assert_eq!(raw["new"]["totalPrice"], 100);
    }

    #[tokio::test]
    async fn test_existing_key_is_never_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("history.json"));

        store.merge_put("t-1", &record(500)).await.unwrap();
        let result = store.merge_put("t-1", &record(100)).await;

        assert!(matches!(result, Err(StoreError::DuplicateKey(_))));
        assert_eq!(store.get("t-1").await.unwrap(), Some(record(500)));
    }

    #[tokio::test]
    async fn test_corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(store.get("x").await, Err(StoreError::Corrupt(_))));
        assert!(matches!(store.merge_put("x", &record(0)).await, Err(StoreError::Corrupt(_))));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[1, 2, 3]");
    }
}
