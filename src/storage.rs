//! Storage port - schema-validated load/save for boundary records
//!
//! The engine never touches a real storage backend; hosts implement
//! `Store` over whatever they have (browser localStorage, a file, a
//! database row). Records are validated on load by deserializing, and a
//! migration hook upgrades old stats payloads instead of discarding them.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::stats::Stats;

/// Storage failures surfaced to the host
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("malformed record: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("storage backend unavailable: {0}")]
    Backend(String),
}

/// Load/save port for one serializable record type
pub trait Store<T: Serialize + DeserializeOwned> {
    /// Load the record, `None` if nothing has been saved yet
    fn load(&self) -> Result<Option<T>, StoreError>;
    fn save(&mut self, value: &T) -> Result<(), StoreError>;
    fn clear(&mut self) -> Result<(), StoreError>;
}

/// In-memory backend, used by tests and headless hosts
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: Serialize + DeserializeOwned> Store<T> for MemoryStore {
    fn load(&self) -> Result<Option<T>, StoreError> {
        match &self.slot {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }

    fn save(&mut self, value: &T) -> Result<(), StoreError> {
        self.slot = Some(serde_json::to_string(value)?);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.slot = None;
        Ok(())
    }
}

/// Load stats, migrating old or partial payloads
///
/// A record that fails strict deserialization is re-read as a raw JSON
/// value and run through `Stats::migrate`; an empty or unreadable slot
/// yields the default record.
pub fn load_stats<S>(store: &S) -> Stats
where
    S: Store<serde_json::Value>,
{
    match store.load() {
        Ok(Some(raw)) => Stats::migrate(raw),
        Ok(None) => Stats::default(),
        Err(err) => {
            warn!(error = %err, "stats unreadable, starting fresh");
            Stats::default()
        }
    }
}
