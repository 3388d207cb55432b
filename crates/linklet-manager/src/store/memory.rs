use async_trait::async_trait;
use linklet_core::{StoreError, UrlRecord, UrlStore};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// In-memory implementation of the `UrlStore` trait.
///
/// A single mutex guards the whole mapping, so add/get/remove on the same
/// identifier serialize and an add/add race resolves with exactly one
/// winner. Records are handed out as shared `Arc` handles: a get racing a
/// remove observes either a consistent pre-removal record or a clean miss.
#[derive(Debug, Default)]
pub struct MemoryUrlStore {
    records: Mutex<HashMap<String, Arc<UrlRecord>>>,
}

impl MemoryUrlStore {
    /// Creates a new, empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, Arc<UrlRecord>>>, StoreError> {
        // A poisoned lock means a writer panicked mid-mutation; the map
        // can no longer be trusted, so surface it instead of recovering.
        self.records.lock().map_err(|_| StoreError::Poisoned)
    }
}

#[async_trait]
impl UrlStore for MemoryUrlStore {
    async fn add(&self, record: Arc<UrlRecord>) -> Result<bool, StoreError> {
        let mut records = self.lock()?;

        if records.contains_key(record.identifier()) {
            return Ok(false);
        }

        records.insert(record.identifier().to_owned(), record);
        Ok(true)
    }

    async fn get(&self, id: &str) -> Result<Option<Arc<UrlRecord>>, StoreError> {
        let records = self.lock()?;
        Ok(records.get(id).map(Arc::clone))
    }

    async fn remove(&self, id: &str) -> Result<bool, StoreError> {
        let mut records = self.lock()?;
        Ok(records.remove(id).is_some())
    }
}
