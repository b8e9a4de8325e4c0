//! Process-local claim store

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::claim::ClaimStore;
use crate::domain::fingerprint::Fingerprint;
use crate::domain::item::Item;
use crate::domain::DomainError;

/// Mutex-guarded claim store for a single process
///
/// The membership check and the insert happen under one critical
/// section, so exactly one concurrent caller per fingerprint observes a
/// won claim. The section does O(1) work and never awaits; backend
/// latency is paid outside it, which keeps unrelated submissions fully
/// concurrent.
///
/// Entries are keyed by the 8-byte fingerprint rather than the content
/// itself, bounding memory independent of content length. There is no
/// TTL: entries live for the process lifetime.
#[derive(Debug, Default)]
pub struct LocalClaimStore {
    entries: Mutex<HashMap<Fingerprint, Item>>,
}

impl LocalClaimStore {
    /// Creates an empty claim store
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl ClaimStore for LocalClaimStore {
    async fn claim(&self, fingerprint: Fingerprint, item: Item) -> Result<bool, DomainError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| DomainError::cache(format!("Failed to acquire claim lock: {}", e)))?;

        if entries.contains_key(&fingerprint) {
            debug!(%fingerprint, "fingerprint already claimed");
            return Ok(false);
        }

        debug!(%fingerprint, "fingerprint claimed");
        entries.insert(fingerprint, item);
        Ok(true)
    }

    async fn get(&self, fingerprint: Fingerprint) -> Result<Option<Item>, DomainError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| DomainError::cache(format!("Failed to acquire claim lock: {}", e)))?;

        Ok(entries.get(&fingerprint).cloned())
    }

    async fn list(&self) -> Result<Vec<Item>, DomainError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| DomainError::cache(format!("Failed to acquire claim lock: {}", e)))?;

        Ok(entries.values().cloned().collect())
    }
}
