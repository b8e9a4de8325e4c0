//! Shared cache claim store (simulated remote cache)

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::domain::claim::ClaimStore;
use crate::domain::fingerprint::Fingerprint;
use crate::domain::item::{Item, SubmissionResult};
use crate::domain::DomainError;

/// Configuration for the shared cache store
#[derive(Debug, Clone)]
pub struct SharedCacheConfig {
    /// Simulated network latency of a `get`
    pub read_latency: Duration,
    /// Simulated network latency of a `set`
    pub write_latency: Duration,
    /// TTL applied to entries claimed through the `ClaimStore` trait;
    /// `None` means entries do not expire
    pub default_ttl: Option<Duration>,
    /// Maximum number of entries
    pub max_capacity: u64,
}

impl Default for SharedCacheConfig {
    fn default() -> Self {
        Self {
            read_latency: Duration::from_millis(20),
            write_latency: Duration::from_millis(100),
            default_ttl: None,
            max_capacity: 100_000,
        }
    }
}

impl SharedCacheConfig {
    /// Sets the simulated read latency
    pub fn with_read_latency(mut self, latency: Duration) -> Self {
        self.read_latency = latency;
        self
    }

    /// Sets the simulated write latency
    pub fn with_write_latency(mut self, latency: Duration) -> Self {
        self.write_latency = latency;
        self
    }

    /// Sets the default TTL for claimed entries
    pub fn with_default_ttl(mut self, ttl: Duration) -> Self {
        self.default_ttl = Some(ttl);
        self
    }

    /// Sets the maximum capacity
    pub fn with_max_capacity(mut self, capacity: u64) -> Self {
        self.max_capacity = capacity;
        self
    }
}

/// Cache entry with optional absolute expiry
#[derive(Debug, Clone)]
struct CacheEntry {
    item: Item,
    expires_at: Option<DateTime<Utc>>,
}

impl CacheEntry {
    fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|at| Utc::now() > at)
    }
}

/// Claim store modeling an out-of-process cache
///
/// The native primitives are independent `get` and `set` calls, each
/// paying simulated network latency. `save_if_absent` is a `get`
/// followed by a slow write with no critical section spanning the pair:
/// between the read and the write a second caller's `get` can also
/// observe absent, and both callers are then told the content is not a
/// duplicate. The `ClaimStore` impl inherits this weaker guarantee; the
/// mutex-guarded local store is the variant with a true atomic claim.
///
/// Expiry is enforced here, not by callers: a `get` treats an expired
/// entry as absent and drops it.
#[derive(Debug)]
pub struct SharedCacheStore {
    cache: MokaCache<Fingerprint, CacheEntry>,
    config: SharedCacheConfig,
}

impl SharedCacheStore {
    /// Creates a store with default configuration
    pub fn new() -> Self {
        Self::with_config(SharedCacheConfig::default())
    }

    /// Creates a store with the given configuration
    pub fn with_config(config: SharedCacheConfig) -> Self {
        let cache = MokaCache::builder()
            .max_capacity(config.max_capacity)
            .build();

        Self { cache, config }
    }

    /// Reads the item stored under the fingerprint
    pub async fn get(&self, fingerprint: Fingerprint) -> Result<Option<Item>, DomainError> {
        tokio::time::sleep(self.config.read_latency).await;

        match self.cache.get(&fingerprint).await {
            Some(entry) if entry.is_expired() => {
                self.cache.remove(&fingerprint).await;
                Ok(None)
            }
            Some(entry) => Ok(Some(entry.item)),
            None => Ok(None),
        }
    }

    /// Writes the item under the fingerprint, overwriting any entry
    pub async fn set(
        &self,
        fingerprint: Fingerprint,
        item: Item,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<(), DomainError> {
        tokio::time::sleep(self.config.write_latency).await;

        self.cache
            .insert(fingerprint, CacheEntry { item, expires_at })
            .await;
        Ok(())
    }

    /// Saves the item unless the fingerprint is already present
    ///
    /// The outcome is decided by the `get` alone; the write that follows
    /// is slow, and a concurrent caller whose `get` lands inside that
    /// window also observes absent.
    pub async fn save_if_absent(
        &self,
        fingerprint: Fingerprint,
        item: Item,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<SubmissionResult, DomainError> {
        if let Some(existing) = self.get(fingerprint).await? {
            debug!(%fingerprint, "fingerprint already cached");
            return Ok(SubmissionResult::duplicate(existing.content()));
        }

        tokio::time::sleep(self.config.write_latency).await;

        self.cache
            .insert(fingerprint, CacheEntry { item, expires_at })
            .await;

        debug!(%fingerprint, "fingerprint cached");
        Ok(SubmissionResult::new(true, "Item saved."))
    }

    fn default_expiry(&self) -> Option<DateTime<Utc>> {
        self.config
            .default_ttl
            .and_then(|ttl| chrono::Duration::from_std(ttl).ok())
            .map(|ttl| Utc::now() + ttl)
    }
}

impl Default for SharedCacheStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClaimStore for SharedCacheStore {
    async fn claim(&self, fingerprint: Fingerprint, item: Item) -> Result<bool, DomainError> {
        let result = self
            .save_if_absent(fingerprint, item, self.default_expiry())
            .await?;
        Ok(result.success)
    }

    async fn get(&self, fingerprint: Fingerprint) -> Result<Option<Item>, DomainError> {
        SharedCacheStore::get(self, fingerprint).await
    }

    async fn list(&self) -> Result<Vec<Item>, DomainError> {
        self.cache.run_pending_tasks().await;

        Ok(self
            .cache
            .iter()
            .filter(|(_, entry)| !entry.is_expired())
            .map(|(_, entry)| entry.item.clone())
            .collect())
    }
}
