//! Claim store factory for runtime selection

use std::sync::Arc;
use std::time::Duration;

use crate::domain::claim::ClaimStore;
use crate::domain::DomainError;

use super::local::LocalClaimStore;
use super::shared_cache::{SharedCacheConfig, SharedCacheStore};

/// Supported claim store types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimStoreType {
    /// Process-local mutex-guarded store with a true atomic claim
    Local,
    /// Simulated remote cache with independent get/set calls
    SharedCache,
}

impl Default for ClaimStoreType {
    fn default() -> Self {
        Self::Local
    }
}

impl std::fmt::Display for ClaimStoreType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClaimStoreType::Local => write!(f, "local"),
            ClaimStoreType::SharedCache => write!(f, "shared_cache"),
        }
    }
}

impl std::str::FromStr for ClaimStoreType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(ClaimStoreType::Local),
            "shared_cache" | "sharedcache" | "shared" => Ok(ClaimStoreType::SharedCache),
            _ => Err(DomainError::configuration(format!(
                "Unknown claim store type: {}. Valid types: local, shared_cache",
                s
            ))),
        }
    }
}

/// Configuration for the claim store factory
#[derive(Debug, Clone)]
pub struct ClaimStoreConfig {
    /// Type of store to create
    pub store_type: ClaimStoreType,
    /// Simulated read latency (shared cache only)
    pub read_latency: Duration,
    /// Simulated write latency (shared cache only)
    pub write_latency: Duration,
    /// TTL for claimed entries (shared cache only)
    pub default_ttl: Option<Duration>,
    /// Maximum capacity (shared cache only)
    pub max_capacity: Option<u64>,
}

impl Default for ClaimStoreConfig {
    fn default() -> Self {
        let shared_defaults = SharedCacheConfig::default();

        Self {
            store_type: ClaimStoreType::Local,
            read_latency: shared_defaults.read_latency,
            write_latency: shared_defaults.write_latency,
            default_ttl: None,
            max_capacity: Some(shared_defaults.max_capacity),
        }
    }
}

impl ClaimStoreConfig {
    /// Creates a configuration for the local store
    pub fn local() -> Self {
        Self {
            store_type: ClaimStoreType::Local,
            ..Default::default()
        }
    }

    /// Creates a configuration for the shared cache store
    pub fn shared_cache() -> Self {
        Self {
            store_type: ClaimStoreType::SharedCache,
            ..Default::default()
        }
    }

    /// Sets the store type
    pub fn with_store_type(mut self, store_type: ClaimStoreType) -> Self {
        self.store_type = store_type;
        self
    }

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

    /// Sets the TTL for claimed entries
    pub fn with_default_ttl(mut self, ttl: Duration) -> Self {
        self.default_ttl = Some(ttl);
        self
    }

    /// Creates config from environment variables
    pub fn from_env() -> Result<Self, DomainError> {
        let store_type = std::env::var("CLAIM_STORE_TYPE")
            .unwrap_or_else(|_| "local".to_string())
            .parse()?;

        let defaults = Self::default();

        let read_latency = std::env::var("CLAIM_STORE_READ_LATENCY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.read_latency);

        let write_latency = std::env::var("CLAIM_STORE_WRITE_LATENCY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.write_latency);

        let default_ttl = std::env::var("CLAIM_STORE_TTL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs);

        let max_capacity = std::env::var("CLAIM_STORE_MAX_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok());

        Ok(Self {
            store_type,
            read_latency,
            write_latency,
            default_ttl,
            max_capacity,
        })
    }
}

/// Factory for creating claim store instances
#[derive(Debug, Default)]
pub struct ClaimStoreFactory;

impl ClaimStoreFactory {
    /// Creates a new claim store factory
    pub fn new() -> Self {
        Self
    }

    /// Creates a claim store based on configuration
    pub fn create(&self, config: &ClaimStoreConfig) -> Arc<dyn ClaimStore> {
        match config.store_type {
            ClaimStoreType::Local => Arc::new(LocalClaimStore::new()),
            ClaimStoreType::SharedCache => {
                let mut shared_config = SharedCacheConfig::default()
                    .with_read_latency(config.read_latency)
                    .with_write_latency(config.write_latency);

                if let Some(ttl) = config.default_ttl {
                    shared_config = shared_config.with_default_ttl(ttl);
                }

                if let Some(capacity) = config.max_capacity {
                    shared_config = shared_config.with_max_capacity(capacity);
                }

                Arc::new(SharedCacheStore::with_config(shared_config))
            }
        }
    }

    /// Creates a local store directly
    pub fn create_local(&self) -> Arc<dyn ClaimStore> {
        Arc::new(LocalClaimStore::new())
    }

    /// Creates a shared cache store with custom configuration
    pub fn create_shared_cache(&self, config: SharedCacheConfig) -> Arc<dyn ClaimStore> {
        Arc::new(SharedCacheStore::with_config(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fingerprint::Fingerprint;
    use crate::domain::item::Item;

    #[test]
    fn test_store_type_from_str() {
        assert_eq!("local".parse::<ClaimStoreType>().unwrap(), ClaimStoreType::Local);
        assert_eq!(
            "shared_cache".parse::<ClaimStoreType>().unwrap(),
            ClaimStoreType::SharedCache
        );
        assert_eq!(
            "shared".parse::<ClaimStoreType>().unwrap(),
            ClaimStoreType::SharedCache
        );
        assert_eq!(
            "LOCAL".parse::<ClaimStoreType>().unwrap(),
            ClaimStoreType::Local
        );
    }

    #[test]
    fn test_store_type_from_str_invalid() {
        let result = "redis".parse::<ClaimStoreType>();
        assert!(result.is_err());
    }

    #[test]
    fn test_store_type_display() {
        assert_eq!(ClaimStoreType::Local.to_string(), "local");
        assert_eq!(ClaimStoreType::SharedCache.to_string(), "shared_cache");
    }

    #[test]
    fn test_config_builders() {
        let config = ClaimStoreConfig::shared_cache()
            .with_read_latency(Duration::from_millis(5))
            .with_write_latency(Duration::from_millis(50))
            .with_default_ttl(Duration::from_secs(60));

        assert_eq!(config.store_type, ClaimStoreType::SharedCache);
        assert_eq!(config.read_latency, Duration::from_millis(5));
        assert_eq!(config.write_latency, Duration::from_millis(50));
        assert_eq!(config.default_ttl, Some(Duration::from_secs(60)));
    }

    #[tokio::test]
    async fn test_factory_create_local() {
        let factory = ClaimStoreFactory::new();
        let store = factory.create(&ClaimStoreConfig::local());

        let fp = Fingerprint::of("hello");
        assert!(store.claim(fp, Item::provisional("hello")).await.unwrap());
        assert!(!store.claim(fp, Item::provisional("hello")).await.unwrap());
    }

    #[tokio::test]
    async fn test_factory_create_shared_cache() {
        let factory = ClaimStoreFactory::new();
        let config = ClaimStoreConfig::shared_cache()
            .with_read_latency(Duration::ZERO)
            .with_write_latency(Duration::ZERO);
        let store = factory.create(&config);

        let fp = Fingerprint::of("hello");
        assert!(store.claim(fp, Item::provisional("hello")).await.unwrap());
        assert!(!store.claim(fp, Item::provisional("hello")).await.unwrap());
    }
}
