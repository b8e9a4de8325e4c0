//! Simulated in-memory backend gateway

use std::sync::RwLock;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::backend::ItemGateway;
use crate::domain::item::{Item, ItemId};
use crate::domain::DomainError;

/// Configuration for the simulated backend
#[derive(Debug, Clone)]
pub struct SimulatedBackendConfig {
    /// Simulated latency of a content lookup
    pub find_latency: Duration,
    /// Simulated latency of a persist call
    pub save_latency: Duration,
}

impl Default for SimulatedBackendConfig {
    fn default() -> Self {
        Self {
            find_latency: Duration::from_millis(20),
            save_latency: Duration::from_millis(100),
        }
    }
}

impl SimulatedBackendConfig {
    /// Sets the simulated find latency
    pub fn with_find_latency(mut self, latency: Duration) -> Self {
        self.find_latency = latency;
        self
    }

    /// Sets the simulated save latency
    pub fn with_save_latency(mut self, latency: Duration) -> Self {
        self.save_latency = latency;
        self
    }
}

/// In-memory stand-in for the authoritative item store
///
/// Assigns item IDs at persist time and sleeps configured latencies to
/// model real I/O. It performs no duplicate rejection of its own; the
/// admission layer in front of it is responsible for that. Data is lost
/// when the process terminates.
#[derive(Debug, Default)]
pub struct SimulatedItemBackend {
    items: RwLock<Vec<Item>>,
    config: SimulatedBackendConfig,
}

impl SimulatedItemBackend {
    /// Creates an empty backend with default latencies
    pub fn new() -> Self {
        Self::with_config(SimulatedBackendConfig::default())
    }

    /// Creates an empty backend with the given configuration
    pub fn with_config(config: SimulatedBackendConfig) -> Self {
        Self {
            items: RwLock::new(Vec::new()),
            config,
        }
    }

    /// Creates a backend pre-populated with persisted contents
    pub fn with_contents(contents: Vec<&str>) -> Self {
        let backend = Self::new();
        {
            let mut items = backend.items.write().unwrap();

            for content in contents {
                items.push(Item::new(ItemId::generate(), content));
            }
        }
        backend
    }
}

#[async_trait]
impl ItemGateway for SimulatedItemBackend {
    async fn find_items_with_content(&self, content: &str) -> Result<Vec<Item>, DomainError> {
        tokio::time::sleep(self.config.find_latency).await;

        let items = self
            .items
            .read()
            .map_err(|e| DomainError::backend(format!("Failed to acquire read lock: {}", e)))?;

        Ok(items
            .iter()
            .filter(|item| item.content() == content)
            .cloned()
            .collect())
    }

    async fn save_item(&self, content: &str) -> Result<Item, DomainError> {
        tokio::time::sleep(self.config.save_latency).await;

        let item = Item::new(ItemId::generate(), content);

        let mut items = self
            .items
            .write()
            .map_err(|e| DomainError::backend(format!("Failed to acquire write lock: {}", e)))?;

        items.push(item.clone());
        debug!(item_id = %item.id(), "item persisted");

        Ok(item)
    }

    async fn get_all_items(&self) -> Result<Vec<Item>, DomainError> {
        let items = self
            .items
            .read()
            .map_err(|e| DomainError::backend(format!("Failed to acquire read lock: {}", e)))?;

        Ok(items.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_config() -> SimulatedBackendConfig {
        SimulatedBackendConfig::default()
            .with_find_latency(Duration::ZERO)
            .with_save_latency(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_save_assigns_unique_ids() {
        let backend = SimulatedItemBackend::with_config(fast_config());

        let a = backend.save_item("hello").await.unwrap();
        let b = backend.save_item("world").await.unwrap();

        assert_ne!(a.id(), b.id());
        assert_eq!(backend.get_all_items().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_find_matches_exact_content_only() {
        let backend = SimulatedItemBackend::with_contents(vec!["hello", "hello world"]);

        let found = backend.find_items_with_content("hello").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].content(), "hello");

        let missing = backend.find_items_with_content("hell").await.unwrap();
        assert!(missing.is_empty());
    }

    #[tokio::test]
    async fn test_backend_does_not_reject_duplicates() {
        // Duplicate rejection belongs to the admission layer
        let backend = SimulatedItemBackend::with_config(fast_config());

        backend.save_item("hello").await.unwrap();
        backend.save_item("hello").await.unwrap();

        let found = backend.find_items_with_content("hello").await.unwrap();
        assert_eq!(found.len(), 2);
    }
}
