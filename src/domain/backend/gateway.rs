//! Backend gateway trait definition

use std::fmt::Debug;

use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::item::Item;

/// Authoritative item store, consumed as an external collaborator
///
/// The gateway is the source of truth and is slow relative to a claim
/// store; its calls may block for real or simulated I/O. Callers must
/// not hold a claim-store lock across these calls.
#[async_trait]
pub trait ItemGateway: Send + Sync + Debug {
    /// Returns every persisted item whose content matches exactly
    async fn find_items_with_content(&self, content: &str) -> Result<Vec<Item>, DomainError>;

    /// Persists the content and returns the item with its assigned ID
    async fn save_item(&self, content: &str) -> Result<Item, DomainError>;

    /// Returns all persisted items
    async fn get_all_items(&self) -> Result<Vec<Item>, DomainError>;
}
