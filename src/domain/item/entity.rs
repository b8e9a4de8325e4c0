//! Item domain entities

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Regex pattern for valid item IDs: item-{uuid}
static ID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^item-[a-f0-9]{8}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{12}$").unwrap()
});

/// Maximum length for item IDs
pub const MAX_ID_LENGTH: usize = 41; // "item-" + 36 char UUID

/// Validated item identifier
///
/// Authoritative IDs are assigned by the backend at persist time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemId(String);

impl ItemId {
    /// Create a new validated item ID
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        validate_item_id(&id)?;
        Ok(Self(id))
    }

    /// Generate a new item ID with UUID
    pub fn generate() -> Self {
        let uuid = uuid::Uuid::new_v4();
        Self(format!("item-{}", uuid))
    }

    /// Get the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ItemId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ItemId> for String {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validate an item ID string
pub fn validate_item_id(id: &str) -> Result<(), DomainError> {
    if id.is_empty() {
        return Err(DomainError::invalid_id("Item ID cannot be empty"));
    }

    if id.len() > MAX_ID_LENGTH {
        return Err(DomainError::invalid_id(format!(
            "Item ID exceeds maximum length of {} characters",
            MAX_ID_LENGTH
        )));
    }

    if !ID_PATTERN.is_match(id) {
        return Err(DomainError::invalid_id(format!(
            "Invalid item ID '{}': must be in format item-{{uuid}}",
            id
        )));
    }

    Ok(())
}

/// A piece of submitted content together with its identifier
///
/// Items are owned by the backend once persisted; the admission layer
/// holds no long-lived reference to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    content: String,
}

impl Item {
    /// Create an item with a known ID
    pub fn new(id: ItemId, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
        }
    }

    /// Create a provisional item for a claim-store entry
    ///
    /// The generated ID is a cache-side placeholder; it is never the
    /// authoritative ID the backend assigns at persist time.
    pub fn provisional(content: impl Into<String>) -> Self {
        Self::new(ItemId::generate(), content)
    }

    /// The item's identifier
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    /// The submitted content
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Outcome of a single submission, returned once per call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub success: bool,
    pub message: String,
}

impl SubmissionResult {
    /// Create a result with an explicit outcome and message
    pub fn new(success: bool, message: impl Into<String>) -> Self {
        Self {
            success,
            message: message.into(),
        }
    }

    /// Successful save of a persisted item
    pub fn saved(item: &Item) -> Self {
        Self::new(
            true,
            format!(
                "Item with content {} saved with id {}",
                item.content(),
                item.id()
            ),
        )
    }

    /// Rejected duplicate submission
    pub fn duplicate(content: &str) -> Self {
        Self::new(
            false,
            format!("Duplicate item received with content {}.", content),
        )
    }
}
