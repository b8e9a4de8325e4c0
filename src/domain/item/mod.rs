//! Item domain - submitted content and submission outcomes

mod entity;

pub use entity::{validate_item_id, Item, ItemId, SubmissionResult, MAX_ID_LENGTH};
