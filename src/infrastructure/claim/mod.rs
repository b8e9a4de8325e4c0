//! Claim store infrastructure - ClaimStore implementations

mod factory;
mod local;
mod shared_cache;

pub use factory::{ClaimStoreConfig, ClaimStoreFactory, ClaimStoreType};
pub use local::LocalClaimStore;
pub use shared_cache::{SharedCacheConfig, SharedCacheStore};
