//! Item Admission Gateway
//!
//! A deduplicating admission layer for concurrent content submissions:
//! - Content fingerprinting (SHA-256 folded to 64 bits)
//! - Claim-before-save protocol against pluggable claim stores
//! - A process-local store with a true atomic claim, and a simulated
//!   remote cache whose independent get/set calls leave a race window
//! - A simulated authoritative backend for tests and demos

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use infrastructure::backend::{SimulatedBackendConfig, SimulatedItemBackend};
use infrastructure::claim::{ClaimStoreConfig, ClaimStoreFactory};
use infrastructure::services::AdmissionService;

/// Create an admission service wired to the simulated backend and the
/// configured claim store
pub fn create_admission_service(
    config: &AppConfig,
    claim_config: &ClaimStoreConfig,
) -> Arc<AdmissionService> {
    let backend_config = SimulatedBackendConfig::default()
        .with_find_latency(Duration::from_millis(config.backend.find_latency_ms))
        .with_save_latency(Duration::from_millis(config.backend.save_latency_ms));

    let gateway = Arc::new(SimulatedItemBackend::with_config(backend_config));
    let claims = ClaimStoreFactory::new().create(claim_config);

    info!(store = %claim_config.store_type, "Claim store initialized");

    Arc::new(AdmissionService::new(gateway, claims))
}
