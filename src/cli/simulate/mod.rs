//! Simulate command - drives concurrent submissions through the admission service

use std::time::Instant;

use clap::Args;
use futures::future::join_all;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::infrastructure::claim::{ClaimStoreConfig, ClaimStoreType};
use crate::infrastructure::logging;
use crate::infrastructure::services::AdmissionServiceTrait;

/// Content shared by the duplicate submissions
const CONTENDED_CONTENT: &str = "identical content";

#[derive(Args)]
pub struct SimulateArgs {
    /// Claim store backend (local or shared_cache)
    #[arg(long, default_value = "local")]
    pub store: String,

    /// Number of concurrent submissions sharing one content
    #[arg(long, default_value_t = 10)]
    pub duplicates: usize,

    /// Number of concurrent submissions with pairwise-distinct contents
    #[arg(long, default_value_t = 10)]
    pub distinct: usize,
}

/// Run the submission simulation
pub async fn run(args: SimulateArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    let store_type: ClaimStoreType = args.store.parse()?;
    let claim_config = ClaimStoreConfig::from_env()?.with_store_type(store_type);

    let service = crate::create_admission_service(&config, &claim_config);

    info!(
        duplicates = args.duplicates,
        distinct = args.distinct,
        store = %store_type,
        "Starting submission simulation"
    );

    let started = Instant::now();
    let mut tasks = Vec::with_capacity(args.duplicates + args.distinct);

    for _ in 0..args.duplicates {
        let service = service.clone();
        tasks.push(tokio::spawn(async move {
            service.submit(CONTENDED_CONTENT).await
        }));
    }

    for i in 0..args.distinct {
        let service = service.clone();
        tasks.push(tokio::spawn(async move {
            service.submit(&format!("distinct content {}", i)).await
        }));
    }

    let mut saved = 0usize;
    let mut duplicates = 0usize;

    for outcome in join_all(tasks).await {
        let result = outcome??;

        if result.success {
            saved += 1;
        } else {
            duplicates += 1;
        }

        info!(success = result.success, message = %result.message, "submission finished");
    }

    let persisted = service.get_all_items().await?;

    info!(
        saved,
        duplicates,
        persisted = persisted.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Simulation finished"
    );

    let expected = args.distinct + usize::from(args.duplicates > 0);
    if persisted.len() > expected {
        warn!(
            persisted = persisted.len(),
            expected,
            "backend holds duplicates; the claim window admitted more than one submission per content"
        );
    }

    Ok(())
}
