//! Admission service - deduplicating entry point for content submissions

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use metrics::counter;
use tracing::{debug, info, instrument};

use crate::domain::backend::ItemGateway;
use crate::domain::claim::ClaimStore;
use crate::domain::error::DomainError;
use crate::domain::fingerprint::Fingerprint;
use crate::domain::item::{Item, SubmissionResult};

/// Trait for the admission service (for dynamic dispatch in callers)
#[async_trait]
pub trait AdmissionServiceTrait: Send + Sync + Debug {
    /// Submits content for persistence, admitting each distinct content once
    async fn submit(&self, content: &str) -> Result<SubmissionResult, DomainError>;

    /// Returns all persisted items straight from the backend
    async fn get_all_items(&self) -> Result<Vec<Item>, DomainError>;
}

/// Admission service implementation
///
/// Safe for unbounded concurrent `submit` calls with distinct contents.
/// Concurrent calls with identical content are admitted exactly once
/// only when the configured claim store has a true atomic claim; the
/// shared cache variant can admit more than one.
#[derive(Debug)]
pub struct AdmissionService {
    gateway: Arc<dyn ItemGateway>,
    claims: Arc<dyn ClaimStore>,
}

impl AdmissionService {
    /// Creates a new admission service
    pub fn new(gateway: Arc<dyn ItemGateway>, claims: Arc<dyn ClaimStore>) -> Self {
        Self { gateway, claims }
    }
}

#[async_trait]
impl AdmissionServiceTrait for AdmissionService {
    #[instrument(skip(self, content))]
    async fn submit(&self, content: &str) -> Result<SubmissionResult, DomainError> {
        counter!("admission_submissions_total").increment(1);

        // Best-effort check against items persisted before this process
        // started. The claim below still guards the concurrent window.
        if !self
            .gateway
            .find_items_with_content(content)
            .await?
            .is_empty()
        {
            counter!("admission_duplicates_total").increment(1);
            debug!("content already persisted in backend");
            return Ok(SubmissionResult::duplicate(content));
        }

        let fingerprint = Fingerprint::of(content);

        if !self
            .claims
            .claim(fingerprint, Item::provisional(content))
            .await?
        {
            counter!("admission_duplicates_total").increment(1);
            debug!(%fingerprint, "fingerprint already claimed");
            return Ok(SubmissionResult::duplicate(content));
        }

        let item = self.gateway.save_item(content).await?;
        counter!("admission_items_saved_total").increment(1);
        info!(item_id = %item.id(), %fingerprint, "item admitted and saved");

        Ok(SubmissionResult::saved(&item))
    }

    #[instrument(skip(self))]
    async fn get_all_items(&self) -> Result<Vec<Item>, DomainError> {
        self.gateway.get_all_items().await
    }
}
