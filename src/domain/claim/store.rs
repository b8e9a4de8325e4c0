//! Claim store trait definition

use std::fmt::Debug;

use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::fingerprint::Fingerprint;
use crate::domain::item::Item;

/// Reservation store for content fingerprints
///
/// A claim is taken before the slower authoritative save so that
/// concurrent submissions of the same content cannot all reach the
/// backend. How strong that guarantee is depends entirely on the
/// implementation: a store whose `claim` is a single atomic step admits
/// exactly one winner per fingerprint, while a store built from
/// independent check and write calls leaves a race window.
#[async_trait]
pub trait ClaimStore: Send + Sync + Debug {
    /// Claims the fingerprint if it is not already held
    ///
    /// Returns `true` if this call took the claim, `false` if the
    /// fingerprint was already claimed. A losing call must not mutate
    /// the store.
    async fn claim(&self, fingerprint: Fingerprint, item: Item) -> Result<bool, DomainError>;

    /// Returns the item claimed under the fingerprint, if any
    async fn get(&self, fingerprint: Fingerprint) -> Result<Option<Item>, DomainError>;

    /// Returns a snapshot of all claimed items, in no particular order
    async fn list(&self) -> Result<Vec<Item>, DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Mock claim store for testing
    ///
    /// Claims behave like a plain map by default; outcomes and errors
    /// can be scripted per test.
    #[derive(Debug)]
    pub struct MockClaimStore {
        entries: Mutex<HashMap<Fingerprint, Item>>,
        forced_outcome: Mutex<Option<bool>>,
        error: Mutex<Option<String>>,
    }

    impl Default for MockClaimStore {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockClaimStore {
        pub fn new() -> Self {
            Self {
                entries: Mutex::new(HashMap::new()),
                forced_outcome: Mutex::new(None),
                error: Mutex::new(None),
            }
        }

        /// Forces every `claim` call to return the given outcome
        pub fn with_claim_outcome(self, outcome: bool) -> Self {
            *self.forced_outcome.lock().unwrap() = Some(outcome);
            self
        }

        pub fn with_error(self, error: impl Into<String>) -> Self {
            *self.error.lock().unwrap() = Some(error.into());
            self
        }

        fn check_error(&self) -> Result<(), DomainError> {
            if let Some(error) = self.error.lock().unwrap().clone() {
                return Err(DomainError::cache(error));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl ClaimStore for MockClaimStore {
        async fn claim(&self, fingerprint: Fingerprint, item: Item) -> Result<bool, DomainError> {
            self.check_error()?;

            if let Some(outcome) = *self.forced_outcome.lock().unwrap() {
                return Ok(outcome);
            }

            let mut entries = self.entries.lock().unwrap();
            if entries.contains_key(&fingerprint) {
                Ok(false)
            } else {
                entries.insert(fingerprint, item);
                Ok(true)
            }
        }

        async fn get(&self, fingerprint: Fingerprint) -> Result<Option<Item>, DomainError> {
            self.check_error()?;
            Ok(self.entries.lock().unwrap().get(&fingerprint).cloned())
        }

        async fn list(&self) -> Result<Vec<Item>, DomainError> {
            self.check_error()?;
            Ok(self.entries.lock().unwrap().values().cloned().collect())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_mock_claim_store_first_claim_wins() {
            let store = MockClaimStore::new();
            let fp = Fingerprint::of("hello");

            assert!(store.claim(fp, Item::provisional("hello")).await.unwrap());
            assert!(!store.claim(fp, Item::provisional("hello")).await.unwrap());
        }

        #[tokio::test]
        async fn test_mock_claim_store_forced_outcome() {
            let store = MockClaimStore::new().with_claim_outcome(false);
            let fp = Fingerprint::of("hello");

            assert!(!store.claim(fp, Item::provisional("hello")).await.unwrap());
        }

        #[tokio::test]
        async fn test_mock_claim_store_with_error() {
            let store = MockClaimStore::new().with_error("Test error");
            let fp = Fingerprint::of("hello");

            let result = store.claim(fp, Item::provisional("hello")).await;
            assert!(result.is_err());
        }
    }
}
