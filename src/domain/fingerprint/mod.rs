//! Content fingerprinting
//!
//! A fingerprint is a 64-bit fold of a cryptographic digest, used as a
//! cheap proxy key for content equality. Collisions are possible and are
//! treated as duplicates; at 64 bits the false-positive probability is
//! negligible for any realistic corpus size.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// 64-bit content fingerprint
///
/// Derived from the SHA-256 digest of the UTF-8 encoded content: the
/// first 8 digest bytes interpreted as a little-endian signed integer.
/// The same content always folds to the same fingerprint, across calls
/// and across process restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(i64);

impl Fingerprint {
    /// Fingerprint of empty or absent content
    pub const ZERO: Fingerprint = Fingerprint(0);

    /// Computes the fingerprint of the given content
    ///
    /// Empty content maps to [`Fingerprint::ZERO`] by policy rather than
    /// being hashed.
    pub fn of(content: &str) -> Self {
        if content.is_empty() {
            return Self::ZERO;
        }

        let digest = Sha256::digest(content.as_bytes());
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&digest[..8]);

        Self(i64::from_le_bytes(bytes))
    }

    /// Returns the raw 64-bit value
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0 as u64)
    }
}

impl From<i64> for Fingerprint {
    fn from(value: i64) -> Self {
        Self(value)
    }
}
