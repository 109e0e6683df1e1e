//! Domain identifier types with validation
//!
//! This module provides the newtype wrapper for the opaque token under
//! which a transform set is persisted. The newtype prevents revert keys
//! from being mixed up with other string-shaped values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Revert key newtype wrapper
///
/// An opaque, randomly generated token identifying one persisted
/// [`TransformSet`](crate::domain::TransformSet). Callers hand the key
/// back to retrieve the set and reverse the anonymization.
///
/// # Examples
///
/// ```
/// use pii_scrub::domain::ids::RevertKey;
///
/// let key = RevertKey::generate();
/// assert!(!key.as_str().is_empty());
///
/// let parsed = RevertKey::new(key.as_str()).unwrap();
/// assert_eq!(parsed, key);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RevertKey(String);

impl RevertKey {
    /// Creates a RevertKey from an existing token string
    ///
    /// # Errors
    ///
    /// Returns an error if the token is empty or whitespace-only.
    pub fn new(key: impl Into<String>) -> Result<Self, String> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err("Revert key cannot be empty".to_string());
        }
        Ok(Self(key))
    }

    /// Generates a fresh random revert key (UUID v4)
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for RevertKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RevertKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for RevertKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
