//! Transform store provider trait
//!
//! Persistence of the transform record is out of scope for this crate:
//! any key-value store keyed by the generated revert key will do. The
//! store must return the identical structure it was handed. In
//! particular, offset fields must round-trip as integers, not as a
//! decimal or string representation.

use crate::domain::{Result, RevertKey, TransformSet};
use async_trait::async_trait;

/// Trait for transform set storage providers
#[async_trait]
pub trait TransformStore: Send + Sync {
    /// Persist a fully annotated transform set, returning the generated
    /// revert key
    ///
    /// Callers must only persist sets that completed all three stages;
    /// annotation is all-or-nothing before persistence.
    async fn put(&self, set: &TransformSet) -> Result<RevertKey>;

    /// Retrieve the transform set stored under the given revert key
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`](crate::domain::StoreError::NotFound)
    /// (wrapped) when no set is stored under the key.
    async fn get(&self, key: &RevertKey) -> Result<TransformSet>;
}
