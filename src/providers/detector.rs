//! Entity detection provider trait
//!
//! Detection itself is out of scope for this crate: a cloud NLP model or
//! similar service produces the raw entity spans. This trait is the
//! constructor-injected boundary the engine consumes, replacing the
//! singleton client the original service held globally.

use crate::domain::{EntitySpan, Locale, Result};
use async_trait::async_trait;

/// Trait for PII entity detection providers
///
/// Implementations call out to a detection service and return the raw
/// spans in the original text's byte-offset coordinate space, sorted
/// ascending by `begin_offset`. `end_offset` is exclusive. Overlap
/// handling is the engine's concern, not the provider's.
#[async_trait]
pub trait EntityDetector: Send + Sync {
    /// Detect PII entity spans in the given text
    ///
    /// # Errors
    ///
    /// Returns a [`DetectionError`](crate::domain::DetectionError)
    /// (wrapped) when the detection service fails.
    async fn detect_entities(&self, text: &str, locale: Locale) -> Result<Vec<EntitySpan>>;
}
