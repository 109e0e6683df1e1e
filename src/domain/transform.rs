//! Transform data model
//!
//! A [`Transform`] tracks one detected PII span through three stages:
//!
//! 1. **Detection** sets the entity type and the span's byte offsets into
//!    the original text (`end_offset` exclusive).
//! 2. **Anonymization** sets `original` (the exact substring) and
//!    `anonymized` (the type-specific replacement).
//! 3. **Rewriting** sets `anon_begin_offset`/`anon_end_offset`, the
//!    *inclusive* span of the replacement within the anonymized text.
//!
//! The fully populated [`TransformSet`] is the sole artifact needed to
//! invert the anonymization. It is persisted under a
//! [`RevertKey`](crate::domain::RevertKey) and deserialized read-only on
//! reversal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A contiguous byte range of text flagged as containing a sensitive
/// value, as reported by the detection provider.
///
/// `entity_type` is an open vocabulary: different detectors surface
/// different, sometimes locale-specific, type tags. Offsets are byte
/// offsets into the original text and must fall on UTF-8 character
/// boundaries; `end_offset` is exclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySpan {
    /// Detector-reported type tag (e.g. `EMAIL`, `PERSON`, `PHONE_NUMBER`)
    pub entity_type: String,
    /// Start of the span, inclusive
    pub begin_offset: usize,
    /// End of the span, exclusive
    pub end_offset: usize,
    /// Detector confidence, when the provider reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,
}

impl EntitySpan {
    /// Create a span without a confidence score
    pub fn new(entity_type: impl Into<String>, begin_offset: usize, end_offset: usize) -> Self {
        Self {
            entity_type: entity_type.into(),
            begin_offset,
            end_offset,
            score: None,
        }
    }

    /// Attach a detector confidence score
    pub fn with_score(mut self, score: f32) -> Self {
        self.score = Some(score);
        self
    }
}

/// The record tracking one span's original substring, its replacement,
/// and its position on both sides of the rewrite.
///
/// Stage-2 and stage-3 fields are `None` until the corresponding stage
/// has run. The anonymized-side offsets use the *inclusive* convention,
/// so an empty replacement yields `anon_end_offset == anon_begin_offset
/// - 1`, a degenerate but well-defined empty range, which is why they
/// are stored as `i64` (the value may be `-1`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Detector-reported entity type tag
    pub entity_type: String,
    /// Start of the span in the original text, inclusive
    pub begin_offset: usize,
    /// End of the span in the original text, exclusive
    pub end_offset: usize,
    /// Exact original substring at `[begin_offset, end_offset)` (stage 2)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
    /// Type-specific replacement string (stage 2)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anonymized: Option<String>,
    /// Start of the replacement in the anonymized text, inclusive (stage 3)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anon_begin_offset: Option<i64>,
    /// End of the replacement in the anonymized text, inclusive (stage 3)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anon_end_offset: Option<i64>,
}

impl Transform {
    /// Wrap a detected span into a stage-1 transform shell
    pub fn from_span(span: &EntitySpan) -> Self {
        Self {
            entity_type: span.entity_type.clone(),
            begin_offset: span.begin_offset,
            end_offset: span.end_offset,
            original: None,
            anonymized: None,
            anon_begin_offset: None,
            anon_end_offset: None,
        }
    }

    /// True once stage 2 (anonymization) has populated this transform
    pub fn is_annotated(&self) -> bool {
        self.original.is_some() && self.anonymized.is_some()
    }

    /// True once stage 3 (rewriting) has populated this transform
    pub fn is_rewritten(&self) -> bool {
        self.anon_begin_offset.is_some() && self.anon_end_offset.is_some()
    }
}

/// The ordered collection of transforms for one text field, plus the
/// consistency metadata stamped by the forward pass.
///
/// Invariant: transforms never overlap and are strictly increasing in
/// `begin_offset`. A set is created fresh per text field per call,
/// mutated in place through the three stages, and serialized for storage
/// immediately after stage 3.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformSet {
    /// Transforms in ascending original-text offset order
    pub transforms: Vec<Transform>,
    /// Byte length of the anonymized text produced by the forward pass
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anonymized_len: Option<usize>,
    /// Hex SHA-256 of the anonymized text produced by the forward pass
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anonymized_sha256: Option<String>,
    /// When this set was created
    pub created_at: DateTime<Utc>,
}

impl TransformSet {
    /// Create a set from stage-1 transforms
    pub fn new(transforms: Vec<Transform>) -> Self {
        Self {
            transforms,
            anonymized_len: None,
            anonymized_sha256: None,
            created_at: Utc::now(),
        }
    }

    /// Number of transforms in the set
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// True when the set contains no transforms
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// True once every transform has completed stages 2 and 3
    pub fn is_fully_annotated(&self) -> bool {
        self.transforms
            .iter()
            .all(|t| t.is_annotated() && t.is_rewritten())
    }
}

impl Default for TransformSet {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_transform() -> Transform {
        Transform {
            entity_type: "EMAIL".to_string(),
            begin_offset: 22,
            end_offset: 39,
            original: Some("john@example.com?".to_string()),
            anonymized: Some("anon@anon.com".to_string()),
            anon_begin_offset: Some(20),
            anon_end_offset: Some(32),
        }
    }

    #[test]
    fn test_from_span_is_stage_one_only() {
        let span = EntitySpan::new("PERSON", 8, 18).with_score(0.97);
        let transform = Transform::from_span(&span);

        assert_eq!(transform.entity_type, "PERSON");
        assert_eq!(transform.begin_offset, 8);
        assert_eq!(transform.end_offset, 18);
        assert!(!transform.is_annotated());
        assert!(!transform.is_rewritten());
    }

    #[test]
    fn test_fully_annotated() {
        let mut set = TransformSet::new(vec![sample_transform()]);
        assert!(set.is_fully_annotated());

        set.transforms[0].anon_end_offset = None;
        assert!(!set.is_fully_annotated());
    }

    #[test]
    fn test_empty_set() {
        let set = TransformSet::default();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        // Vacuously complete; the rewriter treats it as the identity.
        assert!(set.is_fully_annotated());
    }

    #[test]
    fn test_serde_round_trips_offsets_as_integers() {
        let set = TransformSet::new(vec![sample_transform()]);
        let json = serde_json::to_value(&set).unwrap();

        // Offsets must survive as integers, not strings or decimals.
        assert_eq!(json["transforms"][0]["begin_offset"], 22);
        assert_eq!(json["transforms"][0]["anon_end_offset"], 32);

        let back: TransformSet = serde_json::from_value(json).unwrap();
        assert_eq!(back.transforms, set.transforms);
    }

    #[test]
    fn test_serde_degenerate_anon_range() {
        let mut transform = sample_transform();
        transform.anonymized = Some(String::new());
        transform.anon_begin_offset = Some(0);
        transform.anon_end_offset = Some(-1);

        let json = serde_json::to_string(&transform).unwrap();
        let back: Transform = serde_json::from_str(&json).unwrap();
        assert_eq!(back.anon_end_offset, Some(-1));
    }

    #[test]
    fn test_stage_two_fields_omitted_when_unset() {
        let span = EntitySpan::new("PHONE", 0, 12);
        let transform = Transform::from_span(&span);
        let json = serde_json::to_value(&transform).unwrap();

        assert!(json.get("original").is_none());
        assert!(json.get("anonymized").is_none());
    }
}
