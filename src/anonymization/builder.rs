//! Transform builder
//!
//! Stage 1 and stage 2 of the transform lifecycle: wrap detected spans
//! into transform shells ([`build`](TransformBuilder::build)), then
//! extract each span's original substring and compute its replacement
//! ([`annotate`](TransformBuilder::annotate)).

use crate::anonymization::registry::StrategyRegistry;
use crate::config::FallbackPolicy;
use crate::domain::{EntitySpan, Result, ScrubError, Transform, TransformSet};
use tracing::warn;

/// Builds and annotates transform sets from detected spans
#[derive(Debug)]
pub struct TransformBuilder {
    registry: StrategyRegistry,
    fallback: FallbackPolicy,
}

impl TransformBuilder {
    /// Create a builder with the given strategy registry and fallback policy
    pub fn new(registry: StrategyRegistry, fallback: FallbackPolicy) -> Self {
        Self { registry, fallback }
    }

    /// Wrap detected spans into a stage-1 transform set
    ///
    /// Spans must arrive sorted ascending by `begin_offset`; a
    /// non-ascending list is a contract violation and fails with a
    /// `Validation` error. A span that overlaps the previously kept one
    /// is dropped with a warning. A span with `begin >= end` is
    /// rejected.
    pub fn build(&self, spans: &[EntitySpan]) -> Result<TransformSet> {
        let mut transforms: Vec<Transform> = Vec::with_capacity(spans.len());
        let mut prev_begin: Option<usize> = None;
        let mut prev_end = 0usize;

        for span in spans {
            if span.begin_offset >= span.end_offset {
                return Err(ScrubError::Validation(format!(
                    "Span for '{}' has begin_offset {} >= end_offset {}",
                    span.entity_type, span.begin_offset, span.end_offset
                )));
            }
            if let Some(prev) = prev_begin {
                if span.begin_offset < prev {
                    return Err(ScrubError::Validation(format!(
                        "Spans not sorted: begin_offset {} follows {}",
                        span.begin_offset, prev
                    )));
                }
            }
            if span.begin_offset < prev_end {
                warn!(
                    entity_type = %span.entity_type,
                    begin_offset = span.begin_offset,
                    end_offset = span.end_offset,
                    "Dropping span overlapping the previous one"
                );
                continue;
            }

            prev_begin = Some(span.begin_offset);
            prev_end = span.end_offset;
            transforms.push(Transform::from_span(span));
        }

        Ok(TransformSet::new(transforms))
    }

    /// Run stage 2 on every transform in the set
    ///
    /// Extracts `original = text[begin..end]` and computes `anonymized`
    /// via the registry; an unregistered entity type falls to the
    /// configured [`FallbackPolicy`]. All transforms are validated and
    /// computed before any is written back, so a failure leaves the set
    /// untouched (annotation is all-or-nothing before persistence).
    ///
    /// # Errors
    ///
    /// Returns a `Validation` error when a span's offsets fall outside
    /// the text or off a UTF-8 character boundary, or when the fallback
    /// policy is `Reject` and an entity type has no strategy.
    pub fn annotate(&self, text: &str, set: &mut TransformSet) -> Result<()> {
        let mut annotations: Vec<(String, String)> = Vec::with_capacity(set.transforms.len());

        for transform in &set.transforms {
            check_bounds(text, transform)?;
            let original = text[transform.begin_offset..transform.end_offset].to_string();
            let anonymized = match self.registry.get(&transform.entity_type) {
                Some(strategy) => strategy.anonymize(&original),
                None => match self.fallback {
                    FallbackPolicy::PassThrough => original.clone(),
                    FallbackPolicy::Delete => String::new(),
                    FallbackPolicy::Reject => {
                        return Err(ScrubError::Validation(format!(
                            "No anonymization strategy registered for entity type '{}'",
                            transform.entity_type
                        )));
                    }
                },
            };
            annotations.push((original, anonymized));
        }

        for (transform, (original, anonymized)) in
            set.transforms.iter_mut().zip(annotations.into_iter())
        {
            transform.original = Some(original);
            transform.anonymized = Some(anonymized);
        }

        Ok(())
    }

    /// Convenience wrapper running stages 1 and 2 back to back
    pub fn build_and_annotate(&self, text: &str, spans: &[EntitySpan]) -> Result<TransformSet> {
        let mut set = self.build(spans)?;
        self.annotate(text, &mut set)?;
        Ok(set)
    }
}

/// Validate a transform's original-text offsets against the text
fn check_bounds(text: &str, transform: &Transform) -> Result<()> {
    if transform.begin_offset > transform.end_offset {
        return Err(ScrubError::Validation(format!(
            "Span for '{}' has begin_offset {} > end_offset {}",
            transform.entity_type, transform.begin_offset, transform.end_offset
        )));
    }
    if transform.end_offset > text.len() {
        return Err(ScrubError::Validation(format!(
            "Span for '{}' ends at {} but text is {} bytes",
            transform.entity_type,
            transform.end_offset,
            text.len()
        )));
    }
    if !text.is_char_boundary(transform.begin_offset) || !text.is_char_boundary(transform.end_offset)
    {
        return Err(ScrubError::Validation(format!(
            "Span for '{}' at [{}, {}) is not on a character boundary",
            transform.entity_type, transform.begin_offset, transform.end_offset
        )));
    }
    Ok(())
}
