//! Main scrub engine
//!
//! Orchestrates detection, transform building, text rewriting, and
//! transform-set persistence for single texts and for record batches.
//!
//! # Architecture
//!
//! Per text field, in sequence: the injected detector produces raw
//! entity spans; the [`TransformBuilder`] wraps and annotates them; the
//! forward rewriter produces the anonymized text and the fully
//! annotated [`TransformSet`]; the injected store persists the set under
//! a generated [`RevertKey`]. Reverting fetches the set by key and runs
//! the inverse rewriter.
//!
//! # Examples
//!
//! ```no_run
//! use std::sync::Arc;
//! use pii_scrub::anonymization::ScrubEngine;
//! use pii_scrub::config::EngineConfig;
//! use pii_scrub::providers::InMemoryTransformStore;
//!
//! # async fn example(detector: Arc<dyn pii_scrub::providers::EntityDetector>) -> pii_scrub::domain::Result<()> {
//! let store = Arc::new(InMemoryTransformStore::new());
//! let engine = ScrubEngine::new(EngineConfig::default(), detector, store)?;
//!
//! let result = engine.anonymize_text("Contact John Smith at john@example.com").await?;
//! let original = engine.revert_text(&result.text, &result.revert_key).await?;
//! # Ok(())
//! # }
//! ```

use crate::anonymization::builder::TransformBuilder;
use crate::anonymization::registry::StrategyRegistry;
use crate::anonymization::rewriter;
use crate::config::EngineConfig;
use crate::domain::{Result, RevertKey, ScrubError};
use crate::providers::{EntityDetector, TransformStore};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Name of the record field carrying the reference token back to the caller
pub const REVERT_KEY_FIELD: &str = "revert_key";

/// Result of anonymizing one text field
#[derive(Debug, Clone)]
pub struct AnonymizedText {
    /// The rewritten text with every detected span replaced
    pub text: String,
    /// Token under which the transform set was persisted
    pub revert_key: RevertKey,
    /// Number of spans replaced
    pub transform_count: usize,
}

/// Reversible anonymization engine
///
/// Holds its collaborators as constructor-injected capabilities; there
/// is no global client state. The engine is `Send + Sync` and can be
/// shared across tasks with `Arc`; each call owns its own transform
/// set, so records are safe to process in parallel.
pub struct ScrubEngine {
    config: EngineConfig,
    detector: Arc<dyn EntityDetector>,
    store: Arc<dyn TransformStore>,
    builder: TransformBuilder,
}

impl ScrubEngine {
    /// Create an engine from configuration and injected providers
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error when the configuration fails
    /// validation.
    pub fn new(
        config: EngineConfig,
        detector: Arc<dyn EntityDetector>,
        store: Arc<dyn TransformStore>,
    ) -> Result<Self> {
        config
            .validate()
            .map_err(|e| ScrubError::Configuration(e.to_string()))?;

        let registry = StrategyRegistry::builtin(config.locale);
        let builder = TransformBuilder::new(registry, config.fallback);

        Ok(Self {
            config,
            detector,
            store,
            builder,
        })
    }

    /// Anonymize one text, persisting the transform set
    ///
    /// Runs detection, builds and annotates the transform set, rewrites
    /// the text, and persists the fully annotated set. The set is only
    /// persisted after every stage completed, so a failure leaves no
    /// partial state behind.
    pub async fn anonymize_text(&self, text: &str) -> Result<AnonymizedText> {
        let spans = self
            .detector
            .detect_entities(text, self.config.locale)
            .await?;

        let mut set = self.builder.build(&spans)?;
        self.builder.annotate(text, &mut set)?;
        let anonymized = rewriter::to_anonymized(text, &mut set)?;
        let transform_count = set.len();

        let revert_key = self.store.put(&set).await?;

        debug!(
            revert_key = %revert_key,
            transform_count,
            "Anonymized text field"
        );

        Ok(AnonymizedText {
            text: anonymized,
            revert_key,
            transform_count,
        })
    }

    /// Reconstruct the original text from its anonymized form and the
    /// persisted transform set
    ///
    /// With `verify_on_revert` enabled (the default), the stored
    /// length/checksum metadata is checked against the supplied text and
    /// a mismatch fails with `TransformMismatch` rather than silently
    /// producing corrupt output.
    pub async fn revert_text(&self, anonymized: &str, revert_key: &RevertKey) -> Result<String> {
        let set = self.store.get(revert_key).await?;

        if self.config.verify_on_revert {
            rewriter::to_original(anonymized, &set)
        } else {
            rewriter::to_original_unchecked(anonymized, &set)
        }
    }

    /// Anonymize a batch of JSON records
    ///
    /// For each record, the named text field is anonymized in place and
    /// a `revert_key` field is added; all other fields pass through
    /// unchanged. A record without the field (or with a non-string
    /// value) passes through untouched with a warning. A record whose
    /// anonymization fails is skipped entirely; unanonymized text is
    /// never emitted.
    pub async fn anonymize_records(
        &self,
        records: Vec<Value>,
        field_name: &str,
    ) -> Result<Vec<Value>> {
        let field = sanitize_field_name(field_name, &self.config.text_field);
        let mut out = Vec::with_capacity(records.len());

        for mut record in records {
            let text = match record.get(&field).and_then(Value::as_str) {
                Some(text) => text.to_string(),
                None => {
                    warn!(field = %field, "Record has no text field; passing through");
                    out.push(record);
                    continue;
                }
            };

            match self.anonymize_text(&text).await {
                Ok(result) => {
                    if let Some(obj) = record.as_object_mut() {
                        obj.insert(field.clone(), Value::String(result.text));
                        obj.insert(
                            REVERT_KEY_FIELD.to_string(),
                            Value::String(result.revert_key.into_inner()),
                        );
                    }
                    out.push(record);
                }
                Err(e) => {
                    // Fail-safe: skip rather than emit unanonymized text
                    error!(error = %e, "Failed to anonymize record; skipping");
                    continue;
                }
            }
        }

        Ok(out)
    }

    /// Revert a batch of previously anonymized JSON records
    ///
    /// For each record, the `revert_key` field is consumed and the named
    /// text field replaced with the reconstructed original; all other
    /// fields pass through unchanged. Records missing the field or the
    /// key, and records whose reversal fails, pass through untouched
    /// with a warning; their content is already anonymized, so keeping
    /// them leaks nothing.
    pub async fn revert_records(
        &self,
        records: Vec<Value>,
        field_name: &str,
    ) -> Result<Vec<Value>> {
        let field = sanitize_field_name(field_name, &self.config.text_field);
        let mut out = Vec::with_capacity(records.len());

        for mut record in records {
            let text = record.get(&field).and_then(Value::as_str).map(String::from);
            let key = record
                .get(REVERT_KEY_FIELD)
                .and_then(Value::as_str)
                .and_then(|k| RevertKey::new(k).ok());

            let (text, key) = match (text, key) {
                (Some(text), Some(key)) => (text, key),
                _ => {
                    warn!(field = %field, "Record missing text field or revert key; passing through");
                    out.push(record);
                    continue;
                }
            };

            match self.revert_text(&text, &key).await {
                Ok(original) => {
                    if let Some(obj) = record.as_object_mut() {
                        obj.insert(field.clone(), Value::String(original));
                        obj.remove(REVERT_KEY_FIELD);
                    }
                    out.push(record);
                }
                Err(e) => {
                    error!(error = %e, revert_key = %key, "Failed to revert record; passing through");
                    out.push(record);
                }
            }
        }

        Ok(out)
    }

    /// The configured locale
    pub fn locale(&self) -> crate::domain::Locale {
        self.config.locale
    }
}

/// Sanitize a caller-supplied field name to `[A-Za-z0-9_]`
///
/// Separator characters (`-`, `.`, space) map to underscores; anything
/// else outside the safe set is stripped. An empty result falls back to
/// the configured default. Logs a warning when sanitization changed the
/// value.
fn sanitize_field_name(field_name: &str, default: &str) -> String {
    let sanitized: String = field_name
        .chars()
        .filter_map(|c| match c {
            '-' | '.' | ' ' => Some('_'),
            c if c.is_ascii_alphanumeric() || c == '_' => Some(c),
            _ => None,
        })
        .collect();

    if sanitized.is_empty() {
        warn!(
            field_name,
            default, "Empty field name after sanitization; using default"
        );
        return default.to_string();
    }
    if sanitized != field_name {
        warn!(
            field_name,
            sanitized, "Field name contained unacceptable characters; sanitized"
        );
    }
    sanitized
}
