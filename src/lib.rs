//! # pii-scrub - Reversible PII Anonymization
//!
//! `pii-scrub` anonymizes free-text fields containing personally
//! identifiable information and can later reverse the anonymization
//! exactly, given the saved transform record.
//!
//! ## Overview
//!
//! The core is an offset-tracking transform engine. Given a text and a
//! list of detected PII spans (type tag plus begin/end byte offsets), it:
//!
//! - replaces each span with a deterministic, type-specific placeholder;
//! - records enough positional metadata to reconstruct the original text
//!   byte-for-byte from the anonymized text plus the saved
//!   [`TransformSet`](domain::TransformSet);
//! - performs that reconstruction later, detecting a mismatched
//!   transform set instead of silently corrupting the output.
//!
//! Detection and persistence are external collaborators, consumed
//! through the [`providers`] traits and injected at construction.
//!
//! ## Architecture
//!
//! - [`domain`] - Core domain types, errors, and the transform data model
//! - [`anonymization`] - Strategies, registry, builder, rewriter, engine
//! - [`providers`] - Boundary traits for detection and storage
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use pii_scrub::anonymization::ScrubEngine;
//! use pii_scrub::config::EngineConfig;
//! use pii_scrub::providers::InMemoryTransformStore;
//!
//! # async fn example(detector: Arc<dyn pii_scrub::providers::EntityDetector>)
//! #     -> pii_scrub::domain::Result<()> {
//! let store = Arc::new(InMemoryTransformStore::new());
//! let engine = ScrubEngine::new(EngineConfig::default(), detector, store)?;
//!
//! let result = engine
//!     .anonymize_text("Contact John Smith at john@example.com")
//!     .await?;
//! assert!(!result.text.contains("Smith"));
//!
//! let original = engine.revert_text(&result.text, &result.revert_key).await?;
//! assert_eq!(original, "Contact John Smith at john@example.com");
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return
//! [`Result<T, ScrubError>`](domain::Result). Out-of-range span offsets
//! fail fast as `Validation` errors; reverting with the wrong transform
//! set fails as `TransformMismatch`.
//!
//! ## Logging
//!
//! The crate logs through `tracing`: dropped overlapping spans, field
//! name sanitization, and per-field transform counts are all surfaced as
//! structured events.

pub mod anonymization;
pub mod config;
pub mod domain;
pub mod logging;
pub mod providers;
