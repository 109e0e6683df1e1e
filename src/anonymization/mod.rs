//! Reversible anonymization pipeline
//!
//! This module implements the offset-tracking transform core:
//!
//! - **Strategies**: deterministic, type-specific replacement values
//! - **Registry**: dispatch from open-vocabulary entity type tags to
//!   strategies, with a configurable fallback
//! - **Builder**: stages 1 and 2 of the transform lifecycle
//! - **Rewriter**: the forward and inverse text passes (stage 3)
//! - **Engine**: orchestration over injected detection and storage
//!   providers, for single texts and record batches
//!
//! # Usage
//!
//! ```rust,ignore
//! use pii_scrub::anonymization::ScrubEngine;
//! use pii_scrub::config::EngineConfig;
//!
//! let engine = ScrubEngine::new(EngineConfig::default(), detector, store)?;
//! let result = engine.anonymize_text(text).await?;
//! let original = engine.revert_text(&result.text, &result.revert_key).await?;
//! ```

pub mod builder;
pub mod engine;
pub mod registry;
pub mod rewriter;
pub mod strategies;

// Re-export main types
pub use builder::TransformBuilder;
pub use engine::{AnonymizedText, ScrubEngine, REVERT_KEY_FIELD};
pub use registry::StrategyRegistry;
