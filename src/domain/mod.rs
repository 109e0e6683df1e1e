//! Domain models and types for the scrub engine.
//!
//! This module contains the core data model and business rules:
//!
//! - **Strongly-typed identifiers** ([`RevertKey`])
//! - **Transform data model** ([`EntitySpan`], [`Transform`], [`TransformSet`])
//! - **Locales** ([`Locale`])
//! - **Error types** ([`ScrubError`], [`DetectionError`], [`StoreError`])
//! - **Result type alias** ([`Result`])
//!
//! # Type Safety
//!
//! The revert key uses the newtype pattern so persisted-mapping tokens
//! can't be confused with other strings:
//!
//! ```rust
//! use pii_scrub::domain::RevertKey;
//!
//! let key = RevertKey::generate();
//! let reparsed = RevertKey::new(key.as_str()).unwrap();
//! assert_eq!(key, reparsed);
//! ```
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, ScrubError>`](Result):
//!
//! ```rust
//! use pii_scrub::domain::{Result, ScrubError};
//!
//! fn example(offset: usize, len: usize) -> Result<()> {
//!     if offset > len {
//!         return Err(ScrubError::Validation(format!(
//!             "offset {offset} exceeds text length {len}"
//!         )));
//!     }
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod ids;
pub mod locale;
pub mod result;
pub mod transform;

// Re-export commonly used types for convenience
pub use errors::{DetectionError, ScrubError, StoreError};
pub use ids::RevertKey;
pub use locale::Locale;
pub use result::Result;
pub use transform::{EntitySpan, Transform, TransformSet};
