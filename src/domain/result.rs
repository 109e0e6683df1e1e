//! Result type alias for the scrub engine
//!
//! This module provides a convenient Result type alias that uses
//! [`ScrubError`] as the error type.

use super::errors::ScrubError;

/// Result type alias for scrub engine operations
///
/// This is a convenience type alias that uses `ScrubError` as the error
/// type. Use this throughout the codebase for fallible operations.
///
/// # Examples
///
/// ```
/// use pii_scrub::domain::result::Result;
/// use pii_scrub::domain::errors::ScrubError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(ScrubError::Validation("invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ScrubError>;
