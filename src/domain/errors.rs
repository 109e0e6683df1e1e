//! Domain error types
//!
//! This module defines the error hierarchy for the scrub engine.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main scrub engine error type
///
/// This is the primary error type used throughout the crate.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum ScrubError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Span/transform contract violations (out-of-range offsets,
    /// misordered spans, incomplete transform stages)
    #[error("Validation error: {0}")]
    Validation(String),

    /// The supplied anonymized text does not correspond to the transform
    /// set it is being reverted with
    #[error("Transform/text mismatch: expected {expected}, got {actual}")]
    TransformMismatch { expected: String, actual: String },

    /// Detection provider errors
    #[error("Detection error: {0}")]
    Detection(#[from] DetectionError),

    /// Transform store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Detection provider errors
///
/// Errors that occur when calling the external PII-detection service.
/// These errors don't expose third-party client types.
#[derive(Debug, Error)]
pub enum DetectionError {
    /// Detection service could not be reached
    #[error("Detection service unavailable: {0}")]
    Unavailable(String),

    /// Detection service returned a malformed response
    #[error("Invalid detection response: {0}")]
    InvalidResponse(String),

    /// Detection service throttled the request
    #[error("Detection request throttled, retry after: {0}")]
    Throttled(String),

    /// Detection request timed out
    #[error("Detection request timeout: {0}")]
    Timeout(String),
}

/// Transform store errors
///
/// Errors that occur when persisting or retrieving transform sets.
/// These errors don't expose third-party SDK types.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No transform set stored under the given revert key
    #[error("Transform set not found: {0}")]
    NotFound(String),

    /// Failed to persist a transform set
    #[error("Failed to write transform set: {0}")]
    WriteFailed(String),

    /// Failed to retrieve a transform set
    #[error("Failed to read transform set: {0}")]
    ReadFailed(String),

    /// Stored transform set could not be deserialized
    #[error("Failed to deserialize transform set: {0}")]
    DeserializationFailed(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for ScrubError {
    fn from(err: std::io::Error) -> Self {
        ScrubError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for ScrubError {
    fn from(err: serde_json::Error) -> Self {
        ScrubError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for ScrubError {
    fn from(err: toml::de::Error) -> Self {
        ScrubError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrub_error_display() {
        let err = ScrubError::Validation("span out of range".to_string());
        assert_eq!(err.to_string(), "Validation error: span out of range");
    }

    #[test]
    fn test_mismatch_error_display() {
        let err = ScrubError::TransformMismatch {
            expected: "length 42".to_string(),
            actual: "length 40".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Transform/text mismatch: expected length 42, got length 40"
        );
    }

    #[test]
    fn test_detection_error_conversion() {
        let detection_err = DetectionError::Unavailable("connection refused".to_string());
        let err: ScrubError = detection_err.into();
        assert!(matches!(err, ScrubError::Detection(_)));
    }

    #[test]
    fn test_store_error_conversion() {
        let store_err = StoreError::NotFound("abc-123".to_string());
        let err: ScrubError = store_err.into();
        assert!(matches!(err, ScrubError::Store(_)));
        assert!(err.to_string().contains("abc-123"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ScrubError = io_err.into();
        assert!(matches!(err, ScrubError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: ScrubError = json_err.into();
        assert!(matches!(err, ScrubError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: ScrubError = toml_err.into();
        assert!(matches!(err, ScrubError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_scrub_error_implements_std_error() {
        let err = ScrubError::Validation("test".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
