//! Location anonymization strategy

use super::AnonymizeStrategy;

const ANON_LOCATION: &str = "location XYZ";

/// Replaces any location string with a constant placeholder
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationStrategy;

impl LocationStrategy {
    /// Create a new location strategy
    pub fn new() -> Self {
        Self
    }
}

impl AnonymizeStrategy for LocationStrategy {
    fn anonymize(&self, _original: &str) -> String {
        ANON_LOCATION.to_string()
    }
}
