//! Organization anonymization strategy

use super::AnonymizeStrategy;

const ANON_ORGANIZATION: &str = "Org123";

/// Replaces any organization name with a constant placeholder
#[derive(Debug, Clone, Copy, Default)]
pub struct OrganizationStrategy;

impl OrganizationStrategy {
    /// Create a new organization strategy
    pub fn new() -> Self {
        Self
    }
}

impl AnonymizeStrategy for OrganizationStrategy {
    fn anonymize(&self, _original: &str) -> String {
        ANON_ORGANIZATION.to_string()
    }
}
