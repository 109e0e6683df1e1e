//! Email anonymization strategy

use super::AnonymizeStrategy;

const ANON_ACCOUNT: &str = "anon";
const ANON_DOMAIN: &str = "@anon.com";

/// Replaces any email address with the constant `anon@anon.com`
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailStrategy;

impl EmailStrategy {
    /// Create a new email strategy
    pub fn new() -> Self {
        Self
    }
}

impl AnonymizeStrategy for EmailStrategy {
    fn anonymize(&self, _original: &str) -> String {
        format!("{ANON_ACCOUNT}{ANON_DOMAIN}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_is_constant() {
        let strategy = EmailStrategy::new();
        assert_eq!(strategy.anonymize("john@example.com"), "anon@anon.com");
        assert_eq!(strategy.anonymize("jane.doe+tag@corp.co.uk"), "anon@anon.com");
    }

    #[test]
    fn test_empty_input() {
        let strategy = EmailStrategy::new();
        assert_eq!(strategy.anonymize(""), "anon@anon.com");
    }
}
