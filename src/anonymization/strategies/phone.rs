//! Phone number anonymization strategy
//!
//! Keeps a short real prefix (area code in the English locale, the
//! leading two digits in the French one) and replaces the rest with a
//! fixed suffix, so anonymized numbers stay plausible for the locale
//! without identifying anyone.

use super::AnonymizeStrategy;
use crate::domain::Locale;

/// Replaces a phone number with a locale-specific placeholder that
/// preserves the leading digits of the input.
#[derive(Debug, Clone, Copy)]
pub struct PhoneStrategy {
    locale: Locale,
}

impl PhoneStrategy {
    /// Create a phone strategy for the given locale
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }
}

impl AnonymizeStrategy for PhoneStrategy {
    fn anonymize(&self, original: &str) -> String {
        let digits: String = original.chars().filter(|c| c.is_ascii_digit()).collect();
        match self.locale {
            Locale::En => {
                let prefix: String = digits.chars().take(3).collect();
                format!("({prefix}) 555-5555")
            }
            Locale::Fr => {
                let prefix: String = digits.chars().take(2).collect();
                format!("{prefix} 11 22 33 44")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("555-123-4567", "(555) 555-5555" ; "dashed us number")]
    #[test_case("(212) 867-5309", "(212) 555-5555" ; "parenthesized us number")]
    #[test_case("+1 415 555 0000", "(141) 555-5555" ; "international prefix folded in")]
    #[test_case("98", "(98) 555-5555" ; "fewer than three digits")]
    #[test_case("no digits", "() 555-5555" ; "no digits at all")]
    fn test_en_phone(input: &str, expected: &str) {
        let strategy = PhoneStrategy::new(Locale::En);
        assert_eq!(strategy.anonymize(input), expected);
    }

    #[test_case("06 12 34 56 78", "06 11 22 33 44" ; "mobile number")]
    #[test_case("+33 1 42 68 53 00", "33 11 22 33 44" ; "country code kept")]
    fn test_fr_phone(input: &str, expected: &str) {
        let strategy = PhoneStrategy::new(Locale::Fr);
        assert_eq!(strategy.anonymize(input), expected);
    }

    #[test]
    fn test_deterministic() {
        let strategy = PhoneStrategy::new(Locale::En);
        assert_eq!(
            strategy.anonymize("555-123-4567"),
            strategy.anonymize("555-123-4567")
        );
    }
}
