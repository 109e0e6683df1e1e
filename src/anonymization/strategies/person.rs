//! Person name anonymization strategy

use super::AnonymizeStrategy;
use crate::domain::Locale;

/// Replaces a person name with a locale-specific placeholder.
///
/// A single-token name maps to the placeholder first name alone; anything
/// else maps to the "first last" pair. Word count is the only property of
/// the input that survives.
#[derive(Debug, Clone, Copy)]
pub struct PersonStrategy {
    locale: Locale,
}

impl PersonStrategy {
    /// Create a person-name strategy for the given locale
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    fn placeholders(&self) -> (&'static str, &'static str) {
        match self.locale {
            Locale::En => ("John", "Doe"),
            Locale::Fr => ("Jean", "Aubert"),
        }
    }
}

impl AnonymizeStrategy for PersonStrategy {
    fn anonymize(&self, original: &str) -> String {
        let (first, last) = self.placeholders();
        if original.split_whitespace().count() == 1 {
            first.to_string()
        } else {
            format!("{first} {last}")
        }
    }
}
