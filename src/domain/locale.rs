//! Supported anonymization locales
//!
//! Placeholder values are locale-specific (a French phone replacement
//! looks nothing like a US one), so the locale is part of the engine
//! configuration and of the detection request.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Locale governing placeholder selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English placeholders ("John Doe", US phone format)
    #[default]
    En,
    /// French placeholders ("Jean Aubert", French phone format)
    Fr,
}

impl Locale {
    /// Returns the ISO 639-1 language code for this locale
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" => Ok(Self::En),
            "fr" => Ok(Self::Fr),
            other => Err(format!("Unsupported language code: {other}")),
        }
    }
}
