//! Strategy registry and dispatch
//!
//! Maps detector-reported entity type tags to anonymization strategies.
//! The tag vocabulary is open (different detectors surface different,
//! locale-suffixed tags), so the registry is a string-keyed table rather
//! than a closed enum, with the built-in tags pre-registered per locale
//! and room for callers to register their own.

use crate::anonymization::strategies::{
    AnonymizeStrategy, EmailStrategy, LocationStrategy, OrganizationStrategy, PersonStrategy,
    PhoneStrategy,
};
use crate::domain::Locale;
use std::collections::HashMap;

/// Registry of anonymization strategies keyed by entity type tag
pub struct StrategyRegistry {
    strategies: HashMap<String, Box<dyn AnonymizeStrategy>>,
}

impl StrategyRegistry {
    /// Create an empty registry
    pub fn empty() -> Self {
        Self {
            strategies: HashMap::new(),
        }
    }

    /// Create a registry with the built-in strategies for the given locale
    ///
    /// The generic tags (`EMAIL`, `PHONE`, `PERSON`, ...) resolve to the
    /// locale's own placeholders; the explicitly suffixed tags
    /// (`PHONE_NUMBER_FR`, `PERSON_FR`) always resolve to the French
    /// placeholders regardless of the configured locale, matching
    /// detectors that tag locale in the type itself.
    pub fn builtin(locale: Locale) -> Self {
        let mut registry = Self::empty();

        registry.register("EMAIL", Box::new(EmailStrategy::new()));
        registry.register("EMAIL_ADDRESS", Box::new(EmailStrategy::new()));
        registry.register("PHONE", Box::new(PhoneStrategy::new(locale)));
        registry.register("PHONE_NUMBER", Box::new(PhoneStrategy::new(locale)));
        registry.register("PHONE_NUMBER_FR", Box::new(PhoneStrategy::new(Locale::Fr)));
        registry.register("NAME", Box::new(PersonStrategy::new(locale)));
        registry.register("PERSON", Box::new(PersonStrategy::new(locale)));
        registry.register("PERSON_FR", Box::new(PersonStrategy::new(Locale::Fr)));
        registry.register("ORGANIZATION", Box::new(OrganizationStrategy::new()));
        registry.register("LOCATION", Box::new(LocationStrategy::new()));

        registry
    }

    /// Register (or replace) a strategy for an entity type tag
    pub fn register(&mut self, tag: impl Into<String>, strategy: Box<dyn AnonymizeStrategy>) {
        self.strategies.insert(tag.into(), strategy);
    }

    /// Look up the strategy for an entity type tag
    pub fn get(&self, tag: &str) -> Option<&dyn AnonymizeStrategy> {
        self.strategies.get(tag).map(|s| s.as_ref())
    }

    /// True when a strategy is registered for the tag
    pub fn contains(&self, tag: &str) -> bool {
        self.strategies.contains_key(tag)
    }

    /// Number of registered strategies
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// True when no strategies are registered
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl std::fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut tags: Vec<&str> = self.strategies.keys().map(String::as_str).collect();
        tags.sort_unstable();
        f.debug_struct("StrategyRegistry").field("tags", &tags).finish()
    }
}
