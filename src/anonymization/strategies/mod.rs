//! Anonymization strategy module
//!
//! Provides the per-entity-type replacement strategies. Every strategy is
//! pure, deterministic, and stateless: the replacement depends only on
//! the input substring (and, for name-like types, its word count), never
//! on any external state. This is what keeps the forward pass
//! reproducible.

pub mod email;
pub mod location;
pub mod organization;
pub mod person;
pub mod phone;

pub use email::EmailStrategy;
pub use location::LocationStrategy;
pub use organization::OrganizationStrategy;
pub use person::PersonStrategy;
pub use phone::PhoneStrategy;

/// Trait for anonymization strategy implementations
pub trait AnonymizeStrategy: Send + Sync {
    /// Compute the replacement for one detected PII value
    fn anonymize(&self, original: &str) -> String;
}
