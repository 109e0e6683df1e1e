//! Provider boundary traits
//!
//! The engine's external collaborators (the PII detection service and
//! the transform-record store) are specified here by interface only and
//! injected into the engine at construction.

pub mod detector;
pub mod memory;
pub mod store;

pub use detector::EntityDetector;
pub use memory::InMemoryTransformStore;
pub use store::TransformStore;
