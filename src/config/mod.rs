//! Configuration management
//!
//! TOML-based configuration with `${VAR}` substitution and `SCRUB_*`
//! environment variable overrides.

pub mod loader;
pub mod schema;

pub use loader::load_config;
pub use schema::{EngineConfig, FallbackPolicy, LoggingConfig, ScrubConfig};
