//! Integration tests for configuration loading

use pii_scrub::config::{load_config, FallbackPolicy, ScrubConfig};
use pii_scrub::domain::{Locale, ScrubError};
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// load_config reads SCRUB_* environment variables, which are
// process-global; every test in this file takes the lock so the
// env-mutating test can't interleave with the others.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_full_config() {
    let _guard = ENV_LOCK.lock().unwrap();
    let file = write_config(
        r#"
[engine]
locale = "fr"
text_field = "commentaire"
fallback = "reject"
verify_on_revert = false

[logging]
level = "debug"
file_enabled = false
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.engine.locale, Locale::Fr);
    assert_eq!(config.engine.text_field, "commentaire");
    assert_eq!(config.engine.fallback, FallbackPolicy::Reject);
    assert!(!config.engine.verify_on_revert);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_load_empty_config_uses_defaults() {
    let _guard = ENV_LOCK.lock().unwrap();
    let file = write_config("");

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.engine.locale, Locale::En);
    assert_eq!(config.engine.text_field, "text");
    assert_eq!(config.engine.fallback, FallbackPolicy::PassThrough);
    assert!(config.engine.verify_on_revert);
}

#[test]
fn test_invalid_locale_rejected() {
    let _guard = ENV_LOCK.lock().unwrap();
    let file = write_config("[engine]\nlocale = \"de\"\n");
    let result = load_config(file.path());
    assert!(matches!(result, Err(ScrubError::Configuration(_))));
}

#[test]
fn test_invalid_text_field_rejected() {
    let _guard = ENV_LOCK.lock().unwrap();
    let file = write_config("[engine]\ntext_field = \"user text!\"\n");
    let result = load_config(file.path());
    assert!(matches!(result, Err(ScrubError::Configuration(_))));
}

// All environment mutation lives in this single test; integration tests
// run in parallel threads and the SCRUB_* names are process-global.
#[test]
fn test_env_overrides() {
    let _guard = ENV_LOCK.lock().unwrap();
    std::env::set_var("SCRUB_LOCALE", "fr");
    std::env::set_var("SCRUB_TEXT_FIELD", "body");
    std::env::set_var("SCRUB_FALLBACK", "delete");
    std::env::set_var("SCRUB_VERIFY_ON_REVERT", "false");
    std::env::set_var("SCRUB_LOG_ROTATION", "hourly");

    let mut config = ScrubConfig::default();
    config.apply_env_overrides().unwrap();

    assert_eq!(config.engine.locale, Locale::Fr);
    assert_eq!(config.engine.text_field, "body");
    assert_eq!(config.engine.fallback, FallbackPolicy::Delete);
    assert!(!config.engine.verify_on_revert);
    assert_eq!(config.logging.file_rotation, "hourly");

    std::env::set_var("SCRUB_FALLBACK", "shrug");
    let mut config = ScrubConfig::default();
    assert!(config.apply_env_overrides().is_err());

    std::env::remove_var("SCRUB_LOCALE");
    std::env::remove_var("SCRUB_TEXT_FIELD");
    std::env::remove_var("SCRUB_FALLBACK");
    std::env::remove_var("SCRUB_VERIFY_ON_REVERT");
    std::env::remove_var("SCRUB_LOG_ROTATION");
}
