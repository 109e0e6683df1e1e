//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::ScrubConfig;
use crate::domain::errors::ScrubError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (`${VAR}` syntax)
/// 3. Parses the TOML into [`ScrubConfig`]
/// 4. Applies environment variable overrides (`SCRUB_*` prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file cannot be read, TOML parsing fails, a
/// referenced environment variable is unset, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use pii_scrub::config::loader::load_config;
///
/// let config = load_config("scrub.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ScrubConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ScrubError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ScrubError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: ScrubConfig = toml::from_str(&contents)
        .map_err(|e| ScrubError::Configuration(format!("Failed to parse TOML: {e}")))?;

    config
        .apply_env_overrides()
        .map_err(|e| ScrubError::Configuration(e.to_string()))?;

    config
        .validate()
        .map_err(|e| ScrubError::Configuration(format!("Configuration validation failed: {e}")))?;

    Ok(config)
}

/// Substitutes environment variables in the format `${VAR_NAME}`
///
/// Comment lines are passed through untouched. Returns an error naming
/// every referenced variable that is not set.
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("static regex");
    let mut result = String::with_capacity(input.len());
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        // Don't process env vars inside comments
        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let substituted = re.replace_all(line, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            match std::env::var(var_name) {
                Ok(value) => value,
                Err(_) => {
                    missing_vars.push(var_name.to_string());
                    String::new()
                }
            }
        });
        result.push_str(&substituted);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        missing_vars.sort();
        missing_vars.dedup();
        return Err(ScrubError::Configuration(format!(
            "Environment variables not set: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}
