// SPDX-FileCopyrightText: 2026 txflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the txflow pipeline.
//!
//! Provides TOML configuration parsing with strict validation (`deny_unknown_fields`),
//! XDG file hierarchy lookup, environment variable overrides, and diagnostic
//! error rendering with typo suggestions.
//!
//! # Usage
//!
//! ```no_run
//! use txflow_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("retry attempts: {}", config.retry.max_attempts);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

use std::path::Path;

use tracing::{debug, warn};

pub use diagnostic::{ConfigError, render_errors};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::TxflowConfig;

/// Load configuration from the XDG hierarchy and validate it.
///
/// On a Figment error the TOML sources are re-read so diagnostics can point
/// at the offending key.
pub fn load_and_validate() -> Result<TxflowConfig, Vec<ConfigError>> {
    match loader::load_config() {
        Ok(config) => validated(config, "standard locations"),
        Err(err) => {
            let toml_sources = collect_toml_sources();
            Err(rejected(diagnostic::figment_to_config_errors(err, &toml_sources)))
        }
    }
}

/// Load configuration from an explicit file (plus env overrides) and validate it.
pub fn load_and_validate_path(path: &Path) -> Result<TxflowConfig, Vec<ConfigError>> {
    if !path.is_file() {
        return Err(vec![ConfigError::Other(format!(
            "config file {} does not exist",
            path.display()
        ))]);
    }

    match loader::load_config_from_path(path) {
        Ok(config) => validated(config, &path.display().to_string()),
        Err(err) => {
            let sources = std::fs::read_to_string(path)
                .map(|content| vec![(path.display().to_string(), content)])
                .unwrap_or_default();
            Err(rejected(diagnostic::figment_to_config_errors(err, &sources)))
        }
    }
}

/// Load configuration from a TOML string and validate it.
///
/// Useful for testing and explicit configuration.
pub fn load_and_validate_str(toml_content: &str) -> Result<TxflowConfig, Vec<ConfigError>> {
    match loader::load_config_from_str(toml_content) {
        Ok(config) => validated(config, "<inline>"),
        Err(err) => {
            let sources = vec![("<inline>".to_string(), toml_content.to_string())];
            Err(rejected(diagnostic::figment_to_config_errors(err, &sources)))
        }
    }
}

/// Run semantic checks on a config that deserialized cleanly.
fn validated(config: TxflowConfig, origin: &str) -> Result<TxflowConfig, Vec<ConfigError>> {
    validation::validate_config(&config).map_err(rejected)?;
    debug!(origin, log_level = %config.app.log_level, "configuration loaded");
    Ok(config)
}

fn rejected(errors: Vec<ConfigError>) -> Vec<ConfigError> {
    warn!(count = errors.len(), "configuration rejected");
    errors
}

/// Collect TOML source file contents for error span resolution.
fn collect_toml_sources() -> Vec<(String, String)> {
    let mut sources = Vec::new();

    if let Ok(content) = std::fs::read_to_string(loader::LOCAL_CONFIG_FILE) {
        let path = std::env::current_dir()
            .map(|d| d.join(loader::LOCAL_CONFIG_FILE).display().to_string())
            .unwrap_or_else(|_| loader::LOCAL_CONFIG_FILE.to_string());
        sources.push((path, content));
    }

    if let Some(path) = loader::user_config_path()
        && let Ok(content) = std::fs::read_to_string(&path)
    {
        sources.push((path.display().to_string(), content));
    }

    let system_path = Path::new(loader::SYSTEM_CONFIG_PATH);
    if let Ok(content) = std::fs::read_to_string(system_path) {
        sources.push((system_path.display().to_string(), content));
    }

    sources
}
