// SPDX-FileCopyrightText: 2026 txflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./txflow.toml` > `~/.config/txflow/txflow.toml` > `/etc/txflow/txflow.toml`
//! with environment variable overrides via `TXFLOW_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::TxflowConfig;

/// System-wide configuration file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/txflow/txflow.toml";

/// Local configuration file, relative to the working directory.
pub const LOCAL_CONFIG_FILE: &str = "txflow.toml";

/// Sections recognised by the env provider, in mapping order.
const ENV_SECTIONS: &[&str] = &["app", "pipeline", "retry", "validation", "commission"];

/// Path of the per-user configuration file, if a config dir exists.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("txflow/txflow.toml"))
}

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/txflow/txflow.toml` (system-wide)
/// 3. `~/.config/txflow/txflow.toml` (user XDG config)
/// 4. `./txflow.toml` (local directory)
/// 5. `TXFLOW_*` environment variables
pub fn load_config() -> Result<TxflowConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<TxflowConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TxflowConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<TxflowConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TxflowConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading.
///
/// Returns the Figment before extraction so callers can inspect metadata.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(TxflowConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_FILE))
        .merge(env_provider())
}

/// Create the environment variable provider.
///
/// Uses `Env::map()` rather than `Env::split("_")` because field names contain
/// underscores: `TXFLOW_RETRY_BACKOFF_MS` must map to `retry.backoff_ms`, not
/// `retry.backoff.ms`.
pub fn env_provider() -> Env {
    Env::prefixed("TXFLOW_").map(|key| map_env_key(key.as_str()).into())
}

/// Map a prefix-stripped env key onto its dotted config path.
///
/// figment hands the key over in its original case, so it is lowercased first.
fn map_env_key(key: &str) -> String {
    let key = key.to_ascii_lowercase();
    for section in ENV_SECTIONS {
        if let Some(field) = key
            .strip_prefix(section)
            .and_then(|rest| rest.strip_prefix('_'))
        {
            return format!("{section}.{field}");
        }
    }
    key
}
