// SPDX-FileCopyrightText: 2026 txflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the txflow pipeline.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level txflow configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TxflowConfig {
    /// Application identity and logging.
    #[serde(default)]
    pub app: AppConfig,

    /// Cleaning/filtering thresholds and worker pool bounds.
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Retry policy for transient validation failures.
    #[serde(default)]
    pub retry: RetryConfig,

    /// Simulated external validation behaviour.
    #[serde(default)]
    pub validation: ValidationConfig,

    /// Per-currency commission rates.
    #[serde(default)]
    pub commission: CommissionConfig,
}

/// Application identity and logging configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Display name used in log output.
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_app_name() -> String {
    "txflow".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Pipeline stage configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineConfig {
    /// Transactions must exceed this amount to be processed.
    #[serde(default = "default_amount_threshold")]
    pub amount_threshold: f64,

    /// Lower bound on concurrent validation workers.
    #[serde(default = "default_min_workers")]
    pub min_workers: usize,

    /// Upper bound on concurrent validation workers.
    #[serde(default = "default_max_workers")]
    pub max_workers: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            amount_threshold: default_amount_threshold(),
            min_workers: default_min_workers(),
            max_workers: default_max_workers(),
        }
    }
}

fn default_amount_threshold() -> f64 {
    50.0
}

fn default_min_workers() -> usize {
    2
}

fn default_max_workers() -> usize {
    8
}

/// Retry policy configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RetryConfig {
    /// Total attempts per operation, including the first.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Fixed delay between attempts, in milliseconds.
    #[serde(default = "default_backoff_ms")]
    pub backoff_ms: u64,
}

impl RetryConfig {
    pub fn backoff(&self) -> Duration {
        Duration::from_millis(self.backoff_ms)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            backoff_ms: default_backoff_ms(),
        }
    }
}

fn default_max_attempts() -> u32 {
    3
}

fn default_backoff_ms() -> u64 {
    500
}

/// Simulated validation configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ValidationConfig {
    /// Minimum simulated latency per call, in milliseconds (inclusive).
    #[serde(default = "default_min_latency_ms")]
    pub min_latency_ms: u64,

    /// Maximum simulated latency per call, in milliseconds (exclusive).
    #[serde(default = "default_max_latency_ms")]
    pub max_latency_ms: u64,

    /// Probability in `[0, 1]` that a call succeeds.
    #[serde(default = "default_success_rate")]
    pub success_rate: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_latency_ms: default_min_latency_ms(),
            max_latency_ms: default_max_latency_ms(),
            success_rate: default_success_rate(),
        }
    }
}

fn default_min_latency_ms() -> u64 {
    100
}

fn default_max_latency_ms() -> u64 {
    400
}

fn default_success_rate() -> f64 {
    0.8
}

/// Commission rate configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CommissionConfig {
    /// Rate applied to USD transactions.
    #[serde(default = "default_usd_rate")]
    pub usd_rate: f64,

    /// Rate applied to EUR transactions.
    #[serde(default = "default_eur_rate")]
    pub eur_rate: f64,

    /// Rate applied to every other currency.
    #[serde(default = "default_fallback_rate")]
    pub default_rate: f64,
}

impl Default for CommissionConfig {
    fn default() -> Self {
        Self {
            usd_rate: default_usd_rate(),
            eur_rate: default_eur_rate(),
            default_rate: default_fallback_rate(),
        }
    }
}

fn default_usd_rate() -> f64 {
    0.02
}

fn default_eur_rate() -> f64 {
    0.01
}

fn default_fallback_rate() -> f64 {
    0.05
}
