// SPDX-FileCopyrightText: 2026 txflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Checks semantic constraints that serde attributes cannot express, such as
//! ordered bounds, probabilities, and finite non-negative rates.

use crate::diagnostic::ConfigError;
use crate::model::TxflowConfig;

/// Log levels accepted by `app.log_level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &TxflowConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let mut fail = |message: String| errors.push(ConfigError::Validation { message });

    let level = config.app.log_level.trim().to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        fail(format!(
            "app.log_level `{}` is not one of {}",
            config.app.log_level,
            LOG_LEVELS.join(", ")
        ));
    }

    let threshold = config.pipeline.amount_threshold;
    if !threshold.is_finite() || threshold < 0.0 {
        fail(format!(
            "pipeline.amount_threshold must be a non-negative number, got {threshold}"
        ));
    }

    if config.pipeline.min_workers < 1 {
        fail("pipeline.min_workers must be at least 1, got 0".to_string());
    }

    if config.pipeline.max_workers < config.pipeline.min_workers {
        fail(format!(
            "pipeline.max_workers ({}) must be >= pipeline.min_workers ({})",
            config.pipeline.max_workers, config.pipeline.min_workers
        ));
    }

    if config.retry.max_attempts < 1 {
        fail("retry.max_attempts must be at least 1, got 0".to_string());
    }

    if config.validation.min_latency_ms > config.validation.max_latency_ms {
        fail(format!(
            "validation.min_latency_ms ({}) must be <= validation.max_latency_ms ({})",
            config.validation.min_latency_ms, config.validation.max_latency_ms
        ));
    }

    let success_rate = config.validation.success_rate;
    if !(0.0..=1.0).contains(&success_rate) {
        fail(format!(
            "validation.success_rate must be between 0 and 1, got {success_rate}"
        ));
    }

    for (key, rate) in [
        ("commission.usd_rate", config.commission.usd_rate),
        ("commission.eur_rate", config.commission.eur_rate),
        ("commission.default_rate", config.commission.default_rate),
    ] {
        if !(0.0..=1.0).contains(&rate) {
            fail(format!("{key} must be between 0 and 1, got {rate}"));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(config: &TxflowConfig) -> Vec<String> {
        validate_config(config)
            .unwrap_err()
            .into_iter()
            .map(|e| e.to_string())
            .collect()
    }

    #[test]
    fn default_config_validates() {
        assert!(validate_config(&TxflowConfig::default()).is_ok());
    }

    #[test]
    fn unknown_log_level_fails_validation() {
        let mut config = TxflowConfig::default();
        config.app.log_level = "verbose".to_string();
        assert!(messages(&config).iter().any(|m| m.contains("app.log_level")));
    }

    #[test]
    fn log_level_is_case_insensitive() {
        let mut config = TxflowConfig::default();
        config.app.log_level = "DEBUG".to_string();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn negative_threshold_fails_validation() {
        let mut config = TxflowConfig::default();
        config.pipeline.amount_threshold = -1.0;
        assert!(
            messages(&config)
                .iter()
                .any(|m| m.contains("amount_threshold"))
        );
    }

    #[test]
    fn nan_threshold_fails_validation() {
        let mut config = TxflowConfig::default();
        config.pipeline.amount_threshold = f64::NAN;
        assert!(
            messages(&config)
                .iter()
                .any(|m| m.contains("amount_threshold"))
        );
    }

    #[test]
    fn inverted_worker_bounds_fail_validation() {
        let mut config = TxflowConfig::default();
        config.pipeline.min_workers = 4;
        config.pipeline.max_workers = 2;
        assert!(messages(&config).iter().any(|m| m.contains("max_workers")));
    }

    #[test]
    fn zero_attempts_fail_validation() {
        let mut config = TxflowConfig::default();
        config.retry.max_attempts = 0;
        assert!(messages(&config).iter().any(|m| m.contains("max_attempts")));
    }

    #[test]
    fn out_of_range_rates_fail_validation() {
        let mut config = TxflowConfig::default();
        config.commission.eur_rate = 1.5;
        config.validation.success_rate = -0.1;
        let msgs = messages(&config);
        assert!(msgs.iter().any(|m| m.contains("commission.eur_rate")));
        assert!(msgs.iter().any(|m| m.contains("success_rate")));
    }

    #[test]
    fn errors_are_collected_not_fail_fast() {
        let mut config = TxflowConfig::default();
        config.retry.max_attempts = 0;
        config.pipeline.min_workers = 0;
        config.validation.min_latency_ms = 500;
        assert_eq!(validate_config(&config).unwrap_err().len(), 3);
    }
}
