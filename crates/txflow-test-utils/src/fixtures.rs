// SPDX-FileCopyrightText: 2026 txflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deterministic fixtures shared by integration tests.

use txflow_config::TxflowConfig;
use txflow_config::model::{RetryConfig, ValidationConfig};
use txflow_core::Transaction;

/// The demonstration batch with stable ids.
///
/// Ids: `tx-usd-120`, `tx-eur-10`, `tx-eur-75`, `tx-usd-neg`, `tx-jpy-200`,
/// `tx-usd-null`.
pub fn sample_transactions() -> Vec<Transaction> {
    [
        ("tx-usd-120", Some(120.0), "USD"),
        ("tx-eur-10", Some(10.0), "EUR"),
        ("tx-eur-75", Some(75.5), "EUR"),
        ("tx-usd-neg", Some(-5.0), "USD"),
        ("tx-jpy-200", Some(200.0), "JPY"),
        ("tx-usd-null", None, "USD"),
    ]
    .into_iter()
    .map(|(id, amount, currency)| {
        Transaction::new(id, amount, currency, None).expect("fixture transactions are valid")
    })
    .collect()
}

/// Defaults with short backoff and zero simulated latency.
pub fn fast_config() -> TxflowConfig {
    TxflowConfig {
        retry: RetryConfig {
            max_attempts: 3,
            backoff_ms: 10,
        },
        validation: ValidationConfig {
            min_latency_ms: 0,
            max_latency_ms: 0,
            success_rate: 1.0,
        },
        ..TxflowConfig::default()
    }
}
