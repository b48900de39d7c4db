// SPDX-FileCopyrightText: 2026 txflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Simulated external validation service.
//!
//! Stands in for a remote API: each call waits a random latency and fails
//! transiently with probability `1 - success_rate`.

use std::ops::Range;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use txflow_config::model::ValidationConfig;
use txflow_core::{Transaction, TxflowError, ValidationResult, Validator};

/// Validator that simulates network latency and transient failures.
pub struct SimulatedValidator {
    latency_ms: Range<u64>,
    success_rate: f64,
    rng: Mutex<StdRng>,
    cancel: CancellationToken,
}

impl SimulatedValidator {
    /// Create a validator seeded from OS entropy.
    pub fn new(config: &ValidationConfig) -> Self {
        Self::from_rng(config, StdRng::from_entropy())
    }

    /// Create a validator with a fixed seed for reproducible runs.
    pub fn with_seed(config: &ValidationConfig, seed: u64) -> Self {
        Self::from_rng(config, StdRng::seed_from_u64(seed))
    }

    fn from_rng(config: &ValidationConfig, rng: StdRng) -> Self {
        Self {
            latency_ms: config.min_latency_ms..config.max_latency_ms,
            success_rate: config.success_rate.clamp(0.0, 1.0),
            rng: Mutex::new(rng),
            cancel: CancellationToken::new(),
        }
    }

    /// Interrupt in-flight latency waits when `token` is cancelled.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Draw the latency and the success flag for one call.
    fn roll(&self) -> (Duration, bool) {
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let latency = if self.latency_ms.is_empty() {
            self.latency_ms.start
        } else {
            rng.gen_range(self.latency_ms.clone())
        };
        (Duration::from_millis(latency), rng.gen_bool(self.success_rate))
    }
}

#[async_trait]
impl Validator for SimulatedValidator {
    fn name(&self) -> &str {
        "simulated"
    }

    async fn validate(&self, transaction: &Transaction) -> Result<ValidationResult, TxflowError> {
        let id = transaction.id();
        let Some(amount) = transaction.amount() else {
            warn!(%id, "transaction has null amount");
            return Ok(ValidationResult::invalid("amount is null"));
        };

        let (latency, success) = self.roll();

        tokio::select! {
            _ = tokio::time::sleep(latency) => {}
            _ = self.cancel.cancelled() => {
                warn!(%id, "validation interrupted");
                return Ok(ValidationResult::invalid("validation interrupted"));
            }
        }

        if success {
            debug!(%id, "transaction validated successfully");
            Ok(ValidationResult::valid_with(format!(
                "currency={}, amount={amount:.2}",
                transaction.currency()
            )))
        } else {
            warn!(%id, "transient validation error");
            Err(TxflowError::transient(format!(
                "transient validation error for {id}"
            )))
        }
    }
}
