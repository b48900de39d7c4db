// SPDX-FileCopyrightText: 2026 txflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end pipeline orchestration.
//!
//! Stages run in order: clean, filter, sum, commission, then concurrent
//! validation with retries on a worker pool sized for the batch.

use std::sync::Arc;

use futures::future::join_all;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument};
use txflow_commission::{CommissionQuote, CommissionStrategyFactory};
use txflow_config::TxflowConfig;
use txflow_core::{Transaction, Validator};
use txflow_resilience::{RetryExecutor, RetryPolicy, WorkerPool};

use crate::report::{PipelineReport, ValidationOutcome};
use crate::stages::{clean, filter_processed, total_amount};

/// A configured pipeline bound to one validator.
pub struct Pipeline {
    config: TxflowConfig,
    commissions: CommissionStrategyFactory,
    validator: Arc<dyn Validator>,
    shutdown: CancellationToken,
}

impl Pipeline {
    pub fn new(config: TxflowConfig, validator: Arc<dyn Validator>) -> Self {
        let commissions = CommissionStrategyFactory::new(&config.commission);
        Self {
            config,
            commissions,
            validator,
            shutdown: CancellationToken::new(),
        }
    }

    /// Abort pending retries when `token` is cancelled.
    pub fn with_shutdown(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    /// Run every stage over `batch` and collect the results.
    #[instrument(skip_all, fields(batch = batch.len(), validator = self.validator.name()))]
    pub async fn run(&self, batch: &[Transaction]) -> PipelineReport {
        info!("starting pipeline run");

        let cleaned = clean(batch);
        let processed = filter_processed(&cleaned.kept, self.config.pipeline.amount_threshold);
        let total = total_amount(&processed);

        info!(
            count = processed.len(),
            threshold = self.config.pipeline.amount_threshold,
            "filtered transactions"
        );
        info!(total, "total amount of filtered transactions");

        let commissions = self.quote_commissions(&processed);
        let validations = self.validate_all(&processed).await;

        info!("validation results:");
        for outcome in &validations {
            info!("{outcome}");
        }

        PipelineReport {
            received: batch.len(),
            skipped: cleaned.skipped,
            processed,
            total_processed_amount: total,
            commissions,
            validations,
        }
    }

    fn quote_commissions(&self, processed: &[Transaction]) -> Vec<CommissionQuote> {
        processed
            .iter()
            .map(|tx| {
                let quote = self.commissions.quote(tx);
                let amount = quote
                    .amount
                    .map_or_else(|| "null".to_string(), |a| format!("{a:.2}"));
                info!(
                    id = %quote.transaction_id,
                    currency = %quote.currency,
                    amount = %amount,
                    commission = %format!("{:.2}", quote.commission),
                    "commission"
                );
                quote
            })
            .collect()
    }

    /// Validate every transaction concurrently; results keep input order.
    async fn validate_all(&self, processed: &[Transaction]) -> Vec<ValidationOutcome> {
        if processed.is_empty() {
            return Vec::new();
        }

        let pool = WorkerPool::for_batch(processed.len(), &self.config.pipeline);
        let executor = RetryExecutor::new(pool, RetryPolicy::from(&self.config.retry))
            .with_parent_token(&self.shutdown);

        let validator = &self.validator;
        let executor_ref = &executor;
        let outcomes = join_all(processed.iter().map(|tx| async move {
            let result = executor_ref.retry(move || validator.validate(tx)).await;
            ValidationOutcome::from_result(tx.id(), result)
        }))
        .await;

        executor.shutdown();
        executor.pool().close();
        outcomes
    }
}
