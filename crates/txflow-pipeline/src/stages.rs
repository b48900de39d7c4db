// SPDX-FileCopyrightText: 2026 txflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Synchronous pipeline stages: clean, filter, sum.

use serde::Serialize;
use tracing::warn;
use txflow_core::{Transaction, TransactionStatus};

/// Why the cleaning stage dropped a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    NullAmount,
    /// NaN or infinite.
    NonFiniteAmount,
    NegativeAmount,
}

/// A transaction removed by the cleaning stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedTransaction {
    pub transaction: Transaction,
    pub reason: SkipReason,
}

/// Result of the cleaning stage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleanedBatch {
    pub kept: Vec<Transaction>,
    pub skipped: Vec<SkippedTransaction>,
}

/// Drop transactions with a missing, non-finite, or negative amount.
///
/// Every input lands in exactly one of `kept` or `skipped`, in input order.
pub fn clean(batch: &[Transaction]) -> CleanedBatch {
    let mut cleaned = CleanedBatch::default();

    for tx in batch {
        let reason = match tx.amount() {
            None => {
                warn!(transaction = %tx, "skipping transaction with null amount");
                Some(SkipReason::NullAmount)
            }
            Some(amount) if !amount.is_finite() => {
                warn!(transaction = %tx, "skipping transaction with non-finite amount");
                Some(SkipReason::NonFiniteAmount)
            }
            Some(amount) if amount < 0.0 => {
                warn!(transaction = %tx, "skipping transaction with negative amount");
                Some(SkipReason::NegativeAmount)
            }
            Some(_) => None,
        };

        match reason {
            Some(reason) => cleaned.skipped.push(SkippedTransaction {
                transaction: tx.clone(),
                reason,
            }),
            None => cleaned.kept.push(tx.clone()),
        }
    }

    cleaned
}

/// Keep transactions whose amount is strictly above `threshold`, marked processed.
pub fn filter_processed(batch: &[Transaction], threshold: f64) -> Vec<Transaction> {
    batch
        .iter()
        .filter(|tx| tx.amount().is_some_and(|amount| amount > threshold))
        .map(|tx| tx.with_status(TransactionStatus::Processed))
        .collect()
}

/// Sum of amounts; a missing amount counts as zero.
pub fn total_amount(batch: &[Transaction]) -> f64 {
    batch.iter().map(|tx| tx.amount().unwrap_or(0.0)).sum()
}
