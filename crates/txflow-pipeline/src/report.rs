// SPDX-FileCopyrightText: 2026 txflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pipeline results and their text rendering.

use std::fmt::{self, Write as _};

use serde::Serialize;
use txflow_commission::CommissionQuote;
use txflow_core::{Transaction, TransactionId, TxflowError, ValidationResult};

use crate::stages::SkippedTransaction;

/// Final verdict for one processed transaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ValidationOutcome {
    Valid {
        transaction_id: TransactionId,
        message: String,
    },
    Invalid {
        transaction_id: TransactionId,
        message: String,
    },
    /// Validation never produced a verdict (retries exhausted or cancelled).
    Failed {
        transaction_id: TransactionId,
        error: String,
    },
}

impl ValidationOutcome {
    pub fn from_result(
        transaction_id: &TransactionId,
        result: Result<ValidationResult, TxflowError>,
    ) -> Self {
        let transaction_id = transaction_id.clone();
        match result {
            Ok(verdict) if verdict.is_valid() => Self::Valid {
                transaction_id,
                message: verdict.message().to_string(),
            },
            Ok(verdict) => Self::Invalid {
                transaction_id,
                message: verdict.message().to_string(),
            },
            Err(e) => Self::Failed {
                transaction_id,
                error: e.to_string(),
            },
        }
    }

    pub fn transaction_id(&self) -> &TransactionId {
        match self {
            Self::Valid { transaction_id, .. }
            | Self::Invalid { transaction_id, .. }
            | Self::Failed { transaction_id, .. } => transaction_id,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

impl fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid {
                transaction_id,
                message,
            } => write!(f, "{transaction_id} - VALID ({message})"),
            Self::Invalid {
                transaction_id,
                message,
            } => write!(f, "{transaction_id} - INVALID ({message})"),
            Self::Failed {
                transaction_id,
                error,
            } => write!(f, "{transaction_id} - FAILED ({error})"),
        }
    }
}

/// Everything a pipeline run produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PipelineReport {
    /// Number of transactions in the input batch.
    pub received: usize,
    pub skipped: Vec<SkippedTransaction>,
    pub processed: Vec<Transaction>,
    pub total_processed_amount: f64,
    pub commissions: Vec<CommissionQuote>,
    /// One entry per processed transaction, in the same order.
    pub validations: Vec<ValidationOutcome>,
}

impl PipelineReport {
    pub fn valid_count(&self) -> usize {
        self.validations.iter().filter(|v| v.is_valid()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.validations.iter().filter(|v| v.is_failed()).count()
    }

    pub fn total_commission(&self) -> f64 {
        self.commissions.iter().map(|q| q.commission).sum()
    }

    /// Human-readable multi-line summary.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = writeln!(
            out,
            "received {} transactions, skipped {}, processed {}",
            self.received,
            self.skipped.len(),
            self.processed.len()
        );
        let _ = writeln!(
            out,
            "total processed amount: {:.2}",
            self.total_processed_amount
        );

        if !self.commissions.is_empty() {
            let _ = writeln!(out, "commissions:");
            for quote in &self.commissions {
                let amount = quote
                    .amount
                    .map_or_else(|| "null".to_string(), |a| format!("{a:.2}"));
                let _ = writeln!(
                    out,
                    "  {} currency={} amount={} commission={:.2} ({})",
                    quote.transaction_id, quote.currency, amount, quote.commission, quote.strategy
                );
            }
        }

        if !self.validations.is_empty() {
            let _ = writeln!(out, "validation results:");
            for outcome in &self.validations {
                let _ = writeln!(out, "  {outcome}");
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> TransactionId {
        TransactionId(s.to_string())
    }

    #[test]
    fn outcome_from_result_variants() {
        let valid = ValidationOutcome::from_result(
            &id("a"),
            Ok(ValidationResult::valid_with("currency=USD, amount=120.00")),
        );
        assert_eq!(valid.to_string(), "a - VALID (currency=USD, amount=120.00)");
        assert!(valid.is_valid());

        let invalid =
            ValidationOutcome::from_result(&id("b"), Ok(ValidationResult::invalid("amount is null")));
        assert_eq!(invalid.to_string(), "b - INVALID (amount is null)");
        assert!(!invalid.is_valid() && !invalid.is_failed());

        let failed = ValidationOutcome::from_result(
            &id("c"),
            Err(TxflowError::RetriesExhausted { attempts: 3 }),
        );
        assert_eq!(
            failed.to_string(),
            "c - FAILED (exhausted retries after 3 attempts)"
        );
        assert!(failed.is_failed());
        assert_eq!(failed.transaction_id(), &id("c"));
    }

    #[test]
    fn outcome_serializes_with_tag() {
        let outcome = ValidationOutcome::from_result(&id("a"), Ok(ValidationResult::valid()));
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["outcome"], "valid");
        assert_eq!(json["transaction_id"], "a");
        assert_eq!(json["message"], "OK");
    }

    #[test]
    fn empty_report_renders_counts_only() {
        let text = PipelineReport::default().render_text();
        assert_eq!(
            text,
            "received 0 transactions, skipped 0, processed 0\ntotal processed amount: 0.00\n"
        );
    }
}
