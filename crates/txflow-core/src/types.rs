// SPDX-FileCopyrightText: 2026 txflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared by every stage of the pipeline.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::TxflowError;

/// Unique identifier for a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(pub String);

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle status of a transaction.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    /// Freshly received, not yet through the pipeline.
    #[default]
    New,
    /// Passed the amount filter.
    Processed,
}

/// An immutable payment transaction.
///
/// The amount is optional because upstream feeds can omit it; the cleaning
/// stage drops such records before any arithmetic happens.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    id: TransactionId,
    amount: Option<f64>,
    currency: String,
    status: TransactionStatus,
}

impl Transaction {
    /// Create a transaction. `status` defaults to [`TransactionStatus::New`].
    ///
    /// Fails when the id or currency is blank.
    pub fn new(
        id: impl Into<String>,
        amount: Option<f64>,
        currency: impl Into<String>,
        status: Option<TransactionStatus>,
    ) -> Result<Self, TxflowError> {
        let id = id.into();
        let currency = currency.into();
        if id.trim().is_empty() {
            return Err(TxflowError::InvalidTransaction(
                "id must not be empty".to_string(),
            ));
        }
        if currency.trim().is_empty() {
            return Err(TxflowError::InvalidTransaction(format!(
                "currency must not be empty (transaction {id})"
            )));
        }
        Ok(Self {
            id: TransactionId(id),
            amount,
            currency,
            status: status.unwrap_or_default(),
        })
    }

    pub fn id(&self) -> &TransactionId {
        &self.id
    }

    pub fn amount(&self) -> Option<f64> {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn status(&self) -> TransactionStatus {
        self.status
    }

    /// Returns a copy of this transaction carrying `status`.
    pub fn with_status(&self, status: TransactionStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = match self.amount {
            Some(a) => a.to_string(),
            None => "null".to_string(),
        };
        write!(
            f,
            "Transaction{{id='{}', amount={}, currency='{}', status='{}'}}",
            self.id, amount, self.currency, self.status
        )
    }
}

/// Outcome of validating a single transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    valid: bool,
    message: String,
}

impl ValidationResult {
    /// A passing result with the message `OK`.
    pub fn valid() -> Self {
        Self::valid_with("OK")
    }

    /// A passing result with a custom message.
    pub fn valid_with(message: impl Into<String>) -> Self {
        Self {
            valid: true,
            message: message.into(),
        }
    }

    /// A failing result.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ValidationResult{{valid={}, message='{}'}}",
            self.valid, self.message
        )
    }
}
