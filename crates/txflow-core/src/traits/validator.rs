// SPDX-FileCopyrightText: 2026 txflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Validator trait for external transaction checks.

use async_trait::async_trait;

use crate::error::TxflowError;
use crate::types::{Transaction, ValidationResult};

/// An external check run against each processed transaction.
///
/// `Ok` carries a definitive verdict (valid or invalid). `Err` signals a
/// transient failure; callers are expected to retry it.
#[async_trait]
pub trait Validator: Send + Sync {
    /// Human-readable name of this validator.
    fn name(&self) -> &str;

    /// Validates one transaction.
    async fn validate(&self, transaction: &Transaction) -> Result<ValidationResult, TxflowError>;
}
