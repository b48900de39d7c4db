// SPDX-FileCopyrightText: 2026 txflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the txflow transaction pipeline.
//!
//! This crate provides the domain types, the shared error type, and the trait
//! seams (commission strategies and validators) used throughout the
//! workspace.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::TxflowError;
pub use traits::{CommissionStrategy, Validator};
pub use types::{Transaction, TransactionId, TransactionStatus, ValidationResult};
