// SPDX-FileCopyrightText: 2026 txflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the txflow pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// The primary error type used across txflow crates.
#[derive(Debug, Error)]
pub enum TxflowError {
    /// A transaction could not be constructed from its fields.
    #[error("invalid transaction: {0}")]
    InvalidTransaction(String),

    /// Reading or decoding an input batch failed.
    #[error("failed to read transactions from {}: {source}", path.display())]
    Input {
        path: PathBuf,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A validation attempt failed transiently and may be retried.
    #[error("validation error: {message}")]
    Validation {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Every retry attempt failed.
    #[error("exhausted retries after {attempts} attempts")]
    RetriesExhausted { attempts: u32 },

    /// The operation was cancelled by shutdown.
    #[error("operation cancelled")]
    Cancelled,

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl TxflowError {
    /// Shorthand for a transient validation failure without an underlying source.
    pub fn transient(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            source: None,
        }
    }
}
