// SPDX-FileCopyrightText: 2026 txflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Transaction pipeline for txflow.
//!
//! This crate provides:
//! - **Stages**: cleaning (missing/negative amounts), threshold filtering, summing
//! - **Pipeline**: commission quotes plus concurrent, retried validation
//! - **Input**: CSV/JSON batch loading and the built-in sample batch
//! - **SimulatedValidator**: a latency- and failure-injecting stand-in for a remote validator

pub mod input;
pub mod pipeline;
pub mod report;
pub mod stages;
pub mod validator;

pub use input::{TransactionRecord, load_transactions, sample_batch};
pub use pipeline::Pipeline;
pub use report::{PipelineReport, ValidationOutcome};
pub use stages::{CleanedBatch, SkipReason, SkippedTransaction, clean, filter_processed, total_amount};
pub use validator::SimulatedValidator;
