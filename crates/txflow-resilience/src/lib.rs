// SPDX-FileCopyrightText: 2026 txflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resilience primitives for the txflow pipeline.
//!
//! - [`WorkerPool`]: semaphore-bounded concurrency sized per batch
//! - [`RetryExecutor`]: fixed-backoff async retry with cooperative shutdown

pub mod pool;
pub mod retry;

pub use pool::{WorkerPool, pool_size};
pub use retry::{RetryExecutor, RetryPolicy};
