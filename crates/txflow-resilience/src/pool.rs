// SPDX-FileCopyrightText: 2026 txflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Semaphore-bounded worker pool.
//!
//! Work submitted through [`WorkerPool::run`] waits for a permit, so at most
//! `size` futures execute at once no matter how many are in flight.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tracing::debug;
use txflow_config::model::PipelineConfig;
use txflow_core::TxflowError;

/// Pool size for a batch of `batch_len` items.
///
/// Small batches still get `min` workers; large batches are capped at `max`.
pub fn pool_size(batch_len: usize, min: usize, max: usize) -> usize {
    if batch_len < min {
        min
    } else {
        batch_len.min(max)
    }
}

/// A cloneable handle to a fixed number of concurrency permits.
#[derive(Debug, Clone)]
pub struct WorkerPool {
    permits: Arc<Semaphore>,
    size: usize,
}

impl WorkerPool {
    /// Create a pool with `size` workers (at least one).
    pub fn new(size: usize) -> Self {
        let size = size.max(1);
        Self {
            permits: Arc::new(Semaphore::new(size)),
            size,
        }
    }

    /// Create a pool sized for a batch using the configured bounds.
    pub fn for_batch(batch_len: usize, config: &PipelineConfig) -> Self {
        let size = pool_size(batch_len, config.min_workers, config.max_workers);
        debug!(batch_len, size, "sizing worker pool");
        Self::new(size)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of workers currently idle.
    pub fn available(&self) -> usize {
        self.permits.available_permits()
    }

    /// Run `work` once a worker is free.
    ///
    /// Returns [`TxflowError::Cancelled`] if the pool was closed before a
    /// worker became available.
    pub async fn run<F>(&self, work: F) -> Result<F::Output, TxflowError>
    where
        F: Future,
    {
        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|_| TxflowError::Cancelled)?;
        Ok(work.await)
    }

    /// Stop handing out workers. Work already running is unaffected.
    pub fn close(&self) {
        self.permits.close();
    }
}
