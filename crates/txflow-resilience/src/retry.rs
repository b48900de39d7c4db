// SPDX-FileCopyrightText: 2026 txflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Async retry with fixed backoff.
//!
//! Each attempt runs on the shared [`WorkerPool`]; the worker is released
//! while waiting out the backoff so other work can use it. Backoff waits are
//! cancelled by [`RetryExecutor::shutdown`].

use std::future::Future;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, error, warn};
use txflow_config::model::RetryConfig;
use txflow_core::TxflowError;

use crate::pool::WorkerPool;

/// How many times to try and how long to wait in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first.
    pub max_attempts: u32,
    /// Fixed delay between a failure and the next attempt.
    pub backoff: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, backoff: Duration) -> Self {
        Self {
            max_attempts,
            backoff,
        }
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(config: &RetryConfig) -> Self {
        Self::new(config.max_attempts, config.backoff())
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from(&RetryConfig::default())
    }
}

/// Runs fallible async operations on a worker pool, retrying failures.
#[derive(Debug, Clone)]
pub struct RetryExecutor {
    pool: WorkerPool,
    policy: RetryPolicy,
    shutdown: CancellationToken,
}

impl RetryExecutor {
    pub fn new(pool: WorkerPool, policy: RetryPolicy) -> Self {
        Self {
            pool,
            policy,
            shutdown: CancellationToken::new(),
        }
    }

    /// Tie this executor's shutdown to `parent`: cancelling the parent
    /// shuts the executor down too.
    pub fn with_parent_token(mut self, parent: &CancellationToken) -> Self {
        self.shutdown = parent.child_token();
        self
    }

    pub fn pool(&self) -> &WorkerPool {
        &self.pool
    }

    /// Run `op` until it succeeds or the policy's attempts are used up.
    ///
    /// Returns [`TxflowError::RetriesExhausted`] after the last failed
    /// attempt and [`TxflowError::Cancelled`] if shutdown happens first.
    /// With `max_attempts == 0` the operation is never called.
    pub async fn retry<T, F, Fut>(&self, mut op: F) -> Result<T, TxflowError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, TxflowError>>,
    {
        let max_attempts = self.policy.max_attempts;

        for attempt in 1..=max_attempts {
            if self.shutdown.is_cancelled() {
                return Err(TxflowError::Cancelled);
            }

            debug!(attempt, remaining = max_attempts - attempt + 1, "attempting");

            match self.pool.run(op()).await? {
                Ok(value) => {
                    debug!(attempt, "attempt succeeded");
                    return Ok(value);
                }
                Err(e) => {
                    warn!(attempt, error = %e, "attempt failed");
                }
            }

            if attempt < max_attempts {
                tokio::select! {
                    _ = tokio::time::sleep(self.policy.backoff) => {}
                    _ = self.shutdown.cancelled() => {
                        debug!(attempt, "retry cancelled during backoff");
                        return Err(TxflowError::Cancelled);
                    }
                }
            }
        }

        error!(attempts = max_attempts, "exhausted retries");
        Err(TxflowError::RetriesExhausted {
            attempts: max_attempts,
        })
    }

    /// Cancel pending backoff waits. Does not close the worker pool.
    pub fn shutdown(&self) {
        debug!("shutting down retry executor");
        self.shutdown.cancel();
    }

    pub fn is_shut_down(&self) -> bool {
        self.shutdown.is_cancelled()
    }
}
