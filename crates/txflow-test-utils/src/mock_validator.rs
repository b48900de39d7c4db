// SPDX-FileCopyrightText: 2026 txflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock validator for deterministic testing.
//!
//! `MockValidator` implements `Validator` with per-transaction scripts,
//! so retry and failure paths can be exercised without randomness.

use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use txflow_core::{Transaction, TxflowError, ValidationResult, Validator};

/// One scripted response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockStep {
    /// Succeed with message `OK`.
    Valid,
    /// Return a definitive invalid verdict.
    Invalid(String),
    /// Fail transiently.
    Fail,
}

#[derive(Default)]
struct State {
    scripts: HashMap<String, VecDeque<MockStep>>,
    calls: HashMap<String, u32>,
}

/// A validator that replays scripted steps per transaction id.
///
/// Steps are consumed in order for each id. Once an id's script is empty
/// (or if it never had one) every call succeeds.
#[derive(Default)]
pub struct MockValidator {
    state: Mutex<State>,
}

impl MockValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the responses for `id`.
    pub fn script(self, id: &str, steps: Vec<MockStep>) -> Self {
        let mut state = self.state.into_inner();
        state.scripts.insert(id.to_string(), steps.into());
        Self {
            state: Mutex::new(state),
        }
    }

    /// Number of times `id` was validated.
    pub async fn calls(&self, id: &str) -> u32 {
        self.state.lock().await.calls.get(id).copied().unwrap_or(0)
    }

    /// Number of validation calls across all ids.
    pub async fn total_calls(&self) -> u32 {
        self.state.lock().await.calls.values().sum()
    }
}

#[async_trait]
impl Validator for MockValidator {
    fn name(&self) -> &str {
        "mock-validator"
    }

    async fn validate(&self, transaction: &Transaction) -> Result<ValidationResult, TxflowError> {
        let id = transaction.id().0.clone();
        let step = {
            let mut state = self.state.lock().await;
            *state.calls.entry(id.clone()).or_default() += 1;
            state
                .scripts
                .get_mut(&id)
                .and_then(VecDeque::pop_front)
                .unwrap_or(MockStep::Valid)
        };
        debug!(%id, ?step, "mock validation");

        match step {
            MockStep::Valid => Ok(ValidationResult::valid()),
            MockStep::Invalid(message) => Ok(ValidationResult::invalid(message)),
            MockStep::Fail => Err(TxflowError::transient(format!("scripted failure for {id}"))),
        }
    }
}
