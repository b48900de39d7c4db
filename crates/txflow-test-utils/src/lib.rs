// SPDX-FileCopyrightText: 2026 txflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for txflow integration tests.
//!
//! Provides a scripted validator and fixtures for fast, deterministic tests
//! without randomness or wall-clock waits.
//!
//! # Components
//!
//! - [`MockValidator`] - Validator replaying per-transaction scripted steps
//! - [`fixtures`] - Sample batch with stable ids and a fast configuration

pub mod fixtures;
pub mod mock_validator;

pub use mock_validator::{MockStep, MockValidator};
