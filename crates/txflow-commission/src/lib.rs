// SPDX-FileCopyrightText: 2026 txflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Commission calculation for the txflow pipeline.
//!
//! This crate provides:
//! - **Strategies**: USD, EUR, and fallback commission rules
//! - **Factory**: Case-insensitive currency-to-strategy selection and quotes

pub mod factory;
pub mod strategy;

pub use factory::{CommissionQuote, CommissionStrategyFactory};
pub use strategy::{DefaultCommission, EurCommission, UsdCommission};
