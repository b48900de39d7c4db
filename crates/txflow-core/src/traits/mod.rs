// SPDX-FileCopyrightText: 2026 txflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait seams between pipeline stages.
//!
//! Commission strategies are synchronous and object-safe; validators are
//! async and use `#[async_trait]` so they can be held as trait objects.

pub mod commission;
pub mod validator;

pub use commission::CommissionStrategy;
pub use validator::Validator;
