// SPDX-FileCopyrightText: 2026 txflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Commission strategy trait.

/// A per-currency commission rule.
pub trait CommissionStrategy: Send + Sync {
    /// Short identifier used in logs and reports (e.g. `usd`).
    fn name(&self) -> &str;

    /// Fraction of the amount charged as commission.
    fn rate(&self) -> f64;

    /// Commission owed on `amount`. A missing amount owes nothing.
    fn calculate_commission(&self, amount: Option<f64>) -> f64 {
        match amount {
            Some(amount) => amount * self.rate(),
            None => 0.0,
        }
    }
}
