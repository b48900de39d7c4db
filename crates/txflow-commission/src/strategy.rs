// SPDX-FileCopyrightText: 2026 txflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Concrete commission strategies.
//!
//! USD: 2%, EUR: 1%, every other currency: 5%. Rates can be overridden from
//! the `[commission]` config section.

use txflow_core::CommissionStrategy;

/// Commission charged on USD transactions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UsdCommission {
    rate: f64,
}

impl UsdCommission {
    pub const DEFAULT_RATE: f64 = 0.02;

    pub fn with_rate(rate: f64) -> Self {
        Self { rate }
    }
}

impl Default for UsdCommission {
    fn default() -> Self {
        Self::with_rate(Self::DEFAULT_RATE)
    }
}

impl CommissionStrategy for UsdCommission {
    fn name(&self) -> &str {
        "usd"
    }

    fn rate(&self) -> f64 {
        self.rate
    }
}

/// Commission charged on EUR transactions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EurCommission {
    rate: f64,
}

impl EurCommission {
    pub const DEFAULT_RATE: f64 = 0.01;

    pub fn with_rate(rate: f64) -> Self {
        Self { rate }
    }
}

impl Default for EurCommission {
    fn default() -> Self {
        Self::with_rate(Self::DEFAULT_RATE)
    }
}

impl CommissionStrategy for EurCommission {
    fn name(&self) -> &str {
        "eur"
    }

    fn rate(&self) -> f64 {
        self.rate
    }
}

/// Fallback commission for unknown or missing currencies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DefaultCommission {
    rate: f64,
}

impl DefaultCommission {
    pub const DEFAULT_RATE: f64 = 0.05;

    pub fn with_rate(rate: f64) -> Self {
        Self { rate }
    }
}

impl Default for DefaultCommission {
    fn default() -> Self {
        Self::with_rate(Self::DEFAULT_RATE)
    }
}

impl CommissionStrategy for DefaultCommission {
    fn name(&self) -> &str {
        "default"
    }

    fn rate(&self) -> f64 {
        self.rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_commission_is_two_percent() {
        let commission = UsdCommission::default().calculate_commission(Some(100.0));
        assert!((commission - 2.0).abs() < 1e-9);
    }

    #[test]
    fn eur_commission_is_one_percent() {
        let commission = EurCommission::default().calculate_commission(Some(200.0));
        assert!((commission - 2.0).abs() < 1e-9);
    }

    #[test]
    fn default_commission_is_five_percent_and_handles_missing_amount() {
        let strategy = DefaultCommission::default();
        assert!((strategy.calculate_commission(Some(50.0)) - 2.5).abs() < 1e-9);
        assert!((strategy.calculate_commission(None) - 0.0).abs() < 1e-9);
    }

    #[test]
    fn custom_rate_is_applied() {
        let strategy = UsdCommission::with_rate(0.1);
        assert!((strategy.calculate_commission(Some(30.0)) - 3.0).abs() < 1e-9);
    }
}
