// SPDX-FileCopyrightText: 2026 txflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Currency-to-strategy selection and commission quotes.

use serde::Serialize;
use tracing::debug;
use txflow_config::model::CommissionConfig;
use txflow_core::{CommissionStrategy, Transaction, TransactionId};

use crate::strategy::{DefaultCommission, EurCommission, UsdCommission};

/// Commission computed for one transaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommissionQuote {
    pub transaction_id: TransactionId,
    pub currency: String,
    pub amount: Option<f64>,
    pub commission: f64,
    /// Name of the strategy that produced the commission.
    pub strategy: String,
}

/// Picks the commission strategy for a currency.
///
/// Matching is case-insensitive and locale-independent. Unknown and missing
/// currencies fall back to the default strategy so no transaction goes
/// without a commission.
#[derive(Debug, Clone)]
pub struct CommissionStrategyFactory {
    usd: UsdCommission,
    eur: EurCommission,
    fallback: DefaultCommission,
}

impl CommissionStrategyFactory {
    /// Build a factory from configured rates.
    pub fn new(config: &CommissionConfig) -> Self {
        Self {
            usd: UsdCommission::with_rate(config.usd_rate),
            eur: EurCommission::with_rate(config.eur_rate),
            fallback: DefaultCommission::with_rate(config.default_rate),
        }
    }

    pub fn for_currency(&self, currency: Option<&str>) -> &dyn CommissionStrategy {
        let Some(currency) = currency else {
            return &self.fallback;
        };
        match currency.trim().to_ascii_uppercase().as_str() {
            "USD" => &self.usd,
            "EUR" => &self.eur,
            _ => &self.fallback,
        }
    }

    /// Compute the commission owed on `transaction`.
    pub fn quote(&self, transaction: &Transaction) -> CommissionQuote {
        let strategy = self.for_currency(Some(transaction.currency()));
        let commission = strategy.calculate_commission(transaction.amount());
        debug!(
            id = %transaction.id(),
            currency = transaction.currency(),
            strategy = strategy.name(),
            commission,
            "commission calculated"
        );
        CommissionQuote {
            transaction_id: transaction.id().clone(),
            currency: transaction.currency().to_string(),
            amount: transaction.amount(),
            commission,
            strategy: strategy.name().to_string(),
        }
    }
}

impl Default for CommissionStrategyFactory {
    fn default() -> Self {
        Self::new(&CommissionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_selection_is_case_insensitive() {
        let factory = CommissionStrategyFactory::default();
        assert_eq!(factory.for_currency(Some("USD")).name(), "usd");
        assert_eq!(factory.for_currency(Some("usd")).name(), "usd");
        assert_eq!(factory.for_currency(Some("Eur")).name(), "eur");
    }

    #[test]
    fn unknown_and_missing_currency_fall_back() {
        let factory = CommissionStrategyFactory::default();
        assert_eq!(factory.for_currency(Some("JPY")).name(), "default");
        assert_eq!(factory.for_currency(Some("")).name(), "default");
        assert_eq!(factory.for_currency(None).name(), "default");
    }

    #[test]
    fn configured_rates_flow_into_strategies() {
        let config = CommissionConfig {
            usd_rate: 0.03,
            eur_rate: 0.04,
            default_rate: 0.06,
        };
        let factory = CommissionStrategyFactory::new(&config);
        assert_eq!(factory.for_currency(Some("USD")).rate(), 0.03);
        assert_eq!(factory.for_currency(Some("EUR")).rate(), 0.04);
        assert_eq!(factory.for_currency(Some("GBP")).rate(), 0.06);
    }

    #[test]
    fn quote_uses_transaction_currency() {
        let factory = CommissionStrategyFactory::default();
        let tx = Transaction::new("tx-1", Some(120.0), "USD", None).unwrap();
        let quote = factory.quote(&tx);
        assert_eq!(quote.transaction_id, *tx.id());
        assert_eq!(quote.strategy, "usd");
        assert!((quote.commission - 2.4).abs() < 1e-9);
    }

    #[test]
    fn quote_serializes_to_json() {
        let factory = CommissionStrategyFactory::default();
        let tx = Transaction::new("tx-2", Some(200.0), "JPY", None).unwrap();
        let json = serde_json::to_value(factory.quote(&tx)).unwrap();
        assert_eq!(json["transaction_id"], "tx-2");
        assert_eq!(json["strategy"], "default");
        assert_eq!(json["commission"], 10.0);
    }

    proptest::proptest! {
        #[test]
        fn every_currency_gets_a_strategy(currency in "[A-Za-z]{0,5}", amount in 0.0f64..1e6) {
            let factory = CommissionStrategyFactory::default();
            let strategy = factory.for_currency(Some(currency.as_str()));
            let commission = strategy.calculate_commission(Some(amount));
            proptest::prop_assert!(commission >= 0.0);
            proptest::prop_assert!(commission <= amount * DefaultCommission::DEFAULT_RATE + 1e-9);
        }
    }
}
