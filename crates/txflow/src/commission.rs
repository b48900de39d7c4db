// SPDX-FileCopyrightText: 2026 txflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `txflow commission` - one-off commission lookup.

use txflow_commission::CommissionStrategyFactory;
use txflow_config::TxflowConfig;

/// Pick the strategy for `currency` and render the commission on `amount`.
pub fn render_commission(config: &TxflowConfig, currency: &str, amount: f64) -> String {
    let factory = CommissionStrategyFactory::new(&config.commission);
    let strategy = factory.for_currency(Some(currency));
    let commission = strategy.calculate_commission(Some(amount));
    format!(
        "currency={} amount={amount:.2} strategy={} rate={} commission={commission:.2}\n",
        currency.trim().to_ascii_uppercase(),
        strategy.name(),
        strategy.rate(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_lookup_is_case_insensitive() {
        let out = render_commission(&TxflowConfig::default(), "usd", 100.0);
        assert_eq!(
            out,
            "currency=USD amount=100.00 strategy=usd rate=0.02 commission=2.00\n"
        );
    }

    #[test]
    fn unknown_currency_uses_default_rate() {
        let out = render_commission(&TxflowConfig::default(), "GBP", 200.0);
        assert!(out.contains("strategy=default"));
        assert!(out.ends_with("commission=10.00\n"));
    }

    #[test]
    fn configured_rates_apply() {
        let mut config = TxflowConfig::default();
        config.commission.eur_rate = 0.5;
        let out = render_commission(&config, "EUR", 10.0);
        assert!(out.ends_with("rate=0.5 commission=5.00\n"));
    }
}
