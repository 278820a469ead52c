//! Finance cost calculator
//!
//! Working-capital cost of the payment-timing gap: capital is tied up
//! from supplier payment (`dpo_buy_days`) until customer collection
//! (`dso_sell_days`), plus the storage holding period. The financed
//! principal is COGS — the simplest defensible basis.
//!
//! A supplier-terms-longer-than-customer-terms gap floors at zero days;
//! financing never produces a negative cost.

use crate::models::scenario::Scenario;

const DAYS_PER_MONTH: f64 = 30.0;
const DAYS_PER_YEAR: f64 = 365.0;

/// Days the principal is financed for
pub fn financed_days(scenario: &Scenario) -> f64 {
    (scenario.dso_sell_days - scenario.dpo_buy_days).max(0.0)
        + scenario.storage_months * DAYS_PER_MONTH
}

/// Finance cost: `cogs * rate/100 * financed_days/365`
pub fn finance_cost(scenario: &Scenario, cogs: f64) -> f64 {
    cogs * (scenario.annual_finance_rate_pct / 100.0) * (financed_days(scenario) / DAYS_PER_YEAR)
}
