//! External boundary
//!
//! The calculator facade the dashboard and CLI talk to: submit a
//! scenario, get the computed result; read, edit and reset the cost
//! catalog. All request/response types are JSON-serializable; the engine
//! itself never mutates the catalog and always computes against a
//! snapshot taken when the call starts.

use crate::catalog::{CatalogError, CatalogStore};
use crate::engine::{self, ComputeError};
use crate::models::outcome::ComputeResult;
use crate::models::rule::CostRule;
use crate::models::scenario::Scenario;

/// Calculator service: the engine plus its catalog collaborator
///
/// # Example
/// ```
/// use trade_calculator_core_rs::{Destination, Scenario, TradeCalculator};
///
/// let calc = TradeCalculator::new();
/// let scenario = Scenario::new(Destination::Lubumbashi, 700.0, 530.0)
///     .with_sell_price(1700.0);
///
/// let result = calc.compute(&scenario).unwrap();
/// assert_eq!(result.breakdown.cogs, 371_000.0);
/// ```
#[derive(Debug, Default)]
pub struct TradeCalculator {
    store: CatalogStore,
}

impl TradeCalculator {
    /// Create a calculator over the seed catalog
    pub fn new() -> Self {
        Self {
            store: CatalogStore::new(),
        }
    }

    /// Create a calculator over an explicit catalog
    pub fn with_rules(rules: Vec<CostRule>) -> Result<Self, CatalogError> {
        Ok(Self {
            store: CatalogStore::from_rules(rules)?,
        })
    }

    /// Compute one scenario against the current catalog
    ///
    /// Snapshots the catalog first; concurrent admin edits never bleed
    /// into a running computation.
    pub fn compute(&self, scenario: &Scenario) -> Result<ComputeResult, ComputeError> {
        let snapshot = self.store.snapshot();
        engine::compute(scenario, &snapshot)
    }

    /// Ordered list of rules currently in effect
    pub fn costs(&self) -> &[CostRule] {
        self.store.list()
    }

    /// Append a catalog rule
    pub fn add_cost(&mut self, rule: CostRule) -> Result<(), CatalogError> {
        self.store.add(rule)
    }

    /// Replace the rule identified by `code`
    pub fn update_cost(&mut self, code: &str, rule: CostRule) -> Result<(), CatalogError> {
        self.store.update(code, rule)
    }

    /// Restore the seed catalog
    pub fn reset_costs(&mut self) {
        self.store.reset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::scenario::Destination;

    #[test]
    fn compute_result_round_trips_through_json() {
        let calc = TradeCalculator::new();
        let scenario = Scenario::new(Destination::Kinshasa, 700.0, 530.0)
            .with_sell_price(1700.0)
            .with_shrinkage_pct(0.3);

        let result = calc.compute(&scenario).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let back: ComputeResult = serde_json::from_str(&json).unwrap();

        assert_eq!(back, result);
    }

    #[test]
    fn edits_change_later_computes_only() {
        let mut calc = TradeCalculator::new();
        let scenario = Scenario::new(Destination::Lubumbashi, 700.0, 530.0)
            .with_sell_price(1700.0);

        let before = calc.compute(&scenario).unwrap();

        let mut rule = calc
            .costs()
            .iter()
            .find(|r| r.code == "HND_LUB_TON")
            .unwrap()
            .clone();
        rule.unit_amount_usd = 150.0;
        calc.update_cost("HND_LUB_TON", rule).unwrap();

        let after = calc.compute(&scenario).unwrap();
        let delta = after.breakdown.logistics_excl_cogs_ins
            - before.breakdown.logistics_excl_cogs_ins;
        assert!((delta - 75.0 * 700.0).abs() < 1e-9);
    }
}
