//! Line evaluator
//!
//! Turns one in-scope rule plus the scenario into a priced line item.
//! Evaluation is an exhaustive match over `(behavior, qty_source)` pairs:
//! each behavior accepts exactly its paired source, so a new behavior
//! cannot be added without the compiler forcing a decision here. An
//! incompatible pair fails the whole computation — a malformed catalog is
//! a configuration bug, not a scenario edge case.
//!
//! Negative amounts or quantities flow through arithmetically; callers
//! treat negative line costs as rebates.

use crate::models::outcome::LineItem;
use crate::models::rule::{Behavior, CostRule, QtySource};
use crate::models::scenario::Scenario;

use super::quantity;
use super::ComputeError;

/// Evaluate one rule against the scenario
pub fn evaluate(rule: &CostRule, scenario: &Scenario) -> Result<LineItem, ComputeError> {
    let (qty, cost_usd) = match (rule.behavior, rule.qty_source) {
        (Behavior::PerTon, QtySource::VolumeMt)
        | (Behavior::PerContainer, QtySource::Containers)
        | (Behavior::PerTruck, QtySource::Trucks)
        | (Behavior::PerMonth, QtySource::StorageMonths)
        | (Behavior::FixedPerShipment, QtySource::One) => {
            let qty = quantity::resolve(rule.qty_source, rule.category, scenario);
            (qty, rule.unit_amount_usd * qty)
        }

        (Behavior::PercentOfValue, QtySource::ValueUsd) => {
            // unit_amount_usd is a whole percent; the value basis is folded
            // into the cost and the line reports qty 1
            let basis = quantity::resolve(rule.qty_source, rule.category, scenario);
            (1.0, rule.unit_amount_usd / 100.0 * basis)
        }

        (behavior, qty_source) => {
            return Err(ComputeError::InvalidQuantitySource {
                code: rule.code.clone(),
                behavior,
                qty_source,
            })
        }
    };

    Ok(LineItem {
        code: rule.code.clone(),
        name: rule.name.clone(),
        category: rule.category,
        qty,
        unit: rule.unit.clone(),
        unit_amount_usd: rule.unit_amount_usd,
        cost_usd,
    })
}
