//! Category aggregator
//!
//! Sums evaluated lines into the named cost buckets and attaches the
//! scenario-derived buckets:
//! - `cogs = buy_price_per_mt * volume_mt` (never a catalog line)
//! - `insurance` sums insurance-category lines
//! - every other category sums into `logistics_excl_cogs_ins`
//! - `shrinkage = shrinkage_pct / 100 * cogs`, computed once here
//! - `partner_profit = partner_profit_pct / 100 * sell value`, present
//!   only when nonzero
//!
//! Finance is filled in by the pipeline after this step; shrinkage,
//! finance and partner profit are never part of the per-line loop, so
//! nothing is double-counted.

use crate::models::outcome::{Breakdown, LineItem};
use crate::models::rule::CostCategory;
use crate::models::scenario::Scenario;

/// Build the breakdown from evaluated lines (finance still zero)
pub fn aggregate(scenario: &Scenario, lines: Vec<LineItem>) -> Breakdown {
    let cogs = scenario.buy_value_usd();

    let mut logistics = 0.0;
    let mut insurance = 0.0;
    for line in &lines {
        match line.category {
            CostCategory::Insurance => insurance += line.cost_usd,
            // Product never survives scope resolution; anything else is a
            // logistics-type category
            _ => logistics += line.cost_usd,
        }
    }

    let shrinkage = scenario.shrinkage_pct / 100.0 * cogs;

    let partner_profit = if scenario.partner_profit_pct != 0.0 {
        Some(scenario.partner_profit_pct / 100.0 * scenario.sell_value_usd())
    } else {
        None
    };

    let route_legs = scenario
        .destination
        .route_legs()
        .iter()
        .map(|(from, to)| (from.to_string(), to.to_string()))
        .collect();

    Breakdown {
        cogs,
        logistics_excl_cogs_ins: logistics,
        insurance,
        shrinkage,
        finance: 0.0,
        partner_profit,
        lines,
        route_legs,
    }
}
