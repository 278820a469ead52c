//! KPI calculator
//!
//! Derives the profitability metrics from a finished breakdown.
//! `net_margin_pct` is `None` for a zero-revenue scenario — degenerate
//! but valid input, reported as a null metric instead of an error.

use crate::models::outcome::{Breakdown, KpiSet};
use crate::models::scenario::Scenario;

/// Derive KPIs from the breakdown
pub fn derive(scenario: &Scenario, breakdown: &Breakdown) -> KpiSet {
    let gross_revenue = scenario.sell_value_usd();
    let total_cost = breakdown.total_cost();
    let net_margin = gross_revenue - total_cost;

    let net_margin_pct = if gross_revenue != 0.0 {
        Some(net_margin / gross_revenue)
    } else {
        None
    };

    KpiSet {
        gross_revenue,
        total_cost,
        net_margin,
        net_margin_pct,
        // volume_mt > 0 is a Scenario construction invariant
        net_margin_per_mt: net_margin / scenario.volume_mt,
        break_even_sell_per_mt: total_cost / scenario.volume_mt,
    }
}
