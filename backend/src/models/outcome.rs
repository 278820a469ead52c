//! Computed outcome types
//!
//! Line items, the cost breakdown and the KPI set are derived per compute
//! call, have no identity beyond the call, and are never persisted by the
//! engine. All three are wire-exact JSON for the consuming dashboard.

use serde::{Deserialize, Serialize};

use super::rule::CostCategory;

/// A priced instantiation of one catalog rule against one scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Rule code
    pub code: String,

    /// Rule name
    pub name: String,

    /// Rule category
    pub category: CostCategory,

    /// Resolved quantity the rule was priced against
    /// (1 for fixed and percent-of-value charges)
    pub qty: f64,

    /// Display unit, carried from the rule
    pub unit: String,

    /// Rate or percentage, carried from the rule
    pub unit_amount_usd: f64,

    /// Computed line cost (USD); negative values are rebates
    pub cost_usd: f64,
}

/// Named cost buckets plus the full ordered line sequence
///
/// `cogs`, `shrinkage`, `finance` and `partner_profit` are derived from
/// the scenario, not from catalog lines; `logistics_excl_cogs_ins` and
/// `insurance` sum the evaluated lines by category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    /// Cost of goods sold: `buy_price_per_mt * volume_mt`
    pub cogs: f64,

    /// Sum of all logistics-type categories (everything except product
    /// and insurance)
    pub logistics_excl_cogs_ins: f64,

    /// Sum of insurance-category lines
    pub insurance: f64,

    /// Value lost to product loss: `shrinkage_pct / 100 * cogs`
    pub shrinkage: f64,

    /// Working-capital financing cost of the payment-timing gap
    pub finance: f64,

    /// Partner profit share of revenue; present only when nonzero
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner_profit: Option<f64>,

    /// Evaluated lines, catalog order preserved
    pub lines: Vec<LineItem>,

    /// Route legs (origin, terminus) for the destination, for map rendering
    pub route_legs: Vec<(String, String)>,
}

impl Breakdown {
    /// Sum of every bucket: the scenario's total cost
    pub fn total_cost(&self) -> f64 {
        self.cogs
            + self.logistics_excl_cogs_ins
            + self.insurance
            + self.shrinkage
            + self.finance
            + self.partner_profit.unwrap_or(0.0)
    }
}

/// Profitability KPIs derived from the breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSet {
    /// Revenue at the effective sell price
    pub gross_revenue: f64,

    /// Sum of all breakdown buckets
    pub total_cost: f64,

    /// `gross_revenue - total_cost`
    pub net_margin: f64,

    /// Margin as a fraction of revenue; `null` when revenue is zero
    /// (a zero-revenue scenario is degenerate but valid)
    pub net_margin_pct: Option<f64>,

    /// Margin per metric ton
    pub net_margin_per_mt: f64,

    /// Sell price at which net margin is exactly zero:
    /// `total_cost / volume_mt`
    pub break_even_sell_per_mt: f64,
}

/// Full result of one compute call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputeResult {
    /// Cost buckets and lines
    pub breakdown: Breakdown,

    /// Profitability KPIs
    pub kpis: KpiSet,
}
