//! Quantity resolver
//!
//! Maps a rule's `qty_source` to a numeric quantity for the scenario.
//! Container and truck counts are fractional by design: partial-unit
//! billing is a catalog/contract concern, not an engine concern.
//!
//! `Value_USD` is the one source that depends on the rule's category:
//! the per-category value-basis table below decides whether a
//! percent-of-value rule prices against the purchase value or the
//! revenue value. The table is explicit and exhaustive so a new category
//! cannot land without a stated basis.

use crate::models::rule::{CostCategory, QtySource};
use crate::models::scenario::Scenario;

/// Which shipment value a `percent_of_value` rule prices against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueBasis {
    /// `buy_price_per_mt * volume_mt` (cost side)
    BuySide,
    /// effective sell price × volume (revenue side)
    SellSide,
}

/// Value basis per category
///
/// Cost-side fees (insurance, bank collection, customs-type levies and
/// every physical-logistics category) price against the purchase value.
/// Revenue-linked charges (admin surcharges quoted against invoice value)
/// price against the sell value, as does the scenario-level partner
/// profit share.
pub fn value_basis(category: CostCategory) -> ValueBasis {
    match category {
        CostCategory::Admin => ValueBasis::SellSide,
        CostCategory::Product
        | CostCategory::OceanFreight
        | CostCategory::PortClearance
        | CostCategory::PortHandling
        | CostCategory::ShippingLine
        | CostCategory::Storage
        | CostCategory::Handling
        | CostCategory::InlandTrucking
        | CostCategory::Customs
        | CostCategory::Feri
        | CostCategory::Agency
        | CostCategory::Bank
        | CostCategory::Insurance
        | CostCategory::Finance
        | CostCategory::Shrinkage => ValueBasis::BuySide,
    }
}

/// Resolve a quantity source to a number for `scenario`
///
/// `category` only matters for `Value_USD`, where it selects the value
/// basis.
pub fn resolve(source: QtySource, category: CostCategory, scenario: &Scenario) -> f64 {
    match source {
        QtySource::VolumeMt => scenario.volume_mt,
        QtySource::Containers => scenario.volume_mt / scenario.mt_per_container,
        QtySource::Trucks => scenario.volume_mt / scenario.mt_per_truck,
        QtySource::StorageMonths => scenario.storage_months,
        QtySource::One => 1.0,
        QtySource::ValueUsd => match value_basis(category) {
            ValueBasis::BuySide => scenario.buy_value_usd(),
            ValueBasis::SellSide => scenario.sell_value_usd(),
        },
    }
}
