//! Cost rule model
//!
//! A cost rule is one row of the cost catalog: how to price one cost
//! category for the destinations its scope covers. Rules are owned and
//! edited by the admin collaborator; the engine only ever reads them
//! through an immutable catalog snapshot.
//!
//! The `behavior`/`qty_source` pairing is a closed compatibility table
//! (see [`Behavior::expected_qty_source`]) enforced at catalog load and
//! update time, never re-checked on the compute hot path.

use serde::{Deserialize, Serialize};

/// Cost category
///
/// Closed enumeration. `product` marks the COGS placeholder rows the
/// admin screen displays (the engine derives COGS from the scenario and
/// skips these). `finance` and `shrinkage` are derived buckets computed
/// by the engine; catalog rows carrying them are rejected at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostCategory {
    Product,
    OceanFreight,
    PortClearance,
    PortHandling,
    ShippingLine,
    Storage,
    Handling,
    InlandTrucking,
    Customs,
    Feri,
    Agency,
    Admin,
    Bank,
    Insurance,
    Finance,
    Shrinkage,
}

impl CostCategory {
    /// Wire name (snake_case), as serialized
    pub fn as_str(&self) -> &'static str {
        match self {
            CostCategory::Product => "product",
            CostCategory::OceanFreight => "ocean_freight",
            CostCategory::PortClearance => "port_clearance",
            CostCategory::PortHandling => "port_handling",
            CostCategory::ShippingLine => "shipping_line",
            CostCategory::Storage => "storage",
            CostCategory::Handling => "handling",
            CostCategory::InlandTrucking => "inland_trucking",
            CostCategory::Customs => "customs",
            CostCategory::Feri => "feri",
            CostCategory::Agency => "agency",
            CostCategory::Admin => "admin",
            CostCategory::Bank => "bank",
            CostCategory::Insurance => "insurance",
            CostCategory::Finance => "finance",
            CostCategory::Shrinkage => "shrinkage",
        }
    }

    /// True for the buckets the engine computes itself (never catalog rows)
    pub fn is_derived(&self) -> bool {
        matches!(self, CostCategory::Finance | CostCategory::Shrinkage)
    }
}

impl std::fmt::Display for CostCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How `unit_amount_usd` combines with the resolved quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Behavior {
    /// USD per metric ton
    PerTon,
    /// USD per container
    PerContainer,
    /// USD per truck
    PerTruck,
    /// USD per month of storage
    PerMonth,
    /// Flat USD per shipment
    FixedPerShipment,
    /// Percentage of shipment value (`unit_amount_usd` is a whole percent)
    PercentOfValue,
}

impl Behavior {
    /// Wire name (snake_case), as serialized
    pub fn as_str(&self) -> &'static str {
        match self {
            Behavior::PerTon => "per_ton",
            Behavior::PerContainer => "per_container",
            Behavior::PerTruck => "per_truck",
            Behavior::PerMonth => "per_month",
            Behavior::FixedPerShipment => "fixed_per_shipment",
            Behavior::PercentOfValue => "percent_of_value",
        }
    }

    /// The single quantity source this behavior is compatible with
    pub fn expected_qty_source(&self) -> QtySource {
        match self {
            Behavior::PerTon => QtySource::VolumeMt,
            Behavior::PerContainer => QtySource::Containers,
            Behavior::PerTruck => QtySource::Trucks,
            Behavior::PerMonth => QtySource::StorageMonths,
            Behavior::FixedPerShipment => QtySource::One,
            Behavior::PercentOfValue => QtySource::ValueUsd,
        }
    }
}

impl std::fmt::Display for Behavior {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What quantity a rule is priced against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QtySource {
    /// Scenario volume in metric tons
    #[serde(rename = "Volume_MT")]
    VolumeMt,

    /// Containers needed: `volume_mt / mt_per_container` (fractional;
    /// whole-container billing is a catalog/contract concern)
    #[serde(rename = "Containers")]
    Containers,

    /// Trucks needed: `volume_mt / mt_per_truck`
    #[serde(rename = "Trucks")]
    Trucks,

    /// Months of storage at destination
    #[serde(rename = "Storage_Months")]
    StorageMonths,

    /// Constant 1 (fixed per-shipment charge)
    #[serde(rename = "1")]
    One,

    /// Shipment value in USD; buy-side or sell-side per category
    /// (see `engine::quantity::value_basis`)
    #[serde(rename = "Value_USD")]
    ValueUsd,
}

impl QtySource {
    /// Wire name, as serialized
    pub fn as_str(&self) -> &'static str {
        match self {
            QtySource::VolumeMt => "Volume_MT",
            QtySource::Containers => "Containers",
            QtySource::Trucks => "Trucks",
            QtySource::StorageMonths => "Storage_Months",
            QtySource::One => "1",
            QtySource::ValueUsd => "Value_USD",
        }
    }
}

impl std::fmt::Display for QtySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Destination-qualified scope pattern, e.g. `"LUB*"`
///
/// A rule applies to a destination when the pattern starts with the
/// destination's three-letter code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DestScope(pub String);

impl DestScope {
    /// Scope covering a single destination code
    pub fn for_code(code: &str) -> Self {
        DestScope(format!("{}*", code))
    }

    /// True when this scope covers `code`
    pub fn matches(&self, code: &str) -> bool {
        self.0.starts_with(code)
    }
}

impl std::fmt::Display for DestScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One row of the cost catalog
///
/// `unit_amount_usd` is a USD rate for unit behaviors and a whole percent
/// for `percent_of_value` (e.g. `5.0` = 5% of value). `unit` is the human
/// display unit carried through to line items unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostRule {
    /// Unique rule identifier
    pub code: String,

    /// Human-readable description
    pub name: String,

    /// Pricing behavior
    pub behavior: Behavior,

    /// Rate or percentage, per `behavior`
    pub unit_amount_usd: f64,

    /// Display unit (e.g. "MT", "container", "percent")
    pub unit: String,

    /// Quantity the rule is priced against
    pub qty_source: QtySource,

    /// Destination scope pattern
    pub dest_scope: DestScope,

    /// Cost category, drives bucket aggregation
    pub category: CostCategory,
}

impl CostRule {
    /// Create a rule; arguments in catalog column order
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        code: &str,
        name: &str,
        behavior: Behavior,
        unit_amount_usd: f64,
        unit: &str,
        qty_source: QtySource,
        dest_scope: DestScope,
        category: CostCategory,
    ) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            behavior,
            unit_amount_usd,
            unit: unit.to_string(),
            qty_source,
            dest_scope,
            category,
        }
    }
}
