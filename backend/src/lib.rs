//! Trade Calculator Core - Rust Engine
//!
//! Scenario-based trade costing for commodity shipments: given a
//! shipment scenario and a cost catalog, resolve the applicable rules,
//! price them into line items, aggregate cost buckets and derive
//! profitability KPIs (revenue, total cost, net margin, break-even).
//!
//! # Architecture
//!
//! - **models**: Domain types (Scenario, CostRule, Breakdown, KpiSet)
//! - **catalog**: Catalog container, validation, seed data, admin store
//! - **engine**: The pure compute pipeline (scope → quantity → lines →
//!   buckets → finance → KPIs)
//! - **api**: The external boundary the dashboard and CLI consume
//!
//! # Critical Invariants
//!
//! 1. The engine is pure and deterministic: one scenario and one catalog
//!    snapshot in, one result out, no I/O
//! 2. Catalog consistency (unique codes, behavior/qty-source pairing) is
//!    enforced at load/update time, never on the compute hot path
//! 3. Wire field names and enum tags are fixed for dashboard
//!    compatibility

// Module declarations
pub mod api;
pub mod catalog;
pub mod engine;
pub mod models;

// Re-exports for convenience
pub use api::TradeCalculator;
pub use catalog::{seed_rules, CatalogError, CatalogStore, CostCatalog};
pub use engine::{compute, value_basis, ComputeError, ValueBasis};
pub use models::{
    outcome::{Breakdown, ComputeResult, KpiSet, LineItem},
    rule::{Behavior, CostCategory, CostRule, DestScope, QtySource},
    scenario::{Destination, Incoterm, Scenario},
};
