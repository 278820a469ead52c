//! Domain models
//!
//! Inputs (Scenario, CostRule) and computed outputs (LineItem, Breakdown,
//! KpiSet). All wire-facing; field names are fixed for dashboard
//! compatibility.

pub mod outcome;
pub mod rule;
pub mod scenario;
