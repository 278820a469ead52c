//! Scenario compute engine
//!
//! The pure function at the heart of the calculator: one scenario plus
//! one immutable catalog snapshot in, one result out. Single pass,
//! synchronous, no I/O, no shared state — safe to invoke concurrently
//! for independent scenarios, and total (catalog size bounds the work).
//!
//! # Pipeline
//!
//! 1. Scope resolution: filter the catalog to the scenario's destination
//!    and incoterm
//! 2. Quantity resolution + line evaluation, per rule, catalog order
//! 3. Bucket aggregation (COGS, logistics, insurance, shrinkage,
//!    partner profit)
//! 4. Finance cost from the payment-timing gap
//! 5. KPI derivation (revenue, margin, break-even)

pub mod aggregate;
pub mod evaluate;
pub mod finance;
pub mod kpi;
pub mod quantity;
pub mod scope;

use thiserror::Error;

use crate::catalog::CostCatalog;
use crate::models::outcome::ComputeResult;
use crate::models::rule::{Behavior, QtySource};
use crate::models::scenario::Scenario;

pub use quantity::{value_basis, ValueBasis};

/// Errors raised during a compute call
///
/// A malformed catalog fails the whole computation rather than silently
/// skipping a line; zero-revenue and empty-scope scenarios are valid and
/// do not error.
#[derive(Debug, Error, PartialEq)]
pub enum ComputeError {
    #[error("rule {code}: qty_source {qty_source} cannot be priced with behavior {behavior}")]
    InvalidQuantitySource {
        code: String,
        behavior: Behavior,
        qty_source: QtySource,
    },
}

/// Compute the full costing result for one scenario
///
/// # Arguments
/// * `scenario` - The shipment under evaluation
/// * `catalog` - Immutable catalog snapshot taken at call time
///
/// # Errors
/// `InvalidQuantitySource` when a rule's behavior/quantity-source pairing
/// is inconsistent (configuration bug in an unvalidated catalog).
pub fn compute(scenario: &Scenario, catalog: &CostCatalog) -> Result<ComputeResult, ComputeError> {
    let rules = scope::resolve(catalog, scenario);

    let mut lines = Vec::with_capacity(rules.len());
    for rule in rules {
        lines.push(evaluate::evaluate(rule, scenario)?);
    }

    let mut breakdown = aggregate::aggregate(scenario, lines);
    breakdown.finance = finance::finance_cost(scenario, breakdown.cogs);

    let kpis = kpi::derive(scenario, &breakdown);

    Ok(ComputeResult { breakdown, kpis })
}
