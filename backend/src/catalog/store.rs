//! Catalog store
//!
//! The mutable home of the cost rules, edited by the admin collaborator.
//! Every mutation is validated on the way in; the engine only ever sees
//! the store through [`CatalogStore::snapshot`], an immutable catalog
//! taken at call time. No compute ever reads through to live store state
//! mid-computation.

use crate::models::rule::CostRule;

use super::{seed_rules, validate_rule, CatalogError, CostCatalog};

/// Ordered, validated collection of cost rules with admin mutations
#[derive(Debug, Clone)]
pub struct CatalogStore {
    rules: Vec<CostRule>,
}

impl CatalogStore {
    /// Create a store holding the seed rule set
    pub fn new() -> Self {
        Self {
            rules: seed_rules(),
        }
    }

    /// Create a store from an explicit rule set (validated)
    pub fn from_rules(rules: Vec<CostRule>) -> Result<Self, CatalogError> {
        // Reuse catalog construction for row + uniqueness validation
        let catalog = CostCatalog::from_rules(rules)?;
        Ok(Self {
            rules: catalog.into(),
        })
    }

    /// Rules currently in effect, in catalog order
    pub fn list(&self) -> &[CostRule] {
        &self.rules
    }

    /// Append a rule
    ///
    /// # Errors
    /// `DuplicateCostCode` if the code is already present, or any row
    /// validation failure.
    pub fn add(&mut self, rule: CostRule) -> Result<(), CatalogError> {
        validate_rule(&rule)?;
        if self.rules.iter().any(|r| r.code == rule.code) {
            return Err(CatalogError::DuplicateCostCode { code: rule.code });
        }
        self.rules.push(rule);
        Ok(())
    }

    /// Replace the rule identified by `code` with `rule` (full body)
    ///
    /// The replacement may change the code; the new code must not collide
    /// with any other rule. Position in the catalog order is kept.
    ///
    /// # Errors
    /// `UnknownCostCode` if no rule has `code`; `DuplicateCostCode` if the
    /// replacement code collides; or any row validation failure.
    pub fn update(&mut self, code: &str, rule: CostRule) -> Result<(), CatalogError> {
        validate_rule(&rule)?;

        let index = self
            .rules
            .iter()
            .position(|r| r.code == code)
            .ok_or_else(|| CatalogError::UnknownCostCode {
                code: code.to_string(),
            })?;

        if rule.code != code && self.rules.iter().any(|r| r.code == rule.code) {
            return Err(CatalogError::DuplicateCostCode { code: rule.code });
        }

        self.rules[index] = rule;
        Ok(())
    }

    /// Restore the seed rule set
    pub fn reset(&mut self) {
        self.rules = seed_rules();
    }

    /// Immutable catalog snapshot for one compute call
    pub fn snapshot(&self) -> CostCatalog {
        CostCatalog::from_validated(self.rules.clone())
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::rule::{Behavior, CostCategory, DestScope, QtySource};

    fn fixed_rule(code: &str, amount: f64) -> CostRule {
        CostRule::new(
            code,
            "Fixed charge",
            Behavior::FixedPerShipment,
            amount,
            "shipment",
            QtySource::One,
            DestScope::for_code("LUB"),
            CostCategory::Admin,
        )
    }

    #[test]
    fn update_replaces_in_place() {
        let mut store = CatalogStore::from_rules(vec![
            fixed_rule("A", 100.0),
            fixed_rule("B", 200.0),
        ])
        .unwrap();

        store.update("A", fixed_rule("A", 150.0)).unwrap();
        assert_eq!(store.list()[0].unit_amount_usd, 150.0);
        assert_eq!(store.list()[1].code, "B");
    }

    #[test]
    fn update_unknown_code_errors() {
        let mut store = CatalogStore::from_rules(vec![fixed_rule("A", 100.0)]).unwrap();
        let err = store.update("MISSING", fixed_rule("A", 1.0)).unwrap_err();
        assert_eq!(
            err,
            CatalogError::UnknownCostCode {
                code: "MISSING".to_string()
            }
        );
    }

    #[test]
    fn update_cannot_collide_codes() {
        let mut store = CatalogStore::from_rules(vec![
            fixed_rule("A", 100.0),
            fixed_rule("B", 200.0),
        ])
        .unwrap();

        let err = store.update("A", fixed_rule("B", 1.0)).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateCostCode { .. }));
    }

    #[test]
    fn reset_restores_seed() {
        let mut store = CatalogStore::new();
        let seeded = store.list().len();

        store.add(fixed_rule("EXTRA", 10.0)).unwrap();
        assert_eq!(store.list().len(), seeded + 1);

        store.reset();
        assert_eq!(store.list().len(), seeded);
        assert!(!store.list().iter().any(|r| r.code == "EXTRA"));
    }

    #[test]
    fn snapshot_is_isolated_from_later_edits() {
        let mut store = CatalogStore::from_rules(vec![fixed_rule("A", 100.0)]).unwrap();
        let snapshot = store.snapshot();

        store.update("A", fixed_rule("A", 999.0)).unwrap();
        assert_eq!(snapshot.rules()[0].unit_amount_usd, 100.0);
    }
}
