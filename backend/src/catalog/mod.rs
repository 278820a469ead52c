//! Cost catalog
//!
//! The catalog is an ordered collection of cost rules. It is owned and
//! edited outside the engine (admin screen); the engine receives it as an
//! immutable snapshot per compute call.
//!
//! # Critical Invariants
//!
//! 1. Rule codes are unique
//! 2. Every rule's `qty_source` is the one its `behavior` expects
//! 3. No rule carries a derived category (`finance`, `shrinkage`)
//!
//! All three are enforced here, at load and update time, so the compute
//! hot path never re-validates static catalog data.

pub mod seed;
pub mod store;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::rule::{Behavior, CostCategory, CostRule, QtySource};

pub use seed::seed_rules;
pub use store::CatalogStore;

/// Errors raised when loading or editing the catalog
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("no cost rule with code {code}")]
    UnknownCostCode { code: String },

    #[error("cost rule code {code} already exists")]
    DuplicateCostCode { code: String },

    #[error("rule {code}: qty_source {qty_source} is incompatible with behavior {behavior} (expected {expected})")]
    IncompatibleQuantitySource {
        code: String,
        behavior: Behavior,
        qty_source: QtySource,
        expected: QtySource,
    },

    #[error("rule {code}: category {category} is derived by the engine and cannot be a catalog row")]
    ReservedCategory {
        code: String,
        category: CostCategory,
    },

    #[error("cost rule code must not be empty")]
    EmptyCode,
}

/// Validate one rule against the catalog-consistency invariants
///
/// Uniqueness is checked by the container, not here.
pub fn validate_rule(rule: &CostRule) -> Result<(), CatalogError> {
    if rule.code.is_empty() {
        return Err(CatalogError::EmptyCode);
    }
    if rule.category.is_derived() {
        return Err(CatalogError::ReservedCategory {
            code: rule.code.clone(),
            category: rule.category,
        });
    }
    let expected = rule.behavior.expected_qty_source();
    if rule.qty_source != expected {
        return Err(CatalogError::IncompatibleQuantitySource {
            code: rule.code.clone(),
            behavior: rule.behavior,
            qty_source: rule.qty_source,
            expected,
        });
    }
    Ok(())
}

/// Immutable, validated catalog snapshot
///
/// Order is the catalog's display order and is preserved through scope
/// resolution into the line items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CostRule>", into = "Vec<CostRule>")]
pub struct CostCatalog {
    rules: Vec<CostRule>,
}

impl CostCatalog {
    /// Build a catalog from rules, validating every row and code uniqueness
    pub fn from_rules(rules: Vec<CostRule>) -> Result<Self, CatalogError> {
        for (i, rule) in rules.iter().enumerate() {
            validate_rule(rule)?;
            if rules[..i].iter().any(|r| r.code == rule.code) {
                return Err(CatalogError::DuplicateCostCode {
                    code: rule.code.clone(),
                });
            }
        }
        Ok(Self { rules })
    }

    /// Internal constructor for rules already validated by the store
    pub(crate) fn from_validated(rules: Vec<CostRule>) -> Self {
        Self { rules }
    }

    /// Rules in catalog order
    pub fn rules(&self) -> &[CostRule] {
        &self.rules
    }

    /// Iterate rules in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, CostRule> {
        self.rules.iter()
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when the catalog holds no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl TryFrom<Vec<CostRule>> for CostCatalog {
    type Error = CatalogError;

    fn try_from(rules: Vec<CostRule>) -> Result<Self, Self::Error> {
        CostCatalog::from_rules(rules)
    }
}

impl From<CostCatalog> for Vec<CostRule> {
    fn from(catalog: CostCatalog) -> Self {
        catalog.rules
    }
}
