//! Scope resolver
//!
//! Filters the catalog down to the rules applicable to one scenario:
//! - `dest_scope` must match the scenario destination
//! - `product` rows are dropped (COGS is scenario-derived, not a line)
//! - `ocean_freight` rows are dropped under CFR (already embedded in the
//!   buy price) and kept under FOB
//!
//! Catalog order is preserved; it determines line-item display order.
//! An empty result is valid — not every destination needs every cost
//! type, and a destination with no rules at all simply produces an
//! all-zero logistics bucket.

use crate::catalog::CostCatalog;
use crate::models::rule::{CostCategory, CostRule};
use crate::models::scenario::{Incoterm, Scenario};

/// Resolve the rules in scope for `scenario`, in catalog order
pub fn resolve<'a>(catalog: &'a CostCatalog, scenario: &Scenario) -> Vec<&'a CostRule> {
    let dest_code = scenario.destination.code();

    catalog
        .iter()
        .filter(|rule| rule.dest_scope.matches(dest_code))
        .filter(|rule| rule.category != CostCategory::Product)
        .filter(|rule| {
            rule.category != CostCategory::OceanFreight || scenario.incoterm == Incoterm::Fob
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::rule::{Behavior, DestScope, QtySource};
    use crate::models::scenario::Destination;

    fn rule(code: &str, scope: &str, category: CostCategory) -> CostRule {
        CostRule::new(
            code,
            code,
            Behavior::PerTon,
            10.0,
            "MT",
            QtySource::VolumeMt,
            DestScope(scope.to_string()),
            category,
        )
    }

    fn catalog() -> CostCatalog {
        CostCatalog::from_rules(vec![
            rule("COGS_LUB", "LUB*", CostCategory::Product),
            rule("FRT_LUB", "LUB*", CostCategory::OceanFreight),
            rule("HND_LUB", "LUB*", CostCategory::Handling),
            rule("HND_KIN", "KIN*", CostCategory::Handling),
        ])
        .unwrap()
    }

    #[test]
    fn filters_by_destination_and_keeps_order() {
        let catalog = catalog();
        let scenario = Scenario::new(Destination::Lubumbashi, 100.0, 500.0)
            .with_incoterm(Incoterm::Fob);

        let rules = resolve(&catalog, &scenario);
        let codes: Vec<&str> = rules.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["FRT_LUB", "HND_LUB"]);
    }

    #[test]
    fn cfr_drops_ocean_freight() {
        let catalog = catalog();
        let scenario = Scenario::new(Destination::Lubumbashi, 100.0, 500.0);

        let rules = resolve(&catalog, &scenario);
        let codes: Vec<&str> = rules.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["HND_LUB"]);
    }

    #[test]
    fn product_rows_always_dropped() {
        let catalog = catalog();
        for incoterm in [Incoterm::Cfr, Incoterm::Fob] {
            let scenario = Scenario::new(Destination::Lubumbashi, 100.0, 500.0)
                .with_incoterm(incoterm);
            assert!(resolve(&catalog, &scenario)
                .iter()
                .all(|r| r.category != CostCategory::Product));
        }
    }

    #[test]
    fn unscoped_destination_is_empty_not_error() {
        let catalog = CostCatalog::from_rules(vec![rule(
            "HND_KIN",
            "KIN*",
            CostCategory::Handling,
        )])
        .unwrap();
        let scenario = Scenario::new(Destination::Kolwezi, 100.0, 500.0);

        assert!(resolve(&catalog, &scenario).is_empty());
    }
}
