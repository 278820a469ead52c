//! Admin-path tests: catalog read, add, update, reset through the facade
//!
//! The engine consumes catalog state only through snapshots; these tests
//! pin down the mutation surface the admin screen drives.

use trade_calculator_core_rs::{
    Behavior, CatalogError, CostCategory, CostRule, Destination, DestScope, QtySource, Scenario,
    TradeCalculator,
};

fn extra_rule(code: &str) -> CostRule {
    CostRule::new(
        code,
        "Extra fixed levy",
        Behavior::FixedPerShipment,
        1000.0,
        "shipment",
        QtySource::One,
        DestScope::for_code("LUB"),
        CostCategory::Admin,
    )
}

#[test]
fn costs_lists_seed_in_order() {
    let calc = TradeCalculator::new();
    let costs = calc.costs();

    assert!(!costs.is_empty());
    // Seed starts with the three COGS placeholder rows
    assert!(costs[0].code.starts_with("COGS_"));
}

#[test]
fn added_rule_prices_into_next_compute() {
    let mut calc = TradeCalculator::new();
    let scenario = Scenario::new(Destination::Lubumbashi, 700.0, 530.0).with_sell_price(1700.0);

    let before = calc.compute(&scenario).unwrap();
    calc.add_cost(extra_rule("EXTRA_LEVY")).unwrap();
    let after = calc.compute(&scenario).unwrap();

    let delta = after.breakdown.logistics_excl_cogs_ins - before.breakdown.logistics_excl_cogs_ins;
    assert!((delta - 1000.0).abs() < 1e-9);
    assert!(after.breakdown.lines.iter().any(|l| l.code == "EXTRA_LEVY"));
}

#[test]
fn duplicate_add_rejected() {
    let mut calc = TradeCalculator::new();
    calc.add_cost(extra_rule("EXTRA_LEVY")).unwrap();

    let err = calc.add_cost(extra_rule("EXTRA_LEVY")).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateCostCode { .. }));
}

#[test]
fn update_unknown_code_is_an_error() {
    let mut calc = TradeCalculator::new();
    let err = calc.update_cost("NOT_A_RULE", extra_rule("NOT_A_RULE")).unwrap_err();
    assert_eq!(
        err,
        CatalogError::UnknownCostCode {
            code: "NOT_A_RULE".to_string()
        }
    );
}

#[test]
fn update_validates_behavior_pairing() {
    let mut calc = TradeCalculator::new();

    let mut broken = extra_rule("INSP_BIVAC");
    broken.qty_source = QtySource::Trucks; // fixed_per_shipment expects "1"

    let err = calc.update_cost("INSP_BIVAC", broken).unwrap_err();
    assert!(matches!(err, CatalogError::IncompatibleQuantitySource { .. }));
}

#[test]
fn derived_categories_cannot_be_catalog_rows() {
    let mut calc = TradeCalculator::new();

    let mut rule = extra_rule("SHRINK_ROW");
    rule.category = CostCategory::Shrinkage;

    let err = calc.add_cost(rule).unwrap_err();
    assert!(matches!(err, CatalogError::ReservedCategory { .. }));
}

#[test]
fn reset_undoes_edits() {
    let mut calc = TradeCalculator::new();
    let scenario = Scenario::new(Destination::Lubumbashi, 700.0, 530.0).with_sell_price(1700.0);

    let before = calc.compute(&scenario).unwrap();
    calc.add_cost(extra_rule("EXTRA_LEVY")).unwrap();

    calc.reset_costs();
    let after = calc.compute(&scenario).unwrap();
    assert_eq!(before, after);
}
