//! Property tests for the costing algebra
//!
//! The identities that must hold for any scenario: bucket
//! additivity, the break-even round trip, the shrinkage identity and
//! finance-rate monotonicity.

use proptest::prelude::*;

use trade_calculator_core_rs::{
    compute, seed_rules, CostCatalog, Destination, Incoterm, Scenario,
};

fn seed_catalog() -> CostCatalog {
    CostCatalog::from_rules(seed_rules()).unwrap()
}

fn destination_strategy() -> impl Strategy<Value = Destination> {
    prop_oneof![
        Just(Destination::Lubumbashi),
        Just(Destination::Kinshasa),
        Just(Destination::Kolwezi),
    ]
}

fn scenario_strategy() -> impl Strategy<Value = Scenario> {
    (
        (
            destination_strategy(),
            prop_oneof![Just(Incoterm::Cfr), Just(Incoterm::Fob)],
            1.0..5_000.0f64, // volume_mt
            1.0..3_000.0f64, // buy_price_per_mt
            1.0..5_000.0f64, // sell_price_per_mt
            0.0..10.0f64,    // shrinkage_pct
        ),
        (
            0.0..6.0f64,   // storage_months
            0.0..120.0f64, // dpo_buy_days
            0.0..180.0f64, // dso_sell_days
            0.0..30.0f64,  // annual_finance_rate_pct
            0.0..10.0f64,  // partner_profit_pct
        ),
    )
        .prop_map(
            |((dest, incoterm, volume, buy, sell, shrink), (storage, dpo, dso, rate, partner))| {
                Scenario::new(dest, volume, buy)
                    .with_incoterm(incoterm)
                    .with_sell_price(sell)
                    .with_shrinkage_pct(shrink)
                    .with_storage_months(storage)
                    .with_financing(dpo, dso, rate)
                    .with_partner_profit_pct(partner)
            },
        )
}

// Tolerance scaled for sums in the millions of USD
const TOL: f64 = 1e-6;

proptest! {
    #[test]
    fn total_cost_is_additive(scenario in scenario_strategy()) {
        let result = compute(&scenario, &seed_catalog()).unwrap();
        let b = &result.breakdown;

        let sum = b.cogs
            + b.logistics_excl_cogs_ins
            + b.insurance
            + b.shrinkage
            + b.finance
            + b.partner_profit.unwrap_or(0.0);
        prop_assert!((result.kpis.total_cost - sum).abs() < TOL);
    }

    #[test]
    fn break_even_round_trips(scenario in scenario_strategy()) {
        let result = compute(&scenario, &seed_catalog()).unwrap();
        let kpis = &result.kpis;

        prop_assert!(
            (kpis.break_even_sell_per_mt * scenario.volume_mt - kpis.total_cost).abs()
                < TOL * kpis.total_cost.abs().max(1.0)
        );
    }

    #[test]
    fn shrinkage_is_exactly_pct_of_cogs(scenario in scenario_strategy()) {
        let result = compute(&scenario, &seed_catalog()).unwrap();
        let expected = scenario.shrinkage_pct / 100.0 * result.breakdown.cogs;
        prop_assert!((result.breakdown.shrinkage - expected).abs() < TOL);
    }

    #[test]
    fn finance_cost_monotone_in_rate(
        scenario in scenario_strategy(),
        bump in 0.1..50.0f64,
    ) {
        let catalog = seed_catalog();
        let base = compute(&scenario, &catalog).unwrap();

        let mut raised = scenario.clone();
        raised.annual_finance_rate_pct += bump;
        let bumped = compute(&raised, &catalog).unwrap();

        prop_assert!(bumped.breakdown.finance >= base.breakdown.finance - TOL);
    }

    #[test]
    fn selling_at_break_even_zeroes_margin(
        (volume, buy, sell, shrink, storage, rate) in (
            1.0..5_000.0f64,
            1.0..3_000.0f64,
            1.0..5_000.0f64,
            0.0..10.0f64,
            0.0..6.0f64,
            0.0..30.0f64,
        ),
    ) {
        // Break-even is a fixed point of the sell price only when no cost
        // component is itself sell-linked: no partner share, and a
        // destination whose catalog has no sell-side percent rules (KIN)
        let catalog = seed_catalog();
        let scenario = Scenario::new(Destination::Kinshasa, volume, buy)
            .with_sell_price(sell)
            .with_shrinkage_pct(shrink)
            .with_storage_months(storage)
            .with_financing(15.0, 45.0, rate);

        let first = compute(&scenario, &catalog).unwrap();
        let at_break_even =
            scenario.clone().with_sell_price(first.kpis.break_even_sell_per_mt);
        let second = compute(&at_break_even, &catalog).unwrap();

        let scale = first.kpis.total_cost.abs().max(1.0);
        prop_assert!(second.kpis.net_margin.abs() < TOL * scale);
        prop_assert!(second.kpis.net_margin_pct.unwrap().abs() < 1e-6);
    }
}
