//! Seed cost catalog
//!
//! The fixed rule set the catalog resets to. Rates come from the worked
//! supplier invoices for the three corridors:
//! - LUB: Dar es Salaam → Lubumbashi (trucked)
//! - KIN: Matadi → Kinshasa (containerized)
//! - KOL: the LUB corridor extended to Kolwezi (no Lubumbashi
//!   warehousing, extra inland leg and per-MT storage)
//!
//! Ocean freight is seeded per destination so FOB scenarios itemize it;
//! CFR scenarios drop those rows at scope resolution. Product rows are
//! zero-amount COGS placeholders for the admin screen — the engine skips
//! them and derives COGS from the scenario.

use crate::models::rule::{Behavior, CostCategory, CostRule, DestScope, QtySource};

use crate::models::rule::Behavior::*;
use crate::models::rule::CostCategory::*;
use crate::models::rule::QtySource::*;

/// Shorthand row type: (code, name, behavior, amount, unit, source, category)
type Row = (
    &'static str,
    &'static str,
    Behavior,
    f64,
    &'static str,
    QtySource,
    CostCategory,
);

/// Rows shared by the LUB and KOL corridors (Dar es Salaam gateway)
const DAR_CORRIDOR: &[Row] = &[
    (
        "TRK_TZ_DRC_LINEHAUL",
        "Transport Dar→Lubumbashi / truck",
        PerTruck,
        9200.0,
        "truck",
        Trucks,
        InlandTrucking,
    ),
    (
        "CLR_TZ_CNTR",
        "Clearance TZ / container",
        PerContainer,
        716.0,
        "container",
        Containers,
        PortClearance,
    ),
    (
        "HND_TZ_CNTR",
        "Handling TZ / container",
        PerContainer,
        200.0,
        "container",
        Containers,
        PortHandling,
    ),
    (
        "WH_LUB_MONTH",
        "Lubumbashi warehousing / month",
        PerMonth,
        8000.0,
        "month",
        StorageMonths,
        Storage,
    ),
    (
        "HND_LUB_TON",
        "Lubumbashi handling in/out / ton",
        PerTon,
        75.0,
        "MT",
        VolumeMt,
        Handling,
    ),
    (
        "INSP_BIVAC",
        "Intervention inspection BIVAC/Zam/BL (fixed)",
        FixedPerShipment,
        2500.0,
        "shipment",
        One,
        Customs,
    ),
    (
        "DRC_SEGQUE_TRK",
        "DRC Import SEGQUE / truck",
        PerTruck,
        120.0,
        "truck",
        Trucks,
        Customs,
    ),
    (
        "DRC_DGDA_SEAL_TRK",
        "DRC Import DGDA seals / truck",
        PerTruck,
        35.0,
        "truck",
        Trucks,
        Customs,
    ),
    (
        "DRC_OPS_TRK",
        "DRC Import operational charges / truck",
        PerTruck,
        232.0,
        "truck",
        Trucks,
        Admin,
    ),
    (
        "DRC_DOSSIER_TRK",
        "DRC Import dossier opening / truck",
        PerTruck,
        50.0,
        "truck",
        Trucks,
        Admin,
    ),
    (
        "DRC_AGENCY_TRK",
        "DRC Agency fees / truck",
        PerTruck,
        81.2,
        "truck",
        Trucks,
        Agency,
    ),
    (
        "DRC_FERI_CNTR",
        "DRC Import FERI / container",
        PerContainer,
        101.46,
        "container",
        Containers,
        Feri,
    ),
    (
        "DRC_OGEFREM_TRK",
        "DRC OGEFREM attestation / truck",
        PerTruck,
        182.0,
        "truck",
        Trucks,
        Customs,
    ),
    (
        "BIVAC_FEE_PCT_LUB",
        "Bivac fee — 2% of purchase value",
        PercentOfValue,
        2.0,
        "percent",
        ValueUsd,
        Customs,
    ),
    (
        "ADMIN_SURCHARGE_PCT_LUB",
        "Administrative surcharge — 2% of value",
        PercentOfValue,
        2.0,
        "percent",
        ValueUsd,
        Admin,
    ),
    (
        "BANK_FEE_PCT_LUB",
        "Bank collection fee — 5% of purchase value",
        PercentOfValue,
        5.0,
        "percent",
        ValueUsd,
        Bank,
    ),
];

/// Matadi → Kinshasa corridor rows
const KIN_CORRIDOR: &[Row] = &[
    (
        "TRN_MAT_KIN_CNTR",
        "Transport Matadi→Kinshasa / container",
        PerContainer,
        2150.0,
        "container",
        Containers,
        InlandTrucking,
    ),
    (
        "HND_KIN_TCK_CNTR",
        "Kinshasa handling TCK / container",
        PerContainer,
        356.0,
        "container",
        Containers,
        PortHandling,
    ),
    (
        "BOND_KIN_DAY_CNTR",
        "Bonded warehouse VAT incl./day TCPK / container",
        PerContainer,
        22.04,
        "container",
        Containers,
        Storage,
    ),
    (
        "SHIP_LINE_CNTR",
        "Shipping line fees / container",
        PerContainer,
        630.0,
        "container",
        Containers,
        ShippingLine,
    ),
    (
        "MAIRF_CNTR",
        "Mairf / container",
        PerContainer,
        10.0,
        "container",
        Containers,
        PortClearance,
    ),
    (
        "AQUAI_CNTR",
        "AQUAI / container",
        PerContainer,
        100.0,
        "container",
        Containers,
        PortClearance,
    ),
    (
        "FUMIG_CNTR",
        "Fumigation / container",
        PerContainer,
        50.0,
        "container",
        Containers,
        PortHandling,
    ),
    (
        "FERI_CNTR",
        "FERI / container",
        PerContainer,
        71.46,
        "container",
        Containers,
        Feri,
    ),
    (
        "ADM_FERI_CNTR",
        "FERI administrative fees / container",
        PerContainer,
        30.0,
        "container",
        Containers,
        Feri,
    ),
    (
        "AD_CERT_CNTR",
        "AD certificate / container",
        PerContainer,
        38.7,
        "container",
        Containers,
        Customs,
    ),
    (
        "AD_ADMIN_CNTR",
        "AD administrative fees / container",
        PerContainer,
        30.0,
        "container",
        Containers,
        Admin,
    ),
    (
        "LIQ_ESEAL_CNTR",
        "Liquidation electronic seal + RLT / container",
        PerContainer,
        255.0,
        "container",
        Containers,
        Customs,
    ),
    (
        "TECH_FEES_CNTR",
        "Technical fees / container",
        PerContainer,
        200.0,
        "container",
        Containers,
        Admin,
    ),
    (
        "OPS_ADMIN_CNTR",
        "Operational & administrative fees / container",
        PerContainer,
        200.0,
        "container",
        Containers,
        Admin,
    ),
    (
        "FILE_OPEN_CNTR",
        "File opening / container",
        PerContainer,
        50.0,
        "container",
        Containers,
        Admin,
    ),
    (
        "BANK_FEES_CNTR",
        "Bank fees / container",
        PerContainer,
        50.0,
        "container",
        Containers,
        Bank,
    ),
    (
        "SEGQUE_CNTR",
        "Segque / container",
        PerContainer,
        105.0,
        "container",
        Containers,
        Customs,
    ),
    (
        "AGENCY_CNTR",
        "Agency fees / container",
        PerContainer,
        350.0,
        "container",
        Containers,
        Agency,
    ),
];

fn row_to_rule(row: &Row, code_prefix: &str, scope: &DestScope) -> CostRule {
    let (code, name, behavior, amount, unit, qty_source, category) = *row;
    CostRule::new(
        &format!("{}{}", code_prefix, code),
        name,
        behavior,
        amount,
        unit,
        qty_source,
        scope.clone(),
        category,
    )
}

/// Build the seed rule set
///
/// Order matters: it is the catalog display order and therefore the
/// line-item order in every breakdown.
pub fn seed_rules() -> Vec<CostRule> {
    let mut rules = Vec::new();

    // COGS placeholder rows (amount 0; engine derives COGS from the scenario)
    for code in ["LUB", "KIN", "KOL"] {
        rules.push(CostRule::new(
            &format!("COGS_BITUMEN_{}", code),
            "Bitumen purchase (CFR/FOB as selected)",
            PerTon,
            0.0,
            "MT",
            VolumeMt,
            DestScope::for_code(code),
            Product,
        ));
    }

    // Ocean freight, itemized only under FOB
    rules.push(CostRule::new(
        "FRT_OCEAN_DAR_LUB",
        "Ocean freight to Dar es Salaam / MT",
        PerTon,
        85.0,
        "MT",
        VolumeMt,
        DestScope::for_code("LUB"),
        OceanFreight,
    ));
    rules.push(CostRule::new(
        "FRT_OCEAN_MAT_KIN",
        "Ocean freight to Matadi / MT",
        PerTon,
        62.0,
        "MT",
        VolumeMt,
        DestScope::for_code("KIN"),
        OceanFreight,
    ));
    rules.push(CostRule::new(
        "KOL_FRT_OCEAN_DAR",
        "Ocean freight to Dar es Salaam / MT",
        PerTon,
        85.0,
        "MT",
        VolumeMt,
        DestScope::for_code("KOL"),
        OceanFreight,
    ));

    let lub_scope = DestScope::for_code("LUB");
    for row in DAR_CORRIDOR {
        rules.push(row_to_rule(row, "", &lub_scope));
    }

    let kin_scope = DestScope::for_code("KIN");
    for row in KIN_CORRIDOR {
        rules.push(row_to_rule(row, "", &kin_scope));
    }

    // KOL replicates the Dar corridor without Lubumbashi warehousing,
    // then adds the Kolwezi inland leg and per-MT storage
    let kol_scope = DestScope::for_code("KOL");
    for row in DAR_CORRIDOR.iter().filter(|r| r.0 != "WH_LUB_MONTH") {
        rules.push(row_to_rule(row, "KOL_", &kol_scope));
    }
    rules.push(CostRule::new(
        "KOL_INLAND_PER_MT",
        "Additional inland transport Kolwezi / MT",
        PerTon,
        60.0,
        "MT",
        VolumeMt,
        kol_scope.clone(),
        InlandTrucking,
    ));
    rules.push(CostRule::new(
        "KOL_STORE_PER_MT_MONTH",
        "Kolwezi storage / MT / month",
        PerMonth,
        79.0,
        "month",
        StorageMonths,
        kol_scope.clone(),
        Storage,
    ));

    // Value-based insurance, per destination
    rules.push(CostRule::new(
        "INS_KIN_VALUE_PCT",
        "Insurance (value-based) Kinshasa",
        PercentOfValue,
        0.325,
        "percent",
        ValueUsd,
        DestScope::for_code("KIN"),
        Insurance,
    ));
    rules.push(CostRule::new(
        "INS_LUB_VALUE_PCT",
        "Insurance (value-based) Lubumbashi",
        PercentOfValue,
        0.425,
        "percent",
        ValueUsd,
        DestScope::for_code("LUB"),
        Insurance,
    ));
    rules.push(CostRule::new(
        "INS_KOL_VALUE_PCT",
        "Insurance (value-based) Kolwezi (=Lubumbashi)",
        PercentOfValue,
        0.425,
        "percent",
        ValueUsd,
        kol_scope,
        Insurance,
    ));

    rules
}
