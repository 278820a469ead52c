//! Scenario model
//!
//! A scenario describes one shipment under evaluation:
//! - Destination and incoterm (which legs are embedded in the buy price)
//! - Volume and buy/sell prices (USD per metric ton)
//! - Shrinkage, storage and payment-timing terms driving derived costs
//! - Conversion factors for container/truck-based cost rules
//!
//! Scenarios are immutable inputs to the compute engine: one scenario and
//! one catalog snapshot in, one result out.

use serde::{Deserialize, Serialize};

/// Shipment destination
///
/// Closed enumeration; each destination carries its own cost-rule scope,
/// an indicative default sell price, and the route legs drawn by the
/// dashboard map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    /// Lubumbashi, DRC (via Dar es Salaam corridor)
    #[serde(rename = "LUB")]
    Lubumbashi,

    /// Kinshasa, DRC (via Matadi)
    #[serde(rename = "KIN")]
    Kinshasa,

    /// Kolwezi, DRC (via Dar es Salaam corridor, beyond Lubumbashi)
    #[serde(rename = "KOL")]
    Kolwezi,
}

impl Destination {
    /// Three-letter wire code, also the stem of `dest_scope` patterns
    pub fn code(&self) -> &'static str {
        match self {
            Destination::Lubumbashi => "LUB",
            Destination::Kinshasa => "KIN",
            Destination::Kolwezi => "KOL",
        }
    }

    /// Indicative sell price (USD/MT) used when the scenario carries no override
    ///
    /// Maintained by analysts as the prevailing delivered market level per
    /// destination, not derived from the catalog.
    pub fn default_sell_price_per_mt(&self) -> f64 {
        match self {
            Destination::Lubumbashi => 1680.0,
            Destination::Kinshasa => 1520.0,
            Destination::Kolwezi => 1725.0,
        }
    }

    /// Route legs (origin, terminus) for map rendering
    pub fn route_legs(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Destination::Lubumbashi => &[("Dar es Salaam", "Lubumbashi")],
            Destination::Kinshasa => &[("Matadi", "Kinshasa")],
            Destination::Kolwezi => &[("Dar es Salaam", "Kolwezi")],
        }
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Trade term determining which logistics legs the buy price embeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Incoterm {
    /// Cost and Freight: ocean freight is embedded in the buy price,
    /// so `ocean_freight` catalog rules are excluded from the breakdown
    #[serde(rename = "CFR")]
    Cfr,

    /// Free On Board: ocean freight is itemized separately,
    /// so `ocean_freight` catalog rules are included
    #[serde(rename = "FOB")]
    Fob,
}

impl Default for Incoterm {
    fn default() -> Self {
        Incoterm::Cfr
    }
}

/// One shipment scenario to be costed
///
/// All prices and rates in USD; percentages as whole percents
/// (e.g. `shrinkage_pct = 0.3` means 0.3%).
///
/// # Example
/// ```
/// use trade_calculator_core_rs::{Destination, Scenario};
///
/// let scenario = Scenario::new(Destination::Lubumbashi, 700.0, 530.0)
///     .with_sell_price(1700.0)
///     .with_shrinkage_pct(0.3);
///
/// assert_eq!(scenario.sell_unit_price(), 1700.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Shipment destination
    pub destination: Destination,

    /// Trade term (default CFR)
    #[serde(default)]
    pub incoterm: Incoterm,

    /// Shipment volume in metric tons (must be > 0)
    pub volume_mt: f64,

    /// Purchase price per metric ton (USD)
    pub buy_price_per_mt: f64,

    /// Sell price per metric ton (USD); absent means the destination default
    #[serde(default)]
    pub sell_price_per_mt: Option<f64>,

    /// Product loss as a percentage of cost-basis volume
    #[serde(default)]
    pub shrinkage_pct: f64,

    /// Months of storage at destination
    #[serde(default)]
    pub storage_months: f64,

    /// Days payable outstanding: when suppliers get paid
    #[serde(default)]
    pub dpo_buy_days: f64,

    /// Days sales outstanding: when customers pay
    #[serde(default)]
    pub dso_sell_days: f64,

    /// Annual working-capital financing rate (percent)
    #[serde(default)]
    pub annual_finance_rate_pct: f64,

    /// Partner profit share as a percentage of revenue (0 = no partner)
    #[serde(default)]
    pub partner_profit_pct: f64,

    /// Metric tons per container, for `Containers`-sourced rules
    #[serde(default = "default_mt_per_container")]
    pub mt_per_container: f64,

    /// Metric tons per truck, for `Trucks`-sourced rules
    #[serde(default = "default_mt_per_truck")]
    pub mt_per_truck: f64,
}

fn default_mt_per_container() -> f64 {
    40.0
}

fn default_mt_per_truck() -> f64 {
    58.0
}

impl Scenario {
    /// Create a scenario with the required fields and defaults elsewhere
    ///
    /// # Arguments
    /// * `destination` - Shipment destination
    /// * `volume_mt` - Volume in metric tons (must be positive)
    /// * `buy_price_per_mt` - Purchase price per metric ton (USD)
    ///
    /// # Panics
    /// Panics if `volume_mt <= 0`
    pub fn new(destination: Destination, volume_mt: f64, buy_price_per_mt: f64) -> Self {
        assert!(volume_mt > 0.0, "volume_mt must be positive");

        Self {
            destination,
            incoterm: Incoterm::default(),
            volume_mt,
            buy_price_per_mt,
            sell_price_per_mt: None,
            shrinkage_pct: 0.0,
            storage_months: 0.0,
            dpo_buy_days: 0.0,
            dso_sell_days: 0.0,
            annual_finance_rate_pct: 0.0,
            partner_profit_pct: 0.0,
            mt_per_container: default_mt_per_container(),
            mt_per_truck: default_mt_per_truck(),
        }
    }

    /// Set the incoterm (builder style)
    pub fn with_incoterm(mut self, incoterm: Incoterm) -> Self {
        self.incoterm = incoterm;
        self
    }

    /// Override the sell price (builder style)
    pub fn with_sell_price(mut self, sell_price_per_mt: f64) -> Self {
        self.sell_price_per_mt = Some(sell_price_per_mt);
        self
    }

    /// Set the shrinkage percentage (builder style)
    pub fn with_shrinkage_pct(mut self, shrinkage_pct: f64) -> Self {
        self.shrinkage_pct = shrinkage_pct;
        self
    }

    /// Set storage duration in months (builder style)
    pub fn with_storage_months(mut self, storage_months: f64) -> Self {
        self.storage_months = storage_months;
        self
    }

    /// Set financing terms (builder style)
    ///
    /// # Arguments
    /// * `dpo_buy_days` - Days until suppliers are paid
    /// * `dso_sell_days` - Days until customers pay
    /// * `annual_finance_rate_pct` - Annual financing rate (percent)
    pub fn with_financing(
        mut self,
        dpo_buy_days: f64,
        dso_sell_days: f64,
        annual_finance_rate_pct: f64,
    ) -> Self {
        self.dpo_buy_days = dpo_buy_days;
        self.dso_sell_days = dso_sell_days;
        self.annual_finance_rate_pct = annual_finance_rate_pct;
        self
    }

    /// Set the partner profit share percentage (builder style)
    pub fn with_partner_profit_pct(mut self, partner_profit_pct: f64) -> Self {
        self.partner_profit_pct = partner_profit_pct;
        self
    }

    /// Set conversion factors for container/truck quantities (builder style)
    pub fn with_conversions(mut self, mt_per_container: f64, mt_per_truck: f64) -> Self {
        self.mt_per_container = mt_per_container;
        self.mt_per_truck = mt_per_truck;
        self
    }

    /// Effective sell price per MT: the override if present, else the
    /// destination default
    pub fn sell_unit_price(&self) -> f64 {
        self.sell_price_per_mt
            .unwrap_or_else(|| self.destination.default_sell_price_per_mt())
    }

    /// Buy-side value of the shipment (cost basis): `buy_price_per_mt * volume_mt`
    pub fn buy_value_usd(&self) -> f64 {
        self.buy_price_per_mt * self.volume_mt
    }

    /// Sell-side value of the shipment (revenue basis): effective sell price × volume
    pub fn sell_value_usd(&self) -> f64 {
        self.sell_unit_price() * self.volume_mt
    }
}
