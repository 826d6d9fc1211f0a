use clap::{Parser, Subcommand};

use crate::{
    estimator::ChargerType,
    quantity::{energy::KilowattHours, power::Kilowatts, rate::KilowattHourRate},
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Estimate charge time, and optionally cost, for an SOC interval.
    Estimate(Box<EstimateArgs>),

    /// Print the built-in provider price suggestions.
    Providers,
}

#[derive(Parser)]
pub struct EstimateArgs {
    /// Starting state of charge, percent.
    #[clap(long = "start-soc", env = "START_SOC")]
    pub start_soc: f64,

    /// Target state of charge, percent.
    #[clap(long = "end-soc", env = "END_SOC")]
    pub end_soc: f64,

    /// Usable battery capacity in kilowatt-hours.
    #[clap(long = "battery-kwh", env = "BATTERY_KWH")]
    pub capacity: KilowattHours,

    /// Charger type.
    #[clap(long, env = "CHARGER_TYPE", ignore_case = true)]
    pub charger: ChargerType,

    /// Charging power in kilowatts.
    #[clap(long = "power-kw", env = "POWER_KW")]
    pub power: Kilowatts,

    /// Use the requested AC power as-is instead of capping it at the 6.6 kW
    /// wall limit of the modeled charger class.
    #[clap(long = "no-ac-ceiling", env = "NO_AC_CEILING")]
    pub no_ac_ceiling: bool,

    /// Print the estimate as JSON instead of a table.
    #[clap(long)]
    pub json: bool,

    #[clap(flatten)]
    pub cost: CostArgs,
}

#[derive(Parser)]
pub struct CostArgs {
    /// Provider identifier: uses its suggested price from the built-in table.
    #[clap(long, env = "PROVIDER")]
    pub provider: Option<String>,

    /// Price in $/kWh. Overrides the provider suggestion.
    #[clap(long = "price-per-kwh", env = "PRICE_PER_KWH")]
    pub price: Option<KilowattHourRate>,
}

impl CostArgs {
    /// A cost estimate is opt-in: it happens only when either flag is given.
    #[must_use]
    pub fn requested(&self) -> bool {
        self.provider.is_some() || self.price.is_some()
    }
}
