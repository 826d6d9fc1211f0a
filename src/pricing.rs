//! Provider price suggestions and the cost estimate itself.

use serde::Serialize;

use crate::quantity::{cost::Cost, energy::KilowattHours, rate::KilowattHourRate};

/// Preset $/kWh per provider. Suggestions only: an explicit price always wins,
/// and the table changes only with a redeploy.
pub const PROVIDER_PRICES: [(&str, KilowattHourRate); 4] = [
    ("CDG", crate::quantity::Quantity(0.55)),
    ("SP", crate::quantity::Quantity(0.55)),
    ("Volt", crate::quantity::Quantity(0.55)),
    ("TE", crate::quantity::Quantity(0.58)),
];

#[must_use]
pub fn suggested_price(provider: &str) -> Option<KilowattHourRate> {
    PROVIDER_PRICES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(provider))
        .map(|(_, price)| *price)
}

#[derive(Debug, Serialize)]
pub struct CostEstimate {
    pub provider: Option<String>,
    pub price: KilowattHourRate,
    pub total: Cost,
}

/// Pure multiply. The caller validates the price before handing it over and
/// decides where it comes from.
#[must_use]
pub fn estimate_cost(
    energy: KilowattHours,
    price: KilowattHourRate,
    provider: Option<String>,
) -> CostEstimate {
    CostEstimate { provider, price, total: energy * price }
}
