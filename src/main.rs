mod cli;
mod error;
mod estimator;
mod prelude;
mod pricing;
mod quantity;
mod render;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::{
    cli::{Args, Command, CostArgs, EstimateArgs},
    error::EstimateError,
    estimator::{ChargeRequest, Estimate, Estimator, Totals},
    prelude::*,
    pricing::{CostEstimate, estimate_cost, suggested_price},
    quantity::{energy::KilowattHours, rate::KilowattHourRate},
};

fn main() -> Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    match Args::parse().command {
        Command::Estimate(args) => run_estimate(&args),
        Command::Providers => {
            println!("{}", render::build_providers_table());
            Ok(())
        }
    }
}

fn run_estimate(args: &EstimateArgs) -> Result {
    let request =
        ChargeRequest::try_new(args.start_soc, args.end_soc, args.capacity, args.charger, args.power)?;
    let calculator = Estimator { enforce_ac_ceiling: !args.no_ac_ceiling };

    let segments = calculator.compute_segments(&request);
    if segments.is_empty() {
        return Err(
            EstimateError::NoOverlap { start: request.start_soc, end: request.end_soc }.into()
        );
    }
    let totals = Totals::from_segments(&segments);
    info!(
        n_segments = segments.len(),
        total_energy = %totals.energy,
        total_time = %totals.hours,
        "Aggregated"
    );

    let cost = resolve_cost(&args.cost, totals.energy)?;
    let estimate = Estimate { segments, totals, cost };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&estimate)?);
    } else {
        println!("{}", render::build_segments_table(&estimate.segments, &estimate.totals));
        if let Some(cost) = &estimate.cost {
            println!("{}", render::build_cost_table(cost, estimate.totals.energy));
        }
    }
    Ok(())
}

/// Pick the price for the optional cost block: an explicit `--price-per-kwh`
/// wins, otherwise the provider's suggested price fills in.
fn resolve_cost(args: &CostArgs, energy: KilowattHours) -> Result<Option<CostEstimate>, EstimateError> {
    let price = match (args.price, args.provider.as_deref()) {
        (Some(price), _) => price,
        (None, Some(provider)) => suggested_price(provider).ok_or_else(|| {
            EstimateError::InvalidCostInput(format!(
                "no suggested price for provider {provider:?}, pass --price-per-kwh"
            ))
        })?,
        (None, None) => return Ok(None),
    };
    if !price.is_finite() || price < KilowattHourRate::ZERO {
        return Err(EstimateError::InvalidCostInput(
            "price per kWh must be a non-negative number".to_string(),
        ));
    }
    Ok(Some(estimate_cost(energy, price, args.provider.clone())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cost_args(provider: Option<&str>, price: Option<f64>) -> CostArgs {
        CostArgs { provider: provider.map(str::to_string), price: price.map(KilowattHourRate::from) }
    }

    #[test]
    fn test_resolve_cost_skips_when_not_requested() {
        let cost = resolve_cost(&cost_args(None, None), KilowattHours::from(18.0)).unwrap();
        assert!(cost.is_none());
    }

    #[test]
    fn test_resolve_cost_prefers_explicit_price() {
        let cost = resolve_cost(&cost_args(Some("TE"), Some(0.40)), KilowattHours::from(10.0))
            .unwrap()
            .unwrap();
        assert!((cost.total.0 - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_resolve_cost_rejects_negative_price() {
        let result = resolve_cost(&cost_args(None, Some(-0.10)), KilowattHours::from(10.0));
        assert!(matches!(result, Err(EstimateError::InvalidCostInput(_))));
    }

    #[test]
    fn test_resolve_cost_rejects_unknown_provider_without_price() {
        let result = resolve_cost(&cost_args(Some("Nope"), None), KilowattHours::from(10.0));
        assert!(matches!(result, Err(EstimateError::InvalidCostInput(_))));
    }
}
