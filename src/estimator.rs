//! The SOC-banded charge-time estimator.
//!
//! Splits a requested SOC interval into band-aligned segments, applies the
//! per-segment taper/loss factors, and aggregates energy and time.

pub mod band;
pub mod factor;

use serde::Serialize;

use crate::{
    error::EstimateError,
    estimator::band::{BANDS, Band},
    pricing::CostEstimate,
    quantity::{energy::KilowattHours, power::Kilowatts, time::Hours},
};

/// Wall-power ceiling of the modeled onboard AC charger class.
pub const AC_WALL_CEILING: Kilowatts = crate::quantity::Quantity(6.6);

#[derive(Copy, Clone, Debug, Eq, PartialEq, clap::ValueEnum)]
pub enum ChargerType {
    Ac,
    Dc,
}

/// A validated calculation input. The estimator trusts these fields, so the
/// only way to construct one is through [`ChargeRequest::try_new`].
#[derive(Copy, Clone, Debug)]
pub struct ChargeRequest {
    pub start_soc: f64,
    pub end_soc: f64,
    pub capacity: KilowattHours,
    pub charger: ChargerType,
    pub power: Kilowatts,
}

impl ChargeRequest {
    pub fn try_new(
        start_soc: f64,
        end_soc: f64,
        capacity: KilowattHours,
        charger: ChargerType,
        power: Kilowatts,
    ) -> Result<Self, EstimateError> {
        if !(start_soc.is_finite() && end_soc.is_finite() && capacity.is_finite() && power.is_finite())
        {
            return Err(EstimateError::InvalidInput(
                "SOC bounds, battery size and charger power must be finite numbers".to_string(),
            ));
        }
        if !(start_soc >= 0.0 && end_soc <= 100.0 && end_soc > start_soc) {
            return Err(EstimateError::InvalidInput(
                "start SOC must be >= 0, end SOC <= 100, and end > start".to_string(),
            ));
        }
        if capacity <= KilowattHours::ZERO {
            return Err(EstimateError::InvalidInput(
                "battery capacity must be positive".to_string(),
            ));
        }
        if power <= Kilowatts::ZERO {
            return Err(EstimateError::InvalidInput(
                "charging power must be positive".to_string(),
            ));
        }
        Ok(Self { start_soc, end_soc, capacity, charger, power })
    }
}

/// Per-band slice of the requested interval, with every intermediate retained
/// for per-segment reporting.
#[derive(Copy, Clone, Debug, Serialize)]
pub struct Segment {
    pub band_start: f64,
    pub band_end: f64,
    pub overlap_percent: f64,
    pub energy: KilowattHours,
    pub base_hours: Hours,
    pub applied_factor: f64,
    pub adjusted_hours: Hours,
    pub effective_power: Kilowatts,
}

#[derive(Copy, Clone, Debug, Serialize)]
pub struct Totals {
    pub energy: KilowattHours,
    pub hours: Hours,
}

impl Totals {
    #[must_use]
    pub fn from_segments(segments: &[Segment]) -> Self {
        Self {
            energy: segments.iter().map(|segment| segment.energy).sum(),
            hours: segments.iter().map(|segment| segment.adjusted_hours).sum(),
        }
    }
}

/// The full result envelope, ready for rendering or JSON output.
#[derive(Debug, Serialize)]
pub struct Estimate {
    pub segments: Vec<Segment>,
    pub totals: Totals,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<CostEstimate>,
}

pub struct Estimator {
    /// Two of three calibration revisions omit the AC wall-power ceiling, so
    /// it stays an explicit switch instead of a silently picked default.
    pub enforce_ac_ceiling: bool,
}

impl Default for Estimator {
    fn default() -> Self {
        Self { enforce_ac_ceiling: true }
    }
}

impl Estimator {
    /// Partition the requested SOC interval across the bands, in band order.
    ///
    /// An empty result means the interval overlaps no band. That is a
    /// user-facing condition for the caller to report, never a panic.
    #[must_use]
    pub fn compute_segments(&self, request: &ChargeRequest) -> Vec<Segment> {
        BANDS.iter().filter_map(|band| self.compute_segment(band, request)).collect()
    }

    fn compute_segment(&self, band: &Band, request: &ChargeRequest) -> Option<Segment> {
        let overlap_percent =
            (request.end_soc.min(band.end) - request.start_soc.max(band.start)).max(0.0);
        if overlap_percent <= 0.0 {
            return None;
        }

        let energy = request.capacity * (overlap_percent / 100.0);
        let effective_power = match request.charger {
            ChargerType::Ac if self.enforce_ac_ceiling => request.power.min(AC_WALL_CEILING),
            ChargerType::Ac | ChargerType::Dc => request.power,
        };
        let base_hours = energy / effective_power;

        // The DC regime switch looks at the requested power, not the effective one:
        let applied_factor = match request.charger {
            ChargerType::Ac => factor::ac_loss_factor(band.ac_loss_base, band.end, effective_power),
            ChargerType::Dc => factor::dc_taper_factor(band.dc_taper, band.end, request.power),
        };

        Some(Segment {
            band_start: band.start,
            band_end: band.end,
            overlap_percent,
            energy,
            base_hours,
            applied_factor,
            adjusted_hours: base_hours * applied_factor,
            effective_power,
        })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn request(
        start_soc: f64,
        end_soc: f64,
        capacity: f64,
        charger: ChargerType,
        power: f64,
    ) -> ChargeRequest {
        ChargeRequest::try_new(start_soc, end_soc, KilowattHours::from(capacity), charger, Kilowatts::from(power))
            .unwrap()
    }

    #[test]
    fn test_overlaps_cover_the_requested_interval() {
        let request = request(17.0, 93.0, 58.0, ChargerType::Ac, 7.2);
        let segments = Estimator::default().compute_segments(&request);

        let covered: f64 = segments.iter().map(|segment| segment.overlap_percent).sum();
        assert_abs_diff_eq!(covered, 93.0 - 17.0, epsilon = 1e-9);

        for window in segments.windows(2) {
            assert!(window[0].band_end <= window[1].band_start);
        }
        for segment in &segments {
            assert!(segment.overlap_percent > 0.0);
        }
    }

    #[test]
    fn test_total_energy_is_factor_independent() {
        for (charger, power) in
            [(ChargerType::Ac, 3.7), (ChargerType::Dc, 50.0), (ChargerType::Dc, 150.0)]
        {
            let request = request(5.0, 95.0, 77.0, charger, power);
            let totals = Totals::from_segments(&Estimator::default().compute_segments(&request));
            assert_abs_diff_eq!(totals.energy.0, 77.0 * 90.0 / 100.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_slow_dc_end_to_end() {
        let request = request(20.0, 50.0, 60.0, ChargerType::Dc, 100.0);
        let segments = Estimator::default().compute_segments(&request);
        assert_eq!(segments.len(), 2);

        assert_abs_diff_eq!(segments[0].band_start, 10.0);
        assert_abs_diff_eq!(segments[0].band_end, 40.0);
        assert_abs_diff_eq!(segments[0].energy.0, 12.0, epsilon = 1e-9);
        assert_abs_diff_eq!(segments[0].applied_factor, 1.20);
        assert_abs_diff_eq!(segments[0].base_hours.0, 0.12, epsilon = 1e-9);
        assert_abs_diff_eq!(segments[0].adjusted_hours.0, 0.144, epsilon = 1e-9);

        assert_abs_diff_eq!(segments[1].band_end, 60.0);
        assert_abs_diff_eq!(segments[1].energy.0, 6.0, epsilon = 1e-9);
        assert_abs_diff_eq!(segments[1].applied_factor, 1.20);

        let totals = Totals::from_segments(&segments);
        assert_abs_diff_eq!(totals.energy.0, 18.0, epsilon = 1e-9);
        assert_abs_diff_eq!(totals.hours.0, 0.144 + 0.072, epsilon = 1e-9);
    }

    #[test]
    fn test_hpc_dc_uses_per_band_taper_table() {
        let request = request(85.0, 95.0, 60.0, ChargerType::Dc, 150.0);
        let segments = Estimator::default().compute_segments(&request);
        assert_eq!(segments.len(), 2);
        assert_abs_diff_eq!(segments[0].applied_factor, 4.50);
        assert_abs_diff_eq!(segments[1].applied_factor, 9.00);
    }

    #[test]
    fn test_standard_dc_uses_tiered_factors() {
        let request = request(85.0, 95.0, 60.0, ChargerType::Dc, 50.0);
        let segments = Estimator::default().compute_segments(&request);
        assert_eq!(segments.len(), 2);
        assert_abs_diff_eq!(segments[0].applied_factor, 1.55);
        assert_abs_diff_eq!(segments[1].applied_factor, 2.35);
    }

    #[test]
    fn test_ac_ceiling_caps_effective_power() {
        let request = request(10.0, 20.0, 60.0, ChargerType::Ac, 11.0);

        let capped = Estimator::default().compute_segments(&request);
        assert_abs_diff_eq!(capped[0].effective_power.0, 6.6);
        assert_abs_diff_eq!(capped[0].base_hours.0, 6.0 / 6.6, epsilon = 1e-9);

        let raw = Estimator { enforce_ac_ceiling: false }.compute_segments(&request);
        assert_abs_diff_eq!(raw[0].effective_power.0, 11.0);
        assert_abs_diff_eq!(raw[0].base_hours.0, 6.0 / 11.0, epsilon = 1e-9);

        // The ceiling changes time, never energy:
        assert_abs_diff_eq!(capped[0].energy.0, raw[0].energy.0);
    }

    #[test]
    fn test_dc_power_is_never_capped() {
        let request = request(10.0, 20.0, 60.0, ChargerType::Dc, 100.0);
        let segments = Estimator::default().compute_segments(&request);
        assert_abs_diff_eq!(segments[0].effective_power.0, 100.0);
    }

    #[test]
    fn test_invalid_requests_never_reach_the_calculator() {
        for (start_soc, end_soc, capacity, power) in [
            (50.0, 50.0, 60.0, 7.0),   // end == start
            (60.0, 40.0, 60.0, 7.0),   // end < start
            (-5.0, 80.0, 60.0, 7.0),   // start below zero
            (20.0, 101.0, 60.0, 7.0),  // end above 100
            (20.0, 80.0, 0.0, 7.0),    // no capacity
            (20.0, 80.0, 60.0, -1.0),  // negative power
            (f64::NAN, 80.0, 60.0, 7.0),
        ] {
            let result = ChargeRequest::try_new(
                start_soc,
                end_soc,
                KilowattHours::from(capacity),
                ChargerType::Ac,
                Kilowatts::from(power),
            );
            assert!(matches!(result, Err(EstimateError::InvalidInput(_))));
        }
    }
}
