//! Taper and loss factor policies, split by charger type and power regime.

use crate::quantity::{Quantity, power::Kilowatts};

/// Supported AC wall-power envelope for the adaptive loss model.
const AC_SLOW: Kilowatts = Quantity(3.0);
const AC_FAST: Kilowatts = Quantity(7.4);

/// Requested DC power at or above this uses the fine per-band taper table.
pub const HPC_THRESHOLD: Kilowatts = Quantity(120.0);

/// Loss factors approached at the slow end of the AC envelope, keyed by band
/// upper edge. Slower AC charging suffers less relative taper loss on the same
/// band, so each high-SOC band blends between this target and its base factor.
const AC_LOW_POWER_TARGETS: [(f64, f64); 3] = [(80.0, 1.05), (90.0, 1.20), (100.0, 1.40)];

/// Effective AC loss factor for a band at the given charging power.
///
/// Low-SOC bands (upper edge below 60%) show no adaptive behavior. Above that,
/// linearly interpolate between the band's low-power target at 3.0 kW and its
/// base factor at 7.4 kW, clamping the power into that envelope.
pub fn ac_loss_factor(ac_base: f64, band_end: f64, power: Kilowatts) -> f64 {
    if band_end < 60.0 {
        return ac_base;
    }
    let low_target = AC_LOW_POWER_TARGETS
        .iter()
        .find(|(end, _)| (end - band_end).abs() < f64::EPSILON)
        .map_or(ac_base, |(_, target)| *target);
    let clamped = power.clamp(AC_SLOW, AC_FAST);
    let t = (clamped - AC_SLOW).0 / (AC_FAST - AC_SLOW).0;
    low_target * (1.0 - t) + ac_base * t
}

/// DC taper factor: a deliberate two-regime model.
///
/// At HPC power the fine per-band taper table applies. Standard DC tapers
/// gently in coarse tiers keyed by band upper edge, independent of the table.
pub fn dc_taper_factor(dc_taper: f64, band_end: f64, power: Kilowatts) -> f64 {
    if power >= HPC_THRESHOLD {
        dc_taper
    } else if band_end <= 80.0 {
        1.20
    } else if band_end <= 90.0 {
        1.55
    } else {
        2.35
    }
}
