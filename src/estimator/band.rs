/// One SOC band of the calibrated taper model.
///
/// The factors are hand-tuned against observed charging curves, not derived
/// from battery physics. Do not "fix" them.
#[derive(Copy, Clone, Debug)]
pub struct Band {
    /// Lower SOC bound, percent.
    pub start: f64,
    /// Upper SOC bound, percent.
    pub end: f64,
    /// Charge-rate slowdown on high-power DC as SOC rises.
    pub dc_taper: f64,
    /// AC-to-DC conversion and onboard-charger inefficiency at full wall power.
    pub ac_loss_base: f64,
}

/// The calibrated bands, contiguous over 0–100% SOC.
pub const BANDS: [Band; 6] = [
    Band { start: 0.0, end: 10.0, dc_taper: 1.20, ac_loss_base: 1.08 },
    Band { start: 10.0, end: 40.0, dc_taper: 1.05, ac_loss_base: 1.08 },
    Band { start: 40.0, end: 60.0, dc_taper: 1.15, ac_loss_base: 1.08 },
    Band { start: 60.0, end: 80.0, dc_taper: 1.60, ac_loss_base: 1.80 },
    Band { start: 80.0, end: 90.0, dc_taper: 4.50, ac_loss_base: 1.28 },
    Band { start: 90.0, end: 100.0, dc_taper: 9.00, ac_loss_base: 1.60 },
];
