//! The banded least-squares misalignment objective.
//!
//! The residual is the difference of the real spectra of the reference
//! and the trial-corrected moving buffer, restricted to the fitting
//! band. Both spectra are scaled by one shared normalizer (the maximal
//! absolute real spectral value across both buffers) so the cost is
//! invariant to absolute signal amplitude.
//!
//! The reference spectrum and the normalizer depend only on the
//! uncorrected buffers, so [`BandedResidual`] computes them once;
//! each solver evaluation then costs a single FFT of the shifted
//! moving buffer.

use alinea_core::{Fid, PhaseFreqShift, PpmBand};

/// Shared amplitude normalizer for a reference/moving pair.
///
/// Computed from the uncorrected spectra so it stays constant across
/// trial corrections. Near-zero signals fall back to 1.0 (normalization
/// undefined, spectra passed through as-is).
pub fn shared_normalizer(reference: &Fid, moving: &Fid) -> f64 {
    let max_abs = |spectrum: Vec<f64>| spectrum.iter().fold(0.0f64, |m, v| m.max(v.abs()));

    let peak = max_abs(reference.real_spectrum()).max(max_abs(moving.real_spectrum()));
    if peak < 1e-12 { 1.0 } else { peak }
}

/// A reference/moving pair prepared for repeated residual evaluation.
///
/// Caches the reference spectrum and the shared normalizer; the solver
/// calls [`BandedResidual::evaluate`] once per trial correction.
pub struct BandedResidual<'a> {
    reference_spectrum: Vec<f64>,
    scale: f64,
    moving: &'a Fid,
    band: &'a PpmBand,
}

impl<'a> BandedResidual<'a> {
    /// Prepare the pair for evaluation.
    ///
    /// # Panics
    ///
    /// Panics if the two buffers differ in length; the band mask spans
    /// one shared ppm axis and cannot index two different grids.
    pub fn new(reference: &Fid, moving: &'a Fid, band: &'a PpmBand) -> Self {
        assert_eq!(
            reference.len(),
            moving.len(),
            "reference and moving buffers must have equal length"
        );

        let scale = 1.0 / shared_normalizer(reference, moving);
        Self {
            reference_spectrum: reference.real_spectrum(),
            scale,
            moving,
            band,
        }
    }

    /// Residual vector for a trial correction.
    ///
    /// Applies `shift` to the moving buffer and returns
    /// `Re(S_ref) - Re(S_moving)` at band-selected points, scaled by
    /// the shared normalizer. A least-squares solver drives this
    /// toward zero.
    pub fn evaluate(&self, shift: PhaseFreqShift) -> Vec<f64> {
        let spec_mov = self.moving.shifted(shift).real_spectrum();

        self.band
            .indices()
            .map(|i| (self.reference_spectrum[i] - spec_mov[i]) * self.scale)
            .collect()
    }
}

/// One-shot residual for a trial correction.
///
/// Convenience wrapper over [`BandedResidual`] for single evaluations;
/// repeated callers (the solver) prepare the pair once instead.
///
/// # Panics
///
/// Panics if the two buffers differ in length.
pub fn residual(reference: &Fid, moving: &Fid, band: &PpmBand, shift: PhaseFreqShift) -> Vec<f64> {
    BandedResidual::new(reference, moving, band).evaluate(shift)
}
