//! One pairwise registration: solve, then correct.
//!
//! Runs the Levenberg-Marquardt solver over the banded residual from a
//! peak-guided seed and applies the winning correction to the moving
//! buffer. The solver output is accepted unconditionally - there is no
//! residual-quality gate and no retry; a poor local minimum is a known,
//! accepted limitation of the method.

use crate::lm::{self, LmOptions};
use crate::objective;
use alinea_core::{Fid, PhaseFreqShift, PpmBand};
use nalgebra::Vector2;

/// Register `moving` against `reference` on `band`, seeded by `initial`.
///
/// Returns the fitted correction and the corrected moving buffer (a new
/// FID; the input is untouched).
pub fn align(
    reference: &Fid,
    moving: &Fid,
    band: &PpmBand,
    initial: PhaseFreqShift,
) -> (PhaseFreqShift, Fid) {
    // Reference spectrum and normalizer are fixed for the whole solve;
    // prepare them once so each evaluation costs one FFT.
    let residual = objective::BandedResidual::new(reference, moving, band);

    let outcome = lm::minimize(
        |x| residual.evaluate(PhaseFreqShift::new(x[0], x[1])),
        Vector2::new(initial.freq_hz, initial.phase_deg),
        &LmOptions::default(),
    );

    let fitted = PhaseFreqShift::new(outcome.params[0], outcome.params[1]);

    tracing::debug!(
        freq_hz = fitted.freq_hz,
        phase_deg = fitted.phase_deg,
        cost = outcome.cost,
        iterations = outcome.iterations,
        converged = outcome.converged,
        "registration solve finished"
    );

    (fitted, moving.shifted(fitted))
}
