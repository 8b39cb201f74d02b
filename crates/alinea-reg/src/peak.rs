//! Peak-guided initial estimates.
//!
//! Before the least-squares solve, the dominant peak of each buffer is
//! located inside the anchor's candidate window. The fitting band is
//! then rebuilt as the union of two lobes centered on the located
//! peaks - the two acquisitions may already have drifted apart, and the
//! widened window keeps both peaks inside the scored region. The ppm
//! distance between the peaks seeds the frequency shift; the phase seed
//! is always zero.

use crate::bands::AnchorBand;
use crate::error::RegError;
use alinea_core::{Fid, PhaseFreqShift, PpmBand};

/// A peak-guided starting point for one registration step.
#[derive(Debug, Clone, PartialEq)]
pub struct PeakEstimate {
    /// Two-lobed fitting band covering both located peaks.
    pub band: PpmBand,
    /// Initial correction: peak ppm distance converted to Hz, zero phase.
    pub initial: PhaseFreqShift,
}

/// Ppm value of the maximal `|Re(spectrum)|` point inside `band`.
fn peak_ppm(fid: &Fid, band: &PpmBand) -> f64 {
    let spectrum = fid.real_spectrum();
    let (index, _) = band
        .indices()
        .map(|i| (i, spectrum[i].abs()))
        .max_by(|(_, a), (_, b)| {
            a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal)
        })
        .unwrap();
    fid.ppm_axis()[index]
}

/// Locate the dominant peaks of both buffers inside the anchor window
/// and derive the fitting band and initial frequency-shift estimate.
///
/// Errors with [`RegError::EmptyBand`] when the candidate window misses
/// the ppm axis entirely.
///
/// # Panics
///
/// Panics if the two buffers differ in length; the candidate band is
/// built over the reference's ppm axis and both spectra are indexed
/// through it.
pub fn locate(reference: &Fid, moving: &Fid, anchor: AnchorBand) -> Result<PeakEstimate, RegError> {
    assert_eq!(
        reference.len(),
        moving.len(),
        "reference and moving buffers must have equal length"
    );

    let candidate = PpmBand::around(reference.ppm_axis(), anchor.center_ppm, anchor.half_width_ppm);
    if candidate.is_empty() {
        return Err(RegError::EmptyBand {
            center_ppm: anchor.center_ppm,
            half_width_ppm: anchor.half_width_ppm,
        });
    }

    let ppm_ref = peak_ppm(reference, &candidate);
    let ppm_mov = peak_ppm(moving, &candidate);

    let lobe_ref = PpmBand::around(reference.ppm_axis(), ppm_ref, anchor.half_width_ppm);
    let lobe_mov = PpmBand::around(reference.ppm_axis(), ppm_mov, anchor.half_width_ppm);
    let band = lobe_ref.union(&lobe_mov);

    let initial = PhaseFreqShift::new(reference.ppm_to_hz(ppm_ref - ppm_mov), 0.0);

    Ok(PeakEstimate { band, initial })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bands::anchors;
    use alinea_core::Complex;
    use std::f64::consts::PI;

    const N: usize = 2048;
    const DWELL_S: f64 = 5e-4;
    const REFERENCE_HZ: f64 = 127.7e6;
    const CENTER_PPM: f64 = 4.7;

    fn ppm_axis() -> Vec<f64> {
        (0..N)
            .map(|i| {
                let offset_hz = (i as f64 - N as f64 / 2.0) / (N as f64 * DWELL_S);
                CENTER_PPM + offset_hz / (REFERENCE_HZ * 1e-6)
            })
            .collect()
    }

    /// FID with one resonance at `peak_ppm`, optionally offset by `extra_hz`.
    fn fid_with_peak(peak_ppm: f64, extra_hz: f64) -> Fid {
        let freq_hz = (peak_ppm - CENTER_PPM) * REFERENCE_HZ * 1e-6 + extra_hz;
        let time_s: Vec<f64> = (0..N).map(|i| i as f64 * DWELL_S).collect();
        let samples: Vec<Complex<f64>> = time_s
            .iter()
            .map(|&t| Complex::from_polar((-t / 0.05).exp(), 2.0 * PI * freq_hz * t))
            .collect();
        Fid::new(samples, time_s, ppm_axis(), REFERENCE_HZ).unwrap()
    }

    #[test]
    fn identical_signals_seed_zero_shift() {
        let a = fid_with_peak(4.68, 0.0);
        let b = fid_with_peak(4.68, 0.0);

        let estimate = locate(&a, &b, anchors::RESIDUAL_WATER).unwrap();
        assert!(estimate.initial.freq_hz.abs() < 1e-9);
        assert_eq!(estimate.initial.phase_deg, 0.0);
    }

    #[test]
    fn offset_peak_seeds_compensating_shift() {
        let a = fid_with_peak(4.68, 0.0);
        let b = fid_with_peak(4.68, 10.0); // moving drifted +10 Hz

        let estimate = locate(&a, &b, anchors::RESIDUAL_WATER).unwrap();
        // Seed must roughly cancel the drift; quantized to the spectral grid
        // (~0.98 Hz per point here).
        assert!(
            (estimate.initial.freq_hz + 10.0).abs() < 1.5,
            "seed {} should approximate -10 Hz",
            estimate.initial.freq_hz
        );
    }

    #[test]
    fn band_covers_both_peak_locations() {
        let a = fid_with_peak(4.66, 0.0);
        let b = fid_with_peak(4.74, 0.0);

        let estimate = locate(&a, &b, anchors::RESIDUAL_WATER).unwrap();
        let axis = ppm_axis();

        let index_of = |target: f64| {
            axis.iter()
                .enumerate()
                .min_by(|(_, x), (_, y)| {
                    (*x - target).abs().partial_cmp(&(*y - target).abs()).unwrap()
                })
                .map(|(i, _)| i)
                .unwrap()
        };

        assert!(estimate.band.contains_index(index_of(4.66)));
        assert!(estimate.band.contains_index(index_of(4.74)));
    }

    #[test]
    fn widened_band_is_at_least_the_candidate_window() {
        let a = fid_with_peak(4.60, 0.0);
        let b = fid_with_peak(4.76, 0.0);

        let estimate = locate(&a, &b, anchors::RESIDUAL_WATER).unwrap();
        let candidate = PpmBand::around(&ppm_axis(), 4.68, 0.22);
        assert!(estimate.band.selected_count() >= candidate.selected_count());
    }

    #[test]
    #[should_panic(expected = "equal length")]
    fn mismatched_buffer_lengths_are_rejected() {
        let a = fid_with_peak(4.68, 0.0);
        let b = fid_with_peak(4.68, 0.0);
        let short = Fid::new(
            b.samples()[..N / 2].to_vec(),
            b.time_s()[..N / 2].to_vec(),
            b.ppm_axis()[..N / 2].to_vec(),
            REFERENCE_HZ,
        )
        .unwrap();

        let _ = locate(&a, &short, anchors::RESIDUAL_WATER);
    }

    #[test]
    fn band_off_axis_is_an_error() {
        let a = fid_with_peak(4.68, 0.0);
        let b = fid_with_peak(4.68, 0.0);
        let off_axis = AnchorBand::new("off-axis", 100.0, 0.1);

        let err = locate(&a, &b, off_axis).unwrap_err();
        assert!(matches!(err, RegError::EmptyBand { .. }));
    }
}
