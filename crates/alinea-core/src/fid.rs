//! Free induction decays and phase/frequency corrections.
//!
//! A [`Fid`] is one sub-experiment's complex time-domain acquisition
//! together with its time axis, ppm axis, and spectrometer reference
//! frequency. FIDs are immutable; corrections produce new FIDs via
//! [`Fid::shifted`]. The spectrum is derived on demand and never stored.

use crate::error::FidError;
use crate::fft::centered_spectrum;
use rustfft::num_complex::Complex;
use std::f64::consts::PI;

/// A frequency/phase correction applied to a FID.
///
/// Applied by multiplying the time-domain samples by
/// `exp(i·π·(2·t·freq_hz + phase_deg/180))`, i.e. a `freq_hz` carrier
/// shift plus a zero-order phase rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseFreqShift {
    /// Frequency shift in Hz.
    pub freq_hz: f64,
    /// Zero-order phase shift in degrees.
    pub phase_deg: f64,
}

impl PhaseFreqShift {
    /// The identity correction.
    pub const ZERO: Self = Self {
        freq_hz: 0.0,
        phase_deg: 0.0,
    };

    /// Create a correction from a frequency shift and a phase shift.
    pub const fn new(freq_hz: f64, phase_deg: f64) -> Self {
        Self { freq_hz, phase_deg }
    }

    /// The correction that undoes this one.
    pub fn inverse(self) -> Self {
        Self {
            freq_hz: -self.freq_hz,
            phase_deg: -self.phase_deg,
        }
    }
}

/// One sub-experiment's time-domain acquisition.
#[derive(Debug, Clone, PartialEq)]
pub struct Fid {
    samples: Vec<Complex<f64>>,
    time_s: Vec<f64>,
    ppm: Vec<f64>,
    reference_hz: f64,
    coils: usize,
    averages: usize,
}

impl Fid {
    /// Create a FID already reduced to a single channel and average.
    ///
    /// The three sequences must have equal nonzero length.
    pub fn new(
        samples: Vec<Complex<f64>>,
        time_s: Vec<f64>,
        ppm: Vec<f64>,
        reference_hz: f64,
    ) -> Result<Self, FidError> {
        Self::with_dims(samples, time_s, ppm, reference_hz, 1, 1)
    }

    /// Create a FID carrying ingestion dimensions.
    ///
    /// `coils`/`averages` describe how many receive channels and
    /// transients the ingestion stage reported; alignment requires both
    /// to be 1 (see [`Fid::is_reduced`]), but the counts are carried so
    /// the caller can surface a precise precondition error.
    pub fn with_dims(
        samples: Vec<Complex<f64>>,
        time_s: Vec<f64>,
        ppm: Vec<f64>,
        reference_hz: f64,
        coils: usize,
        averages: usize,
    ) -> Result<Self, FidError> {
        if samples.is_empty() {
            return Err(FidError::Empty);
        }
        if samples.len() != time_s.len() || samples.len() != ppm.len() {
            return Err(FidError::AxisLengthMismatch {
                samples: samples.len(),
                times: time_s.len(),
                ppm: ppm.len(),
            });
        }

        Ok(Self {
            samples,
            time_s,
            ppm,
            reference_hz,
            coils,
            averages,
        })
    }

    /// Number of time-domain samples (equals the number of spectral points).
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false; the constructor rejects empty acquisitions.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Complex time-domain samples.
    pub fn samples(&self) -> &[Complex<f64>] {
        &self.samples
    }

    /// Sample times in seconds.
    pub fn time_s(&self) -> &[f64] {
        &self.time_s
    }

    /// Chemical-shift axis in ppm, one value per spectral point.
    pub fn ppm_axis(&self) -> &[f64] {
        &self.ppm
    }

    /// Spectrometer reference frequency in Hz (scales ppm to Hz).
    pub fn reference_hz(&self) -> f64 {
        self.reference_hz
    }

    /// Receive-channel count reported by ingestion.
    pub fn coils(&self) -> usize {
        self.coils
    }

    /// Transient count reported by ingestion.
    pub fn averages(&self) -> usize {
        self.averages
    }

    /// True when the FID is a single channel and a single average.
    pub fn is_reduced(&self) -> bool {
        self.coils == 1 && self.averages == 1
    }

    /// Convert a ppm difference on this FID's axis to Hz.
    pub fn ppm_to_hz(&self, delta_ppm: f64) -> f64 {
        delta_ppm * self.reference_hz * 1e-6
    }

    /// Centered complex spectrum (fftshifted DFT of the samples).
    pub fn spectrum(&self) -> Vec<Complex<f64>> {
        centered_spectrum(&self.samples)
    }

    /// Real part of the centered spectrum.
    pub fn real_spectrum(&self) -> Vec<f64> {
        self.spectrum().iter().map(|c| c.re).collect()
    }

    /// Apply a correction, producing a new FID.
    ///
    /// The original is left untouched; axes and metadata are shared
    /// unchanged by the copy.
    pub fn shifted(&self, shift: PhaseFreqShift) -> Self {
        let samples = self
            .samples
            .iter()
            .zip(self.time_s.iter())
            .map(|(&s, &t)| {
                let angle = PI * (2.0 * t * shift.freq_hz + shift.phase_deg / 180.0);
                s * Complex::from_polar(1.0, angle)
            })
            .collect();

        Self {
            samples,
            time_s: self.time_s.clone(),
            ppm: self.ppm.clone(),
            reference_hz: self.reference_hz,
            coils: self.coils,
            averages: self.averages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A decaying complex exponential offset `freq_hz` from the carrier.
    fn synthetic(n: usize, dwell_s: f64, freq_hz: f64, t2_s: f64) -> Fid {
        let reference_hz = 127.7e6;
        let time_s: Vec<f64> = (0..n).map(|i| i as f64 * dwell_s).collect();
        let samples: Vec<Complex<f64>> = time_s
            .iter()
            .map(|&t| Complex::from_polar((-t / t2_s).exp(), 2.0 * PI * freq_hz * t))
            .collect();
        let sweep_hz = 1.0 / dwell_s;
        let ppm: Vec<f64> = (0..n)
            .map(|i| {
                let offset_hz = (i as f64 - n as f64 / 2.0) * sweep_hz / n as f64;
                4.7 + offset_hz / (reference_hz * 1e-6)
            })
            .collect();
        Fid::new(samples, time_s, ppm, reference_hz).unwrap()
    }

    #[test]
    fn new_rejects_mismatched_axes() {
        let samples = vec![Complex::new(1.0, 0.0); 8];
        let time_s = vec![0.0; 8];
        let ppm = vec![0.0; 7];
        let err = Fid::new(samples, time_s, ppm, 127.7e6).unwrap_err();
        assert!(matches!(err, FidError::AxisLengthMismatch { ppm: 7, .. }));
    }

    #[test]
    fn new_rejects_empty() {
        let err = Fid::new(vec![], vec![], vec![], 127.7e6).unwrap_err();
        assert!(matches!(err, FidError::Empty));
    }

    #[test]
    fn zero_shift_is_identity() {
        let fid = synthetic(256, 5e-4, 40.0, 0.05);
        let shifted = fid.shifted(PhaseFreqShift::ZERO);

        for (a, b) in fid.samples().iter().zip(shifted.samples().iter()) {
            assert!((a - b).norm() < 1e-15, "Mismatch: {a} vs {b}");
        }
    }

    #[test]
    fn frequency_shift_moves_spectral_peak() {
        let n = 1024;
        let dwell = 5e-4; // 2 kHz sweep, ~1.95 Hz per point
        let fid = synthetic(n, dwell, 100.0, 0.05);

        let peak_of = |f: &Fid| {
            f.real_spectrum()
                .iter()
                .map(|v| v.abs())
                .enumerate()
                .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap())
                .map(|(i, _)| i)
                .unwrap()
        };

        let before = peak_of(&fid);
        // -100 Hz moves the resonance back onto the carrier.
        let after = peak_of(&fid.shifted(PhaseFreqShift::new(-100.0, 0.0)));

        assert!(before > n / 2, "peak should start above center, got {before}");
        assert!(
            (after as i64 - (n / 2) as i64).abs() <= 1,
            "peak should land at center, got {after}"
        );
    }

    #[test]
    fn phase_shift_rotates_first_sample() {
        let fid = synthetic(64, 5e-4, 0.0, 0.05);
        let rotated = fid.shifted(PhaseFreqShift::new(0.0, 90.0));

        // t = 0: only the phase term acts, rotating by 90 degrees.
        let s0 = rotated.samples()[0];
        assert!(s0.re.abs() < 1e-12, "got {s0}");
        assert!((s0.im - 1.0).abs() < 1e-12, "got {s0}");
    }

    #[test]
    fn shifted_preserves_axes_and_metadata() {
        let fid = synthetic(128, 5e-4, 10.0, 0.05);
        let shifted = fid.shifted(PhaseFreqShift::new(3.0, 10.0));

        assert_eq!(shifted.time_s(), fid.time_s());
        assert_eq!(shifted.ppm_axis(), fid.ppm_axis());
        assert_eq!(shifted.reference_hz(), fid.reference_hz());
        assert!(shifted.is_reduced());
    }

    #[test]
    fn ppm_to_hz_scales_by_reference() {
        let fid = synthetic(64, 5e-4, 0.0, 0.05);
        assert!((fid.ppm_to_hz(1.0) - 127.7).abs() < 1e-9);
    }

    #[test]
    fn unreduced_dims_are_reported() {
        let samples = vec![Complex::new(1.0, 0.0); 4];
        let fid = Fid::with_dims(samples, vec![0.0; 4], vec![0.0; 4], 127.7e6, 32, 1).unwrap();
        assert!(!fid.is_reduced());
        assert_eq!(fid.coils(), 32);
    }
}
