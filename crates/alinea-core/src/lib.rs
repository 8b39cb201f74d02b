//! Alinea Core - data model and spectral primitives for edited-MRS alignment
//!
//! This crate carries the value types shared by the alignment engine:
//!
//! - [`Fid`] - one sub-experiment's complex time-domain acquisition with
//!   its time axis, ppm axis, and spectrometer reference frequency
//! - [`PhaseFreqShift`] - a frequency/phase correction, applied by
//!   copy-with-replacement (never in place)
//! - [`PpmBand`] - a boolean mask restricting work to a spectral band
//! - [`fft`] - cached complex FFT and centered-spectrum helpers
//!
//! # Conventions
//!
//! Spectra are centered (fftshifted): the carrier sits at index `n/2`
//! and offset frequency grows with the index, matching a monotonically
//! increasing ppm axis. All arithmetic is `f64`; spectrometer reference
//! frequencies are in the 100 MHz range and Hz-level shifts must stay
//! resolvable against them.
//!
//! # Example
//!
//! ```
//! use alinea_core::{Fid, PhaseFreqShift};
//! use rustfft::num_complex::Complex;
//!
//! let n = 64;
//! let time_s: Vec<f64> = (0..n).map(|i| i as f64 * 5e-4).collect();
//! let ppm: Vec<f64> = (0..n).map(|i| i as f64 * 0.01).collect();
//! let samples = vec![Complex::new(1.0, 0.0); n];
//!
//! let fid = Fid::new(samples, time_s, ppm, 127.7e6).unwrap();
//! let corrected = fid.shifted(PhaseFreqShift::new(-3.0, 10.0));
//! assert_eq!(corrected.len(), fid.len());
//! ```

pub mod band;
pub mod error;
pub mod fft;
pub mod fid;

pub use band::PpmBand;
pub use error::FidError;
pub use fft::{Fft, centered_spectrum, fftshift};
pub use fid::{Fid, PhaseFreqShift};

/// Re-export of the complex number type used throughout.
pub use rustfft::num_complex::Complex;
