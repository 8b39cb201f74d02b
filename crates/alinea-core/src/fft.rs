//! Cached complex FFT with centered-spectrum helpers.
//!
//! Spectra are presented fftshifted, so index `n/2` carries the carrier
//! (0 Hz offset) and the offset frequency grows monotonically with the
//! index. This matches the monotonic ppm axis carried by
//! [`Fid`](crate::Fid).

use rustfft::{FftPlanner, num_complex::Complex};
use std::sync::Arc;

/// FFT processor with cached forward/inverse plans for one size.
pub struct Fft {
    fft: Arc<dyn rustfft::Fft<f64>>,
    ifft: Arc<dyn rustfft::Fft<f64>>,
    size: usize,
}

impl Fft {
    /// Create a new FFT processor for the given size.
    pub fn new(size: usize) -> Self {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(size);
        let ifft = planner.plan_fft_inverse(size);

        Self { fft, ifft, size }
    }

    /// Get FFT size.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Perform forward FFT on a complex buffer (in-place, DC first).
    pub fn forward(&self, buffer: &mut [Complex<f64>]) {
        self.fft.process(buffer);
    }

    /// Perform inverse FFT on a complex buffer (in-place, normalized).
    pub fn inverse(&self, buffer: &mut [Complex<f64>]) {
        self.ifft.process(buffer);

        let scale = 1.0 / self.size as f64;
        for c in buffer.iter_mut() {
            *c *= scale;
        }
    }
}

/// Swap the two halves of a spectrum so the carrier lands in the center.
///
/// Output index `i` holds input bin `(i + n/2) % n`: negative offset
/// frequencies first, then DC at `n/2`, then positive offsets.
pub fn fftshift<T: Copy>(buffer: &[T]) -> Vec<T> {
    let n = buffer.len();
    let half = n / 2;
    (0..n).map(|i| buffer[(i + half) % n]).collect()
}

/// Compute the centered spectrum of a complex time-domain signal.
///
/// Forward FFT followed by [`fftshift`]. No apodization or zero-filling
/// is applied; callers that need either do it on the time-domain side.
pub fn centered_spectrum(samples: &[Complex<f64>]) -> Vec<Complex<f64>> {
    let mut buffer = samples.to_vec();
    Fft::new(buffer.len()).forward(&mut buffer);
    fftshift(&buffer)
}
