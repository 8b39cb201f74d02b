//! Error types for the core data model.

use thiserror::Error;

/// Errors that can occur when constructing a FID.
#[derive(Debug, Error)]
pub enum FidError {
    /// The time-domain samples, time axis, and ppm axis disagree in length.
    #[error("axis length mismatch: {samples} samples, {times} time points, {ppm} ppm points")]
    AxisLengthMismatch {
        /// Number of complex time-domain samples.
        samples: usize,
        /// Number of time-axis points.
        times: usize,
        /// Number of ppm-axis points.
        ppm: usize,
    },

    /// The acquisition contains no samples.
    #[error("empty acquisition")]
    Empty,
}
