//! Error types for the registration engine.
//!
//! Configuration and precondition failures abort the whole orchestration
//! before any optimization runs; no partial results are returned. Solver
//! quality is deliberately unchecked (a poor local minimum is accepted
//! as-is).

use thiserror::Error;

/// Errors raised by registration orchestration.
#[derive(Debug, Error)]
pub enum RegError {
    /// The editing-target labels do not name a supported pair.
    #[error("unknown editing-target pair: '{first}'/'{second}'")]
    UnknownTargetPair {
        /// First target label as supplied.
        first: String,
        /// Second target label as supplied.
        second: String,
    },

    /// The number of sub-experiments does not match the editing scheme.
    #[error("editing scheme expects {expected} sub-experiments, got {got}")]
    SubExperimentCount {
        /// Count required by the scheme.
        expected: usize,
        /// Count actually supplied.
        got: usize,
    },

    /// A sub-experiment has not been reduced to one channel and average.
    #[error(
        "sub-experiment {index} is not reduced: {coils} coils, {averages} averages (expected 1/1)"
    )]
    UnreducedInput {
        /// Zero-based sub-experiment index.
        index: usize,
        /// Receive-channel count reported by ingestion.
        coils: usize,
        /// Transient count reported by ingestion.
        averages: usize,
    },

    /// Sub-experiments disagree in length.
    #[error("sub-experiment {index} has {got} points, expected {expected}")]
    LengthMismatch {
        /// Zero-based sub-experiment index.
        index: usize,
        /// Length of sub-experiment 0.
        expected: usize,
        /// Length of the offending sub-experiment.
        got: usize,
    },

    /// An anchor band selects no points on the ppm axis.
    #[error("band {center_ppm}±{half_width_ppm} ppm selects no spectral points")]
    EmptyBand {
        /// Band center in ppm.
        center_ppm: f64,
        /// Band half-width in ppm.
        half_width_ppm: f64,
    },
}
