//! Alinea Reg - frequency/phase registration of edited-MRS sub-experiments
//!
//! Edited spectroscopy acquires 2 or 4 interleaved sub-experiments that
//! are later added and subtracted; frequency drift and phase instability
//! between them leave subtraction artefacts in the derived signal. This
//! crate registers the sub-experiments against each other before the
//! merge:
//!
//! - [`bands`] - named anchor bands (residual water, choline, NAA, ...)
//! - [`scheme`] - editing schemes and their per-variant registration plans
//! - [`peak`] - peak-guided fitting band and initial-estimate generation
//! - [`objective`] - banded least-squares residual between two spectra
//! - [`lm`] - two-parameter Levenberg-Marquardt solver
//! - [`aligner`] - one pairwise solve-and-correct call
//! - [`orchestrator`] - the scheme-ordered cascade with provenance
//!
//! # Example
//!
//! ```rust,ignore
//! use alinea_reg::orchestrator::{AlignmentRequest, align_sub_experiments};
//! use alinea_reg::scheme::{EditingScheme, TargetPair};
//!
//! let request = AlignmentRequest {
//!     fids,                       // 4 reduced sub-experiments from ingestion
//!     scheme: EditingScheme::FourWay { targets: TargetPair::GabaGsh },
//!     unstable_reference: false,
//! };
//!
//! let aligned = align_sub_experiments(&request)?;
//! // hand aligned.fids and aligned.provenance to the merge stage
//! ```
//!
//! # Cascade ordering
//!
//! The four-way plan is a strict dependency chain: B→A on residual
//! water, C→A on a metabolite anchor, then D→**corrected** C on a third
//! anchor located on the corrected buffer. Registering D against
//! corrected C rather than raw C is an empirically tuned choice that
//! the orchestrator preserves exactly.

pub mod aligner;
pub mod bands;
pub mod error;
pub mod lm;
pub mod objective;
pub mod orchestrator;
pub mod peak;
pub mod scheme;

// Re-export main types
pub use aligner::align;
pub use bands::{AnchorBand, anchors};
pub use error::RegError;
pub use lm::{LmOptions, LmOutcome};
pub use objective::{BandedResidual, residual, shared_normalizer};
pub use orchestrator::{AlignedSet, AlignmentRequest, Provenance, align_sub_experiments};
pub use peak::{PeakEstimate, locate};
pub use scheme::{EditTarget, EditingScheme, RegistrationStep, StepReference, TargetPair};
