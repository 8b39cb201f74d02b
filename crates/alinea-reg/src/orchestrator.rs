//! The registration cascade.
//!
//! Validates the staged sub-experiments, resolves the editing scheme to
//! its plan once, then runs the steps strictly in order: each step's
//! solve must finish before a dependent step may read its corrected
//! output. Corrections are applied copy-with-replacement; raw inputs
//! are never mutated. Emits the corrected set and a provenance record
//! for the external merge collaborator.

use crate::aligner;
use crate::error::RegError;
use crate::peak;
use crate::scheme::{EditingScheme, StepReference};
use alinea_core::Fid;
use serde::{Deserialize, Serialize};

/// Metadata note describing which method and bands produced a set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provenance {
    /// Method name.
    pub method: String,
    /// Free-text description of the scheme and the bands used, in step
    /// order.
    pub details: String,
}

/// One alignment job as staged by the ingestion collaborator.
#[derive(Debug, Clone)]
pub struct AlignmentRequest {
    /// Sub-experiments in acquisition order (A, B, ... by index).
    pub fids: Vec<Fid>,
    /// Acquisition multiplexing pattern.
    pub scheme: EditingScheme,
    /// Ingestion flagged the residual-water peak as unreliable; the
    /// affected first band is substituted with the choline anchor.
    pub unstable_reference: bool,
}

/// Corrected sub-experiments plus provenance, for the merge collaborator.
#[derive(Debug, Clone)]
pub struct AlignedSet {
    /// One corrected FID per sub-experiment, in input order. The
    /// reference sub-experiment A passes through unchanged.
    pub fids: Vec<Fid>,
    /// Which method and bands were used.
    pub provenance: Provenance,
}

/// Sub-experiment letter for logs and provenance (A, B, C, D).
fn letter(index: usize) -> char {
    (b'A' + index as u8) as char
}

/// Align all sub-experiments of a request.
///
/// Fails fast on configuration or precondition problems; once the
/// cascade starts it always runs to completion (solver output is
/// accepted unconditionally).
pub fn align_sub_experiments(request: &AlignmentRequest) -> Result<AlignedSet, RegError> {
    let expected = request.scheme.sub_experiment_count();
    if request.fids.len() != expected {
        return Err(RegError::SubExperimentCount {
            expected,
            got: request.fids.len(),
        });
    }

    for (index, fid) in request.fids.iter().enumerate() {
        if !fid.is_reduced() {
            return Err(RegError::UnreducedInput {
                index,
                coils: fid.coils(),
                averages: fid.averages(),
            });
        }
    }

    let points = request.fids[0].len();
    for (index, fid) in request.fids.iter().enumerate().skip(1) {
        if fid.len() != points {
            return Err(RegError::LengthMismatch {
                index,
                expected: points,
                got: fid.len(),
            });
        }
    }

    let plan = request.scheme.plan(request.unstable_reference);
    let mut corrected = request.fids.clone();
    let mut step_notes = Vec::with_capacity(plan.len());

    for (step_index, step) in plan.iter().enumerate() {
        // Step 3 of the four-way cascade reads the corrected output of
        // step 2; raw otherwise.
        let (reference, ref_label) = match step.reference {
            StepReference::Raw(i) => (&request.fids[i], format!("{}", letter(i))),
            StepReference::Corrected(i) => (&corrected[i], format!("{}'", letter(i))),
        };
        let moving = &request.fids[step.moving];

        let estimate = peak::locate(reference, moving, step.anchor)?;
        let (fitted, fixed) = aligner::align(reference, moving, &estimate.band, estimate.initial);

        tracing::info!(
            step = step_index + 1,
            moving = %letter(step.moving),
            reference = %ref_label,
            anchor = step.anchor.name,
            freq_hz = fitted.freq_hz,
            phase_deg = fitted.phase_deg,
            "registered sub-experiment"
        );

        step_notes.push(format!(
            "{}\u{2192}{} on {} ({:.3}\u{b1}{:.3} ppm)",
            letter(step.moving),
            ref_label,
            step.anchor.name,
            step.anchor.center_ppm,
            step.anchor.half_width_ppm,
        ));
        corrected[step.moving] = fixed;
    }

    let provenance = Provenance {
        method: "peak-guided least-squares registration".to_string(),
        details: format!("{}: {}", request.scheme.label(), step_notes.join("; ")),
    };

    Ok(AlignedSet {
        fids: corrected,
        provenance,
    })
}
