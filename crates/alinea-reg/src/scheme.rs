//! Editing schemes and their registration plans.
//!
//! The scheme is a closed set of variants dispatched exactly once, at
//! orchestration start: each variant resolves to an ordered list of
//! [`RegistrationStep`]s carrying its own anchor selection. The FourWay
//! ordering B→A, C→A, D→corrected-C is empirically tuned to minimize
//! residual edited-signal artefacts and must not be reordered.

use crate::bands::{AnchorBand, anchors};
use crate::error::RegError;
use std::fmt;

/// Editing target of a two-way acquisition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    /// GABA editing - anchored on residual water (choline when the
    /// water peak is flagged unstable)
    Gaba,
    /// GSH editing - anchored on the NAA aspartyl multiplet
    Gsh,
}

impl fmt::Display for EditTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditTarget::Gaba => write!(f, "GABA"),
            EditTarget::Gsh => write!(f, "GSH"),
        }
    }
}

/// Ordered pair of editing targets of a four-way acquisition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetPair {
    /// GABA/GSH multiplexing (the scheme default)
    GabaGsh,
    /// NAA/NAAG multiplexing
    NaaNaag,
}

impl TargetPair {
    /// Resolve a pair of ingestion-supplied target labels.
    ///
    /// Matching is case-insensitive and order-insensitive. Anything
    /// outside the supported pairs is a hard configuration error.
    pub fn from_labels(first: &str, second: &str) -> Result<Self, RegError> {
        let a = first.to_ascii_lowercase();
        let b = second.to_ascii_lowercase();
        match (a.as_str(), b.as_str()) {
            ("gaba", "gsh") | ("gsh", "gaba") => Ok(TargetPair::GabaGsh),
            ("naa", "naag") | ("naag", "naa") => Ok(TargetPair::NaaNaag),
            _ => Err(RegError::UnknownTargetPair {
                first: first.to_string(),
                second: second.to_string(),
            }),
        }
    }
}

impl fmt::Display for TargetPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetPair::GabaGsh => write!(f, "GABA/GSH"),
            TargetPair::NaaNaag => write!(f, "NAA/NAAG"),
        }
    }
}

/// The acquisition multiplexing pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditingScheme {
    /// Two sub-experiments, one pairwise registration.
    TwoWay {
        /// Editing target selecting the anchor band.
        target: EditTarget,
    },
    /// Four sub-experiments, a three-step dependency chain.
    FourWay {
        /// Editing-target pair selecting the metabolite anchors.
        targets: TargetPair,
    },
}

/// Which buffer a step registers against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepReference {
    /// The raw sub-experiment at this index.
    Raw(usize),
    /// The already-corrected sub-experiment at this index.
    Corrected(usize),
}

/// One registration step of a scheme's plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegistrationStep {
    /// Reference buffer for this step.
    pub reference: StepReference,
    /// Index of the (raw) moving sub-experiment.
    pub moving: usize,
    /// Anchor band scoring this step's misalignment.
    pub anchor: AnchorBand,
}

impl EditingScheme {
    /// Number of sub-experiments the scheme multiplexes.
    pub fn sub_experiment_count(&self) -> usize {
        match self {
            EditingScheme::TwoWay { .. } => 2,
            EditingScheme::FourWay { .. } => 4,
        }
    }

    /// Short scheme label for provenance and logs.
    pub fn label(&self) -> String {
        match self {
            EditingScheme::TwoWay { target } => format!("two-way ({target})"),
            EditingScheme::FourWay { targets } => format!("four-way ({targets})"),
        }
    }

    /// Resolve the scheme to its ordered registration plan.
    ///
    /// `unstable_reference` substitutes the narrower choline band for
    /// residual water where water would be the first anchor; later
    /// FourWay anchors are never substituted.
    pub fn plan(&self, unstable_reference: bool) -> Vec<RegistrationStep> {
        let water = if unstable_reference {
            anchors::CHOLINE
        } else {
            anchors::RESIDUAL_WATER
        };

        match self {
            EditingScheme::TwoWay { target } => {
                let anchor = match target {
                    EditTarget::Gaba => water,
                    EditTarget::Gsh => anchors::ASPARTYL,
                };
                vec![RegistrationStep {
                    reference: StepReference::Raw(0),
                    moving: 1,
                    anchor,
                }]
            }
            EditingScheme::FourWay { targets } => {
                let (second, third) = match targets {
                    TargetPair::GabaGsh => (anchors::NAA, anchors::CREATINE),
                    TargetPair::NaaNaag => (anchors::CREATINE, anchors::CHOLINE),
                };
                vec![
                    RegistrationStep {
                        reference: StepReference::Raw(0),
                        moving: 1,
                        anchor: water,
                    },
                    RegistrationStep {
                        reference: StepReference::Raw(0),
                        moving: 2,
                        anchor: second,
                    },
                    RegistrationStep {
                        reference: StepReference::Corrected(2),
                        moving: 3,
                        anchor: third,
                    },
                ]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_labels_is_order_and_case_insensitive() {
        assert_eq!(
            TargetPair::from_labels("GSH", "gaba").unwrap(),
            TargetPair::GabaGsh
        );
        assert_eq!(
            TargetPair::from_labels("naag", "NAA").unwrap(),
            TargetPair::NaaNaag
        );
    }

    #[test]
    fn from_labels_rejects_unknown_pairs() {
        let err = TargetPair::from_labels("gaba", "lactate").unwrap_err();
        assert!(matches!(err, RegError::UnknownTargetPair { .. }));
    }

    #[test]
    fn two_way_plan_has_one_step() {
        let scheme = EditingScheme::TwoWay {
            target: EditTarget::Gaba,
        };
        let plan = scheme.plan(false);
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].reference, StepReference::Raw(0));
        assert_eq!(plan[0].moving, 1);
        assert_eq!(plan[0].anchor, anchors::RESIDUAL_WATER);
    }

    #[test]
    fn unstable_reference_substitutes_choline() {
        let scheme = EditingScheme::TwoWay {
            target: EditTarget::Gaba,
        };
        assert_eq!(scheme.plan(true)[0].anchor, anchors::CHOLINE);

        // GSH never anchors on water, so nothing to substitute.
        let gsh = EditingScheme::TwoWay {
            target: EditTarget::Gsh,
        };
        assert_eq!(gsh.plan(true)[0].anchor, anchors::ASPARTYL);
    }

    #[test]
    fn four_way_plan_preserves_dependency_order() {
        let scheme = EditingScheme::FourWay {
            targets: TargetPair::GabaGsh,
        };
        let plan = scheme.plan(false);

        assert_eq!(plan.len(), 3);
        assert_eq!(plan[0].reference, StepReference::Raw(0));
        assert_eq!(plan[0].moving, 1);
        assert_eq!(plan[1].reference, StepReference::Raw(0));
        assert_eq!(plan[1].moving, 2);
        // Step 3 registers D against corrected C, never raw C.
        assert_eq!(plan[2].reference, StepReference::Corrected(2));
        assert_eq!(plan[2].moving, 3);
    }

    #[test]
    fn four_way_substitution_only_touches_first_band() {
        let scheme = EditingScheme::FourWay {
            targets: TargetPair::GabaGsh,
        };
        let stable = scheme.plan(false);
        let unstable = scheme.plan(true);

        assert_eq!(unstable[0].anchor, anchors::CHOLINE);
        assert_eq!(unstable[1].anchor, stable[1].anchor);
        assert_eq!(unstable[2].anchor, stable[2].anchor);
    }

    #[test]
    fn naa_naag_uses_its_own_anchor_table() {
        let scheme = EditingScheme::FourWay {
            targets: TargetPair::NaaNaag,
        };
        let plan = scheme.plan(false);
        assert_eq!(plan[1].anchor, anchors::CREATINE);
        assert_eq!(plan[2].anchor, anchors::CHOLINE);
    }
}
