//! Named anchor bands for registration.
//!
//! Each anchor is a resonance used to score misalignment between two
//! sub-experiments. Centers are standard in-vivo ¹H chemical shifts;
//! half-widths are wide enough to keep a drifted peak inside the
//! candidate window while excluding neighbouring resonances.

/// An anchor-band specification: a resonance and a search half-width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorBand {
    /// Human-readable name for the band
    pub name: &'static str,
    /// Band center in ppm
    pub center_ppm: f64,
    /// Search half-width in ppm
    pub half_width_ppm: f64,
}

impl AnchorBand {
    /// Create a new anchor band.
    pub const fn new(name: &'static str, center_ppm: f64, half_width_ppm: f64) -> Self {
        Self {
            name,
            center_ppm,
            half_width_ppm,
        }
    }
}

/// Standard registration anchors.
pub mod anchors {
    use super::AnchorBand;

    /// Residual water (4.68 ppm) - strongest peak in most acquisitions
    pub const RESIDUAL_WATER: AnchorBand = AnchorBand::new("residual water", 4.68, 0.22);

    /// Choline (3.20 ppm) - narrower, stable substitute when the
    /// residual-water peak is flagged unreliable
    pub const CHOLINE: AnchorBand = AnchorBand::new("choline", 3.20, 0.10);

    /// NAA methyl singlet (2.008 ppm)
    pub const NAA: AnchorBand = AnchorBand::new("NAA", 2.008, 0.20);

    /// Creatine methyl singlet (3.02 ppm)
    pub const CREATINE: AnchorBand = AnchorBand::new("creatine", 3.02, 0.10);

    /// NAA aspartyl multiplet (2.60 ppm)
    pub const ASPARTYL: AnchorBand = AnchorBand::new("aspartyl", 2.60, 0.15);
}
