//! Frequency-band masks over a ppm axis.
//!
//! A band restricts a least-squares residual to a diagnostic spectral
//! feature. Bands are built from a center and half-width and may be
//! unioned when a peak search yields two candidate centers.

/// A boolean mask over a ppm axis selecting the points inside a band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PpmBand {
    mask: Vec<bool>,
}

impl PpmBand {
    /// Build a band selecting axis points within `center ± half_width`.
    ///
    /// The axis does not need to be sorted; each point is tested
    /// independently.
    pub fn around(ppm_axis: &[f64], center: f64, half_width: f64) -> Self {
        let mask = ppm_axis
            .iter()
            .map(|&ppm| (ppm - center).abs() <= half_width)
            .collect();
        Self { mask }
    }

    /// Union of two bands over the same axis.
    ///
    /// # Panics
    ///
    /// Panics if the two masks cover axes of different lengths.
    pub fn union(&self, other: &Self) -> Self {
        assert_eq!(
            self.mask.len(),
            other.mask.len(),
            "cannot union bands over different axes"
        );
        let mask = self
            .mask
            .iter()
            .zip(other.mask.iter())
            .map(|(&a, &b)| a || b)
            .collect();
        Self { mask }
    }

    /// Number of axis points the mask covers (selected or not).
    pub fn len(&self) -> usize {
        self.mask.len()
    }

    /// True when the mask selects no points.
    pub fn is_empty(&self) -> bool {
        !self.mask.iter().any(|&m| m)
    }

    /// Number of selected points.
    pub fn selected_count(&self) -> usize {
        self.mask.iter().filter(|&&m| m).count()
    }

    /// Whether the point at `index` is inside the band.
    pub fn contains_index(&self, index: usize) -> bool {
        self.mask.get(index).copied().unwrap_or(false)
    }

    /// Iterator over the selected axis indices, in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.mask
            .iter()
            .enumerate()
            .filter_map(|(i, &m)| m.then_some(i))
    }
}
