use super::ModelError;

/// Frame-invariant per-atom inputs.
///
/// Radii stored here are *effective* radii: van der Waals radius plus probe radius. The
/// engine never adds a probe radius on its own.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AtomTable {
    radii: Vec<f64>,
    selection: Vec<bool>,
}

impl AtomTable {
    pub fn new(radii: Vec<f64>, selection: Vec<bool>) -> Result<Self, ModelError> {
        if radii.len() != selection.len() {
            return Err(ModelError::SelectionLengthMismatch {
                radii: radii.len(),
                selection: selection.len(),
            });
        }
        Ok(Self { radii, selection })
    }

    pub fn with_all_selected(radii: Vec<f64>) -> Self {
        let selection = vec![true; radii.len()];
        Self { radii, selection }
    }

    /// Pre-sums the probe radius onto every van der Waals radius and selects all atoms.
    pub fn from_vdw_radii(vdw_radii: &[f64], probe_radius: f64) -> Self {
        Self::with_all_selected(vdw_radii.iter().map(|r| r + probe_radius).collect())
    }

    /// Replaces the selection mask in place.
    pub fn set_selection(&mut self, selection: Vec<bool>) -> Result<(), ModelError> {
        if selection.len() != self.radii.len() {
            return Err(ModelError::SelectionLengthMismatch {
                radii: self.radii.len(),
                selection: selection.len(),
            });
        }
        self.selection = selection;
        Ok(())
    }

    #[inline]
    pub fn radii(&self) -> &[f64] {
        &self.radii
    }

    #[inline]
    pub fn selection(&self) -> &[bool] {
        &self.selection
    }

    #[inline]
    pub fn radius(&self, atom: usize) -> f64 {
        self.radii[atom]
    }

    #[inline]
    pub fn is_selected(&self, atom: usize) -> bool {
        self.selection[atom]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.radii.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.radii.is_empty()
    }

    pub fn selected_count(&self) -> usize {
        self.selection.iter().filter(|&&s| s).count()
    }
}
