use phf::{Map, phf_map};
use std::collections::{BTreeSet, HashMap};
use tracing::warn;

/// Radius assigned to elements missing from both the table and the overrides.
pub const FALLBACK_RADIUS: f64 = 1.8;

/// Bondi (1964) van der Waals radii in angstroms.
static BONDI_RADII: Map<&'static str, f64> = phf_map! {
    "H" => 1.20, "D" => 1.20, "He" => 1.40,
    "Li" => 1.82, "C" => 1.70, "N" => 1.55, "O" => 1.52, "F" => 1.47, "Ne" => 1.54,
    "Na" => 2.27, "Mg" => 1.73, "Si" => 2.10, "P" => 1.80, "S" => 1.80, "Cl" => 1.75, "Ar" => 1.88,
    "K" => 2.75, "Ni" => 1.63, "Cu" => 1.40, "Zn" => 1.39, "Ga" => 1.87, "As" => 1.85,
    "Se" => 1.90, "Br" => 1.85, "Kr" => 2.02,
    "Pd" => 1.63, "Ag" => 1.72, "Cd" => 1.58, "In" => 1.93, "Sn" => 2.17, "Te" => 2.06,
    "I" => 1.98, "Xe" => 2.16,
    "Pt" => 1.75, "Au" => 1.66, "Hg" => 1.55, "Tl" => 1.96, "Pb" => 2.02, "U" => 1.86,
};

/// Canonical capitalization of an element symbol: `"CL"` and `"cl"` become `"Cl"`.
pub fn normalize_element(symbol: &str) -> String {
    let mut chars = symbol.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Element to van der Waals radius lookup with per-run overrides.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RadiusTable {
    overrides: HashMap<String, f64>,
}

impl RadiusTable {
    pub fn new(overrides: HashMap<String, f64>) -> Self {
        Self {
            overrides: overrides
                .into_iter()
                .map(|(symbol, radius)| (normalize_element(&symbol), radius))
                .collect(),
        }
    }

    pub fn vdw_radius(&self, symbol: &str) -> Option<f64> {
        let symbol = normalize_element(symbol);
        self.overrides
            .get(&symbol)
            .copied()
            .or_else(|| BONDI_RADII.get(symbol.as_str()).copied())
    }

    /// Radii for a list of element symbols, in order. Unknown elements get
    /// [`FALLBACK_RADIUS`] and are reported once each.
    pub fn resolve(&self, elements: &[String]) -> Vec<f64> {
        let mut unknown = BTreeSet::new();
        let radii = elements
            .iter()
            .map(|symbol| {
                self.vdw_radius(symbol).unwrap_or_else(|| {
                    unknown.insert(normalize_element(symbol));
                    FALLBACK_RADIUS
                })
            })
            .collect();

        for symbol in unknown {
            warn!(
                element = %symbol,
                radius = FALLBACK_RADIUS,
                "No van der Waals radius known for element; using the fallback."
            );
        }
        radii
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_symbols_are_normalized() {
        assert_eq!(normalize_element("CL"), "Cl");
        assert_eq!(normalize_element(" zn "), "Zn");
        assert_eq!(normalize_element("c"), "C");
        assert_eq!(normalize_element(""), "");
    }

    #[test]
    fn bondi_values_are_used_by_default() {
        let table = RadiusTable::default();
        assert_eq!(table.vdw_radius("C"), Some(1.70));
        assert_eq!(table.vdw_radius("o"), Some(1.52));
        assert_eq!(table.vdw_radius("Xx"), None);
    }

    #[test]
    fn overrides_take_precedence_and_are_normalized() {
        let table = RadiusTable::new(HashMap::from([("c".to_string(), 1.9)]));
        assert_eq!(table.vdw_radius("C"), Some(1.9));
        assert_eq!(table.vdw_radius("N"), Some(1.55));
    }

    #[test]
    fn unknown_elements_fall_back() {
        let table = RadiusTable::default();
        let elements = vec!["C".to_string(), "Q".to_string(), "H".to_string()];
        assert_eq!(table.resolve(&elements), vec![1.70, FALLBACK_RADIUS, 1.20]);
    }
}
