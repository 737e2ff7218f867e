use crate::radii::normalize_element;

/// Which atoms contribute surface area to the grid.
///
/// Every atom occludes regardless of the rule; the rule only decides whose
/// sphere points are sampled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionRule {
    /// Normalized element symbols to keep. `None` keeps every element.
    elements: Option<Vec<String>>,
    exclude_hydrogens: bool,
}

impl SelectionRule {
    pub fn new(elements: Option<Vec<String>>, exclude_hydrogens: bool) -> Self {
        Self {
            elements: elements.map(|list| list.iter().map(|e| normalize_element(e)).collect()),
            exclude_hydrogens,
        }
    }

    pub fn is_selected(&self, element: &str) -> bool {
        let element = normalize_element(element);
        if self.exclude_hydrogens && is_hydrogen(&element) {
            return false;
        }
        match &self.elements {
            Some(list) => list.contains(&element),
            None => true,
        }
    }

    pub fn mask(&self, elements: &[String]) -> Vec<bool> {
        elements.iter().map(|e| self.is_selected(e)).collect()
    }
}

fn is_hydrogen(element: &str) -> bool {
    matches!(element, "H" | "D")
}
