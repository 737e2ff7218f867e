use crate::error::{CliError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileGridConfig {
    pub counts: Option<[usize; 3]>,
    pub spacing: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileSelectionConfig {
    pub elements: Option<Vec<String>>,
    #[serde(rename = "exclude-hydrogens")]
    pub exclude_hydrogens: Option<bool>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(rename = "n-sphere-points")]
    pub n_sphere_points: Option<usize>,
    #[serde(rename = "probe-radius")]
    pub probe_radius: Option<f64>,
    pub grid: Option<FileGridConfig>,
    pub selection: Option<FileSelectionConfig>,
    /// Element symbol to van der Waals radius overrides.
    pub radii: Option<HashMap<String, f64>>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}
