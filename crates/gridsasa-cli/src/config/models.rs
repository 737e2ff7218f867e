use crate::radii::RadiusTable;
use crate::selection::SelectionRule;
use gridsasa::engine::config::SasaConfig;
use std::path::PathBuf;

pub struct AppConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// Added to every van der Waals radius before the engine sees it.
    pub probe_radius: f64,
    pub radii: RadiusTable,
    pub selection: SelectionRule,
    pub core_config: SasaConfig,
}
