use super::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(
        "Atoms {atom_a} and {atom_b} in frame {frame} are virtually on top of one another \
         ({distance:.3e} apart); occlusion geometry is undefined for coincident atoms"
    )]
    DegenerateGeometry {
        frame: usize,
        atom_a: usize,
        atom_b: usize,
        distance: f64,
    },

    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Input mismatch: {0}")]
    InputMismatch(String),

    #[error("Internal logic error: {0}")]
    Internal(String),
}
