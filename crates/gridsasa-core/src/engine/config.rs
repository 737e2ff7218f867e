use crate::core::models::grid::GridGeometry;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SasaConfig {
    /// Number of unit-sphere samples per atom; controls Monte-Carlo resolution.
    pub n_sphere_points: usize,
    /// Fixed observation window that accessible points are rasterized into.
    pub grid: GridGeometry,
    /// Worker count for the frame scheduler. `None` lets rayon decide.
    pub num_workers: Option<usize>,
}

#[derive(Default)]
pub struct SasaConfigBuilder {
    n_sphere_points: Option<usize>,
    grid_counts: Option<[usize; 3]>,
    grid_spacing: Option<f64>,
    num_workers: Option<usize>,
}

impl SasaConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn n_sphere_points(mut self, n: usize) -> Self {
        self.n_sphere_points = Some(n);
        self
    }
    pub fn grid_counts(mut self, counts: [usize; 3]) -> Self {
        self.grid_counts = Some(counts);
        self
    }
    pub fn grid_spacing(mut self, spacing: f64) -> Self {
        self.grid_spacing = Some(spacing);
        self
    }
    pub fn grid(mut self, geometry: GridGeometry) -> Self {
        self.grid_counts = Some(geometry.counts);
        self.grid_spacing = Some(geometry.spacing);
        self
    }
    pub fn num_workers(mut self, workers: usize) -> Self {
        self.num_workers = Some(workers);
        self
    }

    pub fn build(self) -> Result<SasaConfig, ConfigError> {
        let n_sphere_points = self
            .n_sphere_points
            .ok_or(ConfigError::MissingParameter("n_sphere_points"))?;
        if n_sphere_points == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "n_sphere_points",
                reason: "must be at least 1".to_string(),
            });
        }

        let counts = self
            .grid_counts
            .ok_or(ConfigError::MissingParameter("grid_counts"))?;
        if counts.contains(&0) {
            return Err(ConfigError::InvalidParameter {
                name: "grid_counts",
                reason: format!("every axis needs at least one voxel, got {counts:?}"),
            });
        }
        if counts[0]
            .checked_mul(counts[1])
            .and_then(|v| v.checked_mul(counts[2]))
            .is_none()
        {
            return Err(ConfigError::InvalidParameter {
                name: "grid_counts",
                reason: format!("voxel count of {counts:?} does not fit in memory"),
            });
        }

        let spacing = self
            .grid_spacing
            .ok_or(ConfigError::MissingParameter("grid_spacing"))?;
        if !(spacing.is_finite() && spacing > 0.0) {
            return Err(ConfigError::InvalidParameter {
                name: "grid_spacing",
                reason: format!("must be a positive finite number, got {spacing}"),
            });
        }

        if self.num_workers == Some(0) {
            return Err(ConfigError::InvalidParameter {
                name: "num_workers",
                reason: "must be at least 1 when given".to_string(),
            });
        }

        Ok(SasaConfig {
            n_sphere_points,
            grid: GridGeometry::new(counts, spacing),
            num_workers: self.num_workers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> SasaConfigBuilder {
        SasaConfigBuilder::new()
            .n_sphere_points(960)
            .grid_counts([20, 30, 40])
            .grid_spacing(0.5)
    }

    #[test]
    fn build_succeeds_with_all_required_parameters() {
        let config = complete().num_workers(4).build().unwrap();
        assert_eq!(config.n_sphere_points, 960);
        assert_eq!(config.grid, GridGeometry::new([20, 30, 40], 0.5));
        assert_eq!(config.num_workers, Some(4));
    }

    #[test]
    fn num_workers_is_optional() {
        assert_eq!(complete().build().unwrap().num_workers, None);
    }

    #[test]
    fn missing_parameters_are_reported_by_name() {
        let err = SasaConfigBuilder::new()
            .grid_counts([1, 1, 1])
            .grid_spacing(1.0)
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::MissingParameter("n_sphere_points"));

        let err = SasaConfigBuilder::new()
            .n_sphere_points(10)
            .grid_spacing(1.0)
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::MissingParameter("grid_counts"));

        let err = SasaConfigBuilder::new()
            .n_sphere_points(10)
            .grid_counts([1, 1, 1])
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::MissingParameter("grid_spacing"));
    }

    #[test]
    fn overflowing_voxel_count_is_rejected() {
        let err = complete()
            .grid_counts([1 << 32, 1 << 32, 2])
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidParameter {
                name: "grid_counts",
                ..
            }
        ));
    }

    #[test]
    fn non_positive_values_are_rejected() {
        assert!(matches!(
            complete().n_sphere_points(0).build(),
            Err(ConfigError::InvalidParameter {
                name: "n_sphere_points",
                ..
            })
        ));
        assert!(matches!(
            complete().grid_counts([1, 0, 1]).build(),
            Err(ConfigError::InvalidParameter {
                name: "grid_counts",
                ..
            })
        ));
        assert!(matches!(
            complete().grid_spacing(-1.0).build(),
            Err(ConfigError::InvalidParameter {
                name: "grid_spacing",
                ..
            })
        ));
        assert!(matches!(
            complete().grid_spacing(f64::NAN).build(),
            Err(ConfigError::InvalidParameter {
                name: "grid_spacing",
                ..
            })
        ));
        assert!(matches!(
            complete().num_workers(0).build(),
            Err(ConfigError::InvalidParameter {
                name: "num_workers",
                ..
            })
        ));
    }
}
