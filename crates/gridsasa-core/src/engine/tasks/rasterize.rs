use crate::core::models::grid::GridGeometry;
use nalgebra::Point3;

/// Accumulates accessible-area contributions into one frame's grid.
#[derive(Debug, Clone, Copy)]
pub struct GridRasterizer<'a> {
    geometry: &'a GridGeometry,
}

impl<'a> GridRasterizer<'a> {
    pub fn new(geometry: &'a GridGeometry) -> Self {
        Self { geometry }
    }

    /// Area carried by a single accessible sample point on a sphere of `radius`:
    /// `(4 * pi / n_points) * radius^2`, where `area_weight` is `4 * pi / n_points`.
    #[inline]
    pub fn point_area(area_weight: f64, radius: f64) -> f64 {
        area_weight * radius * radius
    }

    /// Adds `value` to the voxel nearest `point`.
    ///
    /// Returns `false` (and leaves the grid untouched) when the snapped voxel is outside the
    /// configured window.
    #[inline]
    pub fn deposit(&self, grid: &mut [f64], point: &Point3<f64>, value: f64) -> bool {
        match self.geometry.voxel_of(point) {
            Some(index) => {
                grid[index] += value;
                true
            }
            None => false,
        }
    }
}
