use super::ModelError;
use nalgebra::Point3;

/// Axis-aligned voxel grid anchored at the origin with uniform spacing.
///
/// Voxel `(ix, iy, iz)` is centred on `(ix, iy, iz) * spacing`; linear indices are z-major
/// (`iz * ny * nx + iy * nx + ix`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    pub counts: [usize; 3],
    pub spacing: f64,
}

impl GridGeometry {
    pub const fn new(counts: [usize; 3], spacing: f64) -> Self {
        Self { counts, spacing }
    }

    #[inline]
    pub fn voxel_count(&self) -> usize {
        self.counts[0] * self.counts[1] * self.counts[2]
    }

    /// Like [`voxel_count`](Self::voxel_count), but `None` when the product overflows `usize`.
    pub fn checked_voxel_count(&self) -> Option<usize> {
        self.counts[0]
            .checked_mul(self.counts[1])
            .and_then(|v| v.checked_mul(self.counts[2]))
    }

    #[inline]
    pub fn linear_index(&self, ix: usize, iy: usize, iz: usize) -> usize {
        let [nx, ny, _] = self.counts;
        iz * ny * nx + iy * nx + ix
    }

    /// Inverse of [`linear_index`](Self::linear_index).
    pub fn voxel_coords(&self, index: usize) -> [usize; 3] {
        let [nx, ny, _] = self.counts;
        [index % nx, (index / nx) % ny, index / (nx * ny)]
    }

    pub fn voxel_center(&self, ix: usize, iy: usize, iz: usize) -> Point3<f64> {
        Point3::new(
            ix as f64 * self.spacing,
            iy as f64 * self.spacing,
            iz as f64 * self.spacing,
        )
    }

    /// Snaps each coordinate to the nearest multiple of the spacing and returns the linear
    /// index of that voxel, or `None` when any axis falls outside `[0, count)`.
    pub fn voxel_of(&self, point: &Point3<f64>) -> Option<usize> {
        let ix = snap_axis(point.x, self.spacing, self.counts[0])?;
        let iy = snap_axis(point.y, self.spacing, self.counts[1])?;
        let iz = snap_axis(point.z, self.spacing, self.counts[2])?;
        Some(self.linear_index(ix, iy, iz))
    }
}

#[inline]
fn snap_axis(coord: f64, spacing: f64, count: usize) -> Option<usize> {
    let index = (coord / spacing).round();
    // NaN fails both comparisons and is dropped with the out-of-window points.
    if index >= 0.0 && index < count as f64 {
        Some(index as usize)
    } else {
        None
    }
}

/// One accessible-area density grid per frame, stored back to back in a single buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct GridSeries {
    geometry: GridGeometry,
    frame_count: usize,
    data: Vec<f64>,
}

impl GridSeries {
    /// Allocates a zeroed buffer of `frame_count * geometry.voxel_count()` values.
    pub fn zeroed(geometry: GridGeometry, frame_count: usize) -> Self {
        Self {
            geometry,
            frame_count,
            data: vec![0.0; frame_count * geometry.voxel_count()],
        }
    }

    /// Wraps an existing frame-major buffer, e.g. one produced by [`GridSeries::into_raw`].
    pub fn from_raw(
        geometry: GridGeometry,
        frame_count: usize,
        data: Vec<f64>,
    ) -> Result<Self, ModelError> {
        let expected = frame_count * geometry.voxel_count();
        if data.len() != expected {
            return Err(ModelError::GridLengthMismatch {
                expected,
                found: data.len(),
            });
        }
        Ok(Self {
            geometry,
            frame_count,
            data,
        })
    }

    #[inline]
    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Start of frame `index` in the flat buffer.
    #[inline]
    pub fn frame_offset(&self, index: usize) -> usize {
        index * self.geometry.voxel_count()
    }

    pub fn frame(&self, index: usize) -> Option<&[f64]> {
        if index >= self.frame_count {
            return None;
        }
        let start = self.frame_offset(index);
        Some(&self.data[start..start + self.geometry.voxel_count()])
    }

    pub fn frame_total(&self, index: usize) -> Option<f64> {
        self.frame(index).map(|grid| grid.iter().sum())
    }

    pub fn iter_frames(&self) -> impl Iterator<Item = &[f64]> {
        // `max(1)` keeps `chunks_exact` valid for an empty grid; there is no data then anyway.
        self.data
            .chunks_exact(self.geometry.voxel_count().max(1))
            .take(self.frame_count)
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub fn into_raw(self) -> Vec<f64> {
        self.data
    }
}
