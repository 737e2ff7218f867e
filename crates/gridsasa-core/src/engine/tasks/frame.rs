use super::neighbors::find_neighbors;
use super::occlusion::OcclusionSearch;
use super::rasterize::GridRasterizer;
use crate::core::models::atoms::AtomTable;
use crate::core::models::frame::Frame;
use crate::core::models::grid::GridGeometry;
use crate::core::sphere::SpherePointSet;
use crate::engine::error::EngineError;
use nalgebra::Point3;
use std::ops::AddAssign;
use tracing::trace;

/// Mutable working memory for [`FrameKernel::process`].
///
/// Owned by exactly one worker and reused for every frame that worker handles; the contents
/// are overwritten for each atom.
#[derive(Debug, Clone, Default)]
pub struct FrameScratch {
    neighbors: Vec<usize>,
    centered_points: Vec<Point3<f64>>,
}

impl FrameScratch {
    /// Pre-sizes the buffers so that processing never reallocates.
    pub fn new(n_atoms: usize, n_sphere_points: usize) -> Self {
        Self {
            neighbors: Vec::with_capacity(n_atoms),
            centered_points: Vec::with_capacity(n_sphere_points),
        }
    }
}

/// Sample-point bookkeeping for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub atoms_processed: usize,
    pub accessible_points: u64,
    pub buried_points: u64,
    /// Accessible points that snapped outside the grid window.
    pub dropped_points: u64,
}

impl AddAssign for FrameStats {
    fn add_assign(&mut self, rhs: Self) {
        self.atoms_processed += rhs.atoms_processed;
        self.accessible_points += rhs.accessible_points;
        self.buried_points += rhs.buried_points;
        self.dropped_points += rhs.dropped_points;
    }
}

/// Read-only inputs shared by every frame of a run.
#[derive(Debug, Clone, Copy)]
pub struct FrameKernel<'a> {
    atoms: &'a AtomTable,
    sphere: &'a SpherePointSet,
    geometry: &'a GridGeometry,
}

impl<'a> FrameKernel<'a> {
    pub fn new(
        atoms: &'a AtomTable,
        sphere: &'a SpherePointSet,
        geometry: &'a GridGeometry,
    ) -> Self {
        Self {
            atoms,
            sphere,
            geometry,
        }
    }

    /// Zeroes `grid` and rasterizes the accessible surface of every selected atom of `frame`.
    ///
    /// Unselected atoms are never scanned as the subject atom but still occlude others.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DegenerateGeometry`] if a selected atom has a coincident partner.
    pub fn process(
        &self,
        frame_index: usize,
        frame: &Frame,
        scratch: &mut FrameScratch,
        grid: &mut [f64],
    ) -> Result<FrameStats, EngineError> {
        grid.fill(0.0);

        let positions = frame.positions();
        let radii = self.atoms.radii();
        let rasterizer = GridRasterizer::new(self.geometry);
        let area_weight = self.sphere.area_weight();
        let mut stats = FrameStats::default();

        for atom in 0..positions.len() {
            if !self.atoms.is_selected(atom) {
                continue;
            }

            find_neighbors(frame_index, positions, radii, atom, &mut scratch.neighbors)?;

            let center = positions[atom];
            let radius = radii[atom];
            scratch.centered_points.clear();
            scratch.centered_points.extend(
                self.sphere
                    .points()
                    .iter()
                    .map(|direction| center + direction * radius),
            );

            let value = GridRasterizer::point_area(area_weight, radius);
            let mut search = OcclusionSearch::new();
            for point in &scratch.centered_points {
                if !search.is_accessible(point, &scratch.neighbors, positions, radii) {
                    stats.buried_points += 1;
                } else if rasterizer.deposit(grid, point, value) {
                    stats.accessible_points += 1;
                } else {
                    stats.dropped_points += 1;
                }
            }
            stats.atoms_processed += 1;
        }

        trace!(
            frame = frame_index,
            atoms = stats.atoms_processed,
            accessible = stats.accessible_points,
            buried = stats.buried_points,
            dropped = stats.dropped_points,
            "Frame rasterized."
        );

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const CENTER: f64 = 10.0;

    fn geometry() -> GridGeometry {
        GridGeometry::new([21, 21, 21], 1.0)
    }

    fn run(
        positions: Vec<Point3<f64>>,
        atoms: &AtomTable,
        n_points: usize,
    ) -> (Vec<f64>, FrameStats) {
        let sphere = SpherePointSet::golden_spiral(n_points);
        let geometry = geometry();
        let kernel = FrameKernel::new(atoms, &sphere, &geometry);
        let mut scratch = FrameScratch::new(atoms.len(), n_points);
        let mut grid = vec![0.0; geometry.voxel_count()];
        let stats = kernel
            .process(0, &Frame::new(positions), &mut scratch, &mut grid)
            .unwrap();
        (grid, stats)
    }

    fn pair_area(separation: f64, radius: f64) -> f64 {
        let atoms = AtomTable::with_all_selected(vec![radius, radius]);
        let positions = vec![
            Point3::new(CENTER - separation / 2.0, CENTER, CENTER),
            Point3::new(CENTER + separation / 2.0, CENTER, CENTER),
        ];
        let (grid, _) = run(positions, &atoms, 2000);
        grid.iter().sum::<f64>() / 2.0
    }

    #[test]
    fn isolated_atom_recovers_full_sphere_area() {
        let radius = 3.1;
        let atoms = AtomTable::with_all_selected(vec![radius]);
        let (grid, stats) = run(vec![Point3::new(CENTER, CENTER, CENTER)], &atoms, 960);

        let total: f64 = grid.iter().sum();
        let expected = 4.0 * PI * radius * radius;
        assert!(
            (total - expected).abs() < 1e-9 * expected,
            "{total} vs {expected}"
        );
        assert_eq!(stats.accessible_points, 960);
        assert_eq!(stats.buried_points, 0);
        assert_eq!(stats.dropped_points, 0);
    }

    #[test]
    fn contributions_land_in_voxels_on_the_sphere_shell() {
        let radius = 3.0;
        let atoms = AtomTable::with_all_selected(vec![radius]);
        let center = Point3::new(CENTER, CENTER, CENTER);
        let (grid, _) = run(vec![center], &atoms, 500);
        let geometry = geometry();

        for (index, &value) in grid.iter().enumerate() {
            if value > 0.0 {
                let [ix, iy, iz] = geometry.voxel_coords(index);
                let d = (geometry.voxel_center(ix, iy, iz) - center).norm();
                assert!(
                    (d - radius).abs() <= 0.5 * 3f64.sqrt() + 1e-9,
                    "voxel at {d}"
                );
            }
        }
    }

    #[test]
    fn overlapping_pair_loses_area_monotonically_as_it_approaches() {
        let radius = 2.0;
        let isolated = 4.0 * PI * radius * radius;

        let separations = [3.9, 3.5, 3.0, 2.5, 2.0, 1.5, 1.0, 0.5];
        let areas: Vec<f64> = separations.iter().map(|&s| pair_area(s, radius)).collect();

        assert!(areas[0] < isolated);
        for window in areas.windows(2) {
            assert!(window[1] < window[0], "areas not decreasing: {areas:?}");
        }
    }

    #[test]
    fn pair_area_matches_spherical_cap_geometry() {
        // Each sphere loses a cap of height r - d/2: area 2*pi*r*(r - d/2).
        let (radius, separation) = (2.0, 2.0);
        let expected = 4.0 * PI * radius * radius - 2.0 * PI * radius * (radius - separation / 2.0);
        let area = pair_area(separation, radius);
        assert!(
            (area - expected).abs() < 0.02 * expected,
            "{area} vs {expected}"
        );
    }

    #[test]
    fn unselected_atom_contributes_nothing_but_still_occludes() {
        let radius = 2.0;
        let positions = vec![
            Point3::new(CENTER - 1.0, CENTER, CENTER),
            Point3::new(CENTER + 1.0, CENTER, CENTER),
        ];

        let both = AtomTable::with_all_selected(vec![radius, radius]);
        let (grid_both, _) = run(positions.clone(), &both, 800);

        let first_only = AtomTable::new(vec![radius, radius], vec![true, false]).unwrap();
        let (grid_first, stats) = run(positions.clone(), &first_only, 800);

        let second_only = AtomTable::new(vec![radius, radius], vec![false, true]).unwrap();
        let (grid_second, _) = run(positions, &second_only, 800);

        assert_eq!(stats.atoms_processed, 1);
        let isolated = 4.0 * PI * radius * radius;
        assert!(grid_first.iter().sum::<f64>() < isolated);

        for i in 0..grid_both.len() {
            let combined = grid_first[i] + grid_second[i];
            assert!((grid_both[i] - combined).abs() < 1e-12, "voxel {i}");
        }
    }

    #[test]
    fn coincident_selected_atoms_fail_the_frame() {
        let sphere = SpherePointSet::golden_spiral(50);
        let geometry = geometry();
        let atoms = AtomTable::with_all_selected(vec![1.5, 1.5]);
        let kernel = FrameKernel::new(&atoms, &sphere, &geometry);
        let mut scratch = FrameScratch::new(2, 50);
        let mut grid = vec![0.0; geometry.voxel_count()];
        let frame = Frame::new(vec![Point3::new(5.0, 5.0, 5.0); 2]);

        let err = kernel.process(3, &frame, &mut scratch, &mut grid).unwrap_err();
        assert!(matches!(
            err,
            EngineError::DegenerateGeometry {
                frame: 3,
                atom_a: 0,
                atom_b: 1,
                ..
            }
        ));
    }

    #[test]
    fn points_outside_the_window_are_counted_and_dropped() {
        let radius = 2.0;
        let atoms = AtomTable::with_all_selected(vec![radius]);
        // Centred on the origin: roughly seven eighths of the shell lies at negative coordinates.
        let (grid, stats) = run(vec![Point3::origin()], &atoms, 1000);

        assert!(stats.dropped_points > 0);
        assert_eq!(stats.accessible_points + stats.dropped_points, 1000);
        let deposited: f64 = grid.iter().sum();
        let per_point = 4.0 * PI * radius * radius / 1000.0;
        assert!((deposited - per_point * stats.accessible_points as f64).abs() < 1e-9);
    }

    #[test]
    fn grid_is_zeroed_before_accumulation() {
        let sphere = SpherePointSet::golden_spiral(100);
        let geometry = geometry();
        let atoms = AtomTable::with_all_selected(vec![2.0]);
        let kernel = FrameKernel::new(&atoms, &sphere, &geometry);
        let mut scratch = FrameScratch::new(1, 100);
        let frame = Frame::new(vec![Point3::new(CENTER, CENTER, CENTER)]);

        let mut fresh = vec![0.0; geometry.voxel_count()];
        kernel.process(0, &frame, &mut scratch, &mut fresh).unwrap();

        let mut dirty = vec![123.0; geometry.voxel_count()];
        kernel.process(0, &frame, &mut scratch, &mut dirty).unwrap();

        assert_eq!(fresh, dirty);
    }
}
