use nalgebra::Point3;

/// Occlusion test over one atom's neighbor list with a rotating start position.
///
/// Sphere points are tested in generation order, and consecutive points lie close together
/// on the sphere, so the neighbor that covered the previous point is tried first. The scan
/// still visits every neighbor (circularly) before declaring a point accessible, so the
/// answer is the same as for a scan that always starts at neighbor 0.
///
/// Create one search per atom; the cursor is meaningless across different neighbor lists.
#[derive(Debug, Clone, Default)]
pub struct OcclusionSearch {
    cursor: usize,
    comparisons: u64,
}

impl OcclusionSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when `point` lies outside or on the surface of every neighbor sphere
    /// (`|point - r_j|^2 >= radius_j^2` for all `j` in `neighbors`).
    ///
    /// An empty neighbor list makes every point accessible.
    #[inline]
    pub fn is_accessible(
        &mut self,
        point: &Point3<f64>,
        neighbors: &[usize],
        positions: &[Point3<f64>],
        radii: &[f64],
    ) -> bool {
        let n = neighbors.len();
        for k in self.cursor..self.cursor + n {
            let slot = k % n;
            let j = neighbors[slot];
            let r = radii[j];
            self.comparisons += 1;
            if (point - positions[j]).norm_squared() < r * r {
                self.cursor = slot;
                return false;
            }
        }
        true
    }

    /// Slot in the neighbor list that most recently occluded a point.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of point-to-neighbor distance checks performed so far.
    #[inline]
    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sphere::SpherePointSet;
    use crate::engine::tasks::neighbors::find_neighbors;

    fn naive_is_accessible(
        point: &Point3<f64>,
        neighbors: &[usize],
        positions: &[Point3<f64>],
        radii: &[f64],
        comparisons: &mut u64,
    ) -> bool {
        for &j in neighbors {
            *comparisons += 1;
            if (point - positions[j]).norm_squared() < radii[j] * radii[j] {
                return false;
            }
        }
        true
    }

    /// A central atom surrounded by a shell of partially overlapping atoms.
    fn crowded_cluster(shell: usize, shell_distance: f64) -> (Vec<Point3<f64>>, Vec<f64>) {
        let mut positions = vec![Point3::origin()];
        positions.extend(
            SpherePointSet::golden_spiral(shell)
                .points()
                .iter()
                .map(|d| Point3::from(d * shell_distance)),
        );
        let radii = (0..positions.len())
            .map(|i| 1.6 + 0.1 * (i % 4) as f64)
            .collect();
        (positions, radii)
    }

    #[test]
    fn empty_neighbor_list_is_always_accessible() {
        let mut search = OcclusionSearch::new();
        let point = Point3::new(1.0, 2.0, 3.0);
        assert!(search.is_accessible(&point, &[], &[], &[]));
        assert_eq!(search.comparisons(), 0);
    }

    #[test]
    fn point_on_neighbor_surface_is_accessible() {
        let positions = vec![Point3::origin(), Point3::new(3.0, 0.0, 0.0)];
        let radii = vec![2.0, 1.0];
        let mut search = OcclusionSearch::new();

        assert!(search.is_accessible(&Point3::new(2.0, 0.0, 0.0), &[1], &positions, &radii));
        assert!(!search.is_accessible(&Point3::new(2.01, 0.0, 0.0), &[1], &positions, &radii));
    }

    #[test]
    fn cursor_moves_to_the_occluding_neighbor_and_wraps() {
        let positions = vec![
            Point3::new(-10.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(10.0, 0.0, 0.0),
        ];
        let radii = vec![1.0; 3];
        let neighbors = [0, 1, 2];
        let mut search = OcclusionSearch::new();

        assert!(!search.is_accessible(
            &Point3::new(10.2, 0.0, 0.0),
            &neighbors,
            &positions,
            &radii
        ));
        assert_eq!(search.cursor(), 2);
        assert_eq!(search.comparisons(), 3);

        // Starts at slot 2, wraps to slot 0.
        assert!(!search.is_accessible(
            &Point3::new(-9.8, 0.0, 0.0),
            &neighbors,
            &positions,
            &radii
        ));
        assert_eq!(search.cursor(), 0);
        assert_eq!(search.comparisons(), 5);

        assert!(search.is_accessible(&Point3::new(5.0, 0.0, 0.0), &neighbors, &positions, &radii));
        assert_eq!(search.cursor(), 0);
        assert_eq!(search.comparisons(), 8);
    }

    #[test]
    fn rotating_search_matches_naive_scan() {
        for (shell, distance) in [(6, 2.2), (12, 2.8), (40, 3.0), (80, 3.4)] {
            let (positions, radii) = crowded_cluster(shell, distance);
            let sphere = SpherePointSet::golden_spiral(500);
            let mut neighbors = Vec::new();

            for atom in 0..positions.len() {
                find_neighbors(0, &positions, &radii, atom, &mut neighbors).unwrap();
                let mut search = OcclusionSearch::new();
                let mut naive_comparisons = 0;

                for direction in sphere.points() {
                    let point = positions[atom] + direction * radii[atom];
                    let fast = search.is_accessible(&point, &neighbors, &positions, &radii);
                    let slow = naive_is_accessible(
                        &point,
                        &neighbors,
                        &positions,
                        &radii,
                        &mut naive_comparisons,
                    );
                    assert_eq!(fast, slow, "shell {shell}, atom {atom}, point {point:?}");
                }
            }
        }
    }

    #[test]
    fn rotating_search_needs_fewer_checks_on_a_buried_atom() {
        let (positions, radii) = crowded_cluster(60, 2.6);
        let sphere = SpherePointSet::golden_spiral(960);
        let mut neighbors = Vec::new();
        find_neighbors(0, &positions, &radii, 0, &mut neighbors).unwrap();
        assert_eq!(neighbors.len(), 60);

        let mut search = OcclusionSearch::new();
        let mut naive_comparisons = 0;
        for direction in sphere.points() {
            let point = positions[0] + direction * radii[0];
            search.is_accessible(&point, &neighbors, &positions, &radii);
            naive_is_accessible(
                &point,
                &neighbors,
                &positions,
                &radii,
                &mut naive_comparisons,
            );
        }

        assert!(
            search.comparisons() < naive_comparisons,
            "rotating: {}, naive: {}",
            search.comparisons(),
            naive_comparisons
        );
    }
}
