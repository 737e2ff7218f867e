use crate::engine::error::EngineError;
use nalgebra::Point3;

/// Squared separation below which two atoms are treated as coincident.
pub const DEGENERATE_DISTANCE_SQUARED: f64 = 1e-10;

/// Collects every atom `j != atom` whose effective sphere overlaps the sphere of `atom`,
/// i.e. `|r_atom - r_j|^2 < (radius_atom + radius_j)^2`, in ascending index order.
///
/// `neighbors` is overwritten. The scan is exhaustive; no spatial index is kept between calls.
///
/// # Errors
///
/// Returns [`EngineError::DegenerateGeometry`] as soon as an atom closer than
/// `sqrt(DEGENERATE_DISTANCE_SQUARED)` to `atom` is met.
pub fn find_neighbors(
    frame_index: usize,
    positions: &[Point3<f64>],
    radii: &[f64],
    atom: usize,
    neighbors: &mut Vec<usize>,
) -> Result<(), EngineError> {
    neighbors.clear();

    let center = positions[atom];
    let radius = radii[atom];

    for (j, (pos_j, &radius_j)) in positions.iter().zip(radii).enumerate() {
        if j == atom {
            continue;
        }

        let r2 = (center - pos_j).norm_squared();
        if r2 < DEGENERATE_DISTANCE_SQUARED {
            return Err(EngineError::DegenerateGeometry {
                frame: frame_index,
                atom_a: atom,
                atom_b: j,
                distance: r2.sqrt(),
            });
        }

        let cutoff = radius + radius_j;
        if r2 < cutoff * cutoff {
            neighbors.push(j);
        }
    }

    Ok(())
}
