use crate::core::models::atoms::AtomTable;
use crate::core::models::frame::Trajectory;
use crate::core::models::grid::GridSeries;
use crate::core::sphere::SpherePointSet;
use crate::engine::config::SasaConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::scheduler;
use crate::engine::tasks::frame::FrameStats;
use tracing::{info, instrument};

#[derive(Debug, Clone)]
pub struct GridSasaResult {
    /// One density grid per frame, in frame order.
    pub grids: GridSeries,
    /// Sample-point counts summed over all frames.
    pub stats: FrameStats,
}

/// Computes the per-frame grid of solvent-accessible surface area.
///
/// `atoms` carries effective radii (vdW radius plus probe) and the selection mask. Each grid
/// voxel receives the summed area of the accessible sample points that snap to it, so the sum
/// of a frame's grid equals the selected atoms' in-window SASA.
///
/// # Errors
///
/// Returns [`EngineError::InputMismatch`] if `atoms` does not match the trajectory's atom count,
/// and [`EngineError::DegenerateGeometry`] if two atoms coincide in any frame.
#[instrument(skip_all, name = "grid_sasa_workflow")]
pub fn run(
    trajectory: &Trajectory,
    atoms: &AtomTable,
    config: &SasaConfig,
    reporter: &ProgressReporter,
) -> Result<GridSasaResult, EngineError> {
    // === Phase 0: Sphere sampling ===
    reporter.report(Progress::PhaseStart {
        name: "Sphere Sampling",
    });
    let sphere = SpherePointSet::golden_spiral(config.n_sphere_points);
    reporter.report(Progress::PhaseFinish);

    info!(
        frames = trajectory.frame_count(),
        atoms = trajectory.atom_count(),
        selected = atoms.selected_count(),
        points = sphere.len(),
        grid = ?config.grid.counts,
        "Starting grid SASA computation."
    );

    // === Phase 1: Frame rasterization ===
    reporter.report(Progress::PhaseStart {
        name: "Frame Rasterization",
    });
    let (grids, stats) = scheduler::run_frames(trajectory, atoms, &sphere, config, reporter)?;
    reporter.report(Progress::PhaseFinish);

    if stats.dropped_points > 0 {
        info!(
            dropped = stats.dropped_points,
            "Some accessible points fell outside the grid window and were discarded."
        );
        reporter.report(Progress::PointsDropped {
            count: stats.dropped_points,
        });
    }
    info!(
        accessible = stats.accessible_points,
        buried = stats.buried_points,
        "Grid SASA computation finished."
    );

    Ok(GridSasaResult { grids, stats })
}
