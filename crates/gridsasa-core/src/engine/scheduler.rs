use super::config::{ConfigError, SasaConfig};
use super::error::EngineError;
use super::progress::{Progress, ProgressReporter};
use super::tasks::frame::{FrameKernel, FrameScratch, FrameStats};
use crate::core::models::atoms::AtomTable;
use crate::core::models::frame::Trajectory;
use crate::core::models::grid::GridSeries;
use crate::core::sphere::SpherePointSet;
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Runs the frame kernel over every frame of `trajectory`.
///
/// Frame `i` writes only to its own slice of the returned [`GridSeries`], and each worker owns
/// one [`FrameScratch`] that it reuses for all of its frames, so no synchronization is needed.
/// The result does not depend on the worker count.
///
/// # Errors
///
/// Any frame failing with [`EngineError::DegenerateGeometry`] aborts the whole run.
#[instrument(skip_all, name = "frame_scheduler", fields(frames = trajectory.frame_count()))]
pub fn run_frames(
    trajectory: &Trajectory,
    atoms: &AtomTable,
    sphere: &SpherePointSet,
    config: &SasaConfig,
    reporter: &ProgressReporter,
) -> Result<(GridSeries, FrameStats), EngineError> {
    if !trajectory.is_empty() && trajectory.atom_count() != atoms.len() {
        return Err(EngineError::InputMismatch(format!(
            "trajectory has {} atoms but {} radii were supplied",
            trajectory.atom_count(),
            atoms.len()
        )));
    }
    let voxels = config
        .grid
        .checked_voxel_count()
        .filter(|voxels| voxels.checked_mul(trajectory.frame_count()).is_some())
        .ok_or_else(|| ConfigError::InvalidParameter {
            name: "grid_counts",
            reason: format!(
                "{} frames of {:?} voxels do not fit in memory",
                trajectory.frame_count(),
                config.grid.counts
            ),
        })?;
    if voxels == 0 {
        return Err(ConfigError::InvalidParameter {
            name: "grid_counts",
            reason: "grid has no voxels".to_string(),
        }
        .into());
    }

    let mut series = GridSeries::zeroed(config.grid, trajectory.frame_count());
    let kernel = FrameKernel::new(atoms, sphere, &config.grid);

    reporter.report(Progress::FramesStart {
        total_frames: trajectory.frame_count() as u64,
    });

    let stats = dispatch(trajectory, &kernel, &mut series, config, reporter)?;

    reporter.report(Progress::FramesFinish);
    debug!(
        accessible = stats.accessible_points,
        buried = stats.buried_points,
        dropped = stats.dropped_points,
        "All frames rasterized."
    );

    Ok((series, stats))
}

#[cfg(feature = "parallel")]
fn dispatch(
    trajectory: &Trajectory,
    kernel: &FrameKernel,
    series: &mut GridSeries,
    config: &SasaConfig,
    reporter: &ProgressReporter,
) -> Result<FrameStats, EngineError> {
    let voxels = series.geometry().voxel_count();
    let n_atoms = trajectory.atom_count();
    let n_points = config.n_sphere_points;

    let process_all = |output: &mut [f64]| -> Result<FrameStats, EngineError> {
        output
            .par_chunks_mut(voxels)
            .zip(trajectory.frames().par_iter())
            .enumerate()
            .map_init(
                || FrameScratch::new(n_atoms, n_points),
                |scratch, (index, (grid, frame))| -> Result<FrameStats, EngineError> {
                    let stats = kernel.process(index, frame, scratch, grid)?;
                    reporter.report(Progress::FrameDone { index });
                    Ok(stats)
                },
            )
            .try_reduce(FrameStats::default, |mut acc, stats| {
                acc += stats;
                Ok(acc)
            })
    };

    let output = series.as_mut_slice();
    match config.num_workers {
        Some(workers) => {
            debug!(workers, "Building dedicated worker pool.");
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(workers)
                .build()
                .map_err(|e| EngineError::Internal(format!("Failed to build worker pool: {e}")))?;
            pool.install(|| process_all(output))
        }
        None => {
            debug!(
                workers = rayon::current_num_threads(),
                "Using the current rayon pool."
            );
            process_all(output)
        }
    }
}

#[cfg(not(feature = "parallel"))]
fn dispatch(
    trajectory: &Trajectory,
    kernel: &FrameKernel,
    series: &mut GridSeries,
    config: &SasaConfig,
    reporter: &ProgressReporter,
) -> Result<FrameStats, EngineError> {
    let voxels = series.geometry().voxel_count();
    let mut scratch = FrameScratch::new(trajectory.atom_count(), config.n_sphere_points);
    let mut total = FrameStats::default();

    for (index, (grid, frame)) in series
        .as_mut_slice()
        .chunks_mut(voxels)
        .zip(trajectory.frames())
        .enumerate()
    {
        total += kernel.process(index, frame, &mut scratch, grid)?;
        reporter.report(Progress::FrameDone { index });
    }

    Ok(total)
}
