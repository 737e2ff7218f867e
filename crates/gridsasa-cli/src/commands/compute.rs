use crate::cli::ComputeArgs;
use crate::config::{AppConfig, build_config};
use crate::error::{CliError, Result};
use crate::output;
use crate::utils::progress::CliProgressHandler;
use gridsasa::{
    core::io::{traits::TrajectoryFile, xyz::XyzFile},
    core::models::atoms::AtomTable,
    engine::progress::ProgressReporter,
    workflows,
};
use tracing::{info, warn};

pub fn run(args: ComputeArgs, quiet: bool) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let app_config = build_config(&args)?;

    let handler = if quiet {
        CliProgressHandler::hidden()
    } else {
        CliProgressHandler::new()
    };
    execute(&app_config, &handler)
}

fn execute(app_config: &AppConfig, progress: &CliProgressHandler) -> Result<()> {
    info!("Loading trajectory from {:?}", &app_config.input_path);
    let (trajectory, metadata) =
        XyzFile::read_from_path(&app_config.input_path).map_err(|e| CliError::FileParsing {
            path: app_config.input_path.clone(),
            source: e.into(),
        })?;

    let vdw_radii = app_config.radii.resolve(&metadata.elements);
    let mut atoms = AtomTable::from_vdw_radii(&vdw_radii, app_config.probe_radius);
    atoms.set_selection(app_config.selection.mask(&metadata.elements))?;

    info!(
        frames = trajectory.frame_count(),
        atoms = trajectory.atom_count(),
        selected = atoms.selected_count(),
        "Trajectory loaded."
    );
    if atoms.selected_count() == 0 {
        warn!("No atoms match the selection; every grid will be empty.");
    }

    let reporter = ProgressReporter::with_callback(progress.get_callback());

    println!(
        "Computing grid SASA for {} frame(s)...",
        trajectory.frame_count()
    );
    let result =
        workflows::grid_sasa::run(&trajectory, &atoms, &app_config.core_config, &reporter)?;

    for (frame, grid) in result.grids.iter_frames().enumerate() {
        let total: f64 = grid.iter().sum();
        info!(frame, total_area = total, "Frame SASA (A^2).");
    }

    let rows = output::write_grid_csv(&app_config.output_path, &result.grids)?;
    println!(
        "✓ Grid written to: {} ({} non-zero voxel(s))",
        app_config.output_path.display(),
        rows
    );
    Ok(())
}
