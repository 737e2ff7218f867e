use crate::error::{CliError, Result};
use gridsasa::core::models::grid::GridSeries;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Serialize, PartialEq)]
struct VoxelRecord {
    frame: usize,
    ix: usize,
    iy: usize,
    iz: usize,
    value: f64,
}

/// Writes every non-zero voxel of every frame as one CSV row.
///
/// Returns the number of rows written.
pub fn write_grid_csv(path: &Path, grids: &GridSeries) -> Result<usize> {
    let to_output_error = |source: csv::Error| CliError::Output {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(to_output_error)?;
    let rows = write_records(&mut writer, grids).map_err(to_output_error)?;
    writer.flush()?;
    Ok(rows)
}

fn write_records<W: Write>(
    writer: &mut csv::Writer<W>,
    grids: &GridSeries,
) -> std::result::Result<usize, csv::Error> {
    let geometry = grids.geometry();
    let mut rows = 0;

    // Written up front so an all-zero series still yields a header.
    writer.write_record(["frame", "ix", "iy", "iz", "value"])?;
    for (frame, grid) in grids.iter_frames().enumerate() {
        for (index, &value) in grid.iter().enumerate() {
            if value == 0.0 {
                continue;
            }
            let [ix, iy, iz] = geometry.voxel_coords(index);
            writer.serialize(VoxelRecord {
                frame,
                ix,
                iy,
                iz,
                value,
            })?;
            rows += 1;
        }
    }
    Ok(rows)
}
