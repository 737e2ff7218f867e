use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::ComputeArgs;
use crate::error::{CliError, Result};
use crate::radii::RadiusTable;
use crate::selection::SelectionRule;
use gridsasa::engine::config as core_config;

pub fn build_config(args: &ComputeArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let n_sphere_points = args
        .n_sphere_points
        .or(file_config.n_sphere_points)
        .unwrap_or(defaults.n_sphere_points);
    let probe_radius = args
        .probe_radius
        .or(file_config.probe_radius)
        .unwrap_or(defaults.probe_radius);
    if !probe_radius.is_finite() || probe_radius < 0.0 {
        return Err(CliError::Config(format!(
            "`probe-radius` must be a non-negative number, got {probe_radius}"
        )));
    }

    let grid_file = file_config.grid.take().unwrap_or_default();
    let counts = match &args.counts {
        Some(values) => counts_from_slice(values)?,
        None => grid_file.counts.ok_or_else(|| {
            CliError::Config(
                "Grid voxel counts are required: pass --counts NX,NY,NZ or set `grid.counts`."
                    .to_string(),
            )
        })?,
    };
    let spacing = args
        .spacing
        .or(grid_file.spacing)
        .unwrap_or(defaults.spacing);

    let selection_file = file_config.selection.take().unwrap_or_default();
    let elements = if args.elements.is_empty() {
        selection_file.elements
    } else {
        Some(args.elements.clone())
    };
    let exclude_hydrogens = args.exclude_hydrogens
        || selection_file
            .exclude_hydrogens
            .unwrap_or(defaults.exclude_hydrogens);

    let radii = RadiusTable::new(file_config.radii.take().unwrap_or_default());

    let core_config = core_config::SasaConfigBuilder::new()
        .n_sphere_points(n_sphere_points)
        .grid_counts(counts)
        .grid_spacing(spacing)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig {
        input_path: args.input.clone(),
        output_path: args.output.clone(),
        probe_radius,
        radii,
        selection: SelectionRule::new(elements, exclude_hydrogens),
        core_config,
    })
}

fn counts_from_slice(values: &[usize]) -> Result<[usize; 3]> {
    <[usize; 3]>::try_from(values).map_err(|_| {
        CliError::Config(format!(
            "Grid counts need exactly three values, got {}",
            values.len()
        ))
    })
}

fn parse_value<T: std::str::FromStr>(key: &str, value_str: &str, kind: &str) -> Result<T> {
    value_str.trim().parse().map_err(|_| {
        CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value_str))
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };

        match key {
            "n-sphere-points" => {
                config.n_sphere_points = Some(parse_value(key, value_str, "integer")?);
            }
            "probe-radius" => {
                config.probe_radius = Some(parse_value(key, value_str, "float")?);
            }
            "grid.spacing" => {
                config.grid.get_or_insert_with(Default::default).spacing =
                    Some(parse_value(key, value_str, "float")?);
            }
            "grid.counts" => {
                let values = value_str
                    .split(',')
                    .map(|v| parse_value(key, v, "integer"))
                    .collect::<Result<Vec<usize>>>()?;
                config.grid.get_or_insert_with(Default::default).counts =
                    Some(counts_from_slice(&values)?);
            }
            "selection.elements" => {
                config.selection.get_or_insert_with(Default::default).elements = Some(
                    value_str
                        .split(',')
                        .map(|e| e.trim().to_string())
                        .filter(|e| !e.is_empty())
                        .collect(),
                );
            }
            "selection.exclude-hydrogens" => {
                config
                    .selection
                    .get_or_insert_with(Default::default)
                    .exclude_hydrogens = Some(parse_value(key, value_str, "boolean")?);
            }
            _ => {
                if let Some(element) = key.strip_prefix("radii.") {
                    let radius = parse_value(key, value_str, "float")?;
                    config
                        .radii
                        .get_or_insert_with(Default::default)
                        .insert(element.to_string(), radius);
                } else {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
    }
    Ok(config)
}
