use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "GridSASA CLI - Grid-resolved solvent-accessible surface area for molecular-dynamics trajectories.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used to process frames.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute one accessible-surface-area grid per frame of an XYZ trajectory.
    Compute(ComputeArgs),
}

/// Arguments for the `compute` subcommand.
#[derive(Args, Debug, Clone)]
pub struct ComputeArgs {
    // --- Core Arguments ---
    /// Path to the input multi-frame XYZ trajectory.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the output CSV file (columns: frame,ix,iy,iz,value).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Sampling Overrides ---
    /// Override the number of sphere points sampled per atom.
    #[arg(short = 'n', long, value_name = "INT")]
    pub n_sphere_points: Option<usize>,

    /// Override the solvent probe radius in angstroms.
    #[arg(short = 'p', long, value_name = "FLOAT")]
    pub probe_radius: Option<f64>,

    // --- Grid Overrides ---
    /// Override the grid voxel counts along x, y and z.
    #[arg(long, value_name = "NX,NY,NZ", value_delimiter = ',')]
    pub counts: Option<Vec<usize>>,

    /// Override the grid spacing in angstroms.
    #[arg(long, value_name = "FLOAT")]
    pub spacing: Option<f64>,

    // --- Selection Overrides ---
    /// Restrict the selection to these element symbols. Can be used multiple times.
    #[arg(short = 'e', long = "element", value_name = "SYMBOL")]
    pub elements: Vec<String>,

    /// Exclude hydrogen atoms from the selection, overriding the config file.
    #[arg(long)]
    pub exclude_hydrogens: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S grid.spacing=0.5
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}
