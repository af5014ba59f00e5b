use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use srbo_grid::PlotData;

#[derive(Parser)]
#[command(
    name = "srbogrid",
    about = "Space-reduced bond-order grids for diatomic molecules",
    version,
    author,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    /// Suppress progress output (for scripting)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compute a grid and write it to file(s) or stdout
    #[command(visible_alias = "g")]
    Grid(GridArgs),

    /// Write the Morse curve and grid points as plot data
    #[command(visible_alias = "c")]
    Curve(CurveArgs),

    /// Print the model summary report
    #[command(visible_alias = "s")]
    Summary(SummaryArgs),

    /// List the embedded diatomic presets
    Presets,
}

/// Molecular constants, from a preset, a system file, or flags.
///
/// Flags override values taken from `--preset` or `--system`.
#[derive(Args)]
#[command(next_help_heading = "System")]
pub struct SystemOptions {
    /// Embedded preset name (see `srbogrid presets`)
    #[arg(short, long, value_name = "NAME", conflicts_with = "system")]
    pub preset: Option<String>,

    /// TOML system file with [molecule] and optional [grid] tables
    #[arg(short, long, value_name = "FILE")]
    pub system: Option<PathBuf>,

    /// Equilibrium bond length Re
    #[arg(long, value_name = "R")]
    pub re: Option<f64>,

    /// Dissociation energy De
    #[arg(long, value_name = "E")]
    pub de: Option<f64>,

    /// Force constant ke at Re
    #[arg(long, value_name = "K")]
    pub ke: Option<f64>,
}

/// Point counts and boundaries.
#[derive(Args)]
#[command(next_help_heading = "Grid")]
pub struct GridOptions {
    /// Points on the repulsive side (r < Re)
    #[arg(long, value_name = "N")]
    pub nrep: Option<usize>,

    /// Points on the attractive side (r > Re)
    #[arg(long, value_name = "N")]
    pub natt: Option<usize>,

    /// V(rmin)/De used to place rmin [default: 1.5]
    #[arg(long, value_name = "FRAC")]
    pub vfact: Option<f64>,

    /// (De - V(rmax))/De used to place rmax [default: 0.001]
    #[arg(long, value_name = "FRAC")]
    pub vthrs: Option<f64>,

    /// Explicit inner boundary (overrides --vfact)
    #[arg(long, value_name = "R")]
    pub rmin: Option<f64>,

    /// Explicit outer boundary (overrides --vthrs)
    #[arg(long, value_name = "R")]
    pub rmax: Option<f64>,
}

/// Root finder settings for the beta calibration (advanced tuning).
#[derive(Args)]
#[command(next_help_heading = "Calibration")]
pub struct SolverArgs {
    /// Bracketing method
    #[arg(long = "solver", value_name = "METHOD", default_value = "ridder")]
    pub method: SolverMethod,

    /// Absolute tolerance on beta [default: 2e-12]
    #[arg(long, value_name = "TOL")]
    pub xtol: Option<f64>,

    /// Iteration cap [default: 100]
    #[arg(long = "max-iter", value_name = "N")]
    pub max_iter: Option<usize>,
}

/// Everything needed to build a grid model.
#[derive(Args)]
pub struct ModelArgs {
    #[command(flatten)]
    pub system: SystemOptions,

    #[command(flatten)]
    pub grid: GridOptions,

    #[command(flatten)]
    pub solver: SolverArgs,
}

#[derive(Args)]
pub struct GridArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Output file(s), repeatable; format from extension (.npy, .txt, .dat)
    #[arg(short, long, value_name = "FILE", action = clap::ArgAction::Append)]
    pub output: Vec<PathBuf>,

    /// Output format for stdout or the first output file
    #[arg(long = "outfmt", value_name = "FORMAT")]
    pub output_format: Option<GridFormat>,
}

#[derive(Args)]
pub struct CurveArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Output file (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Number of evenly spaced curve samples
    #[arg(long, value_name = "N", default_value_t = PlotData::DEFAULT_SAMPLES)]
    pub samples: usize,
}

#[derive(Args)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub model: ModelArgs,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SolverMethod {
    Ridder,
    #[value(alias = "bisect")]
    Bisection,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum GridFormat {
    Npy,
    #[value(alias = "txt")]
    Text,
}

pub fn parse() -> Cli {
    Cli::parse()
}
