mod curve;
mod grid;
mod presets;
mod summary;

use curve::run_curve;
use grid::run_grid;
use presets::run_presets;
use summary::run_summary;

use anyhow::{Context, Result};
use srbo_grid::GridModel;

use crate::cli::{Command, ModelArgs};
use crate::config::{ResolvedSystem, resolve_system};
use crate::display::{Context as DisplayContext, Progress};

pub fn dispatch(command: Command, ctx: DisplayContext) -> Result<()> {
    match command {
        Command::Grid(args) => run_grid(args, ctx),
        Command::Curve(args) => run_curve(args, ctx),
        Command::Summary(args) => run_summary(args, ctx),
        Command::Presets => run_presets(),
    }
}

/// Shared first two steps: resolve the system, then calibrate the model.
fn build_model(args: &ModelArgs, progress: &mut Progress) -> Result<(ResolvedSystem, GridModel)> {
    progress.step("Resolving system");
    let system = resolve_system(args)?;
    let config = &system.config;
    progress.complete_step(
        "Resolving system",
        &[
            format!("{} from {}", system.name, system.source),
            format!(
                "Re = {}, De = {}, ke = {}",
                config.re, config.de, config.ke
            ),
            format!("nrep = {}, natt = {}", config.nrep, config.natt),
        ],
    );

    progress.step("Calibrating beta");
    let model = GridModel::new(config).context("Failed to build the grid model")?;
    let calibration = model.calibration();
    progress.complete_step(
        "Calibrating beta",
        &[
            format!(
                "rmin = {:.6}, rmax = {:.6}",
                model.rmin(),
                model.rmax()
            ),
            format!(
                "{}: {} iterations, {} evaluations",
                calibration.method, calibration.iterations, calibration.evaluations
            ),
            format!("beta = {:.10}", model.beta()),
        ],
    );

    Ok((system, model))
}
