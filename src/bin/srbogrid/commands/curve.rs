use std::io::Write;

use anyhow::{Context, Result};

use srbo_grid::PlotData;
use srbo_grid::io::write_plot_data;

use super::build_model;
use crate::cli::CurveArgs;
use crate::display::{Context as DisplayContext, Progress};
use crate::io::create_output;

const TOTAL_STEPS: u8 = 3;

pub fn run_curve(args: CurveArgs, ctx: DisplayContext) -> Result<()> {
    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);
    let (_, model) = build_model(&args.model, &mut progress)?;

    progress.step("Writing plot data");
    let grid = model
        .bond_length_grid()
        .context("Failed to build the bond-length grid")?;
    let data = PlotData::new(model.morse(), &grid, args.samples);

    let mut writer = create_output(args.output.as_deref())?;
    write_plot_data(&mut writer, &data).context("Failed to write plot data")?;
    writer.flush().context("Failed to flush plot data")?;

    let target = args
        .output
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "stdout".to_string());
    progress.complete_step(
        "Writing plot data",
        &[
            format!("{} curve samples on [{:.4}, {:.4}]", data.curve.len(), data.rmin, data.rmax),
            format!("{} grid points in 3 blocks", grid.len()),
            format!("gnuplot: plot '{target}' index 0 with lines, '' index 1:3 with points"),
        ],
    );

    progress.finish("Plot data written");

    Ok(())
}
