use std::io::Write;

use anyhow::{Context, Result, bail};

use srbo_grid::io::{Format, infer_format, write_grid};

use super::build_model;
use crate::cli::GridArgs;
use crate::display::{Context as DisplayContext, Progress, print_grid_points, print_summary_tables};
use crate::io::{OutputSpec, create_output, stdout_is_tty};

const TOTAL_STEPS: u8 = 3;

pub fn run_grid(args: GridArgs, ctx: DisplayContext) -> Result<()> {
    let output_specs = resolve_outputs(&args)?;

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);
    let (system, model) = build_model(&args.model, &mut progress)?;

    progress.step("Building grid");
    let grid = model
        .bond_length_grid()
        .context("Failed to build the bond-length grid")?;
    progress.complete_step(
        "Building grid",
        &[
            format!(
                "{} points: {} repulsive, 1 equilibrium, {} attractive",
                grid.len(),
                grid.nrep(),
                grid.natt()
            ),
            format!("r = {:.6} … {:.6}", grid.first(), grid.last()),
        ],
    );

    if ctx.interactive {
        let summary = model.summary()?;
        print_summary_tables(&system.name, &summary);
        print_grid_points(&model, &grid);
    }

    for spec in &output_specs {
        let mut writer = create_output(spec.path.as_deref())?;
        write_grid(&mut writer, grid.points(), spec.format)
            .with_context(|| format!("Failed to write grid to {}", spec.label()))?;
        writer.flush().context("Failed to flush grid output")?;
    }

    let written: Vec<String> = output_specs
        .iter()
        .map(|spec| format!("{} → {}", spec.format, spec.label()))
        .collect();
    progress.finish(&format!("Grid written ({})", written.join(", ")));

    Ok(())
}

fn resolve_outputs(args: &GridArgs) -> Result<Vec<OutputSpec>> {
    if args.output.is_empty() {
        let format = args.output_format.map(Format::from).unwrap_or(Format::Text);
        if format == Format::Npy && stdout_is_tty() {
            bail!(
                "Refusing to write binary NPY data to a terminal.\n\nUsage: srbogrid grid ... -o grid.npy or redirect stdout."
            );
        }
        return Ok(vec![OutputSpec { path: None, format }]);
    }

    let mut specs = Vec::with_capacity(args.output.len());

    for (i, path) in args.output.iter().enumerate() {
        let format = match args.output_format {
            Some(fmt) if i == 0 => fmt.into(),
            _ => infer_format(path)?,
        };
        specs.push(OutputSpec {
            path: Some(path.clone()),
            format,
        });
    }

    Ok(specs)
}
