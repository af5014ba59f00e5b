use std::io::{self, Write};

use anyhow::{Context, Result};

use super::build_model;
use crate::cli::SummaryArgs;
use crate::display::{Context as DisplayContext, Progress};

const TOTAL_STEPS: u8 = 2;

pub fn run_summary(args: SummaryArgs, ctx: DisplayContext) -> Result<()> {
    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);
    let (_, model) = build_model(&args.model, &mut progress)?;
    let summary = model.summary().context("Failed to summarize the grid model")?;
    progress.finish("Summary ready");

    let mut stdout = io::stdout().lock();
    write!(stdout, "{summary}").context("Failed to write summary")?;
    stdout.flush()?;

    Ok(())
}
