use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::display::print_presets;

pub fn run_presets() -> Result<()> {
    let mut stdout = io::stdout().lock();
    print_presets(&mut stdout, srbo_grid::presets()).context("Failed to list presets")?;
    stdout.flush()?;
    Ok(())
}
