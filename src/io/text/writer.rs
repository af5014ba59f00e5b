use crate::io::error::Error;
use std::io::Write;

/// Writes one value per line in scientific notation with 17 significant
/// digits, preceded by a `#` comment with the point count.
pub fn write<W: Write>(mut writer: W, points: &[f64]) -> Result<(), Error> {
    writeln!(writer, "# srbo grid, {} points", points.len())?;
    for value in points {
        writeln!(writer, "{value:.16e}")?;
    }
    Ok(())
}
