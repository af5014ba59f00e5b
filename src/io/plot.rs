use super::error::Error;
use crate::model::plot::PlotData;
use std::io::Write;

pub fn write<W: Write>(mut writer: W, data: &PlotData) -> Result<(), Error> {
    writeln!(
        writer,
        "# Morse curve on [{:.6}, {:.6}], {} samples",
        data.rmin,
        data.rmax,
        data.curve.len()
    )?;
    write_block(&mut writer, "r V(r)", &data.curve)?;
    block_break(&mut writer)?;

    writeln!(writer, "# repulsive grid points")?;
    write_block(&mut writer, "r V(r)", &data.repulsive)?;
    block_break(&mut writer)?;

    writeln!(writer, "# equilibrium grid point")?;
    write_block(&mut writer, "r V(r)", &[data.equilibrium])?;
    block_break(&mut writer)?;

    writeln!(writer, "# attractive grid points")?;
    write_block(&mut writer, "r V(r)", &data.attractive)?;
    Ok(())
}

fn write_block<W: Write>(writer: &mut W, columns: &str, pairs: &[[f64; 2]]) -> Result<(), Error> {
    writeln!(writer, "# {columns}")?;
    for [r, v] in pairs {
        writeln!(writer, "{r:.12e} {v:.12e}")?;
    }
    Ok(())
}

fn block_break<W: Write>(writer: &mut W) -> Result<(), Error> {
    writeln!(writer)?;
    writeln!(writer)?;
    Ok(())
}
