use super::{ALIGN, MAGIC};
use crate::io::error::Error;
use std::io::Write;

/// Preamble length of a v1.0 file: magic, version and `u16` header length.
const PREAMBLE_LEN: usize = MAGIC.len() + 2 + 2;

pub fn write<W: Write>(mut writer: W, points: &[f64]) -> Result<(), Error> {
    let header = header(points.len());

    writer.write_all(MAGIC)?;
    writer.write_all(&[1, 0])?;
    // header length always fits: the dict is well under 64 KiB
    writer.write_all(&(header.len() as u16).to_le_bytes())?;
    writer.write_all(header.as_bytes())?;

    for value in points {
        writer.write_all(&value.to_le_bytes())?;
    }
    Ok(())
}

fn header(len: usize) -> String {
    let mut header = format!("{{'descr': '<f8', 'fortran_order': False, 'shape': ({len},), }}");
    let unpadded = PREAMBLE_LEN + header.len() + 1;
    let padding = ALIGN - unpadded % ALIGN;
    header.extend(std::iter::repeat_n(' ', padding));
    header.push('\n');
    header
}
