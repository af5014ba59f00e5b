//! Grid persistence and plot data output.
//!
//! Grids are stored as a flat, ordered sequence of bond lengths in one of two
//! formats:
//!
//! - [`Format::Npy`]: NumPy `.npy` v1.0, 1-D little-endian `<f8`
//! - [`Format::Text`]: one value per line with 17 significant digits,
//!   `#` comment lines allowed
//!
//! Both round-trip every `f64` bit for bit. [`save`] and [`load`] pick the
//! format from the file extension; [`write_grid`] and [`read_grid`] work on
//! any stream with an explicit format.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::model::plot::PlotData;

pub mod error;

mod npy;
mod plot;
mod text;

pub use error::Error;

/// On-disk grid format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Npy,
    Text,
}

impl Format {
    /// Maps a file extension (without the dot, any case) to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "npy" => Some(Format::Npy),
            "txt" | "dat" => Some(Format::Text),
            _ => None,
        }
    }

    /// Canonical file extension.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Npy => "npy",
            Format::Text => "txt",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Npy => write!(f, "NPY"),
            Format::Text => write!(f, "text"),
        }
    }
}

/// Infers the grid format of `path` from its extension.
///
/// # Errors
///
/// [`Error::UnsupportedFormat`] if the extension is missing or unknown.
pub fn infer_format(path: &Path) -> Result<Format, Error> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(Format::from_extension)
        .ok_or_else(|| Error::UnsupportedFormat(path.display().to_string()))
}

/// Writes `points` to `writer` in `format`.
pub fn write_grid<W: Write>(writer: W, points: &[f64], format: Format) -> Result<(), Error> {
    match format {
        Format::Npy => npy::writer::write(writer, points),
        Format::Text => text::writer::write(writer, points),
    }
}

/// Reads a grid from `reader` in `format`.
pub fn read_grid<R: BufRead>(reader: R, format: Format) -> Result<Vec<f64>, Error> {
    match format {
        Format::Npy => npy::reader::read(reader),
        Format::Text => text::reader::read(reader),
    }
}

/// Saves `points` to `path`, inferring the format from the extension.
///
/// # Errors
///
/// [`Error::UnsupportedFormat`] for an unknown extension, [`Error::Io`] if
/// the file cannot be written.
pub fn save<P: AsRef<Path>>(path: P, points: &[f64]) -> Result<(), Error> {
    let path = path.as_ref();
    let format = infer_format(path)?;
    let mut writer = BufWriter::new(File::create(path)?);
    write_grid(&mut writer, points, format)?;
    writer.flush()?;
    Ok(())
}

/// Loads a grid from `path`, inferring the format from the extension.
///
/// # Errors
///
/// [`Error::UnsupportedFormat`] for an unknown extension, [`Error::Io`] if
/// the file cannot be read, [`Error::Parse`] if its content is malformed.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<f64>, Error> {
    let path = path.as_ref();
    let format = infer_format(path)?;
    read_grid(BufReader::new(File::open(path)?), format)
}

/// Writes plot data as whitespace-separated blocks.
///
/// Four blocks, in order: the energy curve, the repulsive points, the
/// equilibrium point and the attractive points. Each block starts with a `#`
/// header and blocks are separated by two blank lines, so gnuplot can select
/// them with `index 0` to `index 3`.
pub fn write_plot_data<W: Write>(writer: W, data: &PlotData) -> Result<(), Error> {
    plot::write(writer, data)
}
