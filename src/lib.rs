//! Space-reduced bond-order (SRBO) grids for diatomic molecules.
//!
//! An SRBO grid samples the bond length of a diatomic so that points are
//! dense around the Morse minimum and thin out toward the repulsive wall and
//! the dissociation limit. Points are equally spaced in the bond-order
//! coordinate `n = exp(−β·(r − Re))`, with `β` calibrated so that exactly
//! `nrep` points fall inside `Re` and `natt` points outside it.
//!
//! # Features
//!
//! - **Boundary resolution**: `rmin`/`rmax` from energy fractions of the
//!   Morse potential, or explicit boundaries with the fractions derived back
//! - **Calibration**: `β` by bracketed root finding (Ridders' method or
//!   bisection)
//! - **Persistence**: NPY and plain-text grids, plot data for gnuplot
//! - **Presets**: embedded constants of common diatomics and TOML system files
//!
//! # Quick Start
//!
//! ```
//! use srbo_grid::{GridConfig, GridModel, GridError};
//!
//! // H2 in atomic units: 5 repulsive and 10 attractive points
//! let config = GridConfig::new(1.4, 0.1744, 0.37, 5, 10);
//! let model = GridModel::new(&config)?;
//!
//! assert!(model.beta() > 0.001 && model.beta() < 2.0);
//! assert_eq!(model.npoints(), 16);
//!
//! let grid = model.bond_length_grid()?;
//! assert_eq!(grid.repulsive().len(), 5);
//! assert_eq!(grid.attractive().len(), 10);
//! assert!((grid.first() - model.rmin()).abs() < 1e-9);
//! assert!((grid.last() - model.rmax()).abs() < 1e-9);
//!
//! // Explicit inner boundary; Vfact is derived from it
//! let model = GridModel::new(&config.clone().with_rmin(0.8))?;
//! let vfact = model.morse().energy(0.8) / model.de();
//! assert!((model.vfact() - vfact).abs() < 1e-12);
//! # Ok::<(), GridError>(())
//! ```
//!
//! # Module Organization
//!
//! - [`GridModel`]: Boundary resolution, calibration and grid construction
//! - [`solver`]: Bracketed root finders used for the calibration
//! - [`io`]: Grid and plot data persistence
//!
//! # Data Types
//!
//! - [`GridConfig`]: Inputs of a model
//! - [`Grid`]: Bond-length grid split into repulsive, equilibrium and attractive points
//! - [`Morse`]: Morse potential of the diatomic
//! - [`Summary`]: Tabular report of a model
//! - [`PlotData`]: Energy curve and grid points for plotting
//! - [`Molecule`], [`SystemFile`]: Embedded presets and TOML system files

mod grid;
mod model;

pub mod io;
pub mod solver;

pub use model::morse::Morse;
pub use model::plot::PlotData;
pub use model::points::Grid;
pub use model::summary::{Summary, SummaryRow, SummarySection, SummaryValue};

pub use grid::{
    BETA_BRACKET, BondOrderMap, Boundaries, GridConfig, GridModel, GridSection, Molecule,
    SystemFile, calibrate_beta, find_preset, objective, presets, resolve_boundaries,
};

pub use grid::Error as GridError;
