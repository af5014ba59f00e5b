mod calibrate;
mod config;
mod error;
mod presets;
mod srbo;
mod transform;

pub use calibrate::{BETA_BRACKET, calibrate_beta, objective};
pub use config::GridConfig;
pub use error::Error;
pub use presets::{GridSection, Molecule, SystemFile, find_preset, presets};
pub use srbo::{Boundaries, GridModel, resolve_boundaries};
pub use transform::BondOrderMap;
