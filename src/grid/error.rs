//! Error types for grid construction.
//!
//! Errors fall into two groups: inputs that can never produce a valid grid
//! ([`Error::InvalidParameter`]) and a calibration that could not find
//! `beta` on its bracket ([`Error::Calibration`]). Preset and system file
//! lookups add their own variants.

use crate::solver::SolverError;
use thiserror::Error;

/// Errors that can occur while building or querying a grid model.
#[derive(Debug, Error)]
pub enum Error {
    /// An input is outside its admissible domain.
    #[error("invalid parameter '{name}' = {value}: {detail}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// Value that was rejected.
        value: f64,
        /// Description of the constraint.
        detail: String,
    },

    /// A required system parameter was not provided.
    #[error("missing parameter '{0}'")]
    MissingParameter(&'static str),

    /// The `beta` calibration failed.
    ///
    /// Typically [`SolverError::NoSignChange`] when the attractive/repulsive
    /// ratio is too extreme for the fixed bracket.
    #[error("beta calibration failed: {0}")]
    Calibration(#[from] SolverError),

    /// Failed to parse a preset table or system file.
    #[error("failed to parse system definition: {0}")]
    PresetParse(#[from] toml::de::Error),

    /// No preset with the given name exists.
    #[error("unknown preset '{0}'")]
    UnknownPreset(String),
}

impl Error {
    /// Creates an [`InvalidParameter`](Error::InvalidParameter) error.
    ///
    /// # Arguments
    ///
    /// * `name`: Parameter name
    /// * `value`: Rejected value
    /// * `detail`: Description of the constraint
    pub fn invalid_parameter(name: &'static str, value: f64, detail: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            value,
            detail: detail.into(),
        }
    }

    /// Name of the offending parameter, for parameter-related errors.
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            Self::InvalidParameter { name, .. } | Self::MissingParameter(name) => Some(*name),
            _ => None,
        }
    }
}
