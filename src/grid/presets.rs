//! Diatomic constants from the embedded preset table or TOML system files.
//!
//! A system file names the molecule and, optionally, the grid settings:
//!
//! ```toml
//! [molecule]
//! name = "H2"
//! re = 1.4
//! de = 0.1744
//! ke = 0.37
//!
//! [grid]
//! nrep = 5
//! natt = 10
//! ```

use super::config::GridConfig;
use super::error::Error;
use serde::Deserialize;
use std::sync::OnceLock;

const PRESETS_TOML: &str = include_str!("../../resources/presets.toml");

static PRESETS: OnceLock<Vec<Molecule>> = OnceLock::new();

/// Morse constants of one diatomic.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Molecule {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub re: f64,
    pub de: f64,
    pub ke: f64,
}

impl Molecule {
    /// Display name, `"unnamed"` when none is set.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("unnamed")
    }

    /// Grid configuration for this molecule with default energy fractions.
    pub fn config(&self, nrep: usize, natt: usize) -> GridConfig {
        GridConfig::new(self.re, self.de, self.ke, nrep, natt)
    }
}

/// Optional `[grid]` table of a system file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GridSection {
    pub nrep: Option<usize>,
    pub natt: Option<usize>,
    pub vfact: Option<f64>,
    pub vthrs: Option<f64>,
    pub rmin: Option<f64>,
    pub rmax: Option<f64>,
}

/// A diatomic system read from TOML.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SystemFile {
    pub molecule: Molecule,
    #[serde(default)]
    pub grid: GridSection,
}

impl SystemFile {
    /// # Errors
    ///
    /// [`Error::PresetParse`] if `content` is not a valid system file.
    pub fn from_toml(content: &str) -> Result<Self, Error> {
        Ok(toml::from_str(content)?)
    }

    /// Builds the grid configuration described by the file.
    ///
    /// # Errors
    ///
    /// [`Error::MissingParameter`] if `nrep` or `natt` is absent.
    pub fn to_config(&self) -> Result<GridConfig, Error> {
        let grid = &self.grid;
        let nrep = grid.nrep.ok_or(Error::MissingParameter("nrep"))?;
        let natt = grid.natt.ok_or(Error::MissingParameter("natt"))?;

        let mut config = self.molecule.config(nrep, natt);
        if let Some(vfact) = grid.vfact {
            config = config.with_vfact(vfact);
        }
        if let Some(vthrs) = grid.vthrs {
            config = config.with_vthrs(vthrs);
        }
        config.rmin = grid.rmin;
        config.rmax = grid.rmax;
        Ok(config)
    }
}

#[derive(Deserialize)]
struct PresetTable {
    #[serde(default)]
    preset: Vec<Molecule>,
}

/// All embedded presets, in table order.
pub fn presets() -> &'static [Molecule] {
    PRESETS.get_or_init(|| {
        toml::from_str::<PresetTable>(PRESETS_TOML)
            .expect("Failed to parse embedded preset table. This is a library bug.")
            .preset
    })
}

/// Looks up a preset by name, ignoring ASCII case.
///
/// # Errors
///
/// [`Error::UnknownPreset`] if no preset matches.
pub fn find_preset(name: &str) -> Result<&'static Molecule, Error> {
    presets()
        .iter()
        .find(|m| m.name.as_deref().is_some_and(|n| n.eq_ignore_ascii_case(name)))
        .ok_or_else(|| Error::UnknownPreset(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GridModel;

    #[test]
    fn embedded_presets_parse() {
        let names: Vec<_> = presets().iter().map(Molecule::label).collect();
        assert_eq!(names, ["H2", "N2", "CO", "HF", "Li2"]);
        assert!(presets().iter().all(|m| m.description.is_some()));
    }

    #[test]
    fn every_preset_calibrates() {
        for molecule in presets() {
            let model = GridModel::new(&molecule.config(10, 20));
            assert!(model.is_ok(), "{}: {:?}", molecule.label(), model.err());
        }
    }

    #[test]
    fn lookup_ignores_case() {
        let h2 = find_preset("h2").unwrap();
        assert_eq!(h2.re, 1.4);
        assert_eq!(find_preset("LI2").unwrap().label(), "Li2");
        assert!(matches!(
            find_preset("Xe2"),
            Err(Error::UnknownPreset(name)) if name == "Xe2"
        ));
    }

    #[test]
    fn system_file_fills_defaults() {
        let file = SystemFile::from_toml(
            r#"
            [molecule]
            re = 1.4
            de = 0.1744
            ke = 0.37

            [grid]
            nrep = 5
            natt = 10
            rmax = 6.0
            "#,
        )
        .unwrap();

        assert_eq!(file.molecule.label(), "unnamed");
        let config = file.to_config().unwrap();
        assert_eq!(config.nrep, 5);
        assert_eq!(config.vfact, GridConfig::DEFAULT_VFACT);
        assert_eq!(config.rmin, None);
        assert_eq!(config.rmax, Some(6.0));
    }

    #[test]
    fn system_file_requires_point_counts() {
        let file = SystemFile::from_toml("[molecule]\nre = 1.4\nde = 0.17\nke = 0.37\n").unwrap();
        assert!(matches!(
            file.to_config(),
            Err(Error::MissingParameter("nrep"))
        ));
    }

    #[test]
    fn malformed_system_file_is_parse_error() {
        let err = SystemFile::from_toml("[molecule]\nre = \"long\"\n").unwrap_err();
        assert!(matches!(err, Error::PresetParse(_)));
    }
}
