use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use srbo_grid::{GridConfig, GridSection, SystemFile, find_preset};

use super::build_solver_options;
use crate::cli::ModelArgs;
use crate::io::read_system_file;

/// Where the molecular constants came from.
#[derive(Debug, Clone)]
pub enum SystemSource {
    Preset(String),
    File(PathBuf),
    Flags,
}

impl fmt::Display for SystemSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SystemSource::Preset(name) => write!(f, "preset {name}"),
            SystemSource::File(path) => write!(f, "{}", path.display()),
            SystemSource::Flags => write!(f, "command line"),
        }
    }
}

/// A grid configuration together with its provenance.
#[derive(Debug, Clone)]
pub struct ResolvedSystem {
    pub name: String,
    pub source: SystemSource,
    pub config: GridConfig,
}

/// Merges preset or system file values with command-line flags.
///
/// Flags win over file values, file values win over library defaults.
pub fn resolve_system(args: &ModelArgs) -> Result<ResolvedSystem> {
    let opts = &args.system;

    let (molecule, grid, source) = if let Some(name) = &opts.preset {
        let molecule = find_preset(name)?.clone();
        let source = SystemSource::Preset(molecule.label().to_string());
        (Some(molecule), GridSection::default(), source)
    } else if let Some(path) = &opts.system {
        let content = read_system_file(path)?;
        let file = SystemFile::from_toml(&content)
            .with_context(|| format!("Invalid system file: {}", path.display()))?;
        (Some(file.molecule), file.grid, SystemSource::File(path.clone()))
    } else {
        (None, GridSection::default(), SystemSource::Flags)
    };

    let base = molecule.as_ref();
    let re = constant(opts.re, base.map(|m| m.re), "re")?;
    let de = constant(opts.de, base.map(|m| m.de), "de")?;
    let ke = constant(opts.ke, base.map(|m| m.ke), "ke")?;

    let g = &args.grid;
    let Some(nrep) = g.nrep.or(grid.nrep) else {
        bail!("Missing --nrep (number of repulsive points)");
    };
    let Some(natt) = g.natt.or(grid.natt) else {
        bail!("Missing --natt (number of attractive points)");
    };

    let mut config = GridConfig::new(re, de, ke, nrep, natt)
        .with_vfact(g.vfact.or(grid.vfact).unwrap_or(GridConfig::DEFAULT_VFACT))
        .with_vthrs(g.vthrs.or(grid.vthrs).unwrap_or(GridConfig::DEFAULT_VTHRS))
        .with_solver(build_solver_options(&args.solver));
    config.rmin = g.rmin.or(grid.rmin);
    config.rmax = g.rmax.or(grid.rmax);

    let name = molecule
        .as_ref()
        .and_then(|m| m.name.clone())
        .unwrap_or_else(|| "custom".to_string());

    Ok(ResolvedSystem {
        name,
        source,
        config,
    })
}

fn constant(flag: Option<f64>, base: Option<f64>, name: &str) -> Result<f64> {
    flag.or(base).with_context(|| {
        format!("Missing --{name}. Give it explicitly or use --preset/--system.")
    })
}
