use super::calibrate::calibrate_beta;
use super::config::GridConfig;
use super::error::Error;
use super::transform::BondOrderMap;
use crate::model::morse::Morse;
use crate::model::points::Grid;
use crate::model::summary::{Summary, SummarySection, SummaryValue};
use crate::solver::{RootReport, SolverOptions};

/// Resolved grid boundaries with the energy fractions they correspond to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boundaries {
    pub rmin: f64,
    pub rmax: f64,
    /// `V(rmin) / De`.
    pub vfact: f64,
    /// `(De − V(rmax)) / De`.
    pub vthrs: f64,
}

/// Resolves `rmin` and `rmax` for `morse`.
///
/// A missing boundary is placed where the potential reaches the given energy
/// fraction; an explicit boundary is kept and its energy fraction is derived
/// from it instead.
///
/// # Errors
///
/// [`Error::InvalidParameter`] if `vfact` is negative, `vthrs` is outside
/// `[0, 1)`, or the resolved boundaries do not satisfy
/// `rmin < Re < rmax` with both finite.
pub fn resolve_boundaries(
    morse: &Morse,
    vfact: f64,
    vthrs: f64,
    rmin: Option<f64>,
    rmax: Option<f64>,
) -> Result<Boundaries, Error> {
    let (rmin, vfact) = match rmin {
        Some(r) => (r, morse.energy(r) / morse.de),
        None => {
            if !(vfact.is_finite() && vfact >= 0.0) {
                return Err(Error::invalid_parameter(
                    "vfact",
                    vfact,
                    "must be finite and >= 0",
                ));
            }
            (morse.repulsive_point(vfact), vfact)
        }
    };

    let (rmax, vthrs) = match rmax {
        Some(r) => (r, (morse.de - morse.energy(r)) / morse.de),
        None => {
            if !(0.0..1.0).contains(&vthrs) {
                return Err(Error::invalid_parameter("vthrs", vthrs, "must be in [0, 1)"));
            }
            (morse.attractive_point(vthrs), vthrs)
        }
    };

    if !(rmin.is_finite() && rmin < morse.re) {
        return Err(Error::invalid_parameter(
            "rmin",
            rmin,
            format!("must be finite and < re = {}", morse.re),
        ));
    }
    if !(rmax.is_finite() && rmax > morse.re) {
        return Err(Error::invalid_parameter(
            "rmax",
            rmax,
            format!("must be finite and > re = {}", morse.re),
        ));
    }

    Ok(Boundaries {
        rmin,
        rmax,
        vfact,
        vthrs,
    })
}

/// Space-reduced bond-order grid generator for one diatomic system.
///
/// Construction resolves the boundaries, calibrates `beta` and validates
/// everything up front: a `GridModel` that exists is always able to produce
/// its grid.
///
/// # Examples
///
/// ```
/// use srbo_grid::{GridConfig, GridModel};
///
/// let model = GridModel::new(&GridConfig::new(1.4, 0.1744, 0.37, 5, 10))?;
/// let grid = model.bond_length_grid()?;
///
/// assert_eq!(grid.len(), 16);
/// assert!((grid.equilibrium() - 1.4).abs() < 1e-6);
/// assert!(grid.points().windows(2).all(|w| w[0] < w[1]));
/// # Ok::<(), srbo_grid::GridError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GridModel {
    morse: Morse,
    ke: f64,
    nrep: usize,
    natt: usize,
    bounds: Boundaries,
    f: f64,
    map: BondOrderMap,
    calibration: RootReport,
    solver: SolverOptions,
}

impl GridModel {
    /// Builds and calibrates a model from `config`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidParameter`] for non-positive or non-finite `re`,
    ///   `de`, `ke`, zero `nrep`/`natt`, or unusable boundaries
    /// - [`Error::Calibration`] if `beta` has no root on the fixed bracket
    pub fn new(config: &GridConfig) -> Result<Self, Error> {
        positive("re", config.re)?;
        positive("de", config.de)?;
        positive("ke", config.ke)?;

        let morse = Morse::from_force_constant(config.re, config.de, config.ke);

        if config.nrep == 0 {
            return Err(Error::invalid_parameter("nrep", 0.0, "must be >= 1"));
        }
        if config.natt == 0 {
            return Err(Error::invalid_parameter("natt", 0.0, "must be >= 1"));
        }

        let bounds = resolve_boundaries(
            &morse,
            config.vfact,
            config.vthrs,
            config.rmin,
            config.rmax,
        )?;

        let f = config.natt as f64 / config.nrep as f64;
        let calibration = calibrate_beta(config.re, bounds.rmin, bounds.rmax, f, &config.solver)?;
        let map = BondOrderMap::new(config.re, calibration.root)?;

        Ok(Self {
            morse,
            ke: config.ke,
            nrep: config.nrep,
            natt: config.natt,
            bounds,
            f,
            map,
            calibration,
            solver: config.solver,
        })
    }

    /// Re-resolves the boundaries, keeping the other side when one is `None`.
    ///
    /// A `None` side is recomputed from its current energy fraction. `beta`
    /// is **not** recalibrated: the grid keeps the spacing of the original
    /// calibration and only its end points move.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] as for [`resolve_boundaries`]; the model
    /// is left unchanged on error.
    pub fn update_boundaries(&mut self, rmin: Option<f64>, rmax: Option<f64>) -> Result<(), Error> {
        self.bounds = resolve_boundaries(
            &self.morse,
            self.bounds.vfact,
            self.bounds.vthrs,
            rmin,
            rmax,
        )?;
        Ok(())
    }

    pub fn re(&self) -> f64 {
        self.morse.re
    }

    pub fn de(&self) -> f64 {
        self.morse.de
    }

    pub fn ke(&self) -> f64 {
        self.ke
    }

    pub fn alpha(&self) -> f64 {
        self.morse.alpha
    }

    pub fn nrep(&self) -> usize {
        self.nrep
    }

    pub fn natt(&self) -> usize {
        self.natt
    }

    pub fn npoints(&self) -> usize {
        self.nrep + self.natt + 1
    }

    /// Requested point ratio `natt / nrep`.
    pub fn ratio(&self) -> f64 {
        self.f
    }

    pub fn rmin(&self) -> f64 {
        self.bounds.rmin
    }

    pub fn rmax(&self) -> f64 {
        self.bounds.rmax
    }

    pub fn vfact(&self) -> f64 {
        self.bounds.vfact
    }

    pub fn vthrs(&self) -> f64 {
        self.bounds.vthrs
    }

    pub fn boundaries(&self) -> Boundaries {
        self.bounds
    }

    pub fn beta(&self) -> f64 {
        self.map.beta()
    }

    /// Report of the root finder run that produced `beta`.
    pub fn calibration(&self) -> &RootReport {
        &self.calibration
    }

    pub fn solver(&self) -> &SolverOptions {
        &self.solver
    }

    pub fn morse(&self) -> &Morse {
        &self.morse
    }

    pub fn transform(&self) -> &BondOrderMap {
        &self.map
    }

    /// Bond order of bond length `r`.
    pub fn to_bond_order(&self, r: f64) -> f64 {
        self.map.to_bond_order(r)
    }

    /// Bond length of bond order `n`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] if `n <= 0` or `n` is not finite.
    pub fn to_bond_length(&self, n: f64) -> Result<f64, Error> {
        self.map.to_bond_length(n)
    }

    /// Equally spaced bond orders from `n(rmin)` down to `n(rmax)`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] if the model has fewer than two points.
    pub fn bond_order_grid(&self) -> Result<Vec<f64>, Error> {
        let npoints = self.npoints();
        if npoints < 2 {
            return Err(Error::invalid_parameter(
                "npoints",
                npoints as f64,
                "must be >= 2",
            ));
        }

        let emin = self.to_bond_order(self.bounds.rmin);
        let emax = self.to_bond_order(self.bounds.rmax);
        let dn = (emin - emax) / (npoints - 1) as f64;

        Ok((0..npoints).rev().map(|i| emax + i as f64 * dn).collect())
    }

    /// Bond lengths of [`bond_order_grid`](Self::bond_order_grid), ascending
    /// from `rmin` to `rmax` with `Re` at index `nrep`.
    ///
    /// # Errors
    ///
    /// As for [`bond_order_grid`](Self::bond_order_grid).
    pub fn bond_length_grid(&self) -> Result<Grid, Error> {
        let points = self
            .bond_order_grid()?
            .into_iter()
            .map(|n| self.to_bond_length(n))
            .collect::<Result<Vec<_>, _>>()?;

        Grid::new(points, self.nrep).ok_or_else(|| {
            Error::invalid_parameter("nrep", self.nrep as f64, "exceeds the grid size")
        })
    }

    /// Tabular report of the inputs, boundaries, calibration and grid.
    ///
    /// # Errors
    ///
    /// As for [`bond_length_grid`](Self::bond_length_grid).
    pub fn summary(&self) -> Result<Summary, Error> {
        use SummaryValue::{Count, Float, Scientific, Text};

        let grid = self.bond_length_grid()?;
        let calibration = &self.calibration;

        Ok(Summary {
            sections: vec![
                SummarySection::new("System info")
                    .row("Re", Float(self.re()))
                    .row("De", Float(self.de()))
                    .row("ke", Float(self.ke))
                    .row("alpha", Float(self.alpha())),
                SummarySection::new("Boundaries")
                    .row("rmin", Float(self.rmin()))
                    .row("rmax", Float(self.rmax()))
                    .row("Vfact", Float(self.vfact()))
                    .row("Vthrs", Float(self.vthrs())),
                SummarySection::new("Calibration")
                    .row("Beta", Float(self.beta()))
                    .row("method", Text(calibration.method.name()))
                    .row("iterations", Count(calibration.iterations))
                    .row("evals", Count(calibration.evaluations))
                    .row("residual", Scientific(calibration.f_root)),
                SummarySection::new("Grid")
                    .row("nrep", Count(self.nrep))
                    .row("natt", Count(self.natt))
                    .row("npoints", Count(self.npoints()))
                    .row("f", Float(self.f)),
            ],
            points: grid.into_points(),
        })
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), Error> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::invalid_parameter(name, value, "must be finite and > 0"))
    }
}
