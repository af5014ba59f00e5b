use crate::solver::SolverOptions;

/// Inputs of a [`GridModel`](super::GridModel).
///
/// `re`, `de` and `ke` describe the Morse potential of the diatomic; `nrep`
/// and `natt` set how many points go on each side of the equilibrium. The
/// boundaries are derived from the energy fractions `vfact` and `vthrs`
/// unless given explicitly with [`with_rmin`](Self::with_rmin) and
/// [`with_rmax`](Self::with_rmax).
#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    /// Equilibrium bond length.
    pub re: f64,
    /// Dissociation energy.
    pub de: f64,
    /// Harmonic force constant at `re`.
    pub ke: f64,
    /// Points on the repulsive side.
    pub nrep: usize,
    /// Points on the attractive side.
    pub natt: usize,
    /// `V(rmin) / De` when `rmin` is derived.
    pub vfact: f64,
    /// `(De − V(rmax)) / De` when `rmax` is derived.
    pub vthrs: f64,
    /// Explicit inner boundary.
    pub rmin: Option<f64>,
    /// Explicit outer boundary.
    pub rmax: Option<f64>,
    /// Root finder settings for the `beta` calibration.
    pub solver: SolverOptions,
}

impl GridConfig {
    pub const DEFAULT_VFACT: f64 = 1.5;
    pub const DEFAULT_VTHRS: f64 = 0.001;

    pub fn new(re: f64, de: f64, ke: f64, nrep: usize, natt: usize) -> Self {
        Self {
            re,
            de,
            ke,
            nrep,
            natt,
            vfact: Self::DEFAULT_VFACT,
            vthrs: Self::DEFAULT_VTHRS,
            rmin: None,
            rmax: None,
            solver: SolverOptions::default(),
        }
    }

    pub fn with_vfact(mut self, vfact: f64) -> Self {
        self.vfact = vfact;
        self
    }

    pub fn with_vthrs(mut self, vthrs: f64) -> Self {
        self.vthrs = vthrs;
        self
    }

    /// Fixes the inner boundary; `vfact` is then derived from it.
    pub fn with_rmin(mut self, rmin: f64) -> Self {
        self.rmin = Some(rmin);
        self
    }

    /// Fixes the outer boundary; `vthrs` is then derived from it.
    pub fn with_rmax(mut self, rmax: f64) -> Self {
        self.rmax = Some(rmax);
        self
    }

    pub fn with_solver(mut self, solver: SolverOptions) -> Self {
        self.solver = solver;
        self
    }

    /// Total number of grid points, `nrep + natt + 1`.
    pub fn npoints(&self) -> usize {
        self.nrep + self.natt + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::Method;

    #[test]
    fn new_uses_default_fractions() {
        let config = GridConfig::new(1.4, 0.1744, 0.37, 5, 10);
        assert_eq!(config.vfact, 1.5);
        assert_eq!(config.vthrs, 0.001);
        assert_eq!(config.rmin, None);
        assert_eq!(config.rmax, None);
        assert_eq!(config.solver, SolverOptions::default());
        assert_eq!(config.npoints(), 16);
    }

    #[test]
    fn builders_override_fields() {
        let config = GridConfig::new(1.4, 0.1744, 0.37, 5, 10)
            .with_vfact(2.0)
            .with_vthrs(0.01)
            .with_rmin(0.8)
            .with_rmax(6.0)
            .with_solver(SolverOptions::default().with_method(Method::Bisection));
        assert_eq!(config.vfact, 2.0);
        assert_eq!(config.vthrs, 0.01);
        assert_eq!(config.rmin, Some(0.8));
        assert_eq!(config.rmax, Some(6.0));
        assert_eq!(config.solver.method, Method::Bisection);
    }
}
