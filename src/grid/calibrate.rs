use super::error::Error;
use crate::solver::{self, RootReport, SolverOptions};

/// Fixed search interval for `beta`.
pub const BETA_BRACKET: [f64; 2] = [0.001, 2.0];

/// Calibration residual for a trial `beta`.
///
/// Zero when the bond-order span of the attractive side, divided by that of
/// the repulsive side, equals the requested point ratio `f = natt / nrep`:
///
/// `(1 − exp(−β·(rmax − Re))) / (exp(−β·(rmin − Re)) − 1) − f`
pub fn objective(beta: f64, re: f64, rmin: f64, rmax: f64, f: f64) -> f64 {
    let attractive = 1.0 - (-beta * (rmax - re)).exp();
    let repulsive = (-beta * (rmin - re)).exp() - 1.0;
    attractive / repulsive - f
}

/// Finds `beta` on [`BETA_BRACKET`] so that equally spaced bond orders put
/// `natt` points outside and `nrep` points inside `Re`.
///
/// # Errors
///
/// [`Error::Calibration`] wrapping the solver failure; no other bracket is
/// tried.
pub fn calibrate_beta(
    re: f64,
    rmin: f64,
    rmax: f64,
    f: f64,
    options: &SolverOptions,
) -> Result<RootReport, Error> {
    let [lo, hi] = BETA_BRACKET;
    let report = solver::solve(|beta| objective(beta, re, rmin, rmax, f), lo, hi, options)?;
    Ok(report)
}
