//! Bracketed scalar root finding.
//!
//! The grid calibration needs a zero of a continuous, monotone function on a
//! fixed bracket. This module provides two interchangeable bracketing methods
//! behind one entry point, [`solve`]:
//!
//! - [`Method::Ridder`]: Ridders' exponential-fit method (default)
//! - [`Method::Bisection`]: plain interval halving
//!
//! Both require a sign change across the bracket and fail with
//! [`SolverError::NoSignChange`] otherwise. Neither retries with a different
//! bracket.
//!
//! ```
//! use srbo_grid::solver::{solve, SolverOptions};
//!
//! let report = solve(|x| x * x - 2.0, 0.0, 2.0, &SolverOptions::default())?;
//! assert!((report.root - 2f64.sqrt()).abs() < 1e-10);
//! # Ok::<(), srbo_grid::solver::SolverError>(())
//! ```

mod bisection;
mod error;
mod ridder;

use std::fmt;

pub use bisection::bisection;
pub use error::SolverError;
pub use ridder::ridder;

/// Bracketing method used by [`solve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// Ridders' method.
    #[default]
    Ridder,

    /// Interval bisection.
    Bisection,
}

impl Method {
    pub const fn name(self) -> &'static str {
        match self {
            Method::Ridder => "ridder",
            Method::Bisection => "bisection",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tolerances and iteration cap for a bracketed solve.
///
/// Convergence is declared when the bracket (or the change between
/// successive estimates) is narrower than `xtol + rtol * |x|`, or when the
/// function evaluates to exactly zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverOptions {
    /// Bracketing method.
    pub method: Method,

    /// Absolute abscissa tolerance.
    pub xtol: f64,

    /// Relative abscissa tolerance.
    pub rtol: f64,

    /// Maximum number of iterations before [`SolverError::NotConverged`].
    pub max_iter: usize,
}

impl SolverOptions {
    pub const DEFAULT_XTOL: f64 = 2e-12;
    pub const DEFAULT_RTOL: f64 = 4.0 * f64::EPSILON;
    pub const DEFAULT_MAX_ITER: usize = 100;

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn with_xtol(mut self, xtol: f64) -> Self {
        self.xtol = xtol;
        self
    }

    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Checks that tolerances are usable.
    ///
    /// # Errors
    ///
    /// [`SolverError::InvalidOptions`] if `xtol` or `rtol` is negative or
    /// non-finite, both are zero, or `max_iter` is zero.
    pub fn validate(&self) -> Result<(), SolverError> {
        if !self.xtol.is_finite() || self.xtol < 0.0 {
            return Err(SolverError::invalid_options(
                "xtol",
                format!("must be finite and >= 0, got {}", self.xtol),
            ));
        }
        if !self.rtol.is_finite() || self.rtol < 0.0 {
            return Err(SolverError::invalid_options(
                "rtol",
                format!("must be finite and >= 0, got {}", self.rtol),
            ));
        }
        if self.xtol == 0.0 && self.rtol == 0.0 {
            return Err(SolverError::invalid_options(
                "xtol",
                "either xtol or rtol must be > 0",
            ));
        }
        if self.max_iter == 0 {
            return Err(SolverError::invalid_options("max_iter", "must be >= 1"));
        }
        Ok(())
    }

    #[inline]
    pub(crate) fn tolerance(&self, x: f64) -> f64 {
        self.xtol + self.rtol * x.abs()
    }
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            method: Method::default(),
            xtol: Self::DEFAULT_XTOL,
            rtol: Self::DEFAULT_RTOL,
            max_iter: Self::DEFAULT_MAX_ITER,
        }
    }
}

/// Outcome of a successful solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootReport {
    /// Root estimate.
    pub root: f64,
    /// Function value at `root`.
    pub f_root: f64,
    /// Iterations performed (0 when an endpoint is already a root).
    pub iterations: usize,
    /// Function evaluations performed.
    pub evaluations: usize,
    /// Final bracket.
    pub bracket: [f64; 2],
    /// Method that produced the root.
    pub method: Method,
}

/// Finds a zero of `func` on `[a, b]` with the method selected in `options`.
///
/// # Errors
///
/// - [`SolverError::InvalidOptions`]: see [`SolverOptions::validate`]
/// - [`SolverError::InvalidBracket`]: `a`, `b` non-finite or `a >= b`
/// - [`SolverError::NoSignChange`]: `func(a)` and `func(b)` share a sign
/// - [`SolverError::NonFiniteEvaluation`]: `func` returned NaN/inf
/// - [`SolverError::NotConverged`]: `max_iter` exhausted
pub fn solve<F>(func: F, a: f64, b: f64, options: &SolverOptions) -> Result<RootReport, SolverError>
where
    F: FnMut(f64) -> f64,
{
    match options.method {
        Method::Ridder => ridder(func, a, b, options),
        Method::Bisection => bisection(func, a, b, options),
    }
}

/// Counts evaluations and rejects non-finite function values.
pub(crate) struct Evaluator<F> {
    func: F,
    pub(crate) count: usize,
}

impl<F: FnMut(f64) -> f64> Evaluator<F> {
    pub(crate) fn new(func: F) -> Self {
        Self { func, count: 0 }
    }

    pub(crate) fn eval(&mut self, x: f64) -> Result<f64, SolverError> {
        self.count += 1;
        let fx = (self.func)(x);
        if fx.is_finite() {
            Ok(fx)
        } else {
            Err(SolverError::NonFiniteEvaluation { x, fx })
        }
    }
}

/// Result of evaluating the initial bracket.
pub(crate) enum Start {
    /// `f(a)` and `f(b)` have opposite signs.
    Bracketed { fa: f64, fb: f64 },
    /// One endpoint is already an exact root.
    Endpoint(RootReport),
}

/// Shared preamble: validates options and bracket, evaluates both ends.
pub(crate) fn open_bracket<F: FnMut(f64) -> f64>(
    eval: &mut Evaluator<F>,
    a: f64,
    b: f64,
    options: &SolverOptions,
) -> Result<Start, SolverError> {
    options.validate()?;

    if !(a.is_finite() && b.is_finite()) || a >= b {
        return Err(SolverError::InvalidBracket { a, b });
    }

    let fa = eval.eval(a)?;
    let fb = eval.eval(b)?;

    let endpoint = |root: f64, f_root: f64, count: usize| RootReport {
        root,
        f_root,
        iterations: 0,
        evaluations: count,
        bracket: [a, b],
        method: options.method,
    };

    if fa == 0.0 {
        return Ok(Start::Endpoint(endpoint(a, fa, eval.count)));
    }
    if fb == 0.0 {
        return Ok(Start::Endpoint(endpoint(b, fb, eval.count)));
    }
    if !opposite_sign(fa, fb) {
        return Err(SolverError::NoSignChange { a, b, fa, fb });
    }

    Ok(Start::Bracketed { fa, fb })
}

/// Returns `true` if `x` and `y` have opposite signs.
#[inline]
pub(crate) fn opposite_sign(x: f64, y: f64) -> bool {
    x.is_sign_positive() != y.is_sign_positive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_match_documented_values() {
        let options = SolverOptions::default();
        assert_eq!(options.method, Method::Ridder);
        assert_eq!(options.xtol, 2e-12);
        assert_eq!(options.rtol, 4.0 * f64::EPSILON);
        assert_eq!(options.max_iter, 100);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_tolerances() {
        let negative = SolverOptions::default().with_xtol(-1.0);
        assert!(matches!(
            negative.validate(),
            Err(SolverError::InvalidOptions { name: "xtol", .. })
        ));

        let zero_iter = SolverOptions::default().with_max_iter(0);
        assert!(matches!(
            zero_iter.validate(),
            Err(SolverError::InvalidOptions {
                name: "max_iter",
                ..
            })
        ));

        let both_zero = SolverOptions {
            xtol: 0.0,
            rtol: 0.0,
            ..SolverOptions::default()
        };
        assert!(both_zero.validate().is_err());
    }

    #[test]
    fn solve_dispatches_on_method() {
        let ridder = solve(|x| x - 0.3, 0.0, 1.0, &SolverOptions::default()).unwrap();
        assert_eq!(ridder.method, Method::Ridder);

        let options = SolverOptions::default().with_method(Method::Bisection);
        let bisect = solve(|x| x - 0.3, 0.0, 1.0, &options).unwrap();
        assert_eq!(bisect.method, Method::Bisection);

        assert!((ridder.root - bisect.root).abs() < 1e-10);
    }

    #[test]
    fn endpoint_root_returns_without_iterating() {
        let report = solve(|x| x - 1.0, 0.0, 1.0, &SolverOptions::default()).unwrap();
        assert_eq!(report.root, 1.0);
        assert_eq!(report.iterations, 0);
        assert_eq!(report.evaluations, 2);
    }

    #[test]
    fn method_names() {
        assert_eq!(Method::Ridder.to_string(), "ridder");
        assert_eq!(Method::Bisection.to_string(), "bisection");
    }
}
