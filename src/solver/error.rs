//! Error types for bracketed root finding.

use thiserror::Error;

/// Errors raised by the bracketed root finders.
///
/// None of these are retried internally: a failed solve is reported to the
/// caller as-is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    /// Bracket endpoints are not finite or not ordered `a < b`.
    #[error("invalid bracket [{a}, {b}]: endpoints must be finite with a < b")]
    InvalidBracket { a: f64, b: f64 },

    /// The function has the same sign at both ends of the bracket.
    #[error("no sign change on [{a}, {b}]: f(a) = {fa}, f(b) = {fb}")]
    NoSignChange { a: f64, b: f64, fa: f64, fb: f64 },

    /// The function returned NaN or an infinity.
    #[error("function is not finite at x = {x}: f(x) = {fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    /// The iteration cap was exhausted before the tolerance was met.
    #[error("{method} did not converge within {iterations} iterations (last estimate {estimate})")]
    NotConverged {
        method: &'static str,
        iterations: usize,
        estimate: f64,
    },

    /// Tolerances or iteration cap are out of range.
    #[error("invalid solver option `{name}`: {detail}")]
    InvalidOptions { name: &'static str, detail: String },
}

impl SolverError {
    pub(crate) fn invalid_options(name: &'static str, detail: impl Into<String>) -> Self {
        Self::InvalidOptions {
            name,
            detail: detail.into(),
        }
    }
}
