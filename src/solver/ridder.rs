use super::{Evaluator, Method, RootReport, SolverError, SolverOptions, Start, open_bracket};
use super::opposite_sign;

/// Finds a zero of `func` on `[a, b]` with
/// [Ridders' method](https://en.wikipedia.org/wiki/Ridders%27_method).
///
/// Each iteration evaluates the midpoint, fits an exponential through the
/// three points and takes the zero of the fitted function as the new
/// estimate. The bracket is kept: the next interval is always the narrowest
/// one with a sign change among `{a, midpoint, estimate, b}`.
///
/// Converges when the bracket or the step between successive estimates is
/// below `xtol + rtol * |x|`, or when `func` evaluates to exactly zero.
///
/// # Errors
///
/// See [`solve`](super::solve).
pub fn ridder<F>(
    func: F,
    mut a: f64,
    mut b: f64,
    options: &SolverOptions,
) -> Result<RootReport, SolverError>
where
    F: FnMut(f64) -> f64,
{
    let mut eval = Evaluator::new(func);

    let (mut fa, mut fb) = match open_bracket(&mut eval, a, b, options)? {
        Start::Endpoint(report) => return Ok(report),
        Start::Bracketed { fa, fb } => (fa, fb),
    };

    let mut previous = a;
    let mut estimate = a;

    for iteration in 1..=options.max_iter {
        let half = 0.5 * (b - a);
        let mid = a + half;
        let fm = eval.eval(mid)?;

        // fa and fb have opposite signs, so the radicand is strictly positive.
        let radicand = (fm * fm - fa * fb).sqrt();
        let step = (fa - fb).signum() * half * fm / radicand;
        estimate = mid + step;

        let fe = eval.eval(estimate)?;
        let report = |root: f64, f_root: f64, lo: f64, hi: f64, evaluations: usize| RootReport {
            root,
            f_root,
            iterations: iteration,
            evaluations,
            bracket: [lo, hi],
            method: Method::Ridder,
        };

        if fe == 0.0 {
            return Ok(report(estimate, fe, a, b, eval.count));
        }

        if opposite_sign(fm, fe) {
            if mid < estimate {
                (a, fa, b, fb) = (mid, fm, estimate, fe);
            } else {
                (a, fa, b, fb) = (estimate, fe, mid, fm);
            }
        } else if opposite_sign(fa, fe) {
            b = estimate;
            fb = fe;
        } else {
            a = estimate;
            fa = fe;
        }

        let tol = options.tolerance(estimate);
        if b - a < tol || (iteration > 1 && (estimate - previous).abs() < tol) {
            return Ok(report(estimate, fe, a, b, eval.count));
        }
        previous = estimate;
    }

    Err(SolverError::NotConverged {
        method: Method::Ridder.name(),
        iterations: options.max_iter,
        estimate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> SolverOptions {
        SolverOptions::default()
    }

    #[test]
    fn finds_sqrt_two() {
        let report = ridder(|x| x * x - 2.0, 0.0, 2.0, &options()).unwrap();
        assert!((report.root - 2f64.sqrt()).abs() < 1e-12);
        assert_eq!(report.method, Method::Ridder);
        assert!(report.iterations >= 1);
    }

    #[test]
    fn converges_quickly_on_smooth_functions() {
        let report = ridder(|x| x.cos() - x, 0.0, 1.0, &options()).unwrap();
        assert!((report.root - 0.739_085_133_215_160_6).abs() < 1e-12);
        assert!(report.iterations < 10);
    }

    #[test]
    fn handles_decreasing_functions() {
        let report = ridder(|x| 3.0 - x, 0.0, 10.0, &options()).unwrap();
        assert!((report.root - 3.0).abs() < 1e-10);
    }

    #[test]
    fn final_bracket_contains_root() {
        let report = ridder(|x| x.powi(3) - x - 1.0, 1.0, 2.0, &options()).unwrap();
        let [lo, hi] = report.bracket;
        assert!(lo <= report.root && report.root <= hi);
    }

    #[test]
    fn rejects_missing_sign_change() {
        let err = ridder(|x| x * x + 1.0, -1.0, 1.0, &options()).unwrap_err();
        assert!(matches!(err, SolverError::NoSignChange { .. }));
    }

    #[test]
    fn rejects_inverted_bracket() {
        let err = ridder(|x| x, 1.0, -1.0, &options()).unwrap_err();
        assert_eq!(err, SolverError::InvalidBracket { a: 1.0, b: -1.0 });
    }

    #[test]
    fn rejects_non_finite_evaluation() {
        let err = ridder(|x| if x > 0.4 { f64::NAN } else { x - 0.5 }, 0.0, 1.0, &options())
            .unwrap_err();
        assert!(matches!(err, SolverError::NonFiniteEvaluation { .. }));
    }

    #[test]
    fn reports_iteration_limit() {
        let tight = options().with_max_iter(1);
        let err = ridder(|x| x.powi(3) - x - 1.0, 1.0, 2.0, &tight).unwrap_err();
        assert!(matches!(
            err,
            SolverError::NotConverged {
                method: "ridder",
                iterations: 1,
                ..
            }
        ));
    }
}
