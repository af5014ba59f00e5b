use super::{Evaluator, Method, RootReport, SolverError, SolverOptions, Start, open_bracket};
use super::opposite_sign;

/// Finds a zero of `func` on `[a, b]` by
/// [bisection](https://en.wikipedia.org/wiki/Bisection_method).
///
/// Slower than [`ridder`](super::ridder) but needs nothing beyond continuity
/// and a sign change. The root estimate is the midpoint of the final bracket.
///
/// # Errors
///
/// See [`solve`](super::solve).
pub fn bisection<F>(
    func: F,
    mut a: f64,
    mut b: f64,
    options: &SolverOptions,
) -> Result<RootReport, SolverError>
where
    F: FnMut(f64) -> f64,
{
    let mut eval = Evaluator::new(func);

    let mut fa = match open_bracket(&mut eval, a, b, options)? {
        Start::Endpoint(report) => return Ok(report),
        Start::Bracketed { fa, .. } => fa,
    };

    let mut mid = a;

    for iteration in 1..=options.max_iter {
        mid = a + 0.5 * (b - a);
        let fm = eval.eval(mid)?;

        if fm == 0.0 || (b - a) * 0.5 < options.tolerance(mid) {
            return Ok(RootReport {
                root: mid,
                f_root: fm,
                iterations: iteration,
                evaluations: eval.count,
                bracket: [a, b],
                method: Method::Bisection,
            });
        }

        if opposite_sign(fa, fm) {
            b = mid;
        } else {
            a = mid;
            fa = fm;
        }
    }

    Err(SolverError::NotConverged {
        method: Method::Bisection.name(),
        iterations: options.max_iter,
        estimate: mid,
    })
}
