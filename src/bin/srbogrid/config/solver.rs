use srbo_grid::solver::SolverOptions;

use crate::cli::SolverArgs;

pub fn build_solver_options(opts: &SolverArgs) -> SolverOptions {
    let mut options = SolverOptions::default().with_method(opts.method.into());
    if let Some(xtol) = opts.xtol {
        options = options.with_xtol(xtol);
    }
    if let Some(max_iter) = opts.max_iter {
        options = options.with_max_iter(max_iter);
    }
    options
}
