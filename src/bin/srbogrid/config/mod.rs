mod solver;
mod system;

pub use solver::build_solver_options;
pub use system::{ResolvedSystem, resolve_system};
