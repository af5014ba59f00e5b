use srbo_grid::io::Format;
use srbo_grid::solver::Method;

use crate::cli;

impl From<cli::SolverMethod> for Method {
    fn from(method: cli::SolverMethod) -> Self {
        match method {
            cli::SolverMethod::Ridder => Method::Ridder,
            cli::SolverMethod::Bisection => Method::Bisection,
        }
    }
}

impl From<cli::GridFormat> for Format {
    fn from(format: cli::GridFormat) -> Self {
        match format {
            cli::GridFormat::Npy => Format::Npy,
            cli::GridFormat::Text => Format::Text,
        }
    }
}
