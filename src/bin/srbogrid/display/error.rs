use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    let msg = err.to_string();
    for line in wrap(&msg, 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
        source = cause.source();
    }

    if let Some(hints) = HintCollector::collect(err) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

struct HintCollector {
    hints: Vec<String>,
    has_typed_hints: bool,
}

impl HintCollector {
    fn new() -> Self {
        Self {
            hints: Vec::new(),
            has_typed_hints: false,
        }
    }

    fn collect(err: &Error) -> Option<Vec<String>> {
        let mut collector = Self::new();

        collector.collect_io_hints(err);
        collector.collect_grid_hints(err);

        if !collector.has_typed_hints {
            collector.collect_fallback_hints(err);
        }

        if collector.hints.is_empty() {
            None
        } else {
            Some(collector.hints)
        }
    }

    fn add(&mut self, hint: impl Into<String>) {
        self.hints.push(hint.into());
    }

    fn mark_typed(&mut self) {
        self.has_typed_hints = true;
    }

    fn collect_io_hints(&mut self, err: &Error) {
        use srbo_grid::io::Error as IoError;

        let Some(io_err) = err.chain().find_map(|e| e.downcast_ref::<IoError>()) else {
            return;
        };

        self.mark_typed();

        match io_err {
            IoError::Io { source } => {
                self.collect_std_io_hints(source);
            }

            IoError::Parse { format, line, .. } => {
                self.add(format!(
                    "Reader encountered an issue near line {} in {} data",
                    line, format
                ));
                self.add("Grid files hold one float64 value per entry");
                self.add("Check that the extension matches the file content");
            }

            IoError::UnsupportedFormat(path) => {
                self.add(format!("No grid format is known for '{}'", path));
                self.add("Use a .npy, .txt or .dat extension");
                self.add("Or pass --outfmt npy|text to choose explicitly");
            }
        }
    }

    fn collect_std_io_hints(&mut self, source: &std::io::Error) {
        use std::io::ErrorKind;

        match source.kind() {
            ErrorKind::NotFound => {
                self.add("File or directory not found");
                self.add("Check the path spelling and that parent directories exist");
            }

            ErrorKind::PermissionDenied => {
                self.add("Permission denied accessing the file");
                self.add("Check file permissions with `ls -la`");
            }

            ErrorKind::BrokenPipe => {
                self.add("Broken pipe: output consumer terminated");
                self.add("This may occur when piping to commands like `head`");
            }

            _ => {
                self.add("I/O operation failed");
                self.add("Check file path, permissions, and disk space");
            }
        }
    }

    fn collect_grid_hints(&mut self, err: &Error) {
        use srbo_grid::GridError;

        let Some(grid_err) = err.chain().find_map(|e| e.downcast_ref::<GridError>()) else {
            return;
        };

        self.mark_typed();

        match grid_err {
            GridError::InvalidParameter { name, .. } => {
                self.collect_parameter_hints(name);
            }

            GridError::MissingParameter(name) => {
                self.add(format!("The system does not define '{}'", name));
                self.add(format!("Pass --{} or add it to the [grid] table", name));
            }

            GridError::Calibration(solver_err) => {
                self.collect_solver_hints(solver_err);
            }

            GridError::PresetParse(_) => {
                self.add("System file has invalid TOML or missing keys");
                self.add("[molecule] needs re, de and ke as numbers");
                self.add("[grid] may set nrep, natt, vfact, vthrs, rmin, rmax");
            }

            GridError::UnknownPreset(_) => {
                self.add("Run `srbogrid presets` to list the available names");
                self.add("Or give --re, --de and --ke explicitly");
            }
        }
    }

    fn collect_parameter_hints(&mut self, name: &str) {
        match name {
            "re" | "de" | "ke" => {
                self.add("Re, De and ke must all be positive and finite");
            }
            "nrep" | "natt" => {
                self.add("Both sides of the grid need at least one point");
            }
            "vfact" => {
                self.add("Vfact is V(rmin)/De and must be >= 0");
            }
            "vthrs" => {
                self.add("Vthrs is (De - V(rmax))/De and must lie in [0, 1)");
            }
            "rmin" | "rmax" => {
                self.add("Boundaries must satisfy rmin < Re < rmax");
                self.add("Vthrs = 0 places rmax at infinity; use a small positive value");
            }
            "n" => {
                self.add("Bond orders are strictly positive");
            }
            _ => {
                self.add("Check the grid parameters for out-of-range values");
            }
        }
    }

    fn collect_solver_hints(&mut self, err: &srbo_grid::solver::SolverError) {
        use srbo_grid::solver::SolverError;

        match err {
            SolverError::NoSignChange { .. } => {
                self.add("No beta in [0.001, 2] gives the requested natt/nrep ratio");
                self.add("Bring --nrep and --natt closer together");
                self.add("Or widen the boundaries with --vfact/--vthrs or --rmin/--rmax");
            }
            SolverError::NotConverged { .. } => {
                self.add("Raise --max-iter or loosen --xtol");
                self.add("Try --solver bisection, which always converges eventually");
            }
            SolverError::InvalidOptions { .. } => {
                self.add("--xtol must be >= 0 and --max-iter >= 1");
            }
            SolverError::InvalidBracket { .. } | SolverError::NonFiniteEvaluation { .. } => {
                self.add("The calibration objective could not be evaluated");
                self.add("Check that the boundaries are finite and distinct from Re");
            }
        }
    }

    fn collect_fallback_hints(&mut self, err: &Error) {
        let msg = error_chain_text(err);

        if msg.contains("missing --") {
            self.add("Use --preset NAME for a built-in molecule");
            self.add("Or --system FILE for a TOML system description");
            return;
        }

        if msg.contains("terminal") {
            self.add("Redirect stdout or pass -o FILE for binary output");
            return;
        }

        if msg.contains("no such file") || msg.contains("not found") {
            self.add("Check that the file path is correct");
            self.add("Verify the file exists and is readable");
        }
    }
}

fn error_chain_text(err: &Error) -> String {
    err.chain()
        .map(|cause| cause.to_string())
        .collect::<Vec<_>>()
        .join("\n")
        .to_lowercase()
}
