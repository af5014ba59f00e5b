use super::morse::Morse;
use super::points::Grid;

/// Energy curve and grid points ready to hand to a plotting tool.
///
/// Pairs are `[r, V(r)]`. The curve samples `[rmin, rmax]` evenly; the grid
/// partitions keep the repulsive, equilibrium and attractive points apart so
/// they can be styled separately.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotData {
    pub rmin: f64,
    pub rmax: f64,
    pub curve: Vec<[f64; 2]>,
    pub repulsive: Vec<[f64; 2]>,
    pub equilibrium: [f64; 2],
    pub attractive: Vec<[f64; 2]>,
}

impl PlotData {
    /// Number of curve samples used when none is given.
    pub const DEFAULT_SAMPLES: usize = 100;

    /// Samples `morse` at `samples` evenly spaced bond lengths spanning the
    /// grid, and evaluates it at every grid point.
    ///
    /// At least two samples are always taken so both ends are present.
    pub fn new(morse: &Morse, grid: &Grid, samples: usize) -> Self {
        let rmin = grid.first();
        let rmax = grid.last();

        let pair = |r: f64| [r, morse.energy(r)];

        Self {
            rmin,
            rmax,
            curve: linspace(rmin, rmax, samples.max(2))
                .into_iter()
                .map(pair)
                .collect(),
            repulsive: grid.repulsive().iter().copied().map(pair).collect(),
            equilibrium: pair(grid.equilibrium()),
            attractive: grid.attractive().iter().copied().map(pair).collect(),
        }
    }
}

fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    let step = (stop - start) / (n - 1) as f64;
    let mut values: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
    // pin the endpoint against accumulated rounding
    values[n - 1] = stop;
    values
}
