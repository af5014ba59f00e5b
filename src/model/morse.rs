/// Morse potential of a diatomic molecule.
///
/// `V(r) = De · (1 − exp(−α·(r − Re)))²`, zero at the minimum `Re` and
/// approaching the dissociation energy `De` as `r → ∞`.
///
/// # Examples
///
/// ```
/// use srbo_grid::Morse;
///
/// let h2 = Morse::from_force_constant(1.4, 0.1744, 0.37);
/// assert_eq!(h2.energy(1.4), 0.0);
/// assert!(h2.energy(10.0) < 0.1744);
/// assert!(0.1744 - h2.energy(10.0) < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Morse {
    /// Equilibrium bond length `Re`.
    pub re: f64,
    /// Dissociation energy `De`.
    pub de: f64,
    /// Decay constant `α`.
    pub alpha: f64,
}

impl Morse {
    pub fn new(re: f64, de: f64, alpha: f64) -> Self {
        Self { re, de, alpha }
    }

    /// Builds the potential from the harmonic force constant at the minimum,
    /// using `α = sqrt(ke / (2·De))`.
    pub fn from_force_constant(re: f64, de: f64, ke: f64) -> Self {
        Self::new(re, de, (ke / (2.0 * de)).sqrt())
    }

    #[inline]
    pub fn energy(&self, r: f64) -> f64 {
        let x = 1.0 - (-self.alpha * (r - self.re)).exp();
        self.de * x * x
    }

    pub fn energies(&self, points: &[f64]) -> Vec<f64> {
        points.iter().map(|&r| self.energy(r)).collect()
    }

    /// Bond length on the repulsive wall where `V(r) = vfact · De`.
    pub fn repulsive_point(&self, vfact: f64) -> f64 {
        self.re - (1.0 + vfact.sqrt()).ln() / self.alpha
    }

    /// Bond length on the attractive branch where `De − V(r) = vthrs · De`.
    pub fn attractive_point(&self, vthrs: f64) -> f64 {
        self.re - (1.0 - (1.0 - vthrs).sqrt()).ln() / self.alpha
    }

    /// Fraction of `De` reached at `r`.
    #[inline]
    pub fn energy_fraction(&self, r: f64) -> f64 {
        self.energy(r) / self.de
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h2() -> Morse {
        Morse::from_force_constant(1.4, 0.1744, 0.37)
    }

    #[test]
    fn alpha_from_force_constant() {
        let morse = h2();
        assert!((morse.alpha - (0.37f64 / 0.3488).sqrt()).abs() < 1e-15);
    }

    #[test]
    fn zero_at_equilibrium() {
        assert_eq!(h2().energy(1.4), 0.0);
    }

    #[test]
    fn approaches_dissociation_from_below() {
        let morse = h2();
        let mut last = 0.0;
        for i in 1..=40 {
            let v = morse.energy(1.4 + 0.5 * i as f64);
            assert!(v > last);
            assert!(v < morse.de);
            last = v;
        }
        assert!((morse.de - morse.energy(60.0)).abs() < 1e-12);
    }

    #[test]
    fn energies_maps_every_point() {
        let morse = h2();
        let points = [0.8, 1.4, 3.0];
        let values = morse.energies(&points);
        assert_eq!(values.len(), 3);
        assert_eq!(values[1], 0.0);
        assert_eq!(values[2], morse.energy(3.0));
    }

    #[test]
    fn boundary_points_invert_energy_fractions() {
        let morse = h2();

        let rmin = morse.repulsive_point(1.5);
        assert!(rmin < morse.re);
        assert!((morse.energy_fraction(rmin) - 1.5).abs() < 1e-12);

        let rmax = morse.attractive_point(0.001);
        assert!(rmax > morse.re);
        assert!((1.0 - morse.energy_fraction(rmax) - 0.001).abs() < 1e-12);
    }
}
