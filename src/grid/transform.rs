use super::error::Error;

/// Exponential map between bond length and bond order.
///
/// `n(r) = exp(−β·(r − Re))` is strictly decreasing in `r`, equal to 1 at
/// `Re`, and its inverse is `r(n) = Re − ln(n) / β`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondOrderMap {
    re: f64,
    beta: f64,
}

impl BondOrderMap {
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] if `re` is not finite or `beta` is not a
    /// finite positive number.
    pub fn new(re: f64, beta: f64) -> Result<Self, Error> {
        if !re.is_finite() {
            return Err(Error::invalid_parameter("re", re, "must be finite"));
        }
        if !(beta.is_finite() && beta > 0.0) {
            return Err(Error::invalid_parameter("beta", beta, "must be finite and > 0"));
        }
        Ok(Self { re, beta })
    }

    #[inline]
    pub fn re(&self) -> f64 {
        self.re
    }

    #[inline]
    pub fn beta(&self) -> f64 {
        self.beta
    }

    #[inline]
    pub fn to_bond_order(&self, r: f64) -> f64 {
        (-self.beta * (r - self.re)).exp()
    }

    /// # Errors
    ///
    /// [`Error::InvalidParameter`] if `n` is not finite or `n <= 0`.
    pub fn to_bond_length(&self, n: f64) -> Result<f64, Error> {
        if !(n.is_finite() && n > 0.0) {
            return Err(Error::invalid_parameter(
                "n",
                n,
                "bond order must be finite and > 0",
            ));
        }
        Ok(self.re - n.ln() / self.beta)
    }
}
