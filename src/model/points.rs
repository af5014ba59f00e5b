/// Bond-length grid split at the equilibrium point.
///
/// Points are ordered from the inner boundary `rmin` to the outer boundary
/// `rmax`. The first `nrep` points sample the repulsive side, the point at
/// index `nrep` sits at `Re`, and the rest sample the attractive side.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    points: Vec<f64>,
    nrep: usize,
}

impl Grid {
    /// Wraps `points` with the repulsive point count `nrep`.
    ///
    /// Returns `None` if `nrep` does not index into `points`.
    pub fn new(points: Vec<f64>, nrep: usize) -> Option<Self> {
        if nrep < points.len() {
            Some(Self { points, nrep })
        } else {
            None
        }
    }

    #[inline]
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn nrep(&self) -> usize {
        self.nrep
    }

    #[inline]
    pub fn natt(&self) -> usize {
        self.points.len() - self.nrep - 1
    }

    /// Points `[0, nrep)`.
    pub fn repulsive(&self) -> &[f64] {
        &self.points[..self.nrep]
    }

    /// The point at index `nrep`.
    pub fn equilibrium(&self) -> f64 {
        self.points[self.nrep]
    }

    /// Points `(nrep, npoints)`.
    pub fn attractive(&self) -> &[f64] {
        &self.points[self.nrep + 1..]
    }

    pub fn first(&self) -> f64 {
        self.points[0]
    }

    pub fn last(&self) -> f64 {
        self.points[self.points.len() - 1]
    }

    pub fn into_points(self) -> Vec<f64> {
        self.points
    }
}

impl AsRef<[f64]> for Grid {
    fn as_ref(&self) -> &[f64] {
        &self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_split() {
        assert!(Grid::new(vec![1.0, 2.0], 2).is_none());
        assert!(Grid::new(Vec::new(), 0).is_none());
    }

    #[test]
    fn partitions_cover_every_point_once() {
        let grid = Grid::new(vec![0.5, 0.8, 1.0, 1.5, 2.5, 4.0], 2).unwrap();
        assert_eq!(grid.repulsive(), &[0.5, 0.8]);
        assert_eq!(grid.equilibrium(), 1.0);
        assert_eq!(grid.attractive(), &[1.5, 2.5, 4.0]);
        assert_eq!(grid.nrep() + grid.natt() + 1, grid.len());
        assert_eq!(grid.first(), 0.5);
        assert_eq!(grid.last(), 4.0);
    }
}
