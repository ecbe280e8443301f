use serde::{Deserialize, Serialize};

/// Number of evaluation points used by the per-family display grids
pub const GRID_POINTS: usize = 1000;

/// Evenly spaced display grid a theoretical curve is evaluated over.
///
/// Both endpoints are included, so the spacing between adjacent points is
/// `(max - min) / (points - 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    pub min: f64,
    pub max: f64,
    pub points: usize,
}

impl Grid {
    #[must_use]
    pub fn new(min: f64, max: f64, points: usize) -> Self {
        Self { min, max, points }
    }

    /// Spacing between adjacent grid positions (0.0 for fewer than 2 points).
    #[must_use]
    pub fn step(&self) -> f64 {
        if self.points > 1 {
            (self.max - self.min) / (self.points - 1) as f64
        } else {
            0.0
        }
    }

    /// Evaluation positions in ascending order, endpoints included.
    pub fn values(self) -> impl Iterator<Item = f64> {
        let step = self.step();
        (0..self.points).map(move |i| self.min + step * i as f64)
    }
}
