use std::f64::consts::PI;

use rand::{Rng, distr::Distribution as _};
use serde::{Deserialize, Serialize};
use statrs::function::gamma::ln_gamma;

use crate::error::DistributionError;
use crate::grid::{GRID_POINTS, Grid};

/// Half-width of the unit-variance uniform support, sqrt(3)
const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// A distribution family with its parameters.
///
/// Every variant knows how to draw random values and how to evaluate its
/// probability density in closed form, so a sample and its theoretical
/// curve always come from the same definition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Distribution {
    /// Standard normal N(0, 1)
    Normal,
    /// Standard Cauchy C(0, 1)
    Cauchy,
    /// Student's t with `df` degrees of freedom
    StudentT { df: f64 },
    /// Poisson with rate `lambda`
    Poisson { lambda: f64 },
    /// Uniform over [-sqrt(3), sqrt(3)], so the variance is 1
    Uniform,
}

impl Distribution {
    pub const DEFAULT_DF: f64 = 3.0;
    pub const DEFAULT_LAMBDA: f64 = 10.0;

    /// Short family name for tabs, logs, and error messages.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Distribution::Normal => "Normal",
            Distribution::Cauchy => "Cauchy",
            Distribution::StudentT { .. } => "Student-t",
            Distribution::Poisson { .. } => "Poisson",
            Distribution::Uniform => "Uniform",
        }
    }

    /// Figure title, e.g. `ξ ~ N(0, 1)`.
    #[must_use]
    pub fn title(&self) -> String {
        match self {
            Distribution::Normal => "ξ ~ N(0, 1)".to_string(),
            Distribution::Cauchy => "ξ ~ C(0, 1)".to_string(),
            Distribution::StudentT { df } => format!("ξ ~ t({df})"),
            Distribution::Poisson { lambda } => format!("ξ ~ P({lambda})"),
            Distribution::Uniform => "ξ ~ U(-√3, √3)".to_string(),
        }
    }

    /// Check the family parameters without drawing or evaluating anything.
    pub fn validate(&self) -> Result<(), DistributionError> {
        match *self {
            Distribution::StudentT { df } if !(df > 0.0 && df.is_finite()) => {
                Err(DistributionError::InvalidParameter {
                    family: "Student-t",
                    parameter: "df",
                    value: df,
                    reason: "degrees of freedom must be positive and finite",
                })
            }
            Distribution::Poisson { lambda } if !(lambda > 0.0 && lambda.is_finite()) => {
                Err(DistributionError::InvalidParameter {
                    family: "Poisson",
                    parameter: "lambda",
                    value: lambda,
                    reason: "rate must be positive and finite",
                })
            }
            _ => Ok(()),
        }
    }

    /// Display grid the theoretical curve is evaluated over.
    ///
    /// The Cauchy grid deliberately runs wider than its displayed x-range
    /// (see [`Distribution::view_range`]) so the curve stays defined across
    /// the whole clipped axis.
    #[must_use]
    pub fn grid(&self) -> Grid {
        match self {
            Distribution::Normal | Distribution::StudentT { .. } => {
                Grid::new(-5.0, 5.0, GRID_POINTS)
            }
            Distribution::Cauchy => Grid::new(-30.0, 30.0, GRID_POINTS),
            Distribution::Poisson { .. } => Grid::new(0.0, 20.0, GRID_POINTS),
            Distribution::Uniform => Grid::new(-3.0, 3.0, GRID_POINTS),
        }
    }

    /// The x-range a figure panel displays for this family.
    ///
    /// Matches the grid except for Cauchy, whose heavy tails would flatten
    /// the interesting center if the full sampling range were shown.
    #[must_use]
    pub fn view_range(&self) -> (f64, f64) {
        match self {
            Distribution::Cauchy => (-15.0, 15.0),
            _ => {
                let grid = self.grid();
                (grid.min, grid.max)
            }
        }
    }

    /// Closed-form probability density at `x`.
    ///
    /// For Poisson this is the continuous extension of the mass function,
    /// `λ^x e^{-λ} / Γ(x + 1)`, which reproduces the mass function at
    /// integer x and interpolates smoothly between integers. It is a display
    /// curve, not a density, and does not integrate to 1.
    ///
    /// Parameters are assumed valid here; [`Distribution::curve`] validates.
    #[must_use]
    pub fn pdf(&self, x: f64) -> f64 {
        match *self {
            Distribution::Normal => (-0.5 * x * x).exp() / (2.0 * PI).sqrt(),
            Distribution::Cauchy => 1.0 / (PI * (1.0 + x * x)),
            Distribution::StudentT { df } => {
                // log space keeps the gamma ratio finite for large df
                let ln_norm =
                    ln_gamma((df + 1.0) / 2.0) - ln_gamma(df / 2.0) - 0.5 * (df * PI).ln();
                (ln_norm - 0.5 * (df + 1.0) * (1.0 + x * x / df).ln()).exp()
            }
            Distribution::Poisson { lambda } => {
                (x * lambda.ln() - lambda - ln_gamma(x + 1.0)).exp()
            }
            Distribution::Uniform => {
                if x.abs() <= SQRT_3 {
                    1.0 / (2.0 * SQRT_3)
                } else {
                    0.0
                }
            }
        }
    }

    /// Evaluate the theoretical curve over `grid`.
    ///
    /// Fails with [`DistributionError::InvalidParameter`] when the family
    /// parameters are out of range; parameters are never clamped.
    pub fn curve(&self, grid: &Grid) -> Result<TheoreticalCurve, DistributionError> {
        self.validate()?;
        let points = grid.values().map(|x| (x, self.pdf(x))).collect();
        Ok(TheoreticalCurve { points })
    }

    /// Draw a single value from the family's standard definition.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64, DistributionError> {
        match *self {
            Distribution::Normal => Ok(rng.sample(rand_distr::StandardNormal)),
            Distribution::Cauchy => rand_distr::Cauchy::new(0.0, 1.0)
                .map(|d| d.sample(rng))
                .map_err(|_| DistributionError::InvalidParameter {
                    family: "Cauchy",
                    parameter: "scale",
                    value: 1.0,
                    reason: "scale must be positive and finite",
                }),
            Distribution::StudentT { df } => rand_distr::StudentT::new(df)
                .map(|d| d.sample(rng))
                .map_err(|_| DistributionError::InvalidParameter {
                    family: "Student-t",
                    parameter: "df",
                    value: df,
                    reason: "degrees of freedom must be positive and finite",
                }),
            Distribution::Poisson { lambda } => rand_distr::Poisson::new(lambda)
                .map(|d| d.sample(rng))
                .map_err(|_| DistributionError::InvalidParameter {
                    family: "Poisson",
                    parameter: "lambda",
                    value: lambda,
                    reason: "rate must be positive and finite",
                }),
            Distribution::Uniform => rand::distr::Uniform::new_inclusive(-SQRT_3, SQRT_3)
                .map(|d| d.sample(rng))
                .map_err(|_| DistributionError::InvalidParameter {
                    family: "Uniform",
                    parameter: "half_width",
                    value: SQRT_3,
                    reason: "support must be a non-empty interval",
                }),
        }
    }

    /// Draw `size` independent values.
    ///
    /// Rejects a size of zero; a histogram of an empty sample has no
    /// meaning here.
    pub fn sample_n<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        size: usize,
    ) -> Result<Vec<f64>, DistributionError> {
        if size == 0 {
            return Err(DistributionError::InvalidSampleSize { size });
        }
        let mut draws = Vec::with_capacity(size);
        for _ in 0..size {
            draws.push(self.sample(rng)?);
        }
        Ok(draws)
    }
}

/// Theoretical density curve evaluated over a display grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TheoreticalCurve {
    /// `(x, density)` pairs in grid order
    pub points: Vec<(f64, f64)>,
}

impl TheoreticalCurve {
    /// Largest density on the grid (0.0 for an empty grid).
    #[must_use]
    pub fn max_density(&self) -> f64 {
        self.points.iter().map(|&(_, d)| d).fold(0.0_f64, f64::max)
    }
}
