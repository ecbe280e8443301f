use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::distribution::{Distribution, TheoreticalCurve};
use crate::error::DistributionError;
use crate::histogram::{HISTOGRAM_BINS, Histogram};

/// Panel sample sizes used when the caller does not choose their own
pub const DEFAULT_SAMPLE_SIZES: [usize; 3] = [10, 50, 100];

/// One sub-plot of a figure: the histogram of a single sample next to the
/// theoretical curve shared by every panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub sample_size: usize,
    /// Caption shown with the panel, stating the sample size
    pub caption: String,
    pub histogram: Histogram,
    pub curve: TheoreticalCurve,
}

impl Panel {
    /// Tallest of histogram and curve, for y-axis scaling.
    #[must_use]
    pub fn max_density(&self) -> f64 {
        self.histogram.max_density().max(self.curve.max_density())
    }
}

/// A composed figure: one panel per requested sample size, left to right
/// in request order, under a shared family title.
///
/// The figure is a plain value with no drawing state behind it. Rendering
/// lives entirely in the front end, and composing a figure never displays
/// anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub distribution: Distribution,
    pub title: String,
    /// Displayed x-range shared by every panel
    pub x_range: (f64, f64),
    pub panels: Vec<Panel>,
}

impl Figure {
    /// Compose the figure for `distribution` with one panel per entry of
    /// `sizes`, in order.
    ///
    /// Parameters are validated and the theoretical curve evaluated before
    /// any sampling, and every panel shares that one curve. Any failure
    /// (bad parameter, zero sample size) aborts the whole figure; there are
    /// no partial figures.
    pub fn compose<R: Rng + ?Sized>(
        distribution: Distribution,
        sizes: &[usize],
        rng: &mut R,
    ) -> Result<Figure, DistributionError> {
        let grid = distribution.grid();
        let curve = distribution.curve(&grid)?;

        let mut panels = Vec::with_capacity(sizes.len());
        for &size in sizes {
            let sample = distribution.sample_n(rng, size)?;
            panels.push(Panel {
                sample_size: size,
                caption: format!("Sample size: {size}"),
                histogram: Histogram::from_sample(&sample, HISTOGRAM_BINS),
                curve: curve.clone(),
            });
        }

        Ok(Figure {
            distribution,
            title: distribution.title(),
            x_range: distribution.view_range(),
            panels,
        })
    }

    /// Standard normal figure.
    pub fn normal<R: Rng + ?Sized>(
        sizes: &[usize],
        rng: &mut R,
    ) -> Result<Figure, DistributionError> {
        Self::compose(Distribution::Normal, sizes, rng)
    }

    /// Standard Cauchy figure.
    pub fn cauchy<R: Rng + ?Sized>(
        sizes: &[usize],
        rng: &mut R,
    ) -> Result<Figure, DistributionError> {
        Self::compose(Distribution::Cauchy, sizes, rng)
    }

    /// Student-t figure with `df` degrees of freedom.
    pub fn student_t<R: Rng + ?Sized>(
        df: f64,
        sizes: &[usize],
        rng: &mut R,
    ) -> Result<Figure, DistributionError> {
        Self::compose(Distribution::StudentT { df }, sizes, rng)
    }

    /// Poisson figure with rate `lambda`.
    pub fn poisson<R: Rng + ?Sized>(
        lambda: f64,
        sizes: &[usize],
        rng: &mut R,
    ) -> Result<Figure, DistributionError> {
        Self::compose(Distribution::Poisson { lambda }, sizes, rng)
    }

    /// Unit-variance uniform figure.
    pub fn uniform<R: Rng + ?Sized>(
        sizes: &[usize],
        rng: &mut R,
    ) -> Result<Figure, DistributionError> {
        Self::compose(Distribution::Uniform, sizes, rng)
    }
}
