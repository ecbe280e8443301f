use serde::{Deserialize, Serialize};

/// Bin count shared by every panel so figures stay visually comparable
pub const HISTOGRAM_BINS: usize = 30;

/// Density-normalized histogram of one sample.
///
/// Bins are equal-width over the sample's own range and each height is
/// `count / (n * bin_width)`, so the bar areas sum to 1 and the bars plot
/// on the same vertical scale as a theoretical density curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    /// Left edge of the first bin
    pub min: f64,
    /// Width of every bin
    pub bin_width: f64,
    /// Density per bin, in ascending x order
    pub densities: Vec<f64>,
}

impl Histogram {
    /// Bin `sample` into `bins` equal-width bins spanning its range.
    ///
    /// A degenerate range (every draw equal) is floored at 0.01 wide so the
    /// draws still land in a bin. The maximum value falls in the last bin.
    #[must_use]
    pub fn from_sample(sample: &[f64], bins: usize) -> Self {
        if sample.is_empty() || bins == 0 {
            return Self {
                min: 0.0,
                bin_width: 0.0,
                densities: Vec::new(),
            };
        }

        let min = sample.iter().copied().fold(f64::INFINITY, f64::min);
        let max = sample.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let range = (max - min).max(0.01);
        let bin_width = range / bins as f64;

        let mut counts = vec![0usize; bins];
        for &x in sample {
            let bin = ((x - min) / bin_width).floor() as usize;
            counts[bin.min(bins - 1)] += 1;
        }

        let norm = sample.len() as f64 * bin_width;
        let densities = counts.iter().map(|&c| c as f64 / norm).collect();

        Self {
            min,
            bin_width,
            densities,
        }
    }

    /// Number of bins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.densities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.densities.is_empty()
    }

    /// `(bin center, density)` pairs for chart rendering.
    #[must_use]
    pub fn bars(&self) -> Vec<(f64, f64)> {
        self.densities
            .iter()
            .enumerate()
            .map(|(i, &density)| (self.min + (i as f64 + 0.5) * self.bin_width, density))
            .collect()
    }

    /// Largest bin density (0.0 when empty).
    #[must_use]
    pub fn max_density(&self) -> f64 {
        self.densities.iter().copied().fold(0.0_f64, f64::max)
    }
}
