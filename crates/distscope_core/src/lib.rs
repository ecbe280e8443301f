//! Distribution sampling and figure composition library
//!
//! Builds the figures behind distscope: density histograms of random
//! samples placed next to the matching theoretical curve, one panel per
//! sample size. Supports:
//! - Five families: normal, Cauchy, Student-t, Poisson, unit-variance uniform
//! - Sampling through `rand`/`rand_distr` with caller-owned RNGs
//! - Closed-form density evaluation over per-family display grids
//! - Density-normalized histogram binning (30 bins everywhere)
//! - Figure composition with fail-fast parameter validation
//!
//! # Composing a figure
//!
//! ```ignore
//! use distscope_core::{DEFAULT_SAMPLE_SIZES, Figure};
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//!
//! let mut rng = SmallRng::seed_from_u64(42);
//! let figure = Figure::student_t(3.0, &DEFAULT_SAMPLE_SIZES, &mut rng)?;
//! assert_eq!(figure.panels.len(), 3);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod distribution;
pub mod error;
pub mod figure;
pub mod grid;
pub mod histogram;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use distribution::{Distribution, TheoreticalCurve};
pub use error::DistributionError;
pub use figure::{DEFAULT_SAMPLE_SIZES, Figure, Panel};
pub use grid::{GRID_POINTS, Grid};
pub use histogram::{HISTOGRAM_BINS, Histogram};
