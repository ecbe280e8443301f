//! Integration tests for sampling, densities, and figure composition
//!
//! Organized by concern:
//! - `distributions`: parameter validation, closed-form densities, grids
//! - `sampling`: RNG plumbing, reproducibility, family-specific draw shapes
//! - `histograms`: binning and density normalization
//! - `figures`: figure composition, panel layout, fail-fast errors

mod distributions;
