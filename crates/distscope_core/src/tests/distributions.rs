use crate::{Distribution, DistributionError, GRID_POINTS, Grid};

use std::f64::consts::PI;

/// Trapezoid rule over `(x, y)` pairs in ascending x order
fn trapezoid(points: &[(f64, f64)]) -> f64 {
    points
        .windows(2)
        .map(|w| (w[1].0 - w[0].0) * (w[0].1 + w[1].1) / 2.0)
        .sum()
}

/// Test the closed-form density peaks against hand-derived constants
#[test]
fn test_density_peaks() {
    // N(0, 1) peak: 1 / sqrt(2*pi) = 0.39894...
    let normal = Distribution::Normal.pdf(0.0);
    assert!(
        (normal - 1.0 / (2.0 * PI).sqrt()).abs() < 1e-12,
        "Normal peak {} should be 1/sqrt(2*pi)",
        normal
    );

    // C(0, 1) peak: 1 / pi = 0.31831...
    let cauchy = Distribution::Cauchy.pdf(0.0);
    assert!(
        (cauchy - 1.0 / PI).abs() < 1e-12,
        "Cauchy peak {} should be 1/pi",
        cauchy
    );

    // t(3) peak: 2 / (pi * sqrt(3)) = 0.36755...
    let student = Distribution::StudentT { df: 3.0 }.pdf(0.0);
    assert!(
        (student - 2.0 / (PI * 3.0_f64.sqrt())).abs() < 1e-12,
        "Student-t(3) peak {} should be 2/(pi*sqrt(3))",
        student
    );
}

/// Test that the symmetric families evaluate symmetrically
#[test]
fn test_density_symmetry() {
    let symmetric = [
        Distribution::Normal,
        Distribution::Cauchy,
        Distribution::StudentT { df: 3.0 },
        Distribution::Uniform,
    ];
    for dist in symmetric {
        for x in [0.5, 1.0, 1.7, 2.5, 4.9] {
            assert!(
                (dist.pdf(x) - dist.pdf(-x)).abs() < 1e-15,
                "{} density should be symmetric at x={}",
                dist.name(),
                x
            );
        }
    }
}

/// Test the uniform density: constant on [-sqrt(3), sqrt(3)], zero outside
#[test]
fn test_uniform_density_support() {
    let sqrt_3 = 3.0_f64.sqrt();
    let height = 1.0 / (2.0 * sqrt_3);

    for x in [0.0, 0.5, -1.0, 1.7, -1.73] {
        assert!(
            (Distribution::Uniform.pdf(x) - height).abs() < 1e-12,
            "Uniform density at x={} should be 1/(2*sqrt(3))",
            x
        );
    }
    for x in [1.7321, -1.7321, 2.0, -3.0, 100.0] {
        assert_eq!(
            Distribution::Uniform.pdf(x),
            0.0,
            "Uniform density at x={} should be 0 outside the support",
            x
        );
    }
}

/// Test the Poisson continuous extension against the factorial mass function
/// at integer points
#[test]
fn test_poisson_density_matches_mass_function() {
    let lambda = 10.0;
    let dist = Distribution::Poisson { lambda };

    // pmf(k) = e^-lambda * lambda^k / k!, built up multiplicatively
    let mut expected = (-lambda).exp();
    for k in 0..=20usize {
        if k > 0 {
            expected *= lambda / k as f64;
        }
        let actual = dist.pdf(k as f64);
        assert!(
            (actual - expected).abs() < 1e-12,
            "Poisson density at k={} was {}, expected pmf {}",
            k,
            actual,
            expected
        );
    }
}

/// Test that the Poisson extension is defined and positive between integers
#[test]
fn test_poisson_density_between_integers() {
    let dist = Distribution::Poisson { lambda: 10.0 };
    for x in [0.5, 1.5, 7.25, 9.5, 10.5, 19.5] {
        let density = dist.pdf(x);
        assert!(
            density.is_finite() && density > 0.0,
            "Poisson extension at x={} should be positive and finite, got {}",
            x,
            density
        );
    }
}

/// Test that t(1) collapses to the Cauchy density
#[test]
fn test_student_t_df_one_is_cauchy() {
    let t1 = Distribution::StudentT { df: 1.0 };
    for x in [0.0, 0.5, 1.0, 2.0, 10.0] {
        assert!(
            (t1.pdf(x) - Distribution::Cauchy.pdf(x)).abs() < 1e-12,
            "t(1) at x={} should equal the Cauchy density",
            x
        );
    }
}

/// Test that t(df) approaches the normal density for large df
#[test]
fn test_student_t_large_df_approaches_normal() {
    let t = Distribution::StudentT { df: 1e6 };
    for x in [0.0, 1.0, 2.0] {
        let diff = (t.pdf(x) - Distribution::Normal.pdf(x)).abs();
        assert!(
            diff < 1e-5,
            "t(1e6) at x={} should be within 1e-5 of normal, diff was {}",
            x,
            diff
        );
    }
}

/// Test the curve mass over each display grid against the analytic mass of
/// the truncated range
#[test]
fn test_curve_mass_over_grid() {
    // Heavy-tailed families lose real mass to truncation: the Cauchy grid
    // [-30, 30] holds 2*atan(30)/pi = 0.97879 of the total, and t(3) over
    // [-5, 5] holds 0.98460. The uniform jump costs the trapezoid rule a
    // couple of edge cells. Poisson is excluded: its continuous extension
    // is a display curve, not a density.
    let cases = [
        (Distribution::Normal, 1.0, 1e-3),
        (Distribution::StudentT { df: 3.0 }, 0.9846, 5e-3),
        (Distribution::Cauchy, 0.97879, 5e-3),
        (Distribution::Uniform, 1.0, 1e-2),
    ];

    for (dist, expected_mass, tolerance) in cases {
        let curve = dist.curve(&dist.grid()).unwrap();
        let mass = trapezoid(&curve.points);
        assert!(
            (mass - expected_mass).abs() < tolerance,
            "{} curve mass {} should be close to {}",
            dist.name(),
            mass,
            expected_mass
        );
    }
}

/// Test that every family's curve is non-negative and finite on its grid
#[test]
fn test_curves_are_nonnegative_and_finite() {
    let families = [
        Distribution::Normal,
        Distribution::Cauchy,
        Distribution::StudentT { df: 3.0 },
        Distribution::Poisson { lambda: 10.0 },
        Distribution::Uniform,
    ];
    for dist in families {
        let curve = dist.curve(&dist.grid()).unwrap();
        for &(x, density) in &curve.points {
            assert!(
                density.is_finite() && density >= 0.0,
                "{} density at x={} should be finite and non-negative, got {}",
                dist.name(),
                x,
                density
            );
        }
    }
}

/// Test grid endpoints, point count, and spacing
#[test]
fn test_display_grids() {
    let grid = Distribution::Normal.grid();
    let values: Vec<f64> = grid.values().collect();

    assert_eq!(values.len(), GRID_POINTS);
    assert!((values[0] - (-5.0)).abs() < 1e-12, "grid should start at -5");
    assert!(
        (values[GRID_POINTS - 1] - 5.0).abs() < 1e-12,
        "grid should end at 5"
    );
    assert!(
        (grid.step() - 10.0 / 999.0).abs() < 1e-15,
        "grid step {} should be (max - min)/(points - 1)",
        grid.step()
    );

    // Per-family ranges
    assert_eq!(Distribution::Cauchy.grid(), Grid::new(-30.0, 30.0, GRID_POINTS));
    assert_eq!(
        Distribution::StudentT { df: 3.0 }.grid(),
        Grid::new(-5.0, 5.0, GRID_POINTS)
    );
    assert_eq!(
        Distribution::Poisson { lambda: 10.0 }.grid(),
        Grid::new(0.0, 20.0, GRID_POINTS)
    );
    assert_eq!(Distribution::Uniform.grid(), Grid::new(-3.0, 3.0, GRID_POINTS));
}

/// Test that only the Cauchy view is clipped relative to its grid
#[test]
fn test_view_ranges() {
    assert_eq!(Distribution::Cauchy.view_range(), (-15.0, 15.0));
    assert_eq!(Distribution::Normal.view_range(), (-5.0, 5.0));
    assert_eq!(Distribution::Poisson { lambda: 10.0 }.view_range(), (0.0, 20.0));
    assert_eq!(Distribution::Uniform.view_range(), (-3.0, 3.0));
}

/// Test parameter validation for the parameterized families
#[test]
fn test_parameter_validation() {
    assert!(Distribution::StudentT { df: 3.0 }.validate().is_ok());
    assert!(Distribution::Poisson { lambda: 10.0 }.validate().is_ok());
    assert!(Distribution::Normal.validate().is_ok());

    let bad_df = [0.0, -1.0, f64::NAN, f64::INFINITY];
    for df in bad_df {
        let err = Distribution::StudentT { df }.validate().unwrap_err();
        assert!(
            matches!(
                err,
                DistributionError::InvalidParameter {
                    family: "Student-t",
                    parameter: "df",
                    ..
                }
            ),
            "df={} should be rejected as an invalid df, got {:?}",
            df,
            err
        );
    }

    let bad_lambda = [0.0, -2.5, f64::NAN, f64::INFINITY];
    for lambda in bad_lambda {
        let err = Distribution::Poisson { lambda }.validate().unwrap_err();
        assert!(
            matches!(
                err,
                DistributionError::InvalidParameter {
                    family: "Poisson",
                    parameter: "lambda",
                    ..
                }
            ),
            "lambda={} should be rejected as an invalid rate, got {:?}",
            lambda,
            err
        );
    }
}

/// Test that curve evaluation refuses invalid parameters instead of clamping
#[test]
fn test_curve_rejects_invalid_parameters() {
    let dist = Distribution::StudentT { df: -2.0 };
    let err = dist.curve(&Grid::new(-5.0, 5.0, 100)).unwrap_err();
    assert!(matches!(err, DistributionError::InvalidParameter { .. }));

    // The message should name the offending parameter
    let message = err.to_string();
    assert!(
        message.contains("df") && message.contains("Student-t"),
        "error message should name family and parameter: {}",
        message
    );
}
