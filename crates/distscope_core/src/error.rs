use std::fmt;

/// Errors from distribution parameter validation and figure composition
#[derive(Debug, Clone, PartialEq)]
pub enum DistributionError {
    /// A family parameter is outside its valid range
    InvalidParameter {
        family: &'static str,
        parameter: &'static str,
        value: f64,
        reason: &'static str,
    },
    /// A panel was requested with a sample size of zero
    InvalidSampleSize { size: usize },
}

impl fmt::Display for DistributionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistributionError::InvalidParameter {
                family,
                parameter,
                value,
                reason,
            } => {
                write!(f, "invalid {family} parameter {parameter}={value}: {reason}")
            }
            DistributionError::InvalidSampleSize { size } => {
                write!(f, "invalid sample size {size}: must be at least 1")
            }
        }
    }
}

impl std::error::Error for DistributionError {}
