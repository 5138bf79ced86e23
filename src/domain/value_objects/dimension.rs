//! Dimension Value Object
//!
//! A validated, immutable length. Every shape and vehicle quantity goes
//! through this type, so an invalid number can never reach an entity.

use std::fmt;

/// Why a raw number was rejected as a dimension
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DimensionIssue {
    /// Zero or negative where a strictly positive value is required
    NonPositive(f64),
    /// Negative where zero is allowed
    Negative(f64),
    /// NaN or infinite
    NonFinite(f64),
    /// Wrong number of parameters for the variant
    Arity { expected: usize, found: usize },
    /// Each value is valid but the derived quantity is infinite
    Overflow,
}

impl fmt::Display for DimensionIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositive(v) => write!(f, "{} is not strictly positive", v),
            Self::Negative(v) => write!(f, "{} is negative", v),
            Self::NonFinite(v) => write!(f, "{} is not a finite number", v),
            Self::Arity { expected, found } => {
                write!(f, "expected {} parameter(s), found {}", expected, found)
            }
            Self::Overflow => f.write_str("values are too large; the result overflows"),
        }
    }
}

/// Strictly positive, finite real number
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Dimension(f64);

impl Dimension {
    /// Validate a raw value.
    pub fn new(value: f64) -> Result<Self, DimensionIssue> {
        if !value.is_finite() {
            return Err(DimensionIssue::NonFinite(value));
        }
        if value <= 0.0 {
            return Err(DimensionIssue::NonPositive(value));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Dimension> for f64 {
    fn from(d: Dimension) -> Self {
        d.0
    }
}

/// Validate a value that may be zero but must be finite and not negative.
pub fn non_negative(value: f64) -> Result<f64, DimensionIssue> {
    if !value.is_finite() {
        return Err(DimensionIssue::NonFinite(value));
    }
    if value < 0.0 {
        return Err(DimensionIssue::Negative(value));
    }
    Ok(value)
}
