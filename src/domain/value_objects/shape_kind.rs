//! Shape Kind Value Object
//!
//! The tag of the closed shape variant set.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SolidError;

/// Which variant of [`Shape`](crate::domain::entities::Shape) a value is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Square,
    Circle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Rectangle, ShapeKind::Square, ShapeKind::Circle];

    /// Number of independent dimensions the variant carries
    pub fn arity(self) -> usize {
        match self {
            Self::Rectangle => 2,
            Self::Square | Self::Circle => 1,
        }
    }

    /// Names of the dimensions, in constructor order
    pub fn dimension_names(self) -> &'static [&'static str] {
        match self {
            Self::Rectangle => &["length", "width"],
            Self::Square => &["side"],
            Self::Circle => &["radius"],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::Square => "square",
            Self::Circle => "circle",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = SolidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rectangle" | "rect" => Ok(Self::Rectangle),
            "square" | "sq" => Ok(Self::Square),
            "circle" | "circ" => Ok(Self::Circle),
            _ => Err(SolidError::UnknownShape { tag: s.to_string() }),
        }
    }
}
