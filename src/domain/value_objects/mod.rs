//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod dimension;
mod money;
mod shape_kind;

pub use dimension::{non_negative, Dimension, DimensionIssue};
pub use money::Money;
pub use shape_kind::ShapeKind;
