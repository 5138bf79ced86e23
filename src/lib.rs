//! solidkit - SOLID design principles, corrected
//!
//! The centrepiece is a closed set of shapes (rectangle, square, circle)
//! with validated, immutable dimensions and one `area` dispatch, so any
//! code written against `Shape` works for every variant. Smaller modules
//! show open/closed vehicles, segregated phone capabilities, an injected
//! payment processor and a todo list that does not persist itself.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod parser;
pub mod presentation;

// Re-exports for convenience
pub use config::{Config, OutputFormat};
pub use domain::entities::{area, total_area, Circle, Rectangle, Shape, Square};
pub use domain::value_objects::{Dimension, DimensionIssue, ShapeKind};
pub use error::{SolidError, SolidResult};
pub use parser::{parse_descriptor, parse_descriptors, parse_shapes, ShapeDescriptor};
