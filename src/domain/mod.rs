//! Domain Layer
//!
//! Pure types and rules without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Shapes, vehicles, phones, todo lists
//! - `value_objects/` - Immutable value types (Dimension, ShapeKind, Money)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Immutable values** - Entities are fixed at construction unless they are containers
//! 3. **Ports & Adapters** - Anything swappable goes through a trait-defined port

pub mod entities;
pub mod ports;
pub mod value_objects;
