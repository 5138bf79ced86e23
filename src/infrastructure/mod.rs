//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//!
//! ## Structure
//!
//! - `repositories/` - Repository implementations (in-memory todo store)

pub mod repositories;

// Re-export for convenience
pub use repositories::InMemoryTodoStore;
