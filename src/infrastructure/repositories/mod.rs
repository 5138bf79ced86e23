//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod todo;

pub use todo::InMemoryTodoStore;
