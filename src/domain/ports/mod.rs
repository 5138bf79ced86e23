//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod payment_processor;
pub mod todo_store;

pub use payment_processor::{
    ApproveAll, DeclineAll, LimitProcessor, PaymentDetails, PaymentProcessor,
};
pub use todo_store::TodoStore;
