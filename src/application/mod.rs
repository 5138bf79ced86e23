//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Receives its infrastructure through constructor parameters
//!
//! ## Use Cases
//!
//! - `AreaReportUseCase` - Descriptors to areas, in input order
//! - `PurchaseHandler` - Charges through an injected `PaymentProcessor`
//! - `TodoUseCase` - Edits a todo list and saves it through a `TodoStore`

pub mod area;
pub mod purchase;
pub mod todo;

pub use area::{AreaEntry, AreaReport, AreaReportUseCase};
pub use purchase::{PurchaseHandler, PurchaseOutcome, PurchaseStatus};
pub use todo::{TodoOptions, TodoUseCase};
