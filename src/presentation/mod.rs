//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/NDJSON)
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Output rendering abstractions
//!
//! ## Usage
//!
//! ```ignore
//! use solidkit::presentation::factory;
//!
//! // Purchase handler with a declining processor injected
//! let handler = factory::create_purchase_handler(ProcessorKind::Decline, None)?;
//! let outcome = handler.process_payment(&details, amount)?;
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, Commands, PhoneModel, ProcessorKind};
pub use output::{create_renderer, JsonRenderer, PhoneAction, PhoneReport, Renderer, TextRenderer};
