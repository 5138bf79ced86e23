//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::{PurchaseHandler, TodoUseCase};
use crate::domain::entities::{FeaturePhone, Phone, Smartphone};
use crate::domain::ports::{ApproveAll, DeclineAll, LimitProcessor, PaymentProcessor};
use crate::domain::value_objects::Money;
use crate::error::{SolidError, SolidResult};
use crate::infrastructure::InMemoryTodoStore;

use super::cli::{PhoneModel, ProcessorKind};

/// Purchase handler over whichever processor the caller picked
pub type ConcretePurchaseHandler = PurchaseHandler<Box<dyn PaymentProcessor>>;

/// Todo use case backed by the in-memory store
pub type ConcreteTodoUseCase = TodoUseCase<InMemoryTodoStore>;

/// Build the payment processor for `kind`.
///
/// `limit` is required for [`ProcessorKind::Limit`] and ignored otherwise.
pub fn create_payment_processor(
    kind: ProcessorKind,
    limit: Option<Money>,
) -> SolidResult<Box<dyn PaymentProcessor>> {
    Ok(match kind {
        ProcessorKind::Approve => Box::new(ApproveAll),
        ProcessorKind::Decline => Box::new(DeclineAll),
        ProcessorKind::Limit => {
            let limit = limit
                .ok_or_else(|| SolidError::invalid_input("the limit processor needs --limit"))?;
            Box::new(LimitProcessor::new(limit))
        }
    })
}

/// Create a purchase handler with its processor injected
pub fn create_purchase_handler(
    kind: ProcessorKind,
    limit: Option<Money>,
) -> SolidResult<ConcretePurchaseHandler> {
    Ok(PurchaseHandler::new(create_payment_processor(kind, limit)?))
}

/// Create a todo use case with a fresh in-memory store
pub fn create_todo_use_case() -> ConcreteTodoUseCase {
    TodoUseCase::new(InMemoryTodoStore::new())
}

/// Create the demo phone for a model choice
pub fn create_phone(model: PhoneModel) -> Box<dyn Phone> {
    match model {
        PhoneModel::Smartphone => Box::new(Smartphone::new("Smartphone", 12)),
        PhoneModel::Feature => Box::new(FeaturePhone::new("Nokia 3310")),
    }
}
