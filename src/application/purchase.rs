//! Purchase Use Case
//!
//! Charges a buyer through whichever [`PaymentProcessor`] it was built with.
//! The handler never names a concrete processor.

use tracing::{debug, info};

use crate::domain::ports::{PaymentDetails, PaymentProcessor};
use crate::domain::value_objects::Money;
use crate::error::{SolidError, SolidResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseStatus {
    Approved,
    Declined,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseOutcome {
    pub status: PurchaseStatus,
    pub amount: Money,
    pub processor: String,
    /// Reference passed in with the payment details
    pub reference: Option<String>,
}

impl PurchaseOutcome {
    pub fn is_approved(&self) -> bool {
        self.status == PurchaseStatus::Approved
    }
}

pub struct PurchaseHandler<P>
where
    P: PaymentProcessor,
{
    processor: P,
}

impl<P> PurchaseHandler<P>
where
    P: PaymentProcessor,
{
    pub fn new(processor: P) -> Self {
        Self { processor }
    }

    /// Request payment and report whether it went through.
    ///
    /// A zero amount is rejected before the processor is contacted.
    pub fn process_payment(
        &self,
        details: &PaymentDetails,
        amount: Money,
    ) -> SolidResult<PurchaseOutcome> {
        if amount == Money::ZERO {
            return Err(SolidError::invalid_input("purchase amount must be positive"));
        }

        debug!(
            processor = self.processor.name(),
            %amount,
            reference = ?details.reference,
            "requesting payment"
        );
        let status = if self.processor.request_payment(details, amount) {
            PurchaseStatus::Approved
        } else {
            PurchaseStatus::Declined
        };
        info!(processor = self.processor.name(), ?status, "payment processed");

        Ok(PurchaseOutcome {
            status,
            amount,
            processor: self.processor.name().to_string(),
            reference: details.reference.clone(),
        })
    }
}
