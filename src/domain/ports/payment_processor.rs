//! Payment Processor Port
//!
//! This trait defines the interface a purchase handler charges through.
//! Concrete processors are chosen by the caller and injected at construction.

use crate::domain::value_objects::Money;

/// What the buyer supplied at checkout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentDetails {
    /// Account, card alias or wallet handle
    pub account: String,
    /// Free-form note passed to the processor
    pub reference: Option<String>,
}

impl PaymentDetails {
    pub fn new(account: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            reference: None,
        }
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }
}

/// Trait for requesting a payment.
///
/// Implementations can be:
/// - `ApproveAll`: Accepts every request
/// - `DeclineAll`: Rejects every request
/// - `LimitProcessor`: Accepts amounts up to a ceiling
pub trait PaymentProcessor: Send + Sync {
    /// Short identifier used in output
    fn name(&self) -> &str;

    /// Request `amount` from the account in `details`. `true` means approved.
    fn request_payment(&self, details: &PaymentDetails, amount: Money) -> bool;
}

impl<P: PaymentProcessor + ?Sized> PaymentProcessor for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn request_payment(&self, details: &PaymentDetails, amount: Money) -> bool {
        (**self).request_payment(details, amount)
    }
}

/// Processor that approves everything.
pub struct ApproveAll;

impl PaymentProcessor for ApproveAll {
    fn name(&self) -> &str {
        "approve"
    }

    fn request_payment(&self, _details: &PaymentDetails, _amount: Money) -> bool {
        true
    }
}

/// Processor that declines everything.
pub struct DeclineAll;

impl PaymentProcessor for DeclineAll {
    fn name(&self) -> &str {
        "decline"
    }

    fn request_payment(&self, _details: &PaymentDetails, _amount: Money) -> bool {
        false
    }
}

/// Processor that approves amounts at or below `limit`.
pub struct LimitProcessor {
    pub limit: Money,
}

impl LimitProcessor {
    pub fn new(limit: Money) -> Self {
        Self { limit }
    }
}

impl PaymentProcessor for LimitProcessor {
    fn name(&self) -> &str {
        "limit"
    }

    fn request_payment(&self, details: &PaymentDetails, amount: Money) -> bool {
        !details.account.trim().is_empty() && amount <= self.limit
    }
}
