use std::io;

use anyhow::Result;

use solidkit::domain::ports::PaymentDetails;
use solidkit::domain::value_objects::Money;
use solidkit::presentation::factory::create_purchase_handler;
use solidkit::presentation::ProcessorKind;

use super::Context;

/// Execute the pay command. A declined payment is a normal outcome, not an error.
pub fn cmd_pay(
    ctx: &Context,
    amount: Money,
    processor: ProcessorKind,
    limit: Option<Money>,
    account: &str,
    reference: Option<String>,
) -> Result<()> {
    let mut details = PaymentDetails::new(account);
    if let Some(reference) = reference {
        details = details.with_reference(reference);
    }

    let handler = create_purchase_handler(processor, limit)?;
    let outcome = handler.process_payment(&details, amount)?;

    let mut out = io::stdout().lock();
    ctx.renderer().purchase(&mut out, &outcome)?;
    Ok(())
}
