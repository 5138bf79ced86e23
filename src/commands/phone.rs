//! Phone command handler
//!
//! Lists a device's capabilities, then tries each requested one. Missing
//! capabilities show up as `unsupported` lines rather than being skipped.

use std::io;

use anyhow::Result;

use solidkit::domain::entities::{
    try_call, try_connect_to_wifi, try_take_photo, Capability, CapabilityResult, Phone,
};
use solidkit::presentation::factory::create_phone;
use solidkit::presentation::{PhoneAction, PhoneModel, PhoneReport};

use super::Context;

pub fn cmd_phone(
    ctx: &Context,
    model: PhoneModel,
    call: Option<&str>,
    photo: bool,
    wifi: Option<&str>,
) -> Result<()> {
    let phone = create_phone(model);
    let report = build_report(&*phone, call, photo, wifi)?;

    let mut out = io::stdout().lock();
    ctx.renderer().phone(&mut out, &report)?;
    Ok(())
}

fn build_report(
    phone: &dyn Phone,
    call: Option<&str>,
    photo: bool,
    wifi: Option<&str>,
) -> Result<PhoneReport> {
    let mut actions = Vec::new();

    if let Some(number) = call {
        actions.push(action(Capability::Call, try_call(phone, number)?, |r| {
            format!("dialled {}", r.number)
        }));
    }
    if photo {
        actions.push(action(Capability::Camera, try_take_photo(phone), |p| {
            format!("photo taken at {} MP", p.megapixels)
        }));
    }
    if let Some(ssid) = wifi {
        actions.push(action(
            Capability::Wifi,
            try_connect_to_wifi(phone, ssid)?,
            |s| format!("joined {}", s.ssid),
        ));
    }

    Ok(PhoneReport {
        model: phone.model().to_string(),
        capabilities: phone.capabilities(),
        actions,
    })
}

fn action<T, F>(capability: Capability, result: CapabilityResult<T>, describe: F) -> PhoneAction
where
    F: FnOnce(&T) -> String,
{
    match result {
        CapabilityResult::Done(value) => PhoneAction {
            capability,
            supported: true,
            detail: describe(&value),
        },
        CapabilityResult::Unsupported { model, capability } => PhoneAction {
            capability,
            supported: false,
            detail: format!("{} has no {} support", model, capability),
        },
    }
}
