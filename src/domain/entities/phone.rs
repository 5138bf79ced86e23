//! Phone Entities
//!
//! Calling, taking photos and joining Wi-Fi are separate capability traits.
//! A device implements only what it can do; asking a device for a capability
//! it lacks yields [`CapabilityResult::Unsupported`], never a silent no-op.

use std::fmt;

use serde::Serialize;

use crate::error::{SolidError, SolidResult};

/// A single segment of phone functionality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    Call,
    Camera,
    Wifi,
}

impl Capability {
    pub const ALL: [Capability; 3] = [Capability::Call, Capability::Camera, Capability::Wifi];
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Call => "call",
            Self::Camera => "camera",
            Self::Wifi => "wifi",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallReceipt {
    pub model: String,
    pub number: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub model: String,
    pub megapixels: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WifiSession {
    pub model: String,
    pub ssid: String,
}

pub trait Caller {
    fn call(&self, number: &str) -> SolidResult<CallReceipt>;
}

pub trait Camera {
    fn take_photo(&self) -> Photo;
}

pub trait WifiClient {
    fn connect_to_wifi(&self, ssid: &str) -> SolidResult<WifiSession>;
}

/// A device exposing whichever capability segments it has
pub trait Phone {
    fn model(&self) -> &str;

    fn as_caller(&self) -> Option<&dyn Caller> {
        None
    }

    fn as_camera(&self) -> Option<&dyn Camera> {
        None
    }

    fn as_wifi(&self) -> Option<&dyn WifiClient> {
        None
    }

    fn supports(&self, capability: Capability) -> bool {
        match capability {
            Capability::Call => self.as_caller().is_some(),
            Capability::Camera => self.as_camera().is_some(),
            Capability::Wifi => self.as_wifi().is_some(),
        }
    }

    fn capabilities(&self) -> Vec<Capability> {
        Capability::ALL
            .into_iter()
            .filter(|c| self.supports(*c))
            .collect()
    }
}

/// Outcome of invoking a capability on a device that may not have it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapabilityResult<T> {
    Done(T),
    Unsupported {
        model: String,
        capability: Capability,
    },
}

impl<T> CapabilityResult<T> {
    pub fn is_supported(&self) -> bool {
        matches!(self, Self::Done(_))
    }

    fn unsupported(phone: &dyn Phone, capability: Capability) -> Self {
        Self::Unsupported {
            model: phone.model().to_string(),
            capability,
        }
    }
}

pub fn try_call(phone: &dyn Phone, number: &str) -> SolidResult<CapabilityResult<CallReceipt>> {
    match phone.as_caller() {
        Some(caller) => caller.call(number).map(CapabilityResult::Done),
        None => Ok(CapabilityResult::unsupported(phone, Capability::Call)),
    }
}

pub fn try_take_photo(phone: &dyn Phone) -> CapabilityResult<Photo> {
    match phone.as_camera() {
        Some(camera) => CapabilityResult::Done(camera.take_photo()),
        None => CapabilityResult::unsupported(phone, Capability::Camera),
    }
}

pub fn try_connect_to_wifi(
    phone: &dyn Phone,
    ssid: &str,
) -> SolidResult<CapabilityResult<WifiSession>> {
    match phone.as_wifi() {
        Some(wifi) => wifi.connect_to_wifi(ssid).map(CapabilityResult::Done),
        None => Ok(CapabilityResult::unsupported(phone, Capability::Wifi)),
    }
}

/// Accepts digits with optional leading `+` and `-`/space separators.
fn validate_number(number: &str) -> SolidResult<String> {
    let trimmed = number.trim();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let valid = digits.chars().any(|c| c.is_ascii_digit())
        && digits
            .chars()
            .all(|c| c.is_ascii_digit() || c == '-' || c == ' ');
    if !valid {
        return Err(SolidError::invalid_input(format!(
            "'{}' is not a dialable number",
            number
        )));
    }
    Ok(trimmed.to_string())
}

fn place_call(model: &str, number: &str) -> SolidResult<CallReceipt> {
    Ok(CallReceipt {
        model: model.to_string(),
        number: validate_number(number)?,
    })
}

/// Full-featured phone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Smartphone {
    model: String,
    megapixels: u32,
}

impl Smartphone {
    pub fn new(model: impl Into<String>, megapixels: u32) -> Self {
        Self {
            model: model.into(),
            megapixels,
        }
    }
}

impl Caller for Smartphone {
    fn call(&self, number: &str) -> SolidResult<CallReceipt> {
        place_call(&self.model, number)
    }
}

impl Camera for Smartphone {
    fn take_photo(&self) -> Photo {
        Photo {
            model: self.model.clone(),
            megapixels: self.megapixels,
        }
    }
}

impl WifiClient for Smartphone {
    fn connect_to_wifi(&self, ssid: &str) -> SolidResult<WifiSession> {
        let ssid = ssid.trim();
        if ssid.is_empty() || ssid.len() > 32 {
            return Err(SolidError::invalid_input(
                "SSID must be between 1 and 32 bytes",
            ));
        }
        Ok(WifiSession {
            model: self.model.clone(),
            ssid: ssid.to_string(),
        })
    }
}

impl Phone for Smartphone {
    fn model(&self) -> &str {
        &self.model
    }

    fn as_caller(&self) -> Option<&dyn Caller> {
        Some(self)
    }

    fn as_camera(&self) -> Option<&dyn Camera> {
        Some(self)
    }

    fn as_wifi(&self) -> Option<&dyn WifiClient> {
        Some(self)
    }
}

/// Call-only phone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturePhone {
    model: String,
}

impl FeaturePhone {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
        }
    }
}

impl Caller for FeaturePhone {
    fn call(&self, number: &str) -> SolidResult<CallReceipt> {
        place_call(&self.model, number)
    }
}

impl Phone for FeaturePhone {
    fn model(&self) -> &str {
        &self.model
    }

    fn as_caller(&self) -> Option<&dyn Caller> {
        Some(self)
    }
}
