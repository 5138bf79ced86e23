//! Vehicle Entities
//!
//! Each vehicle kind computes its own range. Adding a new kind means adding
//! a new `Vehicle` impl; nothing that consumes `&dyn Vehicle` changes.

use crate::domain::value_objects::{non_negative, Dimension, DimensionIssue};
use crate::error::{SolidError, SolidResult};

/// Anything with a driving range
pub trait Vehicle {
    /// Short human-readable kind name
    fn name(&self) -> &str;

    /// Distance the vehicle can travel on a full charge/tank
    fn range(&self) -> f64;
}

fn dimension(subject: &str, value: f64) -> SolidResult<Dimension> {
    Dimension::new(value).map_err(|reason| SolidError::InvalidDimension {
        subject: subject.to_string(),
        reason,
    })
}

fn finite_range(range: f64) -> SolidResult<()> {
    if range.is_finite() {
        return Ok(());
    }
    Err(SolidError::InvalidDimension {
        subject: "range".to_string(),
        reason: DimensionIssue::Overflow,
    })
}

/// Fuel-only vehicle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardVehicle {
    fuel_capacity: Dimension,
    fuel_efficiency: Dimension,
}

impl StandardVehicle {
    pub fn new(fuel_capacity: f64, fuel_efficiency: f64) -> SolidResult<Self> {
        let vehicle = Self {
            fuel_capacity: dimension("fuel capacity", fuel_capacity)?,
            fuel_efficiency: dimension("fuel efficiency", fuel_efficiency)?,
        };
        finite_range(vehicle.fuel_range())?;
        Ok(vehicle)
    }

    pub fn fuel_capacity(&self) -> f64 {
        self.fuel_capacity.get()
    }

    pub fn fuel_efficiency(&self) -> f64 {
        self.fuel_efficiency.get()
    }

    fn fuel_range(&self) -> f64 {
        self.fuel_capacity() * self.fuel_efficiency()
    }
}

impl Vehicle for StandardVehicle {
    fn name(&self) -> &str {
        "standard"
    }

    fn range(&self) -> f64 {
        self.fuel_range()
    }
}

/// Fuel vehicle with an additional electric range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HybridVehicle {
    fuel: StandardVehicle,
    electric_range: f64,
}

impl HybridVehicle {
    pub fn new(fuel_capacity: f64, fuel_efficiency: f64, electric_range: f64) -> SolidResult<Self> {
        let fuel = StandardVehicle::new(fuel_capacity, fuel_efficiency)?;
        let electric_range =
            non_negative(electric_range).map_err(|reason| SolidError::InvalidDimension {
                subject: "electric range".to_string(),
                reason,
            })?;
        let vehicle = Self {
            fuel,
            electric_range,
        };
        finite_range(vehicle.range())?;
        Ok(vehicle)
    }

    pub fn electric_range(&self) -> f64 {
        self.electric_range
    }
}

impl Vehicle for HybridVehicle {
    fn name(&self) -> &str {
        "hybrid"
    }

    fn range(&self) -> f64 {
        self.fuel.fuel_range() + self.electric_range
    }
}

/// Combined range of a fleet of any vehicle kinds.
pub fn fleet_range(vehicles: &[&dyn Vehicle]) -> f64 {
    vehicles.iter().map(|v| v.range()).sum()
}
