use std::io;

use anyhow::Result;

use solidkit::domain::entities::{HybridVehicle, StandardVehicle, Vehicle};

use super::Context;

pub fn cmd_range(
    ctx: &Context,
    capacity: f64,
    efficiency: f64,
    electric: Option<f64>,
) -> Result<()> {
    let vehicle: Box<dyn Vehicle> = match electric {
        Some(electric) => Box::new(HybridVehicle::new(capacity, efficiency, electric)?),
        None => Box::new(StandardVehicle::new(capacity, efficiency)?),
    };

    let mut out = io::stdout().lock();
    ctx.renderer().range(&mut out, &*vehicle)?;
    Ok(())
}
