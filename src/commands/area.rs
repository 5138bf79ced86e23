//! Area command handler
//!
//! Descriptors come from the command line, or from stdin when none are given.

use std::io::{self, Read};

use anyhow::{Context as _, Result};

use solidkit::application::AreaReportUseCase;
use solidkit::parser::{parse_descriptor, parse_descriptors, ShapeDescriptor};

use super::Context;

/// Execute the area command
pub fn cmd_area(ctx: &Context, descriptors: &[String], total: bool) -> Result<()> {
    let parsed = if descriptors.is_empty() {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("failed to read descriptors from stdin")?;
        parse_descriptors(&input)?
    } else {
        from_arguments(descriptors)?
    };

    // Build everything before printing anything
    let report = AreaReportUseCase::new().execute(&parsed)?;

    let mut out = io::stdout().lock();
    ctx.renderer().areas(&mut out, &report, total)?;
    Ok(())
}

/// Each argument is one descriptor; its position stands in for a line number.
fn from_arguments(args: &[String]) -> Result<Vec<ShapeDescriptor>> {
    let mut parsed = Vec::with_capacity(args.len());
    for (i, arg) in args.iter().enumerate() {
        let descriptor = parse_descriptor(arg, i + 1)
            .with_context(|| format!("in descriptor #{} '{}'", i + 1, arg))?;
        parsed.extend(descriptor);
    }
    Ok(parsed)
}
