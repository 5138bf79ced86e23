//! Output Rendering
//!
//! Provides a unified interface for rendering results to different formats.
//! Renderers write to any `io::Write` so they can be exercised without a
//! terminal.

use std::io::{self, Write};

use crate::application::{AreaReport, PurchaseOutcome, PurchaseStatus};
use crate::config::OutputFormat;
use crate::domain::entities::{Capability, TodoList, Vehicle};

/// Result of trying one capability on a phone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneAction {
    pub capability: Capability,
    pub supported: bool,
    pub detail: String,
}

/// What the `phone` command found out about a device
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneReport {
    pub model: String,
    pub capabilities: Vec<Capability>,
    pub actions: Vec<PhoneAction>,
}

/// Trait for rendering command results
pub trait Renderer {
    fn areas(&self, out: &mut dyn Write, report: &AreaReport, include_total: bool)
        -> io::Result<()>;

    fn range(&self, out: &mut dyn Write, vehicle: &dyn Vehicle) -> io::Result<()>;

    fn phone(&self, out: &mut dyn Write, report: &PhoneReport) -> io::Result<()>;

    fn purchase(&self, out: &mut dyn Write, outcome: &PurchaseOutcome) -> io::Result<()>;

    fn todo(&self, out: &mut dyn Write, name: &str, list: &TodoList) -> io::Result<()>;
}

/// Plain text renderer
pub struct TextRenderer {
    /// Decimal places for real numbers
    pub precision: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self { precision: 3 }
    }
}

impl TextRenderer {
    fn number(&self, value: f64) -> String {
        format!("{:.*}", self.precision, value)
    }
}

impl Renderer for TextRenderer {
    fn areas(
        &self,
        out: &mut dyn Write,
        report: &AreaReport,
        include_total: bool,
    ) -> io::Result<()> {
        for area in report.areas() {
            writeln!(out, "{}", self.number(area))?;
        }
        if include_total {
            writeln!(out, "total {}", self.number(report.total()))?;
        }
        Ok(())
    }

    fn range(&self, out: &mut dyn Write, vehicle: &dyn Vehicle) -> io::Result<()> {
        writeln!(out, "{} {}", vehicle.name(), self.number(vehicle.range()))
    }

    fn phone(&self, out: &mut dyn Write, report: &PhoneReport) -> io::Result<()> {
        let caps: Vec<String> = report.capabilities.iter().map(|c| c.to_string()).collect();
        writeln!(out, "model: {}", report.model)?;
        writeln!(out, "capabilities: {}", caps.join(", "))?;
        for action in &report.actions {
            let mark = if action.supported { "ok" } else { "unsupported" };
            writeln!(out, "{}: {} ({})", action.capability, mark, action.detail)?;
        }
        Ok(())
    }

    fn purchase(&self, out: &mut dyn Write, outcome: &PurchaseOutcome) -> io::Result<()> {
        let status = match outcome.status {
            PurchaseStatus::Approved => "approved",
            PurchaseStatus::Declined => "declined",
        };
        write!(out, "{} {} via {}", status, outcome.amount, outcome.processor)?;
        if let Some(reference) = &outcome.reference {
            write!(out, " (ref {})", reference)?;
        }
        writeln!(out)
    }

    fn todo(&self, out: &mut dyn Write, name: &str, list: &TodoList) -> io::Result<()> {
        writeln!(out, "{}: {}", name, list)
    }
}

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut dyn Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).map_err(io::Error::other)?;
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")
}

/// NDJSON renderer for scripting
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn areas(
        &self,
        out: &mut dyn Write,
        report: &AreaReport,
        include_total: bool,
    ) -> io::Result<()> {
        for (index, entry) in report.entries.iter().enumerate() {
            let mut event = serde_json::to_value(entry).map_err(io::Error::other)?;
            if let Some(obj) = event.as_object_mut() {
                obj.insert("event".to_string(), "area".into());
                obj.insert("index".to_string(), index.into());
            }
            write_event(out, &event)?;
        }
        if include_total {
            write_event(
                out,
                &serde_json::json!({
                    "event": "total",
                    "count": report.len(),
                    "area": report.total(),
                }),
            )?;
        }
        Ok(())
    }

    fn range(&self, out: &mut dyn Write, vehicle: &dyn Vehicle) -> io::Result<()> {
        write_event(
            out,
            &serde_json::json!({
                "event": "range",
                "vehicle": vehicle.name(),
                "range": vehicle.range(),
            }),
        )
    }

    fn phone(&self, out: &mut dyn Write, report: &PhoneReport) -> io::Result<()> {
        write_event(
            out,
            &serde_json::json!({
                "event": "phone",
                "model": report.model,
                "capabilities": report.capabilities,
            }),
        )?;
        for action in &report.actions {
            write_event(
                out,
                &serde_json::json!({
                    "event": "capability",
                    "capability": action.capability,
                    "supported": action.supported,
                    "detail": action.detail,
                }),
            )?;
        }
        Ok(())
    }

    fn purchase(&self, out: &mut dyn Write, outcome: &PurchaseOutcome) -> io::Result<()> {
        write_event(
            out,
            &serde_json::json!({
                "event": "purchase",
                "approved": outcome.is_approved(),
                "amount": outcome.amount.to_string(),
                "processor": outcome.processor,
                "reference": outcome.reference,
            }),
        )
    }

    fn todo(&self, out: &mut dyn Write, name: &str, list: &TodoList) -> io::Result<()> {
        write_event(
            out,
            &serde_json::json!({
                "event": "todo",
                "list": name,
                "items": list.items(),
            }),
        )
    }
}

/// Create a renderer based on format
pub fn create_renderer(format: OutputFormat, precision: usize) -> Box<dyn Renderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer { precision }),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}
