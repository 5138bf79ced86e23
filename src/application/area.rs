//! Area Report Use Case
//!
//! Turns shape descriptors into areas:
//! 1. Build every shape (validation happens here)
//! 2. Compute each area in input order
//!
//! The report is all-or-nothing: if any descriptor fails, no areas are
//! returned.

use serde::Serialize;
use tracing::{debug, trace};

use crate::domain::entities::{total_area, Shape};
use crate::domain::value_objects::ShapeKind;
use crate::error::SolidResult;
use crate::parser::ShapeDescriptor;

/// One computed area
#[derive(Debug, Clone, PartialEq)]
pub struct AreaEntry {
    pub shape: Shape,
    pub area: f64,
}

#[derive(Debug, Clone, Serialize)]
struct AreaEntryView {
    kind: ShapeKind,
    dimensions: Vec<f64>,
    area: f64,
}

impl Serialize for AreaEntry {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        AreaEntryView {
            kind: self.shape.kind(),
            dimensions: self.shape.dimensions(),
            area: self.area,
        }
        .serialize(serializer)
    }
}

/// Areas in input order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AreaReport {
    pub entries: Vec<AreaEntry>,
}

impl AreaReport {
    pub fn from_shapes(shapes: Vec<Shape>) -> Self {
        let entries = shapes
            .into_iter()
            .map(|shape| {
                let area = shape.area();
                trace!(%shape, area, "computed area");
                AreaEntry { shape, area }
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn areas(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|e| e.area)
    }

    pub fn total(&self) -> f64 {
        total_area(self.entries.iter().map(|e| &e.shape))
    }
}

/// Area report use case
#[derive(Debug, Default)]
pub struct AreaReportUseCase;

impl AreaReportUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Build all shapes, then compute their areas.
    pub fn execute(&self, descriptors: &[ShapeDescriptor]) -> SolidResult<AreaReport> {
        debug!(count = descriptors.len(), "building shapes");
        let shapes = descriptors
            .iter()
            .map(ShapeDescriptor::build)
            .collect::<SolidResult<Vec<_>>>()?;
        Ok(AreaReport::from_shapes(shapes))
    }
}
