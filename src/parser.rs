//! Shape descriptor parser
//!
//! A descriptor is a shape tag followed by its numeric parameters:
//!
//! ```text
//! rectangle:1,2
//! square 2
//! circle: 2.5
//! # comments and blank lines are skipped
//! ```
//!
//! The tag is separated from the parameters by `:` or whitespace, and the
//! parameters by `,` or whitespace. Parsing only checks syntax; dimension
//! validation happens when a descriptor is built into a [`Shape`].

use crate::domain::entities::Shape;
use crate::domain::value_objects::ShapeKind;
use crate::error::{SolidError, SolidResult};

/// Comment marker for descriptor lists
const COMMENT_PREFIX: char = '#';

/// A parsed but not yet validated shape
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeDescriptor {
    pub kind: ShapeKind,
    pub params: Vec<f64>,
    /// 1-indexed source line (1 for command-line arguments)
    pub line: usize,
}

impl ShapeDescriptor {
    /// Validate parameters and construct the shape
    pub fn build(&self) -> SolidResult<Shape> {
        Shape::from_parts(self.kind, &self.params)
    }
}

/// Parse a single descriptor. Returns `Ok(None)` for blank or comment lines.
pub fn parse_descriptor(text: &str, line: usize) -> SolidResult<Option<ShapeDescriptor>> {
    let text = text.trim();
    if text.is_empty() || text.starts_with(COMMENT_PREFIX) {
        return Ok(None);
    }

    let split_at = text
        .find(|c: char| c == ':' || c.is_whitespace())
        .unwrap_or(text.len());
    let (tag, rest) = text.split_at(split_at);
    if tag.is_empty() {
        return Err(SolidError::EmptyDescriptor { line });
    }
    let rest = rest.trim_start().strip_prefix(':').unwrap_or(rest);

    let kind: ShapeKind = tag.parse()?;
    let params = rest
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(parse_number)
        .collect::<SolidResult<Vec<f64>>>()?;

    Ok(Some(ShapeDescriptor { kind, params, line }))
}

/// Parse a multi-line descriptor list
pub fn parse_descriptors(content: &str) -> SolidResult<Vec<ShapeDescriptor>> {
    let mut descriptors = Vec::new();
    for (i, line) in content.lines().enumerate() {
        if let Some(descriptor) = parse_descriptor(line, i + 1)? {
            descriptors.push(descriptor);
        }
    }
    Ok(descriptors)
}

/// Parse descriptors and build every shape, failing on the first error.
pub fn parse_shapes(content: &str) -> SolidResult<Vec<Shape>> {
    parse_descriptors(content)?
        .iter()
        .map(ShapeDescriptor::build)
        .collect()
}

fn parse_number(value: &str) -> SolidResult<f64> {
    value.parse::<f64>().map_err(|_| SolidError::MalformedNumber {
        value: value.to_string(),
    })
}
