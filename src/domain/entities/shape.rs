//! Shape Entity
//!
//! A closed tagged variant over rectangles, squares and circles.
//!
//! A square is *not* a rectangle here: it carries only its `side`, so there
//! is no pair of fields that could drift apart. All fields are private and
//! there are no setters; a shape is fixed at construction.

use std::f64::consts::PI;
use std::fmt;

use crate::domain::value_objects::{Dimension, DimensionIssue, ShapeKind};
use crate::error::{SolidError, SolidResult};

/// Validate the `index`-th constructor argument of `kind`.
fn dimension(kind: ShapeKind, index: usize, value: f64) -> SolidResult<Dimension> {
    Dimension::new(value).map_err(|reason| SolidError::InvalidDimension {
        subject: match kind.dimension_names().get(index) {
            Some(name) => format!("{} {}", kind, name),
            None => kind.to_string(),
        },
        reason,
    })
}

/// A shape whose area is not finite is never constructed.
fn finite_area(kind: ShapeKind, area: f64) -> SolidResult<()> {
    if area.is_finite() {
        return Ok(());
    }
    Err(SolidError::InvalidDimension {
        subject: format!("{} area", kind),
        reason: DimensionIssue::Overflow,
    })
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    length: Dimension,
    width: Dimension,
}

impl Rectangle {
    pub fn new(length: f64, width: f64) -> SolidResult<Self> {
        let rectangle = Self {
            length: dimension(ShapeKind::Rectangle, 0, length)?,
            width: dimension(ShapeKind::Rectangle, 1, width)?,
        };
        finite_area(ShapeKind::Rectangle, rectangle.area())?;
        Ok(rectangle)
    }

    pub fn length(&self) -> f64 {
        self.length.get()
    }

    pub fn width(&self) -> f64 {
        self.width.get()
    }

    pub fn area(&self) -> f64 {
        self.length() * self.width()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    side: Dimension,
}

impl Square {
    pub fn new(side: f64) -> SolidResult<Self> {
        let square = Self {
            side: dimension(ShapeKind::Square, 0, side)?,
        };
        finite_area(ShapeKind::Square, square.area())?;
        Ok(square)
    }

    pub fn side(&self) -> f64 {
        self.side.get()
    }

    pub fn area(&self) -> f64 {
        self.side() * self.side()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: Dimension,
}

impl Circle {
    pub fn new(radius: f64) -> SolidResult<Self> {
        let circle = Self {
            radius: dimension(ShapeKind::Circle, 0, radius)?,
        };
        finite_area(ShapeKind::Circle, circle.area())?;
        Ok(circle)
    }

    pub fn radius(&self) -> f64 {
        self.radius.get()
    }

    pub fn area(&self) -> f64 {
        PI * self.radius() * self.radius()
    }
}

/// Any supported shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Rectangle(Rectangle),
    Square(Square),
    Circle(Circle),
}

impl Shape {
    pub fn rectangle(length: f64, width: f64) -> SolidResult<Self> {
        Rectangle::new(length, width).map(Self::Rectangle)
    }

    pub fn square(side: f64) -> SolidResult<Self> {
        Square::new(side).map(Self::Square)
    }

    pub fn circle(radius: f64) -> SolidResult<Self> {
        Circle::new(radius).map(Self::Circle)
    }

    /// Build a shape from its tag and a parameter list.
    ///
    /// Fails with `InvalidDimension` when the parameter count does not match
    /// the variant's arity, before any value is inspected.
    pub fn from_parts(kind: ShapeKind, params: &[f64]) -> SolidResult<Self> {
        if params.len() != kind.arity() {
            return Err(SolidError::InvalidDimension {
                subject: kind.to_string(),
                reason: DimensionIssue::Arity {
                    expected: kind.arity(),
                    found: params.len(),
                },
            });
        }
        match kind {
            ShapeKind::Rectangle => Self::rectangle(params[0], params[1]),
            ShapeKind::Square => Self::square(params[0]),
            ShapeKind::Circle => Self::circle(params[0]),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Rectangle(_) => ShapeKind::Rectangle,
            Self::Square(_) => ShapeKind::Square,
            Self::Circle(_) => ShapeKind::Circle,
        }
    }

    /// Dimensions in constructor order
    pub fn dimensions(&self) -> Vec<f64> {
        match self {
            Self::Rectangle(r) => vec![r.length(), r.width()],
            Self::Square(s) => vec![s.side()],
            Self::Circle(c) => vec![c.radius()],
        }
    }

    pub fn area(&self) -> f64 {
        match self {
            Self::Rectangle(r) => r.area(),
            Self::Square(s) => s.area(),
            Self::Circle(c) => c.area(),
        }
    }
}

impl From<Rectangle> for Shape {
    fn from(r: Rectangle) -> Self {
        Self::Rectangle(r)
    }
}

impl From<Square> for Shape {
    fn from(s: Square) -> Self {
        Self::Square(s)
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Self::Circle(c)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dims: Vec<String> = self.dimensions().iter().map(|d| d.to_string()).collect();
        write!(f, "{}({})", self.kind(), dims.join(", "))
    }
}

/// Area of any shape.
pub fn area(shape: &Shape) -> f64 {
    shape.area()
}

/// Sum of areas over a mixed sequence of shapes.
pub fn total_area<'a, I>(shapes: I) -> f64
where
    I: IntoIterator<Item = &'a Shape>,
{
    shapes.into_iter().map(area).sum()
}
