//! Shapes drawn between two pointer positions.

mod circle;
mod line;
mod square;

pub use circle::Circle;
pub use line::Line;
pub use square::Square;

use crate::context::{DrawContext, LineJoin};
use crate::point::Point;
use kurbo::{BezPath, Rect};
use peniko::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn red() -> Self {
        Self::new(255, 0, 0, 255)
    }

    /// CSS color string, e.g. `rgba(255, 0, 0, 1)`.
    pub fn to_css(&self) -> String {
        if self.a == 255 {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            format!(
                "rgba({}, {}, {}, {})",
                self.r,
                self.g,
                self.b,
                f64::from(self.a) / 255.0
            )
        }
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Stroke style passed to [`Drawable::draw`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawOptions {
    pub stroke_color: SerializableColor,
    pub line_join: LineJoin,
    pub line_width: f64,
}

impl DrawOptions {
    /// The style every shape actually draws with.
    pub fn shape_default() -> Self {
        Self {
            stroke_color: SerializableColor::red(),
            line_join: LineJoin::Bevel,
            line_width: 5.0,
        }
    }
}

impl Default for DrawOptions {
    /// Options the canvas hands to shapes on every move.
    fn default() -> Self {
        Self {
            stroke_color: SerializableColor::red(),
            line_join: LineJoin::Round,
            line_width: 1.0,
        }
    }
}

/// Something that can render itself onto a [`DrawContext`].
pub trait Drawable {
    /// Draw into `ctx`.
    ///
    /// NOTE: every shape currently strokes with [`DrawOptions::shape_default`]
    /// and ignores `options`. Callers still pass their options so the
    /// behavior can change in one place.
    fn draw(&self, ctx: &mut dyn DrawContext, options: &DrawOptions);

    /// Geometry of the shape as a kurbo path.
    fn to_path(&self) -> BezPath;

    /// Axis-aligned bounding box.
    fn bounds(&self) -> Rect;
}

/// Which shape the canvas builds between two pointer positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    #[default]
    Square,
    Circle,
    Line,
}

impl ShapeKind {
    /// Cycle to the next shape kind.
    pub fn next(self) -> Self {
        match self {
            ShapeKind::Square => ShapeKind::Circle,
            ShapeKind::Circle => ShapeKind::Line,
            ShapeKind::Line => ShapeKind::Square,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Square => "square",
            ShapeKind::Circle => "circle",
            ShapeKind::Line => "line",
        }
    }

    /// Build a shape of this kind from two points.
    pub fn build(self, start: Point, end: Point) -> Shape {
        match self {
            ShapeKind::Square => Shape::Square(Square::new(start, &end)),
            ShapeKind::Circle => Shape::Circle(Circle::new(start, &end)),
            ShapeKind::Line => Shape::Line(Line::new(start, end)),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a shape name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown shape kind: {0:?} (expected square, circle or line)")]
pub struct ParseShapeKindError(pub String);

impl FromStr for ShapeKind {
    type Err = ParseShapeKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "square" => Ok(ShapeKind::Square),
            "circle" => Ok(ShapeKind::Circle),
            "line" => Ok(ShapeKind::Line),
            _ => Err(ParseShapeKindError(s.to_string())),
        }
    }
}

/// Enum wrapper for all shape types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Circle(Circle),
    Square(Square),
    Line(Line),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Square(_) => ShapeKind::Square,
            Shape::Line(_) => ShapeKind::Line,
        }
    }

    /// Point the shape is anchored at (center, corner or first endpoint).
    pub fn anchor(&self) -> &Point {
        match self {
            Shape::Circle(s) => &s.center,
            Shape::Square(s) => &s.corner,
            Shape::Line(s) => &s.start,
        }
    }
}

impl Drawable for Shape {
    fn draw(&self, ctx: &mut dyn DrawContext, options: &DrawOptions) {
        match self {
            Shape::Circle(s) => s.draw(ctx, options),
            Shape::Square(s) => s.draw(ctx, options),
            Shape::Line(s) => s.draw(ctx, options),
        }
    }

    fn to_path(&self) -> BezPath {
        match self {
            Shape::Circle(s) => s.to_path(),
            Shape::Square(s) => s.to_path(),
            Shape::Line(s) => s.to_path(),
        }
    }

    fn bounds(&self) -> Rect {
        match self {
            Shape::Circle(s) => s.bounds(),
            Shape::Square(s) => s.bounds(),
            Shape::Line(s) => s.bounds(),
        }
    }
}
