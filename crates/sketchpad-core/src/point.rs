//! Canvas point with an optional name tag.

use serde::{Deserialize, Serialize};
use std::fmt;

fn default_name() -> String {
    Point::DEFAULT_NAME.to_string()
}

/// A 2D coordinate.
///
/// Coordinates are read-only once constructed; the only mutation is
/// [`Point::offset`], which translates the point into another frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
    /// Free-form tag, `"point"` unless set.
    #[serde(default = "default_name")]
    pub name: String,
}

impl Point {
    /// Name given to points created with [`Point::new`].
    pub const DEFAULT_NAME: &'static str = "point";

    /// Create a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            name: default_name(),
        }
    }

    /// Create a named point.
    pub fn named(x: f64, y: f64, name: impl Into<String>) -> Self {
        Self {
            x,
            y,
            name: name.into(),
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Translate the point by subtracting an element offset.
    pub fn offset(&mut self, offset_left: f64, offset_top: f64) {
        self.x -= offset_left;
        self.y -= offset_top;
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point) -> f64 {
        self.to_kurbo().distance(other.to_kurbo())
    }

    /// Get as a kurbo Point.
    pub fn to_kurbo(&self) -> kurbo::Point {
        kurbo::Point::new(self.x, self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl From<kurbo::Point> for Point {
    fn from(point: kurbo::Point) -> Self {
        Self::new(point.x, point.y)
    }
}

impl From<&Point> for kurbo::Point {
    fn from(point: &Point) -> Self {
        point.to_kurbo()
    }
}
