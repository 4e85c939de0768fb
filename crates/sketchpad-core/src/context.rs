//! 2D drawing surface abstraction.
//!
//! Mirrors the subset of the HTML canvas 2D API used by the shapes, so the
//! same drawing code targets the browser canvas and the native backends.

use crate::shapes::DrawOptions;
use kurbo::Point;
use peniko::Color;
use serde::{Deserialize, Serialize};

/// Corner style where two path segments meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

impl LineJoin {
    /// Keyword used by the canvas `lineJoin` property and SVG `stroke-linejoin`.
    pub fn as_str(self) -> &'static str {
        match self {
            LineJoin::Miter => "miter",
            LineJoin::Round => "round",
            LineJoin::Bevel => "bevel",
        }
    }
}

/// A mutable 2D drawing surface.
///
/// Path operations build the current path; [`DrawContext::stroke`] paints it
/// with the current style. None of the operations report failure.
pub trait DrawContext {
    fn set_line_width(&mut self, width: f64);

    fn set_stroke_color(&mut self, color: Color);

    fn set_line_join(&mut self, join: LineJoin);

    /// Discard the current path and start a new one.
    fn begin_path(&mut self);

    fn move_to(&mut self, point: Point);

    fn line_to(&mut self, point: Point);

    fn close_path(&mut self);

    /// Add a closed rectangle subpath. Negative sizes extend left/up.
    fn rect(&mut self, origin: Point, width: f64, height: f64);

    /// Add a circular arc, angles in radians measured clockwise from +x.
    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64);

    /// Stroke the current path with the current style.
    fn stroke(&mut self);

    /// Apply line width, stroke color and join from a set of options.
    fn apply_options(&mut self, options: &DrawOptions) {
        self.set_line_width(options.line_width);
        self.set_stroke_color(options.stroke_color.into());
        self.set_line_join(options.line_join);
    }
}
