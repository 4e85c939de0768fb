//! Line shape.

use super::{DrawOptions, Drawable};
use crate::context::DrawContext;
use crate::point::Point;
use kurbo::{BezPath, Rect};
use serde::{Deserialize, Serialize};

/// A straight segment between two points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Get as a kurbo Line.
    pub fn as_kurbo(&self) -> kurbo::Line {
        kurbo::Line::new(self.start.to_kurbo(), self.end.to_kurbo())
    }
}

impl Drawable for Line {
    /// Appends a closed segment to the current path and strokes it.
    ///
    /// No `begin_path` is issued, so consecutive lines accumulate in the
    /// surface's current path.
    fn draw(&self, ctx: &mut dyn DrawContext, _options: &DrawOptions) {
        ctx.apply_options(&DrawOptions::shape_default());
        ctx.move_to(self.start.to_kurbo());
        ctx.line_to(self.end.to_kurbo());
        ctx.close_path();
        ctx.stroke();
    }

    fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.start.to_kurbo());
        path.line_to(self.end.to_kurbo());
        path.close_path();
        path
    }

    fn bounds(&self) -> Rect {
        Rect::from_points(self.start.to_kurbo(), self.end.to_kurbo())
    }
}
