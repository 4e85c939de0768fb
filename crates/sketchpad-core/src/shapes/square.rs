//! Square shape.

use super::{DrawOptions, Drawable};
use crate::context::DrawContext;
use crate::point::Point;
use kurbo::{BezPath, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// An axis-aligned square anchored at its first point.
///
/// The edge is twice the sum of the signed coordinate deltas between the two
/// points, not the distance between them. That formula looks like a bug but
/// it is what the canvas has always drawn, so it is kept as is;
/// [`Square::euclidean_edge`] gives the distance-based value for comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Square {
    pub corner: Point,
    /// Signed edge length. Negative edges extend left and up.
    pub edge: f64,
}

impl Square {
    /// Create a square anchored at `corner`, sized by `edge_to`.
    pub fn new(corner: Point, edge_to: &Point) -> Self {
        let delta_sum = (corner.x() - edge_to.x()) + (corner.y() - edge_to.y());
        Self {
            corner,
            edge: delta_sum + delta_sum,
        }
    }

    /// Edge length a geometrically correct square through both points would
    /// have: the distance between them.
    pub fn euclidean_edge(corner: &Point, edge_to: &Point) -> f64 {
        corner.distance(edge_to)
    }

    /// Opposite corner of the square.
    pub fn far_corner(&self) -> kurbo::Point {
        self.corner.to_kurbo() + Vec2::new(self.edge, self.edge)
    }
}

impl Drawable for Square {
    fn draw(&self, ctx: &mut dyn DrawContext, _options: &DrawOptions) {
        ctx.apply_options(&DrawOptions::shape_default());
        ctx.begin_path();
        ctx.rect(self.corner.to_kurbo(), self.edge, self.edge);
        ctx.stroke();
    }

    fn to_path(&self) -> BezPath {
        let origin = self.corner.to_kurbo();
        let far = self.far_corner();
        let mut path = BezPath::new();
        path.move_to(origin);
        path.line_to((far.x, origin.y));
        path.line_to(far);
        path.line_to((origin.x, far.y));
        path.close_path();
        path
    }

    fn bounds(&self) -> Rect {
        Rect::from_points(self.corner.to_kurbo(), self.far_corner())
    }
}
