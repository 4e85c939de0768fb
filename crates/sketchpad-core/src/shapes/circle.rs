//! Circle shape.

use super::{DrawOptions, Drawable};
use crate::context::DrawContext;
use crate::point::Point;
use kurbo::{BezPath, Rect, Shape as KurboShape};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// A circle whose radius reaches from the center to a second point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    /// Create a circle centered at `center` passing through `radius_to`.
    pub fn new(center: Point, radius_to: &Point) -> Self {
        let radius = center.distance(radius_to);
        Self { center, radius }
    }

    /// Get as a kurbo Circle.
    pub fn as_kurbo(&self) -> kurbo::Circle {
        kurbo::Circle::new(self.center.to_kurbo(), self.radius)
    }
}

impl Drawable for Circle {
    fn draw(&self, ctx: &mut dyn DrawContext, _options: &DrawOptions) {
        ctx.apply_options(&DrawOptions::shape_default());
        ctx.begin_path();
        ctx.arc(self.center.to_kurbo(), self.radius, 0.0, TAU);
        ctx.stroke();
    }

    fn to_path(&self) -> BezPath {
        self.as_kurbo().to_path(0.1)
    }

    fn bounds(&self) -> Rect {
        self.as_kurbo().bounding_box()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::testing::CallLog;

    #[test]
    fn test_radius_is_euclidean() {
        let cases = [
            ((0.0, 0.0), (3.0, 4.0), 5.0),
            ((10.0, 10.0), (10.0, 10.0), 0.0),
            ((-2.0, 1.0), (4.0, -7.0), 10.0),
            ((1.5, 2.5), (1.5, -0.5), 3.0),
        ];
        for ((cx, cy), (px, py), expected) in cases {
            let circle = Circle::new(Point::new(cx, cy), &Point::new(px, py));
            assert!((circle.radius - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_draw_full_arc_with_fixed_style() {
        let circle = Circle::new(Point::new(10.0, 20.0), &Point::new(13.0, 24.0));
        let mut log = CallLog::default();
        circle.draw(&mut log, &DrawOptions::default());
        assert_eq!(
            log.calls,
            vec![
                "line_width 5".to_string(),
                "stroke_color rgb(255, 0, 0)".to_string(),
                "line_join bevel".to_string(),
                "begin_path".to_string(),
                format!("arc 10,20 r=5 0..{}", TAU),
                "stroke".to_string(),
            ]
        );
    }

    #[test]
    fn test_bounds() {
        let circle = Circle::new(Point::new(0.0, 0.0), &Point::new(0.0, 2.0));
        let bounds = circle.bounds();
        assert!((bounds.x0 + 2.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 2.0).abs() < f64::EPSILON);
    }
}
