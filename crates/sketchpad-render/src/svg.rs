//! SVG document backend.
//!
//! Follows canvas semantics: path operations build a current path and every
//! `stroke` paints the whole current path, emitted as one `<path>` element.

use crate::renderer::{RenderResult, StrokeParams};
use kurbo::{Arc, BezPath, Point, Vec2};
use peniko::Color;
use sketchpad_core::{CanvasSize, DrawContext, LineJoin};
use std::io::Write;
use svg::Document;
use svg::node::element::Path;

/// Curve flattening tolerance for arcs.
const ARC_TOLERANCE: f64 = 0.1;

/// Builds an SVG document from draw calls.
#[derive(Debug, Clone)]
pub struct SvgContext {
    size: CanvasSize,
    params: StrokeParams,
    path: BezPath,
    elements: Vec<Path>,
}

impl SvgContext {
    pub fn new(size: CanvasSize) -> Self {
        Self {
            size,
            params: StrokeParams::default(),
            path: BezPath::new(),
            elements: Vec::new(),
        }
    }

    /// Number of `<path>` elements emitted so far.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Build the SVG document.
    pub fn document(&self) -> Document {
        let (width, height) = (self.size.width, self.size.height);
        self.elements.iter().cloned().fold(
            Document::new()
                .set("width", width)
                .set("height", height)
                .set("viewBox", (0, 0, width, height)),
            |document, element| document.add(element),
        )
    }

    /// Render the SVG document as a string.
    pub fn to_svg_string(&self) -> String {
        self.document().to_string()
    }

    /// Write the document to `writer`.
    pub fn write_to(&self, writer: &mut impl Write) -> RenderResult<()> {
        svg::write(&mut *writer, &self.document())?;
        writer.flush()?;
        Ok(())
    }

    fn ensure_subpath(&mut self, point: Point) -> bool {
        if self.path.elements().is_empty() {
            self.path.move_to(point);
            true
        } else {
            false
        }
    }

    /// `<path>` element for the current path in the current stroke style.
    fn stroked_path(&self) -> Path {
        let c = self.params.color;
        let element = Path::new()
            .set("d", self.path.to_svg())
            .set("fill", "none")
            .set("stroke", format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b))
            .set("stroke-width", self.params.width)
            .set("stroke-linejoin", self.params.join.as_str());
        if c.a == 255 {
            element
        } else {
            element.set("stroke-opacity", f64::from(c.a) / 255.0)
        }
    }
}

impl DrawContext for SvgContext {
    fn set_line_width(&mut self, width: f64) {
        self.params.width = width;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.params.set_color(color);
    }

    fn set_line_join(&mut self, join: LineJoin) {
        self.params.join = join;
    }

    fn begin_path(&mut self) {
        self.path = BezPath::new();
    }

    fn move_to(&mut self, point: Point) {
        self.path.move_to(point);
    }

    fn line_to(&mut self, point: Point) {
        if !self.ensure_subpath(point) {
            self.path.line_to(point);
        }
    }

    fn close_path(&mut self) {
        if !self.path.elements().is_empty() {
            self.path.close_path();
        }
    }

    fn rect(&mut self, origin: Point, width: f64, height: f64) {
        self.path.move_to(origin);
        self.path.line_to((origin.x + width, origin.y));
        self.path.line_to((origin.x + width, origin.y + height));
        self.path.line_to((origin.x, origin.y + height));
        self.path.close_path();
    }

    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64) {
        let start = center + Vec2::from_angle(start_angle) * radius;
        if !self.ensure_subpath(start) {
            self.path.line_to(start);
        }
        let arc = Arc::new(
            center,
            Vec2::new(radius, radius),
            start_angle,
            end_angle - start_angle,
            0.0,
        );
        self.path.extend(arc.append_iter(ARC_TOLERANCE));
    }

    fn stroke(&mut self) {
        if self.path.elements().is_empty() {
            return;
        }
        let element = self.stroked_path();
        self.elements.push(element);
    }
}
