//! Browser canvas backend.

use crate::renderer::{RenderResult, RendererError};
use kurbo::Point;
use peniko::Color;
use sketchpad_core::shapes::SerializableColor;
use sketchpad_core::{DrawContext, LineJoin};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Fetch the 2D rendering context of a canvas element.
pub fn context_2d(canvas: &HtmlCanvasElement) -> RenderResult<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| RendererError::ContextUnavailable(format!("{e:?}")))?
        .ok_or_else(|| RendererError::ContextUnavailable("canvas has no 2d context".to_string()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| RendererError::ContextUnavailable("not a 2d context".to_string()))
}

/// [`DrawContext`] over a browser `CanvasRenderingContext2d`.
pub struct WebContext<'a> {
    ctx: &'a CanvasRenderingContext2d,
}

impl<'a> WebContext<'a> {
    pub fn new(ctx: &'a CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl DrawContext for WebContext<'_> {
    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.ctx
            .set_stroke_style_str(&SerializableColor::from(color).to_css());
    }

    fn set_line_join(&mut self, join: LineJoin) {
        self.ctx.set_line_join(join.as_str());
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, point: Point) {
        self.ctx.move_to(point.x, point.y);
    }

    fn line_to(&mut self, point: Point) {
        self.ctx.line_to(point.x, point.y);
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn rect(&mut self, origin: Point, width: f64, height: f64) {
        self.ctx.rect(origin.x, origin.y, width, height);
    }

    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64) {
        // Only fails for a negative radius, which a distance never is.
        if let Err(e) = self.ctx.arc(center.x, center.y, radius, start_angle, end_angle) {
            log::debug!("arc rejected: {e:?}");
        }
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }
}
