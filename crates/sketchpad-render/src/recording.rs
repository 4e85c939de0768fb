//! Command recorder backend.

use kurbo::Point;
use peniko::Color;
use serde::{Deserialize, Serialize};
use sketchpad_core::shapes::SerializableColor;
use sketchpad_core::{DrawContext, LineJoin};

/// A single call made against a [`DrawContext`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    SetLineWidth { width: f64 },
    SetStrokeColor { color: SerializableColor },
    SetLineJoin { join: LineJoin },
    BeginPath,
    MoveTo { point: Point },
    LineTo { point: Point },
    ClosePath,
    Rect { origin: Point, width: f64, height: f64 },
    Arc { center: Point, radius: f64, start_angle: f64, end_angle: f64 },
    Stroke,
}

/// Records every call in order without drawing anything.
#[derive(Debug, Clone, Default)]
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of `stroke` calls recorded.
    pub fn stroke_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Stroke))
            .count()
    }
}

impl DrawContext for RecordingContext {
    fn set_line_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::SetLineWidth { width });
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetStrokeColor {
            color: color.into(),
        });
    }

    fn set_line_join(&mut self, join: LineJoin) {
        self.commands.push(DrawCommand::SetLineJoin { join });
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, point: Point) {
        self.commands.push(DrawCommand::MoveTo { point });
    }

    fn line_to(&mut self, point: Point) {
        self.commands.push(DrawCommand::LineTo { point });
    }

    fn close_path(&mut self) {
        self.commands.push(DrawCommand::ClosePath);
    }

    fn rect(&mut self, origin: Point, width: f64, height: f64) {
        self.commands.push(DrawCommand::Rect {
            origin,
            width,
            height,
        });
    }

    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64) {
        self.commands.push(DrawCommand::Arc {
            center,
            radius,
            start_angle,
            end_angle,
        });
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }
}
