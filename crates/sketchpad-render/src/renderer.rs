//! Shared renderer types.

use peniko::Color;
use sketchpad_core::shapes::SerializableColor;
use sketchpad_core::LineJoin;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Drawing context unavailable: {0}")]
    ContextUnavailable(String),
    #[error("Output failed: {0}")]
    Output(#[from] std::io::Error),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Stroke style state tracked by the native backends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeParams {
    pub color: SerializableColor,
    pub width: f64,
    pub join: LineJoin,
}

impl Default for StrokeParams {
    /// Matches a fresh HTML canvas: black, 1px, miter joins.
    fn default() -> Self {
        Self {
            color: SerializableColor::new(0, 0, 0, 255),
            width: 1.0,
            join: LineJoin::Miter,
        }
    }
}

impl StrokeParams {
    pub fn set_color(&mut self, color: Color) {
        self.color = color.into();
    }
}
