//! Application configuration.

use kurbo::Vec2;
use sketchpad_core::{CanvasConfig, CanvasSize, ShapeKind};

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub canvas: CanvasConfig,
    /// Offset of the canvas element within the page.
    pub canvas_offset: Vec2,
    /// Viewport used when the canvas size is not set.
    pub viewport: CanvasSize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig::default(),
            canvas_offset: Vec2::ZERO,
            viewport: CanvasSize::new(1280, 800),
        }
    }
}

impl AppConfig {
    /// Final canvas size.
    pub fn canvas_size(&self) -> CanvasSize {
        self.canvas.resolve(self.viewport)
    }
}

/// Apply `width`, `height` and `shape` overrides from a query string or
/// hash fragment, e.g. `?shape=circle&width=640`.
///
/// Unknown keys are ignored; malformed values are logged and skipped.
pub fn apply_query_params(config: &mut CanvasConfig, s: &str) {
    let s = s.trim_start_matches(['?', '#']);

    for pair in s.split('&') {
        let mut parts = pair.splitn(2, '=');
        let (Some(key), Some(value)) = (parts.next(), parts.next()) else {
            continue;
        };
        if value.is_empty() {
            continue;
        }
        match key {
            "width" => match value.parse() {
                Ok(width) => config.width = Some(width),
                Err(e) => log::warn!("Ignoring width={value}: {e}"),
            },
            "height" => match value.parse() {
                Ok(height) => config.height = Some(height),
                Err(e) => log::warn!("Ignoring height={value}: {e}"),
            },
            "shape" => match value.parse::<ShapeKind>() {
                Ok(shape) => config.shape = shape,
                Err(e) => log::warn!("Ignoring shape: {e}"),
            },
            _ => {}
        }
    }
}
