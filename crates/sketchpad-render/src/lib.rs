//! Sketchpad Render Library
//!
//! Drawing surface backends for Sketchpad. Native builds get a command
//! recorder and an SVG document builder; WASM builds additionally draw
//! straight into a browser `CanvasRenderingContext2d`.

mod recording;
mod renderer;
mod svg;

#[cfg(target_arch = "wasm32")]
mod web_impl;

pub use recording::{DrawCommand, RecordingContext};
pub use renderer::{RenderResult, RendererError, StrokeParams};
pub use svg::SvgContext;

#[cfg(target_arch = "wasm32")]
pub use web_impl::{WebContext, context_2d};
