//! Sketchpad Core Library
//!
//! Platform-agnostic geometry, shapes and the pointer stroke state machine
//! behind the Sketchpad drawing canvas.

pub mod canvas;
pub mod context;
pub mod input;
pub mod point;
pub mod shapes;
pub mod stroke;

pub use canvas::{CanvasConfig, CanvasSize, Sketchpad};
pub use context::{DrawContext, LineJoin};
pub use input::{PointerEvent, to_canvas_local};
pub use point::Point;
pub use shapes::{
    Circle, DrawOptions, Drawable, Line, ParseShapeKindError, Shape, ShapeKind, Square,
};
pub use stroke::StrokeState;
