//! Canvas configuration and the pointer-driven sketchpad controller.

use crate::context::DrawContext;
use crate::input::{PointerEvent, to_canvas_local};
use crate::shapes::{DrawOptions, Drawable, Shape, ShapeKind};
use crate::stroke::StrokeState;
use kurbo::Vec2;
use serde::{Deserialize, Serialize};

/// Canvas dimensions in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Sizing and shape selection for a canvas.
///
/// Unset dimensions fall back to the viewport.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanvasConfig {
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub shape: ShapeKind,
}

impl CanvasConfig {
    /// Resolve the final canvas size against the viewport.
    pub fn resolve(&self, viewport: CanvasSize) -> CanvasSize {
        CanvasSize {
            width: self.width.unwrap_or(viewport.width),
            height: self.height.unwrap_or(viewport.height),
        }
    }
}

/// Turns pointer events into shapes drawn between successive positions.
///
/// Holds no shape history: every shape is drawn once and dropped.
#[derive(Debug, Clone, Default)]
pub struct Sketchpad {
    stroke: StrokeState,
    shape_kind: ShapeKind,
    options: DrawOptions,
    shapes_drawn: usize,
}

impl Sketchpad {
    /// Create a sketchpad drawing squares.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sketchpad configured from a [`CanvasConfig`].
    pub fn with_config(config: &CanvasConfig) -> Self {
        Self {
            shape_kind: config.shape,
            ..Self::default()
        }
    }

    pub fn shape_kind(&self) -> ShapeKind {
        self.shape_kind
    }

    pub fn set_shape_kind(&mut self, kind: ShapeKind) {
        self.shape_kind = kind;
    }

    /// Switch to the next shape kind and return it.
    pub fn cycle_shape_kind(&mut self) -> ShapeKind {
        self.shape_kind = self.shape_kind.next();
        self.shape_kind
    }

    pub fn options(&self) -> &DrawOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: DrawOptions) {
        self.options = options;
    }

    pub fn stroke(&self) -> &StrokeState {
        &self.stroke
    }

    pub fn is_painting(&self) -> bool {
        self.stroke.is_painting()
    }

    /// Number of shapes drawn into a surface so far.
    pub fn shapes_drawn(&self) -> usize {
        self.shapes_drawn
    }

    /// Whether `event` can produce a shape, so a drawing surface is needed.
    ///
    /// Only moves during a stroke draw; hosts skip acquiring a context
    /// for everything else.
    pub fn needs_surface(&self, event: &PointerEvent) -> bool {
        matches!(event, PointerEvent::Move { .. }) && self.stroke.is_painting()
    }

    /// Advance the stroke state machine.
    ///
    /// `canvas_offset` is the canvas element's offset within the page, or
    /// `None` when there is no canvas; down and move events are then
    /// ignored. Returns the shape to draw for a move while painting.
    pub fn handle_pointer_event(
        &mut self,
        event: &PointerEvent,
        canvas_offset: Option<Vec2>,
    ) -> Option<Shape> {
        match event {
            PointerEvent::Down { position } => {
                let offset = canvas_offset?;
                let anchor = to_canvas_local(*position, offset);
                log::trace!("stroke started at {anchor}");
                self.stroke.begin(anchor);
                None
            }
            PointerEvent::Move { position } => {
                if !self.stroke.is_painting() {
                    return None;
                }
                let offset = canvas_offset?;
                let current = to_canvas_local(*position, offset);
                let (previous, current) = self.stroke.advance(current)?;
                Some(self.shape_kind.build(previous, current))
            }
            PointerEvent::Up { .. } | PointerEvent::Leave { .. } => {
                if self.stroke.is_painting() {
                    log::trace!("stroke ended");
                }
                self.stroke.end();
                None
            }
        }
    }

    /// Handle an event and draw the resulting shape, if any, into `ctx`.
    ///
    /// A missing drawing context skips the draw; the stroke still advances.
    /// Returns the shape that was drawn.
    pub fn dispatch(
        &mut self,
        event: &PointerEvent,
        canvas_offset: Option<Vec2>,
        ctx: Option<&mut dyn DrawContext>,
    ) -> Option<Shape> {
        let shape = self.handle_pointer_event(event, canvas_offset)?;
        let Some(ctx) = ctx else {
            log::debug!("no drawing context, skipping {}", shape.kind());
            return None;
        };
        shape.draw(ctx, &self.options);
        self.shapes_drawn += 1;
        Some(shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point;
    use crate::shapes::testing::CallLog;

    const NO_OFFSET: Option<Vec2> = Some(Vec2::ZERO);

    fn down(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Down {
            position: kurbo::Point::new(x, y),
        }
    }

    fn moved(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Move {
            position: kurbo::Point::new(x, y),
        }
    }

    fn up() -> PointerEvent {
        PointerEvent::Up {
            position: kurbo::Point::ZERO,
        }
    }

    fn leave() -> PointerEvent {
        PointerEvent::Leave {
            position: kurbo::Point::ZERO,
        }
    }

    fn run(pad: &mut Sketchpad, log: &mut CallLog, events: &[PointerEvent]) -> Vec<Shape> {
        events
            .iter()
            .filter_map(|e| pad.dispatch(e, NO_OFFSET, Some(&mut *log)))
            .collect()
    }

    #[test]
    fn test_click_without_move_draws_nothing() {
        let mut pad = Sketchpad::new();
        let mut log = CallLog::default();
        let shapes = run(&mut pad, &mut log, &[down(10.0, 10.0), up()]);
        assert!(shapes.is_empty());
        assert!(log.calls.is_empty());
        assert!(!pad.is_painting());
    }

    #[test]
    fn test_two_moves_draw_two_shapes() {
        let mut pad = Sketchpad::new();
        pad.set_shape_kind(ShapeKind::Line);
        let mut log = CallLog::default();
        let shapes = run(
            &mut pad,
            &mut log,
            &[down(0.0, 0.0), moved(5.0, 5.0), moved(10.0, 0.0)],
        );
        assert_eq!(shapes.len(), 2);
        assert_eq!(log.strokes(), 2);
        assert_eq!(pad.shapes_drawn(), 2);
        match (&shapes[0], &shapes[1]) {
            (Shape::Line(first), Shape::Line(second)) => {
                assert_eq!(first.start, Point::new(0.0, 0.0));
                assert_eq!(first.end, Point::new(5.0, 5.0));
                assert_eq!(second.start, Point::new(5.0, 5.0));
                assert_eq!(second.end, Point::new(10.0, 0.0));
            }
            other => panic!("expected lines, got {other:?}"),
        }
    }

    #[test]
    fn test_moves_after_release_draw_nothing() {
        for release in [up(), leave()] {
            let mut pad = Sketchpad::new();
            let mut log = CallLog::default();
            let shapes = run(
                &mut pad,
                &mut log,
                &[
                    down(0.0, 0.0),
                    moved(1.0, 1.0),
                    release,
                    moved(2.0, 2.0),
                    moved(3.0, 3.0),
                ],
            );
            assert_eq!(shapes.len(), 1);
            assert_eq!(log.strokes(), 1);
        }
    }

    #[test]
    fn test_new_stroke_after_release() {
        let mut pad = Sketchpad::new();
        let mut log = CallLog::default();
        let shapes = run(
            &mut pad,
            &mut log,
            &[
                down(0.0, 0.0),
                up(),
                moved(4.0, 4.0),
                down(20.0, 20.0),
                moved(21.0, 21.0),
            ],
        );
        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0].anchor(), &Point::new(20.0, 20.0));
    }

    #[test]
    fn test_default_shape_is_square_with_fixed_style() {
        let mut pad = Sketchpad::new();
        let mut log = CallLog::default();
        let shapes = run(&mut pad, &mut log, &[down(10.0, 10.0), moved(8.0, 9.0)]);
        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0].kind(), ShapeKind::Square);
        assert!(log.calls.contains(&"line_width 5".to_string()));
        assert!(log.calls.contains(&"rect 10,10 6x6".to_string()));
        assert!(!log.calls.iter().any(|c| c == "line_join round"));
    }

    #[test]
    fn test_offset_translates_positions() {
        let mut pad = Sketchpad::new();
        pad.set_shape_kind(ShapeKind::Line);
        let offset = Some(Vec2::new(50.0, 40.0));
        pad.handle_pointer_event(&down(150.0, 90.0), offset);
        let shape = pad.handle_pointer_event(&moved(160.0, 100.0), offset).unwrap();
        match shape {
            Shape::Line(line) => {
                assert_eq!(line.start, Point::new(100.0, 50.0));
                assert_eq!(line.end, Point::new(110.0, 60.0));
            }
            other => panic!("expected line, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_canvas_ignores_down_and_move() {
        let mut pad = Sketchpad::new();
        assert!(pad.handle_pointer_event(&down(0.0, 0.0), None).is_none());
        assert!(!pad.is_painting());

        pad.handle_pointer_event(&down(0.0, 0.0), NO_OFFSET);
        assert!(pad.handle_pointer_event(&moved(1.0, 1.0), None).is_none());
        // The anchor is still the down position.
        assert_eq!(pad.stroke().last_point(), Some(&Point::new(0.0, 0.0)));
    }

    #[test]
    fn test_missing_context_skips_draw_but_advances() {
        let mut pad = Sketchpad::new();
        pad.dispatch(&down(0.0, 0.0), NO_OFFSET, None);
        assert!(pad.dispatch(&moved(1.0, 1.0), NO_OFFSET, None).is_none());
        assert_eq!(pad.shapes_drawn(), 0);
        assert_eq!(pad.stroke().last_point(), Some(&Point::new(1.0, 1.0)));
    }

    #[test]
    fn test_needs_surface_only_for_painting_moves() {
        let mut pad = Sketchpad::new();
        assert!(!pad.needs_surface(&moved(1.0, 1.0)));
        assert!(!pad.needs_surface(&down(0.0, 0.0)));

        pad.handle_pointer_event(&down(0.0, 0.0), NO_OFFSET);
        assert!(pad.needs_surface(&moved(1.0, 1.0)));
        assert!(!pad.needs_surface(&up()));

        pad.handle_pointer_event(&leave(), NO_OFFSET);
        assert!(!pad.needs_surface(&moved(2.0, 2.0)));
    }

    #[test]
    fn test_cycle_shape_kind() {
        let mut pad = Sketchpad::new();
        assert_eq!(pad.cycle_shape_kind(), ShapeKind::Circle);
        assert_eq!(pad.cycle_shape_kind(), ShapeKind::Line);
        assert_eq!(pad.cycle_shape_kind(), ShapeKind::Square);

        pad.cycle_shape_kind();
        let mut log = CallLog::default();
        let shapes = run(&mut pad, &mut log, &[down(0.0, 0.0), moved(3.0, 4.0)]);
        assert_eq!(shapes[0].kind(), ShapeKind::Circle);
    }

    #[test]
    fn test_config_resolve() {
        let viewport = CanvasSize::new(1920, 1080);
        assert_eq!(CanvasConfig::default().resolve(viewport), viewport);

        let config = CanvasConfig {
            width: Some(640),
            height: None,
            shape: ShapeKind::Circle,
        };
        assert_eq!(config.resolve(viewport), CanvasSize::new(640, 1080));
        assert_eq!(
            Sketchpad::with_config(&config).shape_kind(),
            ShapeKind::Circle
        );
    }
}
