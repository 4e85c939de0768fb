//! Pointer-event script replay.
//!
//! A script is either a bare JSON array of pointer events or an object with
//! optional `canvas` and `canvas_offset` settings plus an `events` array.

use kurbo::Vec2;
use serde::{Deserialize, Serialize};
use sketchpad_core::{CanvasConfig, DrawContext, PointerEvent, Sketchpad};
use std::path::Path;
use thiserror::Error;

/// Replay errors.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("Failed to read script: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid script: {0}")]
    Json(#[from] serde_json::Error),
}

/// A recorded pointer session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub canvas: CanvasConfig,
    #[serde(default)]
    pub canvas_offset: Vec2,
    pub events: Vec<PointerEvent>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ScriptFile {
    Events(Vec<PointerEvent>),
    Full(Script),
}

/// Outcome of a replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplaySummary {
    pub events: usize,
    pub shapes_drawn: usize,
}

/// Parse a script from JSON text.
pub fn parse_script(json: &str) -> Result<Script, ReplayError> {
    let script = match serde_json::from_str(json)? {
        ScriptFile::Events(events) => Script {
            events,
            ..Script::default()
        },
        ScriptFile::Full(script) => script,
    };
    Ok(script)
}

/// Load a script from a JSON file.
pub fn load_script(path: impl AsRef<Path>) -> Result<Script, ReplayError> {
    let json = std::fs::read_to_string(path.as_ref())?;
    parse_script(&json)
}

/// Feed every event through `pad`, drawing into `ctx`.
pub fn replay(
    pad: &mut Sketchpad,
    events: &[PointerEvent],
    canvas_offset: Vec2,
    ctx: &mut dyn DrawContext,
) -> ReplaySummary {
    let before = pad.shapes_drawn();
    for event in events {
        pad.dispatch(event, Some(canvas_offset), Some(&mut *ctx));
    }
    let summary = ReplaySummary {
        events: events.len(),
        shapes_drawn: pad.shapes_drawn() - before,
    };
    log::debug!(
        "Replayed {} events, {} shapes drawn",
        summary.events,
        summary.shapes_drawn
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use sketchpad_core::ShapeKind;
    use sketchpad_render::{DrawCommand, RecordingContext};
    use std::io::Write;

    const STROKE: &str = r#"[
        {"type":"down","position":{"x":10.0,"y":10.0}},
        {"type":"move","position":{"x":12.0,"y":14.0}},
        {"type":"move","position":{"x":20.0,"y":18.0}},
        {"type":"up","position":{"x":20.0,"y":18.0}},
        {"type":"move","position":{"x":40.0,"y":40.0}}
    ]"#;

    #[test]
    fn test_parse_bare_array() {
        let script = parse_script(STROKE).unwrap();
        assert_eq!(script.events.len(), 5);
        assert_eq!(script.canvas, CanvasConfig::default());
        assert_eq!(script.canvas_offset, Vec2::ZERO);
    }

    #[test]
    fn test_parse_full_script() {
        let json = r#"{
            "canvas": {"width": 300, "shape": "line"},
            "canvas_offset": {"x": 8.0, "y": 16.0},
            "events": []
        }"#;
        let script = parse_script(json).unwrap();
        assert_eq!(script.canvas.width, Some(300));
        assert_eq!(script.canvas.shape, ShapeKind::Line);
        assert_eq!(script.canvas_offset, Vec2::new(8.0, 16.0));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_script("{\"events\": 3}"),
            Err(ReplayError::Json(_))
        ));
    }

    #[test]
    fn test_replay_draws_one_shape_per_painting_move() {
        let script = parse_script(STROKE).unwrap();
        let mut pad = Sketchpad::new();
        let mut ctx = RecordingContext::new();
        let summary = replay(&mut pad, &script.events, Vec2::ZERO, &mut ctx);
        assert_eq!(summary.events, 5);
        assert_eq!(summary.shapes_drawn, 2);
        assert_eq!(ctx.stroke_count(), 2);

        // Second square anchored at the first move position.
        let rects: Vec<_> = ctx
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Rect { origin, .. } => Some(*origin),
                _ => None,
            })
            .collect();
        assert_eq!(
            rects,
            vec![kurbo::Point::new(10.0, 10.0), kurbo::Point::new(12.0, 14.0)]
        );
    }

    #[test]
    fn test_replay_applies_offset() {
        let script = parse_script(STROKE).unwrap();
        let mut pad = Sketchpad::new();
        let mut ctx = RecordingContext::new();
        replay(&mut pad, &script.events, Vec2::new(10.0, 5.0), &mut ctx);
        let first = ctx.commands().iter().find_map(|c| match c {
            DrawCommand::Rect { origin, .. } => Some(*origin),
            _ => None,
        });
        assert_eq!(first, Some(kurbo::Point::new(0.0, 5.0)));
    }

    #[test]
    fn test_load_script_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(STROKE.as_bytes()).unwrap();
        let script = load_script(file.path()).unwrap();
        assert_eq!(script.events.len(), 5);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_script(dir.path().join("missing.json"));
        assert!(matches!(result, Err(ReplayError::Io(_))));
    }
}
