//! Pointer events delivered by the host.

use crate::point::Point;
use kurbo::Vec2;
use serde::{Deserialize, Serialize};

/// Pointer event in page coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PointerEvent {
    Down { position: kurbo::Point },
    Move { position: kurbo::Point },
    Up { position: kurbo::Point },
    Leave { position: kurbo::Point },
}

impl PointerEvent {
    /// Page position the event was reported at.
    pub fn position(&self) -> kurbo::Point {
        match self {
            PointerEvent::Down { position }
            | PointerEvent::Move { position }
            | PointerEvent::Up { position }
            | PointerEvent::Leave { position } => *position,
        }
    }

    /// Whether this event ends a stroke.
    pub fn is_release(&self) -> bool {
        matches!(self, PointerEvent::Up { .. } | PointerEvent::Leave { .. })
    }
}

/// Translate a page position into canvas-local coordinates.
pub fn to_canvas_local(page: kurbo::Point, canvas_offset: Vec2) -> Point {
    let mut point = Point::new(page.x, page.y);
    point.offset(canvas_offset.x, canvas_offset.y);
    point
}
