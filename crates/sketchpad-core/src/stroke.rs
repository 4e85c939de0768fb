//! Stroke state machine.

use crate::point::Point;

/// Whether a stroke is in progress, and where the pointer last was.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum StrokeState {
    #[default]
    Idle,
    Painting {
        /// Last canvas-local pointer position.
        last: Point,
    },
}

impl StrokeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_painting(&self) -> bool {
        matches!(self, StrokeState::Painting { .. })
    }

    pub fn last_point(&self) -> Option<&Point> {
        match self {
            StrokeState::Painting { last } => Some(last),
            StrokeState::Idle => None,
        }
    }

    /// Start a stroke at `anchor`. Restarts the stroke if one is in progress.
    pub fn begin(&mut self, anchor: Point) {
        *self = StrokeState::Painting { last: anchor };
    }

    /// Advance the stroke to `current`.
    ///
    /// Returns the `(previous, current)` segment while painting, `None`
    /// when idle.
    pub fn advance(&mut self, current: Point) -> Option<(Point, Point)> {
        match self {
            StrokeState::Painting { last } => {
                let previous = std::mem::replace(last, current.clone());
                Some((previous, current))
            }
            StrokeState::Idle => None,
        }
    }

    /// End the stroke and forget the last point.
    pub fn end(&mut self) {
        *self = StrokeState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_ignores_moves() {
        let mut stroke = StrokeState::new();
        assert!(stroke.advance(Point::new(1.0, 1.0)).is_none());
        assert!(!stroke.is_painting());
        assert!(stroke.last_point().is_none());
    }

    #[test]
    fn test_advance_pairs_positions() {
        let mut stroke = StrokeState::new();
        stroke.begin(Point::new(0.0, 0.0));
        let (a, b) = stroke.advance(Point::new(1.0, 2.0)).unwrap();
        assert_eq!(a, Point::new(0.0, 0.0));
        assert_eq!(b, Point::new(1.0, 2.0));
        let (a, b) = stroke.advance(Point::new(3.0, 4.0)).unwrap();
        assert_eq!(a, Point::new(1.0, 2.0));
        assert_eq!(b, Point::new(3.0, 4.0));
        assert_eq!(stroke.last_point(), Some(&Point::new(3.0, 4.0)));
    }

    #[test]
    fn test_end_clears_state() {
        let mut stroke = StrokeState::new();
        stroke.begin(Point::new(5.0, 5.0));
        assert!(stroke.is_painting());
        stroke.end();
        assert_eq!(stroke, StrokeState::Idle);
        assert!(stroke.advance(Point::new(6.0, 6.0)).is_none());
    }

    #[test]
    fn test_begin_restarts() {
        let mut stroke = StrokeState::new();
        stroke.begin(Point::new(0.0, 0.0));
        stroke.begin(Point::new(9.0, 9.0));
        assert_eq!(stroke.last_point(), Some(&Point::new(9.0, 9.0)));
    }
}
