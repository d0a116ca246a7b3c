//! Pointer gesture state machine.
//!
//! Tracks which navigation gesture is active, the per-move drag anchor,
//! and double-click timing for the primary button.

use glam::Vec2;
use web_time::{Duration, Instant};

use crate::picking::ObjectId;

const DOUBLE_CLICK_THRESHOLD: Duration = Duration::from_millis(400);

/// The active pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gesture {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Secondary-button drag orbiting the eye around the center (3D).
    Rotating,
    /// Middle-button (or secondary-in-2D) drag translating eye and
    /// center rigidly.
    Panning,
    /// Primary-button drag moving the selected object in its
    /// screen-facing plane.
    DraggingObject,
}

/// Tracks cursor position, the active gesture, its drag anchor, and
/// primary-button double-click timing.
pub(crate) struct GestureState {
    gesture: Gesture,
    /// Drag anchor; advanced to the cursor on every tracked move.
    anchor: Vec2,
    cursor: Vec2,
    last_press_time: Option<Instant>,
    last_press_target: Option<ObjectId>,
}

impl GestureState {
    pub(crate) fn new() -> Self {
        Self {
            gesture: Gesture::Idle,
            anchor: Vec2::ZERO,
            cursor: Vec2::ZERO,
            last_press_time: None,
            last_press_target: None,
        }
    }

    pub(crate) fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub(crate) fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Begin a gesture anchored at the current cursor position.
    pub(crate) fn begin(&mut self, gesture: Gesture) {
        self.gesture = gesture;
        self.anchor = self.cursor;
        log::trace!("gesture -> {gesture:?}");
    }

    /// Return to idle.
    pub(crate) fn end(&mut self) {
        if self.gesture != Gesture::Idle {
            log::trace!("gesture -> Idle");
        }
        self.gesture = Gesture::Idle;
    }

    /// Record a pointer move. Returns the screen-space delta from the
    /// drag anchor with dy inverted (screen-up positive) and advances
    /// the anchor; zero while idle.
    pub(crate) fn track_move(&mut self, x: f32, y: f32) -> Vec2 {
        let position = Vec2::new(x, y);
        self.cursor = position;
        if self.gesture == Gesture::Idle {
            return Vec2::ZERO;
        }
        let delta = Vec2::new(
            position.x - self.anchor.x,
            -(position.y - self.anchor.y),
        );
        self.anchor = position;
        delta
    }

    /// Record a primary-button press over `target`.
    ///
    /// Returns `true` when this press completes a double-click: same
    /// (non-empty) target as the previous press, within the threshold.
    /// A completed double-click resets the timer so a triple press does
    /// not chain.
    pub(crate) fn register_press(
        &mut self,
        target: Option<ObjectId>,
    ) -> bool {
        let now = Instant::now();
        let double = target.is_some()
            && self.last_press_target == target
            && self.last_press_time.is_some_and(|t| {
                now.duration_since(t) < DOUBLE_CLICK_THRESHOLD
            });
        self.last_press_time = if double { None } else { Some(now) };
        self.last_press_target = target;
        double
    }
}
