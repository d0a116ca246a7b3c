//! Converts raw platform events into viewer commands.
//!
//! The `InputProcessor` owns all transient input state (the pointer
//! gesture state machine, drag anchor, double-click timing) and the
//! key-binding map. It is the only thing that sits between raw window
//! events and [`Viewer::execute`](crate::viewer::Viewer::execute).

use glam::Vec2;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::event::{InputEvent, MouseButton};
use super::mouse::{Gesture, GestureState};
use crate::picking::ObjectId;
use crate::viewer::ViewerCommand;

/// Wheel detent size in degrees; one step per detent.
const WHEEL_STEP_DEGREES: f32 = 15.0;

/// Maps physical key strings to [`ViewerCommand`] variants.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format:
/// `"Delete"`, `"KeyA"`, `"Escape"`, etc.
///
/// Only *discrete* commands make sense as key bindings — parameterized
/// commands like `RotateCamera` are produced by the mouse gesture
/// interpreter, not key lookups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyBindings {
    /// Forward map: key string → command tag.
    bindings: FxHashMap<String, KeyCommandTag>,
}

/// Serializable tag for the subset of [`ViewerCommand`] that can be
/// key-bound (discrete, parameterless actions).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum KeyCommandTag {
    /// Request deletion of the selected object.
    DeleteSelected,
    /// Restore the default camera pose.
    ResetView,
    /// Clear the current selection.
    ClearSelection,
}

impl KeyCommandTag {
    /// Convert to the corresponding parameterless [`ViewerCommand`].
    fn to_command(self) -> ViewerCommand {
        match self {
            Self::DeleteSelected => ViewerCommand::DeleteSelected,
            Self::ResetView => ViewerCommand::ResetView,
            Self::ClearSelection => ViewerCommand::ClearSelection,
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = [
            ("Delete".to_owned(), KeyCommandTag::DeleteSelected),
            ("Backspace".to_owned(), KeyCommandTag::DeleteSelected),
            ("KeyA".to_owned(), KeyCommandTag::ResetView),
            ("Escape".to_owned(), KeyCommandTag::ClearSelection),
        ]
        .into_iter()
        .collect();
        Self { bindings }
    }
}

impl KeyBindings {
    /// Look up the command for a physical key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<ViewerCommand> {
        self.bindings.get(key).map(|tag| tag.to_command())
    }

    /// Bind a key string to a command tag, replacing any previous
    /// binding.
    pub fn bind(&mut self, key: impl Into<String>, tag: KeyCommandTag) {
        let _ = self.bindings.insert(key.into(), tag);
    }
}

// ─────────────────────────────────────────────────────────────────────────
// InputProcessor
// ─────────────────────────────────────────────────────────────────────────

/// Converts raw window events into [`ViewerCommand`]s.
///
/// Owns the gesture state machine (idle / rotating / panning /
/// dragging-object), the drag anchor, double-click timing, and the
/// keyboard binding map.
///
/// # Usage
///
/// ```ignore
/// // In the event loop, with `hovered` from `viewer.pick(...)`:
/// if let Some(cmd) = processor.handle_event(event, hovered, options.is_3d) {
///     let signal = viewer.execute(cmd, &mut objects)?;
/// }
///
/// if let Some(cmd) = processor.handle_key_press("Delete") {
///     let signal = viewer.execute(cmd, &mut objects)?;
/// }
/// ```
pub struct InputProcessor {
    /// Pointer gesture state machine.
    state: GestureState,
    /// Key string → command mapping.
    key_bindings: KeyBindings,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: GestureState::new(),
            key_bindings: KeyBindings::default(),
        }
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeyBindings) -> Self {
        Self {
            key_bindings,
            ..Self::new()
        }
    }

    /// Current cursor position in physical pixels.
    #[must_use]
    pub fn cursor(&self) -> Vec2 {
        self.state.cursor()
    }

    /// The gesture currently in progress.
    #[must_use]
    pub fn gesture(&self) -> Gesture {
        self.state.gesture()
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeyBindings {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.key_bindings
    }

    /// Look up a key press and return the corresponding command, if
    /// bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<ViewerCommand> {
        self.key_bindings.lookup(key)
    }

    /// Process a raw input event and return zero or one commands.
    ///
    /// `hovered` is the pick target currently under the cursor (from
    /// [`Viewer::pick`](crate::viewer::Viewer::pick)); `is_3d` selects
    /// whether the secondary button rotates or pans.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        hovered: Option<ObjectId>,
        is_3d: bool,
    ) -> Option<ViewerCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.handle_cursor_moved(x, y)
            }
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed, hovered, is_3d)
            }
            InputEvent::Scroll { degrees } => {
                let steps = degrees / WHEEL_STEP_DEGREES;
                if steps == 0.0 {
                    return None;
                }
                Some(ViewerCommand::Zoom { steps })
            }
        }
    }

    /// Cursor moved: emit the command for the active gesture.
    fn handle_cursor_moved(
        &mut self,
        x: f32,
        y: f32,
    ) -> Option<ViewerCommand> {
        let delta = self.state.track_move(x, y);
        match self.state.gesture() {
            Gesture::Rotating => {
                Some(ViewerCommand::RotateCamera { delta })
            }
            Gesture::Panning => Some(ViewerCommand::PanCamera { delta }),
            Gesture::DraggingObject => Some(ViewerCommand::DragSelected {
                cursor: self.state.cursor(),
            }),
            Gesture::Idle => None,
        }
    }

    /// Mouse button press/release: drive the gesture transitions.
    fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
        hovered: Option<ObjectId>,
        is_3d: bool,
    ) -> Option<ViewerCommand> {
        if !pressed {
            // any button up returns to idle
            self.state.end();
            return None;
        }
        match button {
            MouseButton::Left => {
                if self.state.register_press(hovered) {
                    // selection already landed on the first press
                    return Some(ViewerCommand::EditSelected);
                }
                if hovered.is_some() {
                    self.state.begin(Gesture::DraggingObject);
                } else {
                    self.state.end();
                }
                Some(ViewerCommand::Select { id: hovered })
            }
            MouseButton::Middle => {
                self.state.begin(Gesture::Panning);
                None
            }
            MouseButton::Right => {
                if is_3d {
                    self.state.begin(Gesture::Rotating);
                } else {
                    self.state.begin(Gesture::Panning);
                }
                None
            }
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(button: MouseButton) -> InputEvent {
        InputEvent::MouseButton {
            button,
            pressed: true,
        }
    }

    fn release(button: MouseButton) -> InputEvent {
        InputEvent::MouseButton {
            button,
            pressed: false,
        }
    }

    #[test]
    fn primary_press_on_hit_starts_object_drag() {
        let mut processor = InputProcessor::new();
        let cmd =
            processor.handle_event(press(MouseButton::Left), Some(ObjectId(3)), true);
        assert_eq!(
            cmd,
            Some(ViewerCommand::Select {
                id: Some(ObjectId(3))
            })
        );
        assert_eq!(processor.gesture(), Gesture::DraggingObject);
    }

    #[test]
    fn primary_press_on_background_stays_idle() {
        let mut processor = InputProcessor::new();
        let cmd = processor.handle_event(press(MouseButton::Left), None, true);
        assert_eq!(cmd, Some(ViewerCommand::Select { id: None }));
        assert_eq!(processor.gesture(), Gesture::Idle);
    }

    #[test]
    fn middle_button_pans_in_any_mode() {
        for is_3d in [true, false] {
            let mut processor = InputProcessor::new();
            let cmd =
                processor.handle_event(press(MouseButton::Middle), None, is_3d);
            assert_eq!(cmd, None);
            assert_eq!(processor.gesture(), Gesture::Panning);
        }
    }

    #[test]
    fn secondary_button_rotates_in_3d_pans_in_2d() {
        let mut processor = InputProcessor::new();
        let _ = processor.handle_event(press(MouseButton::Right), None, true);
        assert_eq!(processor.gesture(), Gesture::Rotating);

        let mut processor = InputProcessor::new();
        let _ = processor.handle_event(press(MouseButton::Right), None, false);
        assert_eq!(processor.gesture(), Gesture::Panning);
    }

    #[test]
    fn any_release_returns_to_idle() {
        let mut processor = InputProcessor::new();
        let _ = processor.handle_event(press(MouseButton::Right), None, true);
        let _ = processor.handle_event(release(MouseButton::Right), None, true);
        assert_eq!(processor.gesture(), Gesture::Idle);
    }

    #[test]
    fn rotating_moves_emit_inverted_dy() {
        let mut processor = InputProcessor::new();
        let _ = processor.handle_event(
            InputEvent::CursorMoved { x: 100.0, y: 100.0 },
            None,
            true,
        );
        let _ = processor.handle_event(press(MouseButton::Right), None, true);
        let cmd = processor.handle_event(
            InputEvent::CursorMoved { x: 120.0, y: 110.0 },
            None,
            true,
        );
        assert_eq!(
            cmd,
            Some(ViewerCommand::RotateCamera {
                delta: Vec2::new(20.0, -10.0)
            })
        );
    }

    #[test]
    fn dragging_moves_emit_cursor_position() {
        let mut processor = InputProcessor::new();
        let _ =
            processor.handle_event(press(MouseButton::Left), Some(ObjectId(1)), true);
        let cmd = processor.handle_event(
            InputEvent::CursorMoved { x: 42.0, y: 24.0 },
            Some(ObjectId(1)),
            true,
        );
        assert_eq!(
            cmd,
            Some(ViewerCommand::DragSelected {
                cursor: Vec2::new(42.0, 24.0)
            })
        );
    }

    #[test]
    fn double_press_on_hit_requests_edit() {
        let mut processor = InputProcessor::new();
        let _ =
            processor.handle_event(press(MouseButton::Left), Some(ObjectId(5)), true);
        let _ = processor.handle_event(release(MouseButton::Left), Some(ObjectId(5)), true);
        let cmd =
            processor.handle_event(press(MouseButton::Left), Some(ObjectId(5)), true);
        assert_eq!(cmd, Some(ViewerCommand::EditSelected));
    }

    #[test]
    fn scroll_converts_degrees_to_steps() {
        let mut processor = InputProcessor::new();
        let cmd = processor.handle_event(
            InputEvent::Scroll { degrees: 30.0 },
            None,
            true,
        );
        assert_eq!(cmd, Some(ViewerCommand::Zoom { steps: 2.0 }));
        let cmd = processor.handle_event(
            InputEvent::Scroll { degrees: 0.0 },
            None,
            true,
        );
        assert_eq!(cmd, None);
    }

    #[test]
    fn default_key_bindings() {
        let processor = InputProcessor::new();
        assert_eq!(
            processor.handle_key_press("Delete"),
            Some(ViewerCommand::DeleteSelected)
        );
        assert_eq!(
            processor.handle_key_press("Backspace"),
            Some(ViewerCommand::DeleteSelected)
        );
        assert_eq!(
            processor.handle_key_press("KeyA"),
            Some(ViewerCommand::ResetView)
        );
        assert_eq!(processor.handle_key_press("KeyZ"), None);
    }

    #[test]
    fn custom_binding_overrides() {
        let mut bindings = KeyBindings::default();
        bindings.bind("KeyR", KeyCommandTag::ResetView);
        let processor = InputProcessor::with_key_bindings(bindings);
        assert_eq!(
            processor.handle_key_press("KeyR"),
            Some(ViewerCommand::ResetView)
        );
    }
}
