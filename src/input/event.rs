//! Platform-agnostic input events.
//!
//! These are fed into an [`InputProcessor`](super::InputProcessor) which
//! converts them into [`ViewerCommand`](crate::viewer::ViewerCommand)
//! values.
//!
//! # Example
//!
//! ```ignore
//! let cmd = input_processor.handle_event(
//!     InputEvent::CursorMoved { x: 100.0, y: 200.0 },
//!     hovered,
//!     options.is_3d,
//! );
//! ```

/// A raw pointer or wheel event forwarded by the host surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels, measured from the top.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel rotation in degrees; most mouse hardware clicks in
    /// 15-degree detents. Positive = wheel rolled forward.
    Scroll {
        /// Rotation amount in degrees.
        degrees: f32,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button: selection and object dragging.
    Left,
    /// Secondary (right) mouse button: rotate in 3D, pan in 2D.
    Right,
    /// Middle mouse button (wheel click): pan.
    Middle,
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Left,
        }
    }
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseScrollDelta> for InputEvent {
    fn from(delta: winit::event::MouseScrollDelta) -> Self {
        let degrees = match delta {
            // one scroll line = one 15-degree detent
            winit::event::MouseScrollDelta::LineDelta(_, y) => y * 15.0,
            winit::event::MouseScrollDelta::PixelDelta(pos) => {
                pos.y as f32 * 0.15
            }
        };
        Self::Scroll { degrees }
    }
}
