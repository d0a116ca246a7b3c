//! Input handling: event types, the pointer gesture state machine, and
//! the input processor that converts raw window events into viewer
//! commands.

/// Platform-agnostic input events.
pub mod event;
/// Pointer gesture state machine and double-click tracking.
pub(crate) mod mouse;
/// Converts raw events into viewer commands.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use mouse::Gesture;
pub use processor::{InputProcessor, KeyBindings, KeyCommandTag};
