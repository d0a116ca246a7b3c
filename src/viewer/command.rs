//! The viewer's complete interactive vocabulary.
//!
//! Every user-facing operation — whether triggered by a key press, mouse
//! gesture, GUI button, or programmatic call — is represented as a
//! `ViewerCommand`. Consumers construct commands and pass them to
//! [`Viewer::execute`](super::Viewer::execute).

use glam::Vec2;

use crate::picking::ObjectId;

/// A discrete or parameterized operation the viewer can perform.
///
/// The viewer never cares *how* a command was triggered — keyboard,
/// mouse, GUI, or API all look identical:
///
/// ```ignore
/// let _ = viewer.execute(ViewerCommand::ResetView, &mut objects)?;
/// let _ = viewer.execute(ViewerCommand::Zoom { steps: 1.0 }, &mut objects)?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewerCommand {
    // ── Camera ──────────────────────────────────────────────────────
    /// Orbit the eye around the center by `delta` pixels of mouse
    /// movement (dy already inverted so screen-up is positive).
    RotateCamera {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Translate eye and center rigidly by `delta` pixels of mouse
    /// movement.
    PanCamera {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Zoom by a signed number of wheel detents (positive = zoom in).
    Zoom {
        /// Wheel step count; one step per 15-degree detent.
        steps: f32,
    },

    /// Restore the default camera pose.
    ResetView,

    // ── Selection ───────────────────────────────────────────────────
    /// Set (or clear, with `None`) the selected object.
    Select {
        /// Pick result under the cursor.
        id: Option<ObjectId>,
    },

    /// Clear the current selection.
    ClearSelection,

    /// Move the selected object to the point under `cursor` in its
    /// screen-facing plane.
    DragSelected {
        /// Cursor position in physical pixels.
        cursor: Vec2,
    },

    /// Request deletion of the selected object (externally confirmed).
    DeleteSelected,

    /// Request an external editor for the selected object.
    EditSelected,
}

/// Notification of a state change, returned from
/// [`Viewer::execute`](super::Viewer::execute).
///
/// The core stays decoupled from any UI notification mechanism:
/// callers consume these return values and forward them to whatever
/// observer scheme the embedding application uses.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerSignal {
    /// The selected object changed (possibly to nothing).
    SelectionChanged {
        /// New selection.
        selected: Option<ObjectId>,
    },

    /// Viewer options were replaced.
    OptionsChanged,

    /// The user asked to delete the selected object. The application
    /// confirms externally; on a yes it removes the object from its
    /// registry and calls
    /// [`Viewer::object_removed`](super::Viewer::object_removed).
    DeleteRequested {
        /// Object to delete.
        id: ObjectId,
        /// Label for the confirmation prompt.
        label: String,
    },

    /// The user double-clicked the selected object; the application may
    /// pop up an editor. No core-side contract beyond this signal.
    EditRequested {
        /// Object to edit.
        id: ObjectId,
    },
}
