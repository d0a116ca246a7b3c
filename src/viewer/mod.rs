//! The viewer core: owns the camera, options, and selection state, and
//! executes [`ViewerCommand`]s produced by the input processor.
//!
//! Scene objects live in an application-owned registry and are passed
//! into the methods that need them; the viewer stores only the selected
//! [`ObjectId`]. State-change notifications come back as
//! [`ViewerSignal`] return values; there is no callback registration.

/// Command and signal vocabulary.
pub mod command;

use glam::{Quat, Vec2};

use crate::camera::{Camera, Frame};
use crate::error::GimbalError;
use crate::geometry::{Color, Viewport};
use crate::hud::{help_text, hud_text_color, HudContext};
use crate::options::Options;
use crate::picking::{
    pick_object, pick_point_in_plane, ObjectId, PickHit, SceneObject,
};

pub use command::{ViewerCommand, ViewerSignal};

/// Rotation axes shorter than this are treated as a zero drag.
const MIN_ROTATION_AXIS: f32 = 1e-5;

/// Per-frame draw callbacks supplied by the embedding application.
///
/// [`Viewer::render_frame`] invokes these in a fixed order: clear, scene,
/// HUD. The scene callback receives the active transforms and may query
/// the selection to highlight it.
pub trait DrawDelegate {
    /// Clear the render surface to the background color.
    fn clear(&mut self, background: Color);

    /// Draw the scene with the frame's transforms active.
    fn draw_scene(&mut self, frame: &Frame, selected: Option<ObjectId>);

    /// Draw the screen-space overlay.
    fn draw_hud(&mut self, hud: &HudContext);
}

/// Camera-and-picking core for an interactive viewport.
pub struct Viewer {
    camera: Camera,
    options: Options,
    selected: Option<ObjectId>,
    /// Transforms of the most recent frame; picking and gesture math
    /// read these, so [`Viewer::begin_frame`] must run before events
    /// are processed.
    frame: Frame,
}

impl Viewer {
    /// Create a viewer with the given options and the default camera
    /// pose.
    #[must_use]
    pub fn new(mut options: Options) -> Self {
        options.sanitize();
        let camera = Camera::default();
        let frame = Frame::with_projection(
            &camera,
            Viewport::default(),
            options.projection,
        );
        Self {
            camera,
            options,
            selected: None,
            frame,
        }
    }

    /// Current camera state.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable camera access for navigation resets and programmatic
    /// poses.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Currently selected object, if any.
    #[must_use]
    pub fn selected(&self) -> Option<ObjectId> {
        self.selected
    }

    /// Transforms computed by the most recent [`Viewer::begin_frame`].
    #[must_use]
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Replace the options wholesale (clamping out-of-range values).
    ///
    /// Turning 3D mode off resets the camera to the default view.
    /// Returns [`ViewerSignal::OptionsChanged`] when anything changed.
    pub fn set_options(
        &mut self,
        mut options: Options,
    ) -> Option<ViewerSignal> {
        options.sanitize();
        if options == self.options {
            return None;
        }
        if self.options.is_3d && !options.is_3d {
            self.camera.reset();
        }
        self.options = options;
        log::debug!("options changed");
        Some(ViewerSignal::OptionsChanged)
    }

    /// Switch between 2D and 3D navigation; turning 3D off resets the
    /// camera to the default view.
    pub fn set_is_3d(&mut self, is_3d: bool) -> Option<ViewerSignal> {
        let mut options = self.options.clone();
        options.is_3d = is_3d;
        self.set_options(options)
    }

    /// Recompute the per-frame transforms for the given viewport.
    ///
    /// Must be called once per displayed frame, before input events for
    /// that frame are processed.
    pub fn begin_frame(&mut self, viewport: Viewport) -> Frame {
        self.frame = Frame::with_projection(
            &self.camera,
            viewport,
            self.options.projection,
        );
        self.frame
    }

    /// Run one frame in the fixed order: clear, scene draw, HUD draw.
    pub fn render_frame<D: DrawDelegate>(
        &mut self,
        viewport: Viewport,
        delegate: &mut D,
    ) {
        let frame = self.begin_frame(viewport);
        delegate.clear(self.options.background_color);
        delegate.draw_scene(&frame, self.selected);
        let hud = HudContext {
            text_color: hud_text_color(self.options.background_color),
            help_text: help_text(self.options.is_3d),
            font: self.options.hud_font.clone(),
        };
        delegate.draw_hud(&hud);
    }

    /// Hit-test the cursor against the candidate objects using the
    /// current frame's transforms.
    ///
    /// # Errors
    ///
    /// Propagates [`GimbalError::DegenerateTransform`].
    pub fn pick<S: SceneObject>(
        &self,
        cursor: Vec2,
        objects: &[S],
    ) -> Result<Option<PickHit>, GimbalError> {
        pick_object(cursor, &self.frame, objects)
    }

    /// Execute a command against the application's object registry.
    ///
    /// Returns a [`ViewerSignal`] when the command changed observable
    /// state or requests external action.
    ///
    /// # Errors
    ///
    /// Propagates [`GimbalError::DegenerateTransform`] from the
    /// drag-repick path.
    pub fn execute<S: SceneObject>(
        &mut self,
        command: ViewerCommand,
        objects: &mut [S],
    ) -> Result<Option<ViewerSignal>, GimbalError> {
        match command {
            ViewerCommand::RotateCamera { delta } => {
                self.rotate(delta);
                Ok(None)
            }
            ViewerCommand::PanCamera { delta } => {
                self.pan(delta);
                Ok(None)
            }
            ViewerCommand::Zoom { steps } => {
                self.zoom_wheel(steps);
                Ok(None)
            }
            ViewerCommand::ResetView => {
                self.camera.reset();
                log::debug!("camera reset to default view");
                Ok(None)
            }
            ViewerCommand::Select { id } => Ok(self.select(id)),
            ViewerCommand::ClearSelection => Ok(self.select(None)),
            ViewerCommand::DragSelected { cursor } => {
                self.drag_selected(cursor, objects)?;
                Ok(None)
            }
            ViewerCommand::DeleteSelected => {
                Ok(self.selected.map(|id| {
                    let label = objects
                        .iter()
                        .find(|o| o.id() == id)
                        .map_or_else(
                            || "object".to_owned(),
                            |o| o.label().to_owned(),
                        );
                    ViewerSignal::DeleteRequested { id, label }
                }))
            }
            ViewerCommand::EditSelected => Ok(self
                .selected
                .map(|id| ViewerSignal::EditRequested { id })),
        }
    }

    /// Deregistration callback: the application removed an object from
    /// its registry (e.g. after a confirmed delete). Clears the
    /// selection when it pointed at the removed object.
    pub fn object_removed(
        &mut self,
        id: ObjectId,
    ) -> Option<ViewerSignal> {
        if self.selected == Some(id) {
            return self.select(None);
        }
        None
    }

    // ── Gesture math ────────────────────────────────────────────────

    /// Orbit the eye around the center. The axis is the screen-space
    /// drag direction lifted into the camera's right/up basis; dragging
    /// across the full viewport width is a half turn.
    fn rotate(&mut self, delta: Vec2) {
        let (xhat, yhat, _) = self.camera.basis();
        let axis = yhat * delta.x - xhat * delta.y;
        let magnitude = axis.length();
        if magnitude < MIN_ROTATION_AXIS {
            return;
        }
        let radians = magnitude / self.frame.viewport.width as f32
            * std::f32::consts::PI;
        let rotation = Quat::from_axis_angle(axis / magnitude, -radians);
        self.camera.eye = self.camera.center
            + rotation * (self.camera.eye - self.camera.center);
    }

    /// Rigid translation of eye and center, scaled so the cursor stays
    /// glued to the world point it grabbed.
    fn pan(&mut self, delta: Vec2) {
        let (xhat, yhat, _) = self.camera.basis();
        let zoom = self.camera.view().length();
        let viewport = self.frame.viewport;
        let translation = xhat
            * (delta.x / viewport.width as f32 * zoom)
            + yhat * (delta.y / viewport.height as f32 * zoom);
        self.camera.center -= translation;
        self.camera.eye -= translation;
    }

    /// Scale the zoom distance by the wheel step count; positive steps
    /// zoom in (shrink the view distance).
    fn zoom_wheel(&mut self, steps: f32) {
        let steps = if self.options.swap_mouse_wheel_zoom_direction {
            -steps
        } else {
            steps
        };
        let distance = self.camera.view().length()
            * (1.0 - steps * self.options.mouse_wheel_sensitivity);
        self.camera.zoom_to(distance);
    }

    fn select(&mut self, id: Option<ObjectId>) -> Option<ViewerSignal> {
        if self.selected == id {
            return None;
        }
        self.selected = id;
        log::debug!("selection changed: {id:?}");
        Some(ViewerSignal::SelectionChanged { selected: id })
    }

    /// Re-pick the dragged object's position in its screen-facing plane
    /// and move it there. Camera state is untouched.
    fn drag_selected<S: SceneObject>(
        &self,
        cursor: Vec2,
        objects: &mut [S],
    ) -> Result<(), GimbalError> {
        let Some(id) = self.selected else {
            return Ok(());
        };
        let Some(object) =
            objects.iter_mut().find(|o| o.id() == id)
        else {
            return Ok(());
        };
        let position = pick_point_in_plane(
            cursor,
            &self.frame,
            self.camera.view(),
            object.position(),
            self.options.snap_to_grid,
        )?;
        object.set_position(position);
        Ok(())
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::picking::SphereObject;

    fn sphere(id: u64, center: Vec3, radius: f32) -> SphereObject {
        SphereObject {
            id: ObjectId(id),
            label: format!("sphere {id}"),
            center,
            radius,
            color: Color::WHITE,
        }
    }

    fn viewer_with_frame() -> Viewer {
        let mut viewer = Viewer::default();
        let _ = viewer.begin_frame(Viewport::from_size(400, 400));
        viewer
    }

    const NO_OBJECTS: [SphereObject; 0] = [];

    #[test]
    fn wheel_step_shrinks_view_distance() {
        // +15 degrees = one step at default sensitivity 0.2:
        // |view| goes from 10 to 10 * (1 - 0.2) = 8.
        let mut viewer = viewer_with_frame();
        let mut objects = NO_OBJECTS;
        let signal = viewer
            .execute(ViewerCommand::Zoom { steps: 1.0 }, &mut objects)
            .unwrap();
        assert_eq!(signal, None);
        assert!((viewer.camera().view().length() - 8.0).abs() < 1e-4);
    }

    #[test]
    fn swapped_wheel_zooms_out() {
        let options = Options {
            swap_mouse_wheel_zoom_direction: true,
            ..Options::default()
        };
        let mut viewer = Viewer::new(options);
        let _ = viewer.begin_frame(Viewport::from_size(400, 400));
        let mut objects = NO_OBJECTS;
        let _ = viewer
            .execute(ViewerCommand::Zoom { steps: 1.0 }, &mut objects)
            .unwrap();
        assert!((viewer.camera().view().length() - 12.0).abs() < 1e-4);
    }

    #[test]
    fn zoom_clamps_at_minimum_distance() {
        let mut viewer = viewer_with_frame();
        let mut objects = NO_OBJECTS;
        // steps large enough to drive the distance negative
        let _ = viewer
            .execute(ViewerCommand::Zoom { steps: 10.0 }, &mut objects)
            .unwrap();
        assert!(viewer.camera().view().length() > 0.0);
        assert!(viewer.camera().view().length() < 1e-3);
    }

    #[test]
    fn pan_is_rigid() {
        let mut viewer = viewer_with_frame();
        let mut objects = NO_OBJECTS;
        let view_before = viewer.camera().view();
        let eye_before = viewer.camera().eye;
        let center_before = viewer.camera().center;
        let _ = viewer
            .execute(
                ViewerCommand::PanCamera {
                    delta: Vec2::new(40.0, -25.0),
                },
                &mut objects,
            )
            .unwrap();
        let camera = viewer.camera();
        assert!((camera.view() - view_before).length() < 1e-5);
        let eye_shift = camera.eye - eye_before;
        let center_shift = camera.center - center_before;
        assert!((eye_shift - center_shift).length() < 1e-5);
        assert!(eye_shift.length() > 0.0);
    }

    #[test]
    fn rotate_preserves_distance() {
        let mut viewer = viewer_with_frame();
        let mut objects = NO_OBJECTS;
        let direction_before = viewer.camera().view().normalize();
        let _ = viewer
            .execute(
                ViewerCommand::RotateCamera {
                    delta: Vec2::new(40.0, 25.0),
                },
                &mut objects,
            )
            .unwrap();
        let camera = viewer.camera();
        assert!((camera.view().length() - 10.0).abs() < 1e-4);
        assert!(
            (camera.view().normalize() - direction_before).length() > 1e-3
        );
        // center stays put while the eye orbits it
        assert_eq!(camera.center, Vec3::ZERO);
    }

    #[test]
    fn full_width_drag_is_a_half_turn() {
        let mut viewer = viewer_with_frame();
        let mut objects = NO_OBJECTS;
        let _ = viewer
            .execute(
                ViewerCommand::RotateCamera {
                    delta: Vec2::new(400.0, 0.0),
                },
                &mut objects,
            )
            .unwrap();
        let eye = viewer.camera().eye;
        assert!((eye - Vec3::new(0.0, 0.0, -10.0)).length() < 1e-3);
    }

    #[test]
    fn zero_drag_rotation_is_skipped() {
        let mut viewer = viewer_with_frame();
        let mut objects = NO_OBJECTS;
        let eye_before = viewer.camera().eye;
        let _ = viewer
            .execute(
                ViewerCommand::RotateCamera { delta: Vec2::ZERO },
                &mut objects,
            )
            .unwrap();
        assert_eq!(viewer.camera().eye, eye_before);
    }

    #[test]
    fn selection_signals_fire_once() {
        let mut viewer = viewer_with_frame();
        let mut objects = NO_OBJECTS;
        let signal = viewer
            .execute(
                ViewerCommand::Select {
                    id: Some(ObjectId(1)),
                },
                &mut objects,
            )
            .unwrap();
        assert_eq!(
            signal,
            Some(ViewerSignal::SelectionChanged {
                selected: Some(ObjectId(1))
            })
        );
        // same selection again: no signal
        let signal = viewer
            .execute(
                ViewerCommand::Select {
                    id: Some(ObjectId(1)),
                },
                &mut objects,
            )
            .unwrap();
        assert_eq!(signal, None);
    }

    #[test]
    fn delete_flow_requests_then_clears() {
        let mut viewer = viewer_with_frame();
        let mut objects = [sphere(4, Vec3::ZERO, 1.0)];
        let _ = viewer
            .execute(
                ViewerCommand::Select {
                    id: Some(ObjectId(4)),
                },
                &mut objects,
            )
            .unwrap();
        let signal = viewer
            .execute(ViewerCommand::DeleteSelected, &mut objects)
            .unwrap();
        assert_eq!(
            signal,
            Some(ViewerSignal::DeleteRequested {
                id: ObjectId(4),
                label: "sphere 4".to_owned()
            })
        );
        // declining changes nothing; confirming removes and notifies
        assert_eq!(viewer.selected(), Some(ObjectId(4)));
        let signal = viewer.object_removed(ObjectId(4));
        assert_eq!(
            signal,
            Some(ViewerSignal::SelectionChanged { selected: None })
        );
        assert_eq!(viewer.selected(), None);
    }

    #[test]
    fn delete_and_edit_require_a_selection() {
        let mut viewer = viewer_with_frame();
        let mut objects = NO_OBJECTS;
        let signal = viewer
            .execute(ViewerCommand::DeleteSelected, &mut objects)
            .unwrap();
        assert_eq!(signal, None);
        let signal = viewer
            .execute(ViewerCommand::EditSelected, &mut objects)
            .unwrap();
        assert_eq!(signal, None);
    }

    #[test]
    fn drag_moves_selected_object_in_view_plane() {
        let mut viewer = viewer_with_frame();
        let mut objects = [sphere(1, Vec3::ZERO, 1.0)];
        let _ = viewer
            .execute(
                ViewerCommand::Select {
                    id: Some(ObjectId(1)),
                },
                &mut objects,
            )
            .unwrap();
        // Cursor a quarter viewport right of center: world x = 2.5 on
        // the z = 0 plane (ortho half-width 5).
        let _ = viewer
            .execute(
                ViewerCommand::DragSelected {
                    cursor: Vec2::new(300.0, 200.0),
                },
                &mut objects,
            )
            .unwrap();
        assert!((objects[0].center.x - 2.5).abs() < 1e-3);
        assert!(objects[0].center.y.abs() < 1e-3);
        assert!(objects[0].center.z.abs() < 1e-3);
        // camera untouched
        assert_eq!(viewer.camera().eye, Vec3::new(0.0, 0.0, 10.0));
    }

    #[test]
    fn turning_3d_off_resets_the_view() {
        let mut viewer = viewer_with_frame();
        viewer.camera_mut().zoom_to(3.0);
        let signal = viewer.set_is_3d(false);
        assert_eq!(signal, Some(ViewerSignal::OptionsChanged));
        assert_eq!(*viewer.camera(), Camera::default());
        // turning it back on does not reset
        viewer.camera_mut().zoom_to(3.0);
        let _ = viewer.set_is_3d(true);
        assert!((viewer.camera().view().length() - 3.0).abs() < 1e-5);
    }

    #[test]
    fn set_options_sanitizes_and_signals() {
        let mut viewer = viewer_with_frame();
        let options = Options {
            mouse_wheel_sensitivity: 0.0,
            ..Options::default()
        };
        let signal = viewer.set_options(options);
        assert_eq!(signal, Some(ViewerSignal::OptionsChanged));
        assert!(viewer.options().mouse_wheel_sensitivity > 0.0);
        // unchanged options: no signal
        let signal = viewer.set_options(viewer.options().clone());
        assert_eq!(signal, None);
    }

    struct RecordingDelegate {
        calls: Vec<&'static str>,
        hud_color: Option<Color>,
        hud_text: Option<&'static str>,
    }

    impl DrawDelegate for RecordingDelegate {
        fn clear(&mut self, _background: Color) {
            self.calls.push("clear");
        }
        fn draw_scene(
            &mut self,
            _frame: &Frame,
            _selected: Option<ObjectId>,
        ) {
            self.calls.push("scene");
        }
        fn draw_hud(&mut self, hud: &HudContext) {
            self.calls.push("hud");
            self.hud_color = Some(hud.text_color);
            self.hud_text = Some(hud.help_text);
        }
    }

    #[test]
    fn render_frame_runs_in_order() {
        let mut viewer = Viewer::default();
        let mut delegate = RecordingDelegate {
            calls: Vec::new(),
            hud_color: None,
            hud_text: None,
        };
        viewer.render_frame(Viewport::from_size(640, 480), &mut delegate);
        assert_eq!(delegate.calls, vec!["clear", "scene", "hud"]);
        // default light-grey background gets dark HUD text
        assert_eq!(delegate.hud_color, Some(Color::BLACK));
        assert_eq!(delegate.hud_text, Some("Mouse: M=pan, R=rot, W=zoom"));
    }
}
