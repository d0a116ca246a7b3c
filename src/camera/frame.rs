//! Per-frame projection and look-at transform builder.
//!
//! A [`Frame`] is derived from the camera and viewport once per displayed
//! frame and never persisted; the clip volume scales with the current zoom
//! distance so geometry does not clip as the user zooms in or out.

use glam::{Mat4, Vec4};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::Camera;
use crate::geometry::Viewport;

/// Vertical field of view for the perspective mode, in degrees.
const PERSPECTIVE_FOVY_DEGREES: f32 = 20.0;

/// Projection flavor used when deriving a [`Frame`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionMode {
    /// Symmetric orthographic box sized by the zoom distance.
    #[default]
    Orthographic,
    /// Perspective projection with a fixed vertical field of view.
    Perspective,
}

/// Per-frame transforms derived from camera + viewport.
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    /// Viewport the transforms were computed for.
    pub viewport: Viewport,
    /// Projection matrix (column-major, OpenGL [-1, 1] depth range).
    pub projection: Mat4,
    /// World-to-camera look-at transform.
    pub modelview: Mat4,
}

impl Frame {
    /// Derive orthographic transforms for the given camera and viewport.
    #[must_use]
    pub fn compute(camera: &Camera, viewport: Viewport) -> Self {
        Self::with_projection(
            camera,
            viewport,
            ProjectionMode::Orthographic,
        )
    }

    /// Derive transforms with an explicit projection mode.
    ///
    /// Near and far planes sit at `zoom / 100` and `zoom * 2`
    /// respectively; the orthographic half-extent is `zoom / 2` before
    /// aspect correction, which stretches the shorter viewport axis so
    /// pixel aspect matches world aspect.
    #[must_use]
    pub fn with_projection(
        camera: &Camera,
        viewport: Viewport,
        mode: ProjectionMode,
    ) -> Self {
        let zoom = camera.view().length();
        let near = zoom / 100.0;
        let far = zoom * 2.0;
        let aspect = viewport.aspect();
        let projection = match mode {
            ProjectionMode::Orthographic => {
                let half = zoom / 2.0;
                let (mut left, mut right) = (-half, half);
                let (mut bottom, mut top) = (-half, half);
                if aspect < 1.0 {
                    bottom /= aspect;
                    top /= aspect;
                } else if aspect > 1.0 {
                    left *= aspect;
                    right *= aspect;
                }
                Mat4::orthographic_rh_gl(
                    left, right, bottom, top, near, far,
                )
            }
            ProjectionMode::Perspective => Mat4::perspective_rh_gl(
                PERSPECTIVE_FOVY_DEGREES.to_radians(),
                aspect,
                near,
                far,
            ),
        };
        Self {
            viewport,
            projection,
            modelview: look_at(camera),
        }
    }

    /// Projection matrix in the row-major wire layout accepted by the
    /// [`crate::geometry::transform`] functions.
    #[must_use]
    pub fn projection_rows(&self) -> [f32; 16] {
        self.projection.transpose().to_cols_array()
    }

    /// Modelview matrix in the row-major wire layout.
    #[must_use]
    pub fn modelview_rows(&self) -> [f32; 16] {
        self.modelview.transpose().to_cols_array()
    }
}

/// Look-at transform from the camera's orthonormal basis; translation is
/// `-dot(eye, axis)` per axis.
fn look_at(camera: &Camera) -> Mat4 {
    let (xhat, yhat, zhat) = camera.basis();
    Mat4::from_cols(
        Vec4::new(xhat.x, yhat.x, zhat.x, 0.0),
        Vec4::new(xhat.y, yhat.y, zhat.y, 0.0),
        Vec4::new(xhat.z, yhat.z, zhat.z, 0.0),
        Vec4::new(
            -camera.eye.dot(xhat),
            -camera.eye.dot(yhat),
            -camera.eye.dot(zhat),
            1.0,
        ),
    )
}
