//! Eye/center/up camera model.

use glam::{Mat4, Vec3};

/// Smallest allowed eye-to-center distance; zooming is clamped here to
/// avoid a degenerate zero-length view vector.
pub const MIN_ZOOM_DISTANCE: f32 = 1e-5;

/// Viewpoint state: eye position, look-at center, and up hint.
///
/// `up` must not be collinear with the view direction; the one gesture
/// that can approach that case (a perfectly vertical drag) is classified
/// explicitly by [`Camera::is_left_to_right`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Camera position in world space.
    pub eye: Vec3,
    /// The point the camera looks at; pivot for rotation.
    pub center: Vec3,
    /// Up direction hint; need not be normalized or exactly
    /// perpendicular to the view.
    pub up: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 10.0),
            center: Vec3::ZERO,
            up: Vec3::Y,
        }
    }
}

impl Camera {
    /// View vector, `center - eye`. Unit-free; callers normalize as
    /// needed. Its length is the current zoom distance.
    #[must_use]
    pub fn view(&self) -> Vec3 {
        self.center - self.eye
    }

    /// Move the eye along the view axis so the eye-to-center distance
    /// equals `distance` (clamped to [`MIN_ZOOM_DISTANCE`]). Direction is
    /// preserved.
    pub fn zoom_to(&mut self, distance: f32) {
        let distance = distance.max(MIN_ZOOM_DISTANCE);
        self.eye = self.center - self.view().normalize() * distance;
    }

    /// Restore the default pose: eye (0, 0, 10), center at the origin,
    /// up +Y.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Right-handed orthonormal basis `(xhat, yhat, zhat)` of the camera
    /// frame: `zhat` points from center toward the eye, `xhat` is the
    /// screen-right axis, `yhat` screen-up.
    #[must_use]
    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        let zhat = -self.view().normalize();
        let xhat = self.up.cross(zhat).normalize();
        let yhat = zhat.cross(xhat).normalize();
        (xhat, yhat, zhat)
    }

    /// Model transform for a camera-facing plane ("billboard") anchored
    /// at `origin` with its local x-axis pointing toward `right`.
    ///
    /// Useful for pinning flat content (labels, sprites) so it faces the
    /// viewer regardless of camera orientation.
    #[must_use]
    pub fn billboard_transform(&self, origin: Vec3, right: Vec3) -> Mat4 {
        let xhat = (right - origin).normalize();
        let yhat = xhat.cross(self.view()).normalize();
        let zhat = xhat.cross(yhat).normalize();
        Mat4::from_cols(
            xhat.extend(0.0),
            yhat.extend(0.0),
            zhat.extend(0.0),
            origin.extend(1.0),
        )
    }

    /// Classify a world-space drag vector as left-to-right relative to
    /// the camera.
    ///
    /// When the vector is nearly parallel to the up axis (right-component
    /// below `1e-5 * |v|`), straight-up reads as left-to-right and
    /// straight-down as right-to-left. Supports direction-aware UI
    /// feedback; not used by the navigation gestures themselves.
    #[must_use]
    pub fn is_left_to_right(&self, v: Vec3) -> bool {
        let right = self.view().cross(self.up);
        let dpr = right.normalize().dot(v);
        let len = v.length();
        let epsilon = 1e-5 * len;
        if dpr.abs() < epsilon {
            // straight up-down
            let dpu = self.up.normalize().dot(v);
            if -dpu > len - epsilon {
                return false; // straight down
            }
            return true; // straight up
        }
        dpr > 0.0
    }
}
