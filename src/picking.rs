//! Cursor picking: ray casting through the current frame's transforms and
//! hit-testing against application-owned scene objects.
//!
//! The object registry is owned by the application; the core stores and
//! compares only [`ObjectId`] values and never owns object lifetime.

use glam::{Vec2, Vec3};

use crate::camera::Frame;
use crate::error::GimbalError;
use crate::geometry::{
    intersect_ray_plane, intersect_ray_sphere, screen_to_world, Color, Ray,
};

/// Stable, application-assigned identity of a pickable object.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub struct ObjectId(
    /// Raw application-assigned value.
    pub u64,
);

/// A pickable world-space object exposed to the navigation core.
///
/// Implementors supply an intersection test (sphere or any other shape)
/// plus a position that dragging can update.
pub trait SceneObject {
    /// Stable identity.
    fn id(&self) -> ObjectId;

    /// Human-readable label, used in delete-confirmation prompts.
    fn label(&self) -> &str {
        "object"
    }

    /// World-space intersection distance along a unit-direction ray, or
    /// `None` on a miss.
    fn intersect(&self, ray: &Ray) -> Option<f32>;

    /// Current world-space position.
    fn position(&self) -> Vec3;

    /// Move the object; called while it is being dragged.
    fn set_position(&mut self, position: Vec3);
}

/// Ready-made spherical scene object.
#[derive(Debug, Clone)]
pub struct SphereObject {
    /// Stable identity.
    pub id: ObjectId,
    /// Display label.
    pub label: String,
    /// Sphere center in world space.
    pub center: Vec3,
    /// Sphere radius.
    pub radius: f32,
    /// Display color.
    pub color: Color,
}

impl SceneObject for SphereObject {
    fn id(&self) -> ObjectId {
        self.id
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn intersect(&self, ray: &Ray) -> Option<f32> {
        intersect_ray_sphere(
            ray.origin,
            ray.direction,
            self.center,
            self.radius,
        )
    }

    fn position(&self) -> Vec3 {
        self.center
    }

    fn set_position(&mut self, position: Vec3) {
        self.center = position;
    }
}

/// Result of a successful object pick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    /// Identity of the closest object hit.
    pub id: ObjectId,
    /// Distance from the ray origin to the intersection.
    pub distance: f32,
}

/// Cast a world-space ray through the cursor.
///
/// The cursor is unprojected at the near (z = 0) and far (z = 1) planes;
/// the ray direction is far minus origin and is *not* normalized;
/// intersection tests that assume unit length normalize first.
///
/// # Errors
///
/// Propagates [`GimbalError::DegenerateTransform`] from the unprojection.
pub fn pick_ray(cursor: Vec2, frame: &Frame) -> Result<Ray, GimbalError> {
    let projection = frame.projection_rows();
    let modelview = frame.modelview_rows();
    let origin = screen_to_world(
        Vec3::new(cursor.x, cursor.y, 0.0),
        frame.viewport,
        &projection,
        &modelview,
    )?;
    let far = screen_to_world(
        Vec3::new(cursor.x, cursor.y, 1.0),
        frame.viewport,
        &projection,
        &modelview,
    )?;
    Ok(Ray::new(origin, far - origin))
}

/// Hit-test the cursor against every candidate and return the closest
/// non-negative hit.
///
/// Ties are broken first-seen-wins; an empty candidate set or all-miss
/// yields `None`.
///
/// # Errors
///
/// Propagates [`GimbalError::DegenerateTransform`] from the ray cast.
pub fn pick_object<S: SceneObject>(
    cursor: Vec2,
    frame: &Frame,
    objects: &[S],
) -> Result<Option<PickHit>, GimbalError> {
    let ray = pick_ray(cursor, frame)?.normalized();
    let mut best: Option<PickHit> = None;
    for object in objects {
        if let Some(t) = object.intersect(&ray) {
            let closer =
                best.as_ref().is_none_or(|hit| t < hit.distance);
            if t >= 0.0 && closer {
                best = Some(PickHit {
                    id: object.id(),
                    distance: t,
                });
            }
        }
    }
    Ok(best)
}

/// Intersect the cursor ray with the screen-facing plane through
/// `point_on_plane` (normal = the camera view direction), keeping a
/// dragged object at constant visual depth.
///
/// `snap_to_grid` rounds each coordinate to the nearest integer. A miss
/// (plane behind the ray or near-parallel) returns `point_on_plane`
/// unchanged (a safe no-op, not a failure).
///
/// # Errors
///
/// Propagates [`GimbalError::DegenerateTransform`] from the ray cast.
pub fn pick_point_in_plane(
    cursor: Vec2,
    frame: &Frame,
    view: Vec3,
    point_on_plane: Vec3,
    snap_to_grid: bool,
) -> Result<Vec3, GimbalError> {
    let ray = pick_ray(cursor, frame)?.normalized();
    let hit = intersect_ray_plane(
        ray.origin,
        ray.direction,
        point_on_plane,
        view.normalize(),
    );
    let Some(t) = hit else {
        return Ok(point_on_plane);
    };
    if t < 0.0 {
        return Ok(point_on_plane);
    }
    let point = ray.at(t);
    Ok(if snap_to_grid { point.round() } else { point })
}
