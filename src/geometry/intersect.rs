//! Ray intersection tests.
//!
//! A miss is not an error: both tests return `None` and callers treat it
//! as "do nothing".

use glam::Vec3;

/// Denominator threshold below which a ray counts as parallel to a plane.
const PLANE_PARALLEL_EPSILON: f32 = 1e-5;

/// A half-line in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point.
    pub origin: Vec3,
    /// Direction; not necessarily unit length.
    pub direction: Vec3,
}

impl Ray {
    /// New ray from origin and direction.
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Point at parameter `t` along the ray.
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Same ray with unit-length direction.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            origin: self.origin,
            direction: self.direction.normalize(),
        }
    }
}

/// Closest positive intersection distance of a ray and a sphere.
///
/// Geometric discriminant method. `direction` must be unit length. Returns
/// `None` when the sphere center lies behind the ray origin or the ray's
/// closest approach exceeds the radius; tangent rays hit.
#[must_use]
pub fn intersect_ray_sphere(
    origin: Vec3,
    direction: Vec3,
    center: Vec3,
    radius: f32,
) -> Option<f32> {
    let l = center - origin;
    let tca = l.dot(direction);
    if tca < 0.0 {
        return None;
    }
    let d2 = l.dot(l) - tca * tca;
    let r2 = radius * radius;
    if d2 > r2 {
        return None;
    }
    let thc = (r2 - d2).sqrt();
    Some(tca - thc)
}

/// Intersection distance of a ray and a plane.
///
/// Returns `None` when the ray is (near-)parallel to the plane. The
/// returned distance may be negative when the plane lies behind the ray
/// origin; callers filter on sign.
#[must_use]
pub fn intersect_ray_plane(
    origin: Vec3,
    direction: Vec3,
    point_on_plane: Vec3,
    normal: Vec3,
) -> Option<f32> {
    let numerator = normal.dot(point_on_plane - origin);
    let denominator = normal.dot(direction);
    if denominator.abs() > PLANE_PARALLEL_EPSILON {
        Some(numerator / denominator)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_direct_hit() {
        let t = intersect_ray_sphere(
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::ZERO,
            1.0,
        );
        assert_eq!(t, Some(9.0));
    }

    #[test]
    fn sphere_tangent_ray_hits() {
        // Closest approach exactly equals the radius.
        let t = intersect_ray_sphere(
            Vec3::new(1.0, 0.0, 10.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::ZERO,
            1.0,
        );
        assert_eq!(t, Some(10.0));
    }

    #[test]
    fn sphere_marginal_miss() {
        let t = intersect_ray_sphere(
            Vec3::new(1.001, 0.0, 10.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::ZERO,
            1.0,
        );
        assert_eq!(t, None);
    }

    #[test]
    fn sphere_behind_origin_misses() {
        let t = intersect_ray_sphere(
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::ZERO,
            1.0,
        );
        assert_eq!(t, None);
    }

    #[test]
    fn plane_hit_distance() {
        let t = intersect_ray_plane(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, 1.0),
        );
        assert_eq!(t, Some(5.0));
    }

    #[test]
    fn plane_parallel_ray_misses() {
        let t = intersect_ray_plane(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, 1.0),
        );
        assert_eq!(t, None);
    }

    #[test]
    fn plane_behind_origin_is_negative() {
        let t = intersect_ray_plane(
            Vec3::new(0.0, 0.0, -5.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, 1.0),
        );
        assert_eq!(t, Some(-5.0));
    }

    #[test]
    fn ray_at_walks_the_direction() {
        let ray =
            Ray::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(ray.at(0.5), Vec3::new(1.0, 1.0, 0.0));
        let unit = ray.normalized();
        assert!((unit.direction.length() - 1.0).abs() < 1e-6);
    }
}
