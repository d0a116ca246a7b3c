//! Screen/world coordinate mapping.
//!
//! Matrices cross this API as `[f32; 16]` in row-major layout, the layout
//! fixed-function graphics APIs expose when the active matrices are queried
//! (e.g. `glGetFloatv`). They are transposed into column-major [`Mat4`]s
//! before composition and inversion.

use glam::{Mat4, Vec3, Vec4};

use crate::error::GimbalError;

/// Integer rectangle describing the render surface, read once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Left edge in pixels.
    pub x: i32,
    /// Bottom edge in pixels.
    pub y: i32,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Viewport {
    /// Viewport anchored at the origin with the given size.
    #[must_use]
    pub fn from_size(width: i32, height: i32) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    /// Width / height ratio.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::from_size(1, 1)
    }
}

/// Interpret a row-major wire matrix as a column-major transform.
fn from_rows(rows: &[f32; 16]) -> Mat4 {
    // from_cols_array reads column-major, so row-major data lands
    // transposed; one more transpose recovers the actual transform.
    Mat4::from_cols_array(rows).transpose()
}

/// Map a screen-space point into world space.
///
/// `screen` carries pixel x/y with y measured from the top of the viewport
/// and z in {0, 1} selecting the near or far clip plane. The point is
/// normalized into clip space, pushed through the inverse of
/// `projection * modelview`, and homogeneous-divided.
///
/// # Errors
///
/// [`GimbalError::DegenerateTransform`] when the homogeneous w-component is
/// exactly zero (non-invertible transform).
pub fn screen_to_world(
    screen: Vec3,
    viewport: Viewport,
    projection: &[f32; 16],
    modelview: &[f32; 16],
) -> Result<Vec3, GimbalError> {
    let p = from_rows(projection);
    let m = from_rows(modelview);
    let x = screen.x;
    let y = viewport.height as f32 - screen.y; // flip to bottom-origin
    let z = screen.z;
    let clip = Vec4::new(
        2.0 * (x - viewport.x as f32) / viewport.width as f32 - 1.0,
        2.0 * (y - viewport.y as f32) / viewport.height as f32 - 1.0,
        2.0 * z - 1.0, // z arrives as 0 or 1
        1.0,
    );
    let world = (p * m).inverse() * clip;
    if world.w == 0.0 {
        return Err(GimbalError::DegenerateTransform {
            context: "screen_to_world",
        });
    }
    Ok(world.truncate() / world.w)
}

/// Map a world-space point onto the screen.
///
/// Returns pixel x/y with y measured from the top of the viewport and depth
/// in [0, 1].
///
/// # Errors
///
/// [`GimbalError::DegenerateTransform`] when the homogeneous w-component is
/// exactly zero.
pub fn world_to_screen(
    world: Vec3,
    viewport: Viewport,
    projection: &[f32; 16],
    modelview: &[f32; 16],
) -> Result<Vec3, GimbalError> {
    let p = from_rows(projection);
    let m = from_rows(modelview);
    let clip = (p * m) * Vec4::new(world.x, world.y, world.z, 1.0);
    if clip.w == 0.0 {
        return Err(GimbalError::DegenerateTransform {
            context: "world_to_screen",
        });
    }
    let ndc = clip.truncate() / clip.w;
    let x = viewport.x as f32 + (ndc.x + 1.0) * viewport.width as f32 / 2.0;
    let y = viewport.y as f32 + (ndc.y + 1.0) * viewport.height as f32 / 2.0;
    let z = (ndc.z + 1.0) / 2.0;
    Ok(Vec3::new(x, viewport.height as f32 - y, z))
}
