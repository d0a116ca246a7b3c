//! Pure geometric and color utilities: screen/world unprojection, ray
//! intersection tests, and luminance/contrast helpers.

/// Color type and luminance/contrast utilities.
pub mod color;
/// Ray type and ray/sphere, ray/plane intersection tests.
pub mod intersect;
/// Screen/world coordinate mapping through raw projection matrices.
pub mod transform;

pub use color::{color_with_max_contrast, luminance, Color};
pub use intersect::{intersect_ray_plane, intersect_ray_sphere, Ray};
pub use transform::{screen_to_world, world_to_screen, Viewport};
