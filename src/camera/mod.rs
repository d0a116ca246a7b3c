//! Camera system: viewpoint state and per-frame transform derivation.

/// Eye/center/up camera model.
pub mod core;
/// Per-frame projection and look-at transform builder.
pub mod frame;

pub use core::{Camera, MIN_ZOOM_DISTANCE};
pub use frame::{Frame, ProjectionMode};
