// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Camera-and-picking core for interactive 2D/3D viewports.
//!
//! Gimbal turns discrete mouse gestures into continuous camera motion
//! (orbit, pan, zoom) and cursor positions into world-space ray picks,
//! while staying decoupled from any particular window system or
//! renderer: the host surface forwards raw events and draw callbacks,
//! the application owns the scene objects.
//!
//! # Key entry points
//!
//! - [`viewer::Viewer`] - camera + selection state, command execution,
//!   per-frame transform derivation
//! - [`input::InputProcessor`] - raw events in, viewer commands out
//! - [`picking`] - cursor rays and object hit-testing
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Architecture
//!
//! Input events flow through the [`input::InputProcessor`]'s gesture
//! state machine (idle / rotating / panning / dragging-object) into
//! [`viewer::ViewerCommand`] values; [`viewer::Viewer::execute`] mutates
//! camera or object state and hands back [`viewer::ViewerSignal`]
//! notifications. Each displayed frame recomputes an orthographic (or
//! perspective) projection and look-at transform sized by the current
//! zoom distance; the picking engine unprojects cursor positions through
//! those same transforms.

pub mod camera;
pub mod error;
pub mod geometry;
pub mod hud;
pub mod input;
pub mod options;
pub mod picking;
pub mod viewer;
