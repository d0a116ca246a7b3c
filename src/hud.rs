//! Screen-space overlay (HUD) helpers.
//!
//! The HUD itself is painted by the embedding application; this module
//! supplies the pieces the core is responsible for: a readable text
//! color for the current background, the mouse-help string, and a
//! scoped save/restore guard for overlay drawing.

use crate::geometry::{luminance, Color};
use crate::options::HudFont;

/// Luminance above which HUD text switches to black
/// (WCAG guideline is L > ~0.179).
const DARK_TEXT_LUMINANCE: f32 = 0.25;

/// Pick a readable HUD text color for the given background.
#[must_use]
pub fn hud_text_color(background: Color) -> Color {
    if luminance(background) > DARK_TEXT_LUMINANCE {
        Color::BLACK
    } else {
        Color::WHITE
    }
}

/// Mouse-help string for the current camera mode.
#[must_use]
pub fn help_text(is_3d: bool) -> &'static str {
    if is_3d {
        "Mouse: M=pan, R=rot, W=zoom"
    } else {
        "Mouse: M,R=pan, W=zoom"
    }
}

/// Everything the application needs to paint the HUD for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct HudContext {
    /// Text color chosen against the background.
    pub text_color: Color,
    /// Mouse-help string for the current camera mode.
    pub help_text: &'static str,
    /// Font the overlay should use.
    pub font: HudFont,
}

/// Render state that must survive overlay drawing.
///
/// Overlay painting typically clobbers blend/depth/raster state; the
/// target graphics API decides what "save" and "restore" mean (explicit
/// state struct, attribute stack, command-buffer barrier, ...).
pub trait RenderState {
    /// Snapshot the state the overlay pass may clobber.
    fn save_overlay_state(&mut self);
    /// Restore the snapshot taken by `save_overlay_state`.
    fn restore_overlay_state(&mut self);
}

/// RAII guard that saves render state on creation and restores it on
/// drop, scoping overlay drawing.
///
/// ```ignore
/// {
///     let _guard = OverlayGuard::begin(&mut state);
///     // ... paint HUD text ...
/// } // state restored here
/// ```
pub struct OverlayGuard<'a, S: RenderState> {
    state: &'a mut S,
}

impl<'a, S: RenderState> OverlayGuard<'a, S> {
    /// Save the overlay-relevant state and return the guard.
    pub fn begin(state: &'a mut S) -> Self {
        state.save_overlay_state();
        Self { state }
    }
}

impl<S: RenderState> Drop for OverlayGuard<'_, S> {
    fn drop(&mut self) {
        self.state.restore_overlay_state();
    }
}
