//! Centralized viewer options with TOML preset support.
//!
//! All tweakable settings are consolidated here and serialize to/from
//! TOML. Everything uses `#[serde(default)]` so partial files (e.g. only
//! overriding `mouse_wheel_sensitivity`) work correctly.

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::ProjectionMode;
use crate::error::GimbalError;
use crate::geometry::Color;

/// Smallest accepted wheel sensitivity; lower values are clamped here
/// rather than rejected (UI tuning parameter, not correctness-critical).
pub const MIN_WHEEL_SENSITIVITY: f32 = 1e-3;

/// HUD font description. Text rendering is external; the core only
/// carries the request through to the HUD draw callback.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct HudFont {
    /// Font family name.
    pub family: String,
    /// Point size.
    #[schemars(title = "HUD Font Size", range(min = 6.0, max = 32.0))]
    pub point_size: f32,
}

impl Default for HudFont {
    fn default() -> Self {
        Self {
            family: "Sans".to_owned(),
            point_size: 10.0,
        }
    }
}

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct Options {
    /// 3D navigation mode. When true the secondary mouse button rotates;
    /// when false it pans. Turning this off resets the camera to the
    /// default view (see [`Viewer::set_is_3d`](crate::viewer::Viewer::set_is_3d)).
    #[schemars(title = "3D Mode")]
    pub is_3d: bool,

    /// Zoom fraction applied per wheel detent. Values at or below
    /// [`MIN_WHEEL_SENSITIVITY`] are silently clamped.
    #[schemars(
        title = "Mouse Wheel Sensitivity",
        range(min = 0.001, max = 1.0),
        extend("step" = 0.01)
    )]
    pub mouse_wheel_sensitivity: f32,

    /// Invert the wheel zoom direction.
    #[schemars(title = "Swap Wheel Zoom Direction")]
    pub swap_mouse_wheel_zoom_direction: bool,

    /// Clear color for the render surface; also drives the HUD text
    /// color choice.
    #[schemars(title = "Background Color")]
    pub background_color: Color,

    /// Font used for HUD text.
    #[schemars(skip)]
    pub hud_font: HudFont,

    /// Round dragged-object coordinates to the nearest integer.
    #[schemars(title = "Snap To Grid")]
    pub snap_to_grid: bool,

    /// Projection flavor used for the per-frame transforms.
    #[schemars(title = "Projection")]
    pub projection: ProjectionMode,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            is_3d: true,
            mouse_wheel_sensitivity: 0.2,
            swap_mouse_wheel_zoom_direction: false,
            background_color: Color::rgb(
                200.0 / 255.0,
                200.0 / 255.0,
                200.0 / 255.0,
            ),
            hud_font: HudFont::default(),
            snap_to_grid: false,
            projection: ProjectionMode::Orthographic,
        }
    }
}

impl Options {
    /// Clamp out-of-range values in place. Called after deserialization
    /// and by [`Viewer::set_options`](crate::viewer::Viewer::set_options).
    pub fn sanitize(&mut self) {
        if self.mouse_wheel_sensitivity < MIN_WHEEL_SENSITIVITY {
            log::warn!(
                "mouse_wheel_sensitivity {} clamped to {MIN_WHEEL_SENSITIVITY}",
                self.mouse_wheel_sensitivity
            );
            self.mouse_wheel_sensitivity = MIN_WHEEL_SENSITIVITY;
        }
    }

    /// Set the wheel sensitivity, clamping to the accepted minimum.
    pub fn set_mouse_wheel_sensitivity(&mut self, sensitivity: f32) {
        self.mouse_wheel_sensitivity =
            sensitivity.max(MIN_WHEEL_SENSITIVITY);
    }

    /// Generate a JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// JSON Schema as a pretty-printed string, for options panels.
    ///
    /// # Errors
    ///
    /// [`GimbalError::OptionsParse`] on serialization failure.
    pub fn json_schema_string() -> Result<String, GimbalError> {
        serde_json::to_string_pretty(&Self::json_schema())
            .map_err(|e| GimbalError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults;
    /// out-of-range values are clamped.
    ///
    /// # Errors
    ///
    /// [`GimbalError::Io`] or [`GimbalError::OptionsParse`].
    pub fn load(path: &Path) -> Result<Self, GimbalError> {
        let content =
            std::fs::read_to_string(path).map_err(GimbalError::Io)?;
        let mut options: Self = toml::from_str(&content)
            .map_err(|e| GimbalError::OptionsParse(e.to_string()))?;
        options.sanitize();
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// [`GimbalError::Io`] or [`GimbalError::OptionsParse`].
    pub fn save(&self, path: &Path) -> Result<(), GimbalError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GimbalError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(GimbalError::Io)?;
        }
        std::fs::write(path, content).map_err(GimbalError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
