//! Persistent canvas settings.
//!
//! Stored as JSON in the user's config directory. Every field has a default,
//! so partial or older files still load.

use crate::constants::{
    DEFAULT_BRUSH_COLOR, DEFAULT_BRUSH_RADIUS, DEFAULT_FILL_TOLERANCE, MAX_SCALE, MIN_SCALE,
    PINCH_TIMEOUT_MS, SLOP_THRESHOLD, WHEEL_ZOOM_FACTOR,
};
use crate::error::{CanvasError, CanvasResult};
use crate::fill::Tolerance;
use crate::input::{DrawOptions, GestureConfig};
use crate::types::{Color, Tool};
use crate::viewport::ScaleExtents;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    pub min_scale: f32,
    pub max_scale: f32,
    /// Manhattan distance in client units before a touch counts as movement
    pub slop_threshold: f32,
    pub pinch_timeout_ms: u64,
    pub wheel_zoom_factor: f32,
    pub pan_and_zoom: bool,
    pub tool: Tool,
    /// `#rrggbb` or `#rrggbbaa`
    pub brush_color: String,
    pub brush_radius: f32,
    pub fill_tolerance: Tolerance,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            slop_threshold: SLOP_THRESHOLD,
            pinch_timeout_ms: PINCH_TIMEOUT_MS,
            wheel_zoom_factor: WHEEL_ZOOM_FACTOR,
            pan_and_zoom: false,
            tool: Tool::Brush,
            brush_color: DEFAULT_BRUSH_COLOR.to_hex(),
            brush_radius: DEFAULT_BRUSH_RADIUS,
            fill_tolerance: DEFAULT_FILL_TOLERANCE,
        }
    }
}

impl CanvasSettings {
    pub fn load(path: &Path) -> CanvasResult<Self> {
        let content = fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load from `path`, falling back to defaults when the file is missing or
    /// unusable.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Self::default();
        }
        match Self::load(path) {
            Ok(settings) => settings,
            Err(err) => {
                warn!(path = %path.display(), %err, "failed to load settings, using defaults");
                Self::default()
            }
        }
    }

    /// Write atomically: a temp file in the same directory is persisted over
    /// the target.
    pub fn save(&self, path: &Path) -> CanvasResult<()> {
        self.validate()?;
        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let json = serde_json::to_string_pretty(self)?;
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(path)?;
        debug!(path = %path.display(), "settings saved");
        Ok(())
    }

    pub fn validate(&self) -> CanvasResult<()> {
        if !(self.min_scale > 0.0 && self.min_scale.is_finite()) {
            return Err(CanvasError::InvalidSettings(format!(
                "min_scale must be positive, got {}",
                self.min_scale
            )));
        }
        if !(self.max_scale >= self.min_scale && self.max_scale.is_finite()) {
            return Err(CanvasError::InvalidSettings(format!(
                "max_scale ({}) must be at least min_scale ({})",
                self.max_scale, self.min_scale
            )));
        }
        if !(self.slop_threshold >= 0.0) {
            return Err(CanvasError::InvalidSettings(format!(
                "slop_threshold must not be negative, got {}",
                self.slop_threshold
            )));
        }
        if self.pinch_timeout_ms == 0 {
            return Err(CanvasError::InvalidSettings(
                "pinch_timeout_ms must be non-zero".to_string(),
            ));
        }
        if !self.wheel_zoom_factor.is_finite() {
            return Err(CanvasError::InvalidSettings(
                "wheel_zoom_factor must be finite".to_string(),
            ));
        }
        if !(self.brush_radius >= 0.0) {
            return Err(CanvasError::InvalidSettings(format!(
                "brush_radius must not be negative, got {}",
                self.brush_radius
            )));
        }
        Color::from_hex(&self.brush_color)?;
        Ok(())
    }

    pub fn scale_extents(&self) -> ScaleExtents {
        ScaleExtents::new(self.min_scale, self.max_scale)
    }

    pub fn gesture_config(&self) -> GestureConfig {
        GestureConfig {
            slop_threshold: self.slop_threshold,
            pinch_timeout: Duration::from_millis(self.pinch_timeout_ms),
            wheel_zoom_factor: self.wheel_zoom_factor,
        }
    }

    /// Drawing options for a live canvas. An unparseable colour falls back to
    /// the default brush colour.
    pub fn draw_options(&self) -> DrawOptions {
        let defaults = DrawOptions::default();
        DrawOptions {
            disabled: false,
            pan_and_zoom: self.pan_and_zoom,
            tool: self.tool,
            brush_color: Color::from_hex(&self.brush_color).unwrap_or(defaults.brush_color),
            brush_radius: self.brush_radius,
            fill_tolerance: self.fill_tolerance,
        }
    }
}

/// `<config dir>/inkboard/settings.json`
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("inkboard").join("settings.json"))
}
