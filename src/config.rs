//! Canvas configuration supplied by the host page.
//!
//! The host passes a JSON object; any missing field takes its default from
//! [`crate::consts`]. Values are validated once at construction so the
//! engine can use them without re-checking.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::catalog::Family;
use crate::consts::{
    BACKGROUND_FILL, CONTEXT_ROTATION_STEP_DEG, DEFAULT_PIXELS_PER_INCH, FREE_ROTATION_STEP_DEG, GRID_COLOR,
    GRID_SPACING_FT, HIGHLIGHT_COLOR, MAX_ZOOM, MIN_DIMENSION, MIN_ZOOM, OUTLINE_COLOR, ZOOM_STEP,
};
use crate::error::LayoutError;
use crate::input::RotateStep;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Screen density assumed when turning feet-per-inch into pixels.
    pub pixels_per_inch: f64,
    /// World distance between grid lines, in feet.
    pub grid_spacing_ft: f64,
    /// Degrees added by the free rotate control.
    pub free_rotation_step_deg: f64,
    /// Degrees added by the context menu.
    pub context_rotation_step_deg: f64,
    /// Smallest allowed item dimension.
    pub min_dimension: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Multiplier for one zoom-in / zoom-out step.
    pub zoom_step: f64,
    pub background_fill: String,
    pub grid_color: String,
    pub outline_color: String,
    pub highlight_color: String,
    /// Planner the canvas is embedded in. When set, bulk adds are limited to
    /// the kinds that planner offers.
    pub family: Option<Family>,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            pixels_per_inch: DEFAULT_PIXELS_PER_INCH,
            grid_spacing_ft: GRID_SPACING_FT,
            free_rotation_step_deg: FREE_ROTATION_STEP_DEG,
            context_rotation_step_deg: CONTEXT_ROTATION_STEP_DEG,
            min_dimension: MIN_DIMENSION,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            zoom_step: ZOOM_STEP,
            background_fill: BACKGROUND_FILL.to_string(),
            grid_color: GRID_COLOR.to_string(),
            outline_color: OUTLINE_COLOR.to_string(),
            highlight_color: HIGHLIGHT_COLOR.to_string(),
            family: None,
        }
    }
}

impl CanvasConfig {
    /// Parse host JSON, filling gaps with defaults, then validate.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Json`] for malformed JSON and
    /// [`LayoutError::InvalidConfig`] for out-of-range values.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every numeric field is usable.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let positive = [
            ("pixels_per_inch", self.pixels_per_inch),
            ("grid_spacing_ft", self.grid_spacing_ft),
            ("min_dimension", self.min_dimension),
            ("min_zoom", self.min_zoom),
            ("max_zoom", self.max_zoom),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(LayoutError::InvalidConfig(format!("{name} must be positive, got {value}")));
            }
        }
        if self.min_zoom > self.max_zoom {
            return Err(LayoutError::InvalidConfig(format!(
                "min_zoom {} exceeds max_zoom {}",
                self.min_zoom, self.max_zoom
            )));
        }
        if !(self.zoom_step.is_finite() && self.zoom_step > 1.0) {
            return Err(LayoutError::InvalidConfig(format!("zoom_step must exceed 1, got {}", self.zoom_step)));
        }
        for (name, value) in [
            ("free_rotation_step_deg", self.free_rotation_step_deg),
            ("context_rotation_step_deg", self.context_rotation_step_deg),
        ] {
            if !value.is_finite() {
                return Err(LayoutError::InvalidConfig(format!("{name} must be finite")));
            }
        }
        Ok(())
    }

    /// Degrees applied by one rotate request from `step`.
    #[must_use]
    pub fn rotation_degrees(&self, step: RotateStep) -> f64 {
        match step {
            RotateStep::Free => self.free_rotation_step_deg,
            RotateStep::Context => self.context_rotation_step_deg,
        }
    }
}
