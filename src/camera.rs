//! Coordinate mapping between world feet and screen pixels, and every unit
//! conversion the canvas needs.
//!
//! World space is measured in feet. A [`Camera`] carries the baseline
//! pixels-per-foot `scale` derived from the layout's feet-per-inch ratio and
//! the user-controlled `zoom`. Both axes are scaled identically so shapes keep
//! their proportions on screen.
//!
//! This is the only module that knows how many feet make a metre; everything
//! downstream of it is unit-agnostic.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::consts::{CM_PER_INCH, FEET_PER_METRE};
use crate::error::LayoutError;

/// A point in either screen or world space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Rotate around the origin by `degrees` (clockwise on a y-down screen).
    #[must_use]
    pub fn rotated(self, degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self { x: self.x * cos - self.y * sin, y: self.x * sin + self.y * cos }
    }

    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self { x: self.x * factor, y: self.y * factor }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

/// Scale and zoom for the layout canvas.
///
/// `scale` is pixels per world foot at zoom 1.0.
/// `zoom` is the user multiplier (1.0 = no zoom).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub scale: f64,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { scale: 1.0, zoom: 1.0 }
    }
}

impl Camera {
    #[must_use]
    pub fn new(scale: f64, zoom: f64) -> Self {
        Self { scale, zoom }
    }

    /// Build a camera for a layout drawn at `feet_per_inch` on a screen of
    /// `pixels_per_inch` density.
    #[must_use]
    pub fn for_layout(feet_per_inch: f64, pixels_per_inch: f64, zoom: f64) -> Self {
        Self { scale: pixels_per_foot(feet_per_inch, pixels_per_inch), zoom }
    }

    /// Effective pixels per world foot.
    #[must_use]
    pub fn pixels_per_unit(&self) -> f64 {
        self.scale * self.zoom
    }

    /// Convert a world-space point (feet) to screen pixels.
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        world.scaled(self.pixels_per_unit())
    }

    /// Convert a screen-space point (pixels) to world feet.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        let k = self.pixels_per_unit();
        Point { x: screen.x / k, y: screen.y / k }
    }

    /// Convert a world distance to a screen distance.
    #[must_use]
    pub fn world_dist_to_screen(&self, world_dist: f64) -> f64 {
        world_dist * self.pixels_per_unit()
    }

    /// Convert a screen distance to a world distance.
    #[must_use]
    pub fn screen_dist_to_world(&self, screen_dist: f64) -> f64 {
        screen_dist / self.pixels_per_unit()
    }

    /// Set zoom, clamped to `[min, max]`. Non-finite or non-positive input is ignored.
    pub fn set_zoom(&mut self, zoom: f64, min: f64, max: f64) {
        if zoom.is_finite() && zoom > 0.0 {
            self.zoom = zoom.clamp(min, max);
        }
    }
}

// =============================================================
// Unit conversion
// =============================================================

/// Convert metres to feet.
#[must_use]
pub fn metres_to_feet(metres: f64) -> f64 {
    metres * FEET_PER_METRE
}

/// Convert feet to metres.
#[must_use]
pub fn feet_to_metres(feet: f64) -> f64 {
    feet / FEET_PER_METRE
}

/// Feet represented by one screen inch for an imperial "`inches` = `feet`" ratio.
#[must_use]
pub fn imperial_to_scale(inches: f64, feet: f64) -> f64 {
    feet / inches
}

/// Feet-per-inch equivalent of a metric "`cm` = `metres`" ratio.
#[must_use]
pub fn metric_to_imperial_scale(cm: f64, metres: f64) -> f64 {
    (metres * FEET_PER_METRE * CM_PER_INCH) / cm
}

/// Pixels per foot for a feet-per-inch ratio at the given screen density.
#[must_use]
pub fn pixels_per_foot(feet_per_inch: f64, pixels_per_inch: f64) -> f64 {
    pixels_per_inch / feet_per_inch
}

/// A drawing scale as entered in the form, in either unit system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "system", rename_all = "lowercase")]
pub enum UnitScale {
    /// `inches` on screen represent `feet` in the world.
    Imperial { inches: f64, feet: f64 },
    /// `cm` on screen represent `metres` in the world.
    Metric { cm: f64, metres: f64 },
}

impl UnitScale {
    /// Resolve to feet-per-inch.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidScale`] if any term is zero, negative, or
    /// not finite.
    pub fn feet_per_inch(self) -> Result<f64, LayoutError> {
        let (screen, world) = match self {
            Self::Imperial { inches, feet } => (inches, feet),
            Self::Metric { cm, metres } => (cm, metres),
        };
        if !(screen.is_finite() && world.is_finite() && screen > 0.0 && world > 0.0) {
            return Err(LayoutError::InvalidScale(format!("{self:?}")));
        }
        Ok(match self {
            Self::Imperial { inches, feet } => imperial_to_scale(inches, feet),
            Self::Metric { cm, metres } => metric_to_imperial_scale(cm, metres),
        })
    }
}

/// Unit an item's stored dimensions are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Feet,
    Metres,
}

impl Unit {
    /// Convert a length in this unit to feet.
    #[must_use]
    pub fn to_feet(self, value: f64) -> f64 {
        match self {
            Self::Feet => value,
            Self::Metres => metres_to_feet(value),
        }
    }

    /// Convert a length in feet to this unit.
    #[must_use]
    pub fn from_feet(self, feet: f64) -> f64 {
        match self {
            Self::Feet => feet,
            Self::Metres => feet_to_metres(feet),
        }
    }
}
