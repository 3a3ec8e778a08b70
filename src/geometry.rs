//! Geometric model: item shapes in world feet, independent of screen space.
//!
//! Every shape is center-anchored. Queries take points already expressed in
//! the shape's own rotated frame; [`to_local`] produces that frame from a
//! world point, the item's center, and its rotation.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

use crate::camera::{Point, Unit};
use crate::catalog::clamp_dimension;
use crate::consts::FULL_TURN_DEG;

/// Shape of a placeable item. Dimensions are in the item's stored unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    /// Rectangle, `width` along local x and `length` along local y.
    Rectangle { width: f64, length: f64 },
    /// Circle of the given diameter.
    Circle { diameter: f64 },
}

impl Shape {
    /// The same shape with dimensions converted from `unit` into feet.
    #[must_use]
    pub fn in_feet(self, unit: Unit) -> Self {
        match self {
            Self::Rectangle { width, length } => {
                Self::Rectangle { width: unit.to_feet(width), length: unit.to_feet(length) }
            }
            Self::Circle { diameter } => Self::Circle { diameter: unit.to_feet(diameter) },
        }
    }

    /// Half-width and half-height.
    #[must_use]
    pub fn half_extents(self) -> (f64, f64) {
        match self {
            Self::Rectangle { width, length } => (width / 2.0, length / 2.0),
            Self::Circle { diameter } => (diameter / 2.0, diameter / 2.0),
        }
    }

    /// The same shape with every zero, negative, or non-finite dimension
    /// replaced by `min`.
    #[must_use]
    pub fn clamped(self, min: f64) -> Self {
        match self {
            Self::Rectangle { width, length } => {
                Self::Rectangle { width: clamp_dimension(width, min), length: clamp_dimension(length, min) }
            }
            Self::Circle { diameter } => Self::Circle { diameter: clamp_dimension(diameter, min) },
        }
    }

    /// Whether `local` (in the shape's rotated frame, origin at its center)
    /// lies inside or on the boundary.
    #[must_use]
    pub fn contains_point(self, local: Point) -> bool {
        match self {
            Self::Rectangle { .. } => {
                let (hw, hh) = self.half_extents();
                local.x.abs() <= hw && local.y.abs() <= hh
            }
            Self::Circle { diameter } => local.x.hypot(local.y) <= diameter / 2.0,
        }
    }
}

/// Axis-aligned box `(min, max)` enclosing `shape` centered at `center` and
/// rotated `rotation` degrees. Circles ignore rotation.
#[must_use]
pub fn rotated_bounding_box(shape: Shape, center: Point, rotation: f64) -> (Point, Point) {
    let (hw, hh) = shape.half_extents();
    let (ew, eh) = match shape {
        Shape::Circle { .. } => (hw, hh),
        Shape::Rectangle { .. } => {
            let (sin, cos) = rotation.to_radians().sin_cos();
            let (sin, cos) = (sin.abs(), cos.abs());
            (hw * cos + hh * sin, hw * sin + hh * cos)
        }
    };
    (Point::new(center.x - ew, center.y - eh), Point::new(center.x + ew, center.y + eh))
}

/// Express `world` in the frame of a shape centered at `center` and rotated
/// `rotation` degrees.
#[must_use]
pub fn to_local(world: Point, center: Point, rotation: f64) -> Point {
    (world - center).rotated(-rotation)
}

/// Normalize an angle in degrees into `[0, 360)`.
#[must_use]
pub fn normalize_degrees(degrees: f64) -> f64 {
    if !degrees.is_finite() {
        return 0.0;
    }
    let r = degrees.rem_euclid(FULL_TURN_DEG);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if r >= FULL_TURN_DEG { 0.0 } else { r }
}
