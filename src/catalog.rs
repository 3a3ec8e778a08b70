//! Item-kind tables for the outdoor, room, and tent planners, and the form
//! boundary that turns user input into valid items.
//!
//! Each [`ItemType`] carries a default shape, unit, color, and label. The
//! form layer describes what it wants with an [`ItemSpec`]; [`ItemSpec::build`]
//! applies overrides and clamps every dimension to the configured minimum so
//! no item ever carries a zero or negative size.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use serde::{Deserialize, Serialize};

use crate::camera::{Point, Unit};
use crate::doc::{Item, ItemId};
use crate::error::LayoutError;
use crate::geometry::Shape;

/// Which planner an item kind belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Outdoor,
    Room,
    Tent,
}

/// Catalog kind of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemType {
    #[serde(rename = "tent_8x8")]
    Tent8x8,
    #[serde(rename = "tent_10x10")]
    Tent10x10,
    #[serde(rename = "tent_10x20")]
    Tent10x20,
    #[serde(rename = "tent_20x20")]
    Tent20x20,
    #[serde(rename = "tent_20x30")]
    Tent20x30,
    #[serde(rename = "tent_30x30")]
    Tent30x30,
    #[serde(rename = "frame_tent")]
    FrameTent,
    #[serde(rename = "video_wall")]
    VideoWall,
    #[serde(rename = "toilet")]
    Toilet,
    #[serde(rename = "handwash")]
    Handwash,
    #[serde(rename = "sink")]
    Sink,
    #[serde(rename = "stage")]
    Stage,
    #[serde(rename = "custom")]
    Custom,
    #[serde(rename = "round_table")]
    RoundTable,
    #[serde(rename = "banquet_table")]
    BanquetTable,
    #[serde(rename = "cocktail_table")]
    CocktailTable,
    #[serde(rename = "chair")]
    Chair,
    #[serde(rename = "dance_floor")]
    DanceFloor,
    #[serde(rename = "bar")]
    Bar,
    #[serde(rename = "buffet")]
    Buffet,
}

/// Default geometry and presentation for one catalog kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Template {
    pub shape: Shape,
    pub unit: Unit,
    pub color: &'static str,
    pub label: &'static str,
}

const fn rect(width: f64, length: f64) -> Shape {
    Shape::Rectangle { width, length }
}

const fn circle(diameter: f64) -> Shape {
    Shape::Circle { diameter }
}

impl ItemType {
    /// Kinds offered by the outdoor planner.
    pub const OUTDOOR: [ItemType; 13] = [
        Self::Tent8x8,
        Self::Tent10x10,
        Self::Tent10x20,
        Self::Tent20x20,
        Self::Tent20x30,
        Self::Tent30x30,
        Self::FrameTent,
        Self::VideoWall,
        Self::Toilet,
        Self::Handwash,
        Self::Sink,
        Self::Stage,
        Self::Custom,
    ];

    /// Kinds offered by the room and tent designers.
    pub const FURNISHINGS: [ItemType; 9] = [
        Self::RoundTable,
        Self::BanquetTable,
        Self::CocktailTable,
        Self::Chair,
        Self::DanceFloor,
        Self::Bar,
        Self::Buffet,
        Self::Stage,
        Self::VideoWall,
    ];

    /// Default shape, unit, color, and label.
    #[must_use]
    pub fn template(self) -> Template {
        let (shape, unit, color, label) = match self {
            Self::Tent8x8 => (rect(8.0, 8.0), Unit::Feet, "#F4F1EA", "8x8 Tent"),
            Self::Tent10x10 => (rect(10.0, 10.0), Unit::Feet, "#F4F1EA", "10x10 Tent"),
            Self::Tent10x20 => (rect(10.0, 20.0), Unit::Feet, "#F4F1EA", "10x20 Tent"),
            Self::Tent20x20 => (rect(20.0, 20.0), Unit::Feet, "#F4F1EA", "20x20 Tent"),
            Self::Tent20x30 => (rect(20.0, 30.0), Unit::Feet, "#F4F1EA", "20x30 Tent"),
            Self::Tent30x30 => (rect(30.0, 30.0), Unit::Feet, "#F4F1EA", "30x30 Tent"),
            Self::FrameTent => (rect(20.0, 40.0), Unit::Feet, "#ECE7DC", "Frame Tent"),
            Self::VideoWall => (rect(4.0, 0.5), Unit::Metres, "#22252A", "Video Wall"),
            Self::Toilet => (rect(4.0, 4.0), Unit::Feet, "#6C8EBF", "Toilet"),
            Self::Handwash => (rect(3.0, 3.0), Unit::Feet, "#82B366", "Handwash"),
            Self::Sink => (rect(2.0, 2.0), Unit::Feet, "#82B366", "Sink"),
            Self::Stage => (rect(16.0, 12.0), Unit::Feet, "#8C6D4F", "Stage"),
            Self::Custom => (rect(10.0, 10.0), Unit::Feet, "#B3B3B3", "Custom"),
            Self::RoundTable => (circle(5.0), Unit::Feet, "#FFFFFF", "Table"),
            Self::BanquetTable => (rect(8.0, 2.5), Unit::Feet, "#FFFFFF", "Banquet"),
            Self::CocktailTable => (circle(2.5), Unit::Feet, "#FFFFFF", "Cocktail"),
            Self::Chair => (rect(1.5, 1.5), Unit::Feet, "#5A4A3F", ""),
            Self::DanceFloor => (rect(16.0, 16.0), Unit::Feet, "#D8C8A8", "Dance Floor"),
            Self::Bar => (rect(8.0, 2.5), Unit::Feet, "#7B4B2A", "Bar"),
            Self::Buffet => (rect(8.0, 2.5), Unit::Feet, "#C9B79C", "Buffet"),
        };
        Template { shape, unit, color, label }
    }

    /// Whether the planner for `family` offers this kind.
    #[must_use]
    pub fn offered_by(self, family: Family) -> bool {
        match family {
            Family::Outdoor => Self::OUTDOOR.contains(&self),
            Family::Room | Family::Tent => Self::FURNISHINGS.contains(&self),
        }
    }
}

/// Replace a zero, negative, or non-finite dimension with `min`. Any other
/// value is kept as is, even below `min`.
#[must_use]
pub fn clamp_dimension(value: f64, min: f64) -> f64 {
    if value.is_finite() && value > 0.0 { value } else { min }
}

/// Parse a dimension typed into a form field.
///
/// Blank input yields `None` (use the catalog default). Numbers at or below
/// zero clamp to `min`.
///
/// # Errors
///
/// Returns [`LayoutError::InvalidDimension`] if the text isn't a finite number.
pub fn parse_dimension(field: &'static str, raw: &str, min: f64) -> Result<Option<f64>, LayoutError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(clamp_dimension(v, min))),
        _ => {
            tracing::warn!(field, raw, "rejected non-numeric dimension");
            Err(LayoutError::InvalidDimension { field, value: raw.to_string() })
        }
    }
}

/// What the form layer asks for in one "add items" action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSpec {
    #[serde(rename = "type")]
    pub item_type: ItemType,
    /// Width override (rectangles), in the template's unit.
    #[serde(default)]
    pub width: Option<f64>,
    /// Length override (rectangles), in the template's unit.
    #[serde(default)]
    pub length: Option<f64>,
    /// Diameter override (circles), in the template's unit.
    #[serde(default)]
    pub diameter: Option<f64>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default = "one")]
    pub quantity: u32,
}

fn one() -> u32 {
    1
}

impl ItemSpec {
    /// A single item of `item_type` with catalog defaults.
    #[must_use]
    pub fn new(item_type: ItemType) -> Self {
        Self { item_type, width: None, length: None, diameter: None, color: None, label: None, quantity: 1 }
    }

    #[must_use]
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    #[must_use]
    pub fn with_size(mut self, width: f64, length: f64) -> Self {
        self.width = Some(width);
        self.length = Some(length);
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Shape after applying overrides and clamping to `min`.
    #[must_use]
    pub fn shape(&self, min: f64) -> Shape {
        match self.item_type.template().shape {
            Shape::Rectangle { width, length } => Shape::Rectangle {
                width: clamp_dimension(self.width.unwrap_or(width), min),
                length: clamp_dimension(self.length.unwrap_or(length), min),
            },
            Shape::Circle { diameter } => Shape::Circle {
                diameter: clamp_dimension(self.diameter.or(self.width).unwrap_or(diameter), min),
            },
        }
    }

    /// Build one item centered at `center`.
    #[must_use]
    pub fn build(&self, id: ItemId, center: Point, min: f64) -> Item {
        let template = self.item_type.template();
        Item {
            id,
            shape: self.shape(min),
            unit: template.unit,
            x: center.x,
            y: center.y,
            rotation: 0.0,
            color: self.color.clone().unwrap_or_else(|| template.color.to_string()),
            label: self.label.clone().unwrap_or_else(|| template.label.to_string()),
            group_id: None,
            item_type: Some(self.item_type),
        }
    }
}
