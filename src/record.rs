//! Persisted layout records, one shape per planner family.
//!
//! These are the JSON blobs handed to and from the external entity store.
//! All three share `items`, `scale`, and `background_image`; each family adds
//! its own form fields. [`LayoutRecord`] converts between a record and the
//! [`Layout`] the canvas works on. Saving is last-write-wins: a record is
//! overwritten from the current layout, never merged.

#[cfg(test)]
#[path = "record_test.rs"]
mod record_test;

use std::collections::BTreeMap;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::camera::Point;
use crate::catalog::{ItemSpec, ItemType, clamp_dimension};
use crate::consts::{DEFAULT_FEET_PER_INCH, MIN_DIMENSION};
use crate::doc::{Bounds, Item, ItemId, Layout, new_item_id};
use crate::error::LayoutError;
use crate::geometry::Shape;
use crate::placement::{self, Placement};

/// Clear space kept between generated fixtures and the walls, in feet.
const WALL_MARGIN_FT: f64 = 2.0;

/// Center-to-center spacing of generated table grids, in feet.
const TABLE_SPACING_FT: f64 = 10.0;

/// Conversion between a stored record and a live layout.
pub trait LayoutRecord {
    /// Build the canvas layout this record describes.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::DuplicateId`] if the stored items collide.
    fn to_layout(&self) -> Result<Layout, LayoutError>;

    /// Overwrite the record's canvas fields from `layout`.
    fn store_layout(&mut self, layout: &Layout);
}

fn default_scale() -> f64 {
    DEFAULT_FEET_PER_INCH
}

/// Fields every family stores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutCommon {
    #[serde(default)]
    pub items: Vec<Item>,
    /// Feet per inch.
    #[serde(default = "default_scale")]
    pub scale: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
}

impl Default for LayoutCommon {
    fn default() -> Self {
        Self { items: Vec::new(), scale: DEFAULT_FEET_PER_INCH, background_image: None }
    }
}

impl LayoutCommon {
    fn layout_with(&self, items: Vec<Item>, bounds: Option<Bounds>) -> Result<Layout, LayoutError> {
        let mut layout = Layout::from_items(items, self.scale)?;
        layout.background_image.clone_from(&self.background_image);
        layout.bounds = bounds;
        Ok(layout)
    }

    fn store(&mut self, layout: &Layout, items: Vec<Item>) {
        self.items = items;
        self.scale = layout.scale;
        self.background_image.clone_from(&layout.background_image);
    }
}

/// Width and length of a fixture, in the unit its field documents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub length: f64,
}

// =============================================================
// Room
// =============================================================

/// A room designer project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomRecord {
    #[serde(flatten)]
    pub common: LayoutCommon,
    /// Feet.
    pub room_length: f64,
    /// Feet.
    pub room_width: f64,
    /// Feet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<Dimensions>,
    /// Feet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dance_floor: Option<Dimensions>,
    /// Feet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bar: Option<Dimensions>,
    /// Metres.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_wall: Option<Dimensions>,
    #[serde(default)]
    pub table_count: u32,
    #[serde(default)]
    pub table_color: Option<String>,
}

impl RoomRecord {
    fn bounds(&self, min: f64) -> Bounds {
        Bounds { width: clamp_dimension(self.room_width, min), length: clamp_dimension(self.room_length, min) }
    }

    /// Build a fresh layout from the room form fields.
    ///
    /// Along the top wall: video wall, then stage, both centered. Dance floor
    /// in the room center, bar in the bottom-right corner, round tables in a
    /// grid below the stage. Stored `items` are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::DuplicateId`] if generated ids collide.
    pub fn generate_layout(&self, min_dimension: f64) -> Result<Layout, LayoutError> {
        let bounds = self.bounds(min_dimension);
        let mid_x = bounds.width / 2.0;
        let mut items = Vec::new();
        let mut top = WALL_MARGIN_FT / 2.0;

        if let Some(d) = self.video_wall {
            let spec = ItemSpec::new(ItemType::VideoWall).with_size(d.width, d.length);
            let mut wall = spec.build(new_item_id(), Point::default(), min_dimension);
            let (_, hh) = wall.shape_in_feet().half_extents();
            wall.set_position(Point::new(mid_x, top + hh));
            top += 2.0 * hh + WALL_MARGIN_FT / 2.0;
            items.push(wall);
        }

        if let Some(d) = self.stage {
            let spec = ItemSpec::new(ItemType::Stage).with_size(d.width, d.length);
            let mut stage = spec.build(new_item_id(), Point::default(), min_dimension);
            let (_, hh) = stage.shape_in_feet().half_extents();
            stage.set_position(Point::new(mid_x, top + hh));
            top += 2.0 * hh;
            items.push(stage);
        }

        if let Some(d) = self.dance_floor {
            let spec = ItemSpec::new(ItemType::DanceFloor).with_size(d.width, d.length);
            items.push(spec.build(new_item_id(), bounds.center(), min_dimension));
        }

        if let Some(d) = self.bar {
            let spec = ItemSpec::new(ItemType::Bar).with_size(d.width, d.length);
            let mut bar = spec.build(new_item_id(), Point::default(), min_dimension);
            let (hw, hh) = bar.shape_in_feet().half_extents();
            bar.set_position(Point::new(
                bounds.width - WALL_MARGIN_FT - hw,
                bounds.length - WALL_MARGIN_FT - hh,
            ));
            items.push(bar);
        }

        if self.table_count > 0 {
            let mut spec = ItemSpec::new(ItemType::RoundTable).with_quantity(self.table_count);
            spec.color.clone_from(&self.table_color);
            let usable = (bounds.width - 2.0 * WALL_MARGIN_FT).max(TABLE_SPACING_FT);
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let columns = (usable / TABLE_SPACING_FT).floor().max(1.0) as u32;
            let origin_x = WALL_MARGIN_FT + TABLE_SPACING_FT / 2.0;
            let origin_y = top + WALL_MARGIN_FT + TABLE_SPACING_FT / 2.0;
            // Grid placement never draws from the rng.
            let mut rng = StdRng::seed_from_u64(0);
            items.extend(placement::place(
                &[spec],
                Placement::Grid {
                    origin: Point::new(origin_x, origin_y),
                    columns,
                    spacing_x: TABLE_SPACING_FT,
                    spacing_y: TABLE_SPACING_FT,
                },
                min_dimension,
                &mut rng,
            ));
        }

        tracing::info!(items = items.len(), "room layout generated");
        self.common.layout_with(items, Some(bounds))
    }
}

impl LayoutRecord for RoomRecord {
    fn to_layout(&self) -> Result<Layout, LayoutError> {
        self.common.layout_with(self.common.items.clone(), Some(self.bounds(MIN_DIMENSION)))
    }

    fn store_layout(&mut self, layout: &Layout) {
        self.common.store(layout, layout.items().to_vec());
    }
}

// =============================================================
// Tent
// =============================================================

/// Tent construction style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TentStyle {
    #[default]
    Marquee,
    Frame,
}

/// A tent designer project. Items are stored per category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TentRecord {
    #[serde(flatten)]
    pub common: LayoutCommon,
    #[serde(default)]
    pub tent_style: TentStyle,
    /// Feet.
    pub tent_length: f64,
    /// Feet.
    pub tent_width: f64,
    /// Category name → items, e.g. `"tables"`, `"seating"`.
    #[serde(default)]
    pub categories: BTreeMap<String, Vec<Item>>,
}

/// Storage category for a tent item. Uncategorized items stay in `items`.
#[must_use]
pub fn tent_category(item_type: Option<ItemType>) -> Option<&'static str> {
    match item_type? {
        ItemType::RoundTable | ItemType::BanquetTable | ItemType::CocktailTable => Some("tables"),
        ItemType::Chair => Some("seating"),
        ItemType::Stage | ItemType::DanceFloor => Some("stages"),
        ItemType::Bar | ItemType::Buffet => Some("service"),
        ItemType::VideoWall => Some("screens"),
        _ => None,
    }
}

impl LayoutRecord for TentRecord {
    fn to_layout(&self) -> Result<Layout, LayoutError> {
        let mut items = self.common.items.clone();
        for category in self.categories.values() {
            items.extend(category.iter().cloned());
        }
        let bounds = Bounds {
            width: clamp_dimension(self.tent_width, MIN_DIMENSION),
            length: clamp_dimension(self.tent_length, MIN_DIMENSION),
        };
        self.common.layout_with(items, Some(bounds))
    }

    fn store_layout(&mut self, layout: &Layout) {
        let mut loose = Vec::new();
        self.categories.clear();
        for item in layout.items() {
            match tent_category(item.item_type) {
                Some(name) => self.categories.entry(name.to_string()).or_default().push(item.clone()),
                None => loose.push(item.clone()),
            }
        }
        self.common.store(layout, loose);
    }
}

// =============================================================
// Outdoor
// =============================================================

/// A per-item size override typed into the outdoor planner, in the item's unit.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DimensionOverride {
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub length: Option<f64>,
    #[serde(default)]
    pub diameter: Option<f64>,
}

impl DimensionOverride {
    fn apply(self, item: &mut Item, min: f64) {
        item.shape = match item.shape {
            Shape::Rectangle { width, length } => Shape::Rectangle {
                width: clamp_dimension(self.width.unwrap_or(width), min),
                length: clamp_dimension(self.length.unwrap_or(length), min),
            },
            Shape::Circle { diameter } => Shape::Circle {
                diameter: clamp_dimension(self.diameter.unwrap_or(diameter), min),
            },
        };
    }
}

/// An outdoor site plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutdoorRecord {
    #[serde(flatten)]
    pub common: LayoutCommon,
    /// Item id → size override, clamped to the minimum dimension on load.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub dimension_overrides: BTreeMap<ItemId, DimensionOverride>,
}

impl LayoutRecord for OutdoorRecord {
    fn to_layout(&self) -> Result<Layout, LayoutError> {
        let mut items = self.common.items.clone();
        for item in &mut items {
            if let Some(ov) = self.dimension_overrides.get(&item.id) {
                ov.apply(item, MIN_DIMENSION);
            }
            if item.item_type.is_none() {
                tracing::warn!(id = %item.id, "outdoor item without type");
            }
        }
        self.common.layout_with(items, None)
    }

    /// Overrides are baked into the stored items and cleared.
    fn store_layout(&mut self, layout: &Layout) {
        self.dimension_overrides.clear();
        self.common.store(layout, layout.items().to_vec());
    }
}
