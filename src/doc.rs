//! Document model: placeable items and the ordered layout that owns them.
//!
//! An [`Item`] is a center-anchored shape with a rotation, presentation fields,
//! and an optional group tag. A [`Layout`] is the ordered item list plus its
//! feet-per-inch scale, background image, and outline. List order is z-order:
//! later items paint on top and win hit tests.
//!
//! Items arrive from the form layer (see [`crate::catalog`]) or verbatim from
//! the external store as JSON. Either way the layout refuses duplicate ids.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::camera::{Point, Unit};
use crate::catalog::ItemType;
use crate::consts::{DEFAULT_FEET_PER_INCH, MIN_DIMENSION};
use crate::error::LayoutError;
use crate::geometry::{self, Shape};

/// Unique identifier for an item within one layout.
pub type ItemId = String;

/// Create a fresh random item id.
#[must_use]
pub fn new_item_id() -> ItemId {
    uuid::Uuid::new_v4().to_string()
}

/// A placeable object on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier within the layout.
    pub id: ItemId,
    /// Shape and dimensions, expressed in `unit`.
    #[serde(flatten)]
    pub shape: Shape,
    /// Unit the shape's dimensions are stored in.
    #[serde(default)]
    pub unit: Unit,
    /// Center x in world feet.
    pub x: f64,
    /// Center y in world feet.
    pub y: f64,
    /// Clockwise rotation in degrees, always in `[0, 360)`.
    #[serde(default)]
    pub rotation: f64,
    /// CSS fill color.
    #[serde(default)]
    pub color: String,
    /// Text drawn on the item.
    #[serde(default)]
    pub label: String,
    /// Items sharing a group move and rotate together.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    /// Catalog kind the item was built from, if any.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<ItemType>,
}

impl Item {
    /// A plain item with no label, color, group, or catalog kind.
    #[must_use]
    pub fn new(id: impl Into<ItemId>, shape: Shape, center: Point) -> Self {
        Self {
            id: id.into(),
            shape,
            unit: Unit::Feet,
            x: center.x,
            y: center.y,
            rotation: 0.0,
            color: String::new(),
            label: String::new(),
            group_id: None,
            item_type: None,
        }
    }

    /// Center in world feet.
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn set_position(&mut self, p: Point) {
        self.x = p.x;
        self.y = p.y;
    }

    /// Shape with dimensions converted to feet.
    #[must_use]
    pub fn shape_in_feet(&self) -> Shape {
        self.shape.in_feet(self.unit)
    }

    /// Set rotation, normalized into `[0, 360)`.
    pub fn set_rotation(&mut self, degrees: f64) {
        self.rotation = geometry::normalize_degrees(degrees);
    }

    /// Add `delta` degrees to the rotation, normalized into `[0, 360)`.
    pub fn rotate_by(&mut self, delta: f64) {
        self.set_rotation(self.rotation + delta);
    }

    /// Axis-aligned `(min, max)` corners of the rotated item, in world feet.
    #[must_use]
    pub fn bounding_box(&self) -> (Point, Point) {
        geometry::rotated_bounding_box(self.shape_in_feet(), self.position(), self.rotation)
    }

    /// Bring a stored or form-built item into canonical form: rotation in
    /// `[0, 360)` and every dimension positive.
    fn normalize(&mut self) {
        self.set_rotation(self.rotation);
        let clamped = self.shape.clamped(MIN_DIMENSION);
        if clamped != self.shape {
            tracing::warn!(id = %self.id, shape = ?self.shape, "clamped non-positive dimensions");
            self.shape = clamped;
        }
    }

    /// Whether a world-space point lies on this item.
    #[must_use]
    pub fn contains_world(&self, world: Point) -> bool {
        let local = geometry::to_local(world, self.position(), self.rotation);
        self.shape_in_feet().contains_point(local)
    }
}

/// Outline of the room or tent, in world feet, with its top-left at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub length: f64,
}

impl Bounds {
    /// Center of the outline.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.length / 2.0)
    }
}

fn default_scale() -> f64 {
    DEFAULT_FEET_PER_INCH
}

/// An ordered list of items plus layout-level scale settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LayoutRepr")]
pub struct Layout {
    items: Vec<Item>,
    /// Feet represented by one screen inch.
    pub scale: f64,
    /// Background image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    /// Room or tent outline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Bounds>,
}

/// Unvalidated wire shape of a [`Layout`].
#[derive(Deserialize)]
struct LayoutRepr {
    #[serde(default)]
    items: Vec<Item>,
    #[serde(default = "default_scale")]
    scale: f64,
    #[serde(default)]
    background_image: Option<String>,
    #[serde(default)]
    bounds: Option<Bounds>,
}

impl TryFrom<LayoutRepr> for Layout {
    type Error = LayoutError;

    fn try_from(repr: LayoutRepr) -> Result<Self, Self::Error> {
        let mut layout = Layout::from_items(repr.items, repr.scale)?;
        layout.background_image = repr.background_image;
        layout.bounds = repr.bounds;
        Ok(layout)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(DEFAULT_FEET_PER_INCH)
    }
}

impl Layout {
    /// Create an empty layout at `scale` feet per inch.
    #[must_use]
    pub fn new(scale: f64) -> Self {
        Self { items: Vec::new(), scale, background_image: None, bounds: None }
    }

    /// Build a layout from an existing item list.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::DuplicateId`] if two items share an id.
    pub fn from_items(items: Vec<Item>, scale: f64) -> Result<Self, LayoutError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                return Err(LayoutError::DuplicateId(item.id.clone()));
            }
        }
        let mut layout = Self::new(scale);
        layout.items = items;
        for item in &mut layout.items {
            item.normalize();
        }
        Ok(layout)
    }

    /// Decode a layout from JSON, validating ids.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Json`] on malformed input or duplicate ids.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode as JSON for the external store.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, LayoutError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Items in z-order (bottom first).
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|i| i.id == id)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Item> {
        self.items.iter_mut().find(|i| i.id == id)
    }

    /// Append an item on top of the stack.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::DuplicateId`] if the id is already taken.
    pub fn push(&mut self, mut item: Item) -> Result<(), LayoutError> {
        if self.contains(&item.id) {
            return Err(LayoutError::DuplicateId(item.id));
        }
        item.normalize();
        self.items.push(item);
        Ok(())
    }

    /// Append several items. Nothing is appended if any id collides.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::DuplicateId`] on the first collision, either
    /// with an existing item or within `items`.
    pub fn extend(&mut self, items: Vec<Item>) -> Result<(), LayoutError> {
        let mut seen: HashSet<&str> = self.items.iter().map(|i| i.id.as_str()).collect();
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                return Err(LayoutError::DuplicateId(item.id.clone()));
            }
        }
        for mut item in items {
            item.normalize();
            self.items.push(item);
        }
        Ok(())
    }

    /// Remove an item, returning it if it was present.
    pub fn remove(&mut self, id: &str) -> Option<Item> {
        let idx = self.items.iter().position(|i| i.id == id)?;
        Some(self.items.remove(idx))
    }

    /// Ids of `id` and every item sharing its group, in z-order.
    ///
    /// Returns just `[id]` for an ungrouped item and nothing for an unknown one.
    #[must_use]
    pub fn rigid_set(&self, id: &str) -> Vec<ItemId> {
        let Some(item) = self.get(id) else {
            return Vec::new();
        };
        match &item.group_id {
            Some(group) => self
                .items
                .iter()
                .filter(|i| i.group_id.as_ref() == Some(group))
                .map(|i| i.id.clone())
                .collect(),
            None => vec![item.id.clone()],
        }
    }
}
