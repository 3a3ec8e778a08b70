//! Initial placement for bulk "add items" actions.
//!
//! New items land either at random inside an area, on a rule-based grid, or
//! all at one point. Chair rows tied to a stage are built here too: the chairs
//! and the stage share a `group_id` so they move and rotate as one unit.

#[cfg(test)]
#[path = "placement_test.rs"]
mod placement_test;

use rand::Rng;

use crate::camera::Point;
use crate::catalog::{ItemSpec, ItemType};
use crate::doc::{Bounds, Item, ItemId, Layout, new_item_id};
use crate::error::LayoutError;

/// Where new items go.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// Random centers that keep each item inside `area` when it fits.
    Random { area: Bounds },
    /// Row-major grid starting with the first center at `origin`.
    Grid { origin: Point, columns: u32, spacing_x: f64, spacing_y: f64 },
    /// Every item centered on the same point.
    At(Point),
}

/// Expand `specs` (honoring each quantity) into items placed per `placement`.
///
/// Dimensions clamp to `min_dimension`. Ids are fresh v4 UUIDs.
pub fn place<R: Rng + ?Sized>(specs: &[ItemSpec], placement: Placement, min_dimension: f64, rng: &mut R) -> Vec<Item> {
    let mut out = Vec::new();
    for spec in specs {
        for _ in 0..spec.quantity {
            let index = out.len();
            let mut item = spec.build(new_item_id(), Point::default(), min_dimension);
            item.set_position(center_for(&item, index, placement, rng));
            out.push(item);
        }
    }
    out
}

fn center_for<R: Rng + ?Sized>(item: &Item, index: usize, placement: Placement, rng: &mut R) -> Point {
    match placement {
        Placement::Random { area } => {
            let (lo, hi) = item.bounding_box();
            let (hw, hh) = ((hi.x - lo.x) / 2.0, (hi.y - lo.y) / 2.0);
            Point::new(random_axis(rng, hw, area.width), random_axis(rng, hh, area.length))
        }
        Placement::Grid { origin, columns, spacing_x, spacing_y } => {
            let columns = columns.max(1) as usize;
            let col = (index % columns) as f64;
            let row = (index / columns) as f64;
            Point::new(origin.x + col * spacing_x, origin.y + row * spacing_y)
        }
        Placement::At(p) => p,
    }
}

/// A coordinate in `[half, span - half]`, or the midpoint if the item is wider
/// than the span. A non-finite span places the item flush with the origin.
fn random_axis<R: Rng + ?Sized>(rng: &mut R, half: f64, span: f64) -> f64 {
    if !span.is_finite() {
        tracing::warn!(span, "non-finite placement area");
        return half;
    }
    let lo = half;
    let hi = span - half;
    if hi > lo { rng.random_range(lo..=hi) } else { span / 2.0 }
}

/// Rows of chairs in front of a stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeatRows {
    pub rows: u32,
    pub seats_per_row: u32,
    /// Center-to-center distance between neighboring chairs, in feet.
    pub spacing: f64,
    /// Clear distance between the stage edge and the first row, in feet.
    pub gap: f64,
}

/// Add chair rows in front of `stage_id` and group them with the stage.
///
/// The stage keeps its existing group if it has one; otherwise it gets a
/// fresh group id. Rows follow the stage's rotation.
///
/// # Errors
///
/// Returns [`LayoutError::UnknownItem`] if the stage isn't in the layout.
pub fn seat_rows_for_stage(
    layout: &mut Layout,
    stage_id: &str,
    seating: SeatRows,
    min_dimension: f64,
) -> Result<Vec<ItemId>, LayoutError> {
    let stage = layout
        .get_mut(stage_id)
        .ok_or_else(|| LayoutError::UnknownItem(stage_id.to_string()))?;
    let group = stage.group_id.get_or_insert_with(new_item_id).clone();
    let center = stage.position();
    let rotation = stage.rotation;
    let (_, stage_hh) = stage.shape_in_feet().half_extents();

    let spec = ItemSpec::new(ItemType::Chair);
    let (_, chair_hh) = spec.shape(min_dimension).half_extents();
    let row_width = f64::from(seating.seats_per_row.saturating_sub(1)) * seating.spacing;
    let first_row_y = stage_hh + seating.gap + chair_hh;

    let mut chairs = Vec::new();
    for row in 0..seating.rows {
        for seat in 0..seating.seats_per_row {
            let local = Point::new(
                f64::from(seat) * seating.spacing - row_width / 2.0,
                first_row_y + f64::from(row) * seating.spacing,
            );
            let mut chair = spec.build(new_item_id(), center + local.rotated(rotation), min_dimension);
            chair.set_rotation(rotation);
            chair.group_id = Some(group.clone());
            chairs.push(chair);
        }
    }

    let ids = chairs.iter().map(|c| c.id.clone()).collect();
    layout.extend(chairs)?;
    tracing::info!(stage = stage_id, rows = seating.rows, per_row = seating.seats_per_row, "seated stage");
    Ok(ids)
}
