#![allow(clippy::float_cmp)]

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use crate::geometry::Shape;

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

// =============================================================
// place
// =============================================================

#[test]
fn place_honors_quantity() {
    let specs = [ItemSpec::new(ItemType::Chair).with_quantity(3), ItemSpec::new(ItemType::Bar)];
    let items = place(&specs, Placement::At(Point::new(5.0, 5.0)), 1.0, &mut rng());
    assert_eq!(items.len(), 4);
    assert!(items.iter().all(|i| i.position() == Point::new(5.0, 5.0)));
}

#[test]
fn place_generates_unique_ids() {
    let specs = [ItemSpec::new(ItemType::Chair).with_quantity(50)];
    let items = place(&specs, Placement::At(Point::default()), 1.0, &mut rng());
    let mut ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 50);
}

#[test]
fn grid_fills_rows_left_to_right() {
    let specs = [ItemSpec::new(ItemType::RoundTable).with_quantity(5)];
    let placement = Placement::Grid { origin: Point::new(5.0, 5.0), columns: 2, spacing_x: 10.0, spacing_y: 8.0 };
    let items = place(&specs, placement, 1.0, &mut rng());
    let centers: Vec<Point> = items.iter().map(Item::position).collect();
    assert_eq!(
        centers,
        [
            Point::new(5.0, 5.0),
            Point::new(15.0, 5.0),
            Point::new(5.0, 13.0),
            Point::new(15.0, 13.0),
            Point::new(5.0, 21.0),
        ]
    );
}

#[test]
fn grid_with_zero_columns_uses_one() {
    let specs = [ItemSpec::new(ItemType::Chair).with_quantity(2)];
    let placement = Placement::Grid { origin: Point::default(), columns: 0, spacing_x: 2.0, spacing_y: 3.0 };
    let items = place(&specs, placement, 1.0, &mut rng());
    assert_eq!(items[1].position(), Point::new(0.0, 3.0));
}

#[test]
fn random_keeps_items_inside_area() {
    let area = Bounds { width: 50.0, length: 30.0 };
    let specs = [ItemSpec::new(ItemType::Tent10x20).with_quantity(40)];
    let items = place(&specs, Placement::Random { area }, 1.0, &mut rng());
    for item in &items {
        let (lo, hi) = item.bounding_box();
        assert!(lo.x >= -1e-9 && hi.x <= area.width + 1e-9, "x = {}", item.x);
        assert!(lo.y >= -1e-9 && hi.y <= area.length + 1e-9, "y = {}", item.y);
    }
}

#[test]
fn random_centers_oversized_items() {
    let area = Bounds { width: 5.0, length: 5.0 };
    let specs = [ItemSpec::new(ItemType::FrameTent)];
    let items = place(&specs, Placement::Random { area }, 1.0, &mut rng());
    assert_eq!(items[0].position(), Point::new(2.5, 2.5));
}

#[test]
fn random_with_non_finite_area_stays_finite() {
    let area = Bounds { width: f64::NAN, length: f64::INFINITY };
    let specs = [ItemSpec::new(ItemType::Toilet).with_quantity(3)];
    let items = place(&specs, Placement::Random { area }, 1.0, &mut rng());
    for item in &items {
        assert!(item.x.is_finite() && item.y.is_finite(), "{:?}", item.position());
    }
    assert_eq!(items[0].position(), Point::new(2.0, 2.0));
}

#[test]
fn random_is_reproducible_with_seed() {
    let area = Bounds { width: 100.0, length: 100.0 };
    let specs = [ItemSpec::new(ItemType::Toilet).with_quantity(3)];
    let a: Vec<Point> = place(&specs, Placement::Random { area }, 1.0, &mut rng()).iter().map(Item::position).collect();
    let b: Vec<Point> = place(&specs, Placement::Random { area }, 1.0, &mut rng()).iter().map(Item::position).collect();
    assert_eq!(a, b);
}

// =============================================================
// seat_rows_for_stage
// =============================================================

fn stage_layout(rotation: f64) -> Layout {
    let mut stage = ItemSpec::new(ItemType::Stage).build("stage".into(), Point::new(50.0, 20.0), 1.0);
    stage.set_rotation(rotation);
    Layout::from_items(vec![stage], 8.0).unwrap()
}

const SEATING: SeatRows = SeatRows { rows: 2, seats_per_row: 3, spacing: 2.0, gap: 4.0 };

#[test]
fn seating_groups_chairs_with_stage() {
    let mut layout = stage_layout(0.0);
    let ids = seat_rows_for_stage(&mut layout, "stage", SEATING, 1.0).unwrap();
    assert_eq!(ids.len(), 6);
    let group = layout.get("stage").unwrap().group_id.clone();
    assert!(group.is_some());
    for id in &ids {
        assert_eq!(layout.get(id).unwrap().group_id, group);
    }
    assert_eq!(layout.rigid_set("stage").len(), 7);
}

#[test]
fn seating_keeps_existing_group() {
    let mut layout = stage_layout(0.0);
    layout.get_mut("stage").unwrap().group_id = Some("front".into());
    let ids = seat_rows_for_stage(&mut layout, "stage", SEATING, 1.0).unwrap();
    assert_eq!(layout.get(&ids[0]).unwrap().group_id.as_deref(), Some("front"));
}

#[test]
fn seating_rows_sit_in_front_of_stage() {
    let mut layout = stage_layout(0.0);
    let ids = seat_rows_for_stage(&mut layout, "stage", SEATING, 1.0).unwrap();
    // Stage is 12 ft deep centered at y=20, so its front edge is y=26; gap 4, chair half-depth 0.75.
    let first = layout.get(&ids[0]).unwrap();
    assert!((first.y - 30.75).abs() < 1e-9);
    assert!((first.x - 48.0).abs() < 1e-9);
    let last = layout.get(&ids[5]).unwrap();
    assert!((last.y - 32.75).abs() < 1e-9);
    assert!((last.x - 52.0).abs() < 1e-9);
    assert!(layout.get(&ids[0]).unwrap().shape == Shape::Rectangle { width: 1.5, length: 1.5 });
}

#[test]
fn seating_follows_stage_rotation() {
    let mut layout = stage_layout(90.0);
    let ids = seat_rows_for_stage(&mut layout, "stage", SEATING, 1.0).unwrap();
    let chair = layout.get(&ids[1]).unwrap();
    // Middle seat of the first row: local (0, 10.75) rotated a quarter turn → (-10.75, 0).
    assert!((chair.x - (50.0 - 10.75)).abs() < 1e-9);
    assert!((chair.y - 20.0).abs() < 1e-9);
    assert_eq!(chair.rotation, 90.0);
}

#[test]
fn seating_unknown_stage_errors() {
    let mut layout = Layout::default();
    let err = seat_rows_for_stage(&mut layout, "ghost", SEATING, 1.0);
    assert!(matches!(err, Err(LayoutError::UnknownItem(id)) if id == "ghost"));
}
