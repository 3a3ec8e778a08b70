#![allow(clippy::float_cmp)]

use super::*;

fn rect(width: f64, length: f64) -> Shape {
    Shape::Rectangle { width, length }
}

// =============================================================
// half_extents
// =============================================================

#[test]
fn rectangle_half_extents() {
    assert_eq!(rect(8.0, 2.5).half_extents(), (4.0, 1.25));
}

#[test]
fn circle_half_extents_are_radius() {
    assert_eq!(Shape::Circle { diameter: 5.0 }.half_extents(), (2.5, 2.5));
}

// =============================================================
// contains_point
// =============================================================

#[test]
fn rectangle_contains_center_and_edges() {
    let r = rect(8.0, 2.5);
    assert!(r.contains_point(Point::new(0.0, 0.0)));
    assert!(r.contains_point(Point::new(4.0, 1.25)));
    assert!(r.contains_point(Point::new(-4.0, -1.25)));
}

#[test]
fn rectangle_excludes_outside() {
    let r = rect(8.0, 2.5);
    assert!(!r.contains_point(Point::new(4.01, 0.0)));
    assert!(!r.contains_point(Point::new(0.0, -1.3)));
}

#[test]
fn circle_contains_by_distance() {
    let c = Shape::Circle { diameter: 10.0 };
    assert!(c.contains_point(Point::new(3.0, 4.0)));
    assert!(c.contains_point(Point::new(5.0, 0.0)));
    // Inside the bounding box corner but outside the circle.
    assert!(!c.contains_point(Point::new(4.0, 4.0)));
}

// =============================================================
// to_local
// =============================================================

#[test]
fn to_local_translates() {
    let local = to_local(Point::new(11.0, 11.0), Point::new(10.0, 10.0), 0.0);
    assert_eq!(local, Point::new(1.0, 1.0));
}

#[test]
fn to_local_undoes_rotation() {
    // A point 3 ft along the item's rotated x-axis maps back onto local +x.
    let center = Point::new(10.0, 10.0);
    let world = center + Point::new(3.0, 0.0).rotated(90.0);
    let local = to_local(world, center, 90.0);
    assert!((local.x - 3.0).abs() < 1e-9);
    assert!(local.y.abs() < 1e-9);
}

#[test]
fn rotated_rectangle_hit_follows_rotation() {
    let r = rect(8.0, 2.0);
    let center = Point::new(0.0, 0.0);
    // After a quarter turn the long axis runs along world y.
    let along_y = Point::new(0.0, 3.5);
    assert!(!r.contains_point(to_local(along_y, center, 0.0)));
    assert!(r.contains_point(to_local(along_y, center, 90.0)));
}

// =============================================================
// in_feet
// =============================================================

#[test]
fn in_feet_converts_metres() {
    let wall = rect(4.0, 0.5).in_feet(Unit::Metres);
    let Shape::Rectangle { width, length } = wall else {
        panic!("expected rectangle");
    };
    assert!((width - 13.12336).abs() < 1e-9);
    assert!((length - 1.64042).abs() < 1e-9);
}

#[test]
fn in_feet_leaves_feet_alone() {
    assert_eq!(rect(3.0, 4.0).in_feet(Unit::Feet), rect(3.0, 4.0));
}

// =============================================================
// clamped / rotated_bounding_box
// =============================================================

#[test]
fn clamped_replaces_only_non_positive() {
    assert_eq!(rect(0.0, 0.5).clamped(1.0), rect(1.0, 0.5));
    assert_eq!(Shape::Circle { diameter: -2.0 }.clamped(1.0), Shape::Circle { diameter: 1.0 });
    assert_eq!(rect(3.0, 4.0).clamped(1.0), rect(3.0, 4.0));
}

#[test]
fn bounding_box_swaps_at_quarter_turn() {
    let (lo, hi) = rotated_bounding_box(rect(8.0, 2.0), Point::new(0.0, 0.0), 90.0);
    assert!((lo.x + 1.0).abs() < 1e-9 && (lo.y + 4.0).abs() < 1e-9);
    assert!((hi.x - 1.0).abs() < 1e-9 && (hi.y - 4.0).abs() < 1e-9);
}

#[test]
fn bounding_box_grows_at_45_degrees() {
    let (_, hi) = rotated_bounding_box(rect(2.0, 2.0), Point::new(0.0, 0.0), 45.0);
    assert!((hi.x - 2.0_f64.sqrt()).abs() < 1e-9);
}

#[test]
fn bounding_box_of_circle_ignores_rotation() {
    let circle = Shape::Circle { diameter: 6.0 };
    let b = rotated_bounding_box(circle, Point::new(5.0, 5.0), 33.0);
    assert_eq!(b, (Point::new(2.0, 2.0), Point::new(8.0, 8.0)));
}

// =============================================================
// normalize_degrees
// =============================================================

#[test]
fn normalize_wraps_into_range() {
    assert_eq!(normalize_degrees(0.0), 0.0);
    assert_eq!(normalize_degrees(360.0), 0.0);
    assert_eq!(normalize_degrees(405.0), 45.0);
    assert_eq!(normalize_degrees(-15.0), 345.0);
    assert_eq!(normalize_degrees(-720.0), 0.0);
}

#[test]
fn normalize_tiny_negative_stays_below_full_turn() {
    let r = normalize_degrees(-1e-20);
    assert!((0.0..360.0).contains(&r));
}

#[test]
fn normalize_non_finite_is_zero() {
    assert_eq!(normalize_degrees(f64::NAN), 0.0);
    assert_eq!(normalize_degrees(f64::INFINITY), 0.0);
}

#[test]
fn shape_json_is_tagged_by_kind() {
    let s: Shape = serde_json::from_str(r#"{"kind":"circle","diameter":5}"#).unwrap();
    assert_eq!(s, Shape::Circle { diameter: 5.0 });
    let json = serde_json::to_value(rect(8.0, 2.5)).unwrap();
    assert_eq!(json["kind"], "rectangle");
    assert_eq!(json["length"], 2.5);
}
