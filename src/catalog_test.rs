#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// ItemType
// =============================================================

#[test]
fn outdoor_type_names_match_store() {
    let names: Vec<String> = ItemType::OUTDOOR
        .iter()
        .map(|t| serde_json::to_value(t).unwrap().as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(
        names,
        [
            "tent_8x8",
            "tent_10x10",
            "tent_10x20",
            "tent_20x20",
            "tent_20x30",
            "tent_30x30",
            "frame_tent",
            "video_wall",
            "toilet",
            "handwash",
            "sink",
            "stage",
            "custom",
        ]
    );
}

#[test]
fn tent_templates_match_their_names() {
    assert_eq!(ItemType::Tent10x20.template().shape, Shape::Rectangle { width: 10.0, length: 20.0 });
    assert_eq!(ItemType::Tent30x30.template().shape, Shape::Rectangle { width: 30.0, length: 30.0 });
}

#[test]
fn video_wall_is_stored_in_metres() {
    assert_eq!(ItemType::VideoWall.template().unit, Unit::Metres);
    assert_eq!(ItemType::Stage.template().unit, Unit::Feet);
}

#[test]
fn video_wall_builds_at_template_depth() {
    let spec = ItemSpec::new(ItemType::VideoWall);
    assert_eq!(spec.shape(1.0), Shape::Rectangle { width: 4.0, length: 0.5 });
    let wall = spec.build("w".into(), Point::default(), 1.0);
    assert_eq!(wall.shape, Shape::Rectangle { width: 4.0, length: 0.5 });
    assert_eq!(wall.unit, Unit::Metres);
}

#[test]
fn round_tables_are_circles() {
    assert!(matches!(ItemType::RoundTable.template().shape, Shape::Circle { .. }));
    assert!(matches!(ItemType::CocktailTable.template().shape, Shape::Circle { .. }));
}

#[test]
fn every_template_has_positive_dimensions() {
    for t in ItemType::OUTDOOR.iter().chain(ItemType::FURNISHINGS.iter()) {
        let (hw, hh) = t.template().shape.half_extents();
        assert!(hw > 0.0 && hh > 0.0, "{t:?}");
    }
}

#[test]
fn offered_by_family() {
    assert!(ItemType::Toilet.offered_by(Family::Outdoor));
    assert!(!ItemType::Toilet.offered_by(Family::Room));
    assert!(ItemType::Chair.offered_by(Family::Tent));
    assert!(ItemType::Stage.offered_by(Family::Outdoor));
    assert!(ItemType::Stage.offered_by(Family::Room));
}

// =============================================================
// Dimensions
// =============================================================

#[test]
fn clamp_dimension_replaces_non_positive() {
    assert_eq!(clamp_dimension(0.0, 1.0), 1.0);
    assert_eq!(clamp_dimension(-5.0, 1.0), 1.0);
    assert_eq!(clamp_dimension(f64::NAN, 1.0), 1.0);
    assert_eq!(clamp_dimension(f64::INFINITY, 1.0), 1.0);
    assert_eq!(clamp_dimension(2.5, 1.0), 2.5);
}

#[test]
fn clamp_dimension_keeps_small_positive() {
    assert_eq!(clamp_dimension(0.5, 1.0), 0.5);
    assert_eq!(clamp_dimension(0.01, 1.0), 0.01);
}

#[test]
fn parse_dimension_accepts_numbers() {
    assert_eq!(parse_dimension("width", " 12.5 ", 1.0).unwrap(), Some(12.5));
}

#[test]
fn parse_dimension_keeps_fractions() {
    assert_eq!(parse_dimension("length", "0.5", 1.0).unwrap(), Some(0.5));
}

#[test]
fn parse_dimension_blank_is_none() {
    assert_eq!(parse_dimension("width", "   ", 1.0).unwrap(), None);
}

#[test]
fn parse_dimension_clamps_non_positive() {
    assert_eq!(parse_dimension("length", "0", 1.0).unwrap(), Some(1.0));
    assert_eq!(parse_dimension("length", "-4", 1.0).unwrap(), Some(1.0));
}

#[test]
fn parse_dimension_rejects_text() {
    let err = parse_dimension("diameter", "ten", 1.0);
    assert!(matches!(err, Err(LayoutError::InvalidDimension { field: "diameter", .. })));
    assert!(parse_dimension("diameter", "inf", 1.0).is_err());
    assert!(parse_dimension("diameter", "NaN", 1.0).is_err());
}

// =============================================================
// ItemSpec
// =============================================================

#[test]
fn spec_build_uses_template_defaults() {
    let item = ItemSpec::new(ItemType::BanquetTable).build("t".into(), Point::new(1.0, 2.0), 1.0);
    assert_eq!(item.shape, Shape::Rectangle { width: 8.0, length: 2.5 });
    assert_eq!(item.label, "Banquet");
    assert_eq!(item.color, "#FFFFFF");
    assert_eq!(item.item_type, Some(ItemType::BanquetTable));
    assert_eq!(item.position(), Point::new(1.0, 2.0));
    assert_eq!(item.rotation, 0.0);
}

#[test]
fn spec_overrides_and_clamps() {
    let spec = ItemSpec::new(ItemType::Custom).with_size(0.0, -3.0).with_color("#123456");
    let item = spec.build("c".into(), Point::default(), 1.0);
    assert_eq!(item.shape, Shape::Rectangle { width: 1.0, length: 1.0 });
    assert_eq!(item.color, "#123456");
}

#[test]
fn spec_circle_takes_diameter_or_width() {
    let mut spec = ItemSpec::new(ItemType::RoundTable);
    spec.width = Some(6.0);
    assert_eq!(spec.shape(1.0), Shape::Circle { diameter: 6.0 });
    spec.diameter = Some(4.0);
    assert_eq!(spec.shape(1.0), Shape::Circle { diameter: 4.0 });
}

#[test]
fn spec_json_defaults_quantity() {
    let spec: ItemSpec = serde_json::from_str(r#"{"type":"toilet"}"#).unwrap();
    assert_eq!(spec.quantity, 1);
    assert_eq!(spec.item_type, ItemType::Toilet);
}
