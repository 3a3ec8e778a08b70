//! Hit testing: screen point → topmost item.
//!
//! Walks the layout front-to-back (reverse list order) so a click on an
//! overlap always selects what the user sees on top.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::{Camera, Point};
use crate::doc::{Item, Layout};

/// Find the topmost item under a screen-space point.
#[must_use]
pub fn hit_test<'a>(screen_pt: Point, layout: &'a Layout, camera: &Camera) -> Option<&'a Item> {
    hit_test_world(camera.screen_to_world(screen_pt), layout)
}

/// Find the topmost item under a world-space point.
#[must_use]
pub fn hit_test_world(world_pt: Point, layout: &Layout) -> Option<&Item> {
    layout
        .items()
        .iter()
        .rev()
        .find(|item| item.contains_world(world_pt))
}
