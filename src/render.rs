//! Rendering: turns layout state into a screen-space scene, then paints it.
//!
//! [`build_scene`] is a pure function of the layout, the interaction session,
//! the camera, and the config. It resolves every world coordinate to screen
//! pixels and marks the selected item. [`draw`] is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]; it paints a finished [`Scene`] and
//! mutates nothing else.
//!
//! Paint order: backdrop, grid, outline, then items in list order so later
//! items cover earlier ones, matching the hit tester's reverse-order priority.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::camera::{Camera, Point};
use crate::config::CanvasConfig;
use crate::consts::{DEFAULT_ITEM_FILL, HIGHLIGHT_WIDTH_PX};
use crate::doc::{ItemId, Layout};
use crate::geometry::Shape;
use crate::input::InputState;

/// Grid lines closer than this on screen are skipped.
const MIN_GRID_GAP_PX: f64 = 4.0;

/// What sits behind the grid.
#[derive(Debug, Clone, PartialEq)]
pub enum Backdrop {
    /// The layout's background image, stretched to the viewport.
    Image(String),
    /// Flat CSS color.
    Fill(String),
}

/// An axis-aligned rectangle in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Screen-space outline of one item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpriteShape {
    Rect { width: f64, height: f64 },
    Circle { radius: f64 },
}

/// One item resolved to screen space.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub id: ItemId,
    pub center: Point,
    pub shape: SpriteShape,
    /// Clockwise rotation in degrees.
    pub rotation: f64,
    pub fill: String,
    /// Edge and label color.
    pub stroke: String,
    pub label: String,
    pub selected: bool,
}

/// Everything `draw` needs, in screen pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub backdrop: Backdrop,
    /// Grid segments as `(from, to)` pairs.
    pub grid: Vec<(Point, Point)>,
    pub grid_color: String,
    pub outline: Option<ScreenRect>,
    pub outline_color: String,
    pub sprites: Vec<Sprite>,
    pub highlight_color: String,
}

/// Resolve the current state into a screen-space scene.
///
/// `viewport_w` and `viewport_h` are in CSS pixels.
#[must_use]
pub fn build_scene(
    layout: &Layout,
    session: &InputState,
    camera: &Camera,
    config: &CanvasConfig,
    viewport_w: f64,
    viewport_h: f64,
) -> Scene {
    let backdrop = match &layout.background_image {
        Some(url) => Backdrop::Image(url.clone()),
        None => Backdrop::Fill(config.background_fill.clone()),
    };

    let outline = layout.bounds.map(|b| {
        let corner = camera.world_to_screen(Point::new(b.width, b.length));
        ScreenRect { x: 0.0, y: 0.0, width: corner.x, height: corner.y }
    });

    let selected = session.selected_id();
    let sprites = layout
        .items()
        .iter()
        .map(|item| {
            let shape = match item.shape_in_feet() {
                Shape::Rectangle { width, length } => SpriteShape::Rect {
                    width: camera.world_dist_to_screen(width),
                    height: camera.world_dist_to_screen(length),
                },
                Shape::Circle { diameter } => SpriteShape::Circle { radius: camera.world_dist_to_screen(diameter / 2.0) },
            };
            let fill = if item.color.is_empty() { DEFAULT_ITEM_FILL.to_string() } else { item.color.clone() };
            Sprite {
                id: item.id.clone(),
                center: camera.world_to_screen(item.position()),
                shape,
                rotation: item.rotation,
                fill,
                stroke: config.outline_color.clone(),
                label: item.label.clone(),
                selected: selected == Some(item.id.as_str()),
            }
        })
        .collect();

    // The grid reaches past the viewport to the outline and the farthest item.
    let (mut extent_w, mut extent_h) = (viewport_w, viewport_h);
    if let Some(r) = outline {
        extent_w = extent_w.max(r.width);
        extent_h = extent_h.max(r.height);
    }
    for item in layout.items() {
        let (_, far) = item.bounding_box();
        let corner = camera.world_to_screen(far);
        if corner.x.is_finite() && corner.y.is_finite() {
            extent_w = extent_w.max(corner.x);
            extent_h = extent_h.max(corner.y);
        }
    }

    Scene {
        width: viewport_w,
        height: viewport_h,
        backdrop,
        grid: grid_lines(camera, config.grid_spacing_ft, extent_w, extent_h),
        grid_color: config.grid_color.clone(),
        outline,
        outline_color: config.outline_color.clone(),
        sprites,
        highlight_color: config.highlight_color.clone(),
    }
}

/// Grid segments at whole multiples of `spacing_ft` from the origin out to
/// `extent_w` by `extent_h` screen pixels.
fn grid_lines(camera: &Camera, spacing_ft: f64, extent_w: f64, extent_h: f64) -> Vec<(Point, Point)> {
    let step = camera.world_dist_to_screen(spacing_ft);
    if !(step.is_finite() && step >= MIN_GRID_GAP_PX) {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut x = 0.0;
    while x <= extent_w {
        lines.push((Point::new(x, 0.0), Point::new(x, extent_h)));
        x += step;
    }
    let mut y = 0.0;
    while y <= extent_h {
        lines.push((Point::new(0.0, y), Point::new(extent_w, y)));
        y += step;
    }
    lines
}

// =============================================================
// Painting
// =============================================================

/// Paint a scene. `background` is the decoded image for [`Backdrop::Image`];
/// without it the backdrop falls back to a flat clear.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    scene: &Scene,
    background: Option<&HtmlImageElement>,
    dpr: f64,
) -> Result<(), JsValue> {
    // Layer 1: clear and backdrop.
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, scene.width, scene.height);
    match (&scene.backdrop, background) {
        (Backdrop::Image(_), Some(img)) => {
            ctx.draw_image_with_html_image_element_and_dw_and_dh(img, 0.0, 0.0, scene.width, scene.height)?;
        }
        (Backdrop::Fill(color), _) => {
            ctx.set_fill_style_str(color);
            ctx.fill_rect(0.0, 0.0, scene.width, scene.height);
        }
        (Backdrop::Image(_), None) => {}
    }

    // Layer 2: grid.
    ctx.set_stroke_style_str(&scene.grid_color);
    ctx.set_line_width(1.0);
    ctx.begin_path();
    for (from, to) in &scene.grid {
        ctx.move_to(from.x, from.y);
        ctx.line_to(to.x, to.y);
    }
    ctx.stroke();

    // Layer 3: room / tent outline.
    if let Some(r) = scene.outline {
        ctx.set_stroke_style_str(&scene.outline_color);
        ctx.set_line_width(2.0);
        ctx.stroke_rect(r.x, r.y, r.width, r.height);
    }

    // Layer 4: items, bottom first.
    for sprite in &scene.sprites {
        draw_sprite(ctx, sprite, &scene.highlight_color)?;
    }

    Ok(())
}

fn draw_sprite(ctx: &CanvasRenderingContext2d, sprite: &Sprite, highlight: &str) -> Result<(), JsValue> {
    ctx.save();
    ctx.translate(sprite.center.x, sprite.center.y)?;
    ctx.rotate(sprite.rotation.to_radians())?;

    trace_shape(ctx, sprite.shape)?;
    ctx.set_fill_style_str(&sprite.fill);
    ctx.fill();
    ctx.set_stroke_style_str(&sprite.stroke);
    ctx.set_line_width(1.0);
    ctx.stroke();

    if sprite.selected {
        trace_shape(ctx, sprite.shape)?;
        ctx.set_stroke_style_str(highlight);
        ctx.set_line_width(HIGHLIGHT_WIDTH_PX);
        ctx.stroke();
    }

    draw_label(ctx, sprite)?;
    ctx.restore();
    Ok(())
}

fn trace_shape(ctx: &CanvasRenderingContext2d, shape: SpriteShape) -> Result<(), JsValue> {
    ctx.begin_path();
    match shape {
        SpriteShape::Rect { width, height } => ctx.rect(-width / 2.0, -height / 2.0, width, height),
        SpriteShape::Circle { radius } => ctx.arc(0.0, 0.0, radius, 0.0, 2.0 * PI)?,
    }
    Ok(())
}

fn draw_label(ctx: &CanvasRenderingContext2d, sprite: &Sprite) -> Result<(), JsValue> {
    if sprite.label.is_empty() {
        return Ok(());
    }
    let (w, h) = match sprite.shape {
        SpriteShape::Rect { width, height } => (width, height),
        SpriteShape::Circle { radius } => (radius * 2.0, radius * 2.0),
    };
    let font_size = (w.min(h) * 0.3).clamp(8.0, 14.0);
    ctx.set_fill_style_str(&sprite.stroke);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.set_font(&format!("{font_size:.0}px sans-serif"));
    ctx.fill_text_with_max_width(&sprite.label, 0.0, 0.0, w)?;
    Ok(())
}
