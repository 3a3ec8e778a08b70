use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::camera::{Camera, Point, UnitScale, pixels_per_foot};
use crate::catalog::ItemSpec;
use crate::config::CanvasConfig;
use crate::consts::DEFAULT_FEET_PER_INCH;
use crate::doc::{ItemId, Layout};
use crate::error::LayoutError;
use crate::hit;
use crate::input::{Button, DragAnchor, InputState, Key, RotateStep};
use crate::placement::{self, Placement, SeatRows};
use crate::render;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
///
/// Every geometry change is reported here; the host forwards the updated
/// layout to its form and save layer and schedules a redraw.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ItemsAdded { ids: Vec<ItemId> },
    ItemsMoved { ids: Vec<ItemId> },
    ItemsRotated { ids: Vec<ItemId> },
    ItemDeleted { id: ItemId },
    SelectionChanged(Option<ItemId>),
    LayoutReplaced,
    SetCursor(&'static str),
    RenderNeeded,
}

/// Core engine state: the layout, the camera, and the interaction session.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    layout: Layout,
    camera: Camera,
    config: CanvasConfig,
    input: InputState,
    rng: StdRng,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::with_config(CanvasConfig::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with host configuration. The config is assumed validated.
    #[must_use]
    pub fn with_config(config: CanvasConfig) -> Self {
        let (seed, _) = uuid::Uuid::new_v4().as_u64_pair();
        let mut core = Self {
            layout: Layout::default(),
            camera: Camera::default(),
            config,
            input: InputState::Idle,
            rng: StdRng::seed_from_u64(seed),
        };
        core.refresh_scale();
        core
    }

    /// Seed the placement RNG, for reproducible random placement.
    pub fn seed_placement(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    // --- Layout lifecycle ---

    /// Replace the layout wholesale, discarding any selection or drag.
    pub fn load_layout(&mut self, layout: Layout) -> Vec<Action> {
        let had_selection = self.input.selected_id().is_some();
        tracing::info!(items = layout.len(), scale = layout.scale, "layout replaced");
        self.layout = layout;
        self.input = InputState::Idle;
        self.refresh_scale();

        let mut actions = vec![Action::LayoutReplaced];
        if had_selection {
            actions.push(Action::SelectionChanged(None));
        }
        actions.push(Action::SetCursor("default"));
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Decode a stored layout and load it.
    ///
    /// # Errors
    ///
    /// Returns the decode error and leaves the current layout untouched.
    pub fn load_json(&mut self, json: &str) -> Result<Vec<Action>, LayoutError> {
        let layout = Layout::from_json(json)?;
        Ok(self.load_layout(layout))
    }

    /// Owned copy of the layout to hand to the save layer.
    #[must_use]
    pub fn snapshot(&self) -> Layout {
        self.layout.clone()
    }

    /// Change the drawing scale from a form ratio.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidScale`] and leaves the scale unchanged.
    pub fn set_scale(&mut self, scale: UnitScale) -> Result<Vec<Action>, LayoutError> {
        self.layout.scale = scale.feet_per_inch()?;
        self.refresh_scale();
        Ok(vec![Action::RenderNeeded])
    }

    /// Set the background image URL.
    pub fn set_background_image(&mut self, url: Option<String>) -> Vec<Action> {
        self.layout.background_image = url;
        vec![Action::RenderNeeded]
    }

    fn refresh_scale(&mut self) {
        let fpi = self.layout.scale;
        let fpi = if fpi.is_finite() && fpi > 0.0 {
            fpi
        } else {
            tracing::warn!(scale = fpi, "unusable layout scale, using default");
            DEFAULT_FEET_PER_INCH
        };
        self.camera.scale = pixels_per_foot(fpi, self.config.pixels_per_inch);
    }

    // --- Bulk add ---

    /// Append items built from form specs.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::NotOffered`] if the configured planner doesn't
    /// offer a requested kind, or [`LayoutError::DuplicateId`] if a generated
    /// id collides. Either way nothing is added.
    pub fn add_items(&mut self, specs: &[ItemSpec], placement: Placement) -> Result<Vec<Action>, LayoutError> {
        let refused = self.config.family.and_then(|family| {
            specs.iter().find(|s| !s.item_type.offered_by(family)).map(|s| (s.item_type, family))
        });
        if let Some((item_type, family)) = refused {
            tracing::warn!(?item_type, ?family, "item not offered by planner");
            return Err(LayoutError::NotOffered { item_type, family });
        }
        let items = placement::place(specs, placement, self.config.min_dimension, &mut self.rng);
        let ids: Vec<ItemId> = items.iter().map(|i| i.id.clone()).collect();
        self.layout.extend(items)?;
        tracing::info!(count = ids.len(), "items added");
        Ok(vec![Action::ItemsAdded { ids }, Action::RenderNeeded])
    }

    /// Add chair rows in front of a stage, grouped with it.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownItem`] if the stage doesn't exist.
    pub fn seat_stage(&mut self, stage_id: &str, seating: SeatRows) -> Result<Vec<Action>, LayoutError> {
        let ids = placement::seat_rows_for_stage(&mut self.layout, stage_id, seating, self.config.min_dimension)?;
        Ok(vec![Action::ItemsAdded { ids }, Action::RenderNeeded])
    }

    // --- Zoom ---

    pub fn set_zoom(&mut self, zoom: f64) -> Vec<Action> {
        let before = self.camera.zoom;
        self.camera.set_zoom(zoom, self.config.min_zoom, self.config.max_zoom);
        if (self.camera.zoom - before).abs() > f64::EPSILON {
            vec![Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    pub fn zoom_in(&mut self) -> Vec<Action> {
        self.set_zoom(self.camera.zoom * self.config.zoom_step)
    }

    pub fn zoom_out(&mut self) -> Vec<Action> {
        self.set_zoom(self.camera.zoom / self.config.zoom_step)
    }

    // --- Pointer input ---

    /// Pointer pressed at a screen point.
    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        match button {
            Button::Primary => self.press(screen_pt),
            Button::Secondary => self.context_rotate(screen_pt),
            Button::Middle => Vec::new(),
        }
    }

    fn press(&mut self, screen_pt: Point) -> Vec<Action> {
        // Single pointer model: a press while dragging first drops the drag.
        self.finish_drag();

        let hit_id = hit::hit_test(screen_pt, &self.layout, &self.camera).map(|item| item.id.clone());
        let Some(hit_id) = hit_id else {
            return self.clear_selection();
        };

        if self.input.selected_id() == Some(hit_id.as_str()) {
            let anchors = self
                .layout
                .rigid_set(&hit_id)
                .into_iter()
                .filter_map(|id| {
                    let origin = self.layout.get(&id)?.position();
                    Some(DragAnchor { id, origin })
                })
                .collect::<Vec<_>>();
            tracing::debug!(id = %hit_id, members = anchors.len(), "drag start");
            self.input = InputState::Dragging { id: hit_id, origin_screen: screen_pt, anchors };
            return vec![Action::SetCursor("grabbing")];
        }

        tracing::debug!(id = %hit_id, "select");
        self.input = InputState::Selected { id: hit_id.clone() };
        vec![Action::SelectionChanged(Some(hit_id)), Action::SetCursor("grab"), Action::RenderNeeded]
    }

    /// Pointer moved. Only a drag reacts.
    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        let InputState::Dragging { id, origin_screen, anchors } = &self.input else {
            return Vec::new();
        };
        if !self.layout.contains(id) {
            tracing::warn!(id = %id, "drag target vanished, resetting");
            return self.reset_to_idle();
        }

        let delta = self.camera.screen_to_world(screen_pt) - self.camera.screen_to_world(*origin_screen);
        let mut moved = Vec::with_capacity(anchors.len());
        for anchor in anchors {
            if let Some(item) = self.layout.get_mut(&anchor.id) {
                item.set_position(anchor.origin + delta);
                moved.push(anchor.id.clone());
            }
        }
        vec![Action::ItemsMoved { ids: moved }, Action::RenderNeeded]
    }

    /// Pointer released. A drag drops and its item stays selected.
    pub fn on_pointer_up(&mut self, _screen_pt: Point) -> Vec<Action> {
        self.finish_drag()
    }

    /// Pointer sequence cancelled by the browser.
    pub fn on_pointer_cancel(&mut self) -> Vec<Action> {
        self.finish_drag()
    }

    /// Pointer left the canvas.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.finish_drag()
    }

    fn finish_drag(&mut self) -> Vec<Action> {
        let InputState::Dragging { id, .. } = &self.input else {
            return Vec::new();
        };
        if !self.layout.contains(id) {
            return self.reset_to_idle();
        }
        tracing::debug!(id = %id, "drag end");
        self.input = InputState::Selected { id: id.clone() };
        vec![Action::SetCursor("grab"), Action::RenderNeeded]
    }

    /// Right click: select the item under the pointer and apply the context rotation.
    fn context_rotate(&mut self, screen_pt: Point) -> Vec<Action> {
        self.finish_drag();
        let hit_id = hit::hit_test(screen_pt, &self.layout, &self.camera).map(|item| item.id.clone());
        let Some(hit_id) = hit_id else {
            return Vec::new();
        };

        let mut actions = Vec::new();
        if self.input.selected_id() != Some(hit_id.as_str()) {
            self.input = InputState::Selected { id: hit_id.clone() };
            actions.push(Action::SelectionChanged(Some(hit_id)));
        }
        actions.extend(self.rotate_selected(RotateStep::Context));
        actions
    }

    // --- Commands ---

    /// Rotate the selected item (and its group) by the step's configured angle.
    pub fn rotate_selected(&mut self, step: RotateStep) -> Vec<Action> {
        let InputState::Selected { id } = &self.input else {
            return Vec::new();
        };
        let ids = self.layout.rigid_set(id);
        if ids.is_empty() {
            tracing::warn!(id = %id, "rotate target vanished, resetting");
            return self.reset_to_idle();
        }

        let degrees = self.config.rotation_degrees(step);
        for member in &ids {
            if let Some(item) = self.layout.get_mut(member) {
                item.rotate_by(degrees);
            }
        }
        tracing::debug!(id = %id, degrees, members = ids.len(), "rotate");
        vec![Action::ItemsRotated { ids }, Action::RenderNeeded]
    }

    /// Delete the selected item. Group mates stay.
    pub fn delete_selected(&mut self) -> Vec<Action> {
        let Some(id) = self.input.selected_id().map(str::to_owned) else {
            return Vec::new();
        };
        self.input = InputState::Idle;
        let mut actions = Vec::new();
        if self.layout.remove(&id).is_some() {
            tracing::debug!(id = %id, "delete");
            actions.push(Action::ItemDeleted { id });
        }
        actions.push(Action::SelectionChanged(None));
        actions.push(Action::SetCursor("default"));
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Drop the selection (and any drag in progress).
    pub fn clear_selection(&mut self) -> Vec<Action> {
        if self.input.selected_id().is_none() {
            return Vec::new();
        }
        self.reset_to_idle()
    }

    fn reset_to_idle(&mut self) -> Vec<Action> {
        self.input = InputState::Idle;
        vec![Action::SelectionChanged(None), Action::SetCursor("default"), Action::RenderNeeded]
    }

    // --- Keyboard ---

    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        match key.0.as_str() {
            "Delete" | "Backspace" => self.delete_selected(),
            "r" | "R" => self.rotate_selected(RotateStep::Free),
            "Escape" => self.clear_selection(),
            "+" | "=" => self.zoom_in(),
            "-" => self.zoom_out(),
            _ => Vec::new(),
        }
    }

    // --- Queries ---

    /// The currently selected item, if any.
    #[must_use]
    pub fn selection(&self) -> Option<&str> {
        self.input.selected_id()
    }

    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    #[must_use]
    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    #[must_use]
    pub fn input(&self) -> &InputState {
        &self.input
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    background: Option<HtmlImageElement>,
    viewport_width: f64,
    viewport_height: f64,
    dpr: f64,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, config: CanvasConfig) -> Self {
        let viewport_width = f64::from(canvas.width());
        let viewport_height = f64::from(canvas.height());
        Self { canvas, background: None, viewport_width, viewport_height, dpr: 1.0, core: EngineCore::with_config(config) }
    }

    /// Update viewport dimensions (CSS pixels) and device pixel ratio.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Vec<Action> {
        self.viewport_width = width_css;
        self.viewport_height = height_css;
        self.dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        vec![Action::RenderNeeded]
    }

    /// Hand over the decoded background image once the host has loaded the layout's URL.
    pub fn set_background(&mut self, image: Option<HtmlImageElement>) -> Vec<Action> {
        self.background = image;
        vec![Action::RenderNeeded]
    }

    // --- Delegated input ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_down(screen_pt, button)
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        self.core.on_pointer_move(screen_pt)
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point) -> Vec<Action> {
        self.core.on_pointer_up(screen_pt)
    }

    pub fn on_pointer_cancel(&mut self) -> Vec<Action> {
        self.core.on_pointer_cancel()
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.core.on_pointer_leave()
    }

    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        self.core.on_key_down(key)
    }

    pub fn load_layout(&mut self, layout: Layout) -> Vec<Action> {
        self.background = None;
        self.core.load_layout(layout)
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("2d context has unexpected type"))?;
        let scene = render::build_scene(
            self.core.layout(),
            self.core.input(),
            &self.core.camera(),
            self.core.config(),
            self.viewport_width,
            self.viewport_height,
        );
        render::draw(&ctx, &scene, self.background.as_ref(), self.dpr)
    }
}
