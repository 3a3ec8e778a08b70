//! Layout canvas core for the event planner's room, tent, and outdoor designers.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! interaction model of the 2D layout canvas: mapping between world feet and
//! screen pixels, hit-testing rotated rectangles and circles, the
//! select/drag/rotate state machine, and painting. The host page wires DOM
//! events to the engine, forwards the returned [`engine::Action`]s to its form
//! and save layer, and persists layouts through the external store.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`doc`] | Items and the ordered layout |
//! | [`geometry`] | Shapes and point-in-shape tests in world units |
//! | [`camera`] | Scale/zoom coordinate mapping and unit conversion |
//! | [`hit`] | Topmost-item hit testing |
//! | [`input`] | Buttons, keys, and the interaction session state |
//! | [`render`] | Scene building and Canvas2D painting |
//! | [`catalog`] | Item kinds per planner and the form boundary |
//! | [`placement`] | Initial placement for bulk adds and stage seating |
//! | [`record`] | Persisted layout records per planner family |
//! | [`contracts`] | Hosted function request/response types |
//! | [`config`] | Host-supplied canvas configuration |
//! | [`error`] | Layout error type |
//! | [`consts`] | Shared numeric constants (unit factors, steps, zoom limits) |

pub mod camera;
pub mod catalog;
pub mod config;
pub mod consts;
pub mod contracts;
pub mod doc;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod hit;
pub mod input;
pub mod placement;
pub mod record;
pub mod render;
