//! Error taxonomy for layout construction, loading, and configuration.
//!
//! Interaction events never produce these: the state machine resolves its own
//! edge cases by falling back to a safe state. Errors here come from the form
//! boundary (bad dimensions, bad scale ratios) and from decoding persisted
//! layouts or host configuration.

use crate::catalog::{Family, ItemType};
use crate::doc::ItemId;

/// Error returned by layout construction and decoding.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    /// A form field that should hold a dimension isn't a finite number.
    #[error("invalid dimension for {field}: {value:?}")]
    InvalidDimension { field: &'static str, value: String },
    /// Two items in one layout share an id.
    #[error("duplicate item id: {0}")]
    DuplicateId(ItemId),
    /// An operation named an item the layout doesn't contain.
    #[error("unknown item: {0}")]
    UnknownItem(ItemId),
    /// The host's planner doesn't offer this kind of item.
    #[error("{item_type:?} is not offered by the {family:?} planner")]
    NotOffered { item_type: ItemType, family: Family },
    /// A scale ratio had a zero, negative, or non-finite term.
    #[error("invalid scale: {0}")]
    InvalidScale(String),
    /// Host-supplied configuration failed validation.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    /// A persisted record or config blob could not be (de)serialized.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
