//! Input model: pointer buttons, keys, rotation gestures, and the interaction
//! session state.
//!
//! `InputState` is the single interaction session for a layout. It is created
//! idle, moves to `Selected` on a hit, and to `Dragging` when the selected
//! item is pressed again. A drag records its screen origin and the original
//! position of every item it moves, once, so each pointer-move recomputes
//! positions from that fixed origin instead of accumulating deltas.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;
use crate::doc::ItemId;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger touch).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button; opens the context-menu rotation.
    Secondary,
}

/// A keyboard key as reported by the browser (e.g. `"Delete"`, `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

/// Which rotate control the user triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotateStep {
    /// The free rotation button or `r` key.
    Free,
    /// The right-click context menu.
    Context,
}

/// Original position of one item moved by a drag.
#[derive(Debug, Clone, PartialEq)]
pub struct DragAnchor {
    pub id: ItemId,
    pub origin: Point,
}

/// The interaction session.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InputState {
    /// Nothing selected.
    #[default]
    Idle,
    /// One item is selected; no gesture in progress.
    Selected { id: ItemId },
    /// The selected item (and its group) follows the pointer.
    Dragging {
        /// The pressed item; stays selected when the drag ends.
        id: ItemId,
        /// Screen-space pointer position at drag start.
        origin_screen: Point,
        /// Original positions of every item the drag moves, captured once.
        anchors: Vec<DragAnchor>,
    },
}

impl InputState {
    /// The selected item, if any. A dragged item counts as selected.
    #[must_use]
    pub fn selected_id(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Selected { id } | Self::Dragging { id, .. } => Some(id),
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}
