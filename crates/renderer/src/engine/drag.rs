// SPDX-License-Identifier: MIT

//!
//! Drag state
//!

use crate::Point;

/// Whether the timeline is being dragged (panned).  Each engine holds its own
/// so that several timelines never share drag tracking.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum DragState {
    #[default]
    Idle,

    /// Being dragged.  `last` is where the pointer was when the offset was
    /// last updated.
    Dragging { last: Point },
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }
}
