//! Swipe-to-delete gesture
//!
//! A mouse press on a row starts a swipe; dragging left pulls the row aside
//! and reveals the delete box behind it. Releasing far enough keeps the row
//! open so the box can be clicked, anything shorter snaps back. Only one row
//! is open at a time and rows cannot be pulled past the box.

use crate::animation::interpolate_clamped;
use crate::constants::{SWIPE_FULL, SWIPE_OPACITY_FULL, SWIPE_REVEAL};
use crate::task::TaskId;

/// Scale and opacity of the revealed delete box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeleteBoxVisual {
    pub scale: f64,
    pub opacity: f64,
}

#[derive(Debug, Clone, Copy)]
struct ActiveSwipe {
    id: TaskId,
    origin_column: u16,
    start_offset: i32,
    dx: i32,
}

#[derive(Debug, Default)]
pub struct SwipeTracker {
    active: Option<ActiveSwipe>,
    open: Option<TaskId>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    fn max_offset() -> i32 {
        -(SWIPE_FULL as i32)
    }

    /// Mouse pressed on the row of `id` at `column`
    pub fn begin(&mut self, id: TaskId, column: u16) {
        let start_offset = if self.open == Some(id) { Self::max_offset() } else { 0 };
        if self.open != Some(id) {
            self.open = None;
        }
        self.active = Some(ActiveSwipe {
            id,
            origin_column: column,
            start_offset,
            dx: start_offset,
        });
    }

    /// Mouse dragged to `column`; returns true while a swipe is in progress
    pub fn drag(&mut self, column: u16) -> bool {
        let Some(swipe) = self.active.as_mut() else {
            return false;
        };
        let moved = i32::from(column) - i32::from(swipe.origin_column);
        swipe.dx = (swipe.start_offset + moved).clamp(Self::max_offset(), 0);
        true
    }

    /// Mouse released; returns the row left open, if any
    pub fn release(&mut self) -> Option<TaskId> {
        let swipe = self.active.take()?;
        if swipe.dx <= -SWIPE_REVEAL {
            self.open = Some(swipe.id);
        } else if self.open == Some(swipe.id) {
            self.open = None;
        }
        self.open
    }

    /// Snap every row back
    pub fn close(&mut self) {
        self.active = None;
        self.open = None;
    }

    /// Drop any state about a task that left the list
    pub fn forget(&mut self, id: TaskId) {
        if self.open == Some(id) {
            self.open = None;
        }
        if self.active.is_some_and(|swipe| swipe.id == id) {
            self.active = None;
        }
    }

    pub fn is_swiping(&self) -> bool {
        self.active.is_some()
    }

    pub fn open_row(&self) -> Option<TaskId> {
        self.open
    }

    /// Horizontal displacement of a row, in columns (zero or negative)
    pub fn offset(&self, id: TaskId) -> i32 {
        match self.active {
            Some(swipe) if swipe.id == id => swipe.dx,
            _ if self.open == Some(id) => Self::max_offset(),
            _ => 0,
        }
    }

    /// Delete box appearance for a row, `None` when nothing is revealed
    pub fn delete_box(&self, id: TaskId) -> Option<DeleteBoxVisual> {
        let dx = f64::from(self.offset(id));
        if dx >= 0.0 {
            return None;
        }
        Some(DeleteBoxVisual {
            scale: interpolate_clamped(dx, (-SWIPE_FULL, 0.0), (1.0, 0.0)),
            opacity: interpolate_clamped(dx, (-SWIPE_OPACITY_FULL, 0.0), (1.0, 0.0)),
        })
    }
}
