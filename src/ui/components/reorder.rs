//! Drag-to-reorder gesture
//!
//! Grabbing a task snapshots the current order. Moving the grabbed task
//! rearranges the snapshot only; nothing reaches the controller until the
//! session finishes, at which point the new order is checked to be a full
//! permutation of the ids the session started from.

use crate::task::TaskId;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReorderError {
    #[error("expected {expected} ids, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("id {0} is not in the list")]
    UnknownId(TaskId),
    #[error("id {0} appears more than once")]
    DuplicateId(TaskId),
}

/// Check that `proposed` is a permutation of `current`
pub fn validate_permutation(current: &[TaskId], proposed: &[TaskId]) -> Result<(), ReorderError> {
    if current.len() != proposed.len() {
        return Err(ReorderError::LengthMismatch {
            expected: current.len(),
            actual: proposed.len(),
        });
    }

    let known: HashSet<TaskId> = current.iter().copied().collect();
    let mut seen = HashSet::with_capacity(proposed.len());
    for id in proposed {
        if !known.contains(id) {
            return Err(ReorderError::UnknownId(*id));
        }
        if !seen.insert(*id) {
            return Err(ReorderError::DuplicateId(*id));
        }
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct ReorderSession {
    original: Vec<TaskId>,
    order: Vec<TaskId>,
    grabbed: TaskId,
}

impl ReorderSession {
    /// Grab `grabbed` out of `order`; `None` if it is not listed
    pub fn begin(order: Vec<TaskId>, grabbed: TaskId) -> Option<Self> {
        if !order.contains(&grabbed) {
            return None;
        }
        Some(Self {
            original: order.clone(),
            order,
            grabbed,
        })
    }

    pub fn grabbed(&self) -> TaskId {
        self.grabbed
    }

    pub fn order(&self) -> &[TaskId] {
        &self.order
    }

    pub fn grabbed_index(&self) -> usize {
        self.order.iter().position(|id| *id == self.grabbed).unwrap_or(0)
    }

    pub fn is_changed(&self) -> bool {
        self.order != self.original
    }

    pub fn move_up(&mut self) -> bool {
        let index = self.grabbed_index();
        if index == 0 {
            return false;
        }
        self.order.swap(index, index - 1);
        true
    }

    pub fn move_down(&mut self) -> bool {
        let index = self.grabbed_index();
        if index + 1 >= self.order.len() {
            return false;
        }
        self.order.swap(index, index + 1);
        true
    }

    /// Move the grabbed task to `target`, shifting the tasks in between
    pub fn move_to(&mut self, target: usize) -> bool {
        let index = self.grabbed_index();
        let target = target.min(self.order.len().saturating_sub(1));
        if index == target {
            return false;
        }
        let id = self.order.remove(index);
        self.order.insert(target, id);
        true
    }

    /// Drop a task that left the list; returns false when it was the grabbed one
    pub fn forget(&mut self, id: TaskId) -> bool {
        self.original.retain(|other| *other != id);
        self.order.retain(|other| *other != id);
        id != self.grabbed
    }

    /// End the session with the new order
    pub fn finish(self) -> Result<Vec<TaskId>, ReorderError> {
        validate_permutation(&self.original, &self.order)?;
        Ok(self.order)
    }

    /// Abandon the session, returning the order it started from
    pub fn cancel(self) -> Vec<TaskId> {
        self.original
    }
}
