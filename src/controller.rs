//! Task list controller
//!
//! Owns the ordered task list, the session UI flags (draft text, popup
//! visibility, inline edit) and the per-task animation handles. Every
//! mutation happens synchronously in response to one UI event or one
//! animation completion; nothing here blocks or spawns.
//!
//! Deletion is two-phase: [`TaskListController::request_delete`] starts the
//! shrink/fade transition and [`TaskListController::commit_delete`] removes
//! the task once the animation engine reports [`Completion::Removal`].

use crate::animation::{AnimationHandle, AnimationTimings, Completion, Easing, HandleKind, ItemVisual, Transition};
use crate::constants::{KEYBOARD_INSET, POPUP_HIDDEN_OFFSET};
use crate::keyboard::KeyboardEvent;
use crate::task::{normalize_text, Task, TaskId};
use std::collections::{HashMap, HashSet};
use std::time::Instant;

/// Inline edit in progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditState {
    pub id: TaskId,
    pub draft_text: String,
}

pub struct TaskListController {
    tasks: Vec<Task>,
    draft_text: String,
    popup_visible: bool,
    editing: Option<EditState>,

    // Presentation state, same lifecycle rules as the data it decorates
    animations: HashMap<TaskId, AnimationHandle>,
    mount_fade: Transition,
    popup_slide: Transition,
    popup_closing: bool,
    keyboard_offset: Transition,
    timings: AnimationTimings,
}

impl Default for TaskListController {
    fn default() -> Self {
        Self::new(AnimationTimings::default())
    }
}

impl TaskListController {
    pub fn new(timings: AnimationTimings) -> Self {
        let now = Instant::now();
        Self {
            tasks: Vec::new(),
            draft_text: String::new(),
            popup_visible: false,
            editing: None,
            animations: HashMap::new(),
            mount_fade: Transition::new(0.0, 1.0, timings.fade_in, Easing::EaseOut, now),
            popup_slide: Transition::settled(POPUP_HIDDEN_OFFSET, now),
            popup_closing: false,
            keyboard_offset: Transition::settled(0.0, now),
            timings,
        }
    }

    pub fn timings(&self) -> AnimationTimings {
        self.timings
    }

    // ---- task operations ----

    /// Append a task built from `draft`.
    ///
    /// Blank drafts are ignored: the list, the draft and the popup stay as
    /// they are. On success the draft is cleared and the popup closes.
    pub fn add(&mut self, draft: &str) -> Option<TaskId> {
        let Some(mut task) = Task::new(draft) else {
            log::debug!("Task: ignoring add with blank text");
            return None;
        };
        while self.position(task.id).is_some() {
            task.id = TaskId::new();
        }

        let id = task.id;
        log::info!("Task: added {} '{}'", id.short(), task.text);
        self.tasks.push(task);
        self.draft_text.clear();
        self.close_add_popup();
        Some(id)
    }

    /// Add a task from the popup's own draft
    pub fn submit_draft(&mut self) -> Option<TaskId> {
        let draft = self.draft_text.clone();
        self.add(&draft)
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft_text = text.into();
    }

    /// Flip the completion flag; unknown ids are ignored
    pub fn toggle_complete(&mut self, id: TaskId) -> bool {
        match self.get_mut(id) {
            Some(task) => {
                task.completed = !task.completed;
                log::info!("Task: {} completed={}", id.short(), task.completed);
                true
            }
            None => {
                log::debug!("Task: toggle ignored, {} not found", id.short());
                false
            }
        }
    }

    /// Enter inline edit for `id`, discarding any other unsaved edit
    pub fn begin_edit(&mut self, id: TaskId, current_text: impl Into<String>) -> bool {
        if self.position(id).is_none() {
            log::debug!("Edit: begin ignored, {} not found", id.short());
            return false;
        }
        if let Some(previous) = &self.editing {
            if previous.id != id {
                log::debug!("Edit: discarding unsaved edit of {}", previous.id.short());
            }
        }
        self.editing = Some(EditState {
            id,
            draft_text: current_text.into(),
        });
        true
    }

    pub fn set_edit_draft(&mut self, text: impl Into<String>) {
        if let Some(edit) = self.editing.as_mut() {
            edit.draft_text = text.into();
        }
    }

    /// Replace the text of `id` and leave edit mode.
    ///
    /// Blank text keeps edit mode active and changes nothing.
    pub fn save_edit(&mut self, id: TaskId, edited_text: &str) -> bool {
        let Some(text) = normalize_text(edited_text) else {
            log::debug!("Edit: ignoring save with blank text for {}", id.short());
            return false;
        };
        let Some(task) = self.get_mut(id) else {
            log::debug!("Edit: save ignored, {} not found", id.short());
            return false;
        };

        task.text = text;
        log::info!("Task: {} renamed to '{}'", id.short(), task.text);
        self.editing = None;
        true
    }

    pub fn cancel_edit(&mut self) {
        if let Some(edit) = self.editing.take() {
            log::debug!("Edit: cancelled for {}", edit.id.short());
        }
    }

    /// Alias for [`Self::request_delete`]
    pub fn delete(&mut self, id: TaskId) -> bool {
        self.request_delete(id)
    }

    /// Start the removal transition; the task stays listed until committed
    pub fn request_delete(&mut self, id: TaskId) -> bool {
        if self.position(id).is_none() {
            log::debug!("Delete: request ignored, {} not found", id.short());
            return false;
        }
        if self.is_pending_removal(id) {
            return false;
        }

        log::info!("Delete: removing {} after {:?}", id.short(), self.timings.delete);
        self.animations
            .insert(id, AnimationHandle::removal(self.timings.delete, Instant::now()));
        true
    }

    /// Remove the task and drop its animation handle
    pub fn commit_delete(&mut self, id: TaskId) -> Option<Task> {
        let index = self.position(id)?;
        let task = self.tasks.remove(index);
        self.animations.remove(&id);
        if self.editing.as_ref().is_some_and(|edit| edit.id == id) {
            self.editing = None;
        }
        log::info!("Delete: committed {} '{}'", id.short(), task.text);
        Some(task)
    }

    /// Replace the list order with `new_ids`, a permutation of the current ids.
    ///
    /// Anything that is not a permutation leaves the order untouched.
    pub fn reorder(&mut self, new_ids: &[TaskId]) -> bool {
        let current: HashSet<TaskId> = self.tasks.iter().map(|task| task.id).collect();
        let proposed: HashSet<TaskId> = new_ids.iter().copied().collect();
        if proposed.len() != new_ids.len() || proposed != current {
            log::warn!(
                "Reorder: ignoring order of {} ids for {} tasks",
                new_ids.len(),
                self.tasks.len()
            );
            return false;
        }

        let rank: HashMap<TaskId, usize> = new_ids.iter().enumerate().map(|(index, id)| (*id, index)).collect();
        self.tasks
            .sort_by_key(|task| rank.get(&task.id).copied().unwrap_or(usize::MAX));
        log::info!("Reorder: applied new order of {} tasks", self.tasks.len());
        true
    }

    // ---- popup ----

    pub fn open_add_popup(&mut self) {
        self.popup_visible = true;
        self.popup_closing = false;
        self.popup_slide
            .retarget(0.0, self.timings.popup_slide, Easing::Spring, Instant::now());
    }

    /// Hide the popup. The draft is kept for the next time it opens.
    pub fn close_add_popup(&mut self) {
        if !self.popup_visible {
            return;
        }
        self.popup_visible = false;
        self.popup_closing = true;
        self.popup_slide.retarget(
            POPUP_HIDDEN_OFFSET,
            self.timings.popup_slide,
            Easing::Spring,
            Instant::now(),
        );
    }

    // ---- collaborators ----

    /// Follow the on-screen keyboard; only the popup offset changes
    pub fn on_keyboard(&mut self, event: KeyboardEvent) {
        let target = match event {
            KeyboardEvent::Shown { height } => height.saturating_sub(KEYBOARD_INSET),
            KeyboardEvent::Hidden => 0,
        };
        log::debug!("Keyboard: {:?}, popup lift -> {}", event, target);
        self.keyboard_offset.retarget(
            f64::from(target),
            self.timings.keyboard_follow,
            Easing::EaseOut,
            Instant::now(),
        );
    }

    /// Collect transitions that finished by `now`, each reported once
    pub fn tick(&mut self, now: Instant) -> Vec<Completion> {
        let mut completions = Vec::new();

        for task in &self.tasks {
            if let Some(handle) = self.animations.get_mut(&task.id) {
                if handle.kind() == HandleKind::Removal && handle.take_completion(now) {
                    completions.push(Completion::Removal(task.id));
                }
            }
        }

        if self.popup_closing && self.popup_slide.is_finished(now) {
            self.popup_closing = false;
            completions.push(Completion::PopupHidden);
        }

        completions
    }

    /// Completion callback of the animation engine
    pub fn on_transition_complete(&mut self, completion: Completion) {
        match completion {
            Completion::Removal(id) => {
                self.commit_delete(id);
            }
            Completion::PopupHidden => log::debug!("Popup: slide-out finished"),
        }
    }

    /// Run [`Self::tick`] and apply every completion
    pub fn advance(&mut self, now: Instant) -> Vec<Completion> {
        let completions = self.tick(now);
        for completion in &completions {
            self.on_transition_complete(*completion);
        }
        completions
    }

    // ---- queries ----

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task_ids(&self) -> Vec<TaskId> {
        self.tasks.iter().map(|task| task.id).collect()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }

    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn draft_text(&self) -> &str {
        &self.draft_text
    }

    pub fn is_popup_visible(&self) -> bool {
        self.popup_visible
    }

    /// Open, or still sliding out
    pub fn is_popup_rendered(&self) -> bool {
        self.popup_visible || self.popup_closing
    }

    pub fn editing(&self) -> Option<&EditState> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self, id: TaskId) -> bool {
        self.editing.as_ref().is_some_and(|edit| edit.id == id)
    }

    pub fn is_pending_removal(&self, id: TaskId) -> bool {
        self.animations
            .get(&id)
            .is_some_and(|handle| handle.kind() == HandleKind::Removal)
    }

    /// Opacity and scale of a row at `now`
    pub fn item_visual(&self, id: TaskId, now: Instant) -> ItemVisual {
        match self.animations.get(&id) {
            Some(handle) => {
                let value = handle.value_at(now);
                ItemVisual {
                    opacity: value,
                    scale: value,
                }
            }
            None => ItemVisual::default(),
        }
    }

    /// Whole-screen opacity while the mount fade-in plays
    pub fn mount_opacity(&self, now: Instant) -> f64 {
        self.mount_fade.value_at(now)
    }

    /// Rows the popup sits below its resting place
    pub fn popup_offset(&self, now: Instant) -> f64 {
        self.popup_slide.value_at(now)
    }

    /// Rows the popup is lifted to clear the keyboard
    pub fn keyboard_offset(&self, now: Instant) -> f64 {
        self.keyboard_offset.value_at(now)
    }

    /// Whether a redraw at `now` would differ from the previous one
    pub fn is_animating(&self, now: Instant) -> bool {
        !self.mount_fade.is_finished(now)
            || !self.popup_slide.is_finished(now)
            || self.popup_closing
            || !self.keyboard_offset.is_finished(now)
            || !self.animations.is_empty()
    }
}
