//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the application,
//! supporting different themes like emoji, Unicode, and ASCII fallbacks.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    #[default]
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

/// Task status icons
#[derive(Debug, Clone)]
pub struct TaskStatusIcons {
    pub pending: &'static str,
    pub completed: &'static str,
}

/// Row and popup action icons
#[derive(Debug, Clone)]
pub struct ActionIcons {
    pub add: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub save: &'static str,
    pub cancel: &'static str,
    pub grab: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub task_status: TaskStatusIcons,
    pub actions: ActionIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => IconSet {
                task_status: TaskStatusIcons {
                    pending: "🔳",
                    completed: "✅",
                },
                actions: ActionIcons {
                    add: "➕",
                    edit: "✏️",
                    delete: "🗑️",
                    save: "✅",
                    cancel: "❌",
                    grab: "✋",
                },
            },
            IconTheme::Unicode => IconSet {
                task_status: TaskStatusIcons {
                    pending: "□",
                    completed: "✓",
                },
                actions: ActionIcons {
                    add: "⊕",
                    edit: "✎",
                    delete: "⌫",
                    save: "✓",
                    cancel: "✗",
                    grab: "≡",
                },
            },
            IconTheme::Ascii => IconSet {
                task_status: TaskStatusIcons {
                    pending: "[ ]",
                    completed: "[X]",
                },
                actions: ActionIcons {
                    add: "(+)",
                    edit: "*",
                    delete: "DEL",
                    save: "ok",
                    cancel: "x",
                    grab: "=",
                },
            },
        }
    }

    #[must_use]
    pub fn task_status(&self, completed: bool) -> &'static str {
        let icons = self.icons().task_status;
        if completed {
            icons.completed
        } else {
            icons.pending
        }
    }

    #[must_use]
    pub fn add(&self) -> &'static str {
        self.icons().actions.add
    }

    #[must_use]
    pub fn edit(&self) -> &'static str {
        self.icons().actions.edit
    }

    #[must_use]
    pub fn delete(&self) -> &'static str {
        self.icons().actions.delete
    }

    #[must_use]
    pub fn save(&self) -> &'static str {
        self.icons().actions.save
    }

    #[must_use]
    pub fn cancel(&self) -> &'static str {
        self.icons().actions.cancel
    }

    #[must_use]
    pub fn grab(&self) -> &'static str {
        self.icons().actions.grab
    }
}
