//! Constants used throughout the application
//!
//! This module centralizes UI text, layout sizes and gesture thresholds.

// UI Text
pub const HEADER_WELCOME: &str = "Welcome 👋";
pub const TITLE_TASK_LIST: &str = "Your To-Do List";
pub const EMPTY_LIST_TEXT: &str = "No tasks yet. Press a to add one!";
pub const POPUP_TITLE: &str = " Add New Task ";
pub const POPUP_PLACEHOLDER: &str = "Enter a task...";
pub const EDIT_PLACEHOLDER: &str = "Edit your task...";
pub const STATUS_SHORTCUTS: &str = "a: add • Space: toggle • e: edit • d: delete • m: move • ?: help • q: quit";
pub const STATUS_MOVE_MODE: &str = "MOVE • j/k: move task • Enter: drop • Esc: cancel";
pub const STATUS_EDIT_MODE: &str = "EDIT • Enter: save • Esc: cancel";
pub const DIALOG_TITLE_LOGS: &str = " Logs - Press 'Esc', 'G' or 'q' to close ";
pub const DIALOG_TITLE_HELP: &str = " Help - Press 'Esc' or '?' to close ";

// Log Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";

// File names
pub const APP_DIR_NAME: &str = "tasklist";
pub const LOCAL_CONFIG_FILE: &str = "tasklist.toml";
pub const XDG_CONFIG_FILE: &str = "config.toml";
pub const LOG_FILE_NAME: &str = "tasklist.log";
/// Oldest in-memory log entries are dropped past this count
pub const MAX_LOG_ENTRIES: usize = 2000;

// Layout Constants
/// Rows taken by the add-task popup, borders included
pub const POPUP_HEIGHT: u16 = 7;
/// Rows the popup sits below the screen edge when fully hidden
pub const POPUP_HIDDEN_OFFSET: f64 = POPUP_HEIGHT as f64 + 1.0;
/// Rows of the header block (welcome line, title, spacing)
pub const HEADER_HEIGHT: u16 = 3;
/// Rows subtracted from the keyboard height before lifting the popup
pub const KEYBOARD_INSET: u16 = 1;
/// Minimum vertical shrink, in rows, that counts as a keyboard appearing
pub const KEYBOARD_MIN_ROWS: u16 = 4;

// Gesture Constants
/// Leftward drag, in columns, at which the delete box reaches full scale
pub const SWIPE_FULL: f64 = 10.0;
/// Leftward drag, in columns, at which the delete box reaches full opacity
pub const SWIPE_OPACITY_FULL: f64 = 8.0;
/// Leftward drag, in columns, past which a released row stays open
pub const SWIPE_REVEAL: i32 = 6;

// Config bounds
pub const TICK_RATE_MIN_MS: u64 = 10;
pub const TICK_RATE_MAX_MS: u64 = 1000;
pub const ANIMATION_MAX_MS: u64 = 5000;
