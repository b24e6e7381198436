//! tasklist - a single-screen animated task list for the terminal
//!
//! Tasks can be added from a slide-up popup, toggled, edited inline,
//! deleted with a shrink-and-fade transition, and reordered by dragging.
//! Everything lives in memory for the length of the session.
//!
//! # Modules
//!
//! * [`controller`] - Task list state and the operations on it
//! * [`animation`] - Time-based transitions and per-task animation handles
//! * [`keyboard`] - On-screen keyboard visibility from terminal resizes
//! * [`config`] - Application configuration management
//! * [`ui`] - Terminal user interface components and rendering

/// Time-based transitions sampled on every frame
pub mod animation;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// The task list controller
pub mod controller;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// On-screen keyboard notifications
pub mod keyboard;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Task model
pub mod task;

/// Terminal user interface components and rendering
pub mod ui;

/// Color helpers
pub mod utils;

pub use controller::TaskListController;
pub use task::{Task, TaskId};
