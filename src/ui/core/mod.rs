//! Core UI functionality for the tasklist application.
//!
//! This module contains the building blocks the screen is made of: the
//! actions components emit, the component trait they implement, and the
//! terminal event source.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Terminal event polling and tick generation
//!
//! # Architecture
//!
//! 1. **Components** implement the [`Component`] trait and turn key and mouse
//!    input into [`Action`]s
//! 2. **Actions** flow through [`crate::ui::app_component::AppComponent`],
//!    which applies them to the task list controller
//! 3. **Events** arrive one at a time from the [`EventHandler`]

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::{Action, DialogType};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
