//! Utility modules for the tasklist application.
//!
//! - [`color`] - Palette and color blending used by the fade transitions

pub mod color;
