//! On-screen keyboard visibility
//!
//! Terminals have no soft-keyboard API. On terminals hosted on phones and
//! tablets the soft keyboard shrinks the terminal instead, so visibility is
//! inferred from resize events: a vertical shrink at constant width means a
//! keyboard slid in, growing back means it went away.

use crate::constants::KEYBOARD_MIN_ROWS;

/// Keyboard visibility notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardEvent {
    /// Keyboard is covering `height` rows
    Shown { height: u16 },
    Hidden,
}

/// Turns terminal resizes into keyboard show/hide notifications
#[derive(Debug, Clone)]
pub struct KeyboardWatcher {
    width: u16,
    full_height: u16,
    covered: u16,
}

impl KeyboardWatcher {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            full_height: height,
            covered: 0,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.covered > 0
    }

    /// Rows currently taken by the keyboard
    pub fn covered_rows(&self) -> u16 {
        self.covered
    }

    /// Feed a resize; returns a notification when visibility or height changed
    pub fn on_resize(&mut self, width: u16, height: u16) -> Option<KeyboardEvent> {
        if width != self.width {
            // Rotation or window resize: start over from the new geometry
            self.width = width;
            self.full_height = height;
            return self.set_covered(0);
        }

        if height >= self.full_height {
            self.full_height = height;
            return self.set_covered(0);
        }

        let shrink = self.full_height - height;
        if shrink >= KEYBOARD_MIN_ROWS {
            self.set_covered(shrink)
        } else {
            self.set_covered(0)
        }
    }

    fn set_covered(&mut self, covered: u16) -> Option<KeyboardEvent> {
        if covered == self.covered {
            return None;
        }
        self.covered = covered;
        if covered == 0 {
            Some(KeyboardEvent::Hidden)
        } else {
            Some(KeyboardEvent::Shown { height: covered })
        }
    }
}
