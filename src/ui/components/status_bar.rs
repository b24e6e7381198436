//! Status bar component

use crate::constants::{STATUS_EDIT_MODE, STATUS_MOVE_MODE, STATUS_SHORTCUTS};
use crate::utils::color::{self, fade};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

/// What the bottom line should advertise
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMode {
    Normal,
    Moving,
    Editing,
    AddPopup,
}

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, mode: StatusMode, opacity: f64) {
        let (status_text, status_color) = match mode {
            StatusMode::Normal => (STATUS_SHORTCUTS, color::TEXT_MUTED),
            StatusMode::Moving => (STATUS_MOVE_MODE, Color::Yellow),
            StatusMode::Editing => (STATUS_EDIT_MODE, color::ACCENT),
            StatusMode::AddPopup => ("Enter: add • Esc: close", color::ACCENT),
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(fade(status_color, opacity)));

        f.render_widget(status_bar, area);
    }
}
