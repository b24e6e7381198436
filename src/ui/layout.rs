//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into the padded content area and a one-line status bar
    #[must_use]
    pub fn main_layout(area: Rect) -> (Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        // Breathing room around the list, shrinking away on tiny terminals
        let horizontal = if chunks[0].width >= 40 { 2 } else { 0 };
        let vertical = if chunks[0].height >= 12 { 1 } else { 0 };
        let content = Rect::new(
            chunks[0].x + horizontal,
            chunks[0].y + vertical,
            chunks[0].width.saturating_sub(horizontal * 2),
            chunks[0].height.saturating_sub(vertical * 2),
        );

        (content, chunks[1])
    }

    /// Bottom-anchored popup, pushed down by `slide_offset` rows and lifted by
    /// `lift` rows; `None` once it is entirely below the area
    #[must_use]
    pub fn popup_rect(area: Rect, height: u16, slide_offset: f64, lift: f64) -> Option<Rect> {
        let bottom = i32::from(area.bottom());
        let resting_y = bottom - i32::from(height);
        let y = (resting_y + slide_offset.round() as i32 - lift.round() as i32).max(i32::from(area.y));
        if y >= bottom {
            return None;
        }

        let y = y as u16;
        let visible_height = height.min(area.bottom() - y);
        Some(Rect::new(area.x, y, area.width, visible_height))
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}
