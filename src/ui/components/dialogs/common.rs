use crate::utils::color::{self, fade};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Creates a styled main dialog block
pub fn create_dialog_block<'a>(title: &'a str, theme_color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_alignment(Alignment::Center)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(theme_color))
}

/// Creates an input line with a visual cursor, or the placeholder when empty
pub fn create_input_paragraph<'a>(input_buffer: &str, placeholder: &'a str, opacity: f64) -> Paragraph<'a> {
    let cursor = Span::styled("█", Style::default().fg(fade(color::TEXT, opacity)));
    let line = if input_buffer.is_empty() {
        Line::from(vec![
            cursor,
            Span::styled(placeholder, Style::default().fg(fade(color::TEXT_PLACEHOLDER, opacity))),
        ])
    } else {
        Line::from(vec![
            Span::styled(input_buffer.to_string(), Style::default().fg(fade(color::TEXT, opacity))),
            cursor,
        ])
    };

    Paragraph::new(line).style(Style::default().bg(fade(color::SELECTION, opacity)))
}

/// A filled button label
pub fn create_button(label: &str, background: Color, opacity: f64) -> Paragraph<'static> {
    Paragraph::new(Span::styled(
        format!(" {} ", label),
        Style::default()
            .fg(fade(Color::White, opacity))
            .bg(fade(background, opacity))
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut]) -> Paragraph<'a> {
    let mut instruction_text = Vec::new();
    for (key, color, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Common instruction shortcuts used across dialogs
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ESC_CLOSE: InstructionShortcut = ("Esc", Color::Red, " Close");
    pub const SCROLL: InstructionShortcut = ("j/k", Color::Cyan, " Scroll");
}
