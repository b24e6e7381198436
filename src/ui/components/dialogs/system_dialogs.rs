use super::common::{create_dialog_block, create_instructions_paragraph, shortcuts};
use crate::constants::{DIALOG_TITLE_HELP, DIALOG_TITLE_LOGS};
use crate::icons::IconService;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Constraint, Layout, Margin, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

fn help_text(icons: &IconService) -> String {
    format!(
        r"
TASKS
-----
a / +       Add a task (opens the popup)
Space       Toggle completion of the selected task
Enter       Toggle completion of the selected task
e           Edit the selected task inline
d / Del     Delete the selected (or swiped) task
m           Grab the selected task to move it

NAVIGATION
----------
j/k ↑↓      Select next/previous task
Esc         Close popup, cancel edit, or quit

ADD POPUP
---------
Enter       Add the task
Esc         Close (the draft is kept)

MOVING
------
j/k ↑↓      Move the grabbed task
Enter / m   Drop it here
Esc         Put it back

MOUSE
-----
Click       Select a task; click its status to toggle
Drag left   Swipe to reveal delete, click the box to delete
Drag        While moving, drag the task to a new row

GENERAL
-------
?           Toggle this help
G           Show logs
i           Change icon theme
q, Ctrl+C   Quit

ICONS
-----
{pending}    Pending task
{completed}    Completed task
{edit}    Edit
{delete}    Delete
",
        pending = icons.task_status(false),
        completed = icons.task_status(true),
        edit = icons.edit(),
        delete = icons.delete(),
    )
}

/// Render scrollable text lines inside a bordered modal
fn render_scrollable(
    f: &mut Frame,
    area: Rect,
    title: &str,
    lines: Vec<Line<'_>>,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let dialog_area = LayoutManager::centered_rect(80, 80, area);
    f.render_widget(Clear, dialog_area);
    f.render_widget(create_dialog_block(title, Color::Cyan), dialog_area);

    let inner = dialog_area.inner(Margin {
        vertical: 1,
        horizontal: 2,
    });
    let [content_area, instructions_area] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    let total_lines = lines.len();
    let visible_height = content_area.height as usize;
    let max_scroll = total_lines.saturating_sub(visible_height);
    let clamped_offset = scroll_offset.min(max_scroll);

    *scrollbar_state = scrollbar_state
        .content_length(total_lines)
        .viewport_content_length(visible_height)
        .position(clamped_offset);

    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(Color::White))
        .scroll((clamped_offset as u16, 0));
    f.render_widget(paragraph, content_area);

    let instructions = create_instructions_paragraph(&[shortcuts::SCROLL, shortcuts::SEPARATOR, shortcuts::ESC_CLOSE]);
    f.render_widget(instructions, instructions_area);

    if total_lines > visible_height {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("▐")
            .style(Style::default().fg(Color::Gray))
            .thumb_style(Style::default().fg(Color::White));

        f.render_stateful_widget(scrollbar, content_area, scrollbar_state);
    }
}

pub fn render_help_dialog(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let text = help_text(icons);
    let lines = text.lines().map(|line| Line::from(line.to_string())).collect();
    render_scrollable(f, area, DIALOG_TITLE_HELP, lines, scroll_offset, scrollbar_state);
}

pub fn render_logs_dialog(
    f: &mut Frame,
    area: Rect,
    logs: &[String],
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let lines = if logs.is_empty() {
        vec![Line::from(Span::styled("No logs yet", Style::default().fg(Color::Gray)))]
    } else {
        logs.iter()
            .map(|entry| match entry.split_once("] ") {
                Some((timestamp, message)) => {
                    let message_style = if message.contains("Delete") {
                        Style::default().fg(Color::Red)
                    } else if message.contains("Task") {
                        Style::default().fg(Color::Green)
                    } else if message.contains("Reorder") {
                        Style::default().fg(Color::Cyan)
                    } else {
                        Style::default().fg(Color::White)
                    };
                    Line::from(vec![
                        Span::styled(format!("{}] ", timestamp), Style::default().fg(Color::DarkGray)),
                        Span::styled(message.to_string(), message_style),
                    ])
                }
                None => Line::from(entry.clone()),
            })
            .collect()
    };
    render_scrollable(f, area, DIALOG_TITLE_LOGS, lines, scroll_offset, scrollbar_state);
}
