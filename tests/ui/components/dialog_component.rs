use crate::buffer_text;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use tasklist::logger::Logger;
use tasklist::ui::components::DialogComponent;
use tasklist::ui::core::{Action, Component, DialogType};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_show_and_hide() {
    let mut dialog = DialogComponent::new(Logger::new());
    assert!(!dialog.is_visible());
    assert_eq!(dialog.handle_key_events(key(KeyCode::Esc)), Action::None);

    assert_eq!(dialog.update(Action::ShowDialog(DialogType::Help)), Action::None);
    assert!(dialog.is_visible());
    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('?'))), Action::HideDialog);
    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('G'))), Action::None);

    dialog.update(Action::HideDialog);
    assert!(!dialog.is_visible());
}

#[test]
fn test_scrolling() {
    let mut dialog = DialogComponent::new(Logger::new());
    dialog.update(Action::ShowDialog(DialogType::Logs));

    let action = dialog.handle_key_events(key(KeyCode::Char('j')));
    assert_eq!(action, Action::DialogScrollDown);
    dialog.update(action);
    assert_eq!(dialog.scroll_offset, 1);

    dialog.update(Action::DialogScrollUp);
    dialog.update(Action::DialogScrollUp);
    assert_eq!(dialog.scroll_offset, 0);

    // Reopening starts from the top
    dialog.update(Action::DialogScrollDown);
    dialog.update(Action::ShowDialog(DialogType::Help));
    assert_eq!(dialog.scroll_offset, 0);
}

#[test]
fn test_unrelated_actions_pass_through() {
    let mut dialog = DialogComponent::new(Logger::new());
    assert_eq!(dialog.update(Action::OpenAddPopup), Action::OpenAddPopup);
}

#[test]
fn test_logs_dialog_renders_entries() {
    let logger = Logger::new();
    logger.log("Task: added 1234abcd".to_string());
    let mut dialog = DialogComponent::new(logger);
    dialog.update(Action::ShowDialog(DialogType::Logs));

    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|f| dialog.render(f, f.area())).unwrap();
    let text = buffer_text(&terminal);
    assert!(text.contains("Logs"));
    assert!(text.contains("Task: added 1234abcd"));
}

#[test]
fn test_help_dialog_renders() {
    let mut dialog = DialogComponent::new(Logger::new());
    dialog.update(Action::ShowDialog(DialogType::Help));

    let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
    terminal.draw(|f| dialog.render(f, f.area())).unwrap();
    let text = buffer_text(&terminal);
    assert!(text.contains("Help"));
    assert!(text.contains("Add a task"));
}
