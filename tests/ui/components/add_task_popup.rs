use crate::buffer_text;
use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, Terminal};
use tasklist::constants::POPUP_PLACEHOLDER;
use tasklist::ui::components::AddTaskPopup;
use tasklist::ui::core::{Action, Component};

fn draw(popup: &mut AddTaskPopup) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
    terminal.draw(|f| popup.render(f, f.area())).unwrap();
    terminal
}

fn left_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn test_hidden_popup_draws_nothing() {
    let mut popup = AddTaskPopup::new();
    let text = buffer_text(&draw(&mut popup));
    assert!(text.trim().is_empty());
}

#[test]
fn test_shows_placeholder_then_draft() {
    let mut popup = AddTaskPopup::new();
    popup.update_data("", true, 0.0, 0.0, 1.0);
    assert!(buffer_text(&draw(&mut popup)).contains(POPUP_PLACEHOLDER));

    popup.update_data("Buy milk", true, 0.0, 0.0, 1.0);
    let text = buffer_text(&draw(&mut popup));
    assert!(text.contains("Buy milk"));
    assert!(!text.contains(POPUP_PLACEHOLDER));
}

#[test]
fn test_buttons_are_clickable() {
    let mut popup = AddTaskPopup::new();
    popup.update_data("Buy milk", true, 0.0, 0.0, 1.0);
    draw(&mut popup);

    // Popup occupies rows 5..12; buttons sit on its fifth row
    assert_eq!(popup.handle_mouse_events(left_click(4, 9)), Action::CloseAddPopup);
    assert_eq!(popup.handle_mouse_events(left_click(35, 9)), Action::SubmitDraft);
    assert_eq!(popup.handle_mouse_events(left_click(20, 9)), Action::None);
}

#[test]
fn test_slid_out_popup_is_not_clickable() {
    let mut popup = AddTaskPopup::new();
    popup.update_data("", true, 20.0, 0.0, 1.0);
    draw(&mut popup);
    assert_eq!(popup.handle_mouse_events(left_click(4, 9)), Action::None);
}
