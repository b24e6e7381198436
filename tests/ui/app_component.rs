use crate::buffer_text;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, Terminal};
use tasklist::config::Config;
use tasklist::constants::EMPTY_LIST_TEXT;
use tasklist::logger::Logger;
use tasklist::ui::app_component::AppComponent;
use tasklist::ui::core::{Component, EventType};

fn still_app() -> AppComponent {
    let mut config = Config::default();
    config.animation.enabled = false;
    AppComponent::new(&config, Logger::new())
}

fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(EventType::Key(KeyEvent::new(code, KeyModifiers::NONE)))
        .unwrap();
}

fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn add_task(app: &mut AppComponent, text: &str) {
    press(app, KeyCode::Char('a'));
    type_text(app, text);
    press(app, KeyCode::Enter);
}

fn click(app: &mut AppComponent, kind: MouseEventKind, column: u16, row: u16) {
    app.handle_event(EventType::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }))
    .unwrap();
}

fn draw(app: &mut AppComponent) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();
    terminal
}

#[test]
fn test_renders_empty_state() {
    let mut app = still_app();
    let text = buffer_text(&draw(&mut app));
    assert!(text.contains("Welcome"));
    assert!(text.contains("Your To-Do List"));
    assert!(text.contains(EMPTY_LIST_TEXT));
}

#[test]
fn test_add_task_through_popup() {
    let mut app = still_app();
    press(&mut app, KeyCode::Char('a'));
    assert!(app.controller().is_popup_visible());

    let text = buffer_text(&draw(&mut app));
    assert!(text.contains("Add New Task"));
    assert!(text.contains("Cancel"));

    type_text(&mut app, "Buy milk");
    assert_eq!(app.controller().draft_text(), "Buy milk");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.controller().len(), 1);
    assert!(!app.controller().is_popup_visible());
    let text = buffer_text(&draw(&mut app));
    assert!(text.contains("Buy milk"));
    assert!(!text.contains(EMPTY_LIST_TEXT));
}

#[test]
fn test_blank_draft_keeps_popup_open() {
    let mut app = still_app();
    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "   ");
    press(&mut app, KeyCode::Enter);

    assert!(app.controller().is_empty());
    assert!(app.controller().is_popup_visible());
}

#[test]
fn test_escape_closes_popup_and_keeps_draft() {
    let mut app = still_app();
    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "half");
    press(&mut app, KeyCode::Esc);

    assert!(!app.controller().is_popup_visible());
    assert!(!app.should_quit());

    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.controller().draft_text(), "half");
}

#[test]
fn test_toggle_edit_and_delete_by_keyboard() {
    let mut app = still_app();
    add_task(&mut app, "Walk dog");

    press(&mut app, KeyCode::Char(' '));
    assert!(app.controller().tasks()[0].completed);

    press(&mut app, KeyCode::Char('e'));
    assert!(app.controller().editing().is_some());
    type_text(&mut app, "gy");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.controller().tasks()[0].text, "Walk doggy");
    assert!(app.controller().editing().is_none());

    press(&mut app, KeyCode::Char('d'));
    // Removal waits for its transition to report back on a tick
    assert_eq!(app.controller().len(), 1);
    app.handle_event(EventType::Tick).unwrap();
    assert!(app.controller().is_empty());
}

#[test]
fn test_keys_type_into_edit_field() {
    let mut app = still_app();
    add_task(&mut app, "Walk dog");
    press(&mut app, KeyCode::Char('e'));

    // 'q' is text while editing, not quit
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.should_quit());
    assert_eq!(app.controller().editing().unwrap().draft_text, "Walk dogq");

    press(&mut app, KeyCode::Esc);
    assert!(app.controller().editing().is_none());
    assert_eq!(app.controller().tasks()[0].text, "Walk dog");
}

#[test]
fn test_move_mode_reorders() {
    let mut app = still_app();
    add_task(&mut app, "first");
    add_task(&mut app, "second");

    press(&mut app, KeyCode::Char('m'));
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Enter);

    let texts: Vec<_> = app.controller().tasks().iter().map(|task| task.text.clone()).collect();
    assert_eq!(texts, vec!["second", "first"]);
}

#[test]
fn test_scenario_add_toggle_delete() {
    let mut app = still_app();
    add_task(&mut app, "Buy milk");
    add_task(&mut app, "Walk dog");

    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('d'));
    app.handle_event(EventType::Tick).unwrap();

    let tasks = app.controller().tasks();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].text, "Buy milk");
    assert!(tasks[0].completed);
}

#[test]
fn test_keyboard_resize_lifts_popup() {
    let mut app = still_app();
    app.set_terminal_size(60, 30);
    press(&mut app, KeyCode::Char('a'));

    app.handle_event(EventType::Resize(60, 20)).unwrap();
    app.handle_event(EventType::Tick).unwrap();
    assert_eq!(app.controller().keyboard_offset(std::time::Instant::now()), 9.0);

    app.handle_event(EventType::Resize(60, 30)).unwrap();
    assert_eq!(app.controller().keyboard_offset(std::time::Instant::now()), 0.0);
}

#[test]
fn test_mouse_add_button_opens_popup() {
    let mut app = still_app();
    draw(&mut app);

    // Header row of the padded content area, right edge
    click(&mut app, MouseEventKind::Down(MouseButton::Left), 56, 1);
    assert!(app.controller().is_popup_visible());
}

#[test]
fn test_tap_status_toggles() {
    let mut app = still_app();
    add_task(&mut app, "Buy milk");
    draw(&mut app);

    click(&mut app, MouseEventKind::Down(MouseButton::Left), 3, 4);
    click(&mut app, MouseEventKind::Up(MouseButton::Left), 3, 4);
    assert!(app.controller().tasks()[0].completed);
}

#[test]
fn test_swipe_to_delete() {
    let mut app = still_app();
    add_task(&mut app, "Buy milk");
    draw(&mut app);

    click(&mut app, MouseEventKind::Down(MouseButton::Left), 40, 4);
    click(&mut app, MouseEventKind::Drag(MouseButton::Left), 30, 4);
    click(&mut app, MouseEventKind::Up(MouseButton::Left), 30, 4);
    assert_eq!(app.controller().len(), 1);
    assert!(!app.controller().tasks()[0].completed);

    draw(&mut app);
    click(&mut app, MouseEventKind::Down(MouseButton::Left), 55, 4);
    app.handle_event(EventType::Tick).unwrap();
    assert!(app.controller().is_empty());
}

#[test]
fn test_help_and_logs_dialogs() {
    let mut app = still_app();
    press(&mut app, KeyCode::Char('?'));
    let text = buffer_text(&draw(&mut app));
    assert!(text.contains("Help"));

    press(&mut app, KeyCode::Esc);
    assert!(!app.should_quit());

    add_task(&mut app, "Buy milk");
    press(&mut app, KeyCode::Char('G'));
    let text = buffer_text(&draw(&mut app));
    assert!(text.contains("Logs"));
    assert!(text.contains("Task: added"));
}

#[test]
fn test_quit_keys() {
    let mut app = still_app();
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());

    let mut app = still_app();
    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)))
        .unwrap();
    assert!(app.should_quit());

    let mut app = still_app();
    press(&mut app, KeyCode::Esc);
    assert!(app.should_quit());
}

#[test]
fn test_mount_fade_animates() {
    let mut app = AppComponent::new(&Config::default(), Logger::new());
    assert!(app.is_animating());
    draw(&mut app);
}
