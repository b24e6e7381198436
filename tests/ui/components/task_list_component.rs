use crate::buffer_text;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use tasklist::animation::ItemVisual;
use tasklist::icons::{IconService, IconTheme};
use tasklist::task::TaskId;
use tasklist::ui::components::task_list_item_component::TaskRow;
use tasklist::ui::components::TaskListComponent;
use tasklist::ui::core::{Action, Component};

fn row(text: &str) -> TaskRow {
    TaskRow {
        id: TaskId::new(),
        text: text.to_string(),
        completed: false,
        visual: ItemVisual::default(),
        editing: None,
        grabbed: false,
        swipe_offset: 0,
        delete_box: None,
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn list_with(texts: &[&str]) -> (TaskListComponent, Vec<TaskId>) {
    let rows: Vec<TaskRow> = texts.iter().map(|text| row(text)).collect();
    let ids = rows.iter().map(|row| row.id).collect();
    let mut list = TaskListComponent::new();
    list.update_data(rows, 1.0);
    (list, ids)
}

/// Feed a key and apply the resulting navigation action like the app does
fn press(list: &mut TaskListComponent, code: KeyCode) -> Action {
    let action = list.handle_key_events(key(code));
    list.update(action)
}

#[test]
fn test_navigation() {
    let (mut list, _) = list_with(&["a", "b", "c"]);
    assert_eq!(list.selected_index, 0);

    press(&mut list, KeyCode::Char('j'));
    press(&mut list, KeyCode::Down);
    assert_eq!(list.selected_index, 2);

    // Stops at the last row
    press(&mut list, KeyCode::Char('j'));
    assert_eq!(list.selected_index, 2);

    press(&mut list, KeyCode::Char('k'));
    assert_eq!(list.selected_index, 1);
}

#[test]
fn test_task_actions_target_selection() {
    let (mut list, ids) = list_with(&["a", "b"]);
    press(&mut list, KeyCode::Char('j'));

    assert_eq!(press(&mut list, KeyCode::Char(' ')), Action::ToggleComplete(ids[1]));
    assert_eq!(press(&mut list, KeyCode::Char('d')), Action::DeleteTask(ids[1]));
    assert_eq!(
        press(&mut list, KeyCode::Char('e')),
        Action::BeginEdit {
            id: ids[1],
            text: "b".to_string()
        }
    );
    assert_eq!(press(&mut list, KeyCode::Char('a')), Action::OpenAddPopup);
}

#[test]
fn test_empty_list_ignores_task_keys() {
    let (mut list, _) = list_with(&[]);
    assert_eq!(press(&mut list, KeyCode::Char(' ')), Action::None);
    assert_eq!(press(&mut list, KeyCode::Char('d')), Action::None);
    assert_eq!(press(&mut list, KeyCode::Char('m')), Action::None);
    assert!(!list.is_moving());
}

#[test]
fn test_edit_keys() {
    let mut editing = row("Walk dog");
    editing.editing = Some("Walk".to_string());
    let id = editing.id;
    let mut list = TaskListComponent::new();
    list.update_data(vec![editing], 1.0);
    assert!(list.is_editing());

    assert_eq!(press(&mut list, KeyCode::Char('s')), Action::UpdateEditDraft("Walks".to_string()));
    assert_eq!(press(&mut list, KeyCode::Backspace), Action::UpdateEditDraft("Wal".to_string()));
    assert_eq!(
        press(&mut list, KeyCode::Enter),
        Action::SaveEdit {
            id,
            text: "Walk".to_string()
        }
    );
    assert_eq!(press(&mut list, KeyCode::Esc), Action::CancelEdit);
}

#[test]
fn test_move_mode_emits_reorder() {
    let (mut list, ids) = list_with(&["a", "b", "c"]);

    press(&mut list, KeyCode::Char('m'));
    assert!(list.is_moving());
    assert!(list.rows[0].grabbed);

    press(&mut list, KeyCode::Char('j'));
    press(&mut list, KeyCode::Char('j'));
    assert_eq!(list.selected_index, 2);

    assert_eq!(press(&mut list, KeyCode::Enter), Action::Reorder(vec![ids[1], ids[2], ids[0]]));
    assert!(!list.is_moving());
}

#[test]
fn test_move_without_change_emits_nothing() {
    let (mut list, _) = list_with(&["a", "b"]);
    press(&mut list, KeyCode::Char('m'));
    assert_eq!(press(&mut list, KeyCode::Char('m')), Action::None);
    assert!(!list.is_moving());
}

#[test]
fn test_move_cancel_restores_order() {
    let (mut list, ids) = list_with(&["a", "b"]);
    press(&mut list, KeyCode::Char('m'));
    press(&mut list, KeyCode::Char('j'));
    assert_eq!(list.rows[1].id, ids[0]);

    assert_eq!(press(&mut list, KeyCode::Esc), Action::None);
    assert!(!list.is_moving());
    assert_eq!(list.rows[0].id, ids[0]);
    assert!(list.rows.iter().all(|row| !row.grabbed));

    // The grabbed task stays selected, so the next action targets it
    assert_eq!(list.selected_row().map(|row| row.id), Some(ids[0]));
    assert_eq!(press(&mut list, KeyCode::Char('d')), Action::DeleteTask(ids[0]));
}

#[test]
fn test_removed_grabbed_task_ends_move() {
    let (mut list, _) = list_with(&["a", "b"]);
    press(&mut list, KeyCode::Char('m'));

    let remaining = vec![list.rows[1].clone()];
    list.update_data(remaining, 1.0);
    assert!(!list.is_moving());
}

#[test]
fn test_renders_rows() {
    let (mut list, _) = list_with(&["Buy milk", "Walk dog"]);
    list.set_icons(IconService::new(IconTheme::Ascii));
    list.rows[0].completed = true;

    let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
    terminal.draw(|f| list.render(f, f.area())).unwrap();
    let text = buffer_text(&terminal);

    assert!(text.contains("Buy milk"));
    assert!(text.contains("Walk dog"));
    assert!(text.contains("[X]"));
    assert!(text.contains("[ ]"));
}

#[test]
fn test_shrinking_row_loses_text() {
    let mut shrinking = row("abcdefghij");
    shrinking.visual = ItemVisual {
        opacity: 0.5,
        scale: 0.5,
    };
    let mut list = TaskListComponent::new();
    list.update_data(vec![shrinking], 1.0);

    let mut terminal = Terminal::new(TestBackend::new(40, 6)).unwrap();
    terminal.draw(|f| list.render(f, f.area())).unwrap();
    let text = buffer_text(&terminal);

    assert!(text.contains("abcde"));
    assert!(!text.contains("abcdef"));
}
