use tasklist::keyboard::KeyboardEvent;
use tasklist::task::TaskId;
use tasklist::ui::core::{Action, DialogType};

#[test]
fn test_actions_compare_by_payload() {
    let id = TaskId::new();
    assert_eq!(Action::ToggleComplete(id), Action::ToggleComplete(id));
    assert_ne!(Action::ToggleComplete(id), Action::DeleteTask(id));
    assert_ne!(
        Action::Keyboard(KeyboardEvent::Hidden),
        Action::Keyboard(KeyboardEvent::Shown { height: 3 })
    );
}

#[test]
fn test_dialog_types() {
    assert_ne!(DialogType::Help, DialogType::Logs);
    assert_eq!(Action::ShowDialog(DialogType::Logs), Action::ShowDialog(DialogType::Logs));
}
