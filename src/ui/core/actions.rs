use crate::keyboard::KeyboardEvent;
use crate::task::TaskId;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    NextTask,
    PreviousTask,
    SelectTask(usize),

    // Add popup
    OpenAddPopup,
    CloseAddPopup,
    UpdateDraft(String),
    SubmitDraft,

    // Task operations
    ToggleComplete(TaskId),
    BeginEdit { id: TaskId, text: String },
    UpdateEditDraft(String),
    SaveEdit { id: TaskId, text: String },
    CancelEdit,
    DeleteTask(TaskId),
    Reorder(Vec<TaskId>),

    // Platform notifications
    Keyboard(KeyboardEvent),

    // UI operations
    ShowDialog(DialogType),
    HideDialog,
    DialogScrollUp,
    DialogScrollDown,
    CycleIconTheme,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogType {
    Help,
    Logs,
}
