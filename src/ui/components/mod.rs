//! Reusable UI components

pub mod add_task_popup;
pub mod dialog_component;
pub mod dialogs;
pub mod reorder;
pub mod status_bar;
pub mod swipe;
pub mod task_list_component;
pub mod task_list_item_component;

// Component exports
pub use add_task_popup::AddTaskPopup;
pub use dialog_component::DialogComponent;
pub use status_bar::{StatusBar, StatusMode};
pub use task_list_component::TaskListComponent;
