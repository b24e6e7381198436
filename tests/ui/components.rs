#[path = "components/add_task_popup.rs"]
mod add_task_popup;

#[path = "components/dialog_component.rs"]
mod dialog_component;

#[path = "components/task_list_component.rs"]
mod task_list_component;

#[path = "components/task_list_item_component.rs"]
mod task_list_item_component;
