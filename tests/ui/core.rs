#[path = "core/actions.rs"]
mod actions;
