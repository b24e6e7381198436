use crate::animation::AnimationTimings;
use crate::config::Config;
use crate::controller::TaskListController;
use crate::icons::IconService;
use crate::keyboard::KeyboardWatcher;
use crate::logger::Logger;
use crate::ui::components::task_list_item_component::TaskRow;
use crate::ui::components::{AddTaskPopup, DialogComponent, StatusBar, StatusMode, TaskListComponent};
use crate::ui::core::{
    actions::{Action, DialogType},
    event_handler::EventType,
    Component,
};
use crate::ui::layout::LayoutManager;
use crate::utils::color;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::Block,
    Frame,
};
use std::time::Instant;

pub struct AppComponent {
    // Component composition
    task_list: TaskListComponent,
    popup: AddTaskPopup,
    dialog: DialogComponent,

    // Application state
    controller: TaskListController,
    keyboard: KeyboardWatcher,
    icons: IconService,

    // Services
    logger: Logger,

    // Simple UI state
    should_quit: bool,
    mouse_enabled: bool,
}

impl AppComponent {
    pub fn new(config: &Config, logger: Logger) -> Self {
        let timings = AnimationTimings::from_config(&config.animation);
        let icons = IconService::new(config.ui.icon_theme);

        let mut task_list = TaskListComponent::new();
        task_list.set_icons(icons.clone());
        let mut popup = AddTaskPopup::new();
        popup.set_icons(icons.clone());
        let mut dialog = DialogComponent::new(logger.clone());
        dialog.set_icons(icons.clone());

        let mut app = Self {
            task_list,
            popup,
            dialog,
            controller: TaskListController::new(timings),
            keyboard: KeyboardWatcher::new(0, 0),
            icons,
            logger,
            should_quit: false,
            mouse_enabled: config.ui.mouse_enabled,
        };
        app.logger.log("AppComponent: started with an empty task list".to_string());
        app.sync_component_data();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn controller(&self) -> &TaskListController {
        &self.controller
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Record the terminal size the keyboard watcher measures against
    pub fn set_terminal_size(&mut self, width: u16, height: u16) {
        self.keyboard = KeyboardWatcher::new(width, height);
    }

    /// Whether frames keep changing without input
    pub fn is_animating(&self) -> bool {
        self.controller.is_animating(Instant::now())
    }

    /// Rebuild component data from the controller
    fn sync_component_data(&mut self) {
        let now = Instant::now();
        let opacity = self.controller.mount_opacity(now);
        let editing = self.controller.editing().cloned();

        let rows = self
            .controller
            .tasks()
            .iter()
            .map(|task| TaskRow {
                id: task.id,
                text: task.text.clone(),
                completed: task.completed,
                visual: self.controller.item_visual(task.id, now),
                editing: editing
                    .as_ref()
                    .filter(|edit| edit.id == task.id)
                    .map(|edit| edit.draft_text.clone()),
                grabbed: false,
                swipe_offset: 0,
                delete_box: None,
            })
            .collect();
        self.task_list.update_data(rows, opacity);

        self.popup.update_data(
            self.controller.draft_text(),
            self.controller.is_popup_rendered(),
            self.controller.popup_offset(now),
            self.controller.keyboard_offset(now),
            opacity,
        );
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                self.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.logger.log("Global key: Ctrl+C - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Esc => Action::Quit,
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Char('i') => Action::CycleIconTheme,
            _ => Action::None,
        }
    }

    fn route_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return self.handle_global_key(key);
        }
        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }
        if self.controller.is_popup_visible() {
            return self.popup.handle_key_events(key);
        }

        // Editing and moving own every key; an open swipe row owns Esc
        let list_owns_keys = self.task_list.is_editing()
            || self.task_list.is_moving()
            || (key.code == KeyCode::Esc && self.task_list.has_open_swipe());
        let task_list_action = self.task_list.handle_key_events(key);
        if !matches!(task_list_action, Action::None) || list_owns_keys {
            return task_list_action;
        }
        self.handle_global_key(key)
    }

    /// Apply an action that reached the top of the component hierarchy
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::OpenAddPopup => {
                self.logger.log("Popup: opened".to_string());
                self.controller.open_add_popup();
                Action::None
            }
            Action::CloseAddPopup => {
                self.logger.log("Popup: closed, draft kept".to_string());
                self.controller.close_add_popup();
                Action::None
            }
            Action::UpdateDraft(text) => {
                self.controller.set_draft(text);
                Action::None
            }
            Action::SubmitDraft => {
                match self.controller.submit_draft() {
                    Some(id) => self.logger.log(format!("Task: added {}", id.short())),
                    None => self.logger.log("Task: ignored empty draft".to_string()),
                }
                Action::None
            }
            Action::ToggleComplete(id) => {
                if self.controller.toggle_complete(id) {
                    let state = self
                        .controller
                        .get(id)
                        .map_or("unknown", |task| if task.completed { "completed" } else { "pending" });
                    self.logger.log(format!("Task: {} marked {}", id.short(), state));
                }
                Action::None
            }
            Action::BeginEdit { id, text } => {
                if self.controller.begin_edit(id, text) {
                    self.logger.log(format!("Task: editing {}", id.short()));
                }
                Action::None
            }
            Action::UpdateEditDraft(text) => {
                self.controller.set_edit_draft(text);
                Action::None
            }
            Action::SaveEdit { id, text } => {
                if self.controller.save_edit(id, &text) {
                    self.logger.log(format!("Task: saved edit of {}", id.short()));
                }
                Action::None
            }
            Action::CancelEdit => {
                self.controller.cancel_edit();
                Action::None
            }
            Action::DeleteTask(id) => {
                if self.controller.delete(id) {
                    self.logger.log(format!("Delete: removing {}", id.short()));
                }
                Action::None
            }
            Action::Reorder(order) => {
                if self.controller.reorder(&order) {
                    self.logger.log(format!("Reorder: {} tasks reordered", order.len()));
                }
                Action::None
            }
            Action::Keyboard(event) => {
                self.controller.on_keyboard(event);
                Action::None
            }
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                self.task_list.set_icons(self.icons.clone());
                self.popup.set_icons(self.icons.clone());
                self.dialog.set_icons(self.icons.clone());
                self.logger
                    .log(format!("Icons: switched to {:?} theme", self.icons.theme()));
                Action::None
            }
            Action::Quit => {
                self.should_quit = true;
                Action::Quit
            }
            _ => action,
        }
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) => self.route_key(key),
            EventType::Mouse(mouse) => {
                if !self.mouse_enabled || self.dialog.is_visible() {
                    Action::None
                } else if self.controller.is_popup_visible() {
                    self.popup.handle_mouse_events(mouse)
                } else {
                    self.task_list.handle_mouse_events(mouse)
                }
            }
            EventType::Resize(width, height) => match self.keyboard.on_resize(width, height) {
                Some(event) => Action::Keyboard(event),
                None => Action::None,
            },
            EventType::Tick => {
                self.controller.advance(Instant::now());
                Action::None
            }
            EventType::Other => Action::None,
        };

        // Process action through component hierarchy
        let action = self.update(action);

        // Handle app-level actions
        self.handle_app_action(action);

        // Update component data after any changes
        self.sync_component_data();

        Ok(())
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // This shouldn't be called directly - use handle_event instead
        self.handle_global_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        let action = self.dialog.update(action);
        self.task_list.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.sync_component_data();
        let opacity = self.controller.mount_opacity(Instant::now());

        f.render_widget(Block::default().style(Style::default().bg(color::BACKGROUND)), rect);

        let (content, status) = LayoutManager::main_layout(rect);
        self.task_list.render(f, content);

        let mode = if self.controller.is_popup_visible() {
            StatusMode::AddPopup
        } else if self.task_list.is_editing() {
            StatusMode::Editing
        } else if self.task_list.is_moving() {
            StatusMode::Moving
        } else {
            StatusMode::Normal
        };
        StatusBar::render(f, status, mode, opacity);

        // The popup slides over the list and the status line
        self.popup.render(f, rect);

        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
