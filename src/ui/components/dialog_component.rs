//! Modal overlays: help and the log viewer.

use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::components::dialogs::system_dialogs;
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, widgets::ScrollbarState, Frame};

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub icons: IconService,
    pub scroll_offset: usize,
    pub scrollbar_state: ScrollbarState,
    logger: Logger,
}

impl DialogComponent {
    pub fn new(logger: Logger) -> Self {
        Self {
            dialog_type: None,
            icons: IconService::default(),
            scroll_offset: 0,
            scrollbar_state: ScrollbarState::new(0),
            logger,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    pub fn set_icons(&mut self, icons: IconService) {
        self.icons = icons;
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(dialog_type) = self.dialog_type else {
            return Action::None;
        };
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Action::HideDialog,
            KeyCode::Char('?') if dialog_type == DialogType::Help => Action::HideDialog,
            KeyCode::Char('G') if dialog_type == DialogType::Logs => Action::HideDialog,
            KeyCode::Char('j') | KeyCode::Down => Action::DialogScrollDown,
            KeyCode::Char('k') | KeyCode::Up => Action::DialogScrollUp,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.dialog_type = Some(dialog_type);
                self.scroll_offset = 0;
                self.scrollbar_state = ScrollbarState::new(0);
                Action::None
            }
            Action::HideDialog => {
                self.dialog_type = None;
                Action::None
            }
            Action::DialogScrollDown => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                Action::None
            }
            Action::DialogScrollUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        match self.dialog_type {
            Some(DialogType::Help) => {
                system_dialogs::render_help_dialog(f, rect, &self.icons, self.scroll_offset, &mut self.scrollbar_state)
            }
            Some(DialogType::Logs) => {
                let logs = self.logger.get_logs();
                system_dialogs::render_logs_dialog(f, rect, &logs, self.scroll_offset, &mut self.scrollbar_state)
            }
            None => {}
        }
    }
}
