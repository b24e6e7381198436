//! Slide-up popup holding the add-task draft

use crate::constants::{POPUP_HEIGHT, POPUP_PLACEHOLDER, POPUP_TITLE};
use crate::icons::IconService;
use crate::ui::components::dialogs::common::{create_button, create_dialog_block, create_input_paragraph};
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crate::utils::color::{self, fade};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Flex, Layout, Margin, Position, Rect},
    widgets::Clear,
    Frame,
};

pub struct AddTaskPopup {
    pub draft: String,
    /// Drawn at all; stays true while the slide-out plays
    pub rendered: bool,
    /// Rows below the resting position
    pub slide_offset: f64,
    /// Rows lifted to clear the keyboard
    pub keyboard_offset: f64,
    pub opacity: f64,
    pub icons: IconService,
    cancel_area: Rect,
    add_area: Rect,
}

impl Default for AddTaskPopup {
    fn default() -> Self {
        Self::new()
    }
}

impl AddTaskPopup {
    pub fn new() -> Self {
        Self {
            draft: String::new(),
            rendered: false,
            slide_offset: 0.0,
            keyboard_offset: 0.0,
            opacity: 1.0,
            icons: IconService::default(),
            cancel_area: Rect::default(),
            add_area: Rect::default(),
        }
    }

    pub fn set_icons(&mut self, icons: IconService) {
        self.icons = icons;
    }

    pub fn update_data(&mut self, draft: &str, rendered: bool, slide_offset: f64, keyboard_offset: f64, opacity: f64) {
        draft.clone_into(&mut self.draft);
        self.rendered = rendered;
        self.slide_offset = slide_offset;
        self.keyboard_offset = keyboard_offset;
        self.opacity = opacity;
        if !rendered {
            self.cancel_area = Rect::default();
            self.add_area = Rect::default();
        }
    }
}

impl Component for AddTaskPopup {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => Action::SubmitDraft,
            KeyCode::Esc => Action::CloseAddPopup,
            KeyCode::Backspace => {
                let mut draft = self.draft.clone();
                draft.pop();
                Action::UpdateDraft(draft)
            }
            KeyCode::Char(c) => Action::UpdateDraft(format!("{}{}", self.draft, c)),
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Action::None;
        }
        let position = Position::new(mouse.column, mouse.row);
        if self.cancel_area.contains(position) {
            Action::CloseAddPopup
        } else if self.add_area.contains(position) {
            Action::SubmitDraft
        } else {
            Action::None
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if !self.rendered {
            return;
        }
        let Some(area) = LayoutManager::popup_rect(rect, POPUP_HEIGHT, self.slide_offset, self.keyboard_offset) else {
            self.cancel_area = Rect::default();
            self.add_area = Rect::default();
            return;
        };

        f.render_widget(Clear, area);
        f.render_widget(create_dialog_block(POPUP_TITLE, fade(color::ACCENT, self.opacity)), area);

        let inner = area.inner(Margin {
            vertical: 1,
            horizontal: 2,
        });
        let [_, input_area, _, buttons_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        f.render_widget(create_input_paragraph(&self.draft, POPUP_PLACEHOLDER, self.opacity), input_area);

        let cancel_label = format!("{} Cancel", self.icons.cancel());
        let add_label = format!("{} Add", self.icons.add());
        let [cancel_area, add_area] = Layout::horizontal([Constraint::Length(14), Constraint::Length(14)])
            .flex(Flex::SpaceBetween)
            .areas(buttons_area);
        self.cancel_area = cancel_area;
        self.add_area = add_area;

        f.render_widget(create_button(&cancel_label, color::CANCEL, self.opacity), cancel_area);
        f.render_widget(create_button(&add_label, color::CONFIRM, self.opacity), add_area);
    }
}
