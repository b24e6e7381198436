use crate::constants::{EMPTY_LIST_TEXT, HEADER_HEIGHT, HEADER_WELCOME, TITLE_TASK_LIST};
use crate::icons::IconService;
use crate::task::TaskId;
use crate::ui::components::reorder::ReorderSession;
use crate::ui::components::swipe::SwipeTracker;
use crate::ui::components::task_list_item_component::{ListItem, RenderContext, TaskListItemType, TaskRow};
use crate::ui::core::{Action, Component};
use crate::utils::color::{self, fade};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListState, Paragraph},
    Frame,
};
use std::collections::HashSet;

/// Columns at the start of a row that toggle completion when tapped
const STATUS_HIT_COLUMNS: u16 = 6;

pub struct TaskListComponent {
    pub rows: Vec<TaskRow>,
    pub selected_index: usize,
    pub list_state: ListState,
    pub icons: IconService,
    /// Whole-screen opacity of the current frame
    pub opacity: f64,
    swipe: SwipeTracker,
    reorder: Option<ReorderSession>,
    tap: Option<(TaskId, u16)>,
    list_area: Rect,
    add_button_area: Rect,
}

impl Default for TaskListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskListComponent {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            selected_index: 0,
            list_state: ListState::default(),
            icons: IconService::default(),
            opacity: 1.0,
            swipe: SwipeTracker::new(),
            reorder: None,
            tap: None,
            list_area: Rect::default(),
            add_button_area: Rect::default(),
        }
    }

    pub fn set_icons(&mut self, icons: IconService) {
        self.icons = icons;
    }

    /// Replace the rows drawn next frame, keeping gestures in step with the list
    pub fn update_data(&mut self, rows: Vec<TaskRow>, opacity: f64) {
        let alive: HashSet<TaskId> = rows.iter().map(|row| row.id).collect();
        for row in &self.rows {
            if alive.contains(&row.id) {
                continue;
            }
            self.swipe.forget(row.id);
            if let Some(session) = self.reorder.as_mut() {
                if !session.forget(row.id) {
                    log::debug!("Reorder: grabbed task {} removed, ending move", row.id.short());
                    self.reorder = None;
                }
            }
        }

        self.rows = rows;
        self.opacity = opacity;
        self.apply_gestures();
        self.update_list_state();
    }

    /// Copy swipe and reorder state into the rows and order them for display
    fn apply_gestures(&mut self) {
        for row in &mut self.rows {
            row.swipe_offset = self.swipe.offset(row.id);
            row.delete_box = self.swipe.delete_box(row.id);
            row.grabbed = self.reorder.as_ref().is_some_and(|session| session.grabbed() == row.id);
        }

        if let Some(session) = &self.reorder {
            let order = session.order();
            self.rows
                .sort_by_key(|row| order.iter().position(|id| *id == row.id).unwrap_or(usize::MAX));
            self.selected_index = session.grabbed_index();
        }
    }

    fn update_list_state(&mut self) {
        if self.rows.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= self.rows.len() {
                self.selected_index = self.rows.len().saturating_sub(1);
            }
            self.list_state.select(Some(self.selected_index));
        }
    }

    pub fn selected_row(&self) -> Option<&TaskRow> {
        self.rows.get(self.selected_index)
    }

    pub fn is_moving(&self) -> bool {
        self.reorder.is_some()
    }

    /// A row is swiped open with its delete box showing
    pub fn has_open_swipe(&self) -> bool {
        self.swipe.open_row().is_some()
    }

    pub fn is_editing(&self) -> bool {
        self.rows.iter().any(|row| row.editing.is_some())
    }

    fn editing_row(&self) -> Option<&TaskRow> {
        self.rows.iter().find(|row| row.editing.is_some())
    }

    fn begin_move(&mut self) -> Action {
        let Some(grabbed) = self.selected_row().map(|row| row.id) else {
            return Action::None;
        };
        let order = self.rows.iter().map(|row| row.id).collect();
        self.reorder = ReorderSession::begin(order, grabbed);
        self.swipe.close();
        self.apply_gestures();
        Action::None
    }

    fn finish_move(&mut self) -> Action {
        let Some(session) = self.reorder.take() else {
            return Action::None;
        };
        self.apply_gestures();
        if !session.is_changed() {
            return Action::None;
        }
        match session.finish() {
            Ok(order) => Action::Reorder(order),
            Err(e) => {
                log::warn!("Reorder: dropping invalid order: {}", e);
                Action::None
            }
        }
    }

    fn cancel_move(&mut self) -> Action {
        if let Some(session) = self.reorder.take() {
            let grabbed = session.grabbed();
            let original = session.cancel();
            self.rows
                .sort_by_key(|row| original.iter().position(|id| *id == row.id).unwrap_or(usize::MAX));
            // Selection follows the grabbed task back to its old slot
            if let Some(index) = self.rows.iter().position(|row| row.id == grabbed) {
                self.selected_index = index;
            }
        }
        self.apply_gestures();
        self.update_list_state();
        Action::None
    }

    fn handle_edit_key(&self, key: KeyEvent, id: TaskId, draft: &str) -> Action {
        match key.code {
            KeyCode::Enter => Action::SaveEdit {
                id,
                text: draft.to_string(),
            },
            KeyCode::Esc => Action::CancelEdit,
            KeyCode::Backspace => {
                let mut draft = draft.to_string();
                draft.pop();
                Action::UpdateEditDraft(draft)
            }
            KeyCode::Char(c) => Action::UpdateEditDraft(format!("{}{}", draft, c)),
            _ => Action::None,
        }
    }

    fn handle_move_key(&mut self, key: KeyEvent) -> Action {
        let moved = match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.reorder.as_mut().is_some_and(ReorderSession::move_down),
            KeyCode::Char('k') | KeyCode::Up => self.reorder.as_mut().is_some_and(ReorderSession::move_up),
            KeyCode::Enter | KeyCode::Char('m') => return self.finish_move(),
            KeyCode::Esc => return self.cancel_move(),
            _ => false,
        };
        if moved {
            self.apply_gestures();
            self.update_list_state();
        }
        Action::None
    }

    /// Row index under a screen position, if any
    fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        if !self.list_area.contains(Position::new(column, row)) {
            return None;
        }
        let index = usize::from(row - self.list_area.y) + self.list_state.offset();
        (index < self.rows.len()).then_some(index)
    }

    fn hits_delete_box(&self, index: usize, column: u16) -> bool {
        let Some(row) = self.rows.get(index) else {
            return false;
        };
        if self.swipe.open_row() != Some(row.id) {
            return false;
        }
        let reveal = row.swipe_offset.unsigned_abs() as u16;
        column >= self.list_area.right().saturating_sub(reveal)
    }

    fn render_header(&mut self, f: &mut Frame, area: Rect) {
        let [welcome_area, title_area] = Layout::vertical([Constraint::Length(1), Constraint::Length(2)]).areas(area);

        let text_style = Style::default()
            .fg(fade(color::TEXT, self.opacity))
            .add_modifier(Modifier::BOLD);
        let add_icon = format!(" {} ", self.icons.add());
        let add_width = Span::raw(add_icon.as_str()).width() as u16;
        let [welcome_text, add_button] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(add_width)]).areas(welcome_area);
        self.add_button_area = add_button;

        f.render_widget(Paragraph::new(Span::styled(HEADER_WELCOME, text_style)), welcome_text);
        f.render_widget(
            Paragraph::new(Span::styled(
                add_icon,
                Style::default().fg(fade(color::ACCENT, self.opacity)).add_modifier(Modifier::BOLD),
            )),
            add_button,
        );
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(TITLE_TASK_LIST, text_style))).alignment(Alignment::Center),
            title_area,
        );
    }
}

impl Component for TaskListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if let Some(row) = self.editing_row() {
            let (id, draft) = (row.id, row.editing.clone().unwrap_or_default());
            return self.handle_edit_key(key, id, &draft);
        }
        if self.reorder.is_some() {
            return self.handle_move_key(key);
        }

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => Action::NextTask,
            KeyCode::Char('k') | KeyCode::Up => Action::PreviousTask,
            KeyCode::Char('a') | KeyCode::Char('+') => Action::OpenAddPopup,
            KeyCode::Char(' ') | KeyCode::Enter => match self.selected_row() {
                Some(row) => Action::ToggleComplete(row.id),
                None => Action::None,
            },
            KeyCode::Char('e') => match self.selected_row() {
                Some(row) => Action::BeginEdit {
                    id: row.id,
                    text: row.text.clone(),
                },
                None => Action::None,
            },
            KeyCode::Char('d') | KeyCode::Delete => {
                let target = self.swipe.open_row().or_else(|| self.selected_row().map(|row| row.id));
                match target {
                    Some(id) => {
                        self.swipe.close();
                        Action::DeleteTask(id)
                    }
                    None => Action::None,
                }
            }
            KeyCode::Char('m') => self.begin_move(),
            KeyCode::Esc if self.swipe.open_row().is_some() => {
                self.swipe.close();
                self.apply_gestures();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        let (column, row) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.add_button_area.contains(Position::new(column, row)) {
                    return Action::OpenAddPopup;
                }
                let Some(index) = self.row_at(column, row) else {
                    self.swipe.close();
                    self.apply_gestures();
                    return Action::None;
                };
                if self.hits_delete_box(index, column) {
                    let id = self.rows[index].id;
                    self.swipe.close();
                    return Action::DeleteTask(id);
                }
                if self.reorder.is_none() && !self.is_editing() {
                    let id = self.rows[index].id;
                    self.swipe.begin(id, column);
                    self.tap = Some((id, column));
                }
                Action::SelectTask(index)
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if self.reorder.is_some() {
                    if let Some(index) = self.row_at(column, row) {
                        if self.reorder.as_mut().is_some_and(|session| session.move_to(index)) {
                            self.apply_gestures();
                            self.update_list_state();
                        }
                    }
                    return Action::None;
                }
                if self.swipe.drag(column) {
                    if self.tap.is_some_and(|(_, origin)| origin != column) {
                        self.tap = None;
                    }
                    self.apply_gestures();
                }
                Action::None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.swipe.release();
                self.apply_gestures();
                match self.tap.take() {
                    Some((id, origin)) if origin < self.list_area.x + STATUS_HIT_COLUMNS => {
                        Action::ToggleComplete(id)
                    }
                    _ => Action::None,
                }
            }
            MouseEventKind::ScrollDown => Action::NextTask,
            MouseEventKind::ScrollUp => Action::PreviousTask,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextTask => {
                if !self.rows.is_empty() {
                    self.selected_index = (self.selected_index + 1).min(self.rows.len() - 1);
                    self.update_list_state();
                }
                Action::None
            }
            Action::PreviousTask => {
                self.selected_index = self.selected_index.saturating_sub(1);
                self.update_list_state();
                Action::None
            }
            Action::SelectTask(index) => {
                self.selected_index = index;
                self.update_list_state();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let [header_area, list_area] =
            Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)]).areas(rect);
        self.render_header(f, header_area);
        self.list_area = list_area;

        if self.rows.is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(
                EMPTY_LIST_TEXT,
                Style::default().fg(fade(color::TEXT_MUTED, self.opacity)),
            )))
            .alignment(Alignment::Center);
            let [_, message_area] = Layout::vertical([Constraint::Length(2), Constraint::Length(1)]).areas(list_area);
            f.render_widget(empty, message_area);
            return;
        }

        let ctx = RenderContext {
            width: list_area.width,
            opacity: self.opacity,
            icons: self.icons.clone(),
        };
        let items: Vec<_> = self
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| TaskListItemType::from_row(row.clone()).render(index == self.selected_index, &ctx))
            .collect();

        f.render_stateful_widget(List::new(items), list_area, &mut self.list_state);
    }
}
