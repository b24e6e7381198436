use crate::animation::ItemVisual;
use crate::constants::EDIT_PLACEHOLDER;
use crate::icons::IconService;
use crate::task::TaskId;
use crate::ui::components::swipe::DeleteBoxVisual;
use crate::utils::color::{self, fade};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::ListItem as RatatuiListItem,
};

/// Shared inputs for drawing one frame of rows
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Usable row width in columns
    pub width: u16,
    /// Whole-screen opacity (mount fade-in)
    pub opacity: f64,
    pub icons: IconService,
}

/// Trait for items that can be displayed in the task list
pub trait ListItem {
    /// Render this item as a ratatui ListItem
    fn render(&self, selected: bool, ctx: &RenderContext) -> RatatuiListItem<'static>;
}

/// Everything needed to draw one task at one moment
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRow {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    pub visual: ItemVisual,
    /// Pending text when the row is in inline edit
    pub editing: Option<String>,
    /// Held by the drag-reorder gesture
    pub grabbed: bool,
    /// Horizontal swipe displacement in columns (zero or negative)
    pub swipe_offset: i32,
    pub delete_box: Option<DeleteBoxVisual>,
}

/// Enum representing the two ways a row can be drawn
#[derive(Debug, Clone)]
pub enum TaskListItemType {
    Task(TaskItem),
    Editing(EditItem),
}

impl TaskListItemType {
    pub fn from_row(row: TaskRow) -> Self {
        if row.editing.is_some() {
            Self::Editing(EditItem { row })
        } else {
            Self::Task(TaskItem { row })
        }
    }
}

impl ListItem for TaskListItemType {
    fn render(&self, selected: bool, ctx: &RenderContext) -> RatatuiListItem<'static> {
        match self {
            Self::Task(item) => item.render(selected, ctx),
            Self::Editing(item) => item.render(selected, ctx),
        }
    }
}

/// Text cut down to `scale` of its characters, for the shrink transition
fn shrink_text(text: &str, scale: f64) -> String {
    if scale >= 1.0 {
        return text.to_string();
    }
    let count = text.chars().count();
    let keep = (count as f64 * scale.max(0.0)).ceil() as usize;
    text.chars().take(keep).collect()
}

fn line_width(spans: &[Span<'_>]) -> usize {
    spans.iter().map(Span::width).sum()
}

/// Longest prefix of `text` that fits in `max_width` columns
fn fit_width(text: &str, max_width: usize) -> String {
    let mut used = 0;
    let mut fitted = String::new();
    for c in text.chars() {
        let mut buf = [0; 4];
        let width = Span::raw(&*c.encode_utf8(&mut buf)).width();
        if used + width > max_width {
            break;
        }
        used += width;
        fitted.push(c);
    }
    fitted
}

/// A task in its normal, read-only state
#[derive(Debug, Clone)]
pub struct TaskItem {
    pub row: TaskRow,
}

impl TaskItem {
    fn delete_box_spans(&self, columns: usize, ctx: &RenderContext) -> Vec<Span<'static>> {
        let Some(visual) = self.row.delete_box else {
            return Vec::new();
        };
        let style = Style::default()
            .fg(fade(color::TEXT, visual.opacity * ctx.opacity))
            .bg(fade(color::DELETE, visual.opacity * ctx.opacity));

        // The icon only shows once the box has grown past half size
        let icon = if visual.scale >= 0.5 { ctx.icons.delete() } else { "" };
        let icon_width = Span::raw(icon).width();
        if icon_width > columns {
            return vec![Span::styled(" ".repeat(columns), style)];
        }
        let left = (columns - icon_width) / 2;
        let right = columns - icon_width - left;
        vec![
            Span::styled(" ".repeat(left), style),
            Span::styled(icon, style.add_modifier(Modifier::BOLD)),
            Span::styled(" ".repeat(right), style),
        ]
    }
}

impl ListItem for TaskItem {
    fn render(&self, selected: bool, ctx: &RenderContext) -> RatatuiListItem<'static> {
        let row = &self.row;
        let opacity = row.visual.opacity * ctx.opacity;

        let (fg, bg) = if row.completed {
            (color::COMPLETED_TEXT, color::COMPLETED_ROW)
        } else if selected || row.grabbed {
            (color::TEXT, color::SELECTION)
        } else {
            (color::TEXT, color::BACKGROUND)
        };
        let mut base = Style::default().fg(fade(fg, opacity)).bg(fade(bg, opacity));
        if row.grabbed {
            base = base.add_modifier(Modifier::BOLD);
        }

        let mut text_style = base;
        if row.completed {
            text_style = text_style.add_modifier(Modifier::CROSSED_OUT);
        }

        let marker = if row.grabbed {
            ctx.icons.grab()
        } else if selected {
            "›"
        } else {
            " "
        };

        // Swiped rows give up their right edge to the delete box
        let reveal = row.swipe_offset.unsigned_abs() as usize;
        let width = ctx.width as usize;
        let content_width = width.saturating_sub(reveal);

        let mut spans = vec![
            Span::styled(format!("{} ", marker), base),
            Span::styled(format!("{} ", ctx.icons.task_status(row.completed)), base),
        ];
        let edit_icon = Span::styled(
            format!(" {} ", ctx.icons.edit()),
            Style::default().fg(fade(color::ACCENT, opacity)).bg(fade(bg, opacity)),
        );
        let room = content_width.saturating_sub(line_width(&spans) + edit_icon.width());
        let text = fit_width(&shrink_text(&row.text, row.visual.scale), room);
        spans.push(Span::styled(text, text_style));

        let used = line_width(&spans) + edit_icon.width();
        if used <= content_width {
            spans.push(Span::styled(" ".repeat(content_width - used), base));
            spans.push(edit_icon);
        } else if line_width(&spans) < content_width {
            spans.push(Span::styled(" ".repeat(content_width - line_width(&spans)), base));
        }

        if reveal > 0 {
            spans.extend(self.delete_box_spans(reveal.min(width), ctx));
        }

        RatatuiListItem::new(Line::from(spans))
    }
}

/// A task in inline edit mode
#[derive(Debug, Clone)]
pub struct EditItem {
    pub row: TaskRow,
}

impl ListItem for EditItem {
    fn render(&self, _selected: bool, ctx: &RenderContext) -> RatatuiListItem<'static> {
        let opacity = self.row.visual.opacity * ctx.opacity;
        let draft = self.row.editing.clone().unwrap_or_default();

        let field_style = Style::default()
            .fg(fade(color::TEXT, opacity))
            .bg(fade(color::SELECTION, opacity));
        let input = if draft.is_empty() {
            Span::styled(
                format!("{}█", EDIT_PLACEHOLDER),
                field_style.fg(fade(color::TEXT_PLACEHOLDER, opacity)),
            )
        } else {
            Span::styled(format!("{}█", draft), field_style)
        };

        let spans = vec![
            Span::styled(format!("{} ", ctx.icons.edit()), Style::default().fg(fade(color::ACCENT, opacity))),
            input,
            Span::raw("  "),
            Span::styled(
                format!("{} Enter", ctx.icons.save()),
                Style::default().fg(fade(color::CONFIRM, opacity)),
            ),
            Span::raw("  "),
            Span::styled(
                format!("{} Esc", ctx.icons.cancel()),
                Style::default().fg(fade(color::CANCEL, opacity)),
            ),
        ];

        RatatuiListItem::new(Line::from(spans))
    }
}
