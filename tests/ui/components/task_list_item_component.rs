use ratatui::{backend::TestBackend, style::Color, widgets::List, Terminal};
use tasklist::animation::ItemVisual;
use tasklist::icons::IconService;
use tasklist::task::TaskId;
use tasklist::ui::components::swipe::DeleteBoxVisual;
use tasklist::ui::components::task_list_item_component::{ListItem, RenderContext, TaskListItemType, TaskRow};
use tasklist::utils::color;

const WIDTH: u16 = 30;

fn swiped_row(text: &str) -> TaskRow {
    TaskRow {
        id: TaskId::new(),
        text: text.to_string(),
        completed: false,
        visual: ItemVisual::default(),
        editing: None,
        grabbed: false,
        swipe_offset: -10,
        delete_box: Some(DeleteBoxVisual {
            scale: 1.0,
            opacity: 1.0,
        }),
    }
}

/// Background of every cell of a single drawn row
fn row_backgrounds(row: TaskRow) -> Vec<Color> {
    let ctx = RenderContext {
        width: WIDTH,
        opacity: 1.0,
        icons: IconService::default(),
    };
    let item = TaskListItemType::from_row(row).render(false, &ctx);

    let mut terminal = Terminal::new(TestBackend::new(WIDTH, 1)).unwrap();
    terminal
        .draw(|f| f.render_widget(List::new(vec![item]), f.area()))
        .unwrap();
    let buffer = terminal.backend().buffer();
    (0..WIDTH).map(|x| buffer[(x, 0)].bg).collect()
}

#[test]
fn test_delete_box_shown_for_short_text() {
    let backgrounds = row_backgrounds(swiped_row("Buy milk"));
    assert!(backgrounds[20..].iter().all(|bg| *bg == color::DELETE));
    assert!(backgrounds[..20].iter().all(|bg| *bg != color::DELETE));
}

#[test]
fn test_delete_box_shown_for_long_text() {
    let backgrounds = row_backgrounds(swiped_row("Call the plumber about the kitchen sink leak"));
    assert!(backgrounds[20..].iter().all(|bg| *bg == color::DELETE));
    assert!(backgrounds[..20].iter().all(|bg| *bg != color::DELETE));
}

#[test]
fn test_long_text_is_cut_to_fit() {
    let mut row = swiped_row("Call the plumber about the kitchen sink leak");
    row.swipe_offset = 0;
    row.delete_box = None;
    let ctx = RenderContext {
        width: WIDTH,
        opacity: 1.0,
        icons: IconService::default(),
    };
    let item = TaskListItemType::from_row(row).render(false, &ctx);

    let mut terminal = Terminal::new(TestBackend::new(WIDTH, 1)).unwrap();
    terminal
        .draw(|f| f.render_widget(List::new(vec![item]), f.area()))
        .unwrap();
    let text: String = terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect();

    // Edit icon still sits at the right edge
    assert!(text.contains("Call the plumber"));
    assert!(text.trim_end().ends_with('✎'));
}
