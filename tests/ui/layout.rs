use ratatui::layout::Rect;
use tasklist::ui::LayoutManager;

#[test]
fn test_main_layout_reserves_status_line() {
    let (content, status) = LayoutManager::main_layout(Rect::new(0, 0, 80, 24));
    assert_eq!(status, Rect::new(0, 23, 80, 1));
    assert_eq!(content, Rect::new(2, 1, 76, 21));
}

#[test]
fn test_main_layout_drops_padding_when_small() {
    let (content, _) = LayoutManager::main_layout(Rect::new(0, 0, 30, 8));
    assert_eq!(content, Rect::new(0, 0, 30, 7));
}

#[test]
fn test_popup_rests_at_bottom() {
    let area = Rect::new(0, 0, 80, 24);
    assert_eq!(LayoutManager::popup_rect(area, 7, 0.0, 0.0), Some(Rect::new(0, 17, 80, 7)));
}

#[test]
fn test_popup_slides_below_screen() {
    let area = Rect::new(0, 0, 80, 24);
    assert_eq!(LayoutManager::popup_rect(area, 7, 3.0, 0.0), Some(Rect::new(0, 20, 80, 4)));
    assert_eq!(LayoutManager::popup_rect(area, 7, 8.0, 0.0), None);
}

#[test]
fn test_popup_lifted_by_keyboard() {
    let area = Rect::new(0, 0, 80, 24);
    assert_eq!(LayoutManager::popup_rect(area, 7, 0.0, 5.0), Some(Rect::new(0, 12, 80, 7)));
    // Never above the top edge
    assert_eq!(LayoutManager::popup_rect(area, 7, 0.0, 50.0), Some(Rect::new(0, 0, 80, 7)));
}

#[test]
fn test_centered_rect_is_inside() {
    let area = Rect::new(0, 0, 100, 50);
    let centered = LayoutManager::centered_rect(80, 80, area);
    assert_eq!(centered.width, 80);
    assert_eq!(centered.height, 40);
    assert_eq!(centered.x, 10);
    assert_eq!(centered.y, 5);
}
