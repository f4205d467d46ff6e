use listkeeper::ui::LayoutManager;
use ratatui::layout::Rect;

#[test]
fn test_main_layout_reserves_status_line() {
    let area = Rect::new(0, 0, 80, 24);
    let areas = LayoutManager::main_layout(area);

    assert_eq!(areas.len(), 2);
    assert_eq!(areas[0].height, 23);
    assert_eq!(areas[1].height, 1);
    assert_eq!(areas[1].y, 23);
    assert_eq!(areas[1].width, 80);
}

#[test]
fn test_top_pane_layout_caps_sidebar_width() {
    let area = Rect::new(0, 0, 120, 24);
    let panes = LayoutManager::top_pane_layout(area, 30);
    assert_eq!(panes[0].width, 30);
    assert_eq!(panes[1].width, 90);

    // On narrow terminals the sidebar shrinks to a third of the width
    let narrow = Rect::new(0, 0, 60, 24);
    let panes = LayoutManager::top_pane_layout(narrow, 30);
    assert_eq!(panes[0].width, 20);
}

#[test]
fn test_centered_rect_is_centered() {
    let area = Rect::new(0, 0, 100, 50);
    let centered = LayoutManager::centered_rect(50, 50, area);

    assert_eq!(centered.width, 50);
    assert_eq!(centered.height, 25);
    assert_eq!(centered.x, 25);
    // Rounding may shift the vertical start by one line
    assert!(centered.y == 12 || centered.y == 13);
}

#[test]
fn test_centered_rect_lines_fixed_height() {
    let area = Rect::new(0, 0, 100, 50);
    let centered = LayoutManager::centered_rect_lines(60, 8, area);

    assert_eq!(centered.height, 8);
    assert_eq!(centered.width, 60);
    assert_eq!(centered.x, 20);
}
