use ratatui::backend::TestBackend;
use ratatui::Terminal;
use scrollfocus::components::{ScrollOptions, ScrollRequest};
use scrollfocus::keymap::{Action, Keymap};
use scrollfocus::screens::{ColumnId, FocusListsScreen, RenderContext, Screen};
use scrollfocus::styles::{ColorScheme, ScreenStyles};
use scrollfocus::{demo_items, ITEM_COUNT};

fn render(screen: &mut FocusListsScreen) {
    let styles = ScreenStyles::for_scheme(ColorScheme::Dark);
    let keymap = Keymap::default();
    let mut terminal = Terminal::new(TestBackend::new(150, 44)).unwrap();
    terminal
        .draw(|frame| {
            let ctx = RenderContext::new(&styles, &keymap);
            screen.render(frame, frame.area(), &ctx).unwrap();
        })
        .unwrap();
}

fn only_focused_row(screen: &FocusListsScreen, column: ColumnId, row: usize) {
    assert!(screen.is_row_focused(column, row));
    assert_eq!(screen.focused_row_count(), 1);
}

#[test]
fn test_focus_in_eager_column_is_exclusive() {
    let mut screen = FocusListsScreen::new(demo_items());
    for row in [0, 13, 99, 42] {
        screen.focus_row(ColumnId::Eager, row);
        only_focused_row(&screen, ColumnId::Eager, row);
    }
    assert_eq!(screen.scroller().request_count(), 0);
}

#[test]
fn test_focus_in_virtualized_column_is_exclusive() {
    let mut screen = FocusListsScreen::new(demo_items());
    render(&mut screen);

    screen.focus_row(ColumnId::Virtualized, 25);
    only_focused_row(&screen, ColumnId::Virtualized, 25);

    render(&mut screen);
    assert!(screen.scroll_position(ColumnId::Virtualized) > 0);
    only_focused_row(&screen, ColumnId::Virtualized, 25);
    assert_eq!(screen.scroller().request_count(), 0);
}

#[test]
fn test_focus_in_manual_column_requests_one_centered_scroll() {
    let mut screen = FocusListsScreen::new(demo_items());
    render(&mut screen);

    screen.focus_row(ColumnId::ManualScroll, 3);
    assert_eq!(screen.scroller().request_count(), 1);
    assert_eq!(
        screen.scroller().last_request(),
        Some(ScrollRequest {
            index: 3,
            options: ScrollOptions {
                animated: true,
                view_position: 0.5,
            },
        })
    );
    only_focused_row(&screen, ColumnId::ManualScroll, 3);

    screen.handle_action(Action::MoveDown);
    assert_eq!(screen.scroller().request_count(), 2);
    assert_eq!(screen.scroller().last_request().map(|r| r.index), Some(4));
}

#[test]
fn test_refocusing_same_row_does_not_rescroll() {
    let mut screen = FocusListsScreen::new(demo_items());
    screen.focus_row(ColumnId::ManualScroll, 10);
    screen.focus_row(ColumnId::ManualScroll, 10);
    assert_eq!(screen.scroller().request_count(), 1);
}

#[test]
fn test_manual_column_animates_toward_centered_offset() {
    let mut screen = FocusListsScreen::new(demo_items());
    render(&mut screen);

    screen.focus_row(ColumnId::ManualScroll, 50);
    let target = screen.scroller().target();
    assert!(target > 0);
    assert!(screen.scroller().is_animating());

    let mut ticks = 0;
    while screen.on_tick() {
        ticks += 1;
    }
    assert_eq!(ticks, target);

    render(&mut screen);
    assert_eq!(screen.scroll_position(ColumnId::ManualScroll), target);
    assert!(screen.is_row_focused(ColumnId::ManualScroll, 50));
}

#[test]
fn test_blur_only_affects_blurred_row() {
    let mut screen = FocusListsScreen::new(demo_items());
    screen.focus_row(ColumnId::Virtualized, 5);
    screen.handle_action(Action::MoveLeft);

    assert!(!screen.is_row_focused(ColumnId::Virtualized, 5));
    only_focused_row(&screen, ColumnId::Eager, 0);

    screen.clear_focus();
    assert_eq!(screen.focused_row_count(), 0);
    assert_eq!(screen.focused(), None);
}

#[test]
fn test_vertical_moves_clamp_at_list_edges() {
    let mut screen = FocusListsScreen::new(demo_items());
    screen.handle_action(Action::MoveUp);
    only_focused_row(&screen, ColumnId::Eager, 0);

    screen.focus_row(ColumnId::Eager, ITEM_COUNT + 20);
    only_focused_row(&screen, ColumnId::Eager, ITEM_COUNT - 1);

    screen.handle_action(Action::MoveDown);
    only_focused_row(&screen, ColumnId::Eager, ITEM_COUNT - 1);
}

#[test]
fn test_tab_cycles_through_columns() {
    let mut screen = FocusListsScreen::new(demo_items());
    let mut visited = Vec::new();
    for _ in 0..3 {
        screen.handle_action(Action::NextColumn);
        visited.push(screen.focused().unwrap().column);
    }
    assert_eq!(
        visited,
        vec![ColumnId::Virtualized, ColumnId::ManualScroll, ColumnId::Eager]
    );

    screen.handle_action(Action::PrevColumn);
    assert_eq!(screen.focused().unwrap().column, ColumnId::ManualScroll);
}

#[test]
fn test_virtualized_columns_mount_only_a_window() {
    let mut screen = FocusListsScreen::new(demo_items());
    render(&mut screen);
    screen.focus_row(ColumnId::Virtualized, 1);
    screen.focus_row(ColumnId::Virtualized, 90);
    render(&mut screen);

    // The list scrolled to row 90; it stays mounted and keeps its focus
    assert!(screen.scroll_position(ColumnId::Virtualized) > 80);
    only_focused_row(&screen, ColumnId::Virtualized, 90);
}
