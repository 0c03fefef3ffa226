// Chunk: docs/chunks/selector_rendering - Box layout and hit-testing
//!
//! Integration tests for what gets drawn where, and for pointer input that
//! relies on the last drawing.
//!
//! The recording canvas measures every char as one cell, so with the
//! default settings the horizontal prompt box spans x = 0..24 (one cell of
//! padding on each side of "$ " plus twenty glyphs of query space).

mod common;

use common::{lines, Op, Session};
use lite_menu::config::RawConfig;
use lite_menu::geometry::Rect;
use lite_menu::layout::Orientation;
use lite_menu::style::{Rgba, Role, Sides};
use lite_menu::{Config, Hit, LayoutSettings, LogicalEvent, LoopState, MenuOptions, MouseButton, ScrollDirection};

fn click(x: i32, y: i32) -> LogicalEvent {
    LogicalEvent::Click {
        position: (x, y),
        button: MouseButton::Left,
    }
}

fn vertical() -> LayoutSettings {
    LayoutSettings {
        orientation: Orientation::Vertical,
        ..LayoutSettings::default()
    }
}

// =============================================================================
// Horizontal layout
// =============================================================================

#[test]
fn test_horizontal_boxes_follow_the_prompt() {
    let set = lines(&["apple", "banana", "cherry"]);
    let session = Session::horizontal(&set, MenuOptions::default());
    let plan = session.dispatcher.plan();

    assert_eq!(plan.offset(0), Some(24));
    assert_eq!(plan.offset(1), Some(31));
    assert_eq!(plan.offset(2), Some(39));

    assert_eq!(session.canvas.find_text("$ ").map(|(x, y, _)| (x, y)), Some((1, 0)));
    assert_eq!(session.canvas.find_text("apple").map(|(x, _, _)| x), Some(25));
    assert_eq!(session.canvas.find_text("banana").map(|(x, _, _)| x), Some(32));
}

#[test]
fn test_background_is_painted_first() {
    let set = lines(&["apple"]);
    let session = Session::horizontal(&set, MenuOptions::default());
    let completion_bg = LayoutSettings::default().styles[Role::Completion].background;
    assert_eq!(session.canvas.ops.first(), Some(&Op::Fill(Rect::new(0, 0, 80, 1), completion_bg)));
}

#[test]
fn test_selected_match_uses_highlight_colors() {
    let set = lines(&["apple", "banana"]);
    let mut session = Session::horizontal(&set, MenuOptions::default());
    session.send(LogicalEvent::Next);
    session.send(LogicalEvent::Next);

    // The query now reads "banana" too; look only past the prompt box.
    let color_of = |text: &str| {
        session.canvas.ops.iter().find_map(|op| match op {
            Op::Text(x, _, drawn, color) if drawn == text && *x >= 24 => Some(*color),
            _ => None,
        })
    };
    let styles = LayoutSettings::default().styles;
    assert_eq!(color_of("banana"), Some(styles[Role::CompletionHighlighted].foreground));
    assert_eq!(color_of("apple"), Some(styles[Role::Completion].foreground));
}

#[test]
fn test_matches_past_the_right_edge_are_not_drawn() {
    let set = lines(&["apple", "banana", "cherry", "date"]);
    let session = Session::new(&set, LayoutSettings::default(), (40, 1), MenuOptions::default());

    let visible: Vec<usize> = session.dispatcher.plan().visible().collect();
    assert_eq!(visible, vec![0, 1, 2]);
    assert!(session.canvas.find_text("date").is_none());
}

#[test]
fn test_long_query_shows_its_tail() {
    let set = lines(&["x"]);
    let settings = LayoutSettings {
        prompt_width: 4,
        ..LayoutSettings::default()
    };
    let mut session = Session::new(&set, settings, (80, 1), MenuOptions::default());
    session.type_str("abcdefg");

    assert!(session.canvas.texts().contains(&"defg"));
    assert_eq!(session.dispatcher.query(), "abcdefg");
}

#[test]
fn test_window_border_is_painted_last() {
    let set = lines(&["apple"]);
    let red = Rgba::opaque(0xff, 0, 0);
    let settings = LayoutSettings {
        border: Sides::all(1),
        border_color: Sides::all(red),
        ..LayoutSettings::default()
    };
    let session = Session::new(&set, settings, (80, 3), MenuOptions::default());

    assert_eq!(session.dispatcher.plan().offset(0), Some(25));
    let tail = &session.canvas.ops[session.canvas.ops.len() - 4..];
    assert!(tail.iter().all(|op| matches!(op, Op::Fill(_, color) if *color == red)));
}

// =============================================================================
// Vertical layout
// =============================================================================

#[test]
fn test_vertical_rows_fill_the_window() {
    let set = lines(&["a", "b", "c", "d", "e", "f"]);
    let session = Session::new(&set, vertical(), (40, 5), MenuOptions::default());
    let plan = session.dispatcher.plan();

    assert_eq!(plan.visible().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    assert_eq!(plan.offset(0), Some(1));
    assert_eq!(plan.offset(3), Some(4));
    assert_eq!(plan.hit_test_point(10, 3), Hit::Item(2));
    assert_eq!(plan.hit_test_point(10, 0), Hit::Cancel);
}

#[test]
fn test_wheel_scrolls_the_view() {
    let set = lines(&["a", "b", "c", "d", "e", "f"]);
    let mut session = Session::new(&set, vertical(), (40, 5), MenuOptions::default());

    session.send(LogicalEvent::Scroll(ScrollDirection::Down));
    assert_eq!(session.dispatcher.filter().scroll_offset(), 1);
    assert_eq!(session.dispatcher.plan().offset(0), None);
    assert_eq!(session.dispatcher.plan().offset(1), Some(1));
    assert_eq!(session.dispatcher.filter().selected(), None);

    for _ in 0..10 {
        session.send(LogicalEvent::Scroll(ScrollDirection::Down));
    }
    assert_eq!(session.dispatcher.filter().scroll_offset(), 5);

    for _ in 0..10 {
        session.send(LogicalEvent::Scroll(ScrollDirection::Up));
    }
    assert_eq!(session.dispatcher.filter().scroll_offset(), 0);
}

#[test]
fn test_cycling_scrolls_selection_into_view() {
    let set = lines(&["a", "b", "c", "d", "e", "f"]);
    let mut session = Session::new(&set, vertical(), (40, 5), MenuOptions::default());

    session.send(LogicalEvent::Prev);
    assert_eq!(session.dispatcher.filter().selected(), Some(5));
    assert_eq!(session.dispatcher.plan().offset(5), Some(1));
}

// =============================================================================
// Clicks
// =============================================================================

#[test]
fn test_click_on_a_match_accepts_it() {
    let set = lines(&["apple", "banana", "cherry"]);
    let mut session = Session::horizontal(&set, MenuOptions::default());
    assert_eq!(session.send(click(33, 0)), Some(LoopState::Accepted("banana".to_string())));
}

#[test]
fn test_click_after_wheel_scroll_maps_to_visible_matches() {
    let set = lines(&["apple", "banana", "cherry"]);
    let mut session = Session::horizontal(&set, MenuOptions::default());
    session.send(LogicalEvent::Scroll(ScrollDirection::Down));

    // "banana" now starts right after the prompt box.
    let plan = session.dispatcher.plan();
    assert_eq!(plan.offset(0), None);
    assert_eq!(plan.offset(1), Some(24));
    assert_eq!(plan.offset(2), Some(32));
    assert_eq!(plan.hit_test_point(24, 0), Hit::Item(1));
    assert_eq!(plan.hit_test_point(31, 0), Hit::Item(1));
    assert_eq!(plan.hit_test_point(32, 0), Hit::Item(2));

    assert_eq!(session.send(click(24, 0)), Some(LoopState::Accepted("banana".to_string())));
}

#[test]
fn test_click_before_first_visible_match_after_scroll_cancels() {
    let set = lines(&["apple", "banana", "cherry"]);
    let mut session = Session::horizontal(&set, MenuOptions::default());
    session.send(LogicalEvent::Scroll(ScrollDirection::Down));

    assert_eq!(session.dispatcher.plan().hit_test_point(23, 0), Hit::Cancel);
    assert_eq!(session.send(click(23, 0)), Some(LoopState::Rejected));
    assert!(session.emitted.is_empty());
}

#[test]
fn test_click_on_the_prompt_cancels() {
    let set = lines(&["apple"]);
    let mut session = Session::horizontal(&set, MenuOptions::default());
    assert_eq!(session.send(click(5, 0)), Some(LoopState::Rejected));
}

#[test]
fn test_click_with_no_matches_cancels() {
    let set = lines(&["apple"]);
    let mut session = Session::horizontal(&set, MenuOptions::default());
    session.type_str("zzz");
    assert_eq!(session.send(click(60, 0)), Some(LoopState::Rejected));
}

#[test]
fn test_click_in_vertical_layout_uses_rows() {
    let set = lines(&["a", "b", "c"]);
    let mut session = Session::new(&set, vertical(), (40, 5), MenuOptions::default());
    assert_eq!(session.send(click(30, 2)), Some(LoopState::Accepted("b".to_string())));
}

#[test]
fn test_right_click_keeps_the_menu_open_in_multi_select() {
    let set = lines(&["apple", "banana"]);
    let options = MenuOptions {
        multiple_select: true,
        ..MenuOptions::default()
    };
    let mut session = Session::horizontal(&set, options);
    let right_click = |x| LogicalEvent::Click {
        position: (x, 0),
        button: MouseButton::Right,
    };

    assert_eq!(
        session.send(right_click(25)),
        Some(LoopState::AcceptedContinue("apple".to_string()))
    );
    assert_eq!(
        session.send(right_click(32)),
        Some(LoopState::AcceptedContinue("banana".to_string()))
    );
    assert_eq!(session.send(click(32, 0)), Some(LoopState::Accepted("banana".to_string())));
    assert_eq!(session.emitted, vec!["apple", "banana", "banana"]);
}

#[test]
fn test_middle_click_is_ignored() {
    let set = lines(&["apple"]);
    let mut session = Session::horizontal(&set, MenuOptions::default());
    let middle = LogicalEvent::Click {
        position: (25, 0),
        button: MouseButton::Middle,
    };
    assert_eq!(session.send(middle), None);
}

#[test]
fn test_resize_reflows_the_matches() {
    let set = lines(&["apple", "banana"]);
    let mut session = Session::horizontal(&set, MenuOptions::default());
    assert_eq!(session.dispatcher.plan().visible().count(), 2);

    session.send(LogicalEvent::Resize { width: 30, height: 1 });
    assert_eq!(session.dispatcher.layout().size(), (30, 1));
    assert_eq!(session.dispatcher.plan().visible().collect::<Vec<_>>(), vec![0]);
}

#[test]
fn test_oversized_configured_padding_still_draws() {
    let mut raw = RawConfig::default();
    raw.style.completion.padding = Some(i32::MAX.to_string());
    raw.window.border = Some(i32::MAX.to_string());
    let config = Config::resolve(&raw).unwrap();

    let set = lines(&["apple", "banana"]);
    let mut session = Session::new(&set, config.layout, (80, 1), MenuOptions::default());
    session.send(LogicalEvent::Next);

    assert_eq!(session.dispatcher.plan().visible().count(), 0);
    assert_eq!(session.send(click(40, 0)), Some(LoopState::Rejected));
}
