// Chunk: docs/chunks/selector_widget - Type-to-filter selection menu
//!
//! Integration tests for typing, cycling and confirming through the
//! dispatcher, the way a user drives the menu.

mod common;

use common::{lines, Session};
use lite_menu::filter::contains_ignore_case;
use lite_menu::{CandidateSet, LogicalEvent, LoopState, MenuOptions};

fn first_selected() -> MenuOptions {
    MenuOptions {
        first_selected: true,
        ..MenuOptions::default()
    }
}

// =============================================================================
// Matching
// =============================================================================

#[test]
fn test_every_match_contains_the_query() {
    let set = lines(&["Makefile", "main.rs", "README.md", "lib.rs", "MAINTAINERS"]);
    let mut session = Session::horizontal(&set, MenuOptions::default());

    for query in ["", "m", "ma", "mai", "main", "RS", "zzz"] {
        session.send(LogicalEvent::ClearLine);
        session.type_str(query);

        let filter = session.dispatcher.filter();
        let expected: Vec<usize> = set
            .iter()
            .enumerate()
            .filter(|(_, c)| contains_ignore_case(c.display(), query))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(filter.matches(), expected.as_slice(), "query {query:?}");
        assert!(filter.matches().windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn test_refilter_is_idempotent() {
    let set = lines(&["alpha", "beta", "gamma", "delta"]);
    let mut session = Session::horizontal(&set, MenuOptions::default());
    session.type_str("ta");
    let before = session.dispatcher.filter().matches().to_vec();

    // Typing then erasing a character lands on the same query.
    session.send(LogicalEvent::Char('x'));
    session.send(LogicalEvent::Backspace);

    assert_eq!(session.dispatcher.query(), "ta");
    assert_eq!(session.dispatcher.filter().matches(), before.as_slice());
    assert_eq!(before, vec![1, 3]);
}

#[test]
fn test_delete_word_widens_matches() {
    let set = lines(&["git status", "git stash", "cargo test"]);
    let mut session = Session::horizontal(&set, MenuOptions::default());
    session.type_str("git sta");
    assert_eq!(session.dispatcher.filter().match_count(), 2);

    session.send(LogicalEvent::DeleteWord);
    assert_eq!(session.dispatcher.query(), "git");
    assert_eq!(session.dispatcher.filter().match_count(), 2);

    session.send(LogicalEvent::DeleteWord);
    assert_eq!(session.dispatcher.query(), "");
    assert_eq!(session.dispatcher.filter().match_count(), 3);
}

#[test]
fn test_non_ascii_query_matches_case_insensitively() {
    let set = lines(&["Ärger", "über", "Zürich"]);
    let mut session = Session::horizontal(&set, MenuOptions::default());
    session.type_str("ÄR");
    assert_eq!(session.dispatcher.filter().matches(), &[0]);
}

// =============================================================================
// Selection
// =============================================================================

#[test]
fn test_cycling_wraps_in_both_directions() {
    let set = lines(&["one", "two", "three"]);
    let mut session = Session::horizontal(&set, MenuOptions::default());

    session.send(LogicalEvent::Prev);
    assert_eq!(session.dispatcher.filter().selected(), Some(2));
    assert_eq!(session.dispatcher.query(), "three");

    session.send(LogicalEvent::Next);
    assert_eq!(session.dispatcher.filter().selected(), Some(0));
    assert_eq!(session.dispatcher.query(), "one");

    session.send(LogicalEvent::Prev);
    assert_eq!(session.dispatcher.filter().selected(), Some(2));
}

#[test]
fn test_cycling_keeps_the_match_list() {
    let set = lines(&["apple", "apricot", "banana"]);
    let mut session = Session::horizontal(&set, MenuOptions::default());
    session.type_str("ap");

    session.send(LogicalEvent::Next);
    session.send(LogicalEvent::Next);
    assert_eq!(session.dispatcher.query(), "apricot");
    // The buffer now reads "apricot" but the list was not narrowed.
    assert_eq!(session.dispatcher.filter().matches(), &[0, 1]);

    session.send(LogicalEvent::Next);
    assert_eq!(session.dispatcher.query(), "apple");
}

#[test]
fn test_selection_stays_in_bounds() {
    let set = lines(&["a1", "a2", "b1"]);
    let mut session = Session::horizontal(&set, MenuOptions::default());
    let events = [
        LogicalEvent::Next,
        LogicalEvent::Next,
        LogicalEvent::Next,
        LogicalEvent::Char('1'),
        LogicalEvent::Prev,
        LogicalEvent::Backspace,
        LogicalEvent::Backspace,
        LogicalEvent::Prev,
        LogicalEvent::Prev,
    ];

    for event in events {
        session.send(event);
        let filter = session.dispatcher.filter();
        if let Some(selected) = filter.selected() {
            assert!(selected < filter.match_count());
        }
        assert!(filter.scroll_offset() <= filter.match_count().saturating_sub(1));
    }
}

#[test]
fn test_navigation_without_matches_does_nothing() {
    let set = lines(&["one"]);
    let mut session = Session::horizontal(&set, MenuOptions::default());
    session.type_str("zz");

    session.send(LogicalEvent::Next);
    session.send(LogicalEvent::Prev);
    assert_eq!(session.dispatcher.filter().selected(), None);
    assert_eq!(session.dispatcher.query(), "zz");
}

#[test]
fn test_first_selected_expands_before_cycling() {
    let set = lines(&["foobar", "foobaz"]);
    let mut session = Session::horizontal(&set, first_selected());
    session.type_str("foo");
    assert_eq!(session.dispatcher.filter().selected(), Some(0));

    session.send(LogicalEvent::Next);
    assert_eq!(session.dispatcher.query(), "foobar");
    assert_eq!(session.dispatcher.filter().selected(), Some(0));

    session.send(LogicalEvent::Next);
    assert_eq!(session.dispatcher.query(), "foobaz");
    assert_eq!(session.dispatcher.filter().selected(), Some(1));
}

#[test]
fn test_toggle_first_selected() {
    let set = lines(&["one", "two"]);
    let mut session = Session::horizontal(&set, MenuOptions::default());
    assert_eq!(session.dispatcher.filter().selected(), None);

    session.send(LogicalEvent::ToggleFirstSelected);
    assert_eq!(session.dispatcher.filter().selected(), Some(0));

    session.send(LogicalEvent::ToggleFirstSelected);
    assert_eq!(session.dispatcher.filter().selected(), None);
}

// =============================================================================
// Confirmation
// =============================================================================

#[test]
fn test_confirm_emits_raw_text_not_display_text() {
    let set = CandidateSet::from_lines(["/usr/bin/vim\tvim", "/usr/bin/nano\tnano"], Some("\t"));
    let mut session = Session::horizontal(&set, MenuOptions::default());
    session.type_str("na");
    session.send(LogicalEvent::Next);
    assert_eq!(session.dispatcher.query(), "nano");

    let state = session.send(LogicalEvent::Confirm);
    assert_eq!(state, Some(LoopState::Accepted("/usr/bin/nano\tnano".to_string())));
}

#[test]
fn test_separator_only_matches_display_text() {
    let set = CandidateSet::from_lines(["usr-path\tvim"], Some("\t"));
    let mut session = Session::horizontal(&set, MenuOptions::default());
    session.type_str("usr");
    assert_eq!(session.dispatcher.filter().match_count(), 0);
}

#[test]
fn test_free_text_confirm() {
    let set = lines(&["one"]);
    let mut session = Session::horizontal(&set, MenuOptions::default());
    session.type_str("custom");
    assert_eq!(session.send(LogicalEvent::Confirm), Some(LoopState::Accepted("custom".to_string())));
}

#[test]
fn test_no_free_text_refuses_unmatched_query() {
    let set = lines(&["one"]);
    let options = MenuOptions {
        free_text: false,
        ..MenuOptions::default()
    };
    let mut session = Session::horizontal(&set, options);
    session.type_str("custom");
    assert_eq!(session.send(LogicalEvent::Confirm), Some(LoopState::Looping));
    assert!(session.emitted.is_empty());
}

#[test]
fn test_first_selected_confirm_picks_first_match() {
    let set = lines(&["alpha", "beta"]);
    let mut session = Session::horizontal(&set, first_selected());
    session.type_str("b");
    assert_eq!(session.send(LogicalEvent::Confirm), Some(LoopState::Accepted("beta".to_string())));
}

#[test]
fn test_cancel_rejects() {
    let set = lines(&["one"]);
    let mut session = Session::horizontal(&set, MenuOptions::default());
    session.send(LogicalEvent::Next);
    assert_eq!(session.send(LogicalEvent::Cancel), Some(LoopState::Rejected));
    assert!(session.emitted.is_empty());
}

#[test]
fn test_multi_select_collects_each_confirmation() {
    let set = lines(&["red", "green", "blue"]);
    let options = MenuOptions {
        multiple_select: true,
        ..MenuOptions::default()
    };
    let mut session = Session::horizontal(&set, options);

    session.send(LogicalEvent::Next);
    assert_eq!(
        session.send(LogicalEvent::ConfirmContinue),
        Some(LoopState::AcceptedContinue("red".to_string()))
    );
    session.send(LogicalEvent::Prev);
    assert_eq!(
        session.send(LogicalEvent::ConfirmContinue),
        Some(LoopState::AcceptedContinue("blue".to_string()))
    );
    session.send(LogicalEvent::Prev);
    assert_eq!(session.send(LogicalEvent::Confirm), Some(LoopState::Accepted("green".to_string())));

    assert_eq!(session.emitted, vec!["red", "blue", "green"]);
}

#[test]
fn test_confirm_continue_without_multi_select_finishes() {
    let set = lines(&["red"]);
    let mut session = Session::horizontal(&set, MenuOptions::default());
    session.send(LogicalEvent::Next);
    assert_eq!(
        session.send(LogicalEvent::ConfirmContinue),
        Some(LoopState::Accepted("red".to_string()))
    );
}
