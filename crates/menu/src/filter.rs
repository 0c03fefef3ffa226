// Chunk: docs/chunks/selector_widget - Reusable selector interaction model
//!
//! The filter engine: which candidates match the query, which one is
//! selected, and where the visible window starts.
//!
//! [`FilterEngine`] knows nothing about rendering or input decoding, only
//! about matching, selection and scroll bookkeeping. It never copies
//! candidates: `matches` holds indices into the [`CandidateSet`].
//!
//! # Invariants
//!
//! - `matches` lists candidate indices in input order.
//! - `selected`, when set, is a valid position in `matches`.
//! - `scroll_offset` is a valid position in `matches` (or 0 when empty).
//!
//! # Example
//!
//! ```
//! use lite_menu::candidates::CandidateSet;
//! use lite_menu::filter::{Direction, FilterEngine};
//! use lite_menu_buffer::TextBuffer;
//!
//! let candidates = CandidateSet::from_lines(["apple", "banana", "grape"], None);
//! let mut buffer = TextBuffer::from_str("AP");
//! let mut filter = FilterEngine::new(false);
//!
//! filter.refilter(buffer.as_str(), &candidates);
//! assert_eq!(filter.matches(), &[0, 2]);
//!
//! filter.move_selection(Direction::Next, &mut buffer, &candidates).unwrap();
//! assert_eq!(filter.selected(), Some(0));
//! assert_eq!(buffer.as_str(), "apple");
//! ```

use lite_menu_buffer::{BufferError, TextBuffer};
use lite_menu_input::ScrollDirection;

use crate::candidates::{Candidate, CandidateSet};

/// Direction of a selection move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

/// Matching, selection and scroll state over a [`CandidateSet`].
#[derive(Debug, Clone)]
pub struct FilterEngine {
    /// Indices into the candidate set, in input order.
    matches: Vec<usize>,
    /// Position in `matches` of the highlighted entry.
    selected: Option<usize>,
    /// Position in `matches` of the first rendered entry.
    scroll_offset: usize,
    /// When set, match #0 is implicitly selected after every refilter.
    first_selected: bool,
}

impl FilterEngine {
    /// Creates an engine with no matches. Call [`refilter`](Self::refilter)
    /// before use.
    pub fn new(first_selected: bool) -> Self {
        Self {
            matches: Vec::new(),
            selected: None,
            scroll_offset: 0,
            first_selected,
        }
    }

    /// Returns the matching candidate indices, in input order.
    pub fn matches(&self) -> &[usize] {
        &self.matches
    }

    /// Returns the number of matches.
    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    /// Returns the selected position in [`matches`](Self::matches).
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Returns the position of the first rendered match.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Returns whether the first match is implicitly selected.
    pub fn first_selected(&self) -> bool {
        self.first_selected
    }

    /// Returns the candidate behind match position `position`.
    pub fn matched<'a>(&self, position: usize, candidates: &'a CandidateSet) -> Option<&'a Candidate> {
        self.matches
            .get(position)
            .and_then(|&index| candidates.get(index))
    }

    /// Recomputes the matches for `query` from scratch.
    ///
    /// Every candidate whose display text contains `query`
    /// case-insensitively matches, in input order. The selection resets
    /// (to match #0 in first-selected mode) and the view scrolls back to
    /// the top.
    pub fn refilter(&mut self, query: &str, candidates: &CandidateSet) {
        self.matches.clear();
        self.matches.extend(
            candidates
                .iter()
                .enumerate()
                .filter(|(_, candidate)| contains_ignore_case(candidate.display(), query))
                .map(|(index, _)| index),
        );

        self.selected = if self.first_selected && !self.matches.is_empty() {
            Some(0)
        } else {
            None
        };
        self.scroll_offset = 0;
    }

    /// Moves the selection one step, wrapping at both ends, and copies the
    /// newly selected display text into `buffer`.
    ///
    /// In first-selected mode, a `Next` while match #0 is selected but not
    /// yet spelled out in the buffer only expands the buffer to match #0;
    /// the following `Next` starts cycling. `Prev` always moves.
    ///
    /// The buffer is rewritten without refiltering, so the match list stays
    /// stable while cycling. Returns `Ok(false)` if there was nothing to move.
    pub fn move_selection(
        &mut self,
        direction: Direction,
        buffer: &mut TextBuffer,
        candidates: &CandidateSet,
    ) -> Result<bool, BufferError> {
        let len = self.matches.len();
        if len == 0 {
            return Ok(false);
        }

        if self.first_selected && self.selected == Some(0) && direction == Direction::Next {
            let first = candidates[self.matches[0]].display();
            if first != buffer.as_str() {
                buffer.set_content(first)?;
                return Ok(true);
            }
        }

        // `None` acts as -1: Next lands on 0, Prev wraps to the last match.
        let next = match (direction, self.selected) {
            (Direction::Next, None) => 0,
            (Direction::Next, Some(current)) => (current + 1) % len,
            (Direction::Prev, None) | (Direction::Prev, Some(0)) => len - 1,
            (Direction::Prev, Some(current)) => current - 1,
        };

        buffer.set_content(candidates[self.matches[next]].display())?;
        self.selected = Some(next);
        Ok(true)
    }

    /// Scrolls so the selected match is the first one rendered.
    pub fn scroll_to_selected(&mut self) {
        if let Some(selected) = self.selected {
            self.scroll_offset = selected;
        }
    }

    /// Moves the view one step without touching the selection.
    pub fn scroll(&mut self, direction: ScrollDirection) {
        let last = self.matches.len().saturating_sub(1);
        self.scroll_offset = match direction {
            ScrollDirection::Up => self.scroll_offset.saturating_sub(1),
            ScrollDirection::Down => (self.scroll_offset + 1).min(last),
        };
    }

    /// Selects match position `position` directly (pointer selection).
    ///
    /// Returns false and leaves the selection alone if out of range.
    pub fn select(&mut self, position: usize) -> bool {
        if position < self.matches.len() {
            self.selected = Some(position);
            true
        } else {
            false
        }
    }

    /// Returns the text to emit for a confirmation, or `None` if the
    /// confirmation must be refused.
    ///
    /// With a selection (or an implicit first selection) the candidate's
    /// raw text is returned. Otherwise the query itself is returned when
    /// free text is allowed.
    pub fn confirm<'a>(
        &self,
        buffer: &'a TextBuffer,
        candidates: &'a CandidateSet,
        free_text: bool,
    ) -> Option<&'a str> {
        let implicit_first = self.first_selected && !self.matches.is_empty();
        if self.selected.is_some() || implicit_first {
            let position = self.selected.unwrap_or(0);
            return self.matched(position, candidates).map(Candidate::raw);
        }

        free_text.then(|| buffer.as_str())
    }

    /// Flips first-selected mode, keeping the selection consistent with it.
    pub fn toggle_first_selected(&mut self) {
        self.first_selected = !self.first_selected;
        if self.first_selected && self.selected.is_none() && !self.matches.is_empty() {
            self.selected = Some(0);
        }
        if !self.first_selected && self.selected == Some(0) {
            self.selected = None;
        }
    }
}

/// Case-insensitive substring test.
///
/// An empty needle matches everything. ASCII inputs are compared byte-wise;
/// anything else is lower-cased first.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    if haystack.is_ascii() && needle.is_ascii() {
        let needle = needle.as_bytes();
        return haystack
            .as_bytes()
            .windows(needle.len())
            .any(|window| window.eq_ignore_ascii_case(needle));
    }

    haystack.to_lowercase().contains(&needle.to_lowercase())
}
