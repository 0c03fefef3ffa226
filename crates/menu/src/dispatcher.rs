// Chunk: docs/chunks/menu_dispatcher - Action dispatch state machine
//!
//! The action dispatcher: the single state machine that turns logical
//! input events into edits of the query and the filter state.
//!
//! Handling an event is split in three steps so each can be tested on its
//! own:
//!
//! 1. [`Dispatcher::decide`] maps a [`LogicalEvent`] to an [`Action`],
//!    consulting the last [`RenderPlan`] for pointer clicks.
//! 2. [`Dispatcher::apply`] mutates the query and the filter and reports
//!    the resulting [`LoopState`].
//! 3. [`Dispatcher::redraw`] paints the new state and records a fresh
//!    render plan.

use lite_menu_buffer::{BufferError, TextBuffer};
use lite_menu_input::{LogicalEvent, MouseButton, ScrollDirection};

use crate::candidates::CandidateSet;
use crate::filter::{Direction, FilterEngine};
use crate::layout::{Canvas, Hit, LayoutEngine, RenderPlan};

/// Session flags fixed at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuOptions {
    /// Implicitly select the first match.
    pub first_selected: bool,
    /// Allow confirming a query that matches nothing.
    pub free_text: bool,
    /// Keep running after a confirm-and-continue.
    pub multiple_select: bool,
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self {
            first_selected: false,
            free_text: true,
            multiple_select: false,
        }
    }
}

/// What the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Exit,
    Confirm,
    ConfirmContinue,
    NextCompletion,
    PrevCompletion,
    DeleteChar,
    DeleteWord,
    DeleteLine,
    AddChar(char),
    ToggleFirstSelected,
    Scroll(ScrollDirection),
    /// Select match `index` and confirm it, staying open if `keep_open`.
    ClickItem { index: usize, keep_open: bool },
    Resize { width: i32, height: i32 },
}

/// Where the loop stands after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopState {
    /// Keep reading events.
    Looping,
    /// Emit the text and stop.
    Accepted(String),
    /// Emit the text and keep reading events.
    AcceptedContinue(String),
    /// Stop without a selection.
    Rejected,
}

/// Owns the query and the filter state; borrows the candidates.
#[derive(Debug)]
pub struct Dispatcher<'a> {
    candidates: &'a CandidateSet,
    buffer: TextBuffer,
    filter: FilterEngine,
    layout: LayoutEngine,
    plan: RenderPlan,
    free_text: bool,
    multiple_select: bool,
}

impl<'a> Dispatcher<'a> {
    /// Creates a dispatcher with an empty query, matching every candidate.
    pub fn new(candidates: &'a CandidateSet, layout: LayoutEngine, options: MenuOptions) -> Self {
        let buffer = TextBuffer::new();
        let mut filter = FilterEngine::new(options.first_selected);
        filter.refilter(buffer.as_str(), candidates);

        Self {
            candidates,
            buffer,
            filter,
            layout,
            plan: RenderPlan::default(),
            free_text: options.free_text,
            multiple_select: options.multiple_select,
        }
    }

    pub fn query(&self) -> &str {
        self.buffer.as_str()
    }

    pub fn filter(&self) -> &FilterEngine {
        &self.filter
    }

    pub fn layout(&self) -> &LayoutEngine {
        &self.layout
    }

    /// The render plan of the last redraw.
    pub fn plan(&self) -> &RenderPlan {
        &self.plan
    }

    // =========================================================================
    // Decide
    // =========================================================================

    /// Maps an event to an action. Returns `None` for events that mean
    /// nothing in the current state.
    pub fn decide(&self, event: &LogicalEvent) -> Option<Action> {
        let action = match *event {
            LogicalEvent::Char(ch) => Action::AddChar(ch),
            LogicalEvent::Backspace => Action::DeleteChar,
            LogicalEvent::DeleteWord => Action::DeleteWord,
            LogicalEvent::ClearLine => Action::DeleteLine,
            LogicalEvent::Next => Action::NextCompletion,
            LogicalEvent::Prev => Action::PrevCompletion,
            LogicalEvent::Confirm => Action::Confirm,
            LogicalEvent::ConfirmContinue => Action::ConfirmContinue,
            LogicalEvent::ToggleFirstSelected => Action::ToggleFirstSelected,
            LogicalEvent::Cancel => Action::Exit,
            LogicalEvent::Scroll(direction) => Action::Scroll(direction),
            LogicalEvent::Resize { width, height } => Action::Resize { width, height },
            LogicalEvent::Click { position, button } => {
                let keep_open = match button {
                    MouseButton::Left => false,
                    MouseButton::Right => true,
                    MouseButton::Middle => return None,
                };
                match self.plan.hit_test_point(position.0, position.1) {
                    Hit::Item(index) => Action::ClickItem { index, keep_open },
                    Hit::Cancel => Action::Exit,
                }
            }
        };
        Some(action)
    }

    // =========================================================================
    // Apply
    // =========================================================================

    /// Performs `action` and reports whether the loop goes on.
    ///
    /// # Errors
    ///
    /// Fails only if the query buffer cannot grow; the query is left as it
    /// was in that case.
    pub fn apply(&mut self, action: Action) -> Result<LoopState, BufferError> {
        tracing::debug!(?action, query = self.buffer.as_str(), "applying action");

        let state = match action {
            Action::Exit => LoopState::Rejected,
            Action::Confirm => self.confirm(false),
            Action::ConfirmContinue => self.confirm(true),
            Action::NextCompletion => self.complete(Direction::Next)?,
            Action::PrevCompletion => self.complete(Direction::Prev)?,
            Action::DeleteChar => {
                self.buffer.delete_last_rune();
                self.refilter()
            }
            Action::DeleteWord => {
                self.buffer.delete_last_word();
                self.refilter()
            }
            Action::DeleteLine => {
                self.buffer.clear();
                self.refilter()
            }
            Action::AddChar(ch) => {
                self.buffer.push_char(ch)?;
                self.refilter()
            }
            Action::ToggleFirstSelected => {
                self.filter.toggle_first_selected();
                LoopState::Looping
            }
            Action::Scroll(direction) => {
                self.filter.scroll(direction);
                LoopState::Looping
            }
            Action::ClickItem { index, keep_open } => {
                if self.filter.select(index) {
                    self.confirm(keep_open)
                } else {
                    LoopState::Looping
                }
            }
            Action::Resize { width, height } => {
                self.layout.resize(width, height);
                LoopState::Looping
            }
        };

        Ok(state)
    }

    fn refilter(&mut self) -> LoopState {
        self.filter.refilter(self.buffer.as_str(), self.candidates);
        LoopState::Looping
    }

    fn complete(&mut self, direction: Direction) -> Result<LoopState, BufferError> {
        if self.filter.move_selection(direction, &mut self.buffer, self.candidates)? {
            self.filter.scroll_to_selected();
        }
        Ok(LoopState::Looping)
    }

    fn confirm(&self, keep_open: bool) -> LoopState {
        let Some(text) = self.filter.confirm(&self.buffer, self.candidates, self.free_text) else {
            tracing::debug!("nothing to confirm, free text disabled");
            return LoopState::Looping;
        };

        if keep_open && self.multiple_select {
            LoopState::AcceptedContinue(text.to_string())
        } else {
            LoopState::Accepted(text.to_string())
        }
    }

    // =========================================================================
    // Redraw
    // =========================================================================

    /// Paints the current state and keeps the new render plan for
    /// hit-testing.
    pub fn redraw(&mut self, canvas: &mut dyn Canvas) {
        self.plan = self
            .layout
            .draw(canvas, self.buffer.as_str(), &self.filter, self.candidates);
    }
}
