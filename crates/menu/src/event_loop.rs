// Chunk: docs/chunks/menu_event_loop - Blocking read-dispatch-redraw loop
//!
//! The menu's event loop.
//!
//! Single-threaded and cooperative: the only place it blocks is
//! [`Frontend::next_event`]. Every event is decided, applied and followed
//! by a synchronous redraw before the next one is read.

use std::io;

use lite_menu_input::LogicalEvent;

use crate::dispatcher::{Dispatcher, LoopState};
use crate::error::MenuError;
use crate::layout::Canvas;

/// The surface the menu runs on: a source of decoded events plus
/// something to draw into.
pub trait Frontend {
    /// Blocks until the next event the menu understands.
    fn next_event(&mut self) -> Result<LogicalEvent, MenuError>;

    /// The canvas redraws paint into.
    fn canvas(&mut self) -> &mut dyn Canvas;

    /// Makes the last redraw visible.
    fn present(&mut self) -> Result<(), MenuError>;
}

/// How the loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A final confirmation was made.
    Accepted,
    /// The user dismissed the menu.
    Cancelled,
}

impl Outcome {
    /// Process exit status for this outcome.
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Accepted => 0,
            Outcome::Cancelled => 1,
        }
    }
}

/// Runs the menu until it is confirmed or cancelled.
///
/// Each accepted text is passed to `emit` as soon as it is accepted; in
/// multi-select mode that can happen many times before the loop ends.
pub fn run<F, E>(dispatcher: &mut Dispatcher<'_>, frontend: &mut F, mut emit: E) -> Result<Outcome, MenuError>
where
    F: Frontend + ?Sized,
    E: FnMut(&str) -> io::Result<()>,
{
    dispatcher.redraw(frontend.canvas());
    frontend.present()?;

    loop {
        let event = frontend.next_event()?;
        let Some(action) = dispatcher.decide(&event) else {
            continue;
        };

        match dispatcher.apply(action)? {
            LoopState::Looping => {}
            LoopState::AcceptedContinue(text) => emit(&text)?,
            LoopState::Accepted(text) => {
                emit(&text)?;
                tracing::info!("selection accepted");
                return Ok(Outcome::Accepted);
            }
            LoopState::Rejected => {
                tracing::info!("menu cancelled");
                return Ok(Outcome::Cancelled);
            }
        }

        dispatcher.redraw(frontend.canvas());
        frontend.present()?;
    }
}
