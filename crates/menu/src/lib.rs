// Chunk: docs/chunks/selector_widget - Type-to-filter selection menu
//!
//! lite-menu: a type-to-filter selection menu.
//!
//! Candidate lines are filtered by a case-insensitive substring query as the
//! user types. The selection can be moved with the keyboard, the mouse wheel
//! or a click, and the chosen line is printed to stdout.
//!
//! The core ([`filter`], [`layout`], [`dispatcher`]) never touches the
//! terminal: layout paints into a [`layout::Canvas`] and the
//! [`event_loop`] reads decoded events from a [`event_loop::Frontend`].
//! [`terminal`] provides both on top of crossterm.

pub mod candidates;
pub mod cli;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod event_loop;
pub mod filter;
pub mod geometry;
pub mod keymap;
pub mod layout;
pub mod logging;
pub mod style;
pub mod terminal;

pub use candidates::{Candidate, CandidateSet};
pub use config::Config;
pub use dispatcher::{Action, Dispatcher, LoopState, MenuOptions};
pub use error::{ConfigError, MenuError, ValueError};
pub use event_loop::{Frontend, Outcome};
pub use filter::{Direction, FilterEngine};
pub use layout::{Canvas, Hit, LayoutEngine, LayoutSettings, RenderPlan};

// Re-exported so frontends need only this crate.
pub use lite_menu_buffer::{BufferError, TextBuffer};
pub use lite_menu_input::{LogicalEvent, MouseButton, ScrollDirection};
