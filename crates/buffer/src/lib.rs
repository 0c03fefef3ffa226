// Chunk: docs/chunks/query_buffer - Growable UTF-8 query buffer

//! lite-menu-buffer: the editable query buffer behind the lite-menu prompt.
//!
//! The buffer is a single line of UTF-8 text that only grows or shrinks at
//! its end. Every edit keeps the content valid UTF-8: deletions always remove
//! whole codepoints, never a dangling continuation byte.
//!
//! # Example
//!
//! ```
//! use lite_menu_buffer::TextBuffer;
//!
//! let mut buffer = TextBuffer::new();
//! buffer.append("hello   world").unwrap();
//!
//! // Shell-style word erase (readline's C-w)
//! buffer.delete_last_word();
//! assert_eq!(buffer.as_str(), "hello");
//!
//! // Codepoint-aware backspace
//! buffer.clear();
//! buffer.append("café").unwrap();
//! buffer.delete_last_rune();
//! assert_eq!(buffer.as_str(), "caf");
//! ```
//!
//! # Growth
//!
//! Capacity grows by 1.5x whenever an append would leave less than
//! [`MIN_HEADROOM`] spare bytes. Growth is reserved *before* any byte is
//! copied, so a failed allocation leaves the buffer exactly as it was and
//! surfaces as [`BufferError::Allocation`].

mod text_buffer;
mod types;
mod utf8;

pub use text_buffer::{TextBuffer, INITIAL_CAPACITY, MIN_HEADROOM};
pub use types::BufferError;
pub use utf8::{is_continuation_byte, last_rune_start};
