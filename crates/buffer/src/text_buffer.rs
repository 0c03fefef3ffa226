// Chunk: docs/chunks/query_buffer - Growable UTF-8 query buffer

//! TextBuffer is the query the user types into the prompt.
//!
//! Unlike an editor buffer there is no cursor: characters are only ever
//! appended at the end, and deletions only ever remove from the end. This
//! keeps the invariants small enough to state precisely:
//!
//! - the content is always valid UTF-8 with no interior NUL
//! - `len() <= capacity()`
//! - an edit either fully applies or leaves the content untouched

use crate::types::BufferError;
use crate::utf8::last_rune_start;

/// Capacity of a freshly created buffer, in bytes.
pub const INITIAL_CAPACITY: usize = 10;

/// Minimum number of spare bytes kept after every append.
pub const MIN_HEADROOM: usize = 2;

/// A length-tracked, growable UTF-8 query buffer.
///
/// All mutation operations report what they removed so callers can decide
/// whether a refilter is needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    data: String,
}

impl TextBuffer {
    /// Creates a new empty buffer with [`INITIAL_CAPACITY`] bytes reserved.
    pub fn new() -> Self {
        Self {
            data: String::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// Creates a buffer initialized with the given content.
    ///
    /// Interior NUL characters are dropped.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Self {
        let mut data = String::with_capacity(INITIAL_CAPACITY.max(content.len() + MIN_HEADROOM));
        data.extend(content.chars().filter(|&ch| ch != '\0'));
        Self { data }
    }

    // ==================== Accessors ====================

    /// Returns the buffer content.
    pub fn as_str(&self) -> &str {
        &self.data
    }

    /// Returns the content length in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the buffer holds no text.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of bytes the buffer can hold without growing.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    // ==================== Appending ====================

    /// Appends `text` to the end of the buffer.
    ///
    /// Interior NUL characters are dropped. Capacity grows by 1.5x until at
    /// least [`MIN_HEADROOM`] bytes remain free after the copy.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Allocation`] if growing fails. The buffer is
    /// left unchanged in that case.
    pub fn append(&mut self, text: &str) -> Result<(), BufferError> {
        if text.is_empty() {
            return Ok(());
        }
        self.reserve_for(text.len())?;
        self.data.extend(text.chars().filter(|&ch| ch != '\0'));
        Ok(())
    }

    /// Appends a single character. See [`append`](Self::append).
    pub fn push_char(&mut self, ch: char) -> Result<(), BufferError> {
        let mut encoded = [0u8; 4];
        self.append(ch.encode_utf8(&mut encoded))
    }

    /// Replaces the whole content with `text`.
    ///
    /// Storage is reserved before the old content is dropped, so a failure
    /// leaves the previous content in place.
    pub fn set_content(&mut self, text: &str) -> Result<(), BufferError> {
        let keep = self.data.len();
        if text.len() > keep {
            self.reserve_for(text.len() - keep)?;
        }
        self.data.clear();
        self.data.extend(text.chars().filter(|&ch| ch != '\0'));
        Ok(())
    }

    /// Makes sure `additional` more bytes fit while keeping the headroom.
    fn reserve_for(&mut self, additional: usize) -> Result<(), BufferError> {
        let len = self.data.len();
        let current = self.data.capacity();
        let mut target = current.max(INITIAL_CAPACITY);
        while target - len < additional + MIN_HEADROOM {
            target += (target >> 1).max(1);
        }

        if target > current {
            self.data
                .try_reserve_exact(target - len)
                .map_err(|source| BufferError::Allocation {
                    requested: target,
                    source,
                })?;
        }
        Ok(())
    }

    // ==================== Deleting ====================

    /// Deletes the last codepoint, whatever its encoded length.
    ///
    /// Walks back from the last byte over continuation bytes (`10xxxxxx`)
    /// and stops at the first ASCII or lead byte, which is removed too.
    /// Returns the removed character, or `None` on an empty buffer.
    pub fn delete_last_rune(&mut self) -> Option<char> {
        let start = last_rune_start(self.data.as_bytes())?;
        let removed = self.data[start..].chars().next();
        self.data.truncate(start);
        removed
    }

    /// Deletes one word plus the whitespace run in front of it.
    ///
    /// Runes are removed while the remaining text ends in a non-space; once
    /// a space is exposed the mode switches to skipping spaces, and deletion
    /// stops as soon as a non-space is exposed again. This is the
    /// shell/readline C-w word erase. Returns the number of bytes removed.
    pub fn delete_last_word(&mut self) -> usize {
        let before = self.data.len();
        let mut in_word = true;

        while self.delete_last_rune().is_some() {
            let Some(last) = self.data.chars().next_back() else {
                break;
            };

            if in_word && last.is_whitespace() {
                in_word = false;
            }
            if !in_word && !last.is_whitespace() {
                break;
            }
        }

        before - self.data.len()
    }

    /// Removes all content. Capacity is retained.
    pub fn clear(&mut self) -> usize {
        let removed = self.data.len();
        self.data.clear();
        removed
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<str> for TextBuffer {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
