// Chunk: docs/chunks/menu_input_types - Shared input types crate
//!
//! Input event types for keyboard, mouse, and scroll handling.
//!
//! Two layers live here:
//!
//! - Raw-ish events ([`KeyEvent`], [`MouseEvent`]) that abstract over the
//!   terminal backend's event details.
//! - [`LogicalEvent`], the already-decoded vocabulary the menu core
//!   understands. Translating keys into logical events is the keymap's job;
//!   the core never looks at key codes or modifiers.

/// A keyboard event.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyEvent {
    /// The key that was pressed
    pub key: Key,
    /// Modifier keys held during the event
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Creates a new KeyEvent with the given key and modifiers.
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Creates a KeyEvent for a single character with no modifiers.
    pub fn char(ch: char) -> Self {
        Self {
            key: Key::Char(ch),
            modifiers: Modifiers::default(),
        }
    }

    /// Creates a KeyEvent for a single character with control held.
    pub fn ctrl(ch: char) -> Self {
        Self {
            key: Key::Char(ch),
            modifiers: Modifiers {
                control: true,
                ..Default::default()
            },
        }
    }

    /// Creates a KeyEvent for a key with no modifiers.
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
        }
    }
}

/// Modifier keys that can be held during a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Shift key
    pub shift: bool,
    /// Command / Super key
    pub command: bool,
    /// Control key
    pub control: bool,
}

impl Modifiers {
    /// Returns true if no modifier keys are held.
    pub fn is_empty(&self) -> bool {
        !self.shift && !self.command && !self.control
    }

    /// Returns true if control or command is held.
    ///
    /// Such chords never insert text into the query.
    pub fn has_command_or_control(&self) -> bool {
        self.command || self.control
    }
}

/// Keys that can be pressed.
#[derive(Debug, Clone, PartialEq)]
pub enum Key {
    /// A printable character (already accounts for shift state)
    Char(char),
    /// Backspace / Delete backward
    Backspace,
    /// Return / Enter
    Return,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Tab key
    Tab,
    /// Escape key
    Escape,
}

/// Mouse buttons the menu distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Primary button: select and confirm.
    Left,
    /// Secondary button: select, confirm and keep the menu open.
    Right,
    /// Middle button (ignored by the menu).
    Middle,
}

/// Wheel direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Towards the start of the list.
    Up,
    /// Towards the end of the list.
    Down,
}

/// A mouse event.
#[derive(Debug, Clone, PartialEq)]
pub struct MouseEvent {
    /// The type of mouse event
    pub kind: MouseEventKind,
    /// Position in window coordinates (cells from the window's top-left).
    ///
    /// May be negative or beyond the window when the pointer is outside it.
    pub position: (i32, i32),
    /// Modifier keys held during the event
    pub modifiers: Modifiers,
}

/// Kind of mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEventKind {
    /// Mouse button pressed
    Down(MouseButton),
    /// Mouse button released
    Up(MouseButton),
    /// Wheel turned
    Scroll(ScrollDirection),
    /// Pointer moved
    Moved,
}

/// The decoded input vocabulary of the menu.
///
/// Every event the core reacts to is one of these. Producing them from raw
/// key codes is the frontend's concern.
#[derive(Debug, Clone, PartialEq)]
pub enum LogicalEvent {
    /// A character typed into the query.
    Char(char),
    /// Delete the last codepoint of the query.
    Backspace,
    /// Delete the last word of the query.
    DeleteWord,
    /// Empty the query.
    ClearLine,
    /// Select the next match.
    Next,
    /// Select the previous match.
    Prev,
    /// Commit the current selection (or free text) and finish.
    Confirm,
    /// Commit the current selection and, in multi-select mode, keep going.
    ConfirmContinue,
    /// Flip the "first match is implicitly selected" mode.
    ToggleFirstSelected,
    /// Pointer press at a window-relative position.
    Click {
        /// `(x, y)` relative to the window origin.
        position: (i32, i32),
        button: MouseButton,
    },
    /// Wheel movement.
    Scroll(ScrollDirection),
    /// Dismiss the menu without a selection.
    Cancel,
    /// The window was resized to `width` x `height`.
    Resize { width: i32, height: i32 },
}
