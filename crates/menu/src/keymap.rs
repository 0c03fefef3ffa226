// Chunk: docs/chunks/menu_keymap - Key and mouse decoding
//!
//! Translates raw key and mouse events into [`LogicalEvent`]s.
//!
//! The menu core only ever sees logical events; this table is the one place
//! that knows which chord does what.

use lite_menu_input::{Key, KeyEvent, LogicalEvent, MouseButton, MouseEvent, MouseEventKind};

/// Decodes a key press. Returns `None` for keys the menu ignores.
pub fn decode_key(event: &KeyEvent) -> Option<LogicalEvent> {
    let mods = event.modifiers;

    let decoded = if mods.control {
        match event.key {
            Key::Char(ch) => match ch.to_ascii_lowercase() {
                'h' => Some(LogicalEvent::Backspace),
                'w' => Some(LogicalEvent::DeleteWord),
                'u' => Some(LogicalEvent::ClearLine),
                'n' => Some(LogicalEvent::Next),
                'p' => Some(LogicalEvent::Prev),
                'm' => Some(LogicalEvent::ConfirmContinue),
                'i' => Some(LogicalEvent::ToggleFirstSelected),
                'c' => Some(LogicalEvent::Cancel),
                _ => None,
            },
            Key::Return => Some(LogicalEvent::ConfirmContinue),
            Key::Backspace => Some(LogicalEvent::Backspace),
            _ => None,
        }
    } else {
        match event.key {
            Key::Char(ch) if !mods.has_command_or_control() && !ch.is_control() => Some(LogicalEvent::Char(ch)),
            Key::Backspace => Some(LogicalEvent::Backspace),
            Key::Tab if mods.shift => Some(LogicalEvent::Prev),
            Key::Tab | Key::Down | Key::Right => Some(LogicalEvent::Next),
            Key::Up | Key::Left => Some(LogicalEvent::Prev),
            Key::Return => Some(LogicalEvent::Confirm),
            Key::Escape => Some(LogicalEvent::Cancel),
            _ => None,
        }
    };

    if decoded.is_none() {
        tracing::trace!(?event, "ignoring key");
    }
    decoded
}

/// Decodes a mouse event. Only presses of the left and right buttons and
/// wheel movement mean anything to the menu.
pub fn decode_mouse(event: &MouseEvent) -> Option<LogicalEvent> {
    match event.kind {
        MouseEventKind::Down(button @ (MouseButton::Left | MouseButton::Right)) => Some(LogicalEvent::Click {
            position: event.position,
            button,
        }),
        MouseEventKind::Scroll(direction) => Some(LogicalEvent::Scroll(direction)),
        _ => None,
    }
}
