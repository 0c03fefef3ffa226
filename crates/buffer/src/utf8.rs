// Chunk: docs/chunks/query_buffer - UTF-8 boundary helpers

//! Byte-level UTF-8 boundary helpers.
//!
//! These operate on raw bytes instead of `char`s because the deletion
//! algorithm walks backwards one byte at a time: it stops on the first byte
//! that is *not* a continuation byte (`10xxxxxx`), i.e. on an ASCII byte or a
//! multi-byte lead byte (`11xxxxxx`).

/// Returns true for UTF-8 continuation bytes (`10xxxxxx`).
#[inline]
pub fn is_continuation_byte(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Returns the byte offset where the last codepoint of `bytes` starts.
///
/// Returns `None` for an empty slice. For a slice made only of continuation
/// bytes (which valid UTF-8 never is) the whole slice is treated as one rune
/// and `Some(0)` is returned.
pub fn last_rune_start(bytes: &[u8]) -> Option<usize> {
    if bytes.is_empty() {
        return None;
    }

    let mut idx = bytes.len() - 1;
    while idx > 0 && is_continuation_byte(bytes[idx]) {
        idx -= 1;
    }
    Some(idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_is_not_continuation() {
        assert!(!is_continuation_byte(b'a'));
        assert!(!is_continuation_byte(0x7F));
    }

    #[test]
    fn lead_bytes_are_not_continuation() {
        assert!(!is_continuation_byte(0xC3));
        assert!(!is_continuation_byte(0xE6));
        assert!(!is_continuation_byte(0xF0));
    }

    #[test]
    fn continuation_bytes_are_detected() {
        assert!(is_continuation_byte(0xA9));
        assert!(is_continuation_byte(0x80));
        assert!(is_continuation_byte(0xBF));
    }

    #[test]
    fn last_rune_start_empty() {
        assert_eq!(last_rune_start(b""), None);
    }

    #[test]
    fn last_rune_start_ascii() {
        assert_eq!(last_rune_start(b"abc"), Some(2));
    }

    #[test]
    fn last_rune_start_two_byte() {
        // "café" = 63 61 66 C3 A9
        assert_eq!(last_rune_start("café".as_bytes()), Some(3));
    }

    #[test]
    fn last_rune_start_four_byte() {
        // "a🦀" = 61 F0 9F A6 80
        assert_eq!(last_rune_start("a🦀".as_bytes()), Some(1));
    }

    #[test]
    fn last_rune_start_only_continuations() {
        assert_eq!(last_rune_start(&[0x80, 0x80]), Some(0));
    }
}
