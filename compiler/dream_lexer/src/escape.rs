//! Escape Sequence Validation
//!
//! Checks escape sequences in string and character literals.
//! Recognized escapes: `\n`, `\r`, `\t`, `\\`, `\"`, `\'`, `\0`

/// Resolve a single escape character to its replacement.
///
/// Returns `Some(char)` for recognized escapes, `None` for unrecognized ones.
#[inline]
pub(crate) fn resolve_escape(c: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        '\\' => Some('\\'),
        '"' => Some('"'),
        '\'' => Some('\''),
        '0' => Some('\0'),
        _ => None,
    }
}

/// Byte offset (within `literal`) of the first unrecognized escape.
///
/// `literal` is the full token text including quotes. A trailing backslash
/// with nothing after it is not reported: the literal is already
/// unterminated and that diagnosis wins.
pub(crate) fn find_invalid_escape(literal: &str) -> Option<usize> {
    let mut chars = literal.char_indices();
    while let Some((offset, c)) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some((_, esc)) if resolve_escape(esc).is_none() => return Some(offset),
                Some(_) | None => {}
            }
        }
    }
    None
}
