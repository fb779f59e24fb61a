//! Tokens and spans.

use std::fmt;
use std::ops::Range;

use crate::error::{LexError, Malformed};

/// Half-open byte range `start..end` into the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Smallest span covering both.
    pub fn merge(self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }

    pub fn range(self) -> Range<usize> {
        self.start..self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.range()
    }
}

/// One lexeme of the source, typed by taxonomy `Ty`.
///
/// Borrows the caller's source and never outlives it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<'a, Ty> {
    pub ty: Ty,
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte length; always at least 1.
    pub len: usize,
    pub text: &'a str,
    /// Set when the lexeme was malformed and recovered.
    pub malformed: Option<Malformed>,
}

impl<'a, Ty: Copy> Token<'a, Ty> {
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    #[inline]
    pub fn span(&self) -> Span {
        Span::new(self.start, self.end())
    }

    /// The recovered problem as an error value, if any.
    pub fn error(&self) -> Option<LexError> {
        self.malformed.map(|kind| LexError::MalformedLexeme {
            kind,
            span: self.span(),
        })
    }

    /// Bracket direction: `Some(true)` for `( { [`, `Some(false)` for
    /// `) } ]`, `None` for anything else.
    ///
    /// Taxonomies use one type per bracket pair; the direction lives in the
    /// text.
    pub fn is_opening(&self) -> Option<bool> {
        match self.text {
            "(" | "{" | "[" => Some(true),
            ")" | "}" | "]" => Some(false),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn token(text: &str, start: usize) -> Token<'_, ()> {
        Token {
            ty: (),
            start,
            len: text.len(),
            text,
            malformed: None,
        }
    }

    #[test]
    fn span_of_token() {
        let tok = token("return", 4);
        assert_eq!(tok.end(), 10);
        assert_eq!(tok.span(), Span::new(4, 10));
        assert_eq!(tok.span().len(), 6);
        assert_eq!(tok.span().range(), 4..10);
    }

    #[test]
    fn span_merge_and_display() {
        let merged = Span::new(2, 4).merge(Span::new(6, 9));
        assert_eq!(merged, Span::new(2, 9));
        assert_eq!(merged.to_string(), "2..9");
        assert!(Span::new(3, 3).is_empty());
    }

    #[test]
    fn error_only_for_malformed() {
        assert_eq!(token("x", 0).error(), None);
        let mut tok = token("\"abc", 5);
        tok.malformed = Some(Malformed::UnterminatedString);
        assert_eq!(
            tok.error(),
            Some(LexError::MalformedLexeme {
                kind: Malformed::UnterminatedString,
                span: Span::new(5, 9),
            })
        );
    }

    #[test]
    fn bracket_direction_from_text() {
        assert_eq!(token("(", 0).is_opening(), Some(true));
        assert_eq!(token("{", 0).is_opening(), Some(true));
        assert_eq!(token("]", 0).is_opening(), Some(false));
        assert_eq!(token("}", 0).is_opening(), Some(false));
        assert_eq!(token("<", 0).is_opening(), None);
    }
}
