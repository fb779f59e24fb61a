//! Taxonomy-driven tokenization.
//!
//! [`Lexer`] wraps a [`RawScanner`] and refines every raw token in three
//! steps: convert the raw tag to a [`Lexeme`], resolve keywords and
//! identifier roles, then validate escapes. The active taxonomy names the
//! result.

use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;

use dream_lexer_core::{Cursor, RawScanner};

use crate::context::ContextTracker;
use crate::convert::convert;
use crate::error::{ContractViolation, LexError, Malformed};
use crate::escape::find_invalid_escape;
use crate::keywords;
use crate::lexeme::Lexeme;
use crate::taxonomy::Taxonomy;
use crate::token::{Span, Token};

/// Pull-based tokenizer for one source buffer.
///
/// Owns only its scan position and lookahead context; any number of lexers
/// may run concurrently over different (or the same) buffers.
pub struct Lexer<'a, T: Taxonomy> {
    source: &'a str,
    scanner: RawScanner<'a>,
    /// Byte offset of the next token.
    pos: usize,
    context: ContextTracker,
    eof_reported: bool,
    _taxonomy: PhantomData<fn() -> T>,
}

impl<'a, T: Taxonomy> Lexer<'a, T> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            scanner: RawScanner::new(Cursor::new(source), T::SCAN),
            pos: 0,
            context: ContextTracker::new(),
            eof_reported: false,
            _taxonomy: PhantomData,
        }
    }

    /// Produce the next token, or `Ok(None)` once at end of input.
    ///
    /// Malformed input never fails; it comes back as a token with
    /// [`Token::malformed`] set. Calling again after `Ok(None)` is a
    /// contract violation.
    pub fn next_token(&mut self) -> Result<Option<Token<'a, T::Type>>, LexError> {
        if self.eof_reported {
            return Err(ContractViolation::ScanPastEof { offset: self.pos }.into());
        }

        let raw = self.scanner.next_token();
        let Some((lexeme, malformed)) = convert(raw.tag) else {
            self.eof_reported = true;
            return Ok(None);
        };

        let start = self.pos;
        let end = start + raw.len;
        let text = self.source.get(start..end).unwrap_or_default();
        self.pos = end;

        let (lexeme, malformed) = self.refine(lexeme, malformed, text);
        if let Some(kind) = malformed {
            tracing::trace!(taxonomy = T::NAME, start, end, %kind, "recovered malformed lexeme");
        }

        Ok(Some(Token {
            ty: T::token_type(lexeme),
            start,
            len: raw.len,
            text,
            malformed,
        }))
    }

    /// Resolve keywords and identifier roles, validate escapes, and feed
    /// the context tracker.
    fn refine(
        &mut self,
        lexeme: Lexeme,
        malformed: Option<Malformed>,
        text: &str,
    ) -> (Lexeme, Option<Malformed>) {
        match lexeme {
            Lexeme::Ident(_) => {
                if let Some(kw) = keywords::lookup(text) {
                    self.context.keyword(kw);
                    return (Lexeme::Keyword(kw), malformed);
                }
                let rest = self.source.get(self.pos..).unwrap_or_default();
                let role = self.context.ident(text, rest);
                (Lexeme::Ident(role), malformed)
            }
            Lexeme::String | Lexeme::Char => {
                self.context.other(lexeme, text);
                let malformed = malformed.or_else(|| {
                    find_invalid_escape(text).map(|_| Malformed::InvalidEscape)
                });
                (lexeme, malformed)
            }
            _ if lexeme.is_trivia() => (lexeme, malformed),
            _ => {
                self.context.other(lexeme, text);
                (lexeme, malformed)
            }
        }
    }

    /// Byte offset of the next token.
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// `true` once `next_token` has returned `Ok(None)`.
    pub fn is_finished(&self) -> bool {
        self.eof_reported
    }

    pub fn source(&self) -> &'a str {
        self.source
    }
}

// Manual impls: `T` is a marker and need not be `Clone` or `Debug`.
impl<T: Taxonomy> Clone for Lexer<'_, T> {
    fn clone(&self) -> Self {
        Self {
            source: self.source,
            scanner: self.scanner.clone(),
            pos: self.pos,
            context: self.context.clone(),
            eof_reported: self.eof_reported,
            _taxonomy: PhantomData,
        }
    }
}

impl<T: Taxonomy> fmt::Debug for Lexer<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lexer")
            .field("taxonomy", &T::NAME)
            .field("pos", &self.pos)
            .field("len", &self.source.len())
            .field("eof_reported", &self.eof_reported)
            .finish_non_exhaustive()
    }
}

/// Lazy token stream over one source buffer.
///
/// Finite and fused. Cloning snapshots the scan: the clone resumes from the
/// same position and yields the same remaining tokens.
pub struct Tokens<'a, T: Taxonomy> {
    lexer: Lexer<'a, T>,
}

impl<T: Taxonomy> Tokens<'_, T> {
    /// Byte offset of the next token.
    pub fn offset(&self) -> usize {
        self.lexer.offset()
    }
}

impl<'a, T: Taxonomy> Iterator for Tokens<'a, T> {
    type Item = Token<'a, T::Type>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.lexer.is_finished() {
            return None;
        }
        // The only error is ScanPastEof, ruled out above.
        self.lexer.next_token().ok().flatten()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.lexer.is_finished() {
            (0, Some(0))
        } else {
            let remaining = self.lexer.source.len() - self.lexer.pos;
            (usize::from(remaining > 0), Some(remaining))
        }
    }
}

impl<T: Taxonomy> FusedIterator for Tokens<'_, T> {}

impl<T: Taxonomy> Clone for Tokens<'_, T> {
    fn clone(&self) -> Self {
        Self {
            lexer: self.lexer.clone(),
        }
    }
}

impl<T: Taxonomy> fmt::Debug for Tokens<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tokens").field("lexer", &self.lexer).finish()
    }
}

/// Tokenize `source` with taxonomy `T`.
///
/// Concatenating the text of every yielded token reproduces `source`.
pub fn tokenize<T: Taxonomy>(source: &str) -> Tokens<'_, T> {
    Tokens {
        lexer: Lexer::new(source),
    }
}

/// Every malformed lexeme in `source`, in order.
pub fn malformed_lexemes<T: Taxonomy>(source: &str) -> Vec<LexError> {
    tokenize::<T>(source).filter_map(|tok| tok.error()).collect()
}

/// Spans of characters no lexeme accepts, such as `@` or `#`.
///
/// These are valid tokens of the taxonomy's bad-character type, not
/// malformed lexemes.
pub fn unknown_characters<T: Taxonomy>(source: &str) -> Vec<Span> {
    let unknown = T::token_type(Lexeme::Unknown);
    tokenize::<T>(source)
        .filter(|tok| tok.ty == unknown)
        .map(|tok| tok.span())
        .collect()
}
