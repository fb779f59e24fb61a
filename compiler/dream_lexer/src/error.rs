//! Lexer error types.
//!
//! Two very different things can go wrong:
//! - user input is malformed ([`Malformed`]), which is always recovered
//!   locally and reported as data on the token;
//! - a caller breaks the API contract ([`ContractViolation`]), which is a
//!   programmer error and fatal to the calling operation.

use std::fmt;

use crate::token::Span;

/// What is wrong with a malformed lexeme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Malformed {
    /// Missing closing `"` before the line break or end of input.
    UnterminatedString,
    /// Missing closing `'` before the line break or end of input.
    UnterminatedChar,
    /// `/*` without a matching `*/`.
    UnterminatedBlockComment,
    /// Escape other than `\n \r \t \\ \" \' \0`.
    InvalidEscape,
    /// `''`
    EmptyChar,
    /// More than one character between single quotes.
    OverlongChar,
    /// Digits running into identifier characters, e.g. `12ab`.
    InvalidNumber,
}

impl Malformed {
    pub const fn message(self) -> &'static str {
        match self {
            Self::UnterminatedString => "unterminated string literal",
            Self::UnterminatedChar => "unterminated character literal",
            Self::UnterminatedBlockComment => "unterminated block comment",
            Self::InvalidEscape => "invalid escape sequence",
            Self::EmptyChar => "empty character literal",
            Self::OverlongChar => "character literal may only contain one character",
            Self::InvalidNumber => "invalid numeric literal",
        }
    }

    /// Short fix-it hint for diagnostics.
    pub const fn help(self) -> &'static str {
        match self {
            Self::UnterminatedString => "add a closing `\"` before the end of the line",
            Self::UnterminatedChar => "add a closing `'` before the end of the line",
            Self::UnterminatedBlockComment => "close the comment with `*/`",
            Self::InvalidEscape => {
                "valid escapes are `\\n`, `\\r`, `\\t`, `\\\\`, `\\\"`, `\\'` and `\\0`"
            }
            Self::EmptyChar => "a character literal needs exactly one character",
            Self::OverlongChar => "use double quotes for a string literal",
            Self::InvalidNumber => "separate the number from the following identifier",
        }
    }
}

impl fmt::Display for Malformed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A broken API contract. Never caused by source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContractViolation {
    /// `Lexer::next_token` was called again after it reported end of input.
    #[error("scanned past end of input at offset {offset} after EOF was reported")]
    ScanPastEof { offset: usize },
    /// A token type is missing from its taxonomy's classification table.
    #[error("token type `{token_type}` is not registered in the `{taxonomy}` classification table")]
    UnregisteredType {
        taxonomy: &'static str,
        token_type: &'static str,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// Recovered malformed lexeme.
    #[error("{kind} at {span}")]
    MalformedLexeme { kind: Malformed, span: Span },
    #[error(transparent)]
    ContractViolation(#[from] ContractViolation),
}

impl LexError {
    /// `true` for programmer errors that must not be retried.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::ContractViolation(_))
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            Self::MalformedLexeme { span, .. } => Some(*span),
            Self::ContractViolation(_) => None,
        }
    }
}
