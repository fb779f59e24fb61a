//! Taxonomy-neutral lexeme kinds.
//!
//! A [`Lexeme`] is what the taxonomy layer knows about a token before a
//! taxonomy names it: raw shape plus resolved keyword and identifier role.
//! Every taxonomy maps the full `Lexeme` space onto its own token types with
//! one exhaustive `match`, so recovery rules live here once instead of once
//! per taxonomy.

use crate::context::IdentRole;
use crate::keywords::Keyword;

/// Operator family, as grouped by the highlighter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OperatorFamily {
    /// `+ - * / % ++ -- += -= *= /= %=`
    Arithmetic,
    /// `& | ^ ~ << >> &= |= ^= <<= >>=`
    Bitwise,
    /// `< <= > >= == !=`
    Comparison,
    /// `&& || !`
    Logical,
    /// `=`
    Assignment,
    /// `? ?? ??=`
    Conditional,
    /// `-> =>`
    Arrow,
    /// `: ::`
    Other,
}

/// Bracket pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Delimiter {
    Paren,
    Brace,
    Bracket,
}

/// Separator punctuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Punct {
    Semicolon,
    Comma,
    Dot,
}

/// A classified lexeme, independent of any taxonomy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Lexeme {
    Whitespace,
    LineComment,
    BlockComment,
    /// `///` line or `/** */` block documentation.
    DocComment,
    String,
    Char,
    Number,
    Keyword(Keyword),
    Ident(IdentRole),
    Operator(OperatorFamily),
    Punct(Punct),
    Open(Delimiter),
    Close(Delimiter),
    /// A character no rule accepts.
    Unknown,
}

impl Lexeme {
    pub const fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::Whitespace | Self::LineComment | Self::BlockComment | Self::DocComment
        )
    }
}
