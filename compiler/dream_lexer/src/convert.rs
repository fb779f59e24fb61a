//! Raw tag conversion.
//!
//! Maps each `RawTag` from the scanner onto a [`Lexeme`], turning error tags
//! into the best-effort lexeme they recover to plus the [`Malformed`] kind.
//! Identifiers come out as `Ident(Plain)`; keyword and role resolution need
//! the token text and happen in the lexer.

use dream_lexer_core::RawTag;

use crate::context::IdentRole;
use crate::error::Malformed;
use crate::lexeme::{Delimiter, Lexeme, OperatorFamily, Punct};

/// Convert a raw tag. Returns `None` for `Eof`.
pub(crate) fn convert(tag: RawTag) -> Option<(Lexeme, Option<Malformed>)> {
    use OperatorFamily::{Arithmetic, Arrow, Assignment, Bitwise, Comparison, Conditional, Logical};

    let lexeme = match tag {
        RawTag::Ident => Lexeme::Ident(IdentRole::Plain),
        RawTag::Number => Lexeme::Number,
        RawTag::String => Lexeme::String,
        RawTag::Char => Lexeme::Char,

        RawTag::Plus
        | RawTag::Minus
        | RawTag::Star
        | RawTag::Slash
        | RawTag::Percent
        | RawTag::PlusPlus
        | RawTag::MinusMinus
        | RawTag::PlusEqual
        | RawTag::MinusEqual
        | RawTag::StarEqual
        | RawTag::SlashEqual
        | RawTag::PercentEqual => Lexeme::Operator(Arithmetic),

        RawTag::Ampersand
        | RawTag::Pipe
        | RawTag::Caret
        | RawTag::Tilde
        | RawTag::Shl
        | RawTag::Shr
        | RawTag::AmpersandEqual
        | RawTag::PipeEqual
        | RawTag::CaretEqual
        | RawTag::ShlEqual
        | RawTag::ShrEqual => Lexeme::Operator(Bitwise),

        RawTag::Less
        | RawTag::LessEqual
        | RawTag::Greater
        | RawTag::GreaterEqual
        | RawTag::EqualEqual
        | RawTag::BangEqual => Lexeme::Operator(Comparison),

        RawTag::AmpersandAmpersand | RawTag::PipePipe | RawTag::Bang => {
            Lexeme::Operator(Logical)
        }

        RawTag::Equal => Lexeme::Operator(Assignment),
        RawTag::Question | RawTag::QuestionQuestion | RawTag::QuestionQuestionEqual => {
            Lexeme::Operator(Conditional)
        }
        RawTag::Arrow | RawTag::FatArrow => Lexeme::Operator(Arrow),
        RawTag::Colon | RawTag::ColonColon => Lexeme::Operator(OperatorFamily::Other),

        RawTag::LeftParen => Lexeme::Open(Delimiter::Paren),
        RawTag::RightParen => Lexeme::Close(Delimiter::Paren),
        RawTag::LeftBrace => Lexeme::Open(Delimiter::Brace),
        RawTag::RightBrace => Lexeme::Close(Delimiter::Brace),
        RawTag::LeftBracket => Lexeme::Open(Delimiter::Bracket),
        RawTag::RightBracket => Lexeme::Close(Delimiter::Bracket),
        RawTag::Semicolon => Lexeme::Punct(Punct::Semicolon),
        RawTag::Comma => Lexeme::Punct(Punct::Comma),
        RawTag::Dot => Lexeme::Punct(Punct::Dot),

        RawTag::Whitespace => Lexeme::Whitespace,
        RawTag::LineComment => Lexeme::LineComment,
        RawTag::DocLineComment | RawTag::DocBlockComment => Lexeme::DocComment,
        RawTag::BlockComment => Lexeme::BlockComment,

        // Errors recover to the lexeme they were trying to be
        RawTag::InvalidChar => Lexeme::Unknown,
        RawTag::UnterminatedString => {
            return Some((Lexeme::String, Some(Malformed::UnterminatedString)))
        }
        RawTag::UnterminatedChar => return Some((Lexeme::Char, Some(Malformed::UnterminatedChar))),
        RawTag::UnterminatedBlockComment => {
            return Some((
                Lexeme::BlockComment,
                Some(Malformed::UnterminatedBlockComment),
            ))
        }
        RawTag::UnterminatedDocComment => {
            return Some((Lexeme::DocComment, Some(Malformed::UnterminatedBlockComment)))
        }
        RawTag::EmptyChar => return Some((Lexeme::Char, Some(Malformed::EmptyChar))),
        RawTag::OverlongChar => return Some((Lexeme::Char, Some(Malformed::OverlongChar))),
        RawTag::InvalidNumber => return Some((Lexeme::Number, Some(Malformed::InvalidNumber))),

        RawTag::Eof => return None,
    };
    Some((lexeme, None))
}
