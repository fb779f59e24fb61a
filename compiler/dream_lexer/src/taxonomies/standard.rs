//! Second revision: operator families and punctuation.

use std::sync::OnceLock;

use dream_lexer_core::ScanFeatures;

use crate::category::DisplayCategory;
use crate::lexeme::{Delimiter, Lexeme, OperatorFamily, Punct};
use crate::registry::ClassificationTable;
use crate::taxonomy::Taxonomy;

super::token_types! {
    /// Token types of the [`Standard`] taxonomy.
    pub enum StandardType {
        Keyword => "KEYWORD",
        OperatorArithmetic => "OPERATOR_ARITHMETIC",
        OperatorBitwise => "OPERATOR_BITWISE",
        OperatorComparison => "OPERATOR_COMPARISON",
        OperatorLogical => "OPERATOR_LOGICAL",
        OperatorAssignment => "OPERATOR_ASSIGNMENT",
        OperatorConditional => "OPERATOR_CONDITIONAL",
        OperatorArrow => "OPERATOR_ARROW",
        /// `:` and `::`
        Operator => "OPERATOR",
        Semicolon => "SEMICOLON",
        Comma => "COMMA",
        Dot => "DOT",
        /// `(` and `)`
        Paren => "PAREN",
        /// `{` and `}`
        Brace => "BRACE",
        /// `[` and `]`
        Bracket => "BRACKET",
        Char => "CHAR",
        DocComment => "DOC_COMMENT",
        Identifier => "IDENTIFIER",
        Number => "NUMBER",
        String => "STRING",
        LineComment => "LINE_COMMENT",
        BlockComment => "BLOCK_COMMENT",
        Whitespace => "WHITESPACE",
        BadCharacter => "BAD_CHARACTER",
    }
    trivia: Whitespace | LineComment | BlockComment | DocComment;
}

/// The default taxonomy: one keyword type, operators split by family.
#[derive(Clone, Copy, Debug, Default)]
pub struct Standard;

fn operator_type(family: OperatorFamily) -> StandardType {
    match family {
        OperatorFamily::Arithmetic => StandardType::OperatorArithmetic,
        OperatorFamily::Bitwise => StandardType::OperatorBitwise,
        OperatorFamily::Comparison => StandardType::OperatorComparison,
        OperatorFamily::Logical => StandardType::OperatorLogical,
        OperatorFamily::Assignment => StandardType::OperatorAssignment,
        OperatorFamily::Conditional => StandardType::OperatorConditional,
        OperatorFamily::Arrow => StandardType::OperatorArrow,
        OperatorFamily::Other => StandardType::Operator,
    }
}

impl Taxonomy for Standard {
    type Type = StandardType;

    const NAME: &'static str = "standard";
    const VERSION: u32 = 2;
    const SCAN: ScanFeatures = ScanFeatures::all();

    fn token_type(lexeme: Lexeme) -> StandardType {
        match lexeme {
            Lexeme::Whitespace => StandardType::Whitespace,
            Lexeme::LineComment => StandardType::LineComment,
            Lexeme::BlockComment => StandardType::BlockComment,
            Lexeme::DocComment => StandardType::DocComment,
            Lexeme::String => StandardType::String,
            Lexeme::Char => StandardType::Char,
            Lexeme::Number => StandardType::Number,
            Lexeme::Keyword(_) => StandardType::Keyword,
            Lexeme::Ident(_) => StandardType::Identifier,
            Lexeme::Operator(family) => operator_type(family),
            Lexeme::Punct(Punct::Semicolon) => StandardType::Semicolon,
            Lexeme::Punct(Punct::Comma) => StandardType::Comma,
            Lexeme::Punct(Punct::Dot) => StandardType::Dot,
            Lexeme::Open(Delimiter::Paren) | Lexeme::Close(Delimiter::Paren) => {
                StandardType::Paren
            }
            Lexeme::Open(Delimiter::Brace) | Lexeme::Close(Delimiter::Brace) => {
                StandardType::Brace
            }
            Lexeme::Open(Delimiter::Bracket) | Lexeme::Close(Delimiter::Bracket) => {
                StandardType::Bracket
            }
            Lexeme::Unknown => StandardType::BadCharacter,
        }
    }

    fn categories(ty: StandardType) -> &'static [DisplayCategory] {
        use DisplayCategory as C;
        match ty {
            StandardType::Keyword => &[C::Keyword],
            StandardType::OperatorArithmetic => &[C::OperatorArithmetic, C::OperationSign],
            StandardType::OperatorBitwise => &[C::OperatorBitwise, C::OperationSign],
            StandardType::OperatorComparison => &[C::OperatorComparison, C::OperationSign],
            StandardType::OperatorLogical => &[C::OperatorLogical, C::OperationSign],
            StandardType::OperatorAssignment => &[C::OperatorAssignment, C::OperationSign],
            StandardType::OperatorConditional => &[C::OperatorConditional, C::OperationSign],
            StandardType::OperatorArrow => &[C::OperatorArrow, C::OperationSign],
            StandardType::Operator => &[C::OperationSign],
            StandardType::Semicolon => &[C::Semicolon],
            StandardType::Comma => &[C::Comma],
            StandardType::Dot => &[C::Dot],
            StandardType::Paren => &[C::Paren],
            StandardType::Brace => &[C::Brace],
            StandardType::Bracket => &[C::Bracket],
            StandardType::Char => &[C::Char, C::String],
            StandardType::DocComment => &[C::DocComment, C::Comment],
            StandardType::Identifier => &[C::Identifier],
            StandardType::Number => &[C::Number],
            StandardType::String => &[C::String],
            StandardType::LineComment | StandardType::BlockComment => &[C::Comment],
            StandardType::BadCharacter => &[C::BadCharacter],
            StandardType::Whitespace => &[],
        }
    }

    fn registry() -> &'static ClassificationTable<StandardType> {
        static TABLE: OnceLock<ClassificationTable<StandardType>> = OnceLock::new();
        TABLE.get_or_init(ClassificationTable::build::<Self>)
    }
}
