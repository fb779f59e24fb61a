//! First revision: keywords, literals and comments, nothing finer.

use std::sync::OnceLock;

use dream_lexer_core::ScanFeatures;

use crate::category::DisplayCategory;
use crate::lexeme::{Lexeme, Punct};
use crate::registry::ClassificationTable;
use crate::taxonomy::Taxonomy;

super::token_types! {
    /// Token types of the [`Basic`] taxonomy.
    pub enum BasicType {
        Keyword => "KEYWORD",
        Number => "NUMBER",
        String => "STRING",
        LineComment => "LINE_COMMENT",
        BlockComment => "BLOCK_COMMENT",
        Comma => "COMMA",
        Identifier => "IDENTIFIER",
        /// Every operator, bracket and punctuation lexeme except `,`.
        Operator => "OPERATOR",
        Whitespace => "WHITESPACE",
        BadCharacter => "BAD_CHARACTER",
    }
    trivia: Whitespace | LineComment | BlockComment;
}

/// Four display categories: keyword, number, string, comment.
///
/// Scans neither character literals nor doc comments; `'` is a bad
/// character and `///` an ordinary line comment.
#[derive(Clone, Copy, Debug, Default)]
pub struct Basic;

impl Taxonomy for Basic {
    type Type = BasicType;

    const NAME: &'static str = "basic";
    const VERSION: u32 = 1;
    const SCAN: ScanFeatures = ScanFeatures::empty();

    fn token_type(lexeme: Lexeme) -> BasicType {
        match lexeme {
            Lexeme::Whitespace => BasicType::Whitespace,
            Lexeme::LineComment => BasicType::LineComment,
            // Doc comments are not scanned here
            Lexeme::BlockComment | Lexeme::DocComment => BasicType::BlockComment,
            Lexeme::String | Lexeme::Char => BasicType::String,
            Lexeme::Number => BasicType::Number,
            Lexeme::Keyword(_) => BasicType::Keyword,
            Lexeme::Ident(_) => BasicType::Identifier,
            Lexeme::Punct(Punct::Comma) => BasicType::Comma,
            Lexeme::Operator(_)
            | Lexeme::Punct(Punct::Semicolon | Punct::Dot)
            | Lexeme::Open(_)
            | Lexeme::Close(_) => BasicType::Operator,
            Lexeme::Unknown => BasicType::BadCharacter,
        }
    }

    fn categories(ty: BasicType) -> &'static [DisplayCategory] {
        use DisplayCategory as C;
        match ty {
            BasicType::Keyword => &[C::Keyword],
            BasicType::Number => &[C::Number],
            BasicType::String => &[C::String],
            BasicType::LineComment | BasicType::BlockComment => &[C::Comment],
            BasicType::Comma
            | BasicType::Identifier
            | BasicType::Operator
            | BasicType::Whitespace
            | BasicType::BadCharacter => &[],
        }
    }

    fn registry() -> &'static ClassificationTable<BasicType> {
        static TABLE: OnceLock<ClassificationTable<BasicType>> = OnceLock::new();
        TABLE.get_or_init(ClassificationTable::build::<Self>)
    }
}
