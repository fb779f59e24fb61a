//! Latest revision: keyword subclasses and identifier roles.

use std::sync::OnceLock;

use dream_lexer_core::ScanFeatures;

use crate::category::DisplayCategory;
use crate::context::IdentRole;
use crate::keywords::KeywordClass;
use crate::lexeme::{Delimiter, Lexeme, OperatorFamily, Punct};
use crate::registry::ClassificationTable;
use crate::taxonomy::Taxonomy;

super::token_types! {
    /// Token types of the [`Extended`] taxonomy.
    pub enum ExtendedType {
        /// Control-flow keywords.
        Keyword => "KEYWORD",
        KeywordType => "KEYWORD_TYPE",
        /// Declarations, modifiers and module keywords.
        KeywordOther => "KEYWORD_OTHER",
        KeywordLiteral => "KEYWORD_LITERAL",
        /// `Console` and its `Write`, `WriteLine`, `ReadLine` members.
        ConsoleFunction => "CONSOLE_FUNCTION",
        FunctionName => "FUNCTION_NAME",
        FunctionCall => "FUNCTION_CALL",
        Parameter => "PARAMETER",
        ClassName => "CLASS_NAME",
        OperatorArithmetic => "OPERATOR_ARITHMETIC",
        OperatorBitwise => "OPERATOR_BITWISE",
        OperatorComparison => "OPERATOR_COMPARISON",
        OperatorLogical => "OPERATOR_LOGICAL",
        OperatorAssignment => "OPERATOR_ASSIGNMENT",
        OperatorConditional => "OPERATOR_CONDITIONAL",
        OperatorArrow => "OPERATOR_ARROW",
        Operator => "OPERATOR",
        Semicolon => "SEMICOLON",
        Comma => "COMMA",
        Dot => "DOT",
        Paren => "PAREN",
        Brace => "BRACE",
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

/// Everything in [`Standard`](super::Standard), plus keyword subclasses and
/// identifier roles resolved from local context.
#[derive(Clone, Copy, Debug, Default)]
pub struct Extended;

impl Taxonomy for Extended {
    type Type = ExtendedType;

    const NAME: &'static str = "extended";
    const VERSION: u32 = 3;
    const SCAN: ScanFeatures = ScanFeatures::all();

    fn token_type(lexeme: Lexeme) -> ExtendedType {
        match lexeme {
            Lexeme::Whitespace => ExtendedType::Whitespace,
            Lexeme::LineComment => ExtendedType::LineComment,
            Lexeme::BlockComment => ExtendedType::BlockComment,
            Lexeme::DocComment => ExtendedType::DocComment,
            Lexeme::String => ExtendedType::String,
            Lexeme::Char => ExtendedType::Char,
            Lexeme::Number => ExtendedType::Number,
            Lexeme::Keyword(kw) => match kw.class() {
                KeywordClass::Control => ExtendedType::Keyword,
                KeywordClass::Type => ExtendedType::KeywordType,
                KeywordClass::Declaration => ExtendedType::KeywordOther,
                KeywordClass::Literal => ExtendedType::KeywordLiteral,
            },
            Lexeme::Ident(role) => match role {
                IdentRole::Plain => ExtendedType::Identifier,
                IdentRole::FunctionName => ExtendedType::FunctionName,
                IdentRole::FunctionCall => ExtendedType::FunctionCall,
                IdentRole::Parameter => ExtendedType::Parameter,
                IdentRole::ClassName => ExtendedType::ClassName,
                IdentRole::ConsoleObject | IdentRole::ConsoleMember => {
                    ExtendedType::ConsoleFunction
                }
            },
            Lexeme::Operator(family) => match family {
                OperatorFamily::Arithmetic => ExtendedType::OperatorArithmetic,
                OperatorFamily::Bitwise => ExtendedType::OperatorBitwise,
                OperatorFamily::Comparison => ExtendedType::OperatorComparison,
                OperatorFamily::Logical => ExtendedType::OperatorLogical,
                OperatorFamily::Assignment => ExtendedType::OperatorAssignment,
                OperatorFamily::Conditional => ExtendedType::OperatorConditional,
                OperatorFamily::Arrow => ExtendedType::OperatorArrow,
                OperatorFamily::Other => ExtendedType::Operator,
            },
            Lexeme::Punct(Punct::Semicolon) => ExtendedType::Semicolon,
            Lexeme::Punct(Punct::Comma) => ExtendedType::Comma,
            Lexeme::Punct(Punct::Dot) => ExtendedType::Dot,
            Lexeme::Open(delim) | Lexeme::Close(delim) => match delim {
                Delimiter::Paren => ExtendedType::Paren,
                Delimiter::Brace => ExtendedType::Brace,
                Delimiter::Bracket => ExtendedType::Bracket,
            },
            Lexeme::Unknown => ExtendedType::BadCharacter,
        }
    }

    fn categories(ty: ExtendedType) -> &'static [DisplayCategory] {
        use DisplayCategory as C;
        match ty {
            ExtendedType::Keyword => &[C::Keyword],
            ExtendedType::KeywordType => &[C::KeywordType, C::Keyword],
            ExtendedType::KeywordOther => &[C::KeywordOther, C::Keyword],
            ExtendedType::KeywordLiteral => &[C::KeywordLiteral, C::Keyword],
            ExtendedType::ConsoleFunction => &[C::ConsoleFunction, C::FunctionCall],
            ExtendedType::FunctionName => &[C::FunctionDeclaration, C::Identifier],
            ExtendedType::FunctionCall => &[C::FunctionCall, C::Identifier],
            ExtendedType::Parameter => &[C::Parameter, C::Identifier],
            ExtendedType::ClassName => &[C::ClassName, C::Identifier],
            ExtendedType::OperatorArithmetic => &[C::OperatorArithmetic, C::OperationSign],
            ExtendedType::OperatorBitwise => &[C::OperatorBitwise, C::OperationSign],
            ExtendedType::OperatorComparison => &[C::OperatorComparison, C::OperationSign],
            ExtendedType::OperatorLogical => &[C::OperatorLogical, C::OperationSign],
            ExtendedType::OperatorAssignment => &[C::OperatorAssignment, C::OperationSign],
            ExtendedType::OperatorConditional => &[C::OperatorConditional, C::OperationSign],
            ExtendedType::OperatorArrow => &[C::OperatorArrow, C::OperationSign],
            ExtendedType::Operator => &[C::OperationSign],
            ExtendedType::Semicolon => &[C::Semicolon],
            ExtendedType::Comma => &[C::Comma],
            ExtendedType::Dot => &[C::Dot],
            ExtendedType::Paren => &[C::Paren],
            ExtendedType::Brace => &[C::Brace],
            ExtendedType::Bracket => &[C::Bracket],
            ExtendedType::Char => &[C::Char, C::String],
            ExtendedType::DocComment => &[C::DocComment, C::Comment],
            ExtendedType::Identifier => &[C::Identifier, C::LocalVariable],
            ExtendedType::Number => &[C::Number],
            ExtendedType::String => &[C::String],
            ExtendedType::LineComment | ExtendedType::BlockComment => &[C::Comment],
            ExtendedType::BadCharacter => &[C::BadCharacter],
            ExtendedType::Whitespace => &[],
        }
    }

    fn registry() -> &'static ClassificationTable<ExtendedType> {
        static TABLE: OnceLock<ClassificationTable<ExtendedType>> = OnceLock::new();
        TABLE.get_or_init(ClassificationTable::build::<Self>)
    }
}
