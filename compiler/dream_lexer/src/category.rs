//! Display categories.
//!
//! A display category is an opaque style tag that presentation layers map to
//! colors. Categories form a shallow inheritance tree through
//! [`DisplayCategory::fallback`]: a theme that does not style
//! `OperatorBitwise` falls back to `OperationSign`, and so on up to a root.

/// Style tag attached to token types by a classification table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DisplayCategory {
    // === Keywords ===
    Keyword,
    KeywordType,
    KeywordOther,
    KeywordLiteral,

    // === Literals ===
    Number,
    String,
    Char,

    // === Comments ===
    Comment,
    DocComment,

    // === Operators ===
    OperationSign,
    OperatorArithmetic,
    OperatorBitwise,
    OperatorComparison,
    OperatorLogical,
    OperatorAssignment,
    OperatorConditional,
    OperatorArrow,

    // === Punctuation ===
    Semicolon,
    Comma,
    Dot,
    Paren,
    Brace,
    Bracket,

    // === Names ===
    Identifier,
    LocalVariable,
    FunctionDeclaration,
    FunctionCall,
    Parameter,
    ClassName,
    ConsoleFunction,

    BadCharacter,
}

impl DisplayCategory {
    /// Every category, in declaration order.
    pub const ALL: &'static [DisplayCategory] = &[
        Self::Keyword,
        Self::KeywordType,
        Self::KeywordOther,
        Self::KeywordLiteral,
        Self::Number,
        Self::String,
        Self::Char,
        Self::Comment,
        Self::DocComment,
        Self::OperationSign,
        Self::OperatorArithmetic,
        Self::OperatorBitwise,
        Self::OperatorComparison,
        Self::OperatorLogical,
        Self::OperatorAssignment,
        Self::OperatorConditional,
        Self::OperatorArrow,
        Self::Semicolon,
        Self::Comma,
        Self::Dot,
        Self::Paren,
        Self::Brace,
        Self::Bracket,
        Self::Identifier,
        Self::LocalVariable,
        Self::FunctionDeclaration,
        Self::FunctionCall,
        Self::Parameter,
        Self::ClassName,
        Self::ConsoleFunction,
        Self::BadCharacter,
    ];

    /// Stable external key, used by themes and serialized color schemes.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Keyword => "DREAM_KEYWORD",
            Self::KeywordType => "DREAM_KEYWORDTYPE",
            Self::KeywordOther => "DREAM_KEYWORDOTHER",
            Self::KeywordLiteral => "DREAM_KEYWORDLITERAL",
            Self::Number => "DREAM_NUMBER",
            Self::String => "DREAM_STRING",
            Self::Char => "DREAM_CHAR",
            Self::Comment => "DREAM_COMMENT",
            Self::DocComment => "DREAM_DOC_COMMENT",
            Self::OperationSign => "DREAM_OPERATOR",
            Self::OperatorArithmetic => "DREAM_OPERATORARITHMETIC",
            Self::OperatorBitwise => "DREAM_OPERATORBITWISE",
            Self::OperatorComparison => "DREAM_OPERATORCOMPARISON",
            Self::OperatorLogical => "DREAM_OPERATORLOGICAL",
            Self::OperatorAssignment => "DREAM_OPERATORASSIGNMENT",
            Self::OperatorConditional => "DREAM_OPERATORCONDITIONAL",
            Self::OperatorArrow => "DREAM_OPERATORARROW",
            Self::Semicolon => "DREAM_SEMICOLON",
            Self::Comma => "DREAM_COMMA",
            Self::Dot => "DREAM_DOT",
            Self::Paren => "DREAM_PAREN",
            Self::Brace => "DREAM_BRACE",
            Self::Bracket => "DREAM_BRACKET",
            Self::Identifier => "DREAM_IDENTIFIER",
            Self::LocalVariable => "DREAM_LOCAL_VARIABLE",
            Self::FunctionDeclaration => "DREAM_FUNCTION_DECLARATION",
            Self::FunctionCall => "DREAM_FUNCTION_CALL",
            Self::Parameter => "DREAM_PARAMETER",
            Self::ClassName => "DREAM_CLASS_NAME",
            Self::ConsoleFunction => "DREAM_CONSOLEFUNCTION",
            Self::BadCharacter => "DREAM_BAD_CHARACTER",
        }
    }

    /// Human-readable label for settings listings.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Keyword => "Keyword",
            Self::KeywordType => "Keyword//Type",
            Self::KeywordOther => "Keyword//Other",
            Self::KeywordLiteral => "Keyword//Literal",
            Self::Number => "Number",
            Self::String => "String",
            Self::Char => "Character",
            Self::Comment => "Comment",
            Self::DocComment => "Comment//Documentation",
            Self::OperationSign => "Operator",
            Self::OperatorArithmetic => "Operator//Arithmetic",
            Self::OperatorBitwise => "Operator//Bitwise",
            Self::OperatorComparison => "Operator//Comparison",
            Self::OperatorLogical => "Operator//Logical",
            Self::OperatorAssignment => "Operator//Assignment",
            Self::OperatorConditional => "Operator//Conditional",
            Self::OperatorArrow => "Operator//Arrow",
            Self::Semicolon => "Semicolon",
            Self::Comma => "Comma",
            Self::Dot => "Dot",
            Self::Paren => "Parentheses",
            Self::Brace => "Braces",
            Self::Bracket => "Brackets",
            Self::Identifier => "Identifier",
            Self::LocalVariable => "Identifier//Local variable",
            Self::FunctionDeclaration => "Function//Declaration",
            Self::FunctionCall => "Function//Call",
            Self::Parameter => "Parameter",
            Self::ClassName => "Class name",
            Self::ConsoleFunction => "Console function",
            Self::BadCharacter => "Bad character",
        }
    }

    /// The more general category a theme should use when this one is unset.
    pub const fn fallback(self) -> Option<DisplayCategory> {
        match self {
            Self::KeywordType | Self::KeywordOther | Self::KeywordLiteral => Some(Self::Keyword),
            Self::Char => Some(Self::String),
            Self::DocComment => Some(Self::Comment),
            Self::OperatorArithmetic
            | Self::OperatorBitwise
            | Self::OperatorComparison
            | Self::OperatorLogical
            | Self::OperatorAssignment
            | Self::OperatorConditional
            | Self::OperatorArrow => Some(Self::OperationSign),
            Self::ConsoleFunction => Some(Self::FunctionCall),
            Self::LocalVariable
            | Self::FunctionDeclaration
            | Self::FunctionCall
            | Self::Parameter
            | Self::ClassName => Some(Self::Identifier),
            Self::Keyword
            | Self::Number
            | Self::String
            | Self::Comment
            | Self::OperationSign
            | Self::Semicolon
            | Self::Comma
            | Self::Dot
            | Self::Paren
            | Self::Brace
            | Self::Bracket
            | Self::Identifier
            | Self::BadCharacter => None,
        }
    }

    /// This category followed by its fallbacks, most specific first.
    pub fn lineage(self) -> impl Iterator<Item = DisplayCategory> {
        std::iter::successors(Some(self), |c| c.fallback())
    }
}
