//! Raw token tags produced by the scanner.
//!
//! Tags describe lexeme shape only. Keywords are plain `Ident`s here, and
//! malformed lexemes carry dedicated error tags so the cooking layer can
//! recover them without rescanning.

/// Shape of a scanned lexeme.
///
/// Discriminants are grouped into semantic ranges:
///
/// | range     | group                    |
/// |-----------|--------------------------|
/// | 0-15      | identifiers and literals |
/// | 32-79     | operators                |
/// | 80-95     | punctuation and brackets |
/// | 112-119   | trivia                   |
/// | 240-249   | errors                   |
/// | 255       | EOF                      |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RawTag {
    // === Identifiers & Literals ===
    /// `[A-Za-z_][A-Za-z0-9_]*`, keywords included.
    Ident = 0,
    /// `digits ('.' digits)? [fF]?`
    Number = 1,
    /// Terminated `"..."`.
    String = 2,
    /// Terminated `'x'`.
    Char = 3,

    // === Arithmetic operators ===
    /// `+`
    Plus = 32,
    /// `-`
    Minus = 33,
    /// `*`
    Star = 34,
    /// `/`
    Slash = 35,
    /// `%`
    Percent = 36,
    /// `++`
    PlusPlus = 37,
    /// `--`
    MinusMinus = 38,
    /// `+=`
    PlusEqual = 39,
    /// `-=`
    MinusEqual = 40,
    /// `*=`
    StarEqual = 41,
    /// `/=`
    SlashEqual = 42,
    /// `%=`
    PercentEqual = 43,

    // === Bitwise operators ===
    /// `&`
    Ampersand = 44,
    /// `|`
    Pipe = 45,
    /// `^`
    Caret = 46,
    /// `~`
    Tilde = 47,
    /// `<<`
    Shl = 48,
    /// `>>`
    Shr = 49,
    /// `&=`
    AmpersandEqual = 50,
    /// `|=`
    PipeEqual = 51,
    /// `^=`
    CaretEqual = 52,
    /// `<<=`
    ShlEqual = 53,
    /// `>>=`
    ShrEqual = 54,

    // === Comparison operators ===
    /// `<`
    Less = 55,
    /// `<=`
    LessEqual = 56,
    /// `>`
    Greater = 57,
    /// `>=`
    GreaterEqual = 58,
    /// `==`
    EqualEqual = 59,
    /// `!=`
    BangEqual = 60,

    // === Logical operators ===
    /// `&&`
    AmpersandAmpersand = 61,
    /// `||`
    PipePipe = 62,
    /// `!`
    Bang = 63,

    // === Assignment / conditional / arrows ===
    /// `=`
    Equal = 64,
    /// `?`
    Question = 65,
    /// `??`
    QuestionQuestion = 66,
    /// `??=`
    QuestionQuestionEqual = 67,
    /// `->`
    Arrow = 68,
    /// `=>`
    FatArrow = 69,
    /// `:`
    Colon = 70,
    /// `::`
    ColonColon = 71,

    // === Punctuation & brackets ===
    /// `(`
    LeftParen = 80,
    /// `)`
    RightParen = 81,
    /// `{`
    LeftBrace = 82,
    /// `}`
    RightBrace = 83,
    /// `[`
    LeftBracket = 84,
    /// `]`
    RightBracket = 85,
    /// `;`
    Semicolon = 86,
    /// `,`
    Comma = 87,
    /// `.`
    Dot = 88,

    // === Trivia ===
    /// Maximal run of space, tab, `\r` and `\n`.
    Whitespace = 112,
    /// `// ...` up to (not including) the line break.
    LineComment = 113,
    /// `/// ...` (only with `ScanFeatures::DOC_COMMENTS`).
    DocLineComment = 114,
    /// Terminated `/* ... */`.
    BlockComment = 115,
    /// Terminated `/** ... */` (only with `ScanFeatures::DOC_COMMENTS`).
    DocBlockComment = 116,

    // === Errors ===
    /// A single character no rule accepts.
    InvalidChar = 240,
    /// `"...` without a closing quote before the line break or EOF.
    UnterminatedString = 241,
    /// `'...` without a closing quote before the line break or EOF.
    UnterminatedChar = 242,
    /// `/* ...` running to EOF.
    UnterminatedBlockComment = 243,
    /// `/** ...` running to EOF.
    UnterminatedDocComment = 244,
    /// `''`
    EmptyChar = 245,
    /// `'ab'`: more than one character between the quotes.
    OverlongChar = 246,
    /// Digits running straight into identifier characters, e.g. `12ab`.
    InvalidNumber = 247,

    // === Control ===
    /// End of input. Always zero-length.
    Eof = 255,
}

impl RawTag {
    /// Fixed source text for operator and punctuation tags.
    ///
    /// Returns `None` for tags whose text varies (identifiers, literals,
    /// trivia, errors, EOF).
    pub const fn lexeme(self) -> Option<&'static str> {
        let text = match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::PlusPlus => "++",
            Self::MinusMinus => "--",
            Self::PlusEqual => "+=",
            Self::MinusEqual => "-=",
            Self::StarEqual => "*=",
            Self::SlashEqual => "/=",
            Self::PercentEqual => "%=",
            Self::Ampersand => "&",
            Self::Pipe => "|",
            Self::Caret => "^",
            Self::Tilde => "~",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::AmpersandEqual => "&=",
            Self::PipeEqual => "|=",
            Self::CaretEqual => "^=",
            Self::ShlEqual => "<<=",
            Self::ShrEqual => ">>=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::AmpersandAmpersand => "&&",
            Self::PipePipe => "||",
            Self::Bang => "!",
            Self::Equal => "=",
            Self::Question => "?",
            Self::QuestionQuestion => "??",
            Self::QuestionQuestionEqual => "??=",
            Self::Arrow => "->",
            Self::FatArrow => "=>",
            Self::Colon => ":",
            Self::ColonColon => "::",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::LeftBrace => "{",
            Self::RightBrace => "}",
            Self::LeftBracket => "[",
            Self::RightBracket => "]",
            Self::Semicolon => ";",
            Self::Comma => ",",
            Self::Dot => ".",
            Self::Ident
            | Self::Number
            | Self::String
            | Self::Char
            | Self::Whitespace
            | Self::LineComment
            | Self::DocLineComment
            | Self::BlockComment
            | Self::DocBlockComment
            | Self::InvalidChar
            | Self::UnterminatedString
            | Self::UnterminatedChar
            | Self::UnterminatedBlockComment
            | Self::UnterminatedDocComment
            | Self::EmptyChar
            | Self::OverlongChar
            | Self::InvalidNumber
            | Self::Eof => return None,
        };
        Some(text)
    }

    /// Human-readable description, used in diagnostics and debug output.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ident => "identifier",
            Self::Number => "number literal",
            Self::String => "string literal",
            Self::Char => "character literal",
            Self::Whitespace => "whitespace",
            Self::LineComment => "line comment",
            Self::DocLineComment => "doc comment",
            Self::BlockComment => "block comment",
            Self::DocBlockComment => "doc block comment",
            Self::InvalidChar => "invalid character",
            Self::UnterminatedString => "unterminated string literal",
            Self::UnterminatedChar => "unterminated character literal",
            Self::UnterminatedBlockComment => "unterminated block comment",
            Self::UnterminatedDocComment => "unterminated doc comment",
            Self::EmptyChar => "empty character literal",
            Self::OverlongChar => "multi-character literal",
            Self::InvalidNumber => "invalid number literal",
            Self::Eof => "end of file",
            Self::LeftParen
            | Self::RightParen
            | Self::LeftBrace
            | Self::RightBrace
            | Self::LeftBracket
            | Self::RightBracket => "bracket",
            Self::Semicolon | Self::Comma | Self::Dot => "punctuation",
            _ => "operator",
        }
    }

    /// `true` for whitespace and comments.
    pub const fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::Whitespace
                | Self::LineComment
                | Self::DocLineComment
                | Self::BlockComment
                | Self::DocBlockComment
                | Self::UnterminatedBlockComment
                | Self::UnterminatedDocComment
        )
    }

    /// `true` for the error range (240-249).
    pub const fn is_error(self) -> bool {
        matches!(self as u8, 240..=249)
    }
}

/// A scanned lexeme: its shape and byte length.
///
/// The start offset is implicit: it is the sum of all preceding lengths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawToken {
    /// Lexeme shape.
    pub tag: RawTag,
    /// Length in bytes. Zero only for [`RawTag::Eof`].
    pub len: usize,
}
