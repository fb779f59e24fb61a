//! Reserved word table.
//!
//! Keywords are resolved after the identifier scan: the raw scanner emits
//! `Ident` for every word and the taxonomy layer looks the exact text up
//! here. `returnValue` is therefore one identifier, never `return` + `Value`.
//!
//! The lookup uses the word's length as a first-pass filter (keywords range
//! from 2-10 chars), then matches against the keywords of that length.

/// Grouping used by taxonomies that split keywords into subcategories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeywordClass {
    /// Control flow: `if`, `while`, `return`, `try`, ...
    Control,
    /// Built-in type names: `int`, `string`, `void`, ...
    Type,
    /// Declarations, modifiers and modules: `class`, `func`, `import`, ...
    Declaration,
    /// `true` and `false`.
    Literal,
}

/// A reserved word of the Dream language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Keyword {
    // === Control ===
    If,
    Else,
    While,
    For,
    Do,
    Break,
    Continue,
    Return,
    Switch,
    Case,
    Default,
    Try,
    Catch,
    Finally,
    Throw,

    // === Types ===
    Int,
    String,
    Bool,
    Float,
    Char,
    Void,

    // === Declarations ===
    Class,
    Struct,
    Static,
    New,
    Func,
    Var,
    Let,
    Base,
    Using,
    Import,
    Module,
    Export,
    Async,
    Await,
    Task,
    TaskResult,

    // === Literals ===
    True,
    False,
}

impl Keyword {
    /// Every keyword, in declaration order.
    pub const ALL: &'static [Keyword] = &[
        Self::If,
        Self::Else,
        Self::While,
        Self::For,
        Self::Do,
        Self::Break,
        Self::Continue,
        Self::Return,
        Self::Switch,
        Self::Case,
        Self::Default,
        Self::Try,
        Self::Catch,
        Self::Finally,
        Self::Throw,
        Self::Int,
        Self::String,
        Self::Bool,
        Self::Float,
        Self::Char,
        Self::Void,
        Self::Class,
        Self::Struct,
        Self::Static,
        Self::New,
        Self::Func,
        Self::Var,
        Self::Let,
        Self::Base,
        Self::Using,
        Self::Import,
        Self::Module,
        Self::Export,
        Self::Async,
        Self::Await,
        Self::Task,
        Self::TaskResult,
        Self::True,
        Self::False,
    ];

    /// Source spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::If => "if",
            Self::Else => "else",
            Self::While => "while",
            Self::For => "for",
            Self::Do => "do",
            Self::Break => "break",
            Self::Continue => "continue",
            Self::Return => "return",
            Self::Switch => "switch",
            Self::Case => "case",
            Self::Default => "default",
            Self::Try => "try",
            Self::Catch => "catch",
            Self::Finally => "finally",
            Self::Throw => "throw",
            Self::Int => "int",
            Self::String => "string",
            Self::Bool => "bool",
            Self::Float => "float",
            Self::Char => "char",
            Self::Void => "void",
            Self::Class => "class",
            Self::Struct => "struct",
            Self::Static => "static",
            Self::New => "new",
            Self::Func => "func",
            Self::Var => "var",
            Self::Let => "let",
            Self::Base => "base",
            Self::Using => "using",
            Self::Import => "import",
            Self::Module => "module",
            Self::Export => "export",
            Self::Async => "async",
            Self::Await => "await",
            Self::Task => "Task",
            Self::TaskResult => "TaskResult",
            Self::True => "true",
            Self::False => "false",
        }
    }

    pub const fn class(self) -> KeywordClass {
        match self {
            Self::If
            | Self::Else
            | Self::While
            | Self::For
            | Self::Do
            | Self::Break
            | Self::Continue
            | Self::Return
            | Self::Switch
            | Self::Case
            | Self::Default
            | Self::Try
            | Self::Catch
            | Self::Finally
            | Self::Throw => KeywordClass::Control,
            Self::Int | Self::String | Self::Bool | Self::Float | Self::Char | Self::Void => {
                KeywordClass::Type
            }
            Self::True | Self::False => KeywordClass::Literal,
            Self::Class
            | Self::Struct
            | Self::Static
            | Self::New
            | Self::Func
            | Self::Var
            | Self::Let
            | Self::Base
            | Self::Using
            | Self::Import
            | Self::Module
            | Self::Export
            | Self::Async
            | Self::Await
            | Self::Task
            | Self::TaskResult => KeywordClass::Declaration,
        }
    }
}

/// Look up a reserved word by its exact text.
///
/// Case-sensitive: `If` is an identifier, `Task` is a keyword.
#[inline]
pub fn lookup(text: &str) -> Option<Keyword> {
    let len = text.len();

    // Guard: all keywords are 2-10 chars and start with ASCII alpha
    if !(2..=10).contains(&len) {
        return None;
    }
    if !text.as_bytes()[0].is_ascii_alphabetic() {
        return None;
    }

    match len {
        2 => match text {
            "if" => Some(Keyword::If),
            "do" => Some(Keyword::Do),
            _ => None,
        },
        3 => match text {
            "for" => Some(Keyword::For),
            "int" => Some(Keyword::Int),
            "let" => Some(Keyword::Let),
            "new" => Some(Keyword::New),
            "try" => Some(Keyword::Try),
            "var" => Some(Keyword::Var),
            _ => None,
        },
        4 => match text {
            "Task" => Some(Keyword::Task),
            "base" => Some(Keyword::Base),
            "bool" => Some(Keyword::Bool),
            "case" => Some(Keyword::Case),
            "char" => Some(Keyword::Char),
            "else" => Some(Keyword::Else),
            "func" => Some(Keyword::Func),
            "true" => Some(Keyword::True),
            "void" => Some(Keyword::Void),
            _ => None,
        },
        5 => match text {
            "async" => Some(Keyword::Async),
            "await" => Some(Keyword::Await),
            "break" => Some(Keyword::Break),
            "catch" => Some(Keyword::Catch),
            "class" => Some(Keyword::Class),
            "false" => Some(Keyword::False),
            "float" => Some(Keyword::Float),
            "throw" => Some(Keyword::Throw),
            "using" => Some(Keyword::Using),
            "while" => Some(Keyword::While),
            _ => None,
        },
        6 => match text {
            "export" => Some(Keyword::Export),
            "import" => Some(Keyword::Import),
            "module" => Some(Keyword::Module),
            "return" => Some(Keyword::Return),
            "static" => Some(Keyword::Static),
            "string" => Some(Keyword::String),
            "struct" => Some(Keyword::Struct),
            "switch" => Some(Keyword::Switch),
            _ => None,
        },
        7 => match text {
            "default" => Some(Keyword::Default),
            "finally" => Some(Keyword::Finally),
            _ => None,
        },
        8 => match text {
            "continue" => Some(Keyword::Continue),
            _ => None,
        },
        10 => match text {
            "TaskResult" => Some(Keyword::TaskResult),
            _ => None,
        },
        _ => None,
    }
}
