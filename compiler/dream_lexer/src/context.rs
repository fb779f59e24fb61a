//! Identifier roles from local context.
//!
//! Some taxonomies distinguish a function's declared name from a call site,
//! a parameter from a class name, and the `Console` API from ordinary
//! identifiers. None of that needs a parser: a few tokens of left context
//! plus one byte of right lookahead decide it.
//!
//! Rules, in priority order:
//! 1. `Write`, `WriteLine`, `ReadLine` right after `Console.` are console
//!    members; `Console` followed by `.` is the console object.
//! 2. The identifier after `func` and its return type is the function
//!    name. The return type may be keywords, a user type, or a generic such
//!    as `Task<Point>`; identifiers in it are class names.
//! 3. The first identifier after `class` or `struct` is a class name.
//! 4. Directly inside a declaration's parameter list, an identifier followed
//!    by another identifier is a type name; otherwise it is a parameter.
//! 5. An identifier whose next non-blank byte on the same line is `(` is a
//!    call.
//!
//! The lookahead skips spaces and tabs but not line breaks, so `foo\n(` is a
//! plain identifier.

use crate::keywords::Keyword;
use crate::lexeme::{Delimiter, Lexeme, Punct};

/// Role of an identifier within its surrounding tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IdentRole {
    Plain,
    /// Name being declared after `func`.
    FunctionName,
    /// Identifier directly followed by `(`.
    FunctionCall,
    /// Parameter name inside a `func` parameter list.
    Parameter,
    /// Name after `class`/`struct`, or a parameter's type.
    ClassName,
    /// `Console` in `Console.`
    ConsoleObject,
    /// `Write`, `WriteLine` or `ReadLine` after `Console.`
    ConsoleMember,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
enum Expect {
    #[default]
    Nothing,
    /// Saw `func`.
    FunctionName,
    /// Saw the function name; the next `(` opens the parameter list.
    ParamList,
    /// Saw `class` or `struct`.
    ClassName,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
enum Console {
    #[default]
    Idle,
    /// Saw `Console`.
    Object,
    /// Saw `Console.`
    Dot,
}

const CONSOLE_MEMBERS: &[&str] = &["Write", "WriteLine", "ReadLine"];

/// Left-context state carried between significant tokens.
///
/// Trivia must not be fed to the tracker.
#[derive(Clone, Debug, Default)]
pub(crate) struct ContextTracker {
    expect: Expect,
    console: Console,
    /// Paren depth inside a declaration's parameter list; 0 outside.
    param_depth: u32,
    /// `<` nesting of a generic return type between `func` and the name.
    angle_depth: u32,
}

/// First byte after `rest`'s leading spaces and tabs, or 0.
fn next_on_line(rest: &str) -> u8 {
    rest.bytes()
        .find(|b| !matches!(b, b' ' | b'\t'))
        .unwrap_or(0)
}

impl ContextTracker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Decide the role of identifier `text`; `rest` is the source after it.
    pub(crate) fn ident(&mut self, text: &str, rest: &str) -> IdentRole {
        let next = next_on_line(rest);
        let console = std::mem::take(&mut self.console);

        if console == Console::Dot && CONSOLE_MEMBERS.contains(&text) {
            self.expect = Expect::Nothing;
            return IdentRole::ConsoleMember;
        }
        if text == "Console" && next == b'.' {
            self.console = Console::Object;
            self.expect = Expect::Nothing;
            return IdentRole::ConsoleObject;
        }

        match self.expect {
            // Return type: inside `<..>`, or followed by `<` or by the name
            Expect::FunctionName
                if self.angle_depth > 0
                    || next == b'<'
                    || dream_lexer_core::is_ident_start(next) =>
            {
                return IdentRole::ClassName;
            }
            Expect::FunctionName => {
                self.expect = Expect::ParamList;
                return IdentRole::FunctionName;
            }
            Expect::ClassName => {
                self.expect = Expect::Nothing;
                return IdentRole::ClassName;
            }
            Expect::ParamList | Expect::Nothing => self.expect = Expect::Nothing,
        }

        if self.param_depth == 1 {
            return if dream_lexer_core::is_ident_start(next) {
                IdentRole::ClassName
            } else {
                IdentRole::Parameter
            };
        }
        if next == b'(' {
            IdentRole::FunctionCall
        } else {
            IdentRole::Plain
        }
    }

    pub(crate) fn keyword(&mut self, kw: Keyword) {
        self.console = Console::Idle;
        self.expect = match (kw, self.expect) {
            (Keyword::Func, _) => Expect::FunctionName,
            (Keyword::Class | Keyword::Struct, _) => Expect::ClassName,
            // Return type and modifiers between `func` and the name
            (_, Expect::FunctionName) => Expect::FunctionName,
            _ => Expect::Nothing,
        };
        if kw == Keyword::Func || self.expect != Expect::FunctionName {
            self.angle_depth = 0;
        }
    }

    /// Any significant lexeme other than keywords and identifiers; `text` is
    /// its source text.
    pub(crate) fn other(&mut self, lexeme: Lexeme, text: &str) {
        let console = std::mem::take(&mut self.console);
        if self.expect == Expect::FunctionName && self.generic_return_type(text) {
            return;
        }
        match lexeme {
            Lexeme::Punct(Punct::Dot) if console == Console::Object => {
                self.console = Console::Dot;
            }
            Lexeme::Open(Delimiter::Paren) => {
                if self.expect == Expect::ParamList {
                    self.param_depth = 1;
                } else if self.param_depth > 0 {
                    self.param_depth += 1;
                }
            }
            Lexeme::Close(Delimiter::Paren) => {
                self.param_depth = self.param_depth.saturating_sub(1);
            }
            _ => {}
        }
        self.expect = Expect::Nothing;
        self.angle_depth = 0;
    }

    /// Track `<`, `>`, `>>` and `,` of a generic return type:
    /// `func Map<string, List<int>> load()`.
    fn generic_return_type(&mut self, text: &str) -> bool {
        match text {
            "<" => self.angle_depth += 1,
            ">" | ">>" if self.angle_depth > 0 => {
                let closed = u32::try_from(text.len()).unwrap_or(u32::MAX);
                self.angle_depth = self.angle_depth.saturating_sub(closed);
            }
            "," if self.angle_depth > 0 => {}
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests;
