//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner operates on a [`Cursor`] and produces [`RawToken`] values
//! without heap allocation. It does not resolve keywords or validate escapes;
//! those are deferred to the cooking layer.
//!
//! # Design
//!
//! Main dispatch covers all 256 byte values. Each arm calls a focused method
//! that advances the cursor and returns `RawToken { tag, len }`. Multi-byte
//! operators are resolved longest-prefix-first inside their first-byte arm,
//! so `<<=` never scans as `<<` followed by `=`.

use crate::cursor::Cursor;
use crate::features::ScanFeatures;
use crate::tag::{RawTag, RawToken};

/// `true` for bytes that may start an identifier: `[A-Za-z_]`.
#[inline]
pub fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

/// `true` for bytes that may continue an identifier: `[A-Za-z0-9_]`.
#[inline]
pub fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Pure, allocation-free scanner.
///
/// Produces one token at a time. Error conditions are encoded as `RawTag`
/// variants, not as `Result::Err`.
#[derive(Clone, Debug)]
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
    features: ScanFeatures,
}

impl<'a> RawScanner<'a> {
    /// Create a new scanner from a cursor.
    pub fn new(cursor: Cursor<'a>, features: ScanFeatures) -> Self {
        Self { cursor, features }
    }

    /// The underlying cursor, positioned after the last scanned token.
    pub fn cursor(&self) -> &Cursor<'a> {
        &self.cursor
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the source is exhausted.
    /// Subsequent calls after EOF continue to return `Eof`.
    #[inline]
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 => self.eof(start),
            b' ' | b'\t' | b'\r' | b'\n' => self.whitespace(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start),
            b'0'..=b'9' => self.number(start),
            b'"' => self.string(start),
            b'\'' => self.char_literal(start),
            b'/' => self.slash_or_comment(start),
            b'+' => self.plus(start),
            b'-' => self.minus(start),
            b'*' => self.with_equal(start, RawTag::Star, RawTag::StarEqual),
            b'%' => self.with_equal(start, RawTag::Percent, RawTag::PercentEqual),
            b'^' => self.with_equal(start, RawTag::Caret, RawTag::CaretEqual),
            b'!' => self.with_equal(start, RawTag::Bang, RawTag::BangEqual),
            b'~' => self.single(start, RawTag::Tilde),
            b'=' => self.equal(start),
            b'<' => self.less(start),
            b'>' => self.greater(start),
            b'&' => self.ampersand(start),
            b'|' => self.pipe(start),
            b'?' => self.question(start),
            b':' => self.colon(start),
            b'(' => self.single(start, RawTag::LeftParen),
            b')' => self.single(start, RawTag::RightParen),
            b'{' => self.single(start, RawTag::LeftBrace),
            b'}' => self.single(start, RawTag::RightBrace),
            b'[' => self.single(start, RawTag::LeftBracket),
            b']' => self.single(start, RawTag::RightBracket),
            b';' => self.single(start, RawTag::Semicolon),
            b',' => self.single(start, RawTag::Comma),
            b'.' => self.single(start, RawTag::Dot),
            // Control characters, `# $ @ \ `` ` and DEL, plus non-ASCII lead bytes
            1..=8
            | 11..=12
            | 14..=31
            | b'#'
            | b'$'
            | b'@'
            | b'\\'
            | b'`'
            | 127..=255 => self.invalid_char(start),
        }
    }

    #[inline]
    fn token(&self, start: usize, tag: RawTag) -> RawToken {
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    // ─── EOF ───────────────────────────────────────────────────────

    fn eof(&mut self, start: usize) -> RawToken {
        if self.cursor.is_eof() {
            RawToken {
                tag: RawTag::Eof,
                len: 0,
            }
        } else {
            // Interior null byte
            self.cursor.advance();
            self.token(start, RawTag::InvalidChar)
        }
    }

    fn invalid_char(&mut self, start: usize) -> RawToken {
        self.cursor.advance_char();
        self.token(start, RawTag::InvalidChar)
    }

    // ─── Whitespace ────────────────────────────────────────────────

    #[inline]
    fn whitespace(&mut self, start: usize) -> RawToken {
        self.cursor
            .eat_while(|b| matches!(b, b' ' | b'\t' | b'\r' | b'\n'));
        self.token(start, RawTag::Whitespace)
    }

    // ─── Comments ──────────────────────────────────────────────────

    fn slash_or_comment(&mut self, start: usize) -> RawToken {
        self.cursor.advance(); // consume '/'
        match self.cursor.current() {
            b'/' => self.line_comment(start),
            b'*' => self.block_comment(start),
            b'=' => {
                self.cursor.advance();
                self.token(start, RawTag::SlashEqual)
            }
            _ => self.token(start, RawTag::Slash),
        }
    }

    fn line_comment(&mut self, start: usize) -> RawToken {
        self.cursor.advance(); // consume second '/'
        // `///` is a doc comment, `////` is a plain comment again.
        let is_doc = self.features.contains(ScanFeatures::DOC_COMMENTS)
            && self.cursor.current() == b'/'
            && self.cursor.peek() != b'/';
        self.cursor.eat_until_line_end();
        let tag = if is_doc {
            RawTag::DocLineComment
        } else {
            RawTag::LineComment
        };
        self.token(start, tag)
    }

    fn block_comment(&mut self, start: usize) -> RawToken {
        self.cursor.advance(); // consume '*'
        // `/** x */` is a doc comment; `/**/` and `/***` are plain.
        let is_doc = self.features.contains(ScanFeatures::DOC_COMMENTS)
            && self.cursor.current() == b'*'
            && !matches!(self.cursor.peek(), b'*' | b'/');
        let terminated = self.cursor.eat_past_block_comment_end();
        let tag = match (is_doc, terminated) {
            (false, true) => RawTag::BlockComment,
            (true, true) => RawTag::DocBlockComment,
            (false, false) => RawTag::UnterminatedBlockComment,
            (true, false) => RawTag::UnterminatedDocComment,
        };
        self.token(start, tag)
    }

    // ─── Identifiers ───────────────────────────────────────────────

    #[inline]
    fn identifier(&mut self, start: usize) -> RawToken {
        self.cursor.advance(); // first byte already validated
        self.cursor.eat_while(is_ident_continue);
        self.token(start, RawTag::Ident)
    }

    // ─── Numeric Literals ──────────────────────────────────────────

    fn number(&mut self, start: usize) -> RawToken {
        self.cursor.eat_while(|b| b.is_ascii_digit());

        // Fraction only when a digit follows the dot: `1.` is `1` then `.`
        if self.cursor.current() == b'.' && self.cursor.peek().is_ascii_digit() {
            self.cursor.advance();
            self.cursor.eat_while(|b| b.is_ascii_digit());
        }

        // Optional float suffix: `0.5f`
        if matches!(self.cursor.current(), b'f' | b'F') && !is_ident_continue(self.cursor.peek())
        {
            self.cursor.advance();
        }

        if is_ident_continue(self.cursor.current()) {
            self.cursor.eat_while(is_ident_continue);
            return self.token(start, RawTag::InvalidNumber);
        }
        self.token(start, RawTag::Number)
    }

    // ─── String & Char Literals ────────────────────────────────────

    /// Consume `\` and the escaped character.
    ///
    /// A backslash directly before a line break or EOF escapes nothing; the
    /// caller then sees the break and reports the literal unterminated.
    fn escape(&mut self) {
        self.cursor.advance(); // consume '\'
        if !self.cursor.is_eof() && !matches!(self.cursor.current(), b'\n' | b'\r') {
            self.cursor.advance_char();
        }
    }

    fn string(&mut self, start: usize) -> RawToken {
        self.cursor.advance(); // consume opening '"'
        loop {
            match self.cursor.skip_to_quote_delim(b'"') {
                b'"' => {
                    self.cursor.advance();
                    return self.token(start, RawTag::String);
                }
                b'\\' => self.escape(),
                // Line break or EOF
                _ => return self.token(start, RawTag::UnterminatedString),
            }
        }
    }

    fn char_literal(&mut self, start: usize) -> RawToken {
        if !self.features.contains(ScanFeatures::CHAR_LITERALS) {
            return self.invalid_char(start);
        }
        self.cursor.advance(); // consume opening '\''

        match self.cursor.current() {
            b'\'' => {
                self.cursor.advance();
                return self.token(start, RawTag::EmptyChar);
            }
            b'\n' | b'\r' => return self.token(start, RawTag::UnterminatedChar),
            b'\\' => self.escape(),
            _ if self.cursor.is_eof() => return self.token(start, RawTag::UnterminatedChar),
            _ => self.cursor.advance_char(), // may be multi-byte UTF-8
        }

        if self.cursor.current() == b'\'' {
            self.cursor.advance();
            return self.token(start, RawTag::Char);
        }

        // More than one character: find the closing quote on this line.
        loop {
            match self.cursor.skip_to_quote_delim(b'\'') {
                b'\'' => {
                    self.cursor.advance();
                    return self.token(start, RawTag::OverlongChar);
                }
                b'\\' => self.escape(),
                _ => return self.token(start, RawTag::UnterminatedChar),
            }
        }
    }

    // ─── Operators ─────────────────────────────────────────────────

    /// Single-byte token: advance one byte and emit the given tag.
    fn single(&mut self, start: usize, tag: RawTag) -> RawToken {
        self.cursor.advance();
        self.token(start, tag)
    }

    /// `x` or `x=`.
    fn with_equal(&mut self, start: usize, bare: RawTag, with_eq: RawTag) -> RawToken {
        self.cursor.advance();
        if self.cursor.current() == b'=' {
            self.cursor.advance();
            self.token(start, with_eq)
        } else {
            self.token(start, bare)
        }
    }

    /// `x`, `xx` or `x=`.
    fn doubled_or_equal(
        &mut self,
        start: usize,
        byte: u8,
        tags: [RawTag; 3], // [bare, doubled, with `=`]
    ) -> RawToken {
        self.cursor.advance();
        match self.cursor.current() {
            b if b == byte => {
                self.cursor.advance();
                self.token(start, tags[1])
            }
            b'=' => {
                self.cursor.advance();
                self.token(start, tags[2])
            }
            _ => self.token(start, tags[0]),
        }
    }

    fn plus(&mut self, start: usize) -> RawToken {
        self.doubled_or_equal(
            start,
            b'+',
            [RawTag::Plus, RawTag::PlusPlus, RawTag::PlusEqual],
        )
    }

    fn minus(&mut self, start: usize) -> RawToken {
        if self.cursor.peek() == b'>' {
            self.cursor.advance_n(2);
            return self.token(start, RawTag::Arrow);
        }
        self.doubled_or_equal(
            start,
            b'-',
            [RawTag::Minus, RawTag::MinusMinus, RawTag::MinusEqual],
        )
    }

    fn ampersand(&mut self, start: usize) -> RawToken {
        self.doubled_or_equal(
            start,
            b'&',
            [
                RawTag::Ampersand,
                RawTag::AmpersandAmpersand,
                RawTag::AmpersandEqual,
            ],
        )
    }

    fn pipe(&mut self, start: usize) -> RawToken {
        self.doubled_or_equal(
            start,
            b'|',
            [RawTag::Pipe, RawTag::PipePipe, RawTag::PipeEqual],
        )
    }

    fn equal(&mut self, start: usize) -> RawToken {
        self.cursor.advance(); // consume '='
        match self.cursor.current() {
            b'=' => {
                self.cursor.advance();
                self.token(start, RawTag::EqualEqual)
            }
            b'>' => {
                self.cursor.advance();
                self.token(start, RawTag::FatArrow)
            }
            _ => self.token(start, RawTag::Equal),
        }
    }

    /// `<`, `<=`, `<<`, `<<=`
    fn less(&mut self, start: usize) -> RawToken {
        if self.cursor.peek() == b'<' {
            self.cursor.advance_n(2);
            return self.with_trailing_equal(start, RawTag::Shl, RawTag::ShlEqual);
        }
        self.with_equal(start, RawTag::Less, RawTag::LessEqual)
    }

    /// `>`, `>=`, `>>`, `>>=`
    fn greater(&mut self, start: usize) -> RawToken {
        if self.cursor.peek() == b'>' {
            self.cursor.advance_n(2);
            return self.with_trailing_equal(start, RawTag::Shr, RawTag::ShrEqual);
        }
        self.with_equal(start, RawTag::Greater, RawTag::GreaterEqual)
    }

    /// `?`, `??`, `??=`
    fn question(&mut self, start: usize) -> RawToken {
        if self.cursor.peek() == b'?' {
            self.cursor.advance_n(2);
            return self.with_trailing_equal(
                start,
                RawTag::QuestionQuestion,
                RawTag::QuestionQuestionEqual,
            );
        }
        self.single(start, RawTag::Question)
    }

    fn colon(&mut self, start: usize) -> RawToken {
        self.cursor.advance(); // consume ':'
        if self.cursor.current() == b':' {
            self.cursor.advance();
            self.token(start, RawTag::ColonColon)
        } else {
            self.token(start, RawTag::Colon)
        }
    }

    /// The two-byte prefix is already consumed; take an optional `=`.
    fn with_trailing_equal(&mut self, start: usize, bare: RawTag, with_eq: RawTag) -> RawToken {
        if self.cursor.current() == b'=' {
            self.cursor.advance();
            self.token(start, with_eq)
        } else {
            self.token(start, bare)
        }
    }
}

#[cfg(test)]
mod tests;
