//! Byte cursor over a borrowed source string.
//!
//! The cursor advances through the source byte-by-byte. Reads past the end
//! return `0x00`, which acts as a virtual sentinel: no scanning predicate
//! accepts it, so loops terminate at EOF without explicit bounds checks in
//! the scanner.
//!
//! # Interior Null Bytes
//!
//! A null at `pos < len` is an interior null (scanned as an invalid
//! character); a null at `pos >= len` is the sentinel (EOF). Use
//! [`Cursor::is_eof`] to tell them apart.

/// Returns the earliest (minimum) of two optional positions.
///
/// Used to combine results from separate memchr calls when we need to search
/// for more bytes than `memchr3` supports.
fn earliest_of(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

/// Cursor over a borrowed `&str`.
///
/// The cursor is [`Copy`], enabling cheap state snapshots for lookahead and
/// for restarting a scan.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    #[inline]
    fn byte_at(&self, pos: usize) -> u8 {
        self.source.as_bytes().get(pos).copied().unwrap_or(0)
    }

    /// Returns the byte at the current position, or `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Returns the byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    /// Returns the byte two positions ahead of current.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.byte_at(self.pos + 2)
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance the cursor by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    /// Returns `true` once the cursor has consumed the whole source.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Length of the source in bytes.
    #[inline]
    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    /// The full source this cursor walks.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Extract a source substring.
    ///
    /// # Contract
    ///
    /// `start..end` must lie within the source and on character boundaries.
    /// The scanner only produces such boundaries; an out-of-contract range
    /// yields an empty string rather than panicking.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        debug_assert!(
            self.source.is_char_boundary(start) && self.source.is_char_boundary(end),
            "slice {start}..{end} splits a UTF-8 character"
        );
        self.source.get(start..end).unwrap_or_default()
    }

    /// Extract a source substring from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false`, otherwise the loop cannot see EOF.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    ///
    /// - `0xC0..=0xDF`: 2 bytes
    /// - `0xE0..=0xEF`: 3 bytes
    /// - `0xF0..=0xF7`: 4 bytes
    /// - Everything else: 1 byte
    #[inline]
    pub fn utf8_char_width(byte: u8) -> usize {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance past one full UTF-8 character. No-op at EOF.
    #[inline]
    pub fn advance_char(&mut self) {
        if !self.is_eof() {
            let width = Self::utf8_char_width(self.current());
            self.pos = (self.pos + width).min(self.source.len());
        }
    }

    /// Advance to the next `\n` or `\r` byte, or EOF.
    ///
    /// Used to skip line comment bodies. The line break itself is not
    /// consumed.
    pub fn eat_until_line_end(&mut self) {
        let remaining = &self.source.as_bytes()[self.pos.min(self.source.len())..];
        match memchr::memchr2(b'\n', b'\r', remaining) {
            Some(offset) => self.pos += offset,
            None => self.pos = self.source.len(),
        }
    }

    /// Advance past the next occurrence of `*/`.
    ///
    /// Returns `true` if the terminator was found and consumed, `false` if
    /// the cursor ran to EOF instead.
    pub fn eat_past_block_comment_end(&mut self) -> bool {
        let remaining = &self.source.as_bytes()[self.pos.min(self.source.len())..];
        if let Some(offset) = memchr::memmem::find(remaining, b"*/") {
            self.pos += offset + 2;
            true
        } else {
            self.pos = self.source.len();
            false
        }
    }

    /// Advance past ordinary quoted content to the next interesting byte.
    /// Returns the byte found, or 0 for EOF.
    ///
    /// "Interesting" bytes: the closing `quote`, `\`, `\n`, `\r`.
    pub fn skip_to_quote_delim(&mut self, quote: u8) -> u8 {
        let remaining = &self.source.as_bytes()[self.pos.min(self.source.len())..];
        let primary = memchr::memchr3(quote, b'\\', b'\n', remaining);
        let cr = memchr::memchr(b'\r', remaining);

        if let Some(off) = earliest_of(primary, cr) {
            self.pos += off;
            self.current()
        } else {
            self.pos = self.source.len();
            0
        }
    }
}
