//! Scanner feature switches.
//!
//! Older taxonomy versions predate character literals and doc comments.
//! The scanner consults these flags so such versions never observe lexeme
//! shapes they cannot classify.

use bitflags::bitflags;

bitflags! {
    /// Optional lexeme shapes recognized by the [`RawScanner`](crate::RawScanner).
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct ScanFeatures: u8 {
        /// `'x'` character literals. Without it, `'` is an invalid character.
        const CHAR_LITERALS = 1 << 0;
        /// `///` and `/** */` doc comments. Without it, both scan as plain
        /// comments.
        const DOC_COMMENTS = 1 << 1;
    }
}

impl Default for ScanFeatures {
    fn default() -> Self {
        Self::all()
    }
}
