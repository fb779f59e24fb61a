//! Low-level raw scanner for Dream source text.
//!
//! This crate turns a `&str` into `(RawTag, len)` pairs. It knows the *shape*
//! of every lexeme (where a string ends, which operator is longest) but
//! nothing about keywords, escapes or display taxonomies. Those belong to the
//! `dream_lexer` cooking layer.
//!
//! # Guarantees
//!
//! - Every non-EOF token has `len > 0`, so scanning always terminates.
//! - The sum of token lengths equals the source length (no gaps, no overlaps).
//! - Token boundaries always fall on UTF-8 character boundaries.
//! - Malformed input never panics; problems are encoded as error tags
//!   (`UnterminatedString`, `InvalidNumber`, ...).
//!
//! # Example
//!
//! ```
//! use dream_lexer_core::{Cursor, RawScanner, RawTag, ScanFeatures};
//!
//! let mut scanner = RawScanner::new(Cursor::new("x -> y"), ScanFeatures::all());
//! let tags: Vec<RawTag> = std::iter::from_fn(|| {
//!     let tok = scanner.next_token();
//!     (tok.tag != RawTag::Eof).then_some(tok.tag)
//! })
//! .collect();
//! assert_eq!(
//!     tags,
//!     [RawTag::Ident, RawTag::Whitespace, RawTag::Arrow, RawTag::Whitespace, RawTag::Ident]
//! );
//! ```

mod cursor;
mod features;
mod raw_scanner;
mod tag;

pub use cursor::Cursor;
pub use features::ScanFeatures;
pub use raw_scanner::{is_ident_continue, is_ident_start, RawScanner};
pub use tag::{RawTag, RawToken};
