//! Tokenizer and classification registry for the Dream language.
//!
//! The raw scanner in `dream_lexer_core` knows lexeme shapes. This crate
//! turns those shapes into typed tokens of a chosen [`Taxonomy`] and maps
//! each token type to [`DisplayCategory`] tags for highlighting.
//!
//! ```
//! use dream_lexer::{classify, tokenize, DisplayCategory, Standard, StandardType};
//!
//! let types: Vec<_> = tokenize::<Standard>("int x = 5;").map(|t| t.ty).collect();
//! assert_eq!(types[0], StandardType::Keyword);
//! assert_eq!(types[4], StandardType::OperatorAssignment);
//!
//! assert_eq!(
//!     classify::<Standard>(StandardType::OperatorAssignment),
//!     &[DisplayCategory::OperatorAssignment, DisplayCategory::OperationSign]
//! );
//! ```
//!
//! Tokenization never fails on input. Malformed lexemes (unterminated
//! strings, invalid escapes, ...) come back as ordinary tokens carrying a
//! [`Malformed`] kind.

mod category;
mod context;
mod convert;
mod error;
mod escape;
mod highlight;
mod keywords;
mod lexeme;
mod lexer;
mod registry;
mod taxonomies;
mod taxonomy;
mod token;

pub use category::DisplayCategory;
pub use context::IdentRole;
pub use error::{ContractViolation, LexError, Malformed};
pub use highlight::{highlight, highlight_spans, Highlight, HighlightSpan};
pub use keywords::{lookup as lookup_keyword, Keyword, KeywordClass};
pub use lexeme::{Delimiter, Lexeme, OperatorFamily, Punct};
pub use lexer::{malformed_lexemes, tokenize, unknown_characters, Lexer, Tokens};
pub use registry::{classify, try_classify, ClassificationTable};
pub use taxonomies::{
    Basic, BasicType, Extended, ExtendedType, Standard, StandardType, TaxonomyKind,
};
pub use taxonomy::{Taxonomy, TokenType};
pub use token::{Span, Token};

pub use dream_lexer_core::ScanFeatures;
