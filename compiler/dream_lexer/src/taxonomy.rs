//! Taxonomy traits.
//!
//! A taxonomy pairs a closed set of token types with the rules that map
//! lexemes onto them and token types onto display categories. The lexer is
//! generic over the taxonomy, so types from two taxonomy versions can never
//! meet in one token stream.

use std::fmt::Debug;
use std::hash::Hash;

use dream_lexer_core::ScanFeatures;

use crate::category::DisplayCategory;
use crate::lexeme::Lexeme;
use crate::registry::ClassificationTable;

/// A closed, fieldless set of token types.
pub trait TokenType: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Every variant. Classification tables are built from this list.
    const ALL: &'static [Self];

    /// Stable upper-snake name, e.g. `OPERATOR_ASSIGNMENT`.
    fn name(self) -> &'static str;

    /// `true` for whitespace and comments.
    fn is_trivia(self) -> bool;
}

/// One version of the Dream token taxonomy.
pub trait Taxonomy: 'static {
    type Type: TokenType;

    /// Short lowercase name, used on the command line.
    const NAME: &'static str;
    /// Revision number; later versions refine earlier ones.
    const VERSION: u32;
    /// Lexeme shapes the raw scanner should recognize.
    const SCAN: ScanFeatures;

    /// Token type for a classified lexeme.
    fn token_type(lexeme: Lexeme) -> Self::Type;

    /// Display categories for a token type, most specific first.
    ///
    /// This is the rule source the classification table is built from;
    /// consumers should go through [`Taxonomy::registry`].
    fn categories(ty: Self::Type) -> &'static [DisplayCategory];

    /// The process-wide classification table, built on first use.
    fn registry() -> &'static ClassificationTable<Self::Type>;
}
