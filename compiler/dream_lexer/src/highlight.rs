//! Presentation adapter: tokens paired with their display categories.

use crate::category::DisplayCategory;
use crate::lexer::{tokenize, Tokens};
use crate::registry::ClassificationTable;
use crate::taxonomy::Taxonomy;
use crate::token::{Span, Token};

/// Iterator over `(token, categories)` pairs.
pub struct Highlight<'a, T: Taxonomy> {
    tokens: Tokens<'a, T>,
    table: &'static ClassificationTable<T::Type>,
}

impl<'a, T: Taxonomy> Iterator for Highlight<'a, T> {
    type Item = (Token<'a, T::Type>, &'static [DisplayCategory]);

    fn next(&mut self) -> Option<Self::Item> {
        let tok = self.tokens.next()?;
        Some((tok, self.table.classify(tok.ty)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.tokens.size_hint()
    }
}

/// Tokenize `source` and attach each token's display categories.
pub fn highlight<T: Taxonomy>(source: &str) -> Highlight<'_, T> {
    Highlight {
        tokens: tokenize::<T>(source),
        table: T::registry(),
    }
}

/// A run of adjacent tokens sharing one primary display category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HighlightSpan {
    pub span: Span,
    /// Categories of the run's first token, most specific first.
    pub categories: &'static [DisplayCategory],
}

impl HighlightSpan {
    /// The category that wins for styling, or `None` for unstyled text.
    pub fn primary(&self) -> Option<DisplayCategory> {
        self.categories.first().copied()
    }
}

/// Merge highlighted tokens into maximal same-category runs.
///
/// The spans cover `source` without gaps, just like the tokens do.
pub fn highlight_spans<T: Taxonomy>(source: &str) -> Vec<HighlightSpan> {
    let mut spans: Vec<HighlightSpan> = Vec::new();
    for (tok, categories) in highlight::<T>(source) {
        if let Some(last) = spans.last_mut() {
            if last.primary() == categories.first().copied() {
                last.span = last.span.merge(tok.span());
                continue;
            }
        }
        spans.push(HighlightSpan {
            span: tok.span(),
            categories,
        });
    }
    spans
}
