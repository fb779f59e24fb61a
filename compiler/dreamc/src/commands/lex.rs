//! The `lex` command: print the token stream of a file.

use dream_lexer::{highlight, DisplayCategory, Taxonomy, Token, TokenType};
use rustc_hash::FxHashMap;

use super::read_file;
use crate::options::FileOptions;

/// Tokenize each file and print one line per token.
pub fn lex_file(options: &FileOptions) {
    for path in &options.paths {
        let content = read_file(path);
        with_taxonomy!(options.taxonomy, print_tokens(path, &content, options.stats));
    }
}

fn print_tokens<T: Taxonomy>(path: &str, content: &str, stats: bool) {
    let tokens: Vec<_> = highlight::<T>(content).collect();
    println!(
        "Tokens for '{path}' ({} tokens, taxonomy {} v{}):",
        tokens.len(),
        T::NAME,
        T::VERSION
    );
    for (tok, categories) in &tokens {
        println!("  {}", format_token(tok, categories));
    }

    if stats {
        println!();
        println!("Categories:");
        for (category, count) in category_stats::<T>(content) {
            let key = category.map_or("(unstyled)", DisplayCategory::key);
            println!("  {count:>6}  {key}");
        }
    }
}

/// One token as `span TYPE "text" [CATEGORIES]`, plus any malformation.
pub fn format_token<Ty: TokenType>(tok: &Token<'_, Ty>, categories: &[DisplayCategory]) -> String {
    let mut line = format!(
        "{:<11} {:<20} {:?}",
        tok.span().to_string(),
        tok.ty.name(),
        tok.text
    );
    if !categories.is_empty() {
        let keys: Vec<_> = categories.iter().map(|c| c.key()).collect();
        line.push_str(&format!(" [{}]", keys.join(", ")));
    }
    if let Some(kind) = tok.malformed {
        line.push_str(&format!(" !! {kind}"));
    }
    line
}

/// Token counts per primary display category, most frequent first.
///
/// Unstyled tokens are counted under `None`.
pub fn category_stats<T: Taxonomy>(source: &str) -> Vec<(Option<DisplayCategory>, usize)> {
    let mut counts: FxHashMap<Option<DisplayCategory>, usize> = FxHashMap::default();
    for (_, categories) in highlight::<T>(source) {
        *counts.entry(categories.first().copied()).or_default() += 1;
    }
    let mut stats: Vec<_> = counts.into_iter().collect();
    stats.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    stats
}
