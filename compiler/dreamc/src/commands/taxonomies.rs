//! The `taxonomies` command: list taxonomy versions and their category
//! tables.

use dream_lexer::{Taxonomy, TaxonomyKind, TokenType};

/// Print every taxonomy, or just `only`.
pub fn list_taxonomies(only: Option<TaxonomyKind>) {
    let kinds = match only {
        Some(kind) => vec![kind],
        None => TaxonomyKind::ALL.to_vec(),
    };
    for (i, kind) in kinds.into_iter().enumerate() {
        if i > 0 {
            println!();
        }
        print!("{}", with_taxonomy!(kind, describe_taxonomy()));
    }
}

/// Header line plus one line per token type with its display categories,
/// most specific first.
pub fn describe_taxonomy<T: Taxonomy>() -> String {
    let table = T::registry();
    let default = if TaxonomyKind::default().name() == T::NAME { ", default" } else { "" };
    let mut out = format!(
        "{} v{} ({} token types{default})\n",
        T::NAME,
        T::VERSION,
        table.len()
    );
    for (ty, categories) in table.iter() {
        let keys = if categories.is_empty() {
            "-".to_string()
        } else {
            categories.iter().map(|c| c.key()).collect::<Vec<_>>().join(" > ")
        };
        let trivia = if ty.is_trivia() { " (trivia)" } else { "" };
        out.push_str(&format!("  {:<22}{keys}{trivia}\n", ty.name()));
    }
    out
}
