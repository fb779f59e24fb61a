//! Command handlers for the `dream` CLI.
//!
//! Each submodule implements one command. Shared helpers (source reading and
//! taxonomy dispatch) live here in the module root.

use std::io::Read;

/// Run a generic function with the taxonomy a [`TaxonomyKind`] names.
///
/// [`TaxonomyKind`]: dream_lexer::TaxonomyKind
macro_rules! with_taxonomy {
    ($kind:expr, $func:ident($($arg:expr),* $(,)?)) => {
        match $kind {
            dream_lexer::TaxonomyKind::Basic => $func::<dream_lexer::Basic>($($arg),*),
            dream_lexer::TaxonomyKind::Standard => $func::<dream_lexer::Standard>($($arg),*),
            dream_lexer::TaxonomyKind::Extended => $func::<dream_lexer::Extended>($($arg),*),
        }
    };
}

mod check;
mod highlight;
mod lex;
mod taxonomies;

pub use check::{check_files, check_source, FileReport};
pub use highlight::{format_span, highlight_file};
pub use lex::{category_stats, format_token, lex_file};
pub use taxonomies::{describe_taxonomy, list_taxonomies};

/// Read a source file, or standard input for `-`.
///
/// Errors carry a user-facing message naming the path.
pub fn read_source(path: &str) -> Result<String, String> {
    if path == "-" {
        let mut content = String::new();
        return std::io::stdin()
            .read_to_string(&mut content)
            .map(|_| content)
            .map_err(|e| format!("error reading standard input: {e}"));
    }

    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    })
}

/// Read a source file or exit with status 1.
pub(crate) fn read_file(path: &str) -> String {
    match read_source(path) {
        Ok(content) => content,
        Err(msg) => {
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests;
