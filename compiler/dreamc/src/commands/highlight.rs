//! The `highlight` command: print merged highlight spans.

use dream_lexer::{highlight_spans, HighlightSpan, Taxonomy};

use super::read_file;
use crate::options::FileOptions;

pub fn highlight_file(options: &FileOptions) {
    for path in &options.paths {
        let content = read_file(path);
        with_taxonomy!(options.taxonomy, print_spans(path, &content));
    }
}

fn print_spans<T: Taxonomy>(path: &str, content: &str) {
    let spans = highlight_spans::<T>(content);
    println!("Highlight spans for '{path}' ({} spans, taxonomy {}):", spans.len(), T::NAME);
    for span in &spans {
        println!("  {}", format_span(span, content));
    }
}

/// One span as `range KEY "text"`; unstyled runs show `-` for the key.
pub fn format_span(span: &HighlightSpan, source: &str) -> String {
    let key = span.primary().map_or("-", |c| c.key());
    let text = source.get(span.span.range()).unwrap_or_default();
    format!("{:<11} {key:<28} {text:?}", span.span.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dream_lexer::{Basic, Extended};
    use pretty_assertions::assert_eq;

    fn lines<T: Taxonomy>(source: &str) -> Vec<String> {
        highlight_spans::<T>(source)
            .iter()
            .map(|s| format_span(s, source))
            .collect()
    }

    #[test]
    fn unstyled_runs_use_dash() {
        assert_eq!(lines::<Basic>("a + b // c"), vec![
            format!("{:<11} {:<28} {:?}", "0..6", "-", "a + b "),
            format!("{:<11} {:<28} {:?}", "6..10", "DREAM_COMMENT", "// c"),
        ]);
    }

    #[test]
    fn console_member_uses_console_key() {
        let out = lines::<Extended>("Console.Write(1);");
        assert!(out[0].contains("DREAM_CONSOLEFUNCTION"), "{}", out[0]);
        assert!(out[0].ends_with("\"Console\""), "{}", out[0]);
    }
}
