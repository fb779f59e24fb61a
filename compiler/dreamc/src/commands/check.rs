//! The `check` command: tokenize files in parallel and report malformed
//! lexemes as errors and unknown characters as warnings.

use std::ops::Range;

use ariadne::{Config, Label, Report, ReportKind, Source};
use dream_lexer::{malformed_lexemes, tokenize, unknown_characters, LexError, Span, Taxonomy};
use rayon::prelude::*;

use super::read_source;
use crate::options::FileOptions;

/// Outcome of checking one file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileReport {
    pub path: String,
    pub tokens: usize,
    pub errors: Vec<LexError>,
    /// Characters no lexeme accepts. Reported, but never fail the check.
    pub warnings: Vec<Span>,
    /// Rendered diagnostics; empty when there are no errors or warnings.
    pub rendered: String,
}

impl FileReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Check every file in `options.paths`, then exit 1 if any file is
/// unreadable or contains malformed lexemes.
pub fn check_files(options: &FileOptions) {
    let color = std::io::IsTerminal::is_terminal(&std::io::stderr());
    tracing::debug!(files = options.paths.len(), taxonomy = options.taxonomy.name(), "checking");

    let results: Vec<Result<FileReport, String>> = options
        .paths
        .par_iter()
        .map(|path| -> Result<FileReport, String> {
            let _span = tracing::debug_span!("check_file", %path).entered();
            let content = read_source(path)?;
            Ok(with_taxonomy!(options.taxonomy, check_source(path, &content, color)))
        })
        .collect();

    let mut failed = 0usize;
    let mut malformed = 0usize;
    let mut warnings = 0usize;
    for result in &results {
        match result {
            Ok(report) => {
                eprint!("{}", report.rendered);
                malformed += report.errors.len();
                warnings += report.warnings.len();
                if !report.is_clean() {
                    failed += 1;
                }
            }
            Err(msg) => {
                eprintln!("{msg}");
                failed += 1;
            }
        }
    }

    let checked = results.len();
    if failed > 0 {
        eprintln!("{failed} of {checked} file(s) failed ({malformed} malformed lexeme(s))");
        std::process::exit(1);
    }
    let name = options.taxonomy.name();
    if warnings > 0 {
        println!("OK: {checked} file(s) checked with taxonomy {name} ({warnings} warning(s))");
    } else {
        println!("OK: {checked} file(s) checked with taxonomy {name}");
    }
}

/// Tokenize `content` and render its malformed lexemes and unknown
/// characters.
pub fn check_source<T: Taxonomy>(path: &str, content: &str, color: bool) -> FileReport {
    let tokens = tokenize::<T>(content).count();
    let errors = malformed_lexemes::<T>(content);
    let warnings = unknown_characters::<T>(content);
    let rendered = render(path, content, &errors, &warnings, color);
    tracing::debug!(tokens, malformed = errors.len(), unknown = warnings.len(), "checked");
    FileReport {
        path: path.to_string(),
        tokens,
        errors,
        warnings,
        rendered,
    }
}

/// One diagnostic before rendering.
struct Diagnostic {
    kind: ReportKind<'static>,
    span: Span,
    message: String,
    help: &'static str,
}

fn render(
    path: &str,
    content: &str,
    errors: &[LexError],
    warnings: &[Span],
    color: bool,
) -> String {
    let mut diagnostics: Vec<Diagnostic> = errors
        .iter()
        .filter_map(|error| match *error {
            LexError::MalformedLexeme { kind, span } => Some(Diagnostic {
                kind: ReportKind::Error,
                span,
                message: kind.message().to_string(),
                help: kind.help(),
            }),
            LexError::ContractViolation(_) => None,
        })
        .chain(warnings.iter().map(|&span| {
            let text = content.get(span.range()).unwrap_or_default();
            Diagnostic {
                kind: ReportKind::Warning,
                span,
                message: format!("unknown character `{text}`"),
                help: "remove it, or move it into a string or comment",
            }
        }))
        .collect();
    if diagnostics.is_empty() {
        return String::new();
    }
    diagnostics.sort_by_key(|d| d.span.start);

    let mut cache = (path.to_string(), Source::from(content.to_string()));
    let mut out = Vec::new();
    for diagnostic in diagnostics {
        let range = char_range(content, diagnostic.span);
        let report = Report::<(String, Range<usize>)>::build(
            diagnostic.kind,
            path.to_string(),
            range.start,
        )
        .with_config(Config::default().with_color(color))
        .with_message(&diagnostic.message)
        .with_label(Label::new((path.to_string(), range)).with_message(&diagnostic.message))
        .with_help(diagnostic.help)
        .finish();
        if let Err(err) = report.write(&mut cache, &mut out) {
            tracing::debug!(%err, "failed to render diagnostic");
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Diagnostics are positioned in characters, tokens in bytes.
fn char_range(source: &str, span: Span) -> Range<usize> {
    let chars_in = |range: Range<usize>| source.get(range).map_or(0, |s| s.chars().count());
    let start = chars_in(0..span.start);
    start..start + chars_in(span.range())
}
