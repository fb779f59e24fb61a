//! Command-line options shared by the file commands.

use dream_lexer::TaxonomyKind;

/// Environment variable consulted when `--taxonomy` is absent.
pub const TAXONOMY_ENV: &str = "DREAM_TAXONOMY";

/// Options for `lex`, `highlight` and `check`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileOptions {
    pub taxonomy: TaxonomyKind,
    pub paths: Vec<String>,
    /// `lex` only: print per-category token counts after the stream.
    pub stats: bool,
}

/// Parse the arguments following the command word.
///
/// `env_taxonomy` is the value of [`TAXONOMY_ENV`], if set; an explicit
/// `--taxonomy=` flag overrides it.
pub fn parse_file_options(
    args: &[String],
    env_taxonomy: Option<&str>,
) -> Result<FileOptions, String> {
    let mut options = FileOptions::default();
    let mut explicit = None;

    for arg in args {
        if let Some(name) = arg.strip_prefix("--taxonomy=") {
            explicit = Some(name);
        } else if arg == "--stats" {
            options.stats = true;
        } else if arg.starts_with('-') && arg != "-" {
            return Err(format!("unknown option '{arg}'"));
        } else {
            options.paths.push(arg.clone());
        }
    }

    if let Some(name) = explicit.or(env_taxonomy) {
        options.taxonomy = name.parse()?;
    }
    Ok(options)
}

/// Read [`TAXONOMY_ENV`], treating an empty value as unset.
pub fn taxonomy_from_env() -> Option<String> {
    std::env::var(TAXONOMY_ENV).ok().filter(|v| !v.is_empty())
}
