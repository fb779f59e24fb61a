use super::*;
use pretty_assertions::assert_eq;

#[test]
fn missing_file_names_the_path() {
    assert_eq!(
        read_source("no/such/file.dr"),
        Err("cannot find file 'no/such/file.dr'".to_string())
    );
}

#[test]
fn reads_existing_file() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml");
    let content = read_source(path).unwrap_or_default();
    assert!(content.contains("name = \"dreamc\""));
}

fn taxonomy_name<T: dream_lexer::Taxonomy>() -> &'static str {
    T::NAME
}

#[test]
fn dispatch_reaches_every_taxonomy() {
    for &kind in dream_lexer::TaxonomyKind::ALL {
        assert_eq!(with_taxonomy!(kind, taxonomy_name()), kind.name());
    }
}
