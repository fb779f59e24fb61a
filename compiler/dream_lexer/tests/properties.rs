#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Whole-pipeline properties that must hold for every taxonomy and input.
//!
//! - the token texts concatenate back to the source (coverage)
//! - tokens are non-empty, contiguous and in order
//! - tokenizing twice yields identical streams (determinism)
//! - every emitted type is registered (classification completeness)

use dream_lexer::{
    tokenize, Basic, Extended, Lexer, Standard, Taxonomy, Token, TokenType,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn check_coverage<T: Taxonomy>(source: &str) {
    let tokens: Vec<Token<'_, T::Type>> = tokenize::<T>(source).collect();
    let mut offset = 0;
    for tok in &tokens {
        assert!(tok.len > 0, "{}: empty token at {offset}", T::NAME);
        assert_eq!(tok.start, offset, "{}: gap or overlap", T::NAME);
        assert_eq!(&source[tok.start..tok.end()], tok.text);
        offset = tok.end();
    }
    assert_eq!(offset, source.len());
    let joined: String = tokens.iter().map(|t| t.text).collect();
    assert_eq!(joined, source);
}

fn check_determinism<T: Taxonomy>(source: &str) {
    let first: Vec<_> = tokenize::<T>(source).collect();
    let second: Vec<_> = tokenize::<T>(source).collect();
    assert_eq!(first, second);
}

fn check_registered<T: Taxonomy>(source: &str) {
    let table = T::registry();
    for tok in tokenize::<T>(source) {
        assert!(
            table.try_classify(tok.ty).is_ok(),
            "{}: {} not registered",
            T::NAME,
            tok.ty.name()
        );
    }
}

fn check_all(source: &str) {
    check_coverage::<Basic>(source);
    check_coverage::<Standard>(source);
    check_coverage::<Extended>(source);
    check_determinism::<Basic>(source);
    check_determinism::<Standard>(source);
    check_determinism::<Extended>(source);
    check_registered::<Basic>(source);
    check_registered::<Standard>(source);
    check_registered::<Extended>(source);
}

/// Source fragments that exercise every lexeme class, including broken ones.
fn fragment() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        " ", "\t", "\n", "\r\n", "x", "Console", ".", "WriteLine", "func", "class", "int",
        "true", "Task", "(", ")", "{", "}", "[", "]", ";", ",", ":", "::", "+", "++", "+=",
        "-", "->", "=>", "==", "!=", "<<=", ">>", "&&", "||", "??", "??=", "?", "~", "^",
        "%=", "0", "42", "3.14", "1f", "12ab", "\"s\"", "\"\\n\"", "\"\\q\"", "\"open",
        "'a'", "''", "'ab'", "'", "// c", "/* b */", "/** d */", "/* open", "@", "#",
        "\u{e9}", "\u{1F600}", "\\", "\0",
    ])
}

proptest! {
    #[test]
    fn arbitrary_text_is_covered(source in "\\PC{0,64}") {
        check_all(&source);
    }

    #[test]
    fn any_unicode_is_covered(source in any::<String>()) {
        check_all(&source);
    }

    #[test]
    fn code_like_text_is_covered(parts in prop::collection::vec(fragment(), 0..48)) {
        let source = parts.concat();
        check_all(&source);
    }

    #[test]
    fn clone_resumes_identically(parts in prop::collection::vec(fragment(), 1..24), split in 0usize..24) {
        let source = parts.concat();
        let mut tokens = tokenize::<Extended>(&source);
        for _ in 0..split {
            if tokens.next().is_none() {
                break;
            }
        }
        let rest_a: Vec<_> = tokens.clone().collect();
        let rest_b: Vec<_> = tokens.collect();
        prop_assert_eq!(rest_a, rest_b);
    }
}

#[test]
fn pull_api_matches_iterator() {
    let source = "func f(int a) { return a + 1; }";
    let mut lexer = Lexer::<Standard>::new(source);
    let mut pulled = Vec::new();
    while let Some(tok) = lexer.next_token().unwrap() {
        pulled.push(tok);
    }
    let iterated: Vec<_> = tokenize::<Standard>(source).collect();
    assert_eq!(pulled, iterated);
    assert!(lexer.is_finished());
}

#[test]
fn concurrent_tokenization_agrees_with_sequential() {
    let sources: Vec<String> = (0..16)
        .map(|i| format!("let v{i} = {i} * 2; // item {i}\nConsole.WriteLine(v{i});\n"))
        .collect();
    let sequential: Vec<Vec<String>> = sources
        .iter()
        .map(|s| {
            tokenize::<Extended>(s)
                .map(|t| format!("{}:{}", t.ty, t.text))
                .collect()
        })
        .collect();

    let concurrent: Vec<Vec<String>> = std::thread::scope(|scope| {
        let handles: Vec<_> = sources
            .iter()
            .map(|s| {
                scope.spawn(move || {
                    tokenize::<Extended>(s)
                        .map(|t| format!("{}:{}", t.ty, t.text))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(concurrent, sequential);
}

#[test]
fn shared_source_across_threads() {
    let source = include_str!("fixtures/demo.dr");
    let expected: Vec<_> = tokenize::<Standard>(source).collect();
    std::thread::scope(|scope| {
        for _ in 0..4 {
            let expected = &expected;
            scope.spawn(move || {
                let got: Vec<_> = tokenize::<Standard>(source).collect();
                assert_eq!(&got, expected);
            });
        }
    });
}
