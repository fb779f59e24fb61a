use super::*;
use pretty_assertions::assert_eq;

/// Helper: scan a source string with every feature and collect all tokens (excluding Eof).
fn scan(source: &str) -> Vec<RawToken> {
    scan_with(source, ScanFeatures::all())
}

fn scan_with(source: &str, features: ScanFeatures) -> Vec<RawToken> {
    let mut scanner = RawScanner::new(Cursor::new(source), features);
    let mut tokens = Vec::new();
    loop {
        let tok = scanner.next_token();
        if tok.tag == RawTag::Eof {
            break;
        }
        tokens.push(tok);
    }
    tokens
}

/// Helper: scan and return tags only.
fn scan_tags(source: &str) -> Vec<RawTag> {
    scan(source).iter().map(|t| t.tag).collect()
}

/// Helper: scan and return `(tag, text)` pairs.
fn scan_texts(source: &str) -> Vec<(RawTag, &str)> {
    let mut pos = 0;
    scan(source)
        .into_iter()
        .map(|t| {
            let text = &source[pos..pos + t.len];
            pos += t.len;
            (t.tag, text)
        })
        .collect()
}

// ─── Property Tests ────────────────────────────────────────────

#[test]
fn total_len_equals_source_len() {
    let sources = [
        "",
        "x",
        "hello world",
        "int x = 42;\nint y = x + 1;",
        "\"hello\" 'c' 123 0.5f",
        "?? :: << -> => ??= >>=",
        "  \t\n  \r\n  ",
        "#include @main $var `tick`",
        "\"open\n'x\n/* never",
        "λ → 😀",
    ];
    for source in sources {
        let tokens = scan(source);
        let total_len: usize = tokens.iter().map(|t| t.len).sum();
        assert_eq!(total_len, source.len(), "total token length mismatch for {source:?}");
    }
}

#[test]
fn every_token_has_positive_length() {
    let sources = ["int x = 42;", "+-*/%", "\"str\" 'c'", "  \t\n\r\n", "'' 'ab' 9z"];
    for source in sources {
        for tok in scan(source) {
            assert!(tok.len > 0, "zero-length token {tok:?} in {source:?}");
        }
    }
}

#[test]
fn repeated_eof_returns_eof() {
    let mut scanner = RawScanner::new(Cursor::new("x"), ScanFeatures::all());
    assert_eq!(scanner.next_token().tag, RawTag::Ident);
    for _ in 0..3 {
        assert_eq!(
            scanner.next_token(),
            RawToken {
                tag: RawTag::Eof,
                len: 0
            }
        );
    }
}

#[test]
fn empty_source_is_single_eof() {
    let mut scanner = RawScanner::new(Cursor::new(""), ScanFeatures::all());
    let tok = scanner.next_token();
    assert_eq!(tok.tag, RawTag::Eof);
    assert_eq!(tok.len, 0);
}

// ─── Byte Coverage ─────────────────────────────────────────────

#[test]
fn all_ascii_bytes_produce_valid_token() {
    for byte in 0u8..=127 {
        let bytes = [byte];
        let source = std::str::from_utf8(&bytes).unwrap_or_default();
        let tokens = scan(source);
        let total_len: usize = tokens.iter().map(|t| t.len).sum();
        assert_eq!(total_len, 1, "byte {byte} produced tokens={tokens:?}");
    }
}

#[test]
fn invalid_ascii_characters() {
    for source in ["#", "$", "@", "\\", "`", "\x01", "\x7f", "\0"] {
        assert_eq!(scan_tags(source), vec![RawTag::InvalidChar], "{source:?}");
    }
}

#[test]
fn non_ascii_is_one_invalid_char_per_code_point() {
    assert_eq!(
        scan_texts("λ😀"),
        vec![(RawTag::InvalidChar, "λ"), (RawTag::InvalidChar, "😀")]
    );
}

// ─── Whitespace ────────────────────────────────────────────────

#[test]
fn whitespace_run_includes_newlines() {
    assert_eq!(scan_texts(" \t\r\n  x"), vec![
        (RawTag::Whitespace, " \t\r\n  "),
        (RawTag::Ident, "x"),
    ]);
}

// ─── Comments ──────────────────────────────────────────────────

#[test]
fn line_comment_does_not_consume_newline() {
    assert_eq!(scan_texts("// hi\nx"), vec![
        (RawTag::LineComment, "// hi"),
        (RawTag::Whitespace, "\n"),
        (RawTag::Ident, "x"),
    ]);
}

#[test]
fn doc_line_comment() {
    assert_eq!(scan_tags("/// docs"), vec![RawTag::DocLineComment]);
    assert_eq!(scan_tags("//// not docs"), vec![RawTag::LineComment]);
}

#[test]
fn doc_line_comment_requires_feature() {
    let tags: Vec<_> = scan_with("/// docs", ScanFeatures::empty())
        .iter()
        .map(|t| t.tag)
        .collect();
    assert_eq!(tags, vec![RawTag::LineComment]);
}

#[test]
fn block_comments() {
    assert_eq!(scan_tags("/* a */"), vec![RawTag::BlockComment]);
    assert_eq!(scan_tags("/** a */"), vec![RawTag::DocBlockComment]);
    assert_eq!(scan_tags("/**/"), vec![RawTag::BlockComment]);
    assert_eq!(scan_tags("/*** a */"), vec![RawTag::BlockComment]);
}

#[test]
fn block_comment_spans_lines() {
    assert_eq!(scan_texts("/* a\nb */x"), vec![
        (RawTag::BlockComment, "/* a\nb */"),
        (RawTag::Ident, "x"),
    ]);
}

#[test]
fn unterminated_block_comment_runs_to_eof() {
    assert_eq!(scan_texts("/* open\nint x"), vec![(
        RawTag::UnterminatedBlockComment,
        "/* open\nint x"
    )]);
    assert_eq!(scan_tags("/** open"), vec![RawTag::UnterminatedDocComment]);
}

#[test]
fn slash_operators() {
    assert_eq!(scan_tags("/"), vec![RawTag::Slash]);
    assert_eq!(scan_tags("/="), vec![RawTag::SlashEqual]);
    assert_eq!(scan_tags("a/b"), vec![RawTag::Ident, RawTag::Slash, RawTag::Ident]);
}

// ─── Identifiers ───────────────────────────────────────────────

#[test]
fn identifiers() {
    assert_eq!(scan_texts("foo _bar baz9"), vec![
        (RawTag::Ident, "foo"),
        (RawTag::Whitespace, " "),
        (RawTag::Ident, "_bar"),
        (RawTag::Whitespace, " "),
        (RawTag::Ident, "baz9"),
    ]);
}

#[test]
fn lone_underscore_is_ident() {
    assert_eq!(scan_tags("_"), vec![RawTag::Ident]);
}

#[test]
fn keywords_are_ident() {
    for kw in ["if", "class", "int", "true", "Console"] {
        assert_eq!(scan_tags(kw), vec![RawTag::Ident], "{kw}");
    }
}

// ─── Numbers ───────────────────────────────────────────────────

#[test]
fn integer_and_fraction() {
    assert_eq!(scan_texts("42"), vec![(RawTag::Number, "42")]);
    assert_eq!(scan_texts("3.14"), vec![(RawTag::Number, "3.14")]);
    assert_eq!(scan_texts("0.5f"), vec![(RawTag::Number, "0.5f")]);
    assert_eq!(scan_texts("2F"), vec![(RawTag::Number, "2F")]);
}

#[test]
fn trailing_dot_is_separate() {
    assert_eq!(scan_texts("1.x"), vec![
        (RawTag::Number, "1"),
        (RawTag::Dot, "."),
        (RawTag::Ident, "x"),
    ]);
}

#[test]
fn number_running_into_ident_is_invalid() {
    assert_eq!(scan_texts("12ab"), vec![(RawTag::InvalidNumber, "12ab")]);
    assert_eq!(scan_texts("1.5fx"), vec![(RawTag::InvalidNumber, "1.5fx")]);
}

// ─── Strings ───────────────────────────────────────────────────

#[test]
fn simple_string() {
    assert_eq!(scan_texts("\"hello\""), vec![(RawTag::String, "\"hello\"")]);
}

#[test]
fn string_with_escaped_quote() {
    assert_eq!(scan_texts(r#""a\"b" x"#), vec![
        (RawTag::String, r#""a\"b""#),
        (RawTag::Whitespace, " "),
        (RawTag::Ident, "x"),
    ]);
}

#[test]
fn string_with_unknown_escape_still_terminates() {
    assert_eq!(scan_tags(r#""\q""#), vec![RawTag::String]);
}

#[test]
fn unterminated_string_stops_at_line_break() {
    assert_eq!(scan_texts("\"abc\nx"), vec![
        (RawTag::UnterminatedString, "\"abc"),
        (RawTag::Whitespace, "\n"),
        (RawTag::Ident, "x"),
    ]);
}

#[test]
fn unterminated_string_at_eof() {
    assert_eq!(scan_texts("\"abc"), vec![(RawTag::UnterminatedString, "\"abc")]);
}

#[test]
fn backslash_before_newline_does_not_escape_it() {
    assert_eq!(scan_texts("\"ab\\\nx"), vec![
        (RawTag::UnterminatedString, "\"ab\\"),
        (RawTag::Whitespace, "\n"),
        (RawTag::Ident, "x"),
    ]);
}

#[test]
fn string_with_multibyte_content() {
    assert_eq!(scan_texts("\"λ→\""), vec![(RawTag::String, "\"λ→\"")]);
}

// ─── Char Literals ─────────────────────────────────────────────

#[test]
fn simple_char() {
    assert_eq!(scan_texts("'a'"), vec![(RawTag::Char, "'a'")]);
    assert_eq!(scan_texts("'\\n'"), vec![(RawTag::Char, "'\\n'")]);
    assert_eq!(scan_texts("'λ'"), vec![(RawTag::Char, "'λ'")]);
}

#[test]
fn empty_char() {
    assert_eq!(scan_texts("''"), vec![(RawTag::EmptyChar, "''")]);
}

#[test]
fn overlong_char() {
    assert_eq!(scan_texts("'ab' x"), vec![
        (RawTag::OverlongChar, "'ab'"),
        (RawTag::Whitespace, " "),
        (RawTag::Ident, "x"),
    ]);
}

#[test]
fn unterminated_char_runs_to_line_end() {
    assert_eq!(scan_texts("'ab\nx"), vec![
        (RawTag::UnterminatedChar, "'ab"),
        (RawTag::Whitespace, "\n"),
        (RawTag::Ident, "x"),
    ]);
    assert_eq!(scan_texts("'"), vec![(RawTag::UnterminatedChar, "'")]);
}

#[test]
fn quote_without_char_feature_is_invalid() {
    let tags: Vec<_> = scan_with("'a'", ScanFeatures::empty())
        .iter()
        .map(|t| t.tag)
        .collect();
    assert_eq!(tags, vec![RawTag::InvalidChar, RawTag::Ident, RawTag::InvalidChar]);
}

// ─── Operators ─────────────────────────────────────────────────

#[test]
fn single_char_operators() {
    assert_eq!(scan_tags("+"), vec![RawTag::Plus]);
    assert_eq!(scan_tags("-"), vec![RawTag::Minus]);
    assert_eq!(scan_tags("*"), vec![RawTag::Star]);
    assert_eq!(scan_tags("%"), vec![RawTag::Percent]);
    assert_eq!(scan_tags("&"), vec![RawTag::Ampersand]);
    assert_eq!(scan_tags("|"), vec![RawTag::Pipe]);
    assert_eq!(scan_tags("^"), vec![RawTag::Caret]);
    assert_eq!(scan_tags("~"), vec![RawTag::Tilde]);
    assert_eq!(scan_tags("!"), vec![RawTag::Bang]);
    assert_eq!(scan_tags("="), vec![RawTag::Equal]);
    assert_eq!(scan_tags("<"), vec![RawTag::Less]);
    assert_eq!(scan_tags(">"), vec![RawTag::Greater]);
    assert_eq!(scan_tags("?"), vec![RawTag::Question]);
    assert_eq!(scan_tags(":"), vec![RawTag::Colon]);
}

#[test]
fn compound_operators_use_longest_match() {
    let cases = [
        ("++", RawTag::PlusPlus),
        ("--", RawTag::MinusMinus),
        ("+=", RawTag::PlusEqual),
        ("-=", RawTag::MinusEqual),
        ("*=", RawTag::StarEqual),
        ("%=", RawTag::PercentEqual),
        ("&&", RawTag::AmpersandAmpersand),
        ("||", RawTag::PipePipe),
        ("&=", RawTag::AmpersandEqual),
        ("|=", RawTag::PipeEqual),
        ("^=", RawTag::CaretEqual),
        ("<<", RawTag::Shl),
        (">>", RawTag::Shr),
        ("<<=", RawTag::ShlEqual),
        (">>=", RawTag::ShrEqual),
        ("<=", RawTag::LessEqual),
        (">=", RawTag::GreaterEqual),
        ("==", RawTag::EqualEqual),
        ("!=", RawTag::BangEqual),
        ("??", RawTag::QuestionQuestion),
        ("??=", RawTag::QuestionQuestionEqual),
        ("->", RawTag::Arrow),
        ("=>", RawTag::FatArrow),
        ("::", RawTag::ColonColon),
    ];
    for (source, tag) in cases {
        assert_eq!(scan_tags(source), vec![tag], "{source}");
    }
}

#[test]
fn operator_sequences_split_greedily() {
    assert_eq!(scan_tags("+++"), vec![RawTag::PlusPlus, RawTag::Plus]);
    assert_eq!(scan_tags("==="), vec![RawTag::EqualEqual, RawTag::Equal]);
    assert_eq!(scan_tags("<<<"), vec![RawTag::Shl, RawTag::Less]);
    assert_eq!(scan_tags("-->"), vec![RawTag::MinusMinus, RawTag::Greater]);
}

#[test]
fn fixed_lexeme_tags_match_source_text() {
    let source = "+ - * / % ++ -- += -= *= /= %= & | ^ ~ << >> &= |= ^= <<= >>= \
                  < <= > >= == != && || ! = ? ?? ??= -> => : :: ( ) { } [ ] ; , .";
    for (tag, text) in scan_texts(source) {
        if tag == RawTag::Whitespace {
            continue;
        }
        assert_eq!(tag.lexeme(), Some(text), "{tag:?}");
    }
}

// ─── Delimiters ────────────────────────────────────────────────

#[test]
fn delimiters() {
    assert_eq!(scan_tags("(){}[];,."), vec![
        RawTag::LeftParen,
        RawTag::RightParen,
        RawTag::LeftBrace,
        RawTag::RightBrace,
        RawTag::LeftBracket,
        RawTag::RightBracket,
        RawTag::Semicolon,
        RawTag::Comma,
        RawTag::Dot,
    ]);
}

// ─── Realistic snippet ─────────────────────────────────────────

#[test]
fn declaration_statement() {
    assert_eq!(scan_texts("int x = 5;"), vec![
        (RawTag::Ident, "int"),
        (RawTag::Whitespace, " "),
        (RawTag::Ident, "x"),
        (RawTag::Whitespace, " "),
        (RawTag::Equal, "="),
        (RawTag::Whitespace, " "),
        (RawTag::Number, "5"),
        (RawTag::Semicolon, ";"),
    ]);
}

// === Property tests ===

mod proptest_scanner {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn lengths_cover_arbitrary_input(source in "\\PC{0,64}") {
            let total: usize = scan(&source).iter().map(|t| t.len).sum();
            prop_assert_eq!(total, source.len());
        }

        #[test]
        fn tokens_land_on_char_boundaries(source in any::<String>()) {
            let mut pos = 0;
            for tok in scan(&source) {
                prop_assert!(tok.len > 0);
                pos += tok.len;
                prop_assert!(source.is_char_boundary(pos));
            }
        }

        #[test]
        fn plain_features_cover_input(source in "[ -~\\n\\t]{0,64}") {
            let total: usize = scan_with(&source, ScanFeatures::empty())
                .iter()
                .map(|t| t.len)
                .sum();
            prop_assert_eq!(total, source.len());
        }
    }
}
