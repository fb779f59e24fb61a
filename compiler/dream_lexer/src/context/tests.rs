use super::*;
use crate::convert::convert;
use crate::keywords;
use dream_lexer_core::{Cursor, RawScanner, ScanFeatures};
use pretty_assertions::assert_eq;

/// Helper: run the tracker over `source` and collect every identifier's role.
fn roles(source: &str) -> Vec<(&str, IdentRole)> {
    let mut scanner = RawScanner::new(Cursor::new(source), ScanFeatures::all());
    let mut tracker = ContextTracker::new();
    let mut out = Vec::new();
    let mut pos = 0;
    loop {
        let raw = scanner.next_token();
        let Some((lexeme, _)) = convert(raw.tag) else {
            break;
        };
        let text = &source[pos..pos + raw.len];
        pos += raw.len;
        match lexeme {
            Lexeme::Ident(_) => match keywords::lookup(text) {
                Some(kw) => tracker.keyword(kw),
                None => out.push((text, tracker.ident(text, &source[pos..]))),
            },
            l if l.is_trivia() => {}
            l => tracker.other(l, text),
        }
    }
    out
}

#[test]
fn plain_identifiers() {
    assert_eq!(roles("x = y + z;"), vec![
        ("x", IdentRole::Plain),
        ("y", IdentRole::Plain),
        ("z", IdentRole::Plain),
    ]);
}

#[test]
fn function_declaration() {
    assert_eq!(roles("func add(int a, int b) { }"), vec![
        ("add", IdentRole::FunctionName),
        ("a", IdentRole::Parameter),
        ("b", IdentRole::Parameter),
    ]);
}

#[test]
fn return_type_between_func_and_name() {
    assert_eq!(roles("func int square(int n)"), vec![
        ("square", IdentRole::FunctionName),
        ("n", IdentRole::Parameter),
    ]);
    assert_eq!(roles("func Task<int> load()"), vec![(
        "load",
        IdentRole::FunctionName
    )]);
    assert_eq!(roles("func Task<Point> load()"), vec![
        ("Point", IdentRole::ClassName),
        ("load", IdentRole::FunctionName),
    ]);
}

#[test]
fn nested_generic_return_type() {
    assert_eq!(roles("func Map<Key, List<Point>> index(int n)"), vec![
        ("Map", IdentRole::ClassName),
        ("Key", IdentRole::ClassName),
        ("List", IdentRole::ClassName),
        ("Point", IdentRole::ClassName),
        ("index", IdentRole::FunctionName),
        ("n", IdentRole::Parameter),
    ]);
}

#[test]
fn user_return_type_before_name() {
    assert_eq!(roles("func Point origin()"), vec![
        ("Point", IdentRole::ClassName),
        ("origin", IdentRole::FunctionName),
    ]);
}

#[test]
fn stray_angle_after_func_is_not_generic() {
    // `>` without a matching `<` ends the declaration context
    assert_eq!(roles("func > x"), vec![("x", IdentRole::Plain)]);
}

#[test]
fn user_type_in_parameter_list() {
    assert_eq!(roles("func draw(Point p, Color c)"), vec![
        ("draw", IdentRole::FunctionName),
        ("Point", IdentRole::ClassName),
        ("p", IdentRole::Parameter),
        ("Color", IdentRole::ClassName),
        ("c", IdentRole::Parameter),
    ]);
}

#[test]
fn parameters_end_at_closing_paren() {
    assert_eq!(roles("func f(int a) { a = b; }"), vec![
        ("f", IdentRole::FunctionName),
        ("a", IdentRole::Parameter),
        ("a", IdentRole::Plain),
        ("b", IdentRole::Plain),
    ]);
}

#[test]
fn class_and_struct_names() {
    assert_eq!(roles("class Shape { } struct Point { int x; }"), vec![
        ("Shape", IdentRole::ClassName),
        ("Point", IdentRole::ClassName),
        ("x", IdentRole::Plain),
    ]);
}

#[test]
fn function_calls() {
    assert_eq!(roles("total = sum (a, b);"), vec![
        ("total", IdentRole::Plain),
        ("sum", IdentRole::FunctionCall),
        ("a", IdentRole::Plain),
        ("b", IdentRole::Plain),
    ]);
}

#[test]
fn call_lookahead_stops_at_line_break() {
    assert_eq!(roles("foo\n(1)"), vec![("foo", IdentRole::Plain)]);
}

#[test]
fn console_api() {
    assert_eq!(roles("Console.WriteLine(\"hi\");"), vec![
        ("Console", IdentRole::ConsoleObject),
        ("WriteLine", IdentRole::ConsoleMember),
    ]);
    assert_eq!(roles("Console . ReadLine()"), vec![
        ("Console", IdentRole::ConsoleObject),
        ("ReadLine", IdentRole::ConsoleMember),
    ]);
}

#[test]
fn unknown_console_member_is_a_call() {
    assert_eq!(roles("Console.Beep()"), vec![
        ("Console", IdentRole::ConsoleObject),
        ("Beep", IdentRole::FunctionCall),
    ]);
}

#[test]
fn console_without_dot_is_plain() {
    assert_eq!(roles("Console = 1; WriteLine"), vec![
        ("Console", IdentRole::Plain),
        ("WriteLine", IdentRole::Plain),
    ]);
}

#[test]
fn member_only_after_console_dot() {
    assert_eq!(roles("obj.Write(x)"), vec![
        ("obj", IdentRole::Plain),
        ("Write", IdentRole::FunctionCall),
        ("x", IdentRole::Plain),
    ]);
}

#[test]
fn next_on_line_skips_blanks_only() {
    assert_eq!(next_on_line("  \t("), b'(');
    assert_eq!(next_on_line("\n("), b'\n');
    assert_eq!(next_on_line("   "), 0);
}
