use pretty_assertions::assert_eq;

use super::*;
use crate::cursor::SourceCursor;

fn run<'s>(
    source: &'s str,
    resolver: impl FnOnce(&mut SourceCursor<'s>) -> Option<TokenKind>,
) -> (Option<TokenKind>, &'s str) {
    let mut cursor = SourceCursor::new(source);
    let kind = resolver(&mut cursor);
    let span = cursor.finish();
    (kind, &source[span.token])
}

// === !is ===

#[test]
fn not_is_before_type() {
    assert_eq!(run("!is Foo", not_is), (Some(TokenKind::NotIs), "!is"));
}

#[test]
fn not_is_before_punctuation_or_end() {
    assert_eq!(run("!is(", not_is).0, Some(TokenKind::NotIs));
    assert_eq!(run("!is", not_is).0, Some(TokenKind::NotIs));
}

#[test]
fn not_is_prefix_of_identifier() {
    assert_eq!(run("!isValid", not_is).0, None);
    assert_eq!(run("!is2", not_is).0, None);
}

#[test]
fn bang_without_is() {
    assert_eq!(run("!in x", not_is).0, None);
    assert_eq!(run("!= y", not_is).0, None);
    assert_eq!(run("!i", not_is).0, None);
}

// === in ===

#[test]
fn bare_in() {
    assert_eq!(run("in 1..10", membership), (Some(TokenKind::In), "in"));
    assert_eq!(run("in(list)", membership).0, Some(TokenKind::In));
}

#[test]
fn in_prefix_of_identifier() {
    assert_eq!(run("index", membership).0, None);
    assert_eq!(run("in2", membership).0, None);
    assert_eq!(run("if", membership).0, None);
}

// === ?. ===

#[test]
fn adjacent_safe_nav() {
    assert_eq!(run("?.length", safe_nav), (Some(TokenKind::SafeNav), "?."));
}

#[test]
fn safe_nav_across_newline() {
    assert_eq!(
        run("?\n    .length", safe_nav),
        (Some(TokenKind::SafeNav), "?\n    .")
    );
}

#[test]
fn leading_whitespace_is_trivia() {
    assert_eq!(run("  ?.x", safe_nav), (Some(TokenKind::SafeNav), "?."));
}

#[test]
fn nullable_suffix_is_not_safe_nav() {
    assert_eq!(run("? = null", safe_nav).0, None);
    assert_eq!(run("?: 0", safe_nav).0, None);
    assert_eq!(run(". x", safe_nav).0, None);
}
