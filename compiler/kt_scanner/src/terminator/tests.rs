use pretty_assertions::assert_eq;

use super::*;
use crate::cursor::SourceCursor;

/// Run the terminator phases at the start of `source`.
fn decide(source: &str, valid: KindSet) -> Decision {
    let mut cursor = SourceCursor::new(source);
    resolve(&mut cursor, valid)
}

fn semi(source: &str) -> Decision {
    decide(source, KindSet::SEMI)
}

// === Line Boundary ===

#[test]
fn end_of_input_inserts() {
    assert_eq!(semi(""), Decision::Insert);
    assert_eq!(semi("  \t"), Decision::Insert);
}

#[test]
fn explicit_semicolon_inserts() {
    assert_eq!(semi(";"), Decision::Insert);
    assert_eq!(semi("   ; x"), Decision::Insert);
    assert_eq!(semi("\n;"), Decision::Insert);
}

#[test]
fn blank_lines_are_trivia() {
    assert_eq!(semi("\n\n    foo()"), Decision::Insert);
    assert_eq!(semi("\n\n    .foo()"), Decision::Suppress);
}

#[test]
fn crlf_and_lone_cr_are_line_breaks() {
    assert_eq!(semi("\r\nfoo"), Decision::Insert);
    assert_eq!(semi("\rfoo"), Decision::Insert);
    assert_eq!(semi("\r\n.foo"), Decision::Suppress);
}

#[test]
fn comment_after_trivia_defers() {
    assert_eq!(semi(" // trailing"), Decision::Comment);
    assert_eq!(semi(" /* c */\nfoo"), Decision::Comment);
    assert_eq!(semi("\n/* c */ foo"), Decision::Comment);
}

// === Same Line ===

#[test]
fn same_line_content_suppresses() {
    assert_eq!(semi(" foo"), Decision::Suppress);
    assert_eq!(semi(" + 1"), Decision::Suppress);
    assert_eq!(semi(" if"), Decision::Suppress);
}

#[test]
fn same_line_import_inserts() {
    assert_eq!(semi(" import a.b"), Decision::Insert);
    assert_eq!(semi(" imports"), Decision::Insert);
    assert_eq!(semi(" impl"), Decision::Suppress);
}

#[test]
fn same_line_bang_hands_over() {
    assert_eq!(semi(" !is Foo"), Decision::NotIs);
    assert_eq!(semi(" != 3"), Decision::NotIs);
}

#[test]
fn same_line_question_mark() {
    assert_eq!(
        decide(" ?.length", KindSet::SEMI | KindSet::SAFE_NAV),
        Decision::SafeNav
    );
    assert_eq!(semi(" ?.length"), Decision::Suppress);
}

// === Operators on the Next Line ===

#[test]
fn member_access_continues() {
    assert_eq!(semi("\n.bar()"), Decision::Suppress);
}

#[test]
fn continuation_punctuation_suppresses() {
    for source in [
        "\n, b", "\n: Int", "\n* 2", "\n% 2", "\n> 1", "\n< 1", "\n= 3", "\n{ }", "\n[0]",
        "\n|| b", "\n&& b",
    ] {
        assert_eq!(semi(source), Decision::Suppress, "{source:?}");
    }
}

#[test]
fn prefix_increment_inserts() {
    assert_eq!(semi("\n++x"), Decision::Insert);
    assert_eq!(semi("\n--x"), Decision::Insert);
}

#[test]
fn signed_literal_inserts() {
    assert_eq!(semi("\n-1"), Decision::Insert);
    assert_eq!(semi("\n+2.5"), Decision::Insert);
}

#[test]
fn binary_plus_minus_continue() {
    assert_eq!(semi("\n+y"), Decision::Suppress);
    assert_eq!(semi("\n+ y"), Decision::Suppress);
    assert_eq!(semi("\n- 1"), Decision::Suppress);
}

#[test]
fn bang_on_next_line() {
    assert_eq!(semi("\n!= y"), Decision::Suppress);
    assert_eq!(semi("\n!flag"), Decision::Insert);
    assert_eq!(
        decide("\n!is Foo", KindSet::SEMI | KindSet::NOT_IS),
        Decision::Insert
    );
    assert_eq!(
        decide("\n!isValid()", KindSet::SEMI | KindSet::NOT_IS),
        Decision::Insert
    );
}

#[test]
fn question_mark_on_next_line() {
    assert_eq!(semi("\n?: 0"), Decision::Insert);
    assert_eq!(
        decide("\n?.foo", KindSet::SEMI | KindSet::SAFE_NAV),
        Decision::SafeNav
    );
}

#[test]
fn other_tokens_insert() {
    assert_eq!(semi("\n123"), Decision::Insert);
    assert_eq!(semi("\n\"text\""), Decision::Insert);
    assert_eq!(semi("\n(a)"), Decision::Insert);
    assert_eq!(semi("\n_x"), Decision::Insert);
}

// === Words ===

#[test]
fn identifier_starts_statement() {
    assert_eq!(semi("\nfoo()"), Decision::Insert);
    assert_eq!(semi("\nval x = 1"), Decision::Insert);
    assert_eq!(semi("\nXyz"), Decision::Insert);
}

#[test]
fn binding_words_continue() {
    assert_eq!(semi("\nby lazy { 1 }"), Decision::Suppress);
    assert_eq!(semi("\nas String"), Decision::Suppress);
    assert_eq!(semi("\nwhere T : Any"), Decision::Suppress);
    assert_eq!(semi("\ninstanceof X"), Decision::Suppress);
}

#[test]
fn else_continues_if() {
    assert_eq!(semi("\nelse { b }"), Decision::Suppress);
    assert_eq!(semi("\nelse-x"), Decision::Suppress);
}

#[test]
fn else_arrow_is_when_entry() {
    assert_eq!(semi("\nelse -> 0"), Decision::Insert);
    assert_eq!(semi("\nelse->0"), Decision::Insert);
}

#[test]
fn in_needs_membership_requested() {
    assert_eq!(semi("\nin 0..9"), Decision::Suppress);
    assert_eq!(
        decide("\nin 0..9", KindSet::SEMI | KindSet::IN),
        Decision::Insert
    );
}

#[test]
fn constructor_word() {
    assert_eq!(semi("\nconstructor(x: Int)"), Decision::Suppress);
    assert_eq!(
        decide("\nconstructor(x: Int)", KindSet::MEMBER_SEMI),
        Decision::Insert
    );
    assert_eq!(semi("\nconstructor.name"), Decision::Insert);
    assert_eq!(semi("\nconstructor = 1"), Decision::Insert);
}

#[test]
fn get_as_identifier() {
    assert_eq!(semi("\nget"), Decision::Insert);
    assert_eq!(semi("\nget()"), Decision::Insert);
    let accessor = KindSet::SEMI | KindSet::GET;
    assert_eq!(decide("\nget[0]", accessor), Decision::Insert);
}

#[test]
fn get_as_accessor() {
    let accessor = KindSet::SEMI | KindSet::GET;
    assert_eq!(decide("\nget() = 1", accessor), Decision::Suppress);
    assert_eq!(decide("\nget", accessor), Decision::Suppress);
}

#[test]
fn set_as_identifier() {
    assert_eq!(semi("\nset = 3"), Decision::Insert);
    let accessor = KindSet::SEMI | KindSet::SET;
    assert_eq!(decide("\nset[0] = 1", accessor), Decision::Insert);
    assert_eq!(decide("\nset.size", accessor), Decision::Insert);
}

#[test]
fn set_with_parameter_list() {
    let accessor = KindSet::SEMI | KindSet::SET;
    assert_eq!(decide("\nset(v) = field", accessor), Decision::Suppress);
    assert_eq!(
        decide("\nset(v) { field = v }", accessor),
        Decision::Suppress
    );
    assert_eq!(decide("\nset(v)\nfoo()", accessor), Decision::Insert);
    assert_eq!(decide("\nset(v)  \r\nfoo()", accessor), Decision::Insert);
    assert_eq!(decide("\nset(v)", accessor), Decision::Suppress);
    assert_eq!(decide("\nset(v", accessor), Decision::Suppress);
}

#[test]
fn set_comment_before_newline_produces_nothing() {
    let accessor = KindSet::SEMI | KindSet::SET;
    assert_eq!(decide("\nset(v) // note\n", accessor), Decision::Suppress);
}

#[test]
fn set_as_accessor() {
    let accessor = KindSet::SEMI | KindSet::SET;
    assert_eq!(decide("\nset\n", accessor), Decision::Suppress);
}

#[test]
fn modifiers_are_skipped() {
    let accessor = KindSet::SEMI | KindSet::GET;
    assert_eq!(decide("\nprivate get", accessor), Decision::Suppress);
    assert_eq!(
        decide("\nprotected\n  inline get", accessor),
        Decision::Suppress
    );
    assert_eq!(semi("\noverride fun x()"), Decision::Insert);
    assert_eq!(semi("\nprivate set = 1"), Decision::Insert);
}

#[test]
fn modifier_before_non_word_inserts() {
    assert_eq!(semi("\npublic\n"), Decision::Insert);
    assert_eq!(semi("\ninternal @Ann"), Decision::Insert);
}

#[test]
fn modifier_prefix_is_identifier() {
    assert_eq!(semi("\npublicKey.size"), Decision::Insert);
    assert_eq!(semi("\nopenness"), Decision::Insert);
}

// === Annotations ===

#[test]
fn annotation_before_constructor() {
    let ctor = KindSet::SEMI | KindSet::CONSTRUCTOR;
    assert_eq!(decide("\n@Inject constructor()", ctor), Decision::Suppress);
    assert_eq!(
        decide("\n@Inject\n  constructor()", ctor),
        Decision::Suppress
    );
    assert_eq!(decide("\n@Deprecated fun f()", ctor), Decision::Insert);
}

#[test]
fn annotation_before_accessor() {
    let accessor = KindSet::SEMI | KindSet::GET;
    assert_eq!(
        decide("\n@JvmName(\"x y\") get() = 1", accessor),
        Decision::Suppress
    );
    assert_eq!(decide("\n@Ann\nfoo()", accessor), Decision::Insert);
    assert_eq!(decide("\n@Ann /* c */ get", accessor), Decision::Insert);
    assert_eq!(decide("\n@A @B get", accessor), Decision::Suppress);
}

#[test]
fn annotation_at_end_of_input() {
    let ctor = KindSet::SEMI | KindSet::CONSTRUCTOR;
    assert_eq!(decide("\n@Inject", ctor), Decision::Insert);
    let accessor = KindSet::SEMI | KindSet::SET;
    assert_eq!(decide("\n@Ann(", accessor), Decision::Insert);
}

#[test]
fn plain_annotation_inserts() {
    assert_eq!(semi("\n@Suppress(\"x\") fun f()"), Decision::Insert);
}
