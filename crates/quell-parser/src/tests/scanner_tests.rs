//! Token-sequence tests for the scanner.
//!
//! For fixed inputs the emitted kind/value sequence is deterministic and
//! exhaustively enumerable, so most tests here assert the full stream.

use crate::tests::utils;
use crate::tests::utils::assert_scan_fails;
use crate::token::TokenKind;
use crate::token::TypeKind;
use crate::ByteSpan;
use crate::Scanner;

/// The hello-world document: `{hello}`.
#[test]
fn test_scan_hello_world() {
    assert_eq!(
        utils::scan_kinds("{hello}"),
        vec![
            TokenKind::CurlyOpen,
            utils::name("hello"),
            TokenKind::CurlyClose,
            TokenKind::Eof,
        ],
    );
}

/// Token spans carry exact byte offsets.
#[test]
fn test_scan_spans() {
    let spans: Vec<ByteSpan> = Scanner::new("{hello}").map(|token| token.span).collect();
    assert_eq!(
        spans,
        vec![
            ByteSpan::new(0, 1),
            ByteSpan::new(1, 6),
            ByteSpan::new(6, 7),
            ByteSpan::new(7, 7),
        ],
    );
}

/// A named operation with an argument and a nested selection.
#[test]
fn test_scan_simple_query() {
    let source = "
        query sample {
            user(id: 4) {
                firstName
            }
        }";
    assert_eq!(
        utils::scan_kinds(source),
        vec![
            TokenKind::Query,
            utils::name("sample"),
            TokenKind::CurlyOpen,
            utils::name("user"),
            TokenKind::ParenOpen,
            utils::name("id"),
            TokenKind::Colon,
            utils::int_value("4"),
            TokenKind::ParenClose,
            TokenKind::CurlyOpen,
            utils::name("firstName"),
            TokenKind::CurlyClose,
            TokenKind::CurlyClose,
            TokenKind::Eof,
        ],
    );
}

/// Aliases, float arguments, and two levels of nesting.
#[test]
fn test_scan_complex_query() {
    let source = "query user(id:123) {
        close_friends: friends(max: 5, distance: 1.2) {
            picture
        }
    }";
    assert_eq!(
        utils::scan_kinds(source),
        vec![
            TokenKind::Query,
            utils::name("user"),
            TokenKind::ParenOpen,
            utils::name("id"),
            TokenKind::Colon,
            utils::int_value("123"),
            TokenKind::ParenClose,
            TokenKind::CurlyOpen,
            utils::name("close_friends"),
            TokenKind::Colon,
            utils::name("friends"),
            TokenKind::ParenOpen,
            utils::name("max"),
            TokenKind::Colon,
            utils::int_value("5"),
            utils::name("distance"),
            TokenKind::Colon,
            utils::float_value("1.2"),
            TokenKind::ParenClose,
            TokenKind::CurlyOpen,
            utils::name("picture"),
            TokenKind::CurlyClose,
            TokenKind::CurlyClose,
            TokenKind::Eof,
        ],
    );
}

/// An alias inside a selection is `name : name` with a bare colon between.
#[test]
fn test_scan_alias() {
    assert_eq!(
        utils::scan_kinds("{me:user}"),
        vec![
            TokenKind::CurlyOpen,
            utils::name("me"),
            TokenKind::Colon,
            utils::name("user"),
            TokenKind::CurlyClose,
            TokenKind::Eof,
        ],
    );
}

/// A second colon directly after an alias pair is a lexical error: the
/// look-behind sees `name` preceded by `:` and refuses the alias reading.
#[test]
fn test_scan_alias_chain_fails() {
    let kinds = utils::scan_kinds("{a: b: c}");
    assert_eq!(
        &kinds[..4],
        &[
            TokenKind::CurlyOpen,
            utils::name("a"),
            TokenKind::Colon,
            utils::name("b"),
        ],
    );
    assert!(matches!(kinds.last(), Some(TokenKind::Error { .. })));
    assert_eq!(kinds.len(), 5);
}

/// Commas are separators, equivalent to whitespace, and never emitted.
#[test]
fn test_scan_commas_are_whitespace() {
    assert_eq!(
        utils::scan_kinds("{a,b}"),
        vec![
            TokenKind::CurlyOpen,
            utils::name("a"),
            utils::name("b"),
            TokenKind::CurlyClose,
            TokenKind::Eof,
        ],
    );
}

/// `#` comments run to end of line and are discarded.
#[test]
fn test_scan_comments_discarded() {
    let source = "# leading comment\n{hello} # trailing";
    assert_eq!(
        utils::scan_kinds(source),
        vec![
            TokenKind::CurlyOpen,
            utils::name("hello"),
            TokenKind::CurlyClose,
            TokenKind::Eof,
        ],
    );
}

/// String arguments carry the raw inner text without the quotes.
#[test]
fn test_scan_string_argument() {
    let source = r#"query city: GET(url:"http://api.openweathermap.org/data/2.5/weather") {
        name
    }"#;
    let kinds = utils::scan_kinds(source);
    assert_eq!(
        &kinds[..8],
        &[
            TokenKind::Query,
            utils::name("city"),
            TokenKind::Colon,
            utils::name("GET"),
            TokenKind::ParenOpen,
            utils::name("url"),
            TokenKind::Colon,
            utils::string_value("http://api.openweathermap.org/data/2.5/weather"),
        ],
    );
}

/// Escape sequences are validated but left unprocessed in the payload.
#[test]
fn test_scan_string_escapes() {
    let source = r#"query q: get(s: "a\"b\\c\néd") { x }"#;
    let kinds = utils::scan_kinds(source);
    assert!(kinds.contains(&utils::string_value(r#"a\"b\\c\néd"#)));
}

/// An unterminated string is a lexical error.
#[test]
fn test_scan_unterminated_string() {
    assert_scan_fails(r#"query q: get(s: "abc"#);
}

/// A backslash escape outside the permitted set is a lexical error.
#[test]
fn test_scan_invalid_escape() {
    assert_scan_fails(r#"query q: get(s: "a\qb") { x }"#);
}

/// A unicode escape requires exactly four hex digits.
#[test]
fn test_scan_short_unicode_escape() {
    assert_scan_fails(r#"query q: get(s: "a\u00e") { x }"#);
}

/// A number may not be immediately followed by a letter.
#[test]
fn test_scan_number_then_letter() {
    assert_scan_fails("query q: get(n: 5x) { f }");
}

/// Signed numbers and trailing-dot floats follow the number rule: optional
/// sign, digit run, optional `.` and digit run.
#[test]
fn test_scan_signed_numbers() {
    let kinds = utils::scan_kinds("query q: get(a: -12, b: +3.5) { f }");
    assert!(kinds.contains(&utils::int_value("-12")));
    assert!(kinds.contains(&utils::float_value("+3.5")));
}

/// Typed variable declarations with defaults: `$id: Int = 4`.
#[test]
fn test_scan_variable_with_default() {
    assert_eq!(
        utils::scan_kinds("query user($id: Int = 4) { name }"),
        vec![
            TokenKind::Query,
            utils::name("user"),
            TokenKind::ParenOpen,
            utils::variable("id"),
            TokenKind::Colon,
            TokenKind::TypeName(TypeKind::Int),
            TokenKind::Equals,
            utils::int_value("4"),
            TokenKind::ParenClose,
            TokenKind::CurlyOpen,
            utils::name("name"),
            TokenKind::CurlyClose,
            TokenKind::Eof,
        ],
    );
}

/// The `$` of a variable is consumed and excluded from the payload.
#[test]
fn test_scan_variable_without_default() {
    let kinds = utils::scan_kinds("query user($id: Boolean) { name }");
    assert!(kinds.contains(&utils::variable("id")));
    assert!(kinds.contains(&TokenKind::TypeName(TypeKind::Boolean)));
    assert!(!kinds.iter().any(|kind| matches!(kind, TokenKind::Error { .. })));
}

/// `[` opens a nested value context that recurses until the matching `]`.
#[test]
fn test_scan_array_values() {
    let kinds = utils::scan_kinds("query q: get(ids: [1, 2, [3]]) { x }");
    let expected = [
        TokenKind::BracketOpen,
        utils::int_value("1"),
        utils::int_value("2"),
        TokenKind::BracketOpen,
        utils::int_value("3"),
        TokenKind::BracketClose,
        TokenKind::BracketClose,
    ];
    let start = kinds
        .iter()
        .position(|kind| *kind == TokenKind::BracketOpen)
        .unwrap();
    assert_eq!(&kinds[start..start + expected.len()], &expected);
}

/// Directives with parenthesized arguments.
#[test]
fn test_scan_directive_with_args() {
    let kinds = utils::scan_kinds("{ user @include(if: true) { name } }");
    let expected = [
        TokenKind::At,
        utils::name("include"),
        TokenKind::ParenOpen,
        utils::name("if"),
        TokenKind::Colon,
        TokenKind::True,
        TokenKind::ParenClose,
    ];
    let start = kinds.iter().position(|kind| *kind == TokenKind::At).unwrap();
    assert_eq!(&kinds[start..start + expected.len()], &expected);
}

/// Directive arguments are optional.
#[test]
fn test_scan_directive_without_args() {
    assert_eq!(
        utils::scan_kinds("{ user @uppercase }"),
        vec![
            TokenKind::CurlyOpen,
            utils::name("user"),
            TokenKind::At,
            utils::name("uppercase"),
            TokenKind::CurlyClose,
            TokenKind::Eof,
        ],
    );
}

/// Fragment definitions and the `on` clause.
#[test]
fn test_scan_fragment_definition() {
    assert_eq!(
        utils::scan_kinds("fragment friendFields on User { id name }"),
        vec![
            TokenKind::Fragment,
            utils::name("friendFields"),
            TokenKind::On,
            utils::name("User"),
            TokenKind::CurlyOpen,
            utils::name("id"),
            utils::name("name"),
            TokenKind::CurlyClose,
            TokenKind::Eof,
        ],
    );
}

/// A fragment spread is `...` followed by a name.
#[test]
fn test_scan_fragment_spread() {
    assert_eq!(
        utils::scan_kinds("{ user { ...friendFields } }"),
        vec![
            TokenKind::CurlyOpen,
            utils::name("user"),
            TokenKind::CurlyOpen,
            TokenKind::Ellipsis,
            utils::name("friendFields"),
            TokenKind::CurlyClose,
            TokenKind::CurlyClose,
            TokenKind::Eof,
        ],
    );
}

/// Operation keywords must be followed by whitespace or a comment.
#[test]
fn test_scan_keyword_requires_separator() {
    assert_scan_fails("query{hello}");
}

/// A document that ends inside a selection is a lexical error.
#[test]
fn test_scan_unclosed_selection() {
    assert_scan_fails("{hello");
}

/// Anything else at document level is rejected.
#[test]
fn test_scan_bad_document_start() {
    assert_scan_fails("hello");
}

/// After an error token the scanner halts: no further tokens, no EOF.
#[test]
fn test_scan_halts_after_error() {
    let kinds = utils::scan_kinds("{a: b: c}");
    let error_count = kinds
        .iter()
        .filter(|kind| matches!(kind, TokenKind::Error { .. }))
        .count();
    assert_eq!(error_count, 1);
    assert!(matches!(kinds.last(), Some(TokenKind::Error { .. })));
    assert!(!kinds.contains(&TokenKind::Eof));
}

/// A malformed input produces the same error at the same byte offset every
/// time it is scanned.
#[test]
fn test_scan_error_determinism() {
    let first: Vec<_> = Scanner::new("query q: get(n: 5x) { f }").collect();
    let second: Vec<_> = Scanner::new("query q: get(n: 5x) { f }").collect();
    assert_eq!(first, second);
}

/// Keywords are only keywords at document level; inside a selection they
/// scan as plain names.
#[test]
fn test_scan_keywords_inside_selection_are_names() {
    assert_eq!(
        utils::scan_kinds("{query mutation on}"),
        vec![
            TokenKind::CurlyOpen,
            utils::name("query"),
            utils::name("mutation"),
            utils::name("on"),
            TokenKind::CurlyClose,
            TokenKind::Eof,
        ],
    );
}
