//! Shared helpers for the parser crate's tests.

use crate::token::TokenKind;
use crate::Scanner;
use std::borrow::Cow;

/// Scans `source` to completion and returns every emitted token kind.
pub fn scan_kinds(source: &str) -> Vec<TokenKind<'_>> {
    Scanner::new(source).map(|token| token.kind).collect()
}

/// Shorthand for an expected `Name` token kind.
pub fn name(text: &str) -> TokenKind<'_> {
    TokenKind::Name(Cow::Borrowed(text))
}

/// Shorthand for an expected `Variable` token kind.
pub fn variable(text: &str) -> TokenKind<'_> {
    TokenKind::Variable(Cow::Borrowed(text))
}

/// Shorthand for an expected `IntValue` token kind.
pub fn int_value(text: &str) -> TokenKind<'_> {
    TokenKind::IntValue(Cow::Borrowed(text))
}

/// Shorthand for an expected `FloatValue` token kind.
pub fn float_value(text: &str) -> TokenKind<'_> {
    TokenKind::FloatValue(Cow::Borrowed(text))
}

/// Shorthand for an expected `StringValue` token kind.
pub fn string_value(text: &str) -> TokenKind<'_> {
    TokenKind::StringValue(Cow::Borrowed(text))
}

/// Asserts the scan of `source` ends in an `Error` token (and that nothing
/// follows it).
pub fn assert_scan_fails(source: &str) {
    let kinds = scan_kinds(source);
    let last = kinds.last().unwrap_or_else(|| panic!("no tokens for {source:?}"));
    assert!(
        matches!(last, TokenKind::Error { .. }),
        "expected a lexical error for {source:?}, got {kinds:?}"
    );
}
