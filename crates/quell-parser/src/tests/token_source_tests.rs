//! Tests for the bounded-lookahead token source.

use crate::tests::utils;
use crate::token::TokenKind;
use crate::Scanner;
use crate::TokenSource;
use crate::LOOKAHEAD;

/// Builds a query with more than `LOOKAHEAD` tokens so refill behavior is
/// actually exercised.
fn long_query() -> String {
    let fields = (0..LOOKAHEAD * 2)
        .map(|n| format!("field{n}"))
        .collect::<Vec<_>>()
        .join(" ");
    format!("{{ {fields} }}")
}

/// Peeking returns the next token without consuming it; repeated peeks are
/// stable.
#[test]
fn test_peek_is_stable() {
    let mut source = TokenSource::new(Scanner::new("{hello}"));
    assert_eq!(source.peek().kind, TokenKind::CurlyOpen);
    assert_eq!(source.peek().kind, TokenKind::CurlyOpen);
    assert_eq!(source.next().kind, TokenKind::CurlyOpen);
    assert_eq!(source.peek().kind, utils::name("hello"));
}

/// `peek_nth` looks ahead without consuming and without reordering.
#[test]
fn test_peek_nth_ordering() {
    let source = TokenSource::new(Scanner::new("{me:user}"));
    assert_eq!(source.peek_nth(0).kind, TokenKind::CurlyOpen);
    assert_eq!(source.peek_nth(1).kind, utils::name("me"));
    assert_eq!(source.peek_nth(2).kind, TokenKind::Colon);
    assert_eq!(source.peek_nth(3).kind, utils::name("user"));
}

/// The buffer is pre-filled eagerly and stays full while the scanner still
/// has tokens: every consumption pulls exactly one replacement.
#[test]
fn test_buffer_stays_full_until_exhausted() {
    let query = long_query();
    let mut source = TokenSource::new(Scanner::new(&query));
    assert_eq!(source.buffered_len(), LOOKAHEAD);
    for _ in 0..LOOKAHEAD {
        source.next();
        assert_eq!(source.buffered_len(), LOOKAHEAD);
    }
}

/// Consuming through the source yields exactly the scanner's sequence.
#[test]
fn test_no_reordering_against_scanner() {
    let query = long_query();
    let direct: Vec<_> = Scanner::new(&query).collect();

    let mut source = TokenSource::new(Scanner::new(&query));
    let mut streamed = Vec::new();
    loop {
        let token = source.next();
        let done = matches!(token.kind, TokenKind::Eof);
        streamed.push(token);
        if done {
            break;
        }
    }
    assert_eq!(direct, streamed);
}

/// For inputs shorter than the lookahead window, the buffer simply holds
/// the whole stream.
#[test]
fn test_short_input_buffering() {
    let source = TokenSource::new(Scanner::new("{hello}"));
    assert_eq!(source.buffered_len(), 4);
}

/// Consuming past the final token is a programming-contract violation.
#[test]
#[should_panic(expected = "consumed past the end")]
fn test_consume_past_end_panics() {
    let mut source = TokenSource::new(Scanner::new("{hello}"));
    for _ in 0..5 {
        source.next();
    }
}

/// Peeking past the lookahead capacity is a programming-contract violation.
#[test]
#[should_panic(expected = "lookahead capacity")]
fn test_peek_past_capacity_panics() {
    let query = long_query();
    let source = TokenSource::new(Scanner::new(&query));
    source.peek_nth(LOOKAHEAD);
}

/// Peeking past the end of a short stream is a programming-contract
/// violation rather than stale data.
#[test]
#[should_panic(expected = "past the end of the token stream")]
fn test_peek_past_stream_end_panics() {
    let source = TokenSource::new(Scanner::new("{hello}"));
    source.peek_nth(4);
}
