//! Bounded-lookahead buffer between the [`Scanner`] and the parser.

use crate::token::Token;
use crate::Scanner;
use std::collections::VecDeque;

/// How many tokens of lookahead a [`TokenSource`] holds.
///
/// The grammar only needs two or three tokens of lookahead (alias detection
/// peeks at `name : name`), but a slightly deeper window is cheap and makes
/// token dumps on parse failure more useful.
pub const LOOKAHEAD: usize = 16;

/// A bounded-lookahead token buffer over a [`Scanner`].
///
/// Decouples scanning from parsing: the parser can inspect up to
/// [`LOOKAHEAD`] tokens ahead without consuming them and without re-deriving
/// any scanner position state. The buffer is a fixed-capacity ring, filled
/// eagerly at construction by pulling tokens from the scanner; each
/// [`next`](TokenSource::next) pops the front and pulls exactly one
/// replacement token, keeping the buffer full until the scanner runs dry.
///
/// Peeking never blocks and never reorders tokens. The scanner ends its
/// stream with exactly one `Eof` (or `Error`) token, so a conforming parser
/// stops consuming when it sees one of those; consuming or peeking past the
/// end of the stream is a programming-contract violation and panics rather
/// than silently returning stale data.
pub struct TokenSource<'src> {
    scanner: Scanner<'src>,

    /// Ring of unconsumed tokens. Holds `LOOKAHEAD` tokens until the
    /// scanner's stream ends, after which it drains.
    buffer: VecDeque<Token<'src>>,

    /// Set once the scanner has stopped producing tokens.
    exhausted: bool,
}

impl<'src> TokenSource<'src> {
    /// Creates a token source over `scanner`, eagerly pre-filling the
    /// lookahead buffer.
    pub fn new(mut scanner: Scanner<'src>) -> Self {
        let mut buffer = VecDeque::with_capacity(LOOKAHEAD);
        let mut exhausted = false;
        while buffer.len() < LOOKAHEAD {
            match scanner.next() {
                Some(token) => buffer.push_back(token),
                None => {
                    exhausted = true;
                    break;
                }
            }
        }
        Self {
            scanner,
            buffer,
            exhausted,
        }
    }

    /// Returns the source text the underlying scanner reads from.
    pub fn source(&self) -> &'src str {
        self.scanner.source()
    }

    /// Returns the number of tokens currently buffered (unconsumed).
    ///
    /// This is [`LOOKAHEAD`] until the scanner's stream ends, after which
    /// the buffer drains as the final tokens are consumed.
    pub fn buffered_len(&self) -> usize {
        self.buffer.len()
    }

    /// Peeks at the next unconsumed token.
    ///
    /// # Panics
    ///
    /// Panics if the stream has been consumed past its final token.
    pub fn peek(&self) -> &Token<'src> {
        self.peek_nth(0)
    }

    /// Peeks at the `n`th token ahead (0-indexed from the next unconsumed
    /// token) without consuming anything.
    ///
    /// # Panics
    ///
    /// Panics if `n` is not below [`LOOKAHEAD`], or if position `n` lies
    /// past the end of the token stream.
    pub fn peek_nth(&self, n: usize) -> &Token<'src> {
        assert!(
            n < LOOKAHEAD,
            "attempt to peek {n} tokens ahead; lookahead capacity is {LOOKAHEAD}"
        );
        self.buffer
            .get(n)
            .expect("attempt to peek past the end of the token stream")
    }

    /// Consumes and returns the next token, pulling one replacement token
    /// from the scanner to keep the buffer full.
    ///
    /// # Panics
    ///
    /// Panics if called after the final token has already been consumed.
    pub fn next(&mut self) -> Token<'src> {
        let token = self
            .buffer
            .pop_front()
            .expect("token stream consumed past the end of input");
        if !self.exhausted {
            match self.scanner.next() {
                Some(pulled) => self.buffer.push_back(pulled),
                None => self.exhausted = true,
            }
        }
        token
    }
}
