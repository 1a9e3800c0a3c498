use crate::token::TokenKind;
use crate::ByteSpan;

/// A single Quell token: a kind (with any text payload) plus the byte span
/// it was scanned from.
///
/// Tokens are immutable once emitted. Whitespace, commas, and `#` comments
/// are separators and never appear as tokens.
#[derive(Clone, Debug, PartialEq)]
pub struct Token<'src> {
    /// The kind of token (including `Error` for lexical errors).
    pub kind: TokenKind<'src>,

    /// The source location of this token.
    pub span: ByteSpan,
}

impl<'src> Token<'src> {
    /// Creates a new token.
    pub fn new(kind: TokenKind<'src>, span: ByteSpan) -> Self {
        Self { kind, span }
    }

    /// Returns the text payload of this token, if it carries one.
    pub fn text(&self) -> Option<&str> {
        self.kind.text()
    }
}
