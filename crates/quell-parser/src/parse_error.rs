use crate::SourcePosition;

/// Categorizes parse errors for programmatic handling.
///
/// Each variant carries only what programmatic callers need to branch on;
/// the human-readable context lives in [`ParseError::message`]. Parsing is
/// deterministic, so a given malformed input always produces the same kind
/// at the same byte offset.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ParseErrorKind {
    /// The scanner emitted an `Error` token. The scanner's message is
    /// preserved in the parent [`ParseError`]'s `message`.
    #[error("lexical error")]
    Lexical,

    /// The token stream does not match any expected grammar production.
    #[error("unexpected token")]
    UnexpectedToken,

    /// The document ended before a complete construct was parsed.
    #[error("unexpected end of input")]
    UnexpectedEof,
}

/// A fatal parse error with position information.
///
/// Covers both lexical and syntax errors: a lexical error token surfacing
/// from the scanner is converted into a `ParseError` of kind
/// [`ParseErrorKind::Lexical`], preserving the scanner's message and
/// position. Parsing stops at the first error; no partial document is ever
/// returned alongside one.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{position}: {message}")]
pub struct ParseError {
    /// Human-readable primary error message.
    message: String,

    /// Where in the source the error was detected.
    position: SourcePosition,

    /// Categorized error kind for programmatic handling.
    kind: ParseErrorKind,
}

impl ParseError {
    /// Creates a new parse error.
    pub fn new(
        message: impl Into<String>,
        position: SourcePosition,
        kind: ParseErrorKind,
    ) -> Self {
        Self {
            message: message.into(),
            position,
            kind,
        }
    }

    /// Creates a parse error from a scanner error token, preserving the
    /// scanner's message.
    pub fn from_lexical(message: impl Into<String>, position: SourcePosition) -> Self {
        Self::new(message, position, ParseErrorKind::Lexical)
    }

    /// Returns the human-readable error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the position where the error was detected.
    pub fn position(&self) -> &SourcePosition {
        &self.position
    }

    /// Returns the categorized error kind.
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }
}
