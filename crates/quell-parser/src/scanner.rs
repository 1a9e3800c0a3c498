//! State-machine scanner for Quell query text.
//!
//! The scanner converts raw query text into a stream of [`Token`]s. It is an
//! explicit state machine: [`ScanState`] is data, and the driver loop in
//! [`Scanner::next`] runs state handlers until one of them emits a token.
//! Each handler inspects the next character (after discarding whitespace,
//! commas, and `#` comments) and either emits a token or transitions to
//! another state without emitting.
//!
//! The scanner enforces lexical-level grammar only. It tracks just enough
//! context to tokenize correctly:
//!
//! - a selection-depth counter, so a `}` at depth zero returns the machine
//!   to the document-level state rather than the field-level one;
//! - a two-token look-behind, so a `:` is only lexed as an alias separator
//!   directly after a name that was not itself preceded by a colon;
//! - an array-nesting counter, so `[` re-enters the general value rule until
//!   the matching `]`.
//!
//! The scanner is a synchronous pull-based producer: tokens are lexed on
//! demand through the [`Iterator`] impl, with no background task or channel.
//! A lexical error emits a single [`TokenKind::Error`] token and halts the
//! machine; a successful scan ends with exactly one [`TokenKind::Eof`].

use crate::token::Token;
use crate::token::TokenKind;
use crate::token::TypeKind;
use crate::ByteSpan;
use memchr::memchr2;
use std::borrow::Cow;

/// Escape characters permitted after a backslash in string literals, plus
/// `\uXXXX` which is handled separately.
const ESCAPE_CHARACTERS: &str = "\"\\/bfnrt";

/// The scanner's states. Names follow the grammar position they handle, not
/// the token they emit; most states can emit several different tokens.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ScanState {
    /// Document level: operation keywords, a bare `{`, or end of input.
    Document,
    /// Expecting a field (or operation, or alias) name.
    Field,
    /// After a complete field name: arguments, directives, selections,
    /// aliases, spreads, or sibling fields.
    AfterField,
    /// Directly after `@`: the directive name.
    DirectiveName,
    /// After a directive name: optional parenthesized arguments.
    AfterDirectiveName,
    /// Inside `( ... )`: an argument name, variable, bare value, or `)`.
    Argument,
    /// After an argument name or variable: the `:` separator.
    ArgColon,
    /// Scanning a value; `then` says where to go once the value is done.
    Value { then: ValueCont },
    /// After a typed variable's type: an optional `=` default value.
    DefaultValue,
    /// Expecting the `{` that begins a selection.
    SelectionOpen,
    /// Expecting the `}` that ends the current selection.
    SelectionClose,
    /// After the `fragment` keyword: the fragment name.
    FragmentName,
    /// After a fragment name: the `on` keyword.
    FragmentOn,
    /// After `on`: the type condition name.
    FragmentType,
    /// After a fragment's type condition: directives or the selection.
    AfterFragmentType,
}

/// Where the machine resumes after the `Value` state completes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ValueCont {
    /// Value was an argument value; check for an `=` default next.
    DefaultValue,
    /// Value was a default or positional value; back to the argument list.
    Argument,
}

/// Simplified token tags retained for the two-token look-behind.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Lookbehind {
    None,
    Name,
    Colon,
    Ellipsis,
    Other,
}

/// A streaming scanner over `&str` input.
///
/// Produces [`Token`]s with zero-copy payloads borrowed from the source
/// text. Construct one with [`Scanner::new`] and drive it as an iterator;
/// the stream ends after an `Eof` or `Error` token.
///
/// ```rust
/// use quell_parser::Scanner;
///
/// for token in Scanner::new("{hello}") {
///     println!("{:?}", token.kind);
/// }
/// // CurlyOpen
/// // Name("hello")
/// // CurlyClose
/// // Eof
/// ```
pub struct Scanner<'src> {
    /// The full source text being scanned.
    source: &'src str,

    /// Current byte offset; the text left to scan is `&source[pos..]`.
    pos: usize,

    /// Byte offset where the pending token started.
    start: usize,

    /// The state the driver loop will run next.
    state: ScanState,

    /// Selection depth: `{` increments, `}` decrements. Reaching zero on a
    /// decrement returns the machine to the document-level state.
    depth: usize,

    /// Array-literal nesting inside the `Value` state.
    array_depth: usize,

    /// Two-token look-behind over emitted tokens, most recent first.
    lookbehind: [Lookbehind; 2],

    /// Set once `Eof` or an `Error` token has been emitted.
    finished: bool,
}

impl<'src> Scanner<'src> {
    /// Creates a new scanner over `source`.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            pos: 0,
            start: 0,
            state: ScanState::Document,
            depth: 0,
            array_depth: 0,
            lookbehind: [Lookbehind::None; 2],
            finished: false,
        }
    }

    /// Returns the source text this scanner reads from.
    pub fn source(&self) -> &'src str {
        self.source
    }

    // =========================================================================
    // Character-level helpers
    // =========================================================================

    /// Returns the text that has not been consumed yet.
    fn remaining(&self) -> &'src str {
        &self.source[self.pos..]
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Consumes the next character.
    fn bump(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Consumes the next character if it equals `expected`.
    fn accept_char(&mut self, expected: char) -> bool {
        if self.peek_char() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consumes a run of characters matching `pred`; returns the run length.
    fn accept_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let mut count = 0;
        while let Some(ch) = self.peek_char() {
            if !pred(ch) {
                break;
            }
            self.pos += ch.len_utf8();
            count += 1;
        }
        count
    }

    /// Returns `true` if the unconsumed text starts with `word`.
    fn has_prefix(&self, word: &str) -> bool {
        self.remaining().starts_with(word)
    }

    /// Consumes `word` if the unconsumed text starts with it.
    fn accept_keyword(&mut self, word: &str) -> bool {
        if self.has_prefix(word) {
            self.pos += word.len();
            true
        } else {
            false
        }
    }

    /// Returns `true` if the next character is a separator (whitespace,
    /// comma, or the start of a comment). Keywords must be followed by one.
    fn at_separator(&self) -> bool {
        matches!(self.peek_char(), Some(ch) if is_whitespace(ch) || ch == '#')
    }

    /// Discards whitespace, commas, and `#` line comments, then resets the
    /// token start to the current position.
    fn skip_trivia(&mut self) {
        loop {
            self.accept_while(is_whitespace);
            if self.peek_char() == Some('#') {
                // Comment runs to the next line terminator (or end of input).
                match memchr2(b'\n', b'\r', self.remaining().as_bytes()) {
                    Some(idx) => self.pos += idx,
                    None => self.pos = self.source.len(),
                }
                continue;
            }
            break;
        }
        self.start = self.pos;
    }

    // =========================================================================
    // Token emission
    // =========================================================================

    /// Emits a token covering `start..pos` and records its look-behind tag.
    fn emit(&mut self, kind: TokenKind<'src>) -> Token<'src> {
        let span = ByteSpan::new(self.start as u32, self.pos as u32);
        log::trace!("scanner: emit {:?} at {}..{}", kind.describe(), span.start, span.end);
        self.lookbehind[1] = self.lookbehind[0];
        self.lookbehind[0] = match kind {
            TokenKind::Name(_) => Lookbehind::Name,
            TokenKind::Colon => Lookbehind::Colon,
            TokenKind::Ellipsis => Lookbehind::Ellipsis,
            _ => Lookbehind::Other,
        };
        self.start = self.pos;
        Token::new(kind, span)
    }

    /// Emits the final `Eof` token and halts the machine.
    fn emit_eof(&mut self) -> Token<'src> {
        self.finished = true;
        self.emit(TokenKind::Eof)
    }

    /// Emits an `Error` token carrying `message` and halts the machine.
    fn error(&mut self, message: impl Into<String>) -> Token<'src> {
        let message = message.into();
        log::debug!("scanner: error at byte {}: {message}", self.start);
        self.finished = true;
        let span = ByteSpan::new(self.start as u32, self.pos as u32);
        Token::new(TokenKind::Error { message }, span)
    }

    /// The text of the pending token.
    fn pending(&self) -> &'src str {
        &self.source[self.start..self.pos]
    }

    // =========================================================================
    // Scan-rule helpers shared between states
    // =========================================================================

    /// Scans a name: a letter or underscore followed by letters, digits, and
    /// underscores. The caller has verified the first character.
    fn scan_name(&mut self) -> Token<'src> {
        self.accept_while(is_alphanumeric);
        let text = self.pending();
        self.emit(TokenKind::Name(Cow::Borrowed(text)))
    }

    /// Scans a `$variable`. The `$` is consumed and excluded from the
    /// emitted payload.
    fn scan_variable(&mut self) -> Result<Token<'src>, Token<'src>> {
        self.bump();
        self.start = self.pos;
        if !matches!(self.peek_char(), Some(ch) if is_alpha(ch)) {
            return Err(self.error("a variable `$` must be followed by a letter or underscore"));
        }
        self.accept_while(is_alphanumeric);
        let text = self.pending();
        Ok(self.emit(TokenKind::Variable(Cow::Borrowed(text))))
    }

    /// Scans a number: optional sign, digit run, optional `.` and digit run.
    ///
    /// A number must not be immediately followed by a letter or underscore.
    fn scan_number(&mut self) -> Result<Token<'src>, Token<'src>> {
        let _ = self.accept_char('+') || self.accept_char('-');

        let mut float = false;
        let mut length = self.accept_while(|ch| ch.is_ascii_digit());
        if self.accept_char('.') {
            float = true;
            length += self.accept_while(|ch| ch.is_ascii_digit());
        }

        if length == 0 {
            return Err(self.error("a number must contain at least one digit"));
        }
        if matches!(self.peek_char(), Some(ch) if is_alpha(ch)) {
            return Err(self.error("a number may not be immediately followed by a letter"));
        }

        let text = self.pending();
        let kind = if float {
            TokenKind::FloatValue(Cow::Borrowed(text))
        } else {
            TokenKind::IntValue(Cow::Borrowed(text))
        };
        Ok(self.emit(kind))
    }

    /// Scans a `"`-delimited string literal.
    ///
    /// The emitted payload is the raw inner text with escape sequences left
    /// unprocessed. Permitted escapes are `\"`, `\\`, `\/`, `\b`, `\f`,
    /// `\n`, `\r`, `\t`, and `\uXXXX` with exactly four hex digits.
    fn scan_string(&mut self) -> Result<Token<'src>, Token<'src>> {
        self.bump();
        self.start = self.pos;
        loop {
            match self.peek_char() {
                None => return Err(self.error("unterminated string")),
                Some('\\') => {
                    self.bump();
                    match self.peek_char() {
                        Some(ch) if ESCAPE_CHARACTERS.contains(ch) => {
                            self.bump();
                        }
                        Some('u') => {
                            self.bump();
                            for _ in 0..4 {
                                if !matches!(
                                    self.peek_char(),
                                    Some(ch) if ch.is_ascii_hexdigit()
                                ) {
                                    return Err(self.error(
                                        "a unicode escape requires exactly four hex digits",
                                    ));
                                }
                                self.bump();
                            }
                        }
                        _ => return Err(self.error("invalid escape sequence")),
                    }
                }
                Some('"') => {
                    let text = self.pending();
                    let token = self.emit(TokenKind::StringValue(Cow::Borrowed(text)));
                    self.bump();
                    self.start = self.pos;
                    return Ok(token);
                }
                Some(_) => {
                    self.bump();
                }
            }
        }
    }

    /// Scans one of the built-in type keywords by prefix match.
    fn scan_type(&mut self) -> Result<Token<'src>, Token<'src>> {
        for kind in TypeKind::ALL {
            if self.accept_keyword(kind.keyword()) {
                return Ok(self.emit(TokenKind::TypeName(kind)));
            }
        }
        Err(self.error("unexpected type"))
    }

    // =========================================================================
    // State handlers
    //
    // Each handler returns `Some(token)` to emit, or `None` after moving the
    // machine to another state; the driver loop keeps running handlers until
    // a token comes out.
    // =========================================================================

    /// Document level: `query` / `mutation` / `fragment`, a bare `{`, or EOF.
    fn scan_document(&mut self) -> Option<Token<'src>> {
        self.skip_trivia();
        if self.peek_char().is_none() {
            return Some(self.emit_eof());
        }
        if self.has_prefix("fragment") {
            self.accept_keyword("fragment");
            if !self.at_separator() {
                return Some(
                    self.error("the fragment keyword must be followed by whitespace or a comment"),
                );
            }
            self.state = ScanState::FragmentName;
            return Some(self.emit(TokenKind::Fragment));
        }
        if self.has_prefix("query") {
            self.accept_keyword("query");
            if !self.at_separator() {
                return Some(
                    self.error("the query keyword must be followed by whitespace or a comment"),
                );
            }
            self.state = ScanState::Field;
            return Some(self.emit(TokenKind::Query));
        }
        if self.has_prefix("mutation") {
            self.accept_keyword("mutation");
            if !self.at_separator() {
                return Some(
                    self.error("the mutation keyword must be followed by whitespace or a comment"),
                );
            }
            self.state = ScanState::Field;
            return Some(self.emit(TokenKind::Mutation));
        }
        if self.peek_char() == Some('{') {
            self.state = ScanState::SelectionOpen;
            return None;
        }
        Some(self.error("a document must begin with query, mutation, fragment, or `{`"))
    }

    /// Expecting a field, operation, or alias name.
    fn scan_field(&mut self) -> Option<Token<'src>> {
        self.skip_trivia();
        match self.peek_char() {
            Some(ch) if is_alpha(ch) => {
                self.bump();
                let token = self.scan_name();
                self.state = ScanState::AfterField;
                Some(token)
            }
            _ => Some(self.error("a field must begin with a letter or underscore")),
        }
    }

    /// After a complete field name.
    fn scan_after_field(&mut self) -> Option<Token<'src>> {
        self.skip_trivia();
        let Some(ch) = self.peek_char() else {
            return Some(self.error("unexpected end of input after field"));
        };
        match ch {
            '@' => {
                self.bump();
                self.state = ScanState::DirectiveName;
                Some(self.emit(TokenKind::At))
            }
            '(' => {
                self.bump();
                self.state = ScanState::Argument;
                Some(self.emit(TokenKind::ParenOpen))
            }
            '{' => {
                self.state = ScanState::SelectionOpen;
                None
            }
            '}' => {
                self.state = ScanState::SelectionClose;
                None
            }
            // A `:` separates an alias from a name only directly after a
            // name whose own predecessor was not a colon; this is the
            // two-token look-behind that keeps `a: b: c` from lexing as
            // nested aliases.
            ':' if self.lookbehind[0] == Lookbehind::Name
                && self.lookbehind[1] != Lookbehind::Colon =>
            {
                self.bump();
                self.state = ScanState::Field;
                Some(self.emit(TokenKind::Colon))
            }
            _ if self.has_prefix("...") => {
                self.accept_keyword("...");
                self.state = ScanState::AfterField;
                Some(self.emit(TokenKind::Ellipsis))
            }
            _ if is_alpha(ch) && self.lookbehind[0] == Lookbehind::Ellipsis => {
                self.bump();
                let token = self.scan_name();
                self.state = ScanState::AfterField;
                Some(token)
            }
            _ if is_alpha(ch) => {
                self.state = ScanState::Field;
                None
            }
            _ => Some(self.error("unexpected character after field")),
        }
    }

    /// The name directly after a directive's `@`.
    fn scan_directive_name(&mut self) -> Option<Token<'src>> {
        match self.peek_char() {
            Some(ch) if is_alpha(ch) => {
                self.bump();
                let token = self.scan_name();
                self.state = ScanState::AfterDirectiveName;
                Some(token)
            }
            _ => Some(self.error("a directive `@` must be immediately followed by a letter")),
        }
    }

    /// Optional parenthesized arguments after a directive name.
    fn scan_after_directive_name(&mut self) -> Option<Token<'src>> {
        self.skip_trivia();
        if self.peek_char() == Some('(') {
            self.bump();
            self.state = ScanState::Argument;
            Some(self.emit(TokenKind::ParenOpen))
        } else {
            self.state = ScanState::AfterField;
            None
        }
    }

    /// Inside an argument list.
    fn scan_argument(&mut self) -> Option<Token<'src>> {
        self.skip_trivia();
        let Some(ch) = self.peek_char() else {
            return Some(self.error("unexpected end of input in arguments"));
        };
        match ch {
            ')' => {
                self.bump();
                self.state = ScanState::AfterField;
                Some(self.emit(TokenKind::ParenClose))
            }
            '$' => {
                let token = match self.scan_variable() {
                    Ok(token) => token,
                    Err(error) => return Some(error),
                };
                self.state = ScanState::ArgColon;
                Some(token)
            }
            _ if is_alpha(ch) => {
                self.bump();
                let token = self.scan_name();
                self.state = ScanState::ArgColon;
                Some(token)
            }
            // Bare positional values: numbers, strings, and arrays.
            '+' | '-' | '"' | '[' => {
                self.state = ScanState::Value {
                    then: ValueCont::Argument,
                };
                None
            }
            _ if ch.is_ascii_digit() => {
                self.state = ScanState::Value {
                    then: ValueCont::Argument,
                };
                None
            }
            _ => Some(self.error("unexpected argument")),
        }
    }

    /// The `:` between an argument name (or variable) and its value.
    fn scan_arg_colon(&mut self) -> Option<Token<'src>> {
        self.skip_trivia();
        if self.peek_char() == Some(':') {
            self.bump();
            self.state = ScanState::Value {
                then: ValueCont::DefaultValue,
            };
            Some(self.emit(TokenKind::Colon))
        } else {
            Some(self.error("expected a colon after the argument name"))
        }
    }

    /// One value: literal, variable, type keyword, or array element.
    fn scan_value(&mut self, then: ValueCont) -> Option<Token<'src>> {
        self.skip_trivia();
        let Some(ch) = self.peek_char() else {
            return Some(self.error("illegal value"));
        };
        match ch {
            '"' => {
                let token = match self.scan_string() {
                    Ok(token) => token,
                    Err(error) => return Some(error),
                };
                self.finish_value(then);
                Some(token)
            }
            '+' | '-' => self.scan_value_number(then),
            _ if ch.is_ascii_digit() => self.scan_value_number(then),
            '$' => {
                let token = match self.scan_variable() {
                    Ok(token) => token,
                    Err(error) => return Some(error),
                };
                self.finish_value(then);
                Some(token)
            }
            '[' => {
                self.bump();
                self.array_depth += 1;
                Some(self.emit(TokenKind::BracketOpen))
            }
            ']' if self.array_depth > 0 => {
                self.bump();
                self.array_depth -= 1;
                let token = self.emit(TokenKind::BracketClose);
                if self.array_depth == 0 {
                    self.finish_value(then);
                }
                Some(token)
            }
            _ if self.has_prefix("true") => {
                self.accept_keyword("true");
                let token = self.emit(TokenKind::True);
                self.finish_value(then);
                Some(token)
            }
            _ if self.has_prefix("false") => {
                self.accept_keyword("false");
                let token = self.emit(TokenKind::False);
                self.finish_value(then);
                Some(token)
            }
            _ if is_alpha(ch) => {
                let token = match self.scan_type() {
                    Ok(token) => token,
                    Err(error) => return Some(error),
                };
                self.finish_value(then);
                Some(token)
            }
            _ => Some(self.error("illegal value")),
        }
    }

    /// Number handling shared by the sign and digit arms of `scan_value`.
    fn scan_value_number(&mut self, then: ValueCont) -> Option<Token<'src>> {
        let token = match self.scan_number() {
            Ok(token) => token,
            Err(error) => return Some(error),
        };
        self.finish_value(then);
        Some(token)
    }

    /// Leaves the `Value` state once a complete value has been emitted.
    ///
    /// Inside an array the machine stays in `Value` to scan further
    /// elements; otherwise it resumes at the continuation state.
    fn finish_value(&mut self, then: ValueCont) {
        if self.array_depth > 0 {
            self.state = ScanState::Value { then };
        } else {
            self.state = match then {
                ValueCont::DefaultValue => ScanState::DefaultValue,
                ValueCont::Argument => ScanState::Argument,
            };
        }
    }

    /// An optional `= value` default after a typed variable declaration.
    fn scan_default_value(&mut self) -> Option<Token<'src>> {
        self.skip_trivia();
        if self.peek_char() == Some('=') {
            self.bump();
            self.state = ScanState::Value {
                then: ValueCont::Argument,
            };
            Some(self.emit(TokenKind::Equals))
        } else {
            self.state = ScanState::Argument;
            None
        }
    }

    /// The `{` beginning a selection.
    fn scan_selection_open(&mut self) -> Option<Token<'src>> {
        self.skip_trivia();
        if self.peek_char() == Some('{') {
            self.bump();
            self.depth += 1;
            self.state = ScanState::AfterField;
            Some(self.emit(TokenKind::CurlyOpen))
        } else {
            Some(self.error("expected the beginning of a selection"))
        }
    }

    /// The `}` ending the current selection.
    fn scan_selection_close(&mut self) -> Option<Token<'src>> {
        self.skip_trivia();
        if self.peek_char() == Some('}') && self.depth > 0 {
            self.bump();
            self.depth -= 1;
            self.state = if self.depth == 0 {
                ScanState::Document
            } else {
                ScanState::AfterField
            };
            Some(self.emit(TokenKind::CurlyClose))
        } else {
            Some(self.error("expected the end of a selection"))
        }
    }

    /// The name after the `fragment` keyword.
    fn scan_fragment_name(&mut self) -> Option<Token<'src>> {
        self.skip_trivia();
        match self.peek_char() {
            Some(ch) if is_alpha(ch) => {
                self.bump();
                let token = self.scan_name();
                self.state = ScanState::FragmentOn;
                Some(token)
            }
            _ => Some(self.error("expected a fragment name")),
        }
    }

    /// The `on` keyword after a fragment name.
    fn scan_fragment_on(&mut self) -> Option<Token<'src>> {
        self.skip_trivia();
        if self.accept_keyword("on") {
            self.state = ScanState::FragmentType;
            Some(self.emit(TokenKind::On))
        } else {
            Some(self.error("expected the on keyword"))
        }
    }

    /// The type condition after `on`.
    fn scan_fragment_type(&mut self) -> Option<Token<'src>> {
        self.skip_trivia();
        match self.peek_char() {
            Some(ch) if is_alpha(ch) => {
                self.bump();
                let token = self.scan_name();
                self.state = ScanState::AfterFragmentType;
                Some(token)
            }
            _ => Some(self.error("expected a type condition after on")),
        }
    }

    /// Directives or the selection after a fragment's type condition.
    fn scan_after_fragment_type(&mut self) -> Option<Token<'src>> {
        self.skip_trivia();
        match self.peek_char() {
            Some('@') => {
                self.bump();
                self.state = ScanState::DirectiveName;
                Some(self.emit(TokenKind::At))
            }
            Some('{') => {
                self.state = ScanState::SelectionOpen;
                None
            }
            _ => Some(self.error("expected a selection after the fragment type condition")),
        }
    }
}

impl<'src> Iterator for Scanner<'src> {
    type Item = Token<'src>;

    /// Runs state handlers until one emits a token.
    fn next(&mut self) -> Option<Token<'src>> {
        if self.finished {
            return None;
        }
        loop {
            let emitted = match self.state {
                ScanState::Document => self.scan_document(),
                ScanState::Field => self.scan_field(),
                ScanState::AfterField => self.scan_after_field(),
                ScanState::DirectiveName => self.scan_directive_name(),
                ScanState::AfterDirectiveName => self.scan_after_directive_name(),
                ScanState::Argument => self.scan_argument(),
                ScanState::ArgColon => self.scan_arg_colon(),
                ScanState::Value { then } => self.scan_value(then),
                ScanState::DefaultValue => self.scan_default_value(),
                ScanState::SelectionOpen => self.scan_selection_open(),
                ScanState::SelectionClose => self.scan_selection_close(),
                ScanState::FragmentName => self.scan_fragment_name(),
                ScanState::FragmentOn => self.scan_fragment_on(),
                ScanState::FragmentType => self.scan_fragment_type(),
                ScanState::AfterFragmentType => self.scan_after_fragment_type(),
            };
            if let Some(token) = emitted {
                return Some(token);
            }
        }
    }
}

/// Whitespace characters. Commas are separators, equivalent to whitespace.
fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r' | ',')
}

/// A letter or underscore: the characters that may begin a name.
fn is_alpha(ch: char) -> bool {
    ch == '_' || ch.is_alphabetic()
}

/// A letter, digit, or underscore: the characters that may continue a name.
fn is_alphanumeric(ch: char) -> bool {
    ch == '_' || ch.is_alphanumeric()
}
