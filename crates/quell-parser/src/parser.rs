//! Recursive-descent document builder for Quell queries.
//!
//! The grammar is expressed as a set of parse states ([`ParseState`], data
//! rather than control flow) with a driver loop in [`parse`]: each step
//! consumes some tokens from the [`TokenSource`] and names the next state,
//! or stops by recording an error. This is the continuation-function
//! pattern flattened into an enum, which keeps deep documents from
//! consuming call stack.
//!
//! The builder carries the operations and fragments accumulated so far, the
//! operation or fragment currently being built, and an explicit stack of
//! open selection scopes: `{` pushes a fresh scope, `}` pops it and attaches
//! it to the field that opened it (or to the root field of the current
//! operation or fragment when the outermost scope closes).
//!
//! Failure is fatal: the first error stops the driver and [`parse`] returns
//! it. No partial document escapes a failed parse.

use crate::ast::Arg;
use crate::ast::Directive;
use crate::ast::Document;
use crate::ast::Field;
use crate::ast::FragmentDefinition;
use crate::ast::Operation;
use crate::ast::OperationKind;
use crate::ast::Selection;
use crate::token::Token;
use crate::token::TokenKind;
use crate::ByteSpan;
use crate::ParseError;
use crate::ParseErrorKind;
use crate::Scanner;
use crate::SourcePosition;
use crate::TokenSource;
use std::borrow::Cow;

/// Whose directive list a directive's tokens attach to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum DirectiveTarget {
    /// The currently open field.
    Field,
    /// The fragment definition currently being built.
    Fragment,
}

/// Whose argument list an argument list's entries attach to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ArgTarget {
    /// The currently open field.
    Field,
    /// The most recent directive of the given target.
    Directive(DirectiveTarget),
}

/// The parser's states. Each corresponds to one of the original
/// continuation functions; the driver in [`parse`] runs them until one
/// returns no successor.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ParseState {
    /// Document level: an operation keyword, a bare `{`, or end of input.
    Root,
    /// The name (or `alias: name`) after `query` / `mutation`.
    OperationName(OperationKind),
    /// Inside an open selection scope, expecting a field or `}`.
    Selector,
    /// After a field: arguments, directives, selections, siblings, `}`.
    AfterField,
    /// Inside `( ... )`, attaching entries to `target`.
    Arguments(ArgTarget),
    /// After a directive name: optional `( ... )`.
    DirectiveTail(DirectiveTarget),
    /// The name and `on` clause after the `fragment` keyword.
    FragmentName,
    /// After a fragment's type condition: directives or its selection.
    FragmentTail,
}

/// Parses `source` into a [`Document`].
///
/// The whole pipeline is pull-driven from here: the returned document
/// borrows from `source`, and no tokens or nodes outlive a failed parse.
///
/// ```rust
/// let doc = quell_parser::parse("query bill { friends }").unwrap();
/// assert_eq!(doc.operations[0].field.name, "bill");
/// ```
pub fn parse(source: &str) -> Result<Document<'_>, ParseError> {
    let tokens = TokenSource::new(Scanner::new(source));
    let mut builder = DocumentBuilder::new(tokens);

    let mut state = Some(ParseState::Root);
    while let Some(current) = state {
        state = builder.step(current);
    }

    builder.finish()
}

/// Incremental builder state threaded through the parse states.
struct DocumentBuilder<'src> {
    tokens: TokenSource<'src>,

    /// Completed operations, in document order.
    operations: Vec<Operation<'src>>,

    /// Completed fragment definitions, in document order.
    fragments: Vec<FragmentDefinition<'src>>,

    /// The operation currently being built, if any.
    operation: Option<Operation<'src>>,

    /// The fragment definition currently being built, if any.
    fragment: Option<FragmentDefinition<'src>>,

    /// Open `{ ... }` scopes, innermost last. When this is empty the
    /// "current field" is the root field of the operation being built.
    scopes: Vec<Selection<'src>>,

    /// The first (and only) error; once set, the driver stops.
    error: Option<ParseError>,
}

impl<'src> DocumentBuilder<'src> {
    fn new(tokens: TokenSource<'src>) -> Self {
        Self {
            tokens,
            operations: Vec::new(),
            fragments: Vec::new(),
            operation: None,
            fragment: None,
            scopes: Vec::new(),
            error: None,
        }
    }

    /// Runs one parse state, returning the next or `None` to stop.
    fn step(&mut self, state: ParseState) -> Option<ParseState> {
        log::trace!("parser: {state:?}, next {}", self.tokens.peek().kind.describe());
        match state {
            ParseState::Root => self.parse_root(),
            ParseState::OperationName(kind) => self.parse_operation_name(kind),
            ParseState::Selector => self.parse_selector(),
            ParseState::AfterField => self.parse_after_field(),
            ParseState::Arguments(target) => self.parse_arguments(target),
            ParseState::DirectiveTail(target) => self.parse_directive_tail(target),
            ParseState::FragmentName => self.parse_fragment_name(),
            ParseState::FragmentTail => self.parse_fragment_tail(),
        }
    }

    /// Surfaces the accumulated error, or the finished document.
    fn finish(self) -> Result<Document<'src>, ParseError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(Document {
                operations: self.operations,
                fragments: self.fragments,
            }),
        }
    }

    // =========================================================================
    // Error recording
    // =========================================================================

    /// Records an error anchored at `span` and stops the driver.
    fn fail_at(
        &mut self,
        span: ByteSpan,
        message: impl Into<String>,
        kind: ParseErrorKind,
    ) -> Option<ParseState> {
        let position = SourcePosition::resolve(self.tokens.source(), span.start as usize);
        self.error = Some(ParseError::new(message, position, kind));
        self.dump_tokens();
        None
    }

    /// Records an error anchored at the next unconsumed token.
    fn fail(&mut self, message: impl Into<String>, kind: ParseErrorKind) -> Option<ParseState> {
        let span = self.tokens.peek().span;
        self.fail_at(span, message, kind)
    }

    /// Converts a scanner error token into the parse error.
    fn fail_lexical(&mut self, token: &Token<'src>) -> Option<ParseState> {
        let message = match &token.kind {
            TokenKind::Error { message } => message.clone(),
            other => format!("unexpected {}", other.describe()),
        };
        let position = SourcePosition::resolve(self.tokens.source(), token.span.start as usize);
        self.error = Some(ParseError::from_lexical(message, position));
        self.dump_tokens();
        None
    }

    /// Logs the unconsumed lookahead window. Debugging aid for grammar
    /// failures; costs nothing unless trace logging is enabled.
    fn dump_tokens(&self) {
        if log::log_enabled!(log::Level::Trace) {
            for n in 0..self.tokens.buffered_len() {
                let token = self.tokens.peek_nth(n);
                log::trace!("parser: token[{n}] = {:?}", token.kind);
            }
        }
    }

    // =========================================================================
    // Node plumbing
    // =========================================================================

    /// The field new arguments, directives, and selections attach to: the
    /// last field of the innermost open scope, or the root field of the
    /// operation being built when no scope is open.
    fn current_field_mut(&mut self) -> Option<&mut Field<'src>> {
        match self.scopes.last_mut() {
            Some(scope) => scope.fields.last_mut(),
            None => self.operation.as_mut().map(|op| &mut op.field),
        }
    }

    /// Appends a field to the innermost open scope.
    fn add_field(&mut self, alias: Option<Cow<'src, str>>, name: Cow<'src, str>) -> bool {
        match self.scopes.last_mut() {
            Some(scope) => {
                scope.add_field(alias, name);
                true
            }
            None => false,
        }
    }

    /// Attaches a parsed directive name to `target`'s directive list.
    fn add_directive(&mut self, target: DirectiveTarget, name: Cow<'src, str>) -> bool {
        match target {
            DirectiveTarget::Field => match self.current_field_mut() {
                Some(field) => {
                    field.add_directive(Directive::new(name));
                    true
                }
                None => false,
            },
            DirectiveTarget::Fragment => match self.fragment.as_mut() {
                Some(fragment) => {
                    fragment.add_directive(Directive::new(name));
                    true
                }
                None => false,
            },
        }
    }

    /// Appends an argument to whatever `target` points at.
    fn push_arg(&mut self, target: ArgTarget, arg: Arg<'src>) -> bool {
        match target {
            ArgTarget::Field => match self.current_field_mut() {
                Some(field) => {
                    field.add_arg(arg);
                    true
                }
                None => false,
            },
            ArgTarget::Directive(directive_target) => {
                let directives = match directive_target {
                    DirectiveTarget::Field => {
                        self.current_field_mut().map(|field| &mut field.directives)
                    }
                    DirectiveTarget::Fragment => {
                        self.fragment.as_mut().map(|fragment| &mut fragment.directives)
                    }
                };
                match directives.and_then(|list| list.last_mut()) {
                    Some(directive) => {
                        directive.add_arg(arg);
                        true
                    }
                    None => false,
                }
            }
        }
    }

    /// Pops the innermost scope on `}` and attaches it where it belongs.
    ///
    /// A nested scope attaches to the field that opened it, which is by
    /// construction the last field of the enclosing scope. The outermost
    /// scope attaches to the root field of the operation or fragment being
    /// built, which is thereby complete.
    fn close_scope(&mut self) -> Option<ParseState> {
        let Some(selection) = self.scopes.pop() else {
            return self.fail(
                "unexpected `}` with no open selection",
                ParseErrorKind::UnexpectedToken,
            );
        };

        if let Some(parent) = self.scopes.last_mut() {
            let field = parent
                .fields
                .last_mut()
                .expect("a nested scope is only opened after a field");
            field.selection = Some(selection);
            return Some(ParseState::Selector);
        }

        if let Some(mut fragment) = self.fragment.take() {
            fragment.selection = Some(selection);
            self.fragments.push(fragment);
        } else if let Some(mut operation) = self.operation.take() {
            operation.field.selection = Some(selection);
            self.operations.push(operation);
        }
        Some(ParseState::Root)
    }

    // =========================================================================
    // Token plumbing
    // =========================================================================

    /// Consumes the next token, which the caller has peeked as a name, and
    /// returns its text.
    fn take_name(&mut self) -> Cow<'src, str> {
        match self.tokens.next().kind {
            TokenKind::Name(text) => text,
            other => unreachable!("caller peeked a name token, found {}", other.describe()),
        }
    }

    /// Consumes the next token, requiring it to be a name.
    fn expect_name(&mut self, context: &str) -> Option<Cow<'src, str>> {
        let token = self.tokens.next();
        match token.kind {
            TokenKind::Name(text) => Some(text),
            TokenKind::Error { .. } => {
                self.fail_lexical(&token);
                None
            }
            other => {
                self.fail_at(
                    token.span,
                    format!("expected {context}, found {}", other.describe()),
                    ParseErrorKind::UnexpectedToken,
                );
                None
            }
        }
    }

    /// Consumes the next token, requiring it to be a `:`.
    fn expect_colon(&mut self) -> Option<()> {
        let token = self.tokens.next();
        match token.kind {
            TokenKind::Colon => Some(()),
            TokenKind::Error { .. } => {
                self.fail_lexical(&token);
                None
            }
            other => {
                self.fail_at(
                    token.span,
                    format!("expected `:`, found {}", other.describe()),
                    ParseErrorKind::UnexpectedToken,
                );
                None
            }
        }
    }

    /// Consumes one value and returns its literal source text.
    ///
    /// Scalar values return their payload directly; an array value returns
    /// the source slice from `[` to the matching `]`, so the stored text is
    /// exactly what the caller wrote.
    fn take_value(&mut self) -> Option<Cow<'src, str>> {
        let token = self.tokens.next();
        match token.kind {
            TokenKind::IntValue(text)
            | TokenKind::FloatValue(text)
            | TokenKind::StringValue(text)
            | TokenKind::Variable(text) => Some(text),
            TokenKind::True => Some(Cow::Borrowed("true")),
            TokenKind::False => Some(Cow::Borrowed("false")),
            TokenKind::TypeName(kind) => Some(Cow::Borrowed(kind.keyword())),
            TokenKind::BracketOpen => {
                let start = token.span.start;
                let mut depth = 1usize;
                loop {
                    let token = self.tokens.next();
                    match token.kind {
                        TokenKind::BracketOpen => depth += 1,
                        TokenKind::BracketClose => {
                            depth -= 1;
                            if depth == 0 {
                                let span = ByteSpan::new(start, token.span.end);
                                return Some(Cow::Borrowed(span.slice(self.tokens.source())));
                            }
                        }
                        TokenKind::Error { .. } => {
                            self.fail_lexical(&token);
                            return None;
                        }
                        TokenKind::Eof => {
                            self.fail_at(
                                token.span,
                                "unterminated array value",
                                ParseErrorKind::UnexpectedEof,
                            );
                            return None;
                        }
                        _ => {}
                    }
                }
            }
            TokenKind::Error { .. } => {
                self.fail_lexical(&token);
                None
            }
            other => {
                self.fail_at(
                    token.span,
                    format!("expected a value, found {}", other.describe()),
                    ParseErrorKind::UnexpectedToken,
                );
                None
            }
        }
    }

    // =========================================================================
    // Parse states
    // =========================================================================

    /// Document level: `query` / `mutation` / `fragment`, a bare `{`
    /// (synthesized as an anonymous query), or end of input.
    fn parse_root(&mut self) -> Option<ParseState> {
        match &self.tokens.peek().kind {
            TokenKind::Eof => None,
            TokenKind::Error { .. } => {
                let token = self.tokens.next();
                self.fail_lexical(&token)
            }
            TokenKind::CurlyOpen => {
                self.tokens.next();
                // Anonymous `{...}` shorthand: synthesize a query operation
                // with an empty root field name so execution can treat every
                // document uniformly.
                self.operation = Some(Operation::new(OperationKind::Query, None, ""));
                self.scopes.push(Selection::default());
                Some(ParseState::Selector)
            }
            TokenKind::Query => {
                self.tokens.next();
                Some(ParseState::OperationName(OperationKind::Query))
            }
            TokenKind::Mutation => {
                self.tokens.next();
                Some(ParseState::OperationName(OperationKind::Mutation))
            }
            TokenKind::Fragment => {
                self.tokens.next();
                Some(ParseState::FragmentName)
            }
            other => {
                let message = format!("unexpected {} at document root", other.describe());
                self.fail(message, ParseErrorKind::UnexpectedToken)
            }
        }
    }

    /// The root field name after `query` or `mutation`, possibly written
    /// as `alias: name`.
    fn parse_operation_name(&mut self, kind: OperationKind) -> Option<ParseState> {
        let is_alias_form = matches!(self.tokens.peek().kind, TokenKind::Name(_))
            && matches!(self.tokens.peek_nth(1).kind, TokenKind::Colon)
            && matches!(self.tokens.peek_nth(2).kind, TokenKind::Name(_));

        if is_alias_form {
            let alias = self.take_name();
            self.tokens.next();
            let name = self.take_name();
            self.operation = Some(Operation::new(kind, Some(alias), name));
            return Some(ParseState::AfterField);
        }

        match &self.tokens.peek().kind {
            TokenKind::Name(_) => {
                let name = self.take_name();
                self.operation = Some(Operation::new(kind, None, name));
                Some(ParseState::AfterField)
            }
            TokenKind::Error { .. } => {
                let token = self.tokens.next();
                self.fail_lexical(&token)
            }
            other => {
                let message = format!("expected an operation name, found {}", other.describe());
                self.fail(message, ParseErrorKind::UnexpectedToken)
            }
        }
    }

    /// Inside an open scope: fields, aliased fields, fragment spreads, or
    /// the closing `}`.
    fn parse_selector(&mut self) -> Option<ParseState> {
        let is_alias_form = matches!(self.tokens.peek().kind, TokenKind::Name(_))
            && matches!(self.tokens.peek_nth(1).kind, TokenKind::Colon)
            && matches!(self.tokens.peek_nth(2).kind, TokenKind::Name(_));

        if is_alias_form {
            let alias = self.take_name();
            self.tokens.next();
            let name = self.take_name();
            self.add_field(Some(alias), name);
            return Some(ParseState::AfterField);
        }

        match &self.tokens.peek().kind {
            TokenKind::Name(_) => {
                let name = self.take_name();
                self.add_field(None, name);
                Some(ParseState::AfterField)
            }
            TokenKind::Ellipsis => {
                self.tokens.next();
                let name = self.expect_name("a fragment name after `...`")?;
                self.add_field(None, name);
                Some(ParseState::AfterField)
            }
            TokenKind::CurlyClose => {
                self.tokens.next();
                self.close_scope()
            }
            TokenKind::Error { .. } => {
                let token = self.tokens.next();
                self.fail_lexical(&token)
            }
            TokenKind::Eof => self.fail(
                "unexpected end of input inside a selection",
                ParseErrorKind::UnexpectedEof,
            ),
            other => {
                let message = format!("unexpected {} in selection", other.describe());
                self.fail(message, ParseErrorKind::UnexpectedToken)
            }
        }
    }

    /// After a complete field: its argument list, nested selection,
    /// directives, sibling fields, or the scope's closing `}`.
    fn parse_after_field(&mut self) -> Option<ParseState> {
        let is_alias_form = matches!(self.tokens.peek().kind, TokenKind::Name(_))
            && matches!(self.tokens.peek_nth(1).kind, TokenKind::Colon)
            && matches!(self.tokens.peek_nth(2).kind, TokenKind::Name(_));

        if is_alias_form {
            let alias = self.take_name();
            self.tokens.next();
            let name = self.take_name();
            if !self.add_field(Some(alias), name) {
                return self.fail(
                    "a sibling field requires an open selection",
                    ParseErrorKind::UnexpectedToken,
                );
            }
            return Some(ParseState::AfterField);
        }

        match &self.tokens.peek().kind {
            TokenKind::ParenOpen => {
                self.tokens.next();
                Some(ParseState::Arguments(ArgTarget::Field))
            }
            TokenKind::CurlyOpen => {
                self.tokens.next();
                self.scopes.push(Selection::default());
                Some(ParseState::Selector)
            }
            TokenKind::CurlyClose => {
                self.tokens.next();
                self.close_scope()
            }
            TokenKind::At => {
                self.tokens.next();
                let name = self.expect_name("a directive name after `@`")?;
                if !self.add_directive(DirectiveTarget::Field, name) {
                    return self.fail(
                        "a directive requires an open field",
                        ParseErrorKind::UnexpectedToken,
                    );
                }
                Some(ParseState::DirectiveTail(DirectiveTarget::Field))
            }
            TokenKind::Ellipsis => {
                self.tokens.next();
                let name = self.expect_name("a fragment name after `...`")?;
                if !self.add_field(None, name) {
                    return self.fail(
                        "a fragment spread requires an open selection",
                        ParseErrorKind::UnexpectedToken,
                    );
                }
                Some(ParseState::AfterField)
            }
            TokenKind::Name(_) => {
                let name = self.take_name();
                if !self.add_field(None, name) {
                    return self.fail(
                        "a sibling field requires an open selection",
                        ParseErrorKind::UnexpectedToken,
                    );
                }
                Some(ParseState::AfterField)
            }
            TokenKind::Error { .. } => {
                let token = self.tokens.next();
                self.fail_lexical(&token)
            }
            TokenKind::Eof => self.fail(
                "unexpected end of input after field",
                ParseErrorKind::UnexpectedEof,
            ),
            other => {
                let message = format!("unexpected {} after field", other.describe());
                self.fail(message, ParseErrorKind::UnexpectedToken)
            }
        }
    }

    /// Argument-list entries: `name: value` pairs, typed variable
    /// declarations with optional defaults, bare positional values, and
    /// the closing `)`.
    fn parse_arguments(&mut self, target: ArgTarget) -> Option<ParseState> {
        let next_state = match target {
            ArgTarget::Field => ParseState::AfterField,
            ArgTarget::Directive(DirectiveTarget::Field) => ParseState::AfterField,
            ArgTarget::Directive(DirectiveTarget::Fragment) => ParseState::FragmentTail,
        };

        match &self.tokens.peek().kind {
            TokenKind::ParenClose => {
                self.tokens.next();
                Some(next_state)
            }
            TokenKind::Name(_) => {
                let name = self.take_name();
                self.expect_colon()?;
                let value = self.take_value()?;
                self.push_arg(target, Arg::new(name, value));
                Some(ParseState::Arguments(target))
            }
            TokenKind::Variable(_) => {
                // A typed variable declaration: `$name: Type`, optionally
                // followed by `= default`. The declared type is validated
                // by the scanner; only the default literal is retained.
                let name = match self.tokens.next().kind {
                    TokenKind::Variable(text) => text,
                    _ => unreachable!("peeked a variable token"),
                };
                self.expect_colon()?;
                let token = self.tokens.next();
                match token.kind {
                    TokenKind::TypeName(_) => {}
                    TokenKind::Error { .. } => return self.fail_lexical(&token),
                    other => {
                        return self.fail_at(
                            token.span,
                            format!(
                                "expected a type after the variable, found {}",
                                other.describe()
                            ),
                            ParseErrorKind::UnexpectedToken,
                        );
                    }
                }
                let value = if matches!(self.tokens.peek().kind, TokenKind::Equals) {
                    self.tokens.next();
                    self.take_value()?
                } else {
                    Cow::Borrowed("")
                };
                self.push_arg(target, Arg::new(name, value));
                Some(ParseState::Arguments(target))
            }
            kind if kind.starts_value() => {
                let value = self.take_value()?;
                self.push_arg(target, Arg::new("", value));
                Some(ParseState::Arguments(target))
            }
            TokenKind::Error { .. } => {
                let token = self.tokens.next();
                self.fail_lexical(&token)
            }
            TokenKind::Eof => self.fail(
                "unexpected end of input in arguments",
                ParseErrorKind::UnexpectedEof,
            ),
            other => {
                let message = format!("unexpected argument element: {}", other.describe());
                self.fail(message, ParseErrorKind::UnexpectedToken)
            }
        }
    }

    /// Optional argument list after a directive name.
    fn parse_directive_tail(&mut self, target: DirectiveTarget) -> Option<ParseState> {
        match &self.tokens.peek().kind {
            TokenKind::ParenOpen => {
                self.tokens.next();
                Some(ParseState::Arguments(ArgTarget::Directive(target)))
            }
            _ => Some(match target {
                DirectiveTarget::Field => ParseState::AfterField,
                DirectiveTarget::Fragment => ParseState::FragmentTail,
            }),
        }
    }

    /// `fragment <name> on <Type>`.
    fn parse_fragment_name(&mut self) -> Option<ParseState> {
        let name = self.expect_name("a fragment name")?;

        let token = self.tokens.next();
        match token.kind {
            TokenKind::On => {}
            TokenKind::Error { .. } => return self.fail_lexical(&token),
            other => {
                return self.fail_at(
                    token.span,
                    format!("expected `on`, found {}", other.describe()),
                    ParseErrorKind::UnexpectedToken,
                );
            }
        }

        let type_condition = self.expect_name("a type condition after `on`")?;
        self.fragment = Some(FragmentDefinition::new(name, type_condition));
        Some(ParseState::FragmentTail)
    }

    /// Directives or the selection after a fragment's type condition.
    fn parse_fragment_tail(&mut self) -> Option<ParseState> {
        match &self.tokens.peek().kind {
            TokenKind::At => {
                self.tokens.next();
                let name = self.expect_name("a directive name after `@`")?;
                if !self.add_directive(DirectiveTarget::Fragment, name) {
                    return self.fail(
                        "a directive requires an open fragment",
                        ParseErrorKind::UnexpectedToken,
                    );
                }
                Some(ParseState::DirectiveTail(DirectiveTarget::Fragment))
            }
            TokenKind::CurlyOpen => {
                self.tokens.next();
                self.scopes.push(Selection::default());
                Some(ParseState::Selector)
            }
            TokenKind::Error { .. } => {
                let token = self.tokens.next();
                self.fail_lexical(&token)
            }
            TokenKind::Eof => self.fail(
                "unexpected end of input in fragment definition",
                ParseErrorKind::UnexpectedEof,
            ),
            other => {
                let message = format!("unexpected {} in fragment definition", other.describe());
                self.fail(message, ParseErrorKind::UnexpectedToken)
            }
        }
    }
}
