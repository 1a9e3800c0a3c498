use std::borrow::Cow;

/// The built-in abstract types a typed variable declaration may name, e.g.
/// the `Int` in `query user($id: Int = 4) { ... }`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TypeKind {
    Int,
    Float,
    Boolean,
    Enum,
    Array,
    Object,
}

impl TypeKind {
    /// All type keywords, in the order the scanner tries them.
    pub const ALL: [TypeKind; 6] = [
        TypeKind::Int,
        TypeKind::Float,
        TypeKind::Boolean,
        TypeKind::Enum,
        TypeKind::Array,
        TypeKind::Object,
    ];

    /// Returns the source-text keyword for this type.
    pub fn keyword(&self) -> &'static str {
        match self {
            TypeKind::Int => "Int",
            TypeKind::Float => "Float",
            TypeKind::Boolean => "Boolean",
            TypeKind::Enum => "Enum",
            TypeKind::Array => "Array",
            TypeKind::Object => "Object",
        }
    }
}

/// The kind of a Quell token.
///
/// Literal values (`IntValue`, `FloatValue`, `StringValue`) store only raw
/// source text; interpreting typed values is left to whoever consumes the
/// document (see the resolver contract in the `quell` crate).
///
/// # Lifetime Parameter
///
/// The `'src` lifetime enables zero-copy lexing: the scanner borrows string
/// slices directly from the source text via `Cow::Borrowed`. `Cow` leaves
/// room for token sources that must allocate.
///
/// # Payload Conventions
///
/// - `Variable` payloads exclude the leading `$`.
/// - `StringValue` payloads are the raw text between the quotes with escape
///   sequences unprocessed.
/// - Numeric payloads include any leading sign.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind<'src> {
    // Punctuators
    /// `{`
    CurlyOpen,
    /// `}`
    CurlyClose,
    /// `(`
    ParenOpen,
    /// `)`
    ParenClose,
    /// `[`
    BracketOpen,
    /// `]`
    BracketClose,
    /// `:`
    Colon,
    /// `=`
    Equals,
    /// `@`
    At,
    /// `...`
    Ellipsis,

    // Identifiers and literals
    /// A field, argument, directive, or fragment name.
    Name(Cow<'src, str>),
    /// A `$variable`; the payload excludes the `$`.
    Variable(Cow<'src, str>),
    /// Raw source text of an integer literal (e.g. `"-123"`).
    IntValue(Cow<'src, str>),
    /// Raw source text of a float literal (e.g. `"1.2"`).
    FloatValue(Cow<'src, str>),
    /// Raw inner text of a string literal, escapes unprocessed.
    StringValue(Cow<'src, str>),
    /// The `true` literal.
    True,
    /// The `false` literal.
    False,

    // Keywords
    /// The `query` keyword.
    Query,
    /// The `mutation` keyword.
    Mutation,
    /// The `fragment` keyword.
    Fragment,
    /// The `on` keyword.
    On,
    /// One of the built-in type keywords (`Int`, `Float`, ...).
    TypeName(TypeKind),

    /// End of input. Emitted exactly once, as the final token of a
    /// successful scan.
    Eof,

    /// A lexical error. The scanner emits one `Error` token and then halts;
    /// no further tokens follow it.
    Error {
        /// A human-readable error message.
        message: String,
    },
}

impl<'src> TokenKind<'src> {
    /// Returns the text payload of this token, if it carries one.
    ///
    /// Keyword and boolean tokens report their fixed spelling; punctuators,
    /// `Eof`, and `Error` return `None`.
    pub fn text(&self) -> Option<&str> {
        match self {
            TokenKind::Name(text)
            | TokenKind::Variable(text)
            | TokenKind::IntValue(text)
            | TokenKind::FloatValue(text)
            | TokenKind::StringValue(text) => Some(text.as_ref()),
            TokenKind::True => Some("true"),
            TokenKind::False => Some("false"),
            TokenKind::Query => Some("query"),
            TokenKind::Mutation => Some("mutation"),
            TokenKind::Fragment => Some("fragment"),
            TokenKind::On => Some("on"),
            TokenKind::TypeName(kind) => Some(kind.keyword()),
            _ => None,
        }
    }

    /// Returns `true` if this token can begin an argument value.
    ///
    /// Bare positional argument values cover literals and arrays; variables
    /// and type keywords are only values in the `name: value` form.
    pub fn starts_value(&self) -> bool {
        matches!(
            self,
            TokenKind::IntValue(_)
                | TokenKind::FloatValue(_)
                | TokenKind::StringValue(_)
                | TokenKind::True
                | TokenKind::False
                | TokenKind::BracketOpen
        )
    }

    /// A short description of this token kind for error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::CurlyOpen => "`{`",
            TokenKind::CurlyClose => "`}`",
            TokenKind::ParenOpen => "`(`",
            TokenKind::ParenClose => "`)`",
            TokenKind::BracketOpen => "`[`",
            TokenKind::BracketClose => "`]`",
            TokenKind::Colon => "`:`",
            TokenKind::Equals => "`=`",
            TokenKind::At => "`@`",
            TokenKind::Ellipsis => "`...`",
            TokenKind::Name(_) => "name",
            TokenKind::Variable(_) => "variable",
            TokenKind::IntValue(_) => "integer",
            TokenKind::FloatValue(_) => "float",
            TokenKind::StringValue(_) => "string",
            TokenKind::True | TokenKind::False => "boolean",
            TokenKind::Query => "`query`",
            TokenKind::Mutation => "`mutation`",
            TokenKind::Fragment => "`fragment`",
            TokenKind::On => "`on`",
            TokenKind::TypeName(_) => "type name",
            TokenKind::Eof => "end of input",
            TokenKind::Error { .. } => "lexical error",
        }
    }
}
