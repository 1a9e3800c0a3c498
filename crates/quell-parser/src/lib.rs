//! Parsing front end for the Quell query language: a restricted
//! GraphQL-style dialect of operations, nested field selections, arguments,
//! aliases, fragments, directives, and typed default values.
//!
//! The pipeline is `text → `[`Scanner`]` → `[`TokenSource`]` → `[`parse`]`
//! → `[`ast::Document`]: an explicit state-machine scanner produces tokens,
//! a fixed-capacity lookahead buffer decouples it from the parser, and a
//! recursive-descent document builder assembles the AST. Interpretation of
//! a parsed document lives in the `quell` crate.
//!
//! ```rust
//! let doc = quell_parser::parse("{hello}").unwrap();
//! assert!(doc.has_default_query_only());
//! ```

pub mod ast;
mod byte_span;
mod parse_error;
mod parser;
mod scanner;
mod source_position;
pub mod token;
mod token_source;

pub use byte_span::ByteSpan;
pub use parse_error::ParseError;
pub use parse_error::ParseErrorKind;
pub use parser::parse;
pub use scanner::Scanner;
pub use source_position::SourcePosition;
pub use token_source::TokenSource;
pub use token_source::LOOKAHEAD;

#[cfg(test)]
mod tests;
