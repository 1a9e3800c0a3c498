//! Quell: a small query-language front end and interpreter.
//!
//! A query resembling a restricted GraphQL dialect is tokenized and parsed
//! by the `quell-parser` crate (re-exported here as [`parser`]), then
//! walked by the [`Executor`] against a pluggable [`resolve::Store`]
//! backend to produce a nested JSON result.
//!
//! ```rust
//! use quell::resolve::{Field, ResolveContext, ResolveError, Selection, Store, Value};
//!
//! struct Greetings;
//!
//! impl Store for Greetings {
//!     fn query(&self, ctx: &ResolveContext<'_>) -> Result<Box<dyn Field>, ResolveError> {
//!         match ctx.name {
//!             "hello" => Ok(Box::new(World)),
//!             other => Err(ResolveError::FieldNotFound { name: other.to_string() }),
//!         }
//!     }
//! }
//!
//! struct World;
//!
//! impl Field for World {
//!     fn value(&self) -> Result<Value, ResolveError> {
//!         Ok(Value::String("world".into()))
//!     }
//!
//!     fn selection(&self) -> Result<Box<dyn Selection>, ResolveError> {
//!         Err(ResolveError::NotImplemented)
//!     }
//! }
//!
//! let mut out = Vec::new();
//! quell::Executor::new(Greetings).handle("{hello}", &mut out).unwrap();
//! assert_eq!(out, br#"{"hello":"world"}"#);
//! ```

mod error;
mod executor;
pub mod resolve;

pub use error::Error;
pub use executor::Executor;

/// The parsing front end: scanner, token source, document model, parser.
pub use quell_parser as parser;

pub use quell_parser::ast;
pub use quell_parser::parse;
pub use quell_parser::ParseError;

#[cfg(test)]
mod tests;
