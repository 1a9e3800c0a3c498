//! The Quell document model.
//!
//! These are the data structures produced by [`parse`](crate::parse) and
//! consumed by an interpreter. Ownership is strictly tree-shaped: a
//! [`Document`] owns its [`Operation`]s and [`FragmentDefinition`]s, an
//! operation's root [`Field`] owns its [`Arg`]s, [`Directive`]s, and child
//! [`Selection`], and so on down. Nodes are built append-only during parsing
//! and never mutated afterwards, so a parsed document may be shared freely
//! across concurrent executions.
//!
//! All nodes serialize with `serde`, which makes documents easy to snapshot
//! and diff in tests and debug logs.

mod argument;
mod directive;
mod document;
mod field;
mod fragment;
mod operation;
mod selection;

pub use argument::Arg;
pub use directive::Directive;
pub use document::Document;
pub use field::Field;
pub use fragment::FragmentDefinition;
pub use operation::Operation;
pub use operation::OperationKind;
pub use selection::Selection;

use std::borrow::Cow;

/// `skip_serializing_if` helper for optional-by-convention string fields
/// that the original data model represented as empty strings.
pub(crate) fn str_is_empty(value: &Cow<'_, str>) -> bool {
    value.is_empty()
}
