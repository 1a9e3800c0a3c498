use crate::ast::Field;
use serde::Serialize;
use std::borrow::Cow;

/// The kind of a top-level operation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub enum OperationKind {
    #[default]
    Unknown,
    Query,
    Mutation,
}

/// One top-level query or mutation request, rooted at a single field.
///
/// A bare `{ ... }` document (no `query` or `mutation` keyword) is modeled
/// as a single `Query`-kind operation whose root field has an empty name;
/// executors recognize that case and write only the selection, emitting no
/// key for the root itself.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Operation<'src> {
    pub kind: OperationKind,
    pub field: Field<'src>,
}

impl<'src> Operation<'src> {
    /// Creates an operation rooted at a field with the given alias and name.
    pub fn new(
        kind: OperationKind,
        alias: Option<Cow<'src, str>>,
        name: impl Into<Cow<'src, str>>,
    ) -> Self {
        Self {
            kind,
            field: Field::new(alias, name),
        }
    }

    /// Returns `true` if this is the anonymous-query form: a root field
    /// with neither a name nor an alias.
    pub fn is_anonymous(&self) -> bool {
        self.field.name.is_empty() && self.field.alias.is_none()
    }
}
