use crate::ast::Field;
use serde::Serialize;
use std::borrow::Cow;

/// An ordered set of fields requested within `{ ... }`.
///
/// Insertion order is significant and preserved through execution and
/// serialization. Field names within one selection need not be unique;
/// aliasing exists precisely so the same underlying name can be requested
/// more than once under different output keys.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Selection<'src> {
    pub fields: Vec<Field<'src>>,
}

impl<'src> Selection<'src> {
    /// Returns `true` if no fields have been selected.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Appends a field with the given alias and name, returning a mutable
    /// reference so the parser can keep attaching arguments and directives.
    pub fn add_field(
        &mut self,
        alias: Option<Cow<'src, str>>,
        name: impl Into<Cow<'src, str>>,
    ) -> &mut Field<'src> {
        self.fields.push(Field::new(alias, name));
        self.fields.last_mut().expect("selection field was just pushed")
    }
}
