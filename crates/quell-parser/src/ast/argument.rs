use serde::Serialize;
use std::borrow::Cow;

/// An argument attached to a field or directive, or a typed variable
/// declaration's default value.
///
/// The value is stored as its literal source text; interpreting typed
/// values is the resolver backend's concern. Positional arguments have an
/// empty name. A typed variable declaration (`$id: Int = 4`) is recorded
/// with the variable's name and the default literal as the value (empty
/// when the declaration has no default).
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Arg<'src> {
    #[serde(skip_serializing_if = "super::str_is_empty")]
    pub name: Cow<'src, str>,
    pub value: Cow<'src, str>,
}

impl<'src> Arg<'src> {
    /// Creates an argument from a name and literal value text.
    pub fn new(name: impl Into<Cow<'src, str>>, value: impl Into<Cow<'src, str>>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
