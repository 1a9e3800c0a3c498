use crate::ast::Arg;
use serde::Serialize;
use smallvec::SmallVec;
use std::borrow::Cow;

/// An `@directive(...)` application attached to a field or fragment.
///
/// Directives carry no behavior of their own; they are recorded for the
/// executor or backend to interpret. Arguments are optional.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Directive<'src> {
    pub name: Cow<'src, str>,

    #[serde(skip_serializing_if = "SmallVec::is_empty")]
    pub args: SmallVec<[Arg<'src>; 2]>,
}

impl<'src> Directive<'src> {
    /// Creates a directive with no arguments.
    pub fn new(name: impl Into<Cow<'src, str>>) -> Self {
        Self {
            name: name.into(),
            args: SmallVec::new(),
        }
    }

    /// Appends an argument to this directive.
    pub fn add_arg(&mut self, arg: Arg<'src>) {
        self.args.push(arg);
    }
}
