use crate::ast::Arg;
use crate::ast::Directive;
use crate::ast::Selection;
use serde::Serialize;
use smallvec::SmallVec;
use std::borrow::Cow;

/// A field selection, optionally aliased, with arguments, directives, and a
/// nested selection.
///
/// A field is *scalar* iff its selection is absent or empty; its effective
/// output key is the alias when one was written, else the name. A fragment
/// spread (`...friends`) is recorded as a pseudo-field carrying the spread
/// name.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Field<'src> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<Cow<'src, str>>,

    pub name: Cow<'src, str>,

    #[serde(skip_serializing_if = "SmallVec::is_empty")]
    pub args: SmallVec<[Arg<'src>; 2]>,

    #[serde(skip_serializing_if = "SmallVec::is_empty")]
    pub directives: SmallVec<[Directive<'src>; 1]>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection: Option<Selection<'src>>,
}

impl<'src> Field<'src> {
    /// Creates a field with the given alias and name and nothing else.
    pub fn new(alias: Option<Cow<'src, str>>, name: impl Into<Cow<'src, str>>) -> Self {
        Self {
            alias,
            name: name.into(),
            args: SmallVec::new(),
            directives: SmallVec::new(),
            selection: None,
        }
    }

    /// The effective output key: the alias when one was written (and is
    /// non-empty), else the field name.
    pub fn key(&self) -> &str {
        match &self.alias {
            Some(alias) if !alias.is_empty() => alias.as_ref(),
            _ => self.name.as_ref(),
        }
    }

    /// Returns `true` if this field's selection is absent or empty.
    ///
    /// A field written with an empty `{}` parses as a present-but-empty
    /// selection (distinguishable from no selection at all), but selects
    /// zero sub-fields and therefore still resolves as a scalar.
    pub fn is_scalar(&self) -> bool {
        match &self.selection {
            None => true,
            Some(selection) => selection.fields.is_empty(),
        }
    }

    /// Appends an argument to this field.
    pub fn add_arg(&mut self, arg: Arg<'src>) {
        self.args.push(arg);
    }

    /// Appends a directive to this field.
    pub fn add_directive(&mut self, directive: Directive<'src>) {
        self.directives.push(directive);
    }
}
