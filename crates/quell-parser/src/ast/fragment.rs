use crate::ast::Directive;
use crate::ast::Selection;
use serde::Serialize;
use smallvec::SmallVec;
use std::borrow::Cow;

/// A named fragment definition: `fragment name on Type { ... }`.
///
/// Fragments are parsed and stored on the document; referencing one from a
/// selection (`...name`) records a pseudo-field carrying the spread name.
/// Expanding spreads is not a parsing concern.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FragmentDefinition<'src> {
    pub name: Cow<'src, str>,

    /// The type named by the fragment's `on` clause.
    pub type_condition: Cow<'src, str>,

    #[serde(skip_serializing_if = "SmallVec::is_empty")]
    pub directives: SmallVec<[Directive<'src>; 1]>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection: Option<Selection<'src>>,
}

impl<'src> FragmentDefinition<'src> {
    /// Creates a fragment definition with an empty selection.
    pub fn new(name: impl Into<Cow<'src, str>>, type_condition: impl Into<Cow<'src, str>>) -> Self {
        Self {
            name: name.into(),
            type_condition: type_condition.into(),
            directives: SmallVec::new(),
            selection: None,
        }
    }

    /// Appends a directive to this fragment.
    pub fn add_directive(&mut self, directive: Directive<'src>) {
        self.directives.push(directive);
    }
}
