use crate::ast::FragmentDefinition;
use crate::ast::Operation;
use serde::Serialize;

/// Root of a parse result: the ordered operations (and fragment
/// definitions) of one document.
///
/// A document is well-formed iff every operation's field tree satisfies the
/// scalar/composite invariant and every opened selection scope was closed;
/// the parser refuses to produce a document for which either fails.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Document<'src> {
    pub operations: Vec<Operation<'src>>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fragments: Vec<FragmentDefinition<'src>>,
}

impl Document<'_> {
    /// Returns `true` if this document consists of exactly one anonymous
    /// operation — the bare `{ ... }` shorthand.
    pub fn has_default_query_only(&self) -> bool {
        self.operations.len() == 1 && self.operations[0].is_anonymous()
    }
}
