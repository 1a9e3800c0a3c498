//! The tree-walking executor: resolves a parsed document against a
//! [`Store`] and serializes the result.

use crate::resolve::Field;
use crate::resolve::ResolveContext;
use crate::resolve::ResolveError;
use crate::resolve::Store;
use crate::Error;
use quell_parser::ast;
use quell_parser::ast::OperationKind;
use std::io;

/// Executes parsed documents against a resolver graph, writing one JSON
/// object per document to a caller-supplied sink.
///
/// Serialization is deliberately manual: output keys, `{`/`}`/`,` framing,
/// and the scalar/composite branch are controlled field by field, because
/// selection order must be preserved exactly, aliases override names as
/// output keys, and which capability a resolved field is asked for depends
/// on the query's shape rather than the backend's.
///
/// The executor buffers the full result and flushes it once on success, so
/// a resolution failure partway through a document yields no output at all
/// rather than a truncated prefix. Fields resolve strictly in declaration
/// order, one at a time; a backend is free to block inside a resolution
/// (e.g. an HTTP fetch) and the executor simply waits.
///
/// The document itself is immutable here, so one parsed document may be
/// executed any number of times, including concurrently.
pub struct Executor<S: Store> {
    store: S,
}

impl<S: Store> Executor<S> {
    /// Creates an executor over `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Parses `query` and executes it, writing the result to `sink`.
    ///
    /// The first error from any layer — lexical, syntactic, or resolution —
    /// is surfaced verbatim; a failed call writes nothing to the sink.
    pub fn handle<W: io::Write>(&self, query: &str, sink: &mut W) -> Result<(), Error> {
        let document = quell_parser::parse(query)?;
        self.execute(&document, sink)
    }

    /// Executes an already-parsed document, writing the result to `sink`.
    pub fn execute<W: io::Write>(
        &self,
        document: &ast::Document<'_>,
        sink: &mut W,
    ) -> Result<(), Error> {
        log::debug!(
            "executing document with {} operation(s)",
            document.operations.len()
        );

        let mut out = String::new();
        out.push('{');
        let mut first = true;

        for operation in &document.operations {
            if operation.is_anonymous() {
                // The bare `{...}` shorthand: the operation's selection is
                // the document's selection, so its fields resolve directly
                // against the store and no key is written for the root.
                let Some(selection) = &operation.field.selection else {
                    continue;
                };
                for field in &selection.fields {
                    self.write_key(&mut out, &mut first, field.key())?;
                    let resolved = self.resolve_root(operation.kind, field)?;
                    self.write_field(field, resolved.as_ref(), &mut out)?;
                }
            } else {
                self.write_key(&mut out, &mut first, operation.field.key())?;
                let resolved = self.resolve_root(operation.kind, &operation.field)?;
                self.write_field(&operation.field, resolved.as_ref(), &mut out)?;
            }
        }

        out.push('}');
        sink.write_all(out.as_bytes())?;
        Ok(())
    }

    /// Writes a separator (after the first entry) and a quoted key.
    fn write_key(&self, out: &mut String, first: &mut bool, key: &str) -> Result<(), Error> {
        if !*first {
            out.push(',');
        }
        *first = false;
        out.push_str(&serde_json::to_string(key)?);
        out.push(':');
        Ok(())
    }

    /// Resolves a root-level field through the store.
    ///
    /// A root name the store does not recognize is reported as
    /// [`ResolveError::UnknownQuery`] and aborts the whole document.
    fn resolve_root(
        &self,
        kind: OperationKind,
        field: &ast::Field<'_>,
    ) -> Result<Box<dyn Field>, Error> {
        log::trace!("resolving root field {:?}", field.name.as_ref());
        let ctx = ResolveContext::new(field.name.as_ref(), &field.args);
        let result = match kind {
            OperationKind::Mutation => self.store.mutate(&ctx),
            _ => self.store.query(&ctx),
        };
        result.map_err(|error| match error {
            ResolveError::FieldNotFound { .. } => Error::Resolve(ResolveError::UnknownQuery {
                name: field.name.to_string(),
            }),
            other => Error::Resolve(other),
        })
    }

    /// Serializes one resolved field.
    ///
    /// The query decides the branch: a field selected without a nested
    /// `{...}` (or with an empty one) is asked for its scalar value; one
    /// with a non-empty selection is asked for its nested resolver, and
    /// each requested sub-field recurses in declaration order under its
    /// own effective key.
    fn write_field(
        &self,
        ast_field: &ast::Field<'_>,
        resolved: &dyn Field,
        out: &mut String,
    ) -> Result<(), Error> {
        if ast_field.is_scalar() {
            let value = resolved.value().map_err(Error::Resolve)?;
            out.push_str(&serde_json::to_string(&value)?);
            return Ok(());
        }

        let selection = ast_field
            .selection
            .as_ref()
            .expect("a non-scalar field has a selection");
        let resolver = resolved.selection().map_err(Error::Resolve)?;

        out.push('{');
        for (index, sub_field) in selection.fields.iter().enumerate() {
            if index > 0 {
                out.push(',');
            }
            out.push_str(&serde_json::to_string(sub_field.key())?);
            out.push(':');

            log::trace!("resolving field {:?}", sub_field.name.as_ref());
            let ctx = ResolveContext::new(sub_field.name.as_ref(), &sub_field.args);
            let sub_resolved = resolver.query(&ctx).map_err(Error::Resolve)?;
            self.write_field(sub_field, sub_resolved.as_ref(), out)?;
        }
        out.push('}');
        Ok(())
    }
}
