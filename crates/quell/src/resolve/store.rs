use crate::resolve::Field;
use crate::resolve::ResolveContext;
use crate::resolve::ResolveError;

/// The root of a resolver graph: resolves top-level names.
///
/// This is the only trait a backend must implement in full; `mutate` has a
/// stub default because observed backends are read-only.
pub trait Store {
    /// Resolves a root-level query name with its arguments.
    fn query(&self, ctx: &ResolveContext<'_>) -> Result<Box<dyn Field>, ResolveError>;

    /// Resolves a root-level mutation name with its arguments.
    ///
    /// The default implementation refuses with
    /// [`ResolveError::NotImplemented`].
    fn mutate(&self, ctx: &ResolveContext<'_>) -> Result<Box<dyn Field>, ResolveError> {
        let _ = ctx;
        Err(ResolveError::NotImplemented)
    }
}
