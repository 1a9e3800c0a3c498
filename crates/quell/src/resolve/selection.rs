use crate::resolve::Field;
use crate::resolve::ResolveContext;
use crate::resolve::ResolveError;

/// The nested resolver behind a composite field: resolves sub-field names
/// within an already-fetched value.
pub trait Selection {
    /// Resolves one sub-field by name with its arguments.
    fn query(&self, ctx: &ResolveContext<'_>) -> Result<Box<dyn Field>, ResolveError>;
}
