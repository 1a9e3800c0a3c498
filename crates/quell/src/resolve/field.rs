use crate::resolve::ResolveError;
use crate::resolve::Selection;
use crate::resolve::Value;

/// A resolved field: either a scalar leaf or a composite with further
/// structure behind it.
///
/// Which capability the executor asks for is decided by the *query*: a
/// field selected without `{...}` is asked for its [`value`](Field::value),
/// one selected with a nested selection is asked for its
/// [`selection`](Field::selection).
pub trait Field {
    /// Produces the leaf value of a scalar field.
    ///
    /// A field with no value to give returns `Value::Null`, not an error;
    /// [`ResolveError::NotAScalar`] is reserved for fields that are not
    /// scalars at all.
    fn value(&self) -> Result<Value, ResolveError>;

    /// Produces the nested resolver of a composite field.
    fn selection(&self) -> Result<Box<dyn Selection>, ResolveError>;
}
