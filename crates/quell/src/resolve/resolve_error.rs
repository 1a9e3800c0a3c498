/// Errors raised across the resolver contract.
///
/// The executor aborts the whole document on the first of these; there is
/// no partial-result contract, and no layer retries or recovers.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ResolveError {
    /// The backend does not recognize the requested name at this level.
    #[error("field not found: {name}")]
    FieldNotFound { name: String },

    /// `value()` was called on a field that is not a scalar.
    #[error("invalid attempt to treat a non-scalar field as a scalar")]
    NotAScalar,

    /// The backend does not implement this capability (observed backends
    /// stub mutation this way).
    #[error("feature not implemented")]
    NotImplemented,

    /// A root-level name was not recognized by the store. The executor
    /// translates a root [`FieldNotFound`](ResolveError::FieldNotFound)
    /// into this.
    #[error("unknown query: {name}")]
    UnknownQuery { name: String },
}
