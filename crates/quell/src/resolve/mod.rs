//! The resolver contract: the boundary between the executor and whatever
//! backend actually produces data.
//!
//! A backend exposes a root [`Store`]. Resolving a name yields a [`Field`]
//! capability, which either produces a leaf [`Value`] (scalar fields) or a
//! further [`Selection`] to resolve nested names against (composite
//! fields). The executor walks a parsed document against this contract and
//! never sees backend internals; backends are free to hold data in memory,
//! read JSON documents, or fetch over the network, and may take as long as
//! they like — the executor simply awaits each resolution in
//! field-declaration order.

mod context;
mod field;
mod resolve_error;
mod selection;
mod store;

pub use context::ResolveContext;
pub use field::Field;
pub use resolve_error::ResolveError;
pub use selection::Selection;
pub use store::Store;

/// The leaf value type produced by scalar fields.
///
/// Backends return JSON values directly; absence of a value is
/// `Value::Null`, which serializes as a literal `null` rather than being
/// omitted.
pub type Value = serde_json::Value;
