use crate::resolve::ResolveError;
use quell_parser::ParseError;

/// Any failure from the parse-then-execute pipeline.
///
/// Each layer stops at its first error and returns it unchanged; this enum
/// only routes the original cause to the caller, it never rewraps or hides
/// it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A lexical or syntax error from the parsing front end.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A resolution error from the backend or executor.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// A value failed to serialize to JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The output sink failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
