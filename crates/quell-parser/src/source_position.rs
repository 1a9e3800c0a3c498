use memchr::memchr_iter;
use memchr::memrchr;

/// A resolved human-readable position in the source text.
///
/// Tokens themselves only carry a [`ByteSpan`](crate::ByteSpan); a
/// `SourcePosition` is computed on demand when an error needs to be reported.
/// Errors are the cold path, so paying a single backwards scan of the source
/// there keeps every token 8 bytes smaller on the hot path.
///
/// # Indexing Convention
///
/// All values are 0-based:
/// - `line`: 0 = first line of the document
/// - `col`: character count (not bytes) within the current line
/// - `byte_offset`: byte offset within the whole document
///
/// The `Display` impl renders 1-based `line:col` the way editors show them.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SourcePosition {
    line: usize,
    col: usize,
    byte_offset: usize,
}

impl SourcePosition {
    /// Creates a `SourcePosition` directly from its parts.
    pub fn new(line: usize, col: usize, byte_offset: usize) -> Self {
        Self {
            line,
            col,
            byte_offset,
        }
    }

    /// Resolves the line and column of `byte_offset` within `source`.
    ///
    /// `byte_offset` is clamped to the length of `source`, so positions one
    /// past the end (e.g. an EOF token) resolve to the final line.
    pub fn resolve(source: &str, byte_offset: usize) -> Self {
        let offset = byte_offset.min(source.len());
        let prefix = &source.as_bytes()[..offset];
        let line = memchr_iter(b'\n', prefix).count();
        let line_start = memrchr(b'\n', prefix).map(|i| i + 1).unwrap_or(0);
        let col = source[line_start..offset].chars().count();
        Self {
            line,
            col,
            byte_offset,
        }
    }

    /// Returns the 0-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 0-based character column within the line.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Returns the 0-based byte offset from the start of the document.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }
}

impl std::fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.col + 1)
    }
}
