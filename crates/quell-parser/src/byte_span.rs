/// Compact byte-offset span, 8 bytes per token.
///
/// Represents a half-open interval `[start, end)` of byte offsets into the
/// source text. Both offsets are 0-based. `u32` offsets support documents up
/// to 4 GiB, far beyond any query a caller will realistically submit.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ByteSpan {
    /// Byte offset of the first byte of this item (0-based, inclusive).
    pub start: u32,
    /// Byte offset one past the last byte of this item (0-based, exclusive).
    pub end: u32,
}

impl ByteSpan {
    /// Creates a new `ByteSpan` from start (inclusive) and end (exclusive)
    /// byte offsets.
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Returns the length of this span in bytes.
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Returns `true` if this span has zero length.
    ///
    /// Zero-length spans occur for tokens with no source text of their own,
    /// such as `Eof`.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the slice of `source` that this span covers.
    ///
    /// # Panics
    ///
    /// Panics if the span is out of bounds for `source` or does not fall on
    /// character boundaries. Spans produced by the scanner are always valid
    /// for the text they were scanned from.
    pub fn slice<'src>(&self, source: &'src str) -> &'src str {
        &source[self.start as usize..self.end as usize]
    }
}
