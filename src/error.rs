use thiserror::Error;

/// Error covers every failure the digest and codec operations can return.
///
/// All variants are returned to the caller as values; nothing in this crate
/// panics on bad input or recovers silently into a default. The variants fall
/// into three groups: input validation (`InvalidCode`, `NoDefaultLength`,
/// `UnsupportedLength`, `InconsistentLength`), wire-format parsing
/// (`MalformedVarint`, `Truncated`, `TrailingData`, `Hex`), and failures
/// reported by an underlying hash primitive (`Primitive`).
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// The algorithm code is not a known fixed code and lies in no family range.
    #[error("invalid multihash code {0}")]
    InvalidCode(u64),

    /// No length was given and the code has no canonical digest length.
    #[error("no default length for code {0}")]
    NoDefaultLength(u64),

    /// The requested digest length is not one the algorithm can produce.
    #[error("unsupported digest length {length} for code {code}")]
    UnsupportedLength {
        /// Algorithm code the length was requested for.
        code: u64,
        /// The rejected length, in bytes.
        length: usize,
    },

    /// The digest passed to `encode` does not match the declared length.
    #[error("inconsistent digest length: declared {declared}, got {actual} bytes")]
    InconsistentLength {
        /// Length declared by the caller.
        declared: usize,
        /// Actual number of digest bytes supplied.
        actual: usize,
    },

    /// A varint field is unterminated or overflows 64 bits.
    #[error("malformed varint")]
    MalformedVarint,

    /// Fewer digest bytes remain than the length field declares.
    #[error("multihash truncated: need {needed} digest bytes, have {remaining}")]
    Truncated {
        /// Digest bytes the length field declares.
        needed: u64,
        /// Digest bytes actually remaining in the buffer.
        remaining: usize,
    },

    /// Bytes remain after the declared digest; decoding is all-or-nothing.
    #[error("{0} trailing bytes after digest")]
    TrailingData(usize),

    /// A hex string could not be decoded into multihash bytes.
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    /// The underlying hash primitive reported an internal error.
    #[error("hash primitive failure: {0}")]
    Primitive(String),
}
