//! Error types for tagpack

use crate::types::TypeTag;
use std::io;
use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while encoding, decoding, or accessing values
#[derive(Error, Debug)]
pub enum Error {
    /// Accessor type does not match the stored variant
    #[error("type mismatch: expected {expected}, got {actual:?}")]
    TypeMismatch {
        expected: &'static str,
        actual: TypeTag,
    },
    /// No struct field with the requested name
    #[error("field not found: {name:?}")]
    FieldNotFound { name: String },
    /// Tag byte has no registered constructor
    #[error("unknown type tag: 0x{0:02X}")]
    UnknownTypeTag(u8),
    /// Stream ended before a field was fully read
    #[error("stream ended before value was complete")]
    TruncatedStream,
    /// Array element tag outside the supported set
    #[error("unsupported array element type: 0x{0:02X}")]
    UnsupportedElementType(u8),
    /// A `str` view was requested of bytes that are not valid UTF-8
    ///
    /// Decoding never fails with this; strings are kept as raw bytes.
    #[error("invalid UTF-8 in string")]
    InvalidUtf8,
    /// Value is too long for its length prefix
    #[error("{what} length {len} exceeds {max}")]
    LengthOverflow {
        what: &'static str,
        len: usize,
        max: usize,
    },
    /// Count or nesting depth is above the configured limit (decode) or
    /// the default limit (encode)
    #[error("{what} exceeded: {found} > {max}")]
    LimitExceeded {
        what: &'static str,
        found: u64,
        max: u64,
    },
    /// Input remained after the root value was decoded
    #[error("extra data found: {0} bytes")]
    TrailingBytes(usize),
    /// Transport failure other than end of stream
    #[error("io: {0}")]
    Io(io::Error),
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::UnexpectedEof => Error::TruncatedStream,
            _ => Error::Io(e),
        }
    }
}
