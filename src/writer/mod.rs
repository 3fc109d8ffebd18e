//! Encoding of tagpack values
//!
//! Every value is written as `tag, [element tag], name, payload`. The
//! element tag is present only for arrays, so a decoder can pick the
//! element constructor before it reads the name.
//!
//! The default decode limits are enforced here too, so every value that
//! encodes also decodes with [`decode`](crate::decode).

mod array;
mod value;

use crate::config::DecodeConfig;
use crate::error::{Error, Result};
use crate::stream::WireWrite;
use crate::types::{Argument, Value};
use std::io::Write;
use tracing::debug;

use value::{payload_len, write_payload};

impl Argument {
    /// Write this value and all of its descendants
    ///
    /// Fails with [`Error::LimitExceeded`] if structs nest deeper than
    /// [`DecodeConfig::DEFAULT_MAX_DEPTH`] or a container holds more items
    /// than the default decoder accepts. The stream may then hold a partial
    /// value.
    pub fn write<W: Write + ?Sized>(&self, stream: &mut W) -> Result<()> {
        write_argument(stream, self, 0)
    }
}

/// Write `arg` as a child of `depth` enclosing structs
pub(crate) fn write_argument<W: Write + ?Sized>(
    stream: &mut W,
    arg: &Argument,
    depth: usize,
) -> Result<()> {
    stream.write_fixed(arg.type_tag() as u8)?;
    if let Value::Array(arr) = &arg.value {
        stream.write_fixed(arr.element_type().tag() as u8)?;
    }
    stream.write_string(arg.name.as_bytes())?;
    write_payload(stream, &arg.value, depth)
}

/// Reject a struct at `depth` that the default decoder would refuse
fn check_depth(depth: usize) -> Result<()> {
    let limits = DecodeConfig::default();
    if !limits.allows_depth(depth) {
        debug!(depth, "refusing to encode nesting depth");
        return Err(Error::LimitExceeded {
            what: "depth",
            found: depth as u64,
            max: limits.max_depth as u64,
        });
    }
    Ok(())
}

/// Reject a container count that the default decoder would refuse
fn check_count(what: &'static str, count: usize) -> Result<u64> {
    let limits = DecodeConfig::default();
    let count = count as u64;
    if !limits.allows_items(count) {
        debug!(what, count, "refusing to encode container count");
        return Err(Error::LimitExceeded {
            what,
            found: count,
            max: limits.max_items,
        });
    }
    Ok(count)
}

/// Encode a value to bytes
pub fn to_bytes(arg: &Argument) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(encoded_len(arg));
    arg.write(&mut buf)?;
    Ok(buf)
}

/// Number of bytes [`Argument::write`] produces for `arg`
///
/// Lengths that overflow their prefix are counted as written; encoding
/// such a value fails instead.
pub fn encoded_len(arg: &Argument) -> usize {
    let element_tag = matches!(arg.value, Value::Array(_)) as usize;
    1 + element_tag + 2 + arg.name.len() + payload_len(&arg.value)
}
