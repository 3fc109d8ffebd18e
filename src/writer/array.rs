//! Array serialization

use super::check_count;
use super::value::{struct_payload_len, write_struct_payload};
use crate::error::Result;
use crate::stream::WireWrite;
use crate::types::Array;
use std::io::Write;

/// Write an array payload: count, then elements without per-element tags
///
/// Struct elements are written as bare field lists, with no tag or name.
/// They sit one level below the structs enclosing the array.
pub fn write_array_payload<W: Write + ?Sized>(
    stream: &mut W,
    arr: &Array,
    depth: usize,
) -> Result<()> {
    stream.write_fixed(check_count("array elements", arr.len())?)?;
    match arr {
        Array::Int32(items) => items.iter().try_for_each(|v| stream.write_fixed(*v)),
        Array::Uint64(items) => items.iter().try_for_each(|v| stream.write_fixed(*v)),
        Array::Float64(items) => items.iter().try_for_each(|v| stream.write_fixed(*v)),
        Array::String(items) => items.iter().try_for_each(|s| stream.write_string(s.as_bytes())),
        Array::Struct(items) => items
            .iter()
            .try_for_each(|s| write_struct_payload(stream, s, depth + 1)),
    }
}

pub fn array_payload_len(arr: &Array) -> usize {
    8 + match arr {
        Array::Int32(items) => items.len() * 4,
        Array::Uint64(items) => items.len() * 8,
        Array::Float64(items) => items.len() * 8,
        Array::String(items) => items.iter().map(|s| 2 + s.len()).sum(),
        Array::Struct(items) => items.iter().map(struct_payload_len).sum(),
    }
}
