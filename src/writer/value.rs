//! Payload serialization

use super::array::{array_payload_len, write_array_payload};
use super::{check_count, check_depth, write_argument};
use crate::error::{Error, Result};
use crate::stream::WireWrite;
use crate::types::{Struct, Value};
use std::io::Write;

/// Write the payload of a value (everything after tag and name)
///
/// `depth` counts the structs enclosing `value`.
pub fn write_payload<W: Write + ?Sized>(
    stream: &mut W,
    value: &Value,
    depth: usize,
) -> Result<()> {
    match value {
        Value::Int32(v) => stream.write_fixed(*v),
        Value::Uint64(v) => stream.write_fixed(*v),
        Value::Float64(v) => stream.write_fixed(*v),
        Value::String(s) => stream.write_string(s.as_bytes()),
        Value::Blob(bytes) => {
            let len = u32::try_from(bytes.len()).map_err(|_| Error::LengthOverflow {
                what: "blob",
                len: bytes.len(),
                max: u32::MAX as usize,
            })?;
            stream.write_fixed(len)?;
            stream.write_bytes(bytes)
        }
        Value::Array(arr) => write_array_payload(stream, arr, depth),
        Value::Struct(s) => write_struct_payload(stream, s, depth + 1),
    }
}

/// Field count followed by each field in full
///
/// `depth` is this struct's own level, the outermost struct being 1.
pub fn write_struct_payload<W: Write + ?Sized>(
    stream: &mut W,
    s: &Struct,
    depth: usize,
) -> Result<()> {
    check_depth(depth)?;
    stream.write_fixed(check_count("struct fields", s.len())?)?;
    for field in s {
        write_argument(stream, field, depth)?;
    }
    Ok(())
}

pub fn payload_len(value: &Value) -> usize {
    match value {
        Value::Int32(_) => 4,
        Value::Uint64(_) | Value::Float64(_) => 8,
        Value::String(s) => 2 + s.len(),
        Value::Blob(bytes) => 4 + bytes.len(),
        Value::Array(arr) => array_payload_len(arr),
        Value::Struct(s) => struct_payload_len(s),
    }
}

pub fn struct_payload_len(s: &Struct) -> usize {
    8 + s.iter().map(super::encoded_len).sum::<usize>()
}
