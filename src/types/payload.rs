//! Typed access to value payloads

use super::{Array, Struct, Text, Value};
use crate::error::{Error, Result};

/// A Rust type that a [`Value`] can be viewed as
///
/// Implemented for each scalar type, [`Text`] and `str` (checked UTF-8),
/// `[u8]` (blob), the element slices of every array kind, [`Array`], and
/// [`Struct`].
pub trait Payload {
    /// Name reported in [`Error::TypeMismatch`]
    const EXPECTED: &'static str;

    fn view(value: &Value) -> Result<&Self>;
}

fn mismatch<T: Payload + ?Sized>(value: &Value) -> Error {
    Error::TypeMismatch {
        expected: T::EXPECTED,
        actual: value.tag(),
    }
}

macro_rules! impl_payload {
    ($($t:ty => $expected:literal, $pat:pat => $out:expr;)*) => {
        $(
            impl Payload for $t {
                const EXPECTED: &'static str = $expected;

                fn view(value: &Value) -> Result<&Self> {
                    match value {
                        $pat => Ok($out),
                        _ => Err(mismatch::<Self>(value)),
                    }
                }
            }
        )*
    };
}

impl_payload! {
    i32 => "int32", Value::Int32(v) => v;
    u64 => "uint64", Value::Uint64(v) => v;
    f64 => "float64", Value::Float64(v) => v;
    Text => "string", Value::String(v) => v;
    [u8] => "blob", Value::Blob(v) => v.as_slice();
    Array => "array", Value::Array(v) => v;
    Struct => "struct", Value::Struct(v) => v;
    [i32] => "array<int32>", Value::Array(Array::Int32(v)) => v.as_slice();
    [u64] => "array<uint64>", Value::Array(Array::Uint64(v)) => v.as_slice();
    [f64] => "array<float64>", Value::Array(Array::Float64(v)) => v.as_slice();
    [Text] => "array<string>", Value::Array(Array::String(v)) => v.as_slice();
    [Struct] => "array<struct>", Value::Array(Array::Struct(v)) => v.as_slice();
}

// Strings are stored as raw bytes; the UTF-8 view is checked on access.
impl Payload for str {
    const EXPECTED: &'static str = "string";

    fn view(value: &Value) -> Result<&Self> {
        match value {
            Value::String(text) => text.to_str(),
            _ => Err(mismatch::<Self>(value)),
        }
    }
}
