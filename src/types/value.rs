//! Value payloads

use super::{Array, Struct, Text, TypeTag};

/// Payload of an [`Argument`](super::Argument)
///
/// The variant set is closed; it mirrors [`TypeTag`] one to one.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int32(i32),
    Uint64(u64),
    Float64(f64),
    String(Text),
    Array(Array),
    Struct(Struct),
    Blob(Vec<u8>),
}

impl Value {
    /// Get the tag for this value
    pub fn tag(&self) -> TypeTag {
        match self {
            Value::Int32(_) => TypeTag::Int32,
            Value::Uint64(_) => TypeTag::Uint64,
            Value::Float64(_) => TypeTag::Float64,
            Value::String(_) => TypeTag::String,
            Value::Array(_) => TypeTag::Array,
            Value::Struct(_) => TypeTag::Struct,
            Value::Blob(_) => TypeTag::Blob,
        }
    }

    /// Empty instance of the same variant; arrays keep their element type
    pub(crate) fn emptied(&self) -> Self {
        match self {
            Value::Array(arr) => Value::Array(Array::empty(arr.element_type())),
            _ => Value::empty(self.tag()),
        }
    }

    /// Empty instance of the variant named by `tag`
    pub(crate) fn empty(tag: TypeTag) -> Self {
        match tag {
            TypeTag::Int32 => Value::Int32(0),
            TypeTag::Uint64 => Value::Uint64(0),
            TypeTag::Float64 => Value::Float64(0.0),
            TypeTag::String => Value::String(Text::new()),
            TypeTag::Array => Value::Array(Array::Int32(Vec::new())),
            TypeTag::Struct => Value::Struct(Struct::new()),
            TypeTag::Blob => Value::Blob(Vec::new()),
        }
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int32(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::Uint64(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float64(v)
    }
}

impl From<Text> for Value {
    fn from(v: Text) -> Self {
        Value::String(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v.into())
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.into())
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
        Value::Array(v)
    }
}

impl From<Struct> for Value {
    fn from(v: Struct) -> Self {
        Value::Struct(v)
    }
}

// Raw bytes are always a blob; there is no u8 array element type.
impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Blob(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Blob(v.to_vec())
    }
}
