//! Homogeneous arrays

use super::{ElementType, Struct, Text, Value};

/// Ordered sequence of one element type
///
/// Struct elements carry only their field list; they have no name of
/// their own on the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum Array {
    Int32(Vec<i32>),
    Uint64(Vec<u64>),
    Float64(Vec<f64>),
    String(Vec<Text>),
    Struct(Vec<Struct>),
}

impl Array {
    /// Empty array of the given element type
    pub fn empty(element_type: ElementType) -> Self {
        match element_type {
            ElementType::Int32 => Array::Int32(Vec::new()),
            ElementType::Uint64 => Array::Uint64(Vec::new()),
            ElementType::Float64 => Array::Float64(Vec::new()),
            ElementType::String => Array::String(Vec::new()),
            ElementType::Struct => Array::Struct(Vec::new()),
        }
    }

    pub fn element_type(&self) -> ElementType {
        match self {
            Array::Int32(_) => ElementType::Int32,
            Array::Uint64(_) => ElementType::Uint64,
            Array::Float64(_) => ElementType::Float64,
            Array::String(_) => ElementType::String,
            Array::Struct(_) => ElementType::Struct,
        }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        match self {
            Array::Int32(v) => v.len(),
            Array::Uint64(v) => v.len(),
            Array::Float64(v) => v.len(),
            Array::String(v) => v.len(),
            Array::Struct(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

macro_rules! impl_array_from {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<Vec<$t>> for Array {
                fn from(v: Vec<$t>) -> Self {
                    Array::$variant(v)
                }
            }

            impl From<Vec<$t>> for Value {
                fn from(v: Vec<$t>) -> Self {
                    Value::Array(Array::$variant(v))
                }
            }
        )*
    };
}

impl_array_from!(
    i32 => Int32,
    u64 => Uint64,
    f64 => Float64,
    Text => String,
    Struct => Struct,
);

impl From<Vec<String>> for Array {
    fn from(v: Vec<String>) -> Self {
        Array::String(v.into_iter().map(Text::from).collect())
    }
}

impl From<Vec<String>> for Value {
    fn from(v: Vec<String>) -> Self {
        Value::Array(v.into())
    }
}

impl From<Vec<&str>> for Array {
    fn from(v: Vec<&str>) -> Self {
        Array::String(v.into_iter().map(Text::from).collect())
    }
}

impl From<Vec<&str>> for Value {
    fn from(v: Vec<&str>) -> Self {
        Value::Array(v.into())
    }
}
