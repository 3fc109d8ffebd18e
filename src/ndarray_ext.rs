//! ndarray integration for tagpack arrays
//!
//! Conversions between numeric [`Array`]s and one-dimensional
//! `ndarray::Array1`.
//!
//! Enable with the `ndarray` feature flag.

use crate::error::{Error, Result};
use crate::types::{Array, ElementType};
use ndarray::{Array1, ArrayView1};

/// Numeric element types that map onto an array variant
pub trait ArrayElement: Sized + Clone + 'static {
    const ELEMENT_TYPE: ElementType;

    fn slice(arr: &Array) -> Option<&[Self]>;
    fn wrap(items: Vec<Self>) -> Array;
}

macro_rules! impl_array_element {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl ArrayElement for $t {
                const ELEMENT_TYPE: ElementType = ElementType::$variant;

                fn slice(arr: &Array) -> Option<&[Self]> {
                    match arr {
                        Array::$variant(items) => Some(items),
                        _ => None,
                    }
                }

                fn wrap(items: Vec<Self>) -> Array {
                    Array::$variant(items)
                }
            }
        )*
    };
}

impl_array_element!(i32 => Int32, u64 => Uint64, f64 => Float64);

impl Array {
    /// Borrow the elements as an ndarray view
    pub fn as_ndarray<T: ArrayElement>(&self) -> Result<ArrayView1<'_, T>> {
        T::slice(self)
            .map(ArrayView1::from)
            .ok_or(Error::TypeMismatch {
                expected: element_name(T::ELEMENT_TYPE),
                actual: crate::types::TypeTag::Array,
            })
    }

    /// Copy the elements into an owned ndarray
    pub fn to_ndarray<T: ArrayElement>(&self) -> Result<Array1<T>> {
        Ok(self.as_ndarray::<T>()?.to_owned())
    }

    /// Build an array from any one-dimensional ndarray, contiguous or not
    pub fn from_ndarray<T: ArrayElement>(arr: ArrayView1<'_, T>) -> Self {
        T::wrap(arr.iter().cloned().collect())
    }
}

impl<T: ArrayElement> From<Array1<T>> for Array {
    fn from(arr: Array1<T>) -> Self {
        Array::from_ndarray(arr.view())
    }
}

fn element_name(element_type: ElementType) -> &'static str {
    match element_type {
        ElementType::Int32 => "array<int32>",
        ElementType::Uint64 => "array<uint64>",
        ElementType::Float64 => "array<float64>",
        ElementType::String => "array<string>",
        ElementType::Struct => "array<struct>",
    }
}
