//! Named values

use super::{Payload, Text, TypeTag, Value};
use crate::error::Result;

/// A named, self-describing value
///
/// The type tag is derived from the payload variant and cannot change after
/// construction. Names need not be unique and may be empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    pub(crate) name: Text,
    pub(crate) value: Value,
}

impl Argument {
    pub fn new(name: impl Into<Text>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &Text {
        &self.name
    }

    pub fn type_tag(&self) -> TypeTag {
        self.value.tag()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    /// View the payload as `T`
    ///
    /// Fails with [`Error::TypeMismatch`](crate::Error::TypeMismatch) unless
    /// `T` matches the stored variant exactly.
    ///
    /// ```
    /// use tagpack::Argument;
    ///
    /// let arg = Argument::new("Base", 555i32);
    /// assert_eq!(*arg.get::<i32>().unwrap(), 555);
    /// assert!(arg.get::<u64>().is_err());
    /// ```
    pub fn get<T: Payload + ?Sized>(&self) -> Result<&T> {
        T::view(&self.value)
    }
}
