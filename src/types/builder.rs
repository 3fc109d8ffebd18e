//! Incremental struct assembly

use super::{Argument, Struct, Text, Value};

/// Accumulates fields, then hands all of them to a new struct value
///
/// [`build`](Self::build) consumes the builder, so pending fields can only
/// leave it by becoming part of a struct or by being dropped with it.
#[derive(Debug, Default)]
#[must_use = "a builder does nothing until `build` is called"]
pub struct StructBuilder {
    fields: Vec<Argument>,
}

impl StructBuilder {
    pub fn create() -> Self {
        Self::default()
    }

    /// Construct a field in place and append it
    pub fn with(mut self, name: impl Into<Text>, value: impl Into<Value>) -> Self {
        self.fields.push(Argument::new(name, value));
        self
    }

    /// Append an existing value; `None` is ignored
    pub fn add(mut self, field: impl Into<Option<Argument>>) -> Self {
        if let Some(field) = field.into() {
            self.fields.push(field);
        }
        self
    }

    /// Number of pending fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Finish the struct under `name`, taking every pending field
    ///
    /// This consumes the builder. Start a new one with
    /// [`create`](Self::create) for the next struct.
    pub fn build(self, name: impl Into<Text>) -> Argument {
        Argument::new(name, Struct::from(self.fields))
    }
}
