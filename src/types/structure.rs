//! Structs: ordered collections of named values

use super::{Argument, Payload, Value};
use crate::error::{Error, Result};

/// Ordered, heterogeneous collection of [`Argument`]s
///
/// The struct owns every field. Names may repeat; lookups by name always
/// resolve to the first match in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Struct {
    fields: Vec<Argument>,
}

impl Struct {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &[Argument] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Argument> {
        self.fields.iter()
    }

    /// Append a field
    pub fn push(&mut self, field: Argument) {
        self.fields.push(field);
    }

    /// First field with the given name
    ///
    /// Names compare as raw bytes, so a `&str` and a non-UTF-8 byte name
    /// both work.
    pub fn get(&self, name: impl AsRef<[u8]>) -> Option<&Argument> {
        let name = name.as_ref();
        self.fields.iter().find(|f| f.name.as_bytes() == name)
    }

    /// Typed view of the first field named `name`
    pub fn field<T: Payload + ?Sized>(&self, name: impl AsRef<[u8]>) -> Result<&T> {
        let name = name.as_ref();
        self.get(name).ok_or_else(|| not_found(name))?.get::<T>()
    }

    /// Get a nested field by dot-separated path (e.g., "audio.sample_rate")
    pub fn lookup(&self, path: &str) -> Option<&Argument> {
        let mut segments = path.split('.');
        let mut current = self.get(segments.next()?)?;
        for segment in segments {
            match &current.value {
                Value::Struct(inner) => current = inner.get(segment)?,
                _ => return None,
            }
        }
        Some(current)
    }

    /// Remove and return the first field named `name`
    ///
    /// Later fields with the same name are untouched. On failure the struct
    /// is left unchanged.
    pub fn release(&mut self, name: impl AsRef<[u8]>) -> Result<Argument> {
        let name = name.as_ref();
        let index = self
            .fields
            .iter()
            .position(|f| f.name.as_bytes() == name)
            .ok_or_else(|| not_found(name))?;
        Ok(self.fields.remove(index))
    }

    /// Index of `field` if it is one of this struct's own fields
    ///
    /// Compares by identity, not by name or value.
    pub fn position(&self, field: &Argument) -> Option<usize> {
        self.fields.iter().position(|f| std::ptr::eq(f, field))
    }

    /// Remove and return the field at `index`
    pub fn release_at(&mut self, index: usize) -> Option<Argument> {
        (index < self.fields.len()).then(|| self.fields.remove(index))
    }

    pub(crate) fn fields_mut(&mut self) -> &mut Vec<Argument> {
        &mut self.fields
    }
}

fn not_found(name: &[u8]) -> Error {
    Error::FieldNotFound {
        name: String::from_utf8_lossy(name).into_owned(),
    }
}

impl From<Vec<Argument>> for Struct {
    fn from(fields: Vec<Argument>) -> Self {
        Self { fields }
    }
}

impl IntoIterator for Struct {
    type Item = Argument;
    type IntoIter = std::vec::IntoIter<Argument>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a Struct {
    type Item = &'a Argument;
    type IntoIter = std::slice::Iter<'a, Argument>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
