//! Payload decoding

use super::Decoder;
use crate::error::Result;
use crate::stream::WireRead;
use crate::types::{Struct, Text, Value};

/// Upper bound on speculative preallocation for container counts
pub(super) const PREALLOC_ITEMS: usize = 1024;

impl Decoder<'_> {
    /// Fill `value` from the stream according to its current variant
    pub(super) fn read_payload(&mut self, value: &mut Value) -> Result<()> {
        match value {
            Value::Int32(v) => *v = self.stream.read_fixed()?,
            Value::Uint64(v) => *v = self.stream.read_fixed()?,
            Value::Float64(v) => *v = self.stream.read_fixed()?,
            Value::String(s) => *s = Text::from(self.stream.read_string()?),
            Value::Blob(bytes) => {
                let len = self.stream.read_fixed::<u32>()?;
                *bytes = self.stream.read_vec(len as usize)?;
            }
            Value::Array(arr) => self.read_array(arr)?,
            Value::Struct(s) => self.read_struct(s)?,
        }
        Ok(())
    }

    /// Field count, then one fully self-describing value per field
    ///
    /// Any fields already in `s` are dropped first.
    pub(super) fn read_struct(&mut self, s: &mut Struct) -> Result<()> {
        self.enter()?;
        let count = self.read_count("struct fields")?;
        s.fields_mut().clear();
        s.fields_mut().reserve(count.min(PREALLOC_ITEMS));
        for _ in 0..count {
            let field = self.decode()?;
            s.push(field);
        }
        self.leave();
        Ok(())
    }
}
