//! Array payload decoding

use super::Decoder;
use super::value::PREALLOC_ITEMS;
use crate::error::Result;
use crate::stream::{Fixed, WireRead};
use crate::types::{Array, Struct, Text};

impl Decoder<'_> {
    /// Count, then elements of the array's element type with no per-element tag
    ///
    /// Arrays add no depth of their own; struct elements count one level
    /// below the enclosing struct. Existing elements are dropped first.
    pub(super) fn read_array(&mut self, arr: &mut Array) -> Result<()> {
        let count = self.read_count("array elements")?;
        match arr {
            Array::Int32(items) => self.read_fixed_elements(items, count)?,
            Array::Uint64(items) => self.read_fixed_elements(items, count)?,
            Array::Float64(items) => self.read_fixed_elements(items, count)?,
            Array::String(items) => {
                items.clear();
                items.reserve(count.min(PREALLOC_ITEMS));
                for _ in 0..count {
                    items.push(Text::from(self.stream.read_string()?));
                }
            }
            Array::Struct(items) => {
                items.clear();
                items.reserve(count.min(PREALLOC_ITEMS));
                for _ in 0..count {
                    let mut element = Struct::new();
                    self.read_struct(&mut element)?;
                    items.push(element);
                }
            }
        }
        Ok(())
    }

    fn read_fixed_elements<T: Fixed>(&mut self, items: &mut Vec<T>, count: usize) -> Result<()> {
        items.clear();
        items.reserve(count.min(PREALLOC_ITEMS));
        for _ in 0..count {
            items.push(self.stream.read_fixed()?);
        }
        Ok(())
    }
}
