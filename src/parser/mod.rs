//! Decoding of tagpack values
//!
//! [`decode`] reads one type tag, asks the registry for a constructor that
//! allocates an empty value of the matching variant, then fills that value
//! in from the stream. Structs and arrays recurse back into the same path
//! for their children.

mod array;
mod registry;
mod value;

use crate::config::DecodeConfig;
use crate::error::{Error, Result};
use crate::stream::WireRead;
use crate::types::{Argument, Text};
use registry::Registry;
use std::io::Read;
use tracing::{debug, trace};

/// Decode one value from `stream` with default limits
pub fn decode<R: Read>(stream: &mut R) -> Result<Argument> {
    decode_with(stream, &DecodeConfig::default())
}

/// Decode one value from `stream` with explicit limits
pub fn decode_with<R: Read>(stream: &mut R, config: &DecodeConfig) -> Result<Argument> {
    Decoder::new(stream, *config).decode()
}

/// Decode a value that must span all of `bytes`
pub fn from_bytes(bytes: &[u8]) -> Result<Argument> {
    let mut reader = bytes;
    let arg = decode(&mut reader)?;
    if !reader.is_empty() {
        return Err(Error::TrailingBytes(reader.len()));
    }
    Ok(arg)
}

impl Argument {
    /// Read name and payload into this value
    ///
    /// The type tag (and, for arrays, the element tag) must already have
    /// been consumed; the payload is read as this value's current variant.
    /// The previous name and contents are replaced, never merged. On error
    /// the value is left as it was.
    pub fn read<R: Read>(&mut self, stream: &mut R) -> Result<()> {
        let mut fresh = Argument {
            name: Text::new(),
            value: self.value.emptied(),
        };
        Decoder::new(stream, DecodeConfig::default()).read_into(&mut fresh)?;
        *self = fresh;
        Ok(())
    }
}

/// Recursive decode state for one stream
pub(crate) struct Decoder<'a> {
    stream: &'a mut dyn Read,
    config: DecodeConfig,
    depth: usize,
}

impl<'a> Decoder<'a> {
    fn new(stream: &'a mut dyn Read, config: DecodeConfig) -> Self {
        Self {
            stream,
            config,
            depth: 0,
        }
    }

    /// Read a tag, construct the matching variant, and fill it in
    fn decode(&mut self) -> Result<Argument> {
        let tag = self.stream.read_fixed::<u8>()?;
        let construct = Registry::global().lookup(tag)?;
        let mut arg = construct(self)?;
        self.read_into(&mut arg)?;
        trace!(tag = ?arg.type_tag(), name = %arg.name(), "decoded argument");
        Ok(arg)
    }

    fn read_into(&mut self, arg: &mut Argument) -> Result<()> {
        arg.name = Text::from(self.stream.read_string()?);
        self.read_payload(&mut arg.value)
    }

    /// Read a container count, enforcing the item limit
    fn read_count(&mut self, what: &'static str) -> Result<usize> {
        let count = self.stream.read_fixed::<u64>()?;
        if !self.config.allows_items(count) {
            debug!(what, count, "rejected container count");
            return Err(Error::LimitExceeded {
                what,
                found: count,
                max: self.config.max_items,
            });
        }
        usize::try_from(count).map_err(|_| Error::LimitExceeded {
            what,
            found: count,
            max: usize::MAX as u64,
        })
    }

    /// Descend one struct level, enforcing the depth limit
    fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        if !self.config.allows_depth(self.depth) {
            debug!(depth = self.depth, "rejected nesting depth");
            return Err(Error::LimitExceeded {
                what: "depth",
                found: self.depth as u64,
                max: self.config.max_depth as u64,
            });
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }
}
