//! Tag-to-constructor registry used by the decoder
//!
//! Built once on first use and immutable afterwards.

use super::Decoder;
use crate::error::{Error, Result};
use crate::stream::WireRead;
use crate::types::{Argument, Array, ElementType, Text, TypeTag, Value};
use std::sync::LazyLock;
use tracing::debug;

/// Allocates an empty value for a tag that has just been read
///
/// The array constructor consumes the element tag that follows the outer tag.
pub(crate) type Constructor = fn(&mut Decoder<'_>) -> Result<Argument>;

static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::standard);

pub(crate) struct Registry {
    constructors: [Option<Constructor>; TypeTag::COUNT],
}

impl Registry {
    fn standard() -> Self {
        let mut registry = Registry {
            constructors: [None; TypeTag::COUNT],
        };
        registry.register(TypeTag::Int32, |_| Ok(empty(TypeTag::Int32)));
        registry.register(TypeTag::Uint64, |_| Ok(empty(TypeTag::Uint64)));
        registry.register(TypeTag::Float64, |_| Ok(empty(TypeTag::Float64)));
        registry.register(TypeTag::String, |_| Ok(empty(TypeTag::String)));
        registry.register(TypeTag::Struct, |_| Ok(empty(TypeTag::Struct)));
        registry.register(TypeTag::Blob, |_| Ok(empty(TypeTag::Blob)));
        registry.register(TypeTag::Array, construct_array);
        registry
    }

    fn register(&mut self, tag: TypeTag, constructor: Constructor) {
        self.constructors[tag as usize] = Some(constructor);
    }

    pub(crate) fn global() -> &'static Registry {
        &REGISTRY
    }

    pub(crate) fn lookup(&self, tag: u8) -> Result<Constructor> {
        self.constructors
            .get(tag as usize)
            .copied()
            .flatten()
            .ok_or_else(|| {
                debug!(tag, "no constructor registered for tag");
                Error::UnknownTypeTag(tag)
            })
    }
}

fn empty(tag: TypeTag) -> Argument {
    Argument::new(Text::new(), Value::empty(tag))
}

fn construct_array(decoder: &mut Decoder<'_>) -> Result<Argument> {
    let raw = decoder.stream.read_fixed::<u8>()?;
    let element_type = ElementType::from_u8(raw).ok_or_else(|| {
        debug!(tag = raw, "rejected array element type");
        Error::UnsupportedElementType(raw)
    })?;
    Ok(Argument::new(Text::new(), Array::empty(element_type)))
}
