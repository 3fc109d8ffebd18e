//! Core types for the tagpack value model

mod argument;
mod array;
mod builder;
mod payload;
mod structure;
mod tag;
mod text;
mod value;

pub use argument::Argument;
pub use array::Array;
pub use builder::StructBuilder;
pub use payload::Payload;
pub use structure::Struct;
pub use tag::{ElementType, TypeTag};
pub use text::Text;
pub use value::Value;
