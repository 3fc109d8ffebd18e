//! tagpack - Self-describing tagged binary values
//!
//! A small wire format for named, nested, heterogeneous data: scalars,
//! homogeneous arrays, nested structs, and raw byte blobs. Every encoded
//! value carries its own type tag, so a reader can reconstruct it without
//! knowing its shape in advance.
//!
//! # Features
//!
//! - Recursive encode/decode over any `std::io::Write` / `std::io::Read`
//! - Checked typed access: asking for the wrong type is an error, never a reinterpretation
//! - Names and strings are opaque bytes, with a checked UTF-8 view
//! - Decode limits for nesting depth and container sizes, enforced on encode too
//! - Little-endian, fixed-width counts
//!
//! # Example
//!
//! ```rust
//! use tagpack::{MemoryStream, Struct, StructBuilder, decode};
//!
//! let root = StructBuilder::create()
//!     .with("a", 1i32)
//!     .add(StructBuilder::create().with("x", "hi").build("b"))
//!     .with("samples", vec![13i32, 14, 88])
//!     .build("root");
//!
//! let mut stream = MemoryStream::new();
//! root.write(&mut stream).unwrap();
//!
//! let decoded = decode(&mut stream).unwrap();
//! let fields = decoded.get::<Struct>().unwrap();
//! assert_eq!(*fields.field::<i32>("a").unwrap(), 1);
//! assert_eq!(fields.field::<Struct>("b").unwrap().field::<str>("x").unwrap(), "hi");
//! assert_eq!(fields.field::<[i32]>("samples").unwrap(), &[13, 14, 88]);
//! ```

pub mod config;
pub mod error;
pub mod parser;
pub mod stream;
pub mod types;
pub mod writer;

#[cfg(feature = "ndarray")]
pub mod ndarray_ext;

// Re-export common types at crate root
pub use config::DecodeConfig;
pub use error::{Error, Result};
pub use parser::{decode, decode_with, from_bytes};
pub use stream::{MemoryStream, WireRead, WireWrite};
pub use types::{
    Argument, Array, ElementType, Payload, Struct, StructBuilder, Text, TypeTag, Value,
};
pub use writer::{encoded_len, to_bytes};

#[cfg(feature = "ndarray")]
pub use ndarray_ext::ArrayElement;
