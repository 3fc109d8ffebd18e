//! Wire type tags

/// Type tag written as the first byte of every encoded value
///
/// Ordinal 6 is reserved and has no variant; it is never written and a
/// decoder rejects it as an unknown tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TypeTag {
    Int32 = 0x00,
    Uint64 = 0x01,
    Float64 = 0x02,
    String = 0x03,
    Array = 0x04,
    Struct = 0x05,
    Blob = 0x07,
}

impl TypeTag {
    /// Number of ordinals in the tag space, reserved ones included
    pub const COUNT: usize = 8;

    pub fn from_u8(tag: u8) -> Option<Self> {
        match tag {
            0x00 => Some(TypeTag::Int32),
            0x01 => Some(TypeTag::Uint64),
            0x02 => Some(TypeTag::Float64),
            0x03 => Some(TypeTag::String),
            0x04 => Some(TypeTag::Array),
            0x05 => Some(TypeTag::Struct),
            0x07 => Some(TypeTag::Blob),
            _ => None,
        }
    }

    /// Human-readable name, used in error messages
    pub fn name(self) -> &'static str {
        match self {
            TypeTag::Int32 => "int32",
            TypeTag::Uint64 => "uint64",
            TypeTag::Float64 => "float64",
            TypeTag::String => "string",
            TypeTag::Array => "array",
            TypeTag::Struct => "struct",
            TypeTag::Blob => "blob",
        }
    }
}

/// Element type of an array, written once after the array's own tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    Int32,
    Uint64,
    Float64,
    String,
    Struct,
}

impl ElementType {
    /// The tag this element type is written as
    pub fn tag(self) -> TypeTag {
        match self {
            ElementType::Int32 => TypeTag::Int32,
            ElementType::Uint64 => TypeTag::Uint64,
            ElementType::Float64 => TypeTag::Float64,
            ElementType::String => TypeTag::String,
            ElementType::Struct => TypeTag::Struct,
        }
    }

    /// Arrays of arrays and arrays of blobs are not representable
    pub fn from_tag(tag: TypeTag) -> Option<Self> {
        match tag {
            TypeTag::Int32 => Some(ElementType::Int32),
            TypeTag::Uint64 => Some(ElementType::Uint64),
            TypeTag::Float64 => Some(ElementType::Float64),
            TypeTag::String => Some(ElementType::String),
            TypeTag::Struct => Some(ElementType::Struct),
            TypeTag::Array | TypeTag::Blob => None,
        }
    }

    pub fn from_u8(tag: u8) -> Option<Self> {
        TypeTag::from_u8(tag).and_then(Self::from_tag)
    }
}
