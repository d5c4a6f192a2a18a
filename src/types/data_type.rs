//! # Data Types
//!
//! Storage-class metadata for packable cell values. The packer itself only
//! cares whether a column is fixed-width (and how wide) or variable-length;
//! `DataType` supplies that split plus the wire tag each encoded value
//! carries.
//!
//! ## Storage Classes
//!
//! | Class | Types | Packed form |
//! |-------|-------|-------------|
//! | **Fixed** | bool, int2/4/8, float4/8 | tag byte + little-endian payload |
//! | **Variable** | text, blob | tag byte + raw bytes, length via offset table |

/// Wire tag bytes for encoded values. Tag `0x00` is reserved for null.
pub mod tag {
    pub const NULL: u8 = 0x00;
    pub const BOOL: u8 = 0x01;
    pub const INT2: u8 = 0x02;
    pub const INT4: u8 = 0x03;
    pub const INT8: u8 = 0x04;
    pub const FLOAT4: u8 = 0x05;
    pub const FLOAT8: u8 = 0x06;
    pub const TEXT: u8 = 0x07;
    pub const BLOB: u8 = 0x08;
}

/// Storage type of one column's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Bool,
    Int2,
    Int4,
    Int8,
    Float4,
    Float8,
    Text,
    Blob,
}

impl DataType {
    /// Full encoded width (tag byte included) for fixed-width types, or
    /// `None` for variable-length types.
    pub fn fixed_encoded_size(self) -> Option<usize> {
        match self {
            DataType::Bool => Some(2),
            DataType::Int2 => Some(3),
            DataType::Int4 | DataType::Float4 => Some(5),
            DataType::Int8 | DataType::Float8 => Some(9),
            DataType::Text | DataType::Blob => None,
        }
    }

    /// The wire tag an encoded value of this type carries.
    pub fn wire_tag(self) -> u8 {
        match self {
            DataType::Bool => tag::BOOL,
            DataType::Int2 => tag::INT2,
            DataType::Int4 => tag::INT4,
            DataType::Int8 => tag::INT8,
            DataType::Float4 => tag::FLOAT4,
            DataType::Float8 => tag::FLOAT8,
            DataType::Text => tag::TEXT,
            DataType::Blob => tag::BLOB,
        }
    }
}
