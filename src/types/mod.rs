//! # Types Module
//!
//! The per-cell value codec consumed by the row packer:
//!
//! - `data_type`: `DataType` enum with fixed encoded widths and wire tags
//! - `value`: `Value<'a>` runtime representation with size-consistent
//!   encoding (`append_encoded` always emits exactly `encoded_size` bytes)

pub mod data_type;
pub mod value;

pub use data_type::DataType;
pub use value::Value;
