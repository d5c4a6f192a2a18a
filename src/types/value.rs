//! # Runtime Value Representation
//!
//! This module provides `Value<'a>`, the runtime representation of one cell
//! handed to the row packer. Text and blob variants use `Cow` so values can
//! borrow from callers' buffers during packing while owned data remains
//! possible.
//!
//! ## Codec Contract
//!
//! `append_encoded` always emits exactly `encoded_size` bytes. The packer
//! relies on this when checking a candidate value against the payload size
//! limit before appending, and when verifying fixed-width columns after
//! appending.
//!
//! Encoded form is a 1-byte wire tag followed by a little-endian payload.
//! Variable-length values carry no length prefix; the packed row's offset
//! table delimits them.

use std::borrow::Cow;

use crate::types::data_type::{tag, DataType};

/// One cell value, ready to be packed.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    Null,
    Bool(bool),
    Int2(i16),
    Int4(i32),
    Int8(i64),
    Float4(f32),
    Float8(f64),
    Text(Cow<'a, str>),
    Blob(Cow<'a, [u8]>),
}

impl Value<'_> {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The data type of this value, or `None` for null.
    pub fn data_type(&self) -> Option<DataType> {
        match self {
            Value::Null => None,
            Value::Bool(_) => Some(DataType::Bool),
            Value::Int2(_) => Some(DataType::Int2),
            Value::Int4(_) => Some(DataType::Int4),
            Value::Int8(_) => Some(DataType::Int8),
            Value::Float4(_) => Some(DataType::Float4),
            Value::Float8(_) => Some(DataType::Float8),
            Value::Text(_) => Some(DataType::Text),
            Value::Blob(_) => Some(DataType::Blob),
        }
    }

    /// Exact byte count `append_encoded` will emit.
    pub fn encoded_size(&self) -> usize {
        match self {
            Value::Null => 1,
            Value::Bool(_) => 2,
            Value::Int2(_) => 3,
            Value::Int4(_) | Value::Float4(_) => 5,
            Value::Int8(_) | Value::Float8(_) => 9,
            Value::Text(s) => 1 + s.len(),
            Value::Blob(b) => 1 + b.len(),
        }
    }

    /// Appends the encoded form of this value to `out`.
    pub fn append_encoded(&self, out: &mut Vec<u8>) {
        match self {
            Value::Null => out.push(tag::NULL),
            Value::Bool(v) => {
                out.push(tag::BOOL);
                out.push(u8::from(*v));
            }
            Value::Int2(v) => {
                out.push(tag::INT2);
                out.extend_from_slice(&v.to_le_bytes());
            }
            Value::Int4(v) => {
                out.push(tag::INT4);
                out.extend_from_slice(&v.to_le_bytes());
            }
            Value::Int8(v) => {
                out.push(tag::INT8);
                out.extend_from_slice(&v.to_le_bytes());
            }
            Value::Float4(v) => {
                out.push(tag::FLOAT4);
                out.extend_from_slice(&v.to_le_bytes());
            }
            Value::Float8(v) => {
                out.push(tag::FLOAT8);
                out.extend_from_slice(&v.to_le_bytes());
            }
            Value::Text(s) => {
                out.push(tag::TEXT);
                out.extend_from_slice(s.as_bytes());
            }
            Value::Blob(b) => {
                out.push(tag::BLOB);
                out.extend_from_slice(b);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_values() -> Vec<Value<'static>> {
        vec![
            Value::Null,
            Value::Bool(true),
            Value::Int2(-5),
            Value::Int4(1_000_000),
            Value::Int8(i64::MIN),
            Value::Float4(1.5),
            Value::Float8(-2.25),
            Value::Text("hello".into()),
            Value::Blob(vec![1, 2, 3, 4].into()),
        ]
    }

    #[test]
    fn append_emits_exactly_encoded_size_bytes() {
        for value in all_values() {
            let mut out = Vec::new();
            value.append_encoded(&mut out);
            assert_eq!(out.len(), value.encoded_size(), "size drift for {:?}", value);
        }
    }

    #[test]
    fn fixed_variants_match_declared_width() {
        for value in all_values() {
            if let Some(size) = value.data_type().and_then(DataType::fixed_encoded_size) {
                assert_eq!(value.encoded_size(), size, "width drift for {:?}", value);
            }
        }
    }

    #[test]
    fn only_null_is_null() {
        for value in all_values() {
            assert_eq!(value.is_null(), matches!(value, Value::Null));
        }
    }

    #[test]
    fn text_encodes_tag_then_raw_bytes() {
        let mut out = Vec::new();
        Value::Text("abc".into()).append_encoded(&mut out);
        assert_eq!(out, [tag::TEXT, b'a', b'b', b'c']);
    }

    #[test]
    fn int4_encodes_little_endian() {
        let mut out = Vec::new();
        Value::Int4(0x0102_0304).append_encoded(&mut out);
        assert_eq!(out, [tag::INT4, 0x04, 0x03, 0x02, 0x01]);
    }

    #[test]
    fn borrowed_text_is_zero_copy() {
        let owned = String::from("payload");
        let value = Value::Text(Cow::Borrowed(&owned));
        match &value {
            Value::Text(Cow::Borrowed(s)) => assert!(std::ptr::eq(*s, owned.as_str())),
            _ => unreachable!(),
        }
    }
}
