//! # Control-Fields Codec
//!
//! Row-level metadata encoded as an opaque byte prefix in front of the
//! packed-row payload: a time-to-live and a write timestamp, each optional.
//! Absent fields occupy zero bytes, so the common no-metadata row pays
//! nothing.
//!
//! ## Wire Form
//!
//! ```text
//! [CONTROL_TAG_TTL       varint ttl_millis      ]   (if present)
//! [CONTROL_TAG_TIMESTAMP varint timestamp_micros]   (if present)
//! ```
//!
//! Decoding consumes tag/varint pairs until the first byte that is not a
//! control tag, then reports how many bytes it consumed. The packed-row
//! marker is guaranteed distinct from every control tag, so a control
//! prefix followed by a packed row parses unambiguously.

use eyre::Result;
use smallvec::SmallVec;

use crate::config::{CONTROL_TAG_TIMESTAMP, CONTROL_TAG_TTL};
use crate::encoding::{append_varint, decode_varint, encode_varint, MAX_VARINT_LEN};

/// Inline capacity covering both fields at maximum varint width.
const ENCODED_CAPACITY: usize = 2 * (1 + MAX_VARINT_LEN);

/// Row-level control metadata, encoded ahead of the packed payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlFields {
    pub ttl_millis: Option<u64>,
    pub timestamp_micros: Option<u64>,
}

impl ControlFields {
    /// True if encoding would emit zero bytes.
    pub fn is_empty(&self) -> bool {
        self.ttl_millis.is_none() && self.timestamp_micros.is_none()
    }

    /// Appends the encoded form of these fields to `out`.
    pub fn append_encoded(&self, out: &mut Vec<u8>) {
        if let Some(ttl) = self.ttl_millis {
            out.push(CONTROL_TAG_TTL);
            append_varint(ttl, out);
        }
        if let Some(ts) = self.timestamp_micros {
            out.push(CONTROL_TAG_TIMESTAMP);
            append_varint(ts, out);
        }
    }

    /// Encoded form as an inline buffer.
    pub fn encoded(&self) -> SmallVec<[u8; ENCODED_CAPACITY]> {
        let mut out = SmallVec::new();
        let mut scratch = [0u8; MAX_VARINT_LEN];
        if let Some(ttl) = self.ttl_millis {
            out.push(CONTROL_TAG_TTL);
            let len = encode_varint(ttl, &mut scratch);
            out.extend_from_slice(&scratch[..len]);
        }
        if let Some(ts) = self.timestamp_micros {
            out.push(CONTROL_TAG_TIMESTAMP);
            let len = encode_varint(ts, &mut scratch);
            out.extend_from_slice(&scratch[..len]);
        }
        out
    }

    /// Decodes a control prefix from the front of `buf`, returning the
    /// fields and the bytes consumed. Stops at the first non-control tag;
    /// an empty or unrelated buffer yields default fields and zero consumed.
    pub fn decode(buf: &[u8]) -> Result<(ControlFields, usize)> {
        let mut fields = ControlFields::default();
        let mut pos = 0;
        while pos < buf.len() {
            match buf[pos] {
                CONTROL_TAG_TTL => {
                    let (value, len) = decode_varint(&buf[pos + 1..])?;
                    fields.ttl_millis = Some(value);
                    pos += 1 + len;
                }
                CONTROL_TAG_TIMESTAMP => {
                    let (value, len) = decode_varint(&buf[pos + 1..])?;
                    fields.timestamp_micros = Some(value);
                    pos += 1 + len;
                }
                _ => break,
            }
        }
        Ok((fields, pos))
    }
}
