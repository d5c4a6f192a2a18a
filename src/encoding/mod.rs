//! # Encoding Module
//!
//! Primitive codecs for the packed-row layout:
//!
//! - **Varint encoding**: Variable-length integer encoding for the schema
//!   version and control-field values
//! - **Little-endian slot access**: Bounds-checked in-place overwrite and
//!   read of 4-byte offset-table slots inside an already-grown buffer

use eyre::{ensure, Result};

pub mod varint;

pub use varint::{append_varint, decode_varint, encode_varint, varint_len, MAX_VARINT_LEN};

/// Overwrites the 4 bytes at `pos` with `value` in little-endian order.
///
/// The packer grows the offset-table region up front and patches slots as
/// variable-length columns arrive, so `pos + 4` must already be within the
/// buffer.
pub fn store_u32_le(buf: &mut [u8], pos: usize, value: u32) {
    buf[pos..pos + 4].copy_from_slice(&value.to_le_bytes());
}

/// Reads the little-endian u32 at `pos`, failing if the buffer is too short.
pub fn read_u32_le(buf: &[u8], pos: usize) -> Result<u32> {
    ensure!(
        pos + 4 <= buf.len(),
        "buffer too short for u32 at offset {}: len {}",
        pos,
        buf.len()
    );
    let bytes: [u8; 4] = buf[pos..pos + 4].try_into().expect("length checked above");
    Ok(u32::from_le_bytes(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_then_read_roundtrips() {
        let mut buf = vec![0u8; 12];
        store_u32_le(&mut buf, 4, 0xDEAD_BEEF);
        assert_eq!(read_u32_le(&buf, 4).unwrap(), 0xDEAD_BEEF);
        assert_eq!(&buf[..4], &[0, 0, 0, 0]);
        assert_eq!(&buf[8..], &[0, 0, 0, 0]);
    }

    #[test]
    fn read_past_end_fails() {
        let buf = vec![0u8; 6];
        let err = read_u32_le(&buf, 4).unwrap_err();
        assert!(err.to_string().contains("too short"));
    }
}
