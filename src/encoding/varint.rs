//! # Variable-Length Integer Encoding
//!
//! Unsigned varint codec used for the schema-version tag and control-field
//! values. The encoding is a prefix-marker scheme optimized for small
//! values, with a fixed maximum width of [`MAX_VARINT_LEN`] bytes that the
//! packer uses for buffer pre-reservation.
//!
//! ## Encoding Format
//!
//! | Value Range              | Bytes | Leading byte |
//! |--------------------------|-------|--------------|
//! | 0 - 240                  | 1     | value itself |
//! | 241 - 2287               | 2     | 241-248      |
//! | 2288 - 67823             | 3     | 249          |
//! | 67824 - 2^24-1           | 4     | 250          |
//! | 2^24 - 2^32-1            | 5     | 251          |
//! | 2^32 - u64::MAX          | 9     | 255          |
//!
//! Markers 252-254 are reserved; decoding them is an error. Multi-byte
//! payloads are big-endian.
//!
//! All functions are pure, allocation-free, and thread-safe. `decode_varint`
//! returns `eyre::Result` with a distinct message per failure: empty buffer,
//! truncated encoding, or invalid marker.

use eyre::{bail, ensure, Result};

/// Maximum encoded width of a varint, used to reserve header space before
/// the value is known.
pub const MAX_VARINT_LEN: usize = 9;

/// Returns the encoded width of `value` without encoding it.
pub fn varint_len(value: u64) -> usize {
    match value {
        0..=240 => 1,
        241..=2287 => 2,
        2288..=67823 => 3,
        67824..=0xFF_FFFF => 4,
        0x100_0000..=0xFFFF_FFFF => 5,
        _ => 9,
    }
}

/// Encodes `value` into the front of `buf`, returning the bytes written.
/// `buf` must hold at least `varint_len(value)` bytes.
pub fn encode_varint(value: u64, buf: &mut [u8]) -> usize {
    match value {
        0..=240 => {
            buf[0] = value as u8;
            1
        }
        241..=2287 => {
            let v = value - 240;
            buf[0] = ((v >> 8) + 241) as u8;
            buf[1] = (v & 0xFF) as u8;
            2
        }
        2288..=67823 => {
            let v = value - 2288;
            buf[0] = 249;
            buf[1] = (v >> 8) as u8;
            buf[2] = (v & 0xFF) as u8;
            3
        }
        67824..=0xFF_FFFF => {
            buf[0] = 250;
            buf[1..4].copy_from_slice(&value.to_be_bytes()[5..8]);
            4
        }
        0x100_0000..=0xFFFF_FFFF => {
            buf[0] = 251;
            buf[1..5].copy_from_slice(&(value as u32).to_be_bytes());
            5
        }
        _ => {
            buf[0] = 255;
            buf[1..9].copy_from_slice(&value.to_be_bytes());
            9
        }
    }
}

/// Appends the varint encoding of `value` to `out`.
pub fn append_varint(value: u64, out: &mut Vec<u8>) {
    let mut scratch = [0u8; MAX_VARINT_LEN];
    let len = encode_varint(value, &mut scratch);
    out.extend_from_slice(&scratch[..len]);
}

/// Decodes a varint from the front of `buf`, returning the value and the
/// bytes consumed.
pub fn decode_varint(buf: &[u8]) -> Result<(u64, usize)> {
    ensure!(!buf.is_empty(), "empty buffer for varint decode");

    let first = buf[0];
    match first {
        0..=240 => Ok((first as u64, 1)),
        241..=248 => {
            ensure!(buf.len() >= 2, "truncated 2-byte varint");
            Ok((240 + ((first as u64 - 241) << 8) + buf[1] as u64, 2))
        }
        249 => {
            ensure!(buf.len() >= 3, "truncated 3-byte varint");
            Ok((2288 + ((buf[1] as u64) << 8) + buf[2] as u64, 3))
        }
        250 => {
            ensure!(buf.len() >= 4, "truncated 4-byte varint");
            let value = ((buf[1] as u64) << 16) | ((buf[2] as u64) << 8) | buf[3] as u64;
            Ok((value, 4))
        }
        251 => {
            ensure!(buf.len() >= 5, "truncated 5-byte varint");
            let bytes: [u8; 4] = buf[1..5].try_into().expect("length checked above");
            Ok((u32::from_be_bytes(bytes) as u64, 5))
        }
        255 => {
            ensure!(buf.len() >= 9, "truncated 9-byte varint");
            let bytes: [u8; 8] = buf[1..9].try_into().expect("length checked above");
            Ok((u64::from_be_bytes(bytes), 9))
        }
        _ => bail!("invalid varint marker: {}", first),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_boundary_values() {
        let boundaries = [
            0u64,
            1,
            240,
            241,
            2287,
            2288,
            67823,
            67824,
            0xFF_FFFF,
            0x100_0000,
            0xFFFF_FFFF,
            0x1_0000_0000,
            u64::MAX,
        ];

        for &value in &boundaries {
            let mut buf = [0u8; MAX_VARINT_LEN];
            let encoded_len = encode_varint(value, &mut buf);
            assert_eq!(varint_len(value), encoded_len, "len mismatch for {}", value);

            let (decoded, decoded_len) = decode_varint(&buf).unwrap();
            assert_eq!(value, decoded, "value mismatch for {}", value);
            assert_eq!(encoded_len, decoded_len, "consumed mismatch for {}", value);
        }
    }

    #[test]
    fn append_matches_encode() {
        for &value in &[0u64, 200, 1000, 70_000, 5_000_000, u64::MAX] {
            let mut buf = [0u8; MAX_VARINT_LEN];
            let len = encode_varint(value, &mut buf);

            let mut out = vec![0xAB];
            append_varint(value, &mut out);
            assert_eq!(&out[1..], &buf[..len]);
        }
    }

    #[test]
    fn decode_empty_buffer_fails() {
        assert!(decode_varint(&[]).is_err());
    }

    #[test]
    fn decode_truncated_encodings_fail() {
        assert!(decode_varint(&[241]).is_err());
        assert!(decode_varint(&[249, 0]).is_err());
        assert!(decode_varint(&[250, 0, 0]).is_err());
        assert!(decode_varint(&[251, 0, 0, 0]).is_err());
        assert!(decode_varint(&[255, 0, 0, 0, 0, 0, 0, 0]).is_err());
    }

    #[test]
    fn decode_reserved_markers_fail() {
        for marker in 252u8..=254 {
            let err = decode_varint(&[marker, 0, 0, 0, 0]).unwrap_err();
            assert!(err.to_string().contains("invalid varint marker"));
        }
    }

    #[test]
    fn small_values_encode_in_one_byte() {
        let mut buf = [0u8; MAX_VARINT_LEN];
        assert_eq!(encode_varint(0, &mut buf), 1);
        assert_eq!(buf[0], 0);
        assert_eq!(encode_varint(240, &mut buf), 1);
        assert_eq!(buf[0], 240);
    }
}
