//! # rowpack Configuration Constants
//!
//! Wire-format and sizing constants for the packed-row layout. Every value
//! here is part of the on-disk representation or derives a buffer
//! reservation from one; changing any marker or width is a breaking
//! storage-format change.
//!
//! ## Dependency Graph
//!
//! ```text
//! PACKED_ROW_MARKER
//!       │
//!       └─> Must stay distinct from every control-field tag, or decoding
//!           a control prefix would run past the marker into the header.
//!
//! OFFSET_SLOT_SIZE (4 bytes)
//!       │
//!       ├─> SchemaPacking::prefix_len (derived: slots × varlen columns)
//!       │
//!       └─> Caps a single row's payload at u32::MAX bytes; the default
//!           size limit below keeps real rows far under that.
//!
//! DEFAULT_BLOCK_SIZE (32 KiB)
//!       │
//!       └─> Applied when RowPacker is constructed with size limit 0.
//!           Oversized variable-length values are omitted inline and the
//!           caller persists them out-of-band.
//! ```

/// Row-kind marker byte written between the control-fields prefix and the
/// schema-version varint. Readers dispatch on this byte to recognize a
/// packed row.
pub const PACKED_ROW_MARKER: u8 = b'P';

/// Width of one offset-table slot: a little-endian u32 holding the
/// cumulative payload length through that variable-length column.
pub const OFFSET_SLOT_SIZE: usize = 4;

/// Default payload size limit, used when a packer is constructed with a
/// limit of 0. Matches the storage engine's block size so a packed row
/// fits one block in the common case.
pub const DEFAULT_BLOCK_SIZE: usize = 32 * 1024;

/// Control-field tag byte for a time-to-live, followed by the TTL in
/// milliseconds as a varint.
pub const CONTROL_TAG_TTL: u8 = b't';

/// Control-field tag byte for a write timestamp, followed by the timestamp
/// in microseconds as a varint.
pub const CONTROL_TAG_TIMESTAMP: u8 = b'w';

// The control decoder stops at the first unrecognized tag, so the marker
// must never collide with a control tag.
const _: () = assert!(PACKED_ROW_MARKER != CONTROL_TAG_TTL);
const _: () = assert!(PACKED_ROW_MARKER != CONTROL_TAG_TIMESTAMP);
const _: () = assert!(CONTROL_TAG_TTL != CONTROL_TAG_TIMESTAMP);
