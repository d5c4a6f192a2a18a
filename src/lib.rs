//! # rowpack - Packed-Row Encoding for Embedded Table Storage
//!
//! rowpack encodes one table row into a single compact byte value suitable
//! for storage in a key-value engine, and can rewrite the schema-version tag
//! of an already-packed row without re-encoding its payload. This Rust
//! implementation prioritizes:
//!
//! - **Single-pass encoding**: Columns stream into one growing buffer, with
//!   the offset table patched in place as variable-length columns arrive
//! - **Zero allocation across rows**: `RowPacker::restart` reuses the buffer
//!   for successive rows of the same schema version
//! - **O(1) column slicing**: Readers recover any variable-length column's
//!   byte span from two adjacent offset-table slots
//!
//! ## Quick Start
//!
//! ```
//! use rowpack::control::ControlFields;
//! use rowpack::packing::{ColumnId, ColumnPackingData, RowPacker, SchemaPacking};
//! use rowpack::types::Value;
//!
//! # fn main() -> eyre::Result<()> {
//! let packing = SchemaPacking::new(
//!     vec![
//!         ColumnPackingData::fixed(ColumnId(1), 9, false),
//!         ColumnPackingData::varlen(ColumnId(2), true),
//!     ],
//!     [],
//! )?;
//!
//! let mut packer = RowPacker::new(7, &packing, 0, &ControlFields::default());
//! packer.add_value(ColumnId(1), &Value::Int8(42))?;
//! packer.add_value(ColumnId(2), &Value::Text("alice".into()))?;
//! let row = packer.complete()?;
//! # let _ = row;
//! # Ok(())
//! # }
//! ```
//!
//! ## Packed-Row Binary Layout
//!
//! ```text
//! +----------------+----------+----------------+----------------+----------------+
//! | Control Fields | Marker   | Schema Version | Offset Table   | Column Payload |
//! | (0..n bytes)   | (1 byte) | (varint)       | [u32-LE; M]    | [u8; ...]      |
//! +----------------+----------+----------------+----------------+----------------+
//! ```
//!
//! | Component | Description |
//! |-----------|-------------|
//! | **Control Fields** | Optional row-level metadata prefix (TTL, write timestamp) |
//! | **Marker** | `PACKED_ROW_MARKER` row-kind byte |
//! | **Schema Version** | Varint; rewritable in place by the schema-version remapper |
//! | **Offset Table** | One cumulative end offset per variable-length column |
//! | **Column Payload** | Fixed-width values at schema-implied positions, then variable bytes |
//!
//! Offsets are relative to the end of the offset table and inclusive of the
//! column they describe. Fixed-width columns occupy exactly their declared
//! size and have no offset slot. A null column occupies zero payload bytes.
//!
//! ## Module Overview
//!
//! - [`config`]: Wire-format and sizing constants
//! - [`encoding`]: Varint codec and little-endian slot access
//! - [`control`]: Control-fields prefix codec
//! - [`types`]: `DataType` and the per-cell value codec
//! - [`packing`]: `SchemaPacking`, `RowPacker`, and the schema-version remapper

pub mod config;
pub mod control;
pub mod encoding;
pub mod packing;
pub mod types;

pub use control::ControlFields;
pub use packing::{
    replace_schema_version, ColumnId, ColumnPackingData, RowPacker, SchemaPacking, SchemaVersion,
};
pub use types::{DataType, Value};
