//! # Row Packing with O(1) Column Slicing
//!
//! This module is the heart of rowpack: it encodes one table row into a
//! single byte value whose variable-length columns can be sliced in O(1)
//! via an offset table, and rewrites the schema-version tag of an
//! already-packed row during cross-cluster replication.
//!
//! ## Packing Protocol
//!
//! A `RowPacker` is bound to one schema version and one `SchemaPacking`.
//! Columns arrive one at a time in ascending column-id order; omitted
//! nullable columns are back-filled as implicit nulls, and `complete`
//! null-fills any trailing gap before handing back the finished bytes.
//!
//! ## Module Structure
//!
//! - `column`: `ColumnId` and per-column packing descriptors
//! - `schema`: `SchemaPacking` layout metadata plus the skipped-column policy
//! - `packer`: `RowPacker`, the stateful single-pass encoder
//! - `remap`: schema-version rewrite for replicated rows

pub mod column;
pub mod packer;
pub mod remap;
pub mod schema;


pub use column::{ColumnId, ColumnPackingData};
pub use packer::RowPacker;
pub use remap::replace_schema_version;
pub use schema::SchemaPacking;

/// Ordinal schema version, as embedded in the packed-row header.
pub type SchemaVersion = u32;
