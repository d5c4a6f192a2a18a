//! # RowPacker - Single-Pass Row Encoding
//!
//! This module provides `RowPacker`, the stateful encoder that turns one
//! table row into a packed byte value. Columns are supplied one at a time in
//! ascending column-id order; the packer merge-scans them against the schema
//! packing, back-filling implicit nulls for omitted nullable columns and
//! patching the offset table in place as variable-length columns arrive.
//!
//! ## Usage
//!
//! ```ignore
//! let mut packer = RowPacker::new(version, &packing, 0, &control_fields);
//! packer.add_value(ColumnId(1), &Value::Int8(42))?;
//! packer.add_value(ColumnId(2), &Value::Text("alice".into()))?;
//! let row = packer.complete()?;
//!
//! // Reuse the buffer for the next row of the same schema version
//! packer.restart();
//! ```
//!
//! ## Size-Limit Overflow
//!
//! A variable-length value whose inclusion would push the buffer past the
//! size limit is omitted and the call returns `Ok(false)`; the offset table
//! still records the unchanged running total at that column's slot. This is
//! a normal outcome, not an error: the caller persists the oversized value
//! out-of-band. Passing a size limit of 0 selects `DEFAULT_BLOCK_SIZE`.
//!
//! ## Thread Safety
//!
//! A `RowPacker` is owned by one caller for its whole lifetime. The
//! `SchemaPacking` it borrows is immutable and freely shared across packers.

use eyre::{ensure, Result};

use crate::config::{DEFAULT_BLOCK_SIZE, OFFSET_SLOT_SIZE, PACKED_ROW_MARKER};
use crate::control::ControlFields;
use crate::encoding::{append_varint, store_u32_le, MAX_VARINT_LEN};
use crate::packing::column::{ColumnId, ColumnPackingData};
use crate::packing::schema::SchemaPacking;
use crate::packing::SchemaVersion;
use crate::types::Value;

/// The closed set of input shapes a cell value can arrive in. Every shape
/// answers `is_null`, `packed_size`, and `pack`; dispatch happens once per
/// `add_*` call.
#[derive(Debug, Clone, Copy)]
enum PackableValue<'a> {
    /// A structured value, encoded through the value codec.
    Value(&'a Value<'a>),
    /// A structured value preceded by a value-local control-fields prefix.
    Prefixed {
        control: &'a [u8],
        value: &'a Value<'a>,
    },
    /// Already-encoded bytes, appended verbatim.
    Raw(&'a [u8]),
    /// Two already-encoded spans, appended back to back.
    RawPair(&'a [u8], &'a [u8]),
}

impl PackableValue<'_> {
    fn is_null(&self) -> bool {
        match self {
            PackableValue::Value(value) => value.is_null(),
            PackableValue::Prefixed { control, value } => control.is_empty() && value.is_null(),
            PackableValue::Raw(bytes) => bytes.is_empty(),
            PackableValue::RawPair(head, tail) => head.is_empty() && tail.is_empty(),
        }
    }

    fn packed_size(&self) -> usize {
        match self {
            PackableValue::Value(value) => value.encoded_size(),
            PackableValue::Prefixed { control, value } => control.len() + value.encoded_size(),
            PackableValue::Raw(bytes) => bytes.len(),
            PackableValue::RawPair(head, tail) => head.len() + tail.len(),
        }
    }

    fn pack(&self, out: &mut Vec<u8>) {
        match self {
            PackableValue::Value(value) => value.append_encoded(out),
            PackableValue::Prefixed { control, value } => {
                out.extend_from_slice(control);
                value.append_encoded(out);
            }
            PackableValue::Raw(bytes) => out.extend_from_slice(bytes),
            PackableValue::RawPair(head, tail) => {
                out.reserve(head.len() + tail.len());
                out.extend_from_slice(head);
                out.extend_from_slice(tail);
            }
        }
    }
}

/// Stateful encoder producing one packed row. Created fresh per row, or
/// reused across rows of the same schema version via [`RowPacker::restart`].
pub struct RowPacker<'p> {
    packing: &'p SchemaPacking,
    size_limit: usize,
    result: Vec<u8>,
    idx: usize,
    prefix_end: usize,
    varlen_write_pos: usize,
}

impl<'p> RowPacker<'p> {
    /// Binds a schema version and packing, encoding `control_fields` as the
    /// row prefix. `size_limit` of 0 selects [`DEFAULT_BLOCK_SIZE`].
    pub fn new(
        version: SchemaVersion,
        packing: &'p SchemaPacking,
        size_limit: usize,
        control_fields: &ControlFields,
    ) -> Self {
        let mut packer = Self::empty(packing, size_limit);
        control_fields.append_encoded(&mut packer.result);
        packer.init(version);
        packer
    }

    /// Like [`RowPacker::new`], but with a pre-encoded control prefix
    /// appended verbatim.
    pub fn with_encoded_control(
        version: SchemaVersion,
        packing: &'p SchemaPacking,
        size_limit: usize,
        control_fields: &[u8],
    ) -> Self {
        let mut packer = Self::empty(packing, size_limit);
        packer.result.extend_from_slice(control_fields);
        packer.init(version);
        packer
    }

    fn empty(packing: &'p SchemaPacking, size_limit: usize) -> Self {
        Self {
            packing,
            size_limit: if size_limit == 0 {
                DEFAULT_BLOCK_SIZE
            } else {
                size_limit
            },
            result: Vec::new(),
            idx: 0,
            prefix_end: 0,
            varlen_write_pos: 0,
        }
    }

    fn init(&mut self, version: SchemaVersion) {
        let prefix_len = self.packing.prefix_len();
        self.result.reserve(1 + MAX_VARINT_LEN + prefix_len);
        self.result.push(PACKED_ROW_MARKER);
        append_varint(version as u64, &mut self.result);
        // Zero-fill the offset table; slots are patched as varlen columns
        // arrive.
        self.result.resize(self.result.len() + prefix_len, 0);
        self.prefix_end = self.result.len();
        self.varlen_write_pos = self.prefix_end - prefix_len;
    }

    /// True once every schema column has been consumed.
    pub fn finished(&self) -> bool {
        self.idx == self.packing.column_count()
    }

    /// Truncates back to the reserved header, ready to pack the next row of
    /// the same schema version without reallocating.
    pub fn restart(&mut self) {
        self.idx = 0;
        self.varlen_write_pos = self.prefix_end - self.packing.prefix_len();
        self.result.truncate(self.prefix_end);
    }

    /// Packs a structured value for `column_id`.
    pub fn add_value(&mut self, column_id: ColumnId, value: &Value<'_>) -> Result<bool> {
        self.do_add(column_id, PackableValue::Value(value), 0)
    }

    /// Packs a structured value preceded by a value-local control prefix.
    pub fn add_value_with_control(
        &mut self,
        column_id: ColumnId,
        control_fields: &[u8],
        value: &Value<'_>,
    ) -> Result<bool> {
        self.do_add(
            column_id,
            PackableValue::Prefixed {
                control: control_fields,
                value,
            },
            0,
        )
    }

    /// Packs already-encoded bytes. `tail_size` is the signed count of
    /// further bytes the caller knows will follow (or be dropped), counted
    /// against the size limit now.
    pub fn add_raw(&mut self, column_id: ColumnId, value: &[u8], tail_size: i64) -> Result<bool> {
        self.do_add(column_id, PackableValue::Raw(value), tail_size)
    }

    /// Packs two already-encoded spans back to back.
    pub fn add_raw_pair(
        &mut self,
        column_id: ColumnId,
        head: &[u8],
        tail: &[u8],
        tail_size: i64,
    ) -> Result<bool> {
        self.do_add(column_id, PackableValue::RawPair(head, tail), tail_size)
    }

    /// Merge-scan core shared by every `add_*` shape. One call may consume
    /// several schema columns: descriptors with smaller ids than the
    /// caller's are back-filled as implicit nulls.
    fn do_add(
        &mut self,
        column_id: ColumnId,
        value: PackableValue<'_>,
        tail_size: i64,
    ) -> Result<bool> {
        let mut result = true;
        loop {
            // Entering with every descriptor consumed, or exhausting them
            // while back-filling nullable gaps, is only legal for a column
            // this packing deliberately skips.
            if self.idx >= self.packing.column_count() {
                ensure!(
                    self.packing.skipped_column(column_id),
                    "adding extra column {}, while already have {} of {} columns",
                    column_id,
                    self.idx,
                    self.packing.column_count()
                );
                return Ok(false);
            }

            let column_data = *self.packing.column(self.idx);
            if column_data.id > column_id {
                ensure!(
                    self.packing.skipped_column(column_id),
                    "adding unexpected column {}, while {} is expected",
                    column_id,
                    column_data.id
                );
                return Ok(false);
            }

            self.idx += 1;
            let prev_size = self.result.len();
            if column_data.id < column_id {
                ensure!(
                    column_data.nullable,
                    "missing value for non nullable {}, while adding column {}",
                    column_data,
                    column_id
                );
            } else if !column_data.nullable || !value.is_null() {
                if column_data.is_varlen()
                    && (prev_size + value.packed_size()) as i64 + tail_size
                        > self.size_limit as i64
                {
                    result = false;
                } else {
                    value.pack(&mut self.result);
                }
            }

            match column_data.size {
                None => {
                    let offset = (self.result.len() - self.prefix_end) as u32;
                    store_u32_le(&mut self.result, self.varlen_write_pos, offset);
                    self.varlen_write_pos += OFFSET_SLOT_SIZE;
                }
                Some(declared) => {
                    ensure!(
                        prev_size + declared == self.result.len(),
                        "wrong encoded size: {} for {}, value: {:?}",
                        self.result.len() - prev_size,
                        column_data,
                        value
                    );
                }
            }

            if column_data.id == column_id {
                break;
            }
        }

        Ok(result)
    }

    /// Null-fills every remaining column and returns the packed row.
    ///
    /// A concurrent schema alteration can add columns the caller never saw;
    /// those must be nullable or this fails. The returned slice borrows the
    /// internal buffer and is valid until the packer is mutated or dropped.
    pub fn complete(&mut self) -> Result<&[u8]> {
        while self.idx < self.packing.column_count() {
            let column_data = *self.packing.column(self.idx);
            ensure!(
                column_data.nullable,
                "non nullable {} was not specified",
                column_data
            );
            self.add_raw(column_data.id, &[], 0)?;
        }
        ensure!(
            self.varlen_write_pos == self.prefix_end,
            "offset table not fully populated: write position {} != prefix end {}",
            self.varlen_write_pos,
            self.prefix_end
        );
        Ok(&self.result)
    }

    /// The column id the packer expects next, or `None` once finished.
    pub fn next_column_id(&self) -> Option<ColumnId> {
        (self.idx < self.packing.column_count()).then(|| self.packing.column(self.idx).id)
    }

    /// Descriptor of the next expected column; fails once every column has
    /// been packed.
    pub fn next_column_data(&self) -> Result<&ColumnPackingData> {
        ensure!(
            self.idx < self.packing.column_count(),
            "all columns already packed"
        );
        Ok(self.packing.column(self.idx))
    }
}
