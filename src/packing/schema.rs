//! # Schema Packing
//!
//! Ordered column layout metadata for one schema version. A `SchemaPacking`
//! is immutable after construction and shared read-only across arbitrarily
//! many concurrent `RowPacker` instances; everything the packer consults is
//! precomputed here.
//!
//! ## Internals
//!
//! - `columns`: Descriptors strictly increasing by column id (the packer's
//!   merge-scan relies on this)
//! - `prefix_len`: Offset-table width, one slot per variable-length column
//! - `skipped`: Column ids the caller may supply without error even though
//!   this packing has no slot for them (dropped columns tracked by the
//!   caller's environment)

use eyre::{ensure, Result};
use hashbrown::HashSet;

use crate::config::OFFSET_SLOT_SIZE;
use crate::packing::column::{ColumnId, ColumnPackingData};
use crate::types::DataType;

#[derive(Debug, Clone)]
pub struct SchemaPacking {
    columns: Vec<ColumnPackingData>,
    prefix_len: usize,
    skipped: HashSet<ColumnId>,
}

impl SchemaPacking {
    /// Builds a packing from ordered descriptors plus the set of column ids
    /// a caller may supply without a slot. Fails if column ids are not
    /// strictly increasing.
    pub fn new(
        columns: Vec<ColumnPackingData>,
        skipped: impl IntoIterator<Item = ColumnId>,
    ) -> Result<Self> {
        for pair in columns.windows(2) {
            ensure!(
                pair[0].id < pair[1].id,
                "column ids must be strictly increasing: {} followed by {}",
                pair[0].id,
                pair[1].id
            );
        }

        let prefix_len = OFFSET_SLOT_SIZE * columns.iter().filter(|c| c.is_varlen()).count();
        Ok(Self {
            columns,
            prefix_len,
            skipped: skipped.into_iter().collect(),
        })
    }

    /// Convenience constructor deriving descriptors from data types.
    pub fn from_data_types(
        columns: impl IntoIterator<Item = (ColumnId, DataType, bool)>,
        skipped: impl IntoIterator<Item = ColumnId>,
    ) -> Result<Self> {
        let columns = columns
            .into_iter()
            .map(|(id, data_type, nullable)| {
                ColumnPackingData::from_data_type(id, data_type, nullable)
            })
            .collect();
        Self::new(columns, skipped)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column(&self, idx: usize) -> &ColumnPackingData {
        &self.columns[idx]
    }

    pub fn columns(&self) -> &[ColumnPackingData] {
        &self.columns
    }

    /// Byte width of the reserved offset-table region.
    pub fn prefix_len(&self) -> usize {
        self.prefix_len
    }

    /// True for columns that existed in the table at some schema version but
    /// are absent from this packing (e.g. dropped columns). Supplying such a
    /// column is not an error; the packer acknowledges it and packs nothing.
    pub fn skipped_column(&self, id: ColumnId) -> bool {
        self.skipped.contains(&id)
    }
}
