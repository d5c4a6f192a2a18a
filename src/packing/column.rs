//! # Column Packing Descriptors
//!
//! Static per-column metadata consumed by the row packer: the column's id,
//! whether it may be null, and its fixed encoded width (or `None` for
//! variable-length columns, which are delimited by the offset table
//! instead).

use std::fmt;

use crate::types::DataType;

/// Ordinal column identifier, totally ordered within a schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColumnId(pub u32);

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Packing metadata for one column. Immutable once constructed; a
/// `SchemaPacking` orders these strictly by `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnPackingData {
    pub id: ColumnId,
    /// Full encoded width for fixed-width columns; `None` means
    /// variable-length.
    pub size: Option<usize>,
    pub nullable: bool,
}

impl ColumnPackingData {
    pub fn fixed(id: ColumnId, size: usize, nullable: bool) -> Self {
        Self {
            id,
            size: Some(size),
            nullable,
        }
    }

    pub fn varlen(id: ColumnId, nullable: bool) -> Self {
        Self {
            id,
            size: None,
            nullable,
        }
    }

    /// Derives a descriptor from a column's data type.
    pub fn from_data_type(id: ColumnId, data_type: DataType, nullable: bool) -> Self {
        Self {
            id,
            size: data_type.fixed_encoded_size(),
            nullable,
        }
    }

    pub fn is_varlen(&self) -> bool {
        self.size.is_none()
    }
}

impl fmt::Display for ColumnPackingData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.size {
            Some(size) => write!(f, "column {} [fixed({})", self.id, size)?,
            None => write!(f, "column {} [varlen", self.id)?,
        }
        if self.nullable {
            write!(f, ", nullable]")
        } else {
            write!(f, "]")
        }
    }
}
