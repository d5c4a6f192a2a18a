//! # Schema-Version Remapping
//!
//! Cross-cluster replication translates rows produced under a source
//! cluster's schema numbering into the target cluster's numbering. Only the
//! leading schema-version varint changes; the offset table and column
//! payload are version-independent and copied verbatim.

use eyre::{eyre, Result};
use hashbrown::HashMap;

use crate::config::PACKED_ROW_MARKER;
use crate::control::ControlFields;
use crate::encoding::{append_varint, decode_varint, MAX_VARINT_LEN};
use crate::packing::SchemaVersion;

/// Rewrites the schema version embedded in `value`, prepending freshly
/// encoded control fields and the row-kind marker.
///
/// `value` starts at the schema-version varint (no control fields, no
/// marker). The old version must have an entry in `schema_versions`; a
/// missing entry is an error and leaves `out` cleared rather than partially
/// written.
pub fn replace_schema_version(
    value: &[u8],
    control_fields: &ControlFields,
    schema_versions: &HashMap<SchemaVersion, SchemaVersion>,
    out: &mut Vec<u8>,
) -> Result<()> {
    out.clear();

    let (old_version, consumed) = decode_varint(value)?;
    let old_version = SchemaVersion::try_from(old_version)
        .map_err(|_| eyre!("schema version {} out of range", old_version))?;
    let mapped_version = schema_versions
        .get(&old_version)
        .ok_or_else(|| eyre!("schema version mapping for {} not found", old_version))?;

    control_fields.append_encoded(out);
    out.reserve(1 + MAX_VARINT_LEN + value.len());
    out.push(PACKED_ROW_MARKER);
    append_varint(*mapped_version as u64, out);
    out.extend_from_slice(&value[consumed..]);
    Ok(())
}
