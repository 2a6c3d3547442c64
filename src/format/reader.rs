// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Whole-file CT reader: header → schema → rows → CRC trailer.
//!
//! CT files are read whole into memory (spec §5 — no streaming cursor is
//! exposed, and Non-goals rule out partial/random access), so this is a
//! straight-line orchestration rather than a multi-phase discovery/
//! processing split like the teacher's chunk-indexed formats.

use std::path::Path;

use crate::codec::cursor::Cursor;
use crate::codec::primitive::decode_cell;
use crate::core::Result;
use crate::format::crc::crc16_xmodem;
use crate::format::header::{read_header, HEADER_SIZE};
use crate::format::schema::read_schema;
use crate::format::CtWarning;
use crate::table::{Row, Table};

/// The result of reading a CT file: the decoded table plus any non-fatal
/// warnings observed along the way.
pub struct CtReadOutcome {
    /// The decoded table.
    pub table: Table,
    /// Non-fatal warnings (timestamp fallback, schema count mismatch, CRC
    /// mismatch). Never causes `table` to be withheld.
    pub warnings: Vec<CtWarning>,
}

/// Read and fully decode a CT file from `path`.
pub fn read_ct(path: impl AsRef<Path>) -> Result<CtReadOutcome> {
    let bytes = std::fs::read(path)?;
    read_ct_bytes(&bytes)
}

/// Read and fully decode a CT file already loaded into memory.
pub fn read_ct_bytes(data: &[u8]) -> Result<CtReadOutcome> {
    let header = read_header(data)?;
    let mut warnings = Vec::new();
    if header.used_fallback {
        warnings.push(CtWarning::TimestampFallback);
    }

    let body = &data[HEADER_SIZE..];
    let mut cursor = Cursor::new(body);

    let read_schema_result = read_schema(&mut cursor)?;
    if let Some(mismatch) = read_schema_result.mismatch {
        tracing::warn!(
            context = "schema_count_mismatch",
            columns = mismatch.columns,
            types = mismatch.types,
            "CT column count and type count disagree; using type count"
        );
        warnings.push(CtWarning::SchemaCountMismatch {
            columns: mismatch.columns,
            types: mismatch.types,
        });
    }
    let schema = read_schema_result.schema;

    let row_count = cursor.read_u32_le()?;
    let payload_start = cursor.position();

    let mut rows = Vec::with_capacity(row_count as usize);
    for _ in 0..row_count {
        let mut cells = Vec::with_capacity(schema.len());
        for (_, ty) in &schema.columns {
            cells.push(decode_cell(&mut cursor, *ty)?);
        }
        rows.push(Row(cells));
    }

    let payload_end = cursor.position();
    let payload = &body[payload_start..payload_end];
    let computed_crc = crc16_xmodem(payload);
    let stored_crc = cursor.read_u16_le()?;

    if computed_crc != stored_crc {
        tracing::warn!(
            context = "crc_mismatch",
            expected = stored_crc,
            computed = computed_crc,
            "CT trailer CRC disagrees with the computed row-payload CRC"
        );
        warnings.push(CtWarning::CrcMismatch {
            expected: stored_crc,
            computed: computed_crc,
        });
    }

    Ok(CtReadOutcome {
        table: Table::new(schema, rows, header.timestamp),
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Cell, TypeTag};
    use crate::format::writer::write_ct_bytes;
    use crate::table::Schema;

    #[test]
    fn s1_zero_rows_trailer_is_zero() {
        let schema = Schema::new(vec![
            ("id".to_string(), TypeTag::Int),
            ("name".to_string(), TypeTag::String),
        ]);
        let table = Table::new(schema, vec![], "2014-10-06 12:28:25".to_string());
        let bytes = write_ct_bytes(&table).unwrap();

        assert_eq!(&bytes[bytes.len() - 2..], &[0x00, 0x00]);

        let outcome = read_ct_bytes(&bytes).unwrap();
        assert!(outcome.warnings.is_empty());
        assert_eq!(outcome.table, table);
    }

    #[test]
    fn s2_one_row_payload_matches_spec() {
        let schema = Schema::new(vec![
            ("id".to_string(), TypeTag::Int),
            ("name".to_string(), TypeTag::String),
        ]);
        let rows = vec![Row(vec![Cell::I64(7), Cell::Str("hi".to_string())])];
        let table = Table::new(schema, rows, "2014-10-06 12:28:25".to_string());
        let bytes = write_ct_bytes(&table).unwrap();

        let trailer = &bytes[bytes.len() - 2..];
        let expected_crc = crc16_xmodem(&[
            0x07, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x68, 0x00, 0x69, 0x00,
        ]);
        assert_eq!(trailer, &expected_crc.to_le_bytes());
    }

    #[test]
    fn s5_corrupted_trailer_yields_warning_and_rows() {
        let schema = Schema::new(vec![("id".to_string(), TypeTag::Int)]);
        let rows = vec![Row(vec![Cell::I64(1)])];
        let table = Table::new(schema, rows, "2014-10-06 12:28:25".to_string());
        let mut bytes = write_ct_bytes(&table).unwrap();

        let last = bytes.len() - 1;
        bytes[last] ^= 0xFF;

        let outcome = read_ct_bytes(&bytes).unwrap();
        assert_eq!(outcome.table.rows.len(), 1);
        assert!(outcome
            .warnings
            .iter()
            .any(|w| matches!(w, CtWarning::CrcMismatch { .. })));
    }

    #[test]
    fn zero_columns_and_zero_rows_round_trips() {
        let table = Table::new(
            Schema::new(vec![]),
            vec![],
            "2014-10-06 12:28:25".to_string(),
        );
        let bytes = write_ct_bytes(&table).unwrap();
        let outcome = read_ct_bytes(&bytes).unwrap();
        assert_eq!(outcome.table, table);
    }
}
