// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Whole-file CT writer: header ← schema ← rows ← CRC trailer.
//!
//! The row payload is buffered before anything touches disk, because the
//! CRC trailer covers exactly that payload and must be computed before it
//! can be written (spec §4 — "CRC... computed over exactly the bytes of
//! the row section").

use std::path::Path;

use crate::codec::cursor::Sink;
use crate::codec::primitive::encode_cell;
use crate::core::Result;
use crate::format::crc::crc16_xmodem;
use crate::format::header::write_header;
use crate::format::schema::write_schema;
use crate::table::Table;

/// Encode `table` as a complete CT file and write it to `path`.
pub fn write_ct(path: impl AsRef<Path>, table: &Table) -> Result<()> {
    let bytes = write_ct_bytes(table)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

/// Encode `table` as a complete CT file in memory.
pub fn write_ct_bytes(table: &Table) -> Result<Vec<u8>> {
    let mut out = write_header(&table.header_timestamp)?;

    let mut schema_sink = Sink::new();
    write_schema(&mut schema_sink, &table.schema)?;
    out.extend_from_slice(&schema_sink.into_bytes());

    out.extend_from_slice(&(table.rows.len() as u32).to_le_bytes());

    let mut payload_sink = Sink::new();
    for row in &table.rows {
        for ((_, ty), cell) in table.schema.columns.iter().zip(row.0.iter()) {
            encode_cell(&mut payload_sink, *ty, cell)?;
        }
    }
    let payload = payload_sink.into_bytes();

    let crc = crc16_xmodem(&payload);
    out.extend_from_slice(&payload);
    out.extend_from_slice(&crc.to_le_bytes());

    Ok(out)
}
