// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! End-to-end CT read/write round trips covering the spec's concrete
//! scenarios (S1, S2, S4, S5) against the public API.

use tablecodec::core::{Cell, TypeTag};
use tablecodec::format::{read_ct_bytes, write_ct_bytes, CtWarning};
use tablecodec::table::{Row, Schema, Table};

fn id_name_schema() -> Schema {
    Schema::new(vec![
        ("id".to_string(), TypeTag::Int),
        ("name".to_string(), TypeTag::String),
    ])
}

#[test]
fn s1_zero_row_table_round_trips_with_empty_trailer() {
    let table = Table::new(id_name_schema(), vec![], "2014-10-06 12:28:25".to_string());
    let bytes = write_ct_bytes(&table).unwrap();
    assert_eq!(
        &bytes[..14],
        &[0x52, 0x00, 0x4F, 0x00, 0x32, 0x00, 0x53, 0x00, 0x45, 0x00, 0x43, 0x00, 0x21, 0x00]
    );
    assert_eq!(&bytes[bytes.len() - 2..], &[0x00, 0x00]);

    let outcome = read_ct_bytes(&bytes).unwrap();
    assert_eq!(outcome.table, table);
    assert!(outcome.warnings.is_empty());
}

#[test]
fn s2_one_row_round_trips() {
    let rows = vec![Row(vec![Cell::I64(7), Cell::Str("hi".to_string())])];
    let table = Table::new(id_name_schema(), rows, "2014-10-06 12:28:25".to_string());
    let bytes = write_ct_bytes(&table).unwrap();

    let outcome = read_ct_bytes(&bytes).unwrap();
    assert_eq!(outcome.table, table);
    assert!(outcome.warnings.is_empty());
}

#[test]
fn s4_header_zero_filled_after_magic_yields_fallback_warning_but_correct_rows() {
    let rows = vec![Row(vec![Cell::I64(1), Cell::Str("x".to_string())])];
    let table = Table::new(
        id_name_schema(),
        rows.clone(),
        "2014-10-06 12:28:25".to_string(),
    );
    let mut bytes = write_ct_bytes(&table).unwrap();

    for byte in bytes.iter_mut().take(64).skip(16) {
        *byte = 0;
    }

    let outcome = read_ct_bytes(&bytes).unwrap();
    assert_eq!(outcome.table.schema, table.schema);
    assert_eq!(outcome.table.rows, rows);
    assert_eq!(outcome.table.header_timestamp, "2014-10-06 12:28:25");
    assert!(outcome
        .warnings
        .iter()
        .any(|w| matches!(w, CtWarning::TimestampFallback)));
}

#[test]
fn s5_corrupted_trailer_still_yields_rows_and_crc_warning() {
    let rows = vec![Row(vec![Cell::I64(1), Cell::Str("x".to_string())])];
    let table = Table::new(
        id_name_schema(),
        rows.clone(),
        "2014-10-06 12:28:25".to_string(),
    );
    let mut bytes = write_ct_bytes(&table).unwrap();

    let last = bytes.len() - 1;
    bytes[last] ^= 0xFF;

    let outcome = read_ct_bytes(&bytes).unwrap();
    assert_eq!(outcome.table.rows, rows);
    assert!(outcome
        .warnings
        .iter()
        .any(|w| matches!(w, CtWarning::CrcMismatch { .. })));
}

#[test]
fn schema_count_mismatch_is_reported_without_losing_rows() {
    use tablecodec::codec::primitive::encode_string;
    use tablecodec::codec::Sink;
    use tablecodec::format::header::write_header;

    // Hand-author a schema section where C=1 name but T=2 type codes, then
    // a single row matching the T=2 shape.
    let mut schema_sink = Sink::new();
    schema_sink.write_u32_le(1);
    encode_string(&mut schema_sink, "only_name");
    schema_sink.write_u32_le(2);
    schema_sink.write_u32_le(TypeTag::Int.to_code().unwrap());
    schema_sink.write_u32_le(TypeTag::Int.to_code().unwrap());
    let schema_bytes = schema_sink.into_bytes();

    let mut payload_sink = Sink::new();
    payload_sink.write_i32_le(10);
    payload_sink.write_i32_le(20);
    let payload = payload_sink.into_bytes();
    let crc = tablecodec::format::crc::crc16_xmodem(&payload);

    let mut full = write_header("2014-10-06 12:28:25").unwrap();
    full.extend_from_slice(&schema_bytes);
    full.extend_from_slice(&1u32.to_le_bytes()); // row count
    full.extend_from_slice(&payload);
    full.extend_from_slice(&crc.to_le_bytes());

    let outcome = read_ct_bytes(&full).unwrap();
    assert_eq!(outcome.table.schema.len(), 2);
    assert_eq!(outcome.table.rows.len(), 1);
    assert!(outcome
        .warnings
        .iter()
        .any(|w| matches!(w, CtWarning::SchemaCountMismatch { .. })));
}
