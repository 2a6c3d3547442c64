// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Tabular projection integration tests: full CT → matrix → CT loops,
//! and the XLSX row-swap boundary contract.

use tablecodec::core::{Cell, TypeTag};
use tablecodec::format::{read_ct_bytes, write_ct_bytes};
use tablecodec::projection::{lift, project, xlsx_boundary};
use tablecodec::table::{Row, Schema, Table};

fn mixed_schema() -> Schema {
    Schema::new(vec![
        ("id".to_string(), TypeTag::Int),
        ("count".to_string(), TypeTag::Word),
        ("flags".to_string(), TypeTag::DwordHex),
        ("score".to_string(), TypeTag::Float),
        ("active".to_string(), TypeTag::Bool),
        ("label".to_string(), TypeTag::String),
    ])
}

fn mixed_row(id: i64, count: u64, flags: u32, score: f32, active: bool, label: &str) -> Row {
    Row(vec![
        Cell::I64(id),
        Cell::U64(count),
        Cell::Hex32(flags),
        Cell::F32(score),
        Cell::Bool(active),
        Cell::Str(label.to_string()),
    ])
}

#[test]
fn ct_bytes_through_projection_and_back_is_lossless() {
    let rows = vec![
        mixed_row(-1, 60000, 0xCAFEBABE, 1.5, true, "hi"),
        mixed_row(0, 0, 0, 0.0, false, ""),
    ];
    let table = Table::new(mixed_schema(), rows, "2014-10-06 12:28:25".to_string());
    let bytes = write_ct_bytes(&table).unwrap();

    let outcome = read_ct_bytes(&bytes).unwrap();
    let matrix = project(&outcome.table);
    let lifted = lift(&matrix, outcome.table.header_timestamp.clone()).unwrap();

    assert_eq!(lifted, outcome.table);

    let rebuilt_bytes = write_ct_bytes(&lifted).unwrap();
    assert_eq!(rebuilt_bytes, bytes);
}

#[test]
fn project_header_rows_carry_names_then_type_tags() {
    let table = Table::new(mixed_schema(), vec![], "2014-10-06 12:28:25".to_string());
    let matrix = project(&table);
    assert_eq!(
        matrix[0],
        vec!["id", "count", "flags", "score", "active", "label"]
    );
    assert_eq!(
        matrix[1],
        vec!["INT", "WORD", "DWORD_HEX", "FLOAT", "BOOL", "STRING"]
    );
}

#[test]
fn xlsx_layer_row_order_is_swapped_at_the_boundary() {
    let table = Table::new(
        mixed_schema(),
        vec![mixed_row(1, 2, 3, 4.0, true, "x")],
        "2014-10-06 12:28:25".to_string(),
    );
    let core_matrix = project(&table);

    let xlsx_matrix = xlsx_boundary::from_core_order(core_matrix.clone());
    assert_eq!(xlsx_matrix[0], core_matrix[1]);
    assert_eq!(xlsx_matrix[1], core_matrix[0]);

    let back_to_core = xlsx_boundary::to_core_order(xlsx_matrix);
    assert_eq!(back_to_core, core_matrix);

    let lifted = lift(&back_to_core, table.header_timestamp.clone()).unwrap();
    assert_eq!(lifted, table);
}

#[test]
fn lifting_an_unparseable_word_cell_reports_cell_parse_error() {
    let matrix = vec![
        vec!["n".to_string()],
        vec!["WORD".to_string()],
        vec!["not_a_number".to_string()],
    ];
    let err = lift(&matrix, "2014-10-06 12:28:25".to_string()).unwrap_err();
    assert!(err.to_string().contains("row 0, col 0"));
}
