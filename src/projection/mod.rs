// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Tabular projection: converting between a [`Table`] and the plain
//! `[column-names; type-names; row₁; …]` string matrix that spreadsheet
//! and CSV collaborators consume.
//!
//! `project` and `lift` are each other's inverse on well-formed inputs:
//! `project ∘ lift` is the identity on matrices whose cells are valid
//! type renderings, and `lift ∘ project` is the identity on well-formed
//! `Table`s.

use crate::codec::primitive::{
    parse_bool, parse_hex32, parse_integer, parse_unsigned, render_hex32,
};
use crate::core::{Cell, CtError, Result, TypeTag};
use crate::table::{Row, Schema, Table};

/// Render `cell` as its external string form for type `ty`.
fn render_cell(ty: TypeTag, cell: &Cell) -> String {
    match (ty, cell) {
        (TypeTag::DwordHex, Cell::Hex32(v)) => render_hex32(*v),
        (TypeTag::Bool, Cell::Bool(v)) => if *v { "1" } else { "0" }.to_string(),
        (_, Cell::I64(v)) => v.to_string(),
        (_, Cell::U64(v)) => v.to_string(),
        (_, Cell::F32(v)) => v.to_string(),
        (_, Cell::Str(v)) => v.clone(),
        (_, Cell::Hex32(v)) => render_hex32(*v),
        (_, Cell::Bool(v)) => if *v { "1" } else { "0" }.to_string(),
    }
}

/// Project a [`Table`] onto a `[names; type-names; rows...]` string matrix.
pub fn project(table: &Table) -> Vec<Vec<String>> {
    let mut matrix = Vec::with_capacity(table.rows.len() + 2);
    matrix.push(table.schema.names().map(str::to_string).collect());
    matrix.push(table.schema.types().map(|ty| ty.name()).collect());
    for row in &table.rows {
        let rendered = table
            .schema
            .types()
            .zip(row.0.iter())
            .map(|(ty, cell)| render_cell(ty, cell))
            .collect();
        matrix.push(rendered);
    }
    matrix
}

fn parse_cell(ty: TypeTag, raw: &str, row: usize, col: usize) -> Result<Cell> {
    match ty {
        TypeTag::Byte | TypeTag::Word | TypeTag::Dword | TypeTag::Int64 => {
            if raw.is_empty() {
                return Ok(Cell::U64(0));
            }
            parse_unsigned(raw)
                .map(Cell::U64)
                .ok_or_else(|| CtError::cell_parse(row, col, ty.name(), raw))
        }
        TypeTag::Short | TypeTag::Int => {
            if raw.is_empty() {
                return Ok(Cell::I64(0));
            }
            parse_integer(raw)
                .map(Cell::I64)
                .ok_or_else(|| CtError::cell_parse(row, col, ty.name(), raw))
        }
        TypeTag::DwordHex => {
            if raw.is_empty() {
                return Ok(Cell::Hex32(0));
            }
            parse_hex32(raw)
                .map(Cell::Hex32)
                .ok_or_else(|| CtError::cell_parse(row, col, ty.name(), raw))
        }
        TypeTag::Float => {
            if raw.is_empty() {
                return Ok(Cell::F32(0.0));
            }
            raw.trim()
                .parse::<f32>()
                .map(Cell::F32)
                .map_err(|_| CtError::cell_parse(row, col, ty.name(), raw))
        }
        TypeTag::Bool => Ok(Cell::Bool(parse_bool(raw))),
        TypeTag::String => Ok(Cell::Str(raw.to_string())),
        TypeTag::Unknown(n) => Err(CtError::UnknownTypeCode(n)),
    }
}

/// Lift a `[names; type-names; rows...]` string matrix into a [`Table`].
///
/// `matrix[0]` supplies column names, `matrix[1]` supplies type-tag names
/// (see [`TypeTag::from_name`]); every row after that is parsed
/// cell-by-cell per its column's type. `timestamp` is carried into the
/// resulting table's header; callers without one (e.g. a from-scratch
/// import) should supply the caller's best-known source timestamp.
pub fn lift(matrix: &[Vec<String>], timestamp: String) -> Result<Table> {
    if matrix.len() < 2 {
        return Err(CtError::EncodingError(
            "tabular matrix is missing its name/type header rows".to_string(),
        ));
    }
    let names = &matrix[0];
    let type_names = &matrix[1];

    let mut columns = Vec::with_capacity(names.len());
    for (i, name) in names.iter().enumerate() {
        let type_name = type_names
            .get(i)
            .ok_or_else(|| CtError::EncodingError(format!("missing type tag for column {i}")))?;
        let ty = TypeTag::from_name(type_name)
            .ok_or_else(|| CtError::EncodingError(format!("unrecognized type tag: {type_name}")))?;
        columns.push((name.clone(), ty));
    }
    let schema = Schema::new(columns);

    let mut rows = Vec::with_capacity(matrix.len().saturating_sub(2));
    for (row_idx, raw_row) in matrix.iter().skip(2).enumerate() {
        let mut cells = Vec::with_capacity(schema.len());
        for (col_idx, (_, ty)) in schema.columns.iter().enumerate() {
            let raw = raw_row.get(col_idx).map(String::as_str).unwrap_or("");
            cells.push(parse_cell(*ty, raw, row_idx, col_idx)?);
        }
        rows.push(Row(cells));
    }

    Ok(Table::new(schema, rows, timestamp))
}

/// The XLSX collaborator boundary: XLSX readers hand back a matrix whose
/// *first* row is type tags and *second* row is column names — the
/// inverse of the `project`/`lift` convention — so the core swaps rows 0
/// and 1 exactly at this boundary, in both directions.
pub mod xlsx_boundary {
    /// Convert an XLSX-ordered matrix (type tags, then names) into core
    /// order (names, then type tags).
    pub fn to_core_order(mut matrix: Vec<Vec<String>>) -> Vec<Vec<String>> {
        if matrix.len() >= 2 {
            matrix.swap(0, 1);
        }
        matrix
    }

    /// Convert a core-ordered matrix (names, then type tags) into the
    /// XLSX layer's expected order (type tags, then names).
    pub fn from_core_order(mut matrix: Vec<Vec<String>>) -> Vec<Vec<String>> {
        if matrix.len() >= 2 {
            matrix.swap(0, 1);
        }
        matrix
    }
}
