// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! The CT data model: [`Schema`], [`Row`], [`Table`].
//!
//! A `Table` is constructed by a reader or by the caller, is immutable
//! from a codec standpoint, and is consumed by a writer. There is no
//! shared state across operations.

use crate::core::TypeTag;

/// An ordered sequence of `(column_name, column_type)` pairs.
///
/// Column count and type count are always equal in a well-formed
/// `Schema` — a mismatch observed while reading a CT file is recorded as
/// a warning (see [`crate::format::CtWarning::SchemaCountMismatch`]) and
/// resolved in favor of the file's type count, never silently truncated.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Schema {
    /// Ordered `(name, type)` columns.
    pub columns: Vec<(String, TypeTag)>,
}

impl Schema {
    /// Create a schema from column `(name, type)` pairs.
    pub fn new(columns: Vec<(String, TypeTag)>) -> Self {
        Self { columns }
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether this schema has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column names, in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    /// Column types, in order.
    pub fn types(&self) -> impl Iterator<Item = TypeTag> + '_ {
        self.columns.iter().map(|(_, ty)| *ty)
    }
}

/// An ordered sequence of [`Cell`](crate::core::Cell)s, one per schema column.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row(pub Vec<crate::core::Cell>);

impl Row {
    /// Number of cells in this row.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether this row has no cells.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A fully-decoded CT table: schema, rows, and the embedded creation
/// timestamp carried opaquely across round-trips.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// The table's column schema.
    pub schema: Schema,
    /// The table's rows, each matching `schema` in length and per-cell type.
    pub rows: Vec<Row>,
    /// The header timestamp, `"YYYY-MM-DD HH:MM:SS"`, carried opaquely
    /// (no timezone semantics — see spec §9).
    pub header_timestamp: String,
}

impl Table {
    /// Create a new table, trusting the caller that every row matches
    /// `schema` in length and per-cell type (this invariant is enforced
    /// by construction in [`crate::format::reader`] and
    /// [`crate::projection::lift`], the only two producers of `Table`s).
    pub fn new(schema: Schema, rows: Vec<Row>, header_timestamp: String) -> Self {
        Self {
            schema,
            rows,
            header_timestamp,
        }
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
