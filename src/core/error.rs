// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for tablecodec.
//!
//! Provides the error taxonomy for CT decoding/encoding and tabular
//! projection:
//! - Header and magic validation
//! - Schema parsing
//! - Primitive cell decoding
//! - String-to-native cell parsing when lifting a tabular matrix

use std::fmt;

/// Errors that can occur during CT codec or tabular projection operations.
#[derive(Debug, Clone)]
pub enum CtError {
    /// CT header does not start with the expected magic.
    BadMagic {
        /// The bytes actually found at the start of the header
        found: Vec<u8>,
    },

    /// Fewer than 64 bytes were available for the header.
    TruncatedHeader {
        /// Bytes actually available
        available: usize,
    },

    /// A primitive decode ran past the end of the buffer.
    TruncatedPayload {
        /// Bytes requested
        requested: usize,
        /// Bytes available
        available: usize,
        /// Cursor position when the read was attempted
        position: usize,
    },

    /// A schema type code is not in the closed `TypeTag` set.
    ///
    /// Reading surfaces this as `UNKNOWN_TYPE_<n>`; writing a cell tagged
    /// with this variant is always a hard failure.
    UnknownTypeCode(u32),

    /// Column count and type count disagree.
    ///
    /// On read this is non-fatal (a warning is recorded and the file's
    /// type count is taken as authoritative); on write it is fatal.
    SchemaMismatch {
        /// Number of column names
        columns: u32,
        /// Number of type codes
        types: u32,
    },

    /// A string value could not be parsed into the column's native type
    /// while lifting a tabular matrix into a `Table`.
    CellParseError {
        /// Row index (0-based, excluding the two header rows)
        row: usize,
        /// Column index
        col: usize,
        /// The column's declared type
        type_name: String,
        /// The raw string that failed to parse
        raw: String,
    },

    /// A string cannot be represented in UTF-16LE.
    ///
    /// Practically unreachable for valid Rust `String`s, which are always
    /// valid UTF-8 and therefore always representable in UTF-16.
    EncodingError(String),

    /// The header timestamp, encoded as UTF-16LE plus its null terminator,
    /// does not fit in the space remaining in the fixed 64-byte header.
    TimestampTooLong {
        /// UTF-16LE byte length of the offending timestamp (terminator not
        /// included).
        encoded_len: usize,
        /// Maximum UTF-16LE byte length the header has room for.
        max_len: usize,
    },

    /// Underlying I/O error.
    Io(String),
}

impl CtError {
    /// Create a [`CtError::BadMagic`] from the bytes actually read.
    pub fn bad_magic(found: impl Into<Vec<u8>>) -> Self {
        CtError::BadMagic {
            found: found.into(),
        }
    }

    /// Create a [`CtError::TruncatedPayload`].
    pub fn truncated_payload(requested: usize, available: usize, position: usize) -> Self {
        CtError::TruncatedPayload {
            requested,
            available,
            position,
        }
    }

    /// Create a [`CtError::CellParseError`].
    pub fn cell_parse(
        row: usize,
        col: usize,
        type_name: impl Into<String>,
        raw: impl Into<String>,
    ) -> Self {
        CtError::CellParseError {
            row,
            col,
            type_name: type_name.into(),
            raw: raw.into(),
        }
    }

    /// Structured fields for logging, mirroring each variant's data.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            CtError::BadMagic { found } => vec![("found", format!("{found:02X?}"))],
            CtError::TruncatedHeader { available } => {
                vec![("available", available.to_string())]
            }
            CtError::TruncatedPayload {
                requested,
                available,
                position,
            } => vec![
                ("requested", requested.to_string()),
                ("available", available.to_string()),
                ("position", position.to_string()),
            ],
            CtError::UnknownTypeCode(code) => vec![("code", code.to_string())],
            CtError::SchemaMismatch { columns, types } => vec![
                ("columns", columns.to_string()),
                ("types", types.to_string()),
            ],
            CtError::CellParseError {
                row,
                col,
                type_name,
                raw,
            } => vec![
                ("row", row.to_string()),
                ("col", col.to_string()),
                ("type", type_name.clone()),
                ("raw", raw.clone()),
            ],
            CtError::EncodingError(msg) => vec![("message", msg.clone())],
            CtError::TimestampTooLong {
                encoded_len,
                max_len,
            } => vec![
                ("encoded_len", encoded_len.to_string()),
                ("max_len", max_len.to_string()),
            ],
            CtError::Io(msg) => vec![("message", msg.clone())],
        }
    }
}

impl fmt::Display for CtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CtError::BadMagic { found } => {
                write!(f, "bad CT magic: found {found:02X?}")
            }
            CtError::TruncatedHeader { available } => {
                write!(
                    f,
                    "truncated CT header: only {available} bytes available, need 64"
                )
            }
            CtError::TruncatedPayload {
                requested,
                available,
                position,
            } => write!(
                f,
                "truncated payload: requested {requested} bytes at position {position}, but only {available} available"
            ),
            CtError::UnknownTypeCode(code) => write!(f, "unknown type code: {code}"),
            CtError::SchemaMismatch { columns, types } => write!(
                f,
                "schema mismatch: {columns} column names but {types} type codes"
            ),
            CtError::CellParseError {
                row,
                col,
                type_name,
                raw,
            } => write!(
                f,
                "failed to parse cell at row {row}, col {col} (type {type_name}): {raw:?}"
            ),
            CtError::EncodingError(msg) => write!(f, "encoding error: {msg}"),
            CtError::TimestampTooLong {
                encoded_len,
                max_len,
            } => write!(
                f,
                "timestamp too long for CT header: {encoded_len} UTF-16LE bytes, header has room for {max_len}"
            ),
            CtError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for CtError {}

impl From<std::io::Error> for CtError {
    fn from(err: std::io::Error) -> Self {
        CtError::Io(err.to_string())
    }
}

/// Result type for tablecodec operations.
pub type Result<T> = std::result::Result<T, CtError>;
