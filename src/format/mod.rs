// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! The CT binary format: header, schema section, row section, and CRC
//! trailer, plus the whole-file reader/writer that compose them.

pub mod crc;
pub mod header;
pub mod reader;
pub mod schema;
pub mod writer;

pub use reader::{read_ct, read_ct_bytes, CtReadOutcome};
pub use writer::{write_ct, write_ct_bytes};

/// A non-fatal condition observed while reading a CT file. The decoded
/// table is always returned alongside these — nothing here withholds data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CtWarning {
    /// The header's timestamp region could not be decoded; the fallback
    /// timestamp was substituted.
    TimestampFallback,
    /// The schema's column count and type count disagreed (`T != C`).
    SchemaCountMismatch {
        /// Number of column names read.
        columns: u32,
        /// Number of type codes read.
        types: u32,
    },
    /// The trailer CRC did not match the CRC computed over the row
    /// payload.
    CrcMismatch {
        /// CRC stored in the trailer.
        expected: u16,
        /// CRC computed over the row payload.
        computed: u16,
    },
}

impl std::fmt::Display for CtWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CtWarning::TimestampFallback => {
                write!(f, "header timestamp unreadable, fallback substituted")
            }
            CtWarning::SchemaCountMismatch { columns, types } => write!(
                f,
                "schema column count ({columns}) and type count ({types}) disagree"
            ),
            CtWarning::CrcMismatch { expected, computed } => write!(
                f,
                "CRC mismatch: trailer says {expected:#06x}, computed {computed:#06x}"
            ),
        }
    }
}
