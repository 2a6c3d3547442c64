// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Thin trait boundaries for the peripheral formats this crate hands
//! string matrices to or takes them from.
//!
//! Spreadsheet rendering, styling, table-object creation, CSV
//! tokenization, and the VDK archive codec are deliberately out of
//! scope: this module only names the interfaces a concrete XLSX or CSV
//! implementation would satisfy, so [`crate::projection::project`] and
//! [`crate::projection::lift`] have somewhere to hand their output.

use crate::core::Result;

/// A source of a string matrix in the XLSX layer's own row order (type
/// tags first, then column names — see
/// [`crate::projection::xlsx_boundary`]).
pub trait SpreadsheetSource {
    /// Read the sheet into a string matrix, XLSX row order.
    fn read_matrix(&self) -> Result<Vec<Vec<String>>>;
}

/// A sink that accepts a string matrix in the XLSX layer's own row
/// order and renders it into a spreadsheet. Styling, table objects,
/// column widths, and number-format hints are cosmetic and may be
/// omitted by a minimal implementation.
pub trait SpreadsheetSink {
    /// Write `matrix` (XLSX row order) as a sheet.
    fn write_matrix(&self, matrix: &[Vec<String>]) -> Result<()>;
}

/// A source of a string matrix in core row order (names, then type
/// tags) from a delimited-text (CSV) representation. Tokenization rules
/// (quoting, delimiter, line endings) belong to the concrete
/// implementation, not here.
pub trait DelimitedSource {
    /// Read the file into a string matrix, core row order.
    fn read_matrix(&self) -> Result<Vec<Vec<String>>>;
}

/// A sink that accepts a string matrix in core row order and renders it
/// as delimited text.
pub trait DelimitedSink {
    /// Write `matrix` (core row order) as delimited text.
    fn write_matrix(&self, matrix: &[Vec<String>]) -> Result<()>;
}
