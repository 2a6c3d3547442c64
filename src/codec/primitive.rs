// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Primitive cell codec.
//!
//! One `decode_cell`/`encode_cell` pair per [`TypeTag`], dispatched with
//! an exhaustive `match` rather than the legacy dictionary-of-closures
//! (spec §9's redesign note) — this also turns `UNKNOWN_TYPE_<n>` from a
//! stringly-typed escape hatch into a `TypeTag::Unknown(n)` variant that
//! the compiler forces every `match` to account for.

use crate::codec::cursor::{Cursor, Sink};
use crate::core::{Cell, CtError, Result, TypeTag};

/// Decode a single cell of the given type from `cursor`.
pub fn decode_cell(cursor: &mut Cursor<'_>, ty: TypeTag) -> Result<Cell> {
    match ty {
        TypeTag::Byte => Ok(Cell::U64(cursor.read_u8()? as u64)),
        TypeTag::Short => Ok(Cell::I64(cursor.read_i16_le()? as i64)),
        TypeTag::Word => Ok(Cell::U64(cursor.read_u16_le()? as u64)),
        TypeTag::Int => Ok(Cell::I64(cursor.read_i32_le()? as i64)),
        TypeTag::Dword => Ok(Cell::U64(cursor.read_u32_le()? as u64)),
        TypeTag::DwordHex => Ok(Cell::Hex32(cursor.read_u32_le()?)),
        TypeTag::String => Ok(Cell::Str(decode_string(cursor)?)),
        TypeTag::Float => Ok(Cell::F32(cursor.read_f32_le()?)),
        TypeTag::Int64 => Ok(Cell::U64(cursor.read_u64_le()?)),
        TypeTag::Bool => Ok(Cell::Bool(cursor.read_u8()? != 0)),
        TypeTag::Unknown(n) => Err(CtError::UnknownTypeCode(n)),
    }
}

/// Encode a single cell of the given type into `sink`.
///
/// Callers must pass a `cell` whose variant matches what `ty` expects
/// (the only producers of `Cell`s — [`crate::format::reader`] and
/// [`crate::projection::lift`] — uphold this by construction); a
/// mismatched pairing encodes the default wire value for `ty` rather than
/// panicking, since this is an internal invariant, not a user-facing
/// validation surface. Writing a cell tagged `Unknown` is always a hard
/// failure, structurally enforced here rather than left to a stringly
/// escape hatch.
pub fn encode_cell(sink: &mut Sink, ty: TypeTag, cell: &Cell) -> Result<()> {
    match ty {
        TypeTag::Byte => sink.write_u8(as_u64(cell) as u8),
        TypeTag::Short => sink.write_i16_le(as_i64(cell) as i16),
        TypeTag::Word => sink.write_u16_le(as_u64(cell) as u16),
        TypeTag::Int => sink.write_i32_le(as_i64(cell) as i32),
        TypeTag::Dword => sink.write_u32_le(as_u64(cell) as u32),
        TypeTag::DwordHex => sink.write_u32_le(as_hex32(cell)),
        TypeTag::String => encode_string(sink, as_str(cell)),
        TypeTag::Float => sink.write_f32_le(as_f32(cell)),
        TypeTag::Int64 => sink.write_u64_le(as_u64(cell)),
        TypeTag::Bool => sink.write_u8(if as_bool(cell) { 1 } else { 0 }),
        TypeTag::Unknown(n) => return Err(CtError::UnknownTypeCode(n)),
    }
    Ok(())
}

fn as_i64(cell: &Cell) -> i64 {
    match cell {
        Cell::I64(v) => *v,
        Cell::U64(v) => *v as i64,
        _ => 0,
    }
}

fn as_u64(cell: &Cell) -> u64 {
    match cell {
        Cell::U64(v) => *v,
        Cell::I64(v) => *v as u64,
        _ => 0,
    }
}

fn as_hex32(cell: &Cell) -> u32 {
    match cell {
        Cell::Hex32(v) => *v,
        Cell::U64(v) => *v as u32,
        _ => 0,
    }
}

fn as_f32(cell: &Cell) -> f32 {
    match cell {
        Cell::F32(v) => *v,
        _ => 0.0,
    }
}

fn as_bool(cell: &Cell) -> bool {
    matches!(cell, Cell::Bool(true))
}

fn as_str(cell: &Cell) -> &str {
    match cell {
        Cell::Str(s) => s,
        _ => "",
    }
}

/// Decode a STRING cell: `u32` LE char count, then that many UTF-16LE
/// code units. A count of zero consumes no further bytes and yields the
/// empty string. Trailing zero code units, if present, are preserved
/// rather than stripped.
pub fn decode_string(cursor: &mut Cursor<'_>) -> Result<String> {
    let char_count = cursor.read_u32_le()? as usize;
    if char_count == 0 {
        return Ok(String::new());
    }
    let bytes = cursor.read_bytes(char_count * 2)?;
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units)
        .map_err(|e| CtError::EncodingError(format!("invalid UTF-16LE string: {e}")))
}

/// Encode a STRING cell. The empty string emits exactly the four zero
/// bytes of the char count and nothing else.
pub fn encode_string(sink: &mut Sink, value: &str) {
    let units: Vec<u16> = value.encode_utf16().collect();
    sink.write_u32_le(units.len() as u32);
    for unit in units {
        sink.write_u16_le(unit);
    }
}

/// Parse a string into an integer, accepting decimal integers and
/// decimal integers with a `.0`-style fractional part (truncated toward
/// zero). Anything else is a [`CtError::CellParseError`] built by the
/// caller, who has the row/col/type context this function doesn't.
pub fn parse_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if let Ok(v) = trimmed.parse::<i64>() {
        return Some(v);
    }
    let (int_part, frac_part) = trimmed.split_once('.')?;
    if !frac_part.chars().all(|c| c == '0') {
        return None;
    }
    int_part.parse::<i64>().ok()
}

/// As [`parse_integer`], but for the unsigned column types (WORD, DWORD,
/// DWORD_HEX, BYTE, INT64); rejects negative values (e.g. WORD lifted
/// from `"-1"`), per spec §8.
pub fn parse_unsigned(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();
    if let Ok(v) = trimmed.parse::<u64>() {
        return Some(v);
    }
    let (int_part, frac_part) = trimmed.split_once('.')?;
    if !frac_part.chars().all(|c| c == '0') {
        return None;
    }
    int_part.parse::<u64>().ok()
}

/// Parse a DWORD_HEX cell string. Any input containing `x`/`X` is parsed
/// as hexadecimal (after stripping an optional `0x`/`0X` prefix);
/// otherwise as decimal.
pub fn parse_hex32(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.contains('x') || trimmed.contains('X') {
        let digits = trimmed
            .trim_start_matches("0x")
            .trim_start_matches("0X")
            .trim_start_matches('x')
            .trim_start_matches('X');
        u32::from_str_radix(digits, 16).ok()
    } else {
        trimmed.parse::<u32>().ok()
    }
}

/// Render a DWORD_HEX cell: `0x` plus uppercase hex, no padding.
pub fn render_hex32(value: u32) -> String {
    format!("0x{value:X}")
}

/// Parse a BOOL cell string. `"0"`, `"false"`, `""`, `"no"`
/// (case-insensitive, trimmed) encode to `false`; any other non-empty
/// string encodes to `true`.
pub fn parse_bool(raw: &str) -> bool {
    let trimmed = raw.trim().to_lowercase();
    !matches!(trimmed.as_str(), "0" | "false" | "" | "no")
}
