// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! The CT schema section: column names, then type codes.

use crate::codec::cursor::{Cursor, Sink};
use crate::codec::primitive::{decode_string, encode_string};
use crate::core::{CtError, Result, TypeTag};
use crate::table::Schema;

/// A schema-count mismatch observed while reading (`T != C`); non-fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaCountMismatch {
    /// Number of column names read.
    pub columns: u32,
    /// Number of type codes read.
    pub types: u32,
}

/// Result of reading the schema section: the resolved schema plus any
/// count mismatch observed (the file's type count is authoritative).
pub struct ReadSchema {
    /// The resolved schema.
    pub schema: Schema,
    /// Present if `T != C` was observed.
    pub mismatch: Option<SchemaCountMismatch>,
}

/// Read the schema section: `u32` column count, that many STRING column
/// names, `u32` type count, that many `u32` type codes.
///
/// A `T != C` mismatch is recorded in [`ReadSchema::mismatch`] but never
/// causes a silent truncation — reading continues using `T` columns,
/// pairing each with its own type code, and any name beyond `T` (or any
/// type code beyond `C` names) is dropped from the *paired* schema while
/// still being fully consumed from the stream.
pub fn read_schema(cursor: &mut Cursor<'_>) -> Result<ReadSchema> {
    let column_count = cursor.read_u32_le()?;
    let mut names = Vec::with_capacity(column_count as usize);
    for _ in 0..column_count {
        names.push(decode_string(cursor)?);
    }

    let type_count = cursor.read_u32_le()?;
    let mut types = Vec::with_capacity(type_count as usize);
    for _ in 0..type_count {
        types.push(TypeTag::from_code(cursor.read_u32_le()?));
    }

    let mismatch = if column_count != type_count {
        Some(SchemaCountMismatch {
            columns: column_count,
            types: type_count,
        })
    } else {
        None
    };

    let columns = (0..type_count as usize)
        .map(|i| {
            let name = names.get(i).cloned().unwrap_or_default();
            (name, types[i])
        })
        .collect();

    Ok(ReadSchema {
        schema: Schema::new(columns),
        mismatch,
    })
}

/// Write the schema section. Column count and type count are always
/// equal on write (no mismatch can be authored by this codec); writing a
/// column whose type is [`TypeTag::Unknown`] is a hard failure.
pub fn write_schema(sink: &mut Sink, schema: &Schema) -> Result<()> {
    sink.write_u32_le(schema.len() as u32);
    for (name, _) in &schema.columns {
        encode_string(sink, name);
    }

    sink.write_u32_le(schema.len() as u32);
    for (_, ty) in &schema.columns {
        let code = ty.to_code().ok_or_else(|| match ty {
            TypeTag::Unknown(n) => CtError::UnknownTypeCode(*n),
            _ => unreachable!(),
        })?;
        sink.write_u32_le(code);
    }

    Ok(())
}
