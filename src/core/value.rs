// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! CT value type system.
//!
//! Provides the closed set of CT column types ([`TypeTag`]) and the sum
//! type ([`Cell`]) used to hold a single decoded value. All variants are
//! serde-serializable.

use serde::{Deserialize, Serialize};

/// A CT column type, identified on the wire by a 32-bit code.
///
/// Codes outside the closed set decode as `Unknown(n)`; encoding a cell
/// tagged `Unknown` is always a hard failure (see [`CtError::UnknownTypeCode`](crate::core::error::CtError::UnknownTypeCode)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeTag {
    /// Unsigned 8-bit (wire code 2)
    Byte,
    /// Signed 16-bit, little-endian (wire code 3)
    Short,
    /// Unsigned 16-bit, little-endian (wire code 4)
    Word,
    /// Signed 32-bit, little-endian (wire code 5)
    Int,
    /// Unsigned 32-bit, little-endian (wire code 6)
    Dword,
    /// Unsigned 32-bit, surfaced as `0x`-prefixed uppercase hex (wire code 7)
    DwordHex,
    /// `u32` character count + that many UTF-16LE code units (wire code 8)
    String,
    /// IEEE-754 binary32, little-endian (wire code 9)
    Float,
    /// Unsigned 64-bit, little-endian (wire code 11)
    Int64,
    /// 0 or 1 (wire code 12)
    Bool,
    /// A type code outside the closed set, carried for round-tripping and
    /// for `UNKNOWN_TYPE_<n>` surfacing; never writable.
    Unknown(u32),
}

impl TypeTag {
    /// Decode a wire type code into a `TypeTag`.
    pub fn from_code(code: u32) -> Self {
        match code {
            2 => TypeTag::Byte,
            3 => TypeTag::Short,
            4 => TypeTag::Word,
            5 => TypeTag::Int,
            6 => TypeTag::Dword,
            7 => TypeTag::DwordHex,
            8 => TypeTag::String,
            9 => TypeTag::Float,
            11 => TypeTag::Int64,
            12 => TypeTag::Bool,
            other => TypeTag::Unknown(other),
        }
    }

    /// Encode this tag back to its wire type code, if it has one.
    ///
    /// Returns `None` for `Unknown` — writing such a tag is a hard failure
    /// at the framing layer, not something this method papers over.
    pub fn to_code(self) -> Option<u32> {
        match self {
            TypeTag::Byte => Some(2),
            TypeTag::Short => Some(3),
            TypeTag::Word => Some(4),
            TypeTag::Int => Some(5),
            TypeTag::Dword => Some(6),
            TypeTag::DwordHex => Some(7),
            TypeTag::String => Some(8),
            TypeTag::Float => Some(9),
            TypeTag::Int64 => Some(11),
            TypeTag::Bool => Some(12),
            TypeTag::Unknown(_) => None,
        }
    }

    /// The fixed wire size in bytes, or `None` for the variable-length STRING.
    pub fn fixed_size(self) -> Option<usize> {
        match self {
            TypeTag::Byte | TypeTag::Bool => Some(1),
            TypeTag::Short | TypeTag::Word => Some(2),
            TypeTag::Int | TypeTag::Dword | TypeTag::DwordHex | TypeTag::Float => Some(4),
            TypeTag::Int64 => Some(8),
            TypeTag::String => None,
            TypeTag::Unknown(_) => None,
        }
    }

    /// The external name for this tag, as surfaced in the tabular
    /// projection's type-tag row (e.g. `"INT"`, `"UNKNOWN_TYPE_99"`).
    pub fn name(self) -> std::string::String {
        match self {
            TypeTag::Byte => "BYTE".to_string(),
            TypeTag::Short => "SHORT".to_string(),
            TypeTag::Word => "WORD".to_string(),
            TypeTag::Int => "INT".to_string(),
            TypeTag::Dword => "DWORD".to_string(),
            TypeTag::DwordHex => "DWORD_HEX".to_string(),
            TypeTag::String => "STRING".to_string(),
            TypeTag::Float => "FLOAT".to_string(),
            TypeTag::Int64 => "INT64".to_string(),
            TypeTag::Bool => "BOOL".to_string(),
            TypeTag::Unknown(n) => format!("UNKNOWN_TYPE_{n}"),
        }
    }

    /// Parse a type-tag name back into a `TypeTag` (the inverse of [`Self::name`]).
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "BYTE" => TypeTag::Byte,
            "SHORT" => TypeTag::Short,
            "WORD" => TypeTag::Word,
            "INT" => TypeTag::Int,
            "DWORD" => TypeTag::Dword,
            "DWORD_HEX" => TypeTag::DwordHex,
            "STRING" => TypeTag::String,
            "FLOAT" => TypeTag::Float,
            "INT64" => TypeTag::Int64,
            "BOOL" => TypeTag::Bool,
            other => {
                let n = other.strip_prefix("UNKNOWN_TYPE_")?.parse().ok()?;
                TypeTag::Unknown(n)
            }
        })
    }
}

impl std::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single decoded CT cell value.
///
/// The concrete variant always matches the owning column's [`TypeTag`]:
/// `I64` for SHORT/INT, `U64` for BYTE/WORD/DWORD/INT64, `Hex32` for
/// DWORD_HEX (wire-identical to DWORD, but rendered differently), `F32`
/// for FLOAT, `Bool` for BOOL, `Str` for STRING.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    /// SHORT, INT — sign-extended to 64 bits
    I64(i64),
    /// BYTE, WORD, DWORD, INT64 — zero-extended to 64 bits
    U64(u64),
    /// DWORD_HEX — wire-identical to DWORD, rendered as `0x`-prefixed hex
    Hex32(u32),
    /// FLOAT
    F32(f32),
    /// BOOL
    Bool(bool),
    /// STRING
    Str(std::string::String),
}

impl Cell {
    /// The `TypeTag` this cell's variant corresponds to, when unambiguous.
    ///
    /// `I64` and `U64` are each shared by two tags (SHORT/INT and
    /// BYTE/WORD/DWORD/INT64 respectively), so this only distinguishes by
    /// variant shape, not by exact width; callers that need the exact
    /// column type should consult the schema, not the cell.
    pub fn type_name(&self) -> &'static str {
        match self {
            Cell::I64(_) => "i64",
            Cell::U64(_) => "u64",
            Cell::Hex32(_) => "hex32",
            Cell::F32(_) => "f32",
            Cell::Bool(_) => "bool",
            Cell::Str(_) => "string",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_tag_round_trips_through_code() {
        for (code, tag) in [
            (2, TypeTag::Byte),
            (3, TypeTag::Short),
            (4, TypeTag::Word),
            (5, TypeTag::Int),
            (6, TypeTag::Dword),
            (7, TypeTag::DwordHex),
            (8, TypeTag::String),
            (9, TypeTag::Float),
            (11, TypeTag::Int64),
            (12, TypeTag::Bool),
        ] {
            assert_eq!(TypeTag::from_code(code), tag);
            assert_eq!(tag.to_code(), Some(code));
        }
    }

    #[test]
    fn unknown_code_round_trips_as_name_only() {
        let tag = TypeTag::from_code(99);
        assert_eq!(tag, TypeTag::Unknown(99));
        assert_eq!(tag.to_code(), None);
        assert_eq!(tag.name(), "UNKNOWN_TYPE_99");
        assert_eq!(TypeTag::from_name("UNKNOWN_TYPE_99"), Some(tag));
    }

    #[test]
    fn fixed_sizes_match_the_wire_table() {
        assert_eq!(TypeTag::Byte.fixed_size(), Some(1));
        assert_eq!(TypeTag::Short.fixed_size(), Some(2));
        assert_eq!(TypeTag::Word.fixed_size(), Some(2));
        assert_eq!(TypeTag::Int.fixed_size(), Some(4));
        assert_eq!(TypeTag::Dword.fixed_size(), Some(4));
        assert_eq!(TypeTag::DwordHex.fixed_size(), Some(4));
        assert_eq!(TypeTag::Float.fixed_size(), Some(4));
        assert_eq!(TypeTag::Int64.fixed_size(), Some(8));
        assert_eq!(TypeTag::Bool.fixed_size(), Some(1));
        assert_eq!(TypeTag::String.fixed_size(), None);
    }

    #[test]
    fn names_round_trip() {
        for tag in [
            TypeTag::Byte,
            TypeTag::Short,
            TypeTag::Word,
            TypeTag::Int,
            TypeTag::Dword,
            TypeTag::DwordHex,
            TypeTag::String,
            TypeTag::Float,
            TypeTag::Int64,
            TypeTag::Bool,
        ] {
            assert_eq!(TypeTag::from_name(&tag.name()), Some(tag));
        }
    }

    #[test]
    fn serialization_round_trips() {
        let cell = Cell::Str("hi".to_string());
        let json = serde_json::to_string(&cell).unwrap();
        let decoded: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, cell);
    }
}
