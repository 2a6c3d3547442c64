// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! The fixed 64-byte CT header: magic, embedded creation timestamp, and
//! zero padding.

use crate::core::{CtError, Result};

/// CT magic literal.
pub const MAGIC: &str = "RO2SEC!";

/// Size of the fixed header, in bytes.
pub const HEADER_SIZE: usize = 64;

/// Fallback timestamp substituted when the header's timestamp region
/// cannot be decoded (spec §4.2).
pub const FALLBACK_TIMESTAMP: &str = "2014-10-06 12:28:25";

/// Outcome of parsing the header: the decoded timestamp, and whether the
/// fallback had to be substituted.
#[derive(Debug)]
pub struct ParsedHeader {
    /// The timestamp decoded from the header (or [`FALLBACK_TIMESTAMP`]).
    pub timestamp: String,
    /// Whether the fallback timestamp was substituted.
    pub used_fallback: bool,
}

fn utf16le_bytes(s: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(s.len() * 2);
    for unit in s.encode_utf16() {
        out.extend_from_slice(&unit.to_le_bytes());
    }
    out
}

/// Parse the fixed 64-byte CT header.
///
/// `data` must contain at least [`HEADER_SIZE`] bytes; only the first
/// `HEADER_SIZE` are consumed.
pub fn read_header(data: &[u8]) -> Result<ParsedHeader> {
    if data.len() < HEADER_SIZE {
        return Err(CtError::TruncatedHeader {
            available: data.len(),
        });
    }

    let magic_bytes = utf16le_bytes(MAGIC);
    if data[..magic_bytes.len()] != magic_bytes[..] {
        return Err(CtError::bad_magic(data[..magic_bytes.len()].to_vec()));
    }

    // Magic (14 bytes) + its null terminator (2 bytes) = timestamp starts at 16.
    let ts_start = magic_bytes.len() + 2;

    // Scan for the next aligned 0x0000 terminator within the header window.
    let mut ts_end = None;
    let mut offset = ts_start;
    while offset + 1 < HEADER_SIZE {
        if data[offset] == 0 && data[offset + 1] == 0 {
            ts_end = Some(offset);
            break;
        }
        offset += 2;
    }

    // An immediately-empty or altogether-missing terminator both read as
    // "no usable timestamp was written here" (scenario S4: a header
    // zero-filled after byte 16 must not decode to an empty string).
    let region = match ts_end {
        Some(end) if end > ts_start => Some(&data[ts_start..end]),
        _ => None,
    };

    let decoded = region.and_then(|bytes| {
        let units: Vec<u16> = bytes
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16(&units).ok()
    });

    match decoded {
        Some(timestamp) => Ok(ParsedHeader {
            timestamp,
            used_fallback: false,
        }),
        None => {
            tracing::warn!(
                context = "header_timestamp_fallback",
                fallback = FALLBACK_TIMESTAMP,
                "CT header timestamp unreadable, substituting fallback"
            );
            Ok(ParsedHeader {
                timestamp: FALLBACK_TIMESTAMP.to_string(),
                used_fallback: true,
            })
        }
    }
}

/// Write the fixed 64-byte CT header for `timestamp`.
///
/// Fails with [`CtError::TimestampTooLong`] if the UTF-16LE encoding of
/// `timestamp` plus its null terminator would not fit in the space left
/// after the magic and its own terminator (spec's timestamp strings are
/// 19 ASCII characters, well within the 46-byte budget this leaves).
pub fn write_header(timestamp: &str) -> Result<Vec<u8>> {
    let mut header = utf16le_bytes(MAGIC);
    header.extend_from_slice(&[0, 0]);

    let ts_bytes = utf16le_bytes(timestamp);
    let max_len = HEADER_SIZE - header.len() - 2;
    if ts_bytes.len() > max_len {
        return Err(CtError::TimestampTooLong {
            encoded_len: ts_bytes.len(),
            max_len,
        });
    }

    header.extend_from_slice(&ts_bytes);
    header.extend_from_slice(&[0, 0]);
    header.resize(HEADER_SIZE, 0);
    Ok(header)
}
