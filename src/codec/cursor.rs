// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Byte cursor for reading CT primitives with position tracking.
//!
//! CT is an unaligned, little-endian byte stream — unlike the CDR wire
//! format this library's teacher also speaks, there is no alignment
//! padding to track, so the cursor here is origin-less: just a position
//! into a borrowed slice.

use byteorder::{LittleEndian, ReadBytesExt};

use crate::core::{CtError, Result};

/// A read cursor over a borrowed byte slice.
pub struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor starting at the beginning of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current read position.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes remaining to be read.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        if self.remaining() < n {
            return Err(CtError::truncated_payload(n, self.remaining(), self.pos));
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    /// Read one unsigned byte.
    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    /// Read a signed 16-bit little-endian integer.
    pub fn read_i16_le(&mut self) -> Result<i16> {
        let mut slice = self.take(2)?;
        Ok(slice.read_i16::<LittleEndian>().expect("length checked"))
    }

    /// Read an unsigned 16-bit little-endian integer.
    pub fn read_u16_le(&mut self) -> Result<u16> {
        let mut slice = self.take(2)?;
        Ok(slice.read_u16::<LittleEndian>().expect("length checked"))
    }

    /// Read a signed 32-bit little-endian integer.
    pub fn read_i32_le(&mut self) -> Result<i32> {
        let mut slice = self.take(4)?;
        Ok(slice.read_i32::<LittleEndian>().expect("length checked"))
    }

    /// Read an unsigned 32-bit little-endian integer.
    pub fn read_u32_le(&mut self) -> Result<u32> {
        let mut slice = self.take(4)?;
        Ok(slice.read_u32::<LittleEndian>().expect("length checked"))
    }

    /// Read an unsigned 64-bit little-endian integer.
    pub fn read_u64_le(&mut self) -> Result<u64> {
        let mut slice = self.take(8)?;
        Ok(slice.read_u64::<LittleEndian>().expect("length checked"))
    }

    /// Read an IEEE-754 binary32 little-endian float.
    pub fn read_f32_le(&mut self) -> Result<f32> {
        let mut slice = self.take(4)?;
        Ok(slice.read_f32::<LittleEndian>().expect("length checked"))
    }

    /// Read exactly `n` raw bytes.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        self.take(n)
    }
}

/// A growable little-endian byte sink used by the primitive and framing
/// encoders.
#[derive(Debug, Default)]
pub struct Sink(pub Vec<u8>);

impl Sink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append one unsigned byte.
    pub fn write_u8(&mut self, v: u8) {
        self.0.push(v);
    }

    /// Append a signed 16-bit little-endian integer.
    pub fn write_i16_le(&mut self, v: i16) {
        self.0.extend_from_slice(&v.to_le_bytes());
    }

    /// Append an unsigned 16-bit little-endian integer.
    pub fn write_u16_le(&mut self, v: u16) {
        self.0.extend_from_slice(&v.to_le_bytes());
    }

    /// Append a signed 32-bit little-endian integer.
    pub fn write_i32_le(&mut self, v: i32) {
        self.0.extend_from_slice(&v.to_le_bytes());
    }

    /// Append an unsigned 32-bit little-endian integer.
    pub fn write_u32_le(&mut self, v: u32) {
        self.0.extend_from_slice(&v.to_le_bytes());
    }

    /// Append an unsigned 64-bit little-endian integer.
    pub fn write_u64_le(&mut self, v: u64) {
        self.0.extend_from_slice(&v.to_le_bytes());
    }

    /// Append an IEEE-754 binary32 little-endian float.
    pub fn write_f32_le(&mut self, v: f32) {
        self.0.extend_from_slice(&v.to_le_bytes());
    }

    /// Append raw bytes verbatim.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.0.extend_from_slice(bytes);
    }

    /// Consume the sink, returning the accumulated bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_little_endian_in_order() {
        let data = [0x01, 0x00, 0x02, 0x00, 0x00, 0x00];
        let mut cur = Cursor::new(&data);
        assert_eq!(cur.read_u16_le().unwrap(), 1);
        assert_eq!(cur.read_u32_le().unwrap(), 2);
        assert_eq!(cur.remaining(), 0);
    }

    #[test]
    fn reading_past_end_is_truncated_payload() {
        let data = [0x01];
        let mut cur = Cursor::new(&data);
        let err = cur.read_u32_le().unwrap_err();
        assert!(matches!(err, CtError::TruncatedPayload { .. }));
    }

    #[test]
    fn int_minus_one_encodes_as_ff_bytes() {
        let mut sink = Sink::new();
        sink.write_i32_le(-1);
        assert_eq!(sink.into_bytes(), vec![0xFF, 0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn sink_round_trips_through_cursor() {
        let mut sink = Sink::new();
        sink.write_u8(7);
        sink.write_u16_le(500);
        sink.write_f32_le(1.5);
        let bytes = sink.into_bytes();

        let mut cur = Cursor::new(&bytes);
        assert_eq!(cur.read_u8().unwrap(), 7);
        assert_eq!(cur.read_u16_le().unwrap(), 500);
        assert_eq!(cur.read_f32_le().unwrap(), 1.5);
    }
}
