//! Big-endian binary reader over borrowed byte slices.
//!
//! This module provides [`BinaryReader`], a cursor-like type that reads the
//! big-endian fields used by classic Mac OS resource data without copying.

use byteorder::{BigEndian, ByteOrder};
use zerocopy::FromBytes;

use crate::text::TextEncoding;
use crate::{Error, Result};

/// Cursor over a record body.
///
/// Every read is bounds-checked against the slice and fails with
/// [`Error::UnexpectedEof`] rather than panicking. Integers are big-endian.
///
/// # Example
///
/// ```
/// use nova_common::BinaryReader;
///
/// let body = [0x01, 0x02, 0x03, 0x04, 0xFF, 0xFF];
/// let mut reader = BinaryReader::new(&body);
///
/// assert_eq!(reader.read_u32().unwrap(), 0x01020304);
/// assert_eq!(reader.read_i16().unwrap(), -1);
/// assert_eq!(reader.remaining(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct BinaryReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

macro_rules! be_reads {
    ($($name:ident -> $ty:ty = $read:ident;)*) => {
        $(
            #[doc = concat!("Read a big-endian `", stringify!($ty), "`.")]
            #[inline]
            pub fn $name(&mut self) -> Result<$ty> {
                self.take(std::mem::size_of::<$ty>()).map(BigEndian::$read)
            }
        )*
    };
}

impl<'a> BinaryReader<'a> {
    /// A reader positioned at the start of `buf`.
    #[inline]
    pub const fn new(buf: &'a [u8]) -> Self {
        Self::new_at(buf, 0)
    }

    /// A reader whose cursor starts at `pos`. Past-the-end positions are
    /// allowed; the first read reports them.
    #[inline]
    pub const fn new_at(buf: &'a [u8], pos: usize) -> Self {
        Self { buf, pos }
    }

    /// Current offset from the start of the buffer.
    #[inline]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left after the cursor; zero once past the end.
    #[inline]
    pub const fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    /// Skip `count` bytes without checking them.
    #[inline]
    pub fn advance(&mut self, count: usize) {
        self.pos = self.pos.saturating_add(count);
    }

    fn take(&mut self, count: usize) -> Result<&'a [u8]> {
        let available = self.remaining();
        if count > available {
            return Err(Error::UnexpectedEof {
                offset: self.pos,
                needed: count,
                available,
            });
        }
        let bytes = &self.buf[self.pos..self.pos + count];
        self.pos += count;
        Ok(bytes)
    }

    /// Borrow the next `count` bytes and advance past them.
    #[inline]
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        self.take(count)
    }

    /// Read a single byte.
    #[inline]
    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    /// Read a single byte as a signed value.
    #[inline]
    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.take(1)?[0] as i8)
    }

    be_reads! {
        read_u16 -> u16 = read_u16;
        read_i16 -> i16 = read_i16;
        read_u32 -> u32 = read_u32;
        read_i32 -> i32 = read_i32;
        read_u64 -> u64 = read_u64;
        read_i64 -> i64 = read_i64;
    }

    /// Read an integer of `width` bytes (1, 2, 4 or 8).
    ///
    /// Unsigned 8-byte values are reinterpreted as `i64` bit patterns.
    pub fn read_int(&mut self, width: usize, signed: bool) -> Result<i64> {
        let value = match (width, signed) {
            (1, true) => self.read_i8()? as i64,
            (1, false) => self.read_u8()? as i64,
            (2, true) => self.read_i16()? as i64,
            (2, false) => self.read_u16()? as i64,
            (4, true) => self.read_i32()? as i64,
            (4, false) => self.read_u32()? as i64,
            (8, true) => self.read_i64()?,
            (8, false) => self.read_u64()? as i64,
            (other, _) => return Err(Error::InvalidWidth(other)),
        };
        Ok(value)
    }

    /// Read a NUL-terminated string from a field of at most `max` bytes.
    ///
    /// When no terminator appears within `max` bytes the whole field is the
    /// text. Running off the end of the buffer before either is an error. The
    /// position always advances past the full field.
    pub fn read_cstring(&mut self, max: usize, encoding: TextEncoding) -> Result<String> {
        let start = self.pos.min(self.buf.len());
        let window = &self.buf[start..start + max.min(self.remaining())];
        let text = match memchr::memchr(0, window) {
            Some(end) => &window[..end],
            None if window.len() == max => window,
            None => {
                return Err(Error::UnexpectedEof {
                    offset: self.pos,
                    needed: max,
                    available: window.len(),
                })
            }
        };
        let decoded = encoding.decode(text);
        self.advance(max);
        Ok(decoded)
    }

    /// Read a length-prefixed string: one length byte, then that many bytes.
    pub fn read_pascal_string(&mut self, encoding: TextEncoding) -> Result<String> {
        let len = usize::from(self.read_u8()?);
        self.take(len).map(|bytes| encoding.decode(bytes))
    }

    /// Copy out a plain-old-data struct.
    pub fn read_struct<T: FromBytes>(&mut self) -> Result<T> {
        let offset = self.pos;
        let needed = std::mem::size_of::<T>();
        let bytes = self.take(needed)?;
        T::read_from_bytes(bytes).map_err(|_| Error::UnexpectedEof {
            offset,
            needed,
            available: bytes.len(),
        })
    }
}

/// Decode a big-endian integer of `width` bytes at `offset`.
///
/// Fails only when `offset + width` runs past the buffer or the width is not
/// one of 1, 2, 4 or 8.
#[inline]
pub fn decode_int(buffer: &[u8], offset: usize, width: usize, signed: bool) -> Result<i64> {
    BinaryReader::new_at(buffer, offset).read_int(width, signed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_primitives() {
        let body = [0x80, 0x01, 0x02, 0x03, 0x04, 0xFE, 0xFF, 0xFF, 0xFF];
        let mut reader = BinaryReader::new(&body);

        assert_eq!(reader.read_i8().unwrap(), -128);
        assert_eq!(reader.read_u32().unwrap(), 0x0102_0304);
        assert_eq!(reader.read_i32().unwrap(), -16_777_217);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_decode_int_two_complement() {
        let data = [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF];

        assert_eq!(decode_int(&data, 0, 1, true).unwrap(), -1);
        assert_eq!(decode_int(&data, 0, 1, false).unwrap(), 255);
        assert_eq!(decode_int(&data, 0, 2, true).unwrap(), -1);
        assert_eq!(decode_int(&data, 0, 2, false).unwrap(), 65535);
        assert_eq!(decode_int(&data, 0, 4, true).unwrap(), -1);
        assert_eq!(decode_int(&data, 0, 4, false).unwrap(), 0xFFFF_FFFF);
        assert_eq!(decode_int(&data, 0, 8, true).unwrap(), -1);
    }

    #[test]
    fn test_decode_int_big_endian_order() {
        let data = [0x00, 0x12, 0x34, 0x80, 0x00];

        assert_eq!(decode_int(&data, 1, 2, false).unwrap(), 0x1234);
        assert_eq!(decode_int(&data, 3, 2, true).unwrap(), -32768);
        assert_eq!(decode_int(&data, 1, 4, false).unwrap(), 0x1234_8000);
    }

    #[test]
    fn test_decode_int_bounds() {
        let data = [0x01, 0x02, 0x03];

        assert!(decode_int(&data, 2, 2, true).is_err());
        assert!(decode_int(&data, 10, 1, true).is_err());
        assert!(matches!(
            decode_int(&data, 0, 3, true),
            Err(Error::InvalidWidth(3))
        ));
    }

    #[test]
    fn test_read_cstring_bounded() {
        let data = b"Kestrel\0junkjunkMore";
        let mut reader = BinaryReader::new(data);

        assert_eq!(reader.read_cstring(16, TextEncoding::Latin1).unwrap(), "Kestrel");
        assert_eq!(reader.position(), 16);

        // No terminator inside the field: the whole field is the text.
        assert_eq!(reader.read_cstring(4, TextEncoding::Latin1).unwrap(), "More");
    }

    #[test]
    fn test_read_cstring_past_end() {
        let data = b"abc";
        let mut reader = BinaryReader::new(data);

        assert!(reader.read_cstring(8, TextEncoding::Latin1).is_err());
    }

    #[test]
    fn test_pascal_string() {
        let body = [3, b'R', b'o', b'o', b'k', 9, b'x'];
        let mut reader = BinaryReader::new(&body);

        assert_eq!(reader.read_pascal_string(TextEncoding::Latin1).unwrap(), "Roo");
        assert_eq!(reader.read_u8().unwrap(), b'k');
        assert!(reader.read_pascal_string(TextEncoding::Latin1).is_err());
    }

    #[test]
    fn test_read_struct() {
        let body = [0x00, 0x05, 0xFF, 0xFE, 0x01];
        let mut reader = BinaryReader::new(&body);

        assert_eq!(reader.read_struct::<[u8; 4]>().unwrap(), [0x00, 0x05, 0xFF, 0xFE]);
        assert!(matches!(
            reader.read_struct::<[u8; 2]>(),
            Err(Error::UnexpectedEof { offset: 4, needed: 2, available: 1 })
        ));
    }

    #[test]
    fn test_eof_error() {
        let data = [0x01, 0x02];
        let mut reader = BinaryReader::new(&data);

        assert!(matches!(
            reader.read_u32(),
            Err(Error::UnexpectedEof { offset: 0, needed: 4, available: 2 })
        ));
    }
}
