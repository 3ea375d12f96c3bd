//! Field decoding primitives.
//!
//! A [`FieldSpec`] describes one scalar at a fixed offset: its width, its
//! signedness, which raw values mean "absent", and an optional unit scale.
//! Decoding always runs in the same order:
//!
//! 1. read `width` big-endian bytes at `offset`
//! 2. map declared sentinel values to [`FieldValue::Absent`]; sentinels match
//!    the raw bit pattern, so `-1` also covers `0xFFFF` in an unsigned field
//! 3. add the ID bias, then apply the unit scale; a biased ID that leaves the
//!    16-bit ID space is absent
//!
//! Text comes in two unrelated shapes which are kept apart: bounded C-strings
//! inside fixed records ([`CStr`]) and the length-prefixed string table that
//! makes up a whole `STR#` record ([`read_string_table`]).

use std::time::Duration;

use nova_common::{decode_int, BinaryReader, Color, Point, Rect, TextEncoding};

use log::debug;

use crate::Result;

/// Raw `-1` means absent.
pub const NONE: &[i64] = &[-1];
/// Raw `-1` and `0` both mean absent.
pub const NONE_OR_ZERO: &[i64] = &[-1, 0];

/// Frames per second for frame-count fields.
pub const FRAME_RATE: u32 = 30;

/// Unit conversion applied after sentinel resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scale {
    /// Game frames at the given rate.
    Frames(u32),
    /// Whole seconds.
    Seconds,
    /// Fixed point with the given divisor (10 for tenths).
    Fraction(u32),
}

/// A decoded scalar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    /// The raw value was one of the field's sentinels.
    Absent,
    Int(i64),
    Duration(Duration),
    Real(f64),
}

impl FieldValue {
    pub(crate) const fn kind(&self) -> &'static str {
        match self {
            FieldValue::Absent => "absent",
            FieldValue::Int(_) => "integer",
            FieldValue::Duration(_) => "duration",
            FieldValue::Real(_) => "real",
        }
    }
}

/// One scalar extraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub offset: usize,
    pub width: usize,
    pub signed: bool,
    pub sentinels: &'static [i64],
    pub bias: i64,
    pub scale: Option<Scale>,
}

impl FieldSpec {
    pub const fn new(offset: usize, width: usize, signed: bool) -> Self {
        Self {
            offset,
            width,
            signed,
            sentinels: &[],
            bias: 0,
            scale: None,
        }
    }

    pub const fn i8(offset: usize) -> Self {
        Self::new(offset, 1, true)
    }

    pub const fn u8(offset: usize) -> Self {
        Self::new(offset, 1, false)
    }

    pub const fn i16(offset: usize) -> Self {
        Self::new(offset, 2, true)
    }

    pub const fn u16(offset: usize) -> Self {
        Self::new(offset, 2, false)
    }

    pub const fn i32(offset: usize) -> Self {
        Self::new(offset, 4, true)
    }

    pub const fn u32(offset: usize) -> Self {
        Self::new(offset, 4, false)
    }

    pub const fn u64(offset: usize) -> Self {
        Self::new(offset, 8, false)
    }

    /// Declare the raw values that mean "absent".
    pub const fn absent(mut self, sentinels: &'static [i64]) -> Self {
        self.sentinels = sentinels;
        self
    }

    /// Add a constant to present values (resource ID offsets).
    pub const fn bias(mut self, bias: i64) -> Self {
        self.bias = bias;
        self
    }

    pub const fn scale(mut self, scale: Scale) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Shorthand for frame counts at [`FRAME_RATE`].
    pub const fn frames(self) -> Self {
        self.scale(Scale::Frames(FRAME_RATE))
    }

    /// Replicate this field `count` times, packed back to back.
    pub const fn array(self, count: usize) -> ArraySpec {
        ArraySpec {
            field: self,
            count,
            stride: self.width,
        }
    }

    /// Replicate this field `count` times at a custom stride.
    pub const fn array_strided(self, count: usize, stride: usize) -> ArraySpec {
        ArraySpec {
            field: self,
            count,
            stride,
        }
    }

    /// Same field at another offset.
    pub const fn at(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Decode the field from a record body.
    pub fn decode(&self, buffer: &[u8]) -> Result<FieldValue> {
        let raw = decode_int(buffer, self.offset, self.width, self.signed)?;
        if self.is_sentinel(raw) {
            return Ok(FieldValue::Absent);
        }
        let value = raw.wrapping_add(self.bias);
        if self.bias != 0 && i16::try_from(value).is_err() {
            debug!("biased ID {} at offset {} is out of range", value, self.offset);
            return Ok(FieldValue::Absent);
        }
        Ok(match self.scale {
            None => FieldValue::Int(value),
            Some(Scale::Frames(rate)) => FieldValue::Duration(
                Duration::from_secs_f64(value.max(0) as f64 / f64::from(rate)),
            ),
            Some(Scale::Seconds) => FieldValue::Duration(Duration::from_secs(value.max(0) as u64)),
            Some(Scale::Fraction(divisor)) => FieldValue::Real(value as f64 / f64::from(divisor)),
        })
    }

    fn is_sentinel(&self, raw: i64) -> bool {
        let shift = 64 - 8 * self.width as u32;
        let extended = (raw << shift) >> shift;
        self.sentinels.iter().any(|&s| s == raw || s == extended)
    }
}

/// A field replicated at a fixed stride, producing an ordered sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArraySpec {
    pub field: FieldSpec,
    pub count: usize,
    pub stride: usize,
}

impl ArraySpec {
    /// Continue the sequence with a second run stored elsewhere in the record.
    pub const fn then(self, rest: ArraySpec) -> SplitArray {
        SplitArray { head: self, tail: rest }
    }

    pub fn decode(&self, buffer: &[u8]) -> Result<Vec<FieldValue>> {
        (0..self.count)
            .map(|i| self.field.at(self.field.offset + i * self.stride).decode(buffer))
            .collect()
    }
}

/// An array whose elements live in two separate runs.
///
/// Ship weapon and outfit slots 1-4 sit near the start of the record while
/// slots 5-8 were appended at the end when the format grew.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitArray {
    pub head: ArraySpec,
    pub tail: ArraySpec,
}

impl SplitArray {
    pub fn decode(&self, buffer: &[u8]) -> Result<Vec<FieldValue>> {
        let mut values = self.head.decode(buffer)?;
        values.extend(self.tail.decode(buffer)?);
        Ok(values)
    }
}

/// A NUL-terminated string in a field of at most `max` bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CStr {
    pub offset: usize,
    pub max: usize,
}

impl CStr {
    pub const fn new(offset: usize, max: usize) -> Self {
        Self { offset, max }
    }

    pub fn decode(&self, buffer: &[u8], encoding: TextEncoding) -> Result<String> {
        Ok(BinaryReader::new_at(buffer, self.offset).read_cstring(self.max, encoding)?)
    }
}

/// An ARGB color word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorAt(pub usize);

impl ColorAt {
    pub fn decode(&self, buffer: &[u8]) -> Result<Color> {
        Ok(Color::read(&mut BinaryReader::new_at(buffer, self.0))?)
    }
}

/// A QuickDraw rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectAt(pub usize);

impl RectAt {
    pub fn decode(&self, buffer: &[u8]) -> Result<Rect> {
        Ok(Rect::read(&mut BinaryReader::new_at(buffer, self.0))?)
    }
}

/// An (x, y) pair of i16.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointAt(pub usize);

impl PointAt {
    pub fn decode(&self, buffer: &[u8]) -> Result<Point> {
        Ok(Point::read(&mut BinaryReader::new_at(buffer, self.0))?)
    }
}

/// Decode a length-prefixed string table.
///
/// The body starts with a 16-bit entry count `N`, followed by `N` entries of
/// one length byte and that many text bytes. Decoding stops right after entry
/// `N`; any trailing bytes are ignored. Returns the strings and the number of
/// bytes consumed. A negative count reads as an empty table.
pub fn read_string_table(buffer: &[u8], encoding: TextEncoding) -> Result<(Vec<String>, usize)> {
    let mut reader = BinaryReader::new(buffer);
    let declared = reader.read_i16()?.max(0) as usize;

    let mut strings = Vec::with_capacity(declared);
    for entry in 0..declared {
        let string = reader.read_pascal_string(encoding).map_err(|_| {
            nova_common::Error::StringTableTruncated {
                entry,
                declared,
                available: reader.remaining(),
            }
        })?;
        strings.push(string);
    }

    Ok((strings, reader.position()))
}
