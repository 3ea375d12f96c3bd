//! Color, rectangle and point values embedded in records.

use std::fmt;

use crate::{BinaryReader, Result};

/// A 32-bit color stored as `A R G B` bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Build from a packed `0xAARRGGBB` word.
    #[inline]
    pub const fn from_argb(word: u32) -> Self {
        let [a, r, g, b] = word.to_be_bytes();
        Self { a, r, g, b }
    }

    /// Pack back into `0xAARRGGBB`.
    #[inline]
    pub const fn to_argb(self) -> u32 {
        u32::from_be_bytes([self.a, self.r, self.g, self.b])
    }

    /// Read four bytes at the reader position.
    pub fn read(reader: &mut BinaryReader<'_>) -> Result<Self> {
        reader.read_u32().map(Self::from_argb)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color(#{:08X})", self.to_argb())
    }
}

/// A QuickDraw rectangle: top, left, bottom, right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Rect {
    pub top: i16,
    pub left: i16,
    pub bottom: i16,
    pub right: i16,
}

impl Rect {
    /// Read four big-endian i16 values in QuickDraw order.
    pub fn read(reader: &mut BinaryReader<'_>) -> Result<Self> {
        Ok(Self {
            top: reader.read_i16()?,
            left: reader.read_i16()?,
            bottom: reader.read_i16()?,
            right: reader.read_i16()?,
        })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        i32::from(self.right) - i32::from(self.left)
    }

    #[inline]
    pub fn height(&self) -> i32 {
        i32::from(self.bottom) - i32::from(self.top)
    }
}

/// A point stored as x then y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Point {
    pub x: i16,
    pub y: i16,
}

impl Point {
    pub fn read(reader: &mut BinaryReader<'_>) -> Result<Self> {
        Ok(Self {
            x: reader.read_i16()?,
            y: reader.read_i16()?,
        })
    }
}
