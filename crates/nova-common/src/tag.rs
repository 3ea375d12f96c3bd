//! Four-character resource type codes.
//!
//! Every record in a data file is filed under a type tag such as `shïp` or
//! `wëap`. The tags are raw Mac OS Roman bytes, so the accented letters are
//! single bytes (`ï` is `0x95`, `ë` is `0x91`).

use std::fmt;
use std::str::FromStr;

use crate::text::TextEncoding;
use crate::Error;

/// A four-byte resource type code.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeTag([u8; 4]);

impl TypeTag {
    pub const BOOM: Self = Self(*b"b\x9a\x9am");
    pub const CHAR: Self = Self(*b"ch\x8ar");
    pub const CICN: Self = Self(*b"cicn");
    pub const COLR: Self = Self(*b"c\x9alr");
    pub const CRON: Self = Self(*b"cr\x9an");
    pub const DESC: Self = Self(*b"d\x91sc");
    pub const DUDE: Self = Self(*b"d\x9fde");
    pub const FLET: Self = Self(*b"fl\x91t");
    pub const GOVT: Self = Self(*b"g\x9avt");
    pub const INTF: Self = Self(*b"\x95ntf");
    pub const JUNK: Self = Self(*b"j\x9fnk");
    pub const MISN: Self = Self(*b"m\x95sn");
    pub const NEBU: Self = Self(*b"n\x91bu");
    pub const OOPS: Self = Self(*b"\x9aops");
    pub const OUTF: Self = Self(*b"o\x9ftf");
    pub const PERS: Self = Self(*b"p\x91rs");
    pub const PICT: Self = Self(*b"PICT");
    pub const RANK: Self = Self(*b"r\x8ank");
    pub const RLED: Self = Self(*b"rl\x91D");
    pub const ROID: Self = Self(*b"r\x9aid");
    pub const SHAN: Self = Self(*b"sh\x8an");
    pub const SHIP: Self = Self(*b"sh\x95p");
    pub const SND: Self = Self(*b"snd ");
    pub const SPIN: Self = Self(*b"sp\x95n");
    pub const SPOB: Self = Self(*b"sp\x9ab");
    pub const STRA: Self = Self(*b"STR#");
    pub const SYST: Self = Self(*b"s\xd8st");
    pub const WEAP: Self = Self(*b"w\x91ap");
    /// Pilot save resources (IDs 128 and 129).
    pub const PILOT: Self = Self(*b"Np\x95L");

    /// Create a tag from its raw bytes.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// The tag as a big-endian 32-bit code (`NpïL` is `0x4E70954C`).
    #[inline]
    pub const fn to_u32(self) -> u32 {
        u32::from_be_bytes(self.0)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&TextEncoding::MacRoman.decode(&self.0))
    }
}

impl fmt::Debug for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeTag({:?})", self.to_string())
    }
}

impl FromStr for TypeTag {
    type Err = Error;

    /// Parse the Unicode spelling of a tag (`"shïp"`, `"snd "`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = TextEncoding::MacRoman.encode(s);
        let bytes: [u8; 4] = bytes
            .try_into()
            .map_err(|_| Error::InvalidTag(s.to_string()))?;
        Ok(Self(bytes))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TypeTag {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_roundtrip() {
        assert_eq!(TypeTag::SHIP.to_string(), "shïp");
        assert_eq!(TypeTag::SYST.to_string(), "sÿst");
        assert_eq!("wëap".parse::<TypeTag>().unwrap(), TypeTag::WEAP);
        assert_eq!("snd ".parse::<TypeTag>().unwrap(), TypeTag::SND);
    }

    #[test]
    fn test_pilot_code() {
        assert_eq!(TypeTag::PILOT.to_u32(), 0x4E70954C);
    }

    #[test]
    fn test_invalid_length() {
        assert!("snd".parse::<TypeTag>().is_err());
        assert!("ships".parse::<TypeTag>().is_err());
    }
}
