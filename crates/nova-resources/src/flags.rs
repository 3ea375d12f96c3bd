//! Flag word decoding.
//!
//! A [`FlagSpec`] names the bits of one word. Several specs may point at the
//! same offset: the dude record packs its cargo flags and its hail info types
//! into one 16-bit word. Each spec decodes independently from the same
//! underlying bytes.

use std::fmt;

use nova_common::decode_int;

use crate::Result;

/// `(mask, name)` pairs in display order.
pub type FlagNames = &'static [(u64, &'static str)];

/// Where a flag word lives and what its bits mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagSpec {
    pub offset: usize,
    pub width: usize,
    pub names: FlagNames,
}

impl FlagSpec {
    pub const fn new(offset: usize, width: usize, names: FlagNames) -> Self {
        Self {
            offset,
            width,
            names,
        }
    }

    pub const fn u16(offset: usize, names: FlagNames) -> Self {
        Self::new(offset, 2, names)
    }

    pub const fn u32(offset: usize, names: FlagNames) -> Self {
        Self::new(offset, 4, names)
    }

    pub fn decode(&self, buffer: &[u8]) -> Result<FlagSet> {
        let word = decode_int(buffer, self.offset, self.width, false)? as u64;
        Ok(FlagSet::new(word, self.names))
    }
}

/// A decoded flag word together with its name table.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct FlagSet {
    word: u64,
    names: FlagNames,
}

impl FlagSet {
    pub const fn new(word: u64, names: FlagNames) -> Self {
        Self { word, names }
    }

    /// The raw word, including bits with no name.
    #[inline]
    pub const fn word(&self) -> u64 {
        self.word
    }

    /// True when every bit of `mask` is set.
    #[inline]
    pub const fn contains(&self, mask: u64) -> bool {
        self.word & mask == mask
    }

    /// Look a flag up by name. Unknown names read as unset.
    pub fn get(&self, name: &str) -> bool {
        self.names
            .iter()
            .find(|(_, n)| *n == name)
            .is_some_and(|&(mask, _)| self.contains(mask))
    }

    /// Every named flag with its state, in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, bool)> + '_ {
        self.names
            .iter()
            .map(move |&(mask, name)| (name, self.contains(mask)))
    }

    /// Names of the flags that are set.
    pub fn set_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.iter().filter(|(_, set)| *set).map(|(name, _)| name)
    }
}

impl fmt::Debug for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.set_names()).finish()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FlagSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.set_names())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARGO: FlagNames = &[(0x0001, "food"), (0x0002, "industrial"), (0x0100, "no_hit_box")];
    const INFO: FlagNames = &[(0x1000, "goods_prices"), (0x4000, "specific_advice")];

    #[test]
    fn test_named_flags() {
        let flags = FlagSpec::u16(0, CARGO).decode(&[0x01, 0x01]).unwrap();

        assert!(flags.get("food"));
        assert!(!flags.get("industrial"));
        assert!(flags.get("no_hit_box"));
        assert!(!flags.get("missing"));
        assert_eq!(flags.set_names().collect::<Vec<_>>(), vec!["food", "no_hit_box"]);
    }

    #[test]
    fn test_multi_bit_mask_needs_all_bits() {
        let flags = FlagSet::new(0b0100, &[]);

        assert!(!flags.contains(0b0110));
        assert!(flags.contains(0b0100));
    }

    #[test]
    fn test_overlapping_specs_share_word() {
        let data = [0x41, 0x03];
        let cargo = FlagSpec::u16(0, CARGO).decode(&data).unwrap();
        let info = FlagSpec::u16(0, INFO).decode(&data).unwrap();

        assert_eq!(cargo.word(), info.word());
        assert!(cargo.get("food") && cargo.get("industrial"));
        assert!(info.get("specific_advice"));
        assert!(!info.get("goods_prices"));
    }

    #[test]
    fn test_decode_is_pure() {
        let data = [0x12, 0x34, 0x56, 0x78];
        let spec = FlagSpec::u32(0, CARGO);

        assert_eq!(spec.decode(&data).unwrap(), spec.decode(&data).unwrap());
    }
}
