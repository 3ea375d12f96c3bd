use nova_common::{Color, TypeTag};

use crate::field::{CStr, ColorAt, FieldSpec, NONE, NONE_OR_ZERO};
use crate::flags::{FlagNames, FlagSet, FlagSpec};
use crate::ids::{DudeId, FletId, GovtId, PersId, RoidId, SpobId, StrId, SystId};

/// Bit `n` enables asteroid type `128 + n`.
pub const ASTEROID_FLAGS: FlagNames = &[
    (0x0001, "small_metal"),
    (0x0002, "medium_metal"),
    (0x0004, "large_metal"),
    (0x0008, "huge_metal"),
    (0x0010, "small_ice"),
    (0x0020, "medium_ice"),
    (0x0040, "large_ice"),
    (0x0080, "huge_ice"),
    (0x0100, "small_dust"),
    (0x0200, "medium_dust"),
    (0x0400, "large_dust"),
    (0x0800, "huge_dust"),
    (0x1000, "small_crystal"),
    (0x2000, "medium_crystal"),
    (0x4000, "large_crystal"),
    (0x8000, "huge_crystal"),
];

record_type! {
    /// A star system.
    pub struct Syst(TypeTag::SYST, SystId) {
        pub x: i16 = FieldSpec::i16(0),
        pub y: i16 = FieldSpec::i16(2),
        /// Hyperspace links.
        pub links: Vec<Option<SystId>> = FieldSpec::i16(4).absent(NONE_OR_ZERO).array(16),
        pub stellars: Vec<Option<SpobId>> = FieldSpec::i16(36).absent(NONE_OR_ZERO).array(16),
        pub dude_types: Vec<Option<DudeId>> = FieldSpec::i16(68).absent(NONE_OR_ZERO).array(8),
        pub probabilities: Vec<i16> = FieldSpec::i16(84).array(8),
        pub average_ships: i16 = FieldSpec::i16(100),
        pub govt: Option<GovtId> = FieldSpec::i16(102).absent(NONE),
        /// Shown on arrival; index 1 of the referenced string list.
        pub message: Option<StrId> = FieldSpec::i16(104).absent(NONE_OR_ZERO),
        pub asteroid_count: i16 = FieldSpec::i16(106),
        pub interference: i16 = FieldSpec::i16(108),
        pub persons: Vec<Option<PersId>> = FieldSpec::i16(110).absent(NONE_OR_ZERO).array(8),
        pub background: Color = ColorAt(142),
        pub murk: i16 = FieldSpec::i16(146),
        pub asteroid_types: FlagSet = FlagSpec::u16(148, ASTEROID_FLAGS),
        pub visibility: String = CStr::new(150, 255),
        pub reinforce_fleet: Option<FletId> = FieldSpec::i16(406).absent(NONE_OR_ZERO),
        /// Days between reinforcement checks.
        pub reinforce_time: i16 = FieldSpec::i16(408),
        pub reinforce_interval: i16 = FieldSpec::i16(410),
    }
}

impl Syst {
    /// Asteroid types that may spawn here.
    pub fn roids(&self) -> impl Iterator<Item = RoidId> + '_ {
        (0..16)
            .filter(|bit| self.asteroid_types.contains(1 << bit))
            .map(|bit| RoidId(128 + bit as i16))
    }

    pub fn linked(&self) -> impl Iterator<Item = SystId> + '_ {
        self.links.iter().flatten().copied()
    }

    /// True when no control bit expression hides the system.
    pub fn always_visible(&self) -> bool {
        self.visibility.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{DecodeContext, DecodeOptions, RecordType};
    use crate::source::RawRecord;

    #[test]
    fn test_decode_syst() {
        let mut bytes = vec![0u8; 412];
        bytes[0..2].copy_from_slice(&300i16.to_be_bytes());
        bytes[2..4].copy_from_slice(&(-40i16).to_be_bytes());
        bytes[4..6].copy_from_slice(&129i16.to_be_bytes());
        bytes[6..8].copy_from_slice(&(-1i16).to_be_bytes());
        bytes[8..10].copy_from_slice(&140i16.to_be_bytes());
        bytes[36..38].copy_from_slice(&128i16.to_be_bytes());
        bytes[102..104].copy_from_slice(&(-1i16).to_be_bytes());
        bytes[142..146].copy_from_slice(&[0xFF, 0x10, 0x00, 0x40]);
        bytes[148..150].copy_from_slice(&0x8011u16.to_be_bytes());
        bytes[150..155].copy_from_slice(b"!b12\0");

        let record = RawRecord { tag: TypeTag::SYST, id: 128, bytes: &bytes };
        let syst = Syst::decode(&record, &DecodeContext::new(&DecodeOptions::default())).unwrap();

        assert_eq!((syst.x, syst.y), (300, -40));
        assert_eq!(syst.linked().collect::<Vec<_>>(), vec![SystId(129), SystId(140)]);
        assert_eq!(syst.stellars[0], Some(SpobId(128)));
        assert_eq!(syst.govt, None);
        assert_eq!(syst.background, Color { a: 0xFF, r: 0x10, g: 0x00, b: 0x40 });
        assert_eq!(
            syst.roids().collect::<Vec<_>>(),
            vec![RoidId(128), RoidId(132), RoidId(143)]
        );
        assert!(syst.asteroid_types.get("huge_crystal"));
        assert_eq!(syst.visibility, "!b12");
        assert!(!syst.always_visible());
        assert_eq!(syst.reinforce_fleet, None);
    }
}
