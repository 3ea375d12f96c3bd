use nova_common::{Color, TypeTag};

use crate::field::{CStr, ColorAt, FieldSpec, NONE};
use crate::flags::{FlagNames, FlagSet, FlagSpec};
use crate::ids::{GovtId, MisnId, PersId, PictId, ShipId, StrId, WeapId};
use crate::mux::{AiType, SystemSelector};

pub const PERS_FLAGS: FlagNames = &[
    (0x0001, "holds_grudge"),
    (0x0002, "escape_pod_and_afterburner"),
    (0x0004, "hail_quote_with_grudge"),
    (0x0008, "hail_quote_if_liked"),
    (0x0010, "hail_quote_on_attack"),
    (0x0020, "hail_quote_when_disabled"),
    (0x0040, "replaces_special_ship"),
    (0x0080, "quote_once"),
    (0x0100, "deactivate_after_link_mission"),
    (0x0200, "offer_link_mission_on_board"),
    (0x0400, "quote_only_if_link_mission_available"),
    (0x0800, "leave_after_link_mission"),
    (0x1000, "no_offer_to_wimpy_freighter"),
    (0x2000, "no_offer_to_beefy_freighter"),
    (0x4000, "no_offer_to_warship"),
    (0x8000, "disaster_info_on_hail"),
];

code_enum! {
    /// How far away a named character notices the player.
    pub enum Aggression {
        Close = 1,
        Medium = 2,
        Far = 3,
    }
}

record_type! {
    /// A named character flying a specific ship.
    pub struct Pers(TypeTag::PERS, PersId) {
        pub link_syst: SystemSelector = FieldSpec::i16(0),
        pub govt: Option<GovtId> = FieldSpec::i16(2).absent(NONE),
        pub ai: AiType = FieldSpec::i16(4),
        pub aggression: Aggression = FieldSpec::i16(6),
        /// Shield percentage at which the ship runs away.
        pub coward: i16 = FieldSpec::i16(8),
        pub ship: ShipId = FieldSpec::i16(10),
        pub weapons: Vec<Option<WeapId>> = FieldSpec::i16(12).absent(NONE).array(4),
        pub weapon_counts: Vec<i16> = FieldSpec::i16(20).array(4),
        pub ammo_loads: Vec<i16> = FieldSpec::i16(28).array(4),
        pub credits: i32 = FieldSpec::i32(36),
        pub shield_mod: i16 = FieldSpec::i16(40),
        pub hail_pict: Option<PictId> = FieldSpec::i16(42).absent(NONE),
        pub comm_quote: Option<StrId> = FieldSpec::i16(44).absent(NONE),
        pub hail_quote: Option<StrId> = FieldSpec::i16(46).absent(NONE),
        pub link_mission: Option<MisnId> = FieldSpec::i16(48).absent(NONE),
        pub flags: FlagSet = FlagSpec::u16(50, PERS_FLAGS),
        pub active_on: String = CStr::new(52, 255),
        pub grant_class: i16 = FieldSpec::i16(308),
        pub grant_count: i16 = FieldSpec::i16(310),
        pub grant_probability: i16 = FieldSpec::i16(312),
        pub subtitle: String = CStr::new(314, 64),
        pub color: Color = ColorAt(378),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{DecodeContext, DecodeOptions, RecordType};
    use crate::source::RawRecord;

    #[test]
    fn test_decode_pers() {
        let mut bytes = vec![0u8; 382];
        bytes[0..2].copy_from_slice(&150i16.to_be_bytes());
        bytes[2..4].copy_from_slice(&[0xFF, 0xFF]);
        bytes[4..6].copy_from_slice(&4i16.to_be_bytes());
        bytes[6..8].copy_from_slice(&3i16.to_be_bytes());
        bytes[10..12].copy_from_slice(&200i16.to_be_bytes());
        bytes[12..20].copy_from_slice(&[0x00, 0x80, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]);
        bytes[36..40].copy_from_slice(&5_000i32.to_be_bytes());
        bytes[48..50].copy_from_slice(&200i16.to_be_bytes());
        bytes[51] = 0x41;
        bytes[314..322].copy_from_slice(b"Pirate\0\0");

        let record = RawRecord { tag: TypeTag::PERS, id: 128, bytes: &bytes };
        let pers = Pers::decode(&record, &DecodeContext::new(&DecodeOptions::default())).unwrap();

        // Stored at offset 0, not shared with the government.
        assert_eq!(pers.link_syst, SystemSelector::System(crate::ids::SystId(150)));
        assert_eq!(pers.govt, None);
        assert_eq!(pers.ai, AiType::Interceptor);
        assert_eq!(pers.aggression, Aggression::Far);
        assert_eq!(pers.ship, ShipId(200));
        assert_eq!(pers.weapons, vec![Some(WeapId(128)), None, None, None]);
        assert_eq!(pers.credits, 5_000);
        assert_eq!(pers.link_mission, Some(MisnId(200)));
        assert!(pers.flags.get("holds_grudge"));
        assert!(pers.flags.get("replaces_special_ship"));
        assert_eq!(pers.subtitle, "Pirate");
    }
}
