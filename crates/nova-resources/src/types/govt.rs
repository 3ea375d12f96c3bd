use nova_common::{Color, TypeTag};

use crate::field::{CStr, ColorAt, FieldSpec, NONE};
use crate::flags::{FlagNames, FlagSet, FlagSpec};
use crate::ids::{GovtId, IntfId, PictId};

pub const GOVT_FLAGS: FlagNames = &[
    (0x0001, "xenophobic"),
    (0x0002, "attack_criminal_player_anywhere"),
    (0x0004, "always_attacks_player"),
    (0x0008, "immune_to_player_weapons"),
    (0x0010, "retreat_at_quarter_shields"),
    (0x0020, "no_help_from_non_allies"),
    (0x0040, "never_attacks_player"),
    (0x0080, "freighters_jam_better"),
    (0x0100, "pers_never_die"),
    (0x0200, "warships_take_bribes"),
    (0x0400, "cannot_hail"),
    (0x0800, "start_derelict"),
    (0x1000, "plunder_then_kill"),
    (0x2000, "freighters_take_bribes"),
    (0x4000, "planets_take_bribes"),
    (0x8000, "big_money_bribes"),
];

pub const GOVT_FLAGS2: FlagNames = &[
    (0x0001, "no_mercy_or_assist"),
    (0x0002, "minor_govt"),
    (0x0004, "no_boundary_effect"),
    (0x0008, "no_distress_or_greeting"),
    (0x0010, "roadside_assistance"),
    (0x0020, "no_hypergates"),
    (0x0040, "prefer_hypergates"),
    (0x0080, "prefer_wormholes"),
];

record_type! {
    /// A government and its attitude towards the player.
    pub struct Govt(TypeTag::GOVT, GovtId) {
        pub voice_type: i16 = FieldSpec::i16(0),
        pub flags: FlagSet = FlagSpec::u16(2, GOVT_FLAGS),
        pub flags2: FlagSet = FlagSpec::u16(4, GOVT_FLAGS2),
        pub scan_fine: i16 = FieldSpec::i16(6),
        pub crime_tolerance: i16 = FieldSpec::i16(8),
        pub smuggle_penalty: i16 = FieldSpec::i16(10),
        pub disable_penalty: i16 = FieldSpec::i16(12),
        pub board_penalty: i16 = FieldSpec::i16(14),
        pub kill_penalty: i16 = FieldSpec::i16(16),
        /// Present in the format but ignored by the game.
        pub shoot_penalty: i16 = FieldSpec::i16(18),
        pub initial_record: i16 = FieldSpec::i16(20),
        pub max_odds: i16 = FieldSpec::i16(22),
        pub classes: Vec<Option<i16>> = FieldSpec::i16(24).absent(NONE).array(4),
        pub allies: Vec<Option<i16>> = FieldSpec::i16(32).absent(NONE).array(4),
        pub enemies: Vec<Option<i16>> = FieldSpec::i16(40).absent(NONE).array(4),
        pub skill_mult: i16 = FieldSpec::i16(48),
        pub scan_mask: u16 = FieldSpec::u16(50),
        pub comm_name: String = CStr::new(52, 16),
        pub target_code: String = CStr::new(68, 16),
        pub require: u64 = FieldSpec::u64(84),
        pub inherent_jam: Vec<i16> = FieldSpec::i16(92).array(4),
        pub medium_name: String = CStr::new(100, 64),
        pub color: Color = ColorAt(164),
        pub ship_color: Color = ColorAt(168),
        pub interface: Option<IntfId> = FieldSpec::i16(172).absent(NONE),
        pub news_pict: Option<PictId> = FieldSpec::i16(174).absent(NONE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{DecodeContext, DecodeOptions, RecordType};
    use crate::source::RawRecord;

    #[test]
    fn test_decode_govt() {
        let mut bytes = vec![0u8; 176];
        bytes[2..4].copy_from_slice(&0x8201u16.to_be_bytes());
        bytes[5] = 0x02;
        bytes[24..32].copy_from_slice(&[0x00, 0x01, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]);
        bytes[52..63].copy_from_slice(b"Federation\0");
        bytes[68..72].copy_from_slice(b"FED\0");
        bytes[100..105].copy_from_slice(b"Feds\0");
        bytes[164..168].copy_from_slice(&0x0000_00FFu32.to_be_bytes());
        bytes[172..176].copy_from_slice(&[0xFF, 0xFF, 0x00, 0x80]);

        let record = RawRecord { tag: TypeTag::GOVT, id: 128, bytes: &bytes };
        let govt = Govt::decode(&record, &DecodeContext::new(&DecodeOptions::default())).unwrap();

        assert!(govt.flags.get("xenophobic"));
        assert!(govt.flags.get("warships_take_bribes"));
        assert!(govt.flags.get("big_money_bribes"));
        assert!(govt.flags2.get("minor_govt"));
        assert_eq!(govt.classes, vec![Some(1), None, None, None]);
        assert_eq!(govt.comm_name, "Federation");
        assert_eq!(govt.target_code, "FED");
        assert_eq!(govt.medium_name, "Feds");
        assert_eq!(govt.color.b, 0xFF);
        assert_eq!(govt.interface, None);
        assert_eq!(govt.news_pict, Some(PictId(128)));
    }
}
