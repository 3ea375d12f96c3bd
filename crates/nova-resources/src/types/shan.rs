use std::time::Duration;

use nova_common::TypeTag;

use crate::field::{FieldSpec, NONE_OR_ZERO};
use crate::flags::{FlagNames, FlagSet, FlagSpec};
use crate::ids::{RleId, ShanId};

pub const SHAN_FLAGS: FlagNames = &[
    (0x0001, "banking"),
    (0x0002, "animated_parts"),
    (0x0004, "key_carried_frames"),
    (0x0008, "sequence"),
    (0x0010, "stop_animation_when_disabled"),
    (0x0020, "hide_alt_when_disabled"),
    (0x0040, "hide_lights_when_disabled"),
    (0x0080, "unfold_when_firing"),
    (0x0100, "adjust_for_skew"),
];

code_enum! {
    pub enum BlinkMode {
        Off = -1,
        Ignored = 0,
        SquareWave = 1,
        TriangleWave = 2,
        RandomPulse = 3,
    }
}

record_type! {
    /// Sprite layers and weapon mount points of a ship class.
    ///
    /// Image fields hold `rlëD` IDs (or `PICT` IDs for paired sprite/mask
    /// graphics). Unused optional layers are stored as 0 or -1.
    pub struct Shan(TypeTag::SHAN, ShanId) {
        pub base_image: RleId = FieldSpec::i16(0),
        pub base_mask: Option<RleId> = FieldSpec::i16(2).absent(NONE_OR_ZERO),
        pub base_sets: i16 = FieldSpec::i16(4),
        pub base_width: i16 = FieldSpec::i16(6),
        pub base_height: i16 = FieldSpec::i16(8),
        /// 0 (opaque) to 32 (invisible).
        pub base_transparency: i16 = FieldSpec::i16(10),
        pub alt_image: Option<RleId> = FieldSpec::i16(12).absent(NONE_OR_ZERO),
        pub alt_mask: Option<RleId> = FieldSpec::i16(14).absent(NONE_OR_ZERO),
        pub alt_sets: i16 = FieldSpec::i16(16),
        pub alt_width: i16 = FieldSpec::i16(18),
        pub alt_height: i16 = FieldSpec::i16(20),
        pub glow_image: Option<RleId> = FieldSpec::i16(22).absent(NONE_OR_ZERO),
        pub glow_mask: Option<RleId> = FieldSpec::i16(24).absent(NONE_OR_ZERO),
        pub glow_width: i16 = FieldSpec::i16(26),
        pub glow_height: i16 = FieldSpec::i16(28),
        pub light_image: Option<RleId> = FieldSpec::i16(30).absent(NONE_OR_ZERO),
        pub light_mask: Option<RleId> = FieldSpec::i16(32).absent(NONE_OR_ZERO),
        pub light_width: i16 = FieldSpec::i16(34),
        pub light_height: i16 = FieldSpec::i16(36),
        pub weapon_image: Option<RleId> = FieldSpec::i16(38).absent(NONE_OR_ZERO),
        pub weapon_mask: Option<RleId> = FieldSpec::i16(40).absent(NONE_OR_ZERO),
        pub weapon_width: i16 = FieldSpec::i16(42),
        pub weapon_height: i16 = FieldSpec::i16(44),
        pub flags: FlagSet = FlagSpec::u16(46, SHAN_FLAGS),
        pub anim_delay: Duration = FieldSpec::u16(48).frames(),
        pub weapon_decay: i16 = FieldSpec::i16(50),
        pub frames_per_rotation: i16 = FieldSpec::i16(52),
        pub blink_mode: BlinkMode = FieldSpec::i16(54),
        pub blink_values: Vec<i16> = FieldSpec::i16(56).array(4),
        pub shield_image: Option<RleId> = FieldSpec::i16(64).absent(NONE_OR_ZERO),
        pub shield_mask: Option<RleId> = FieldSpec::i16(66).absent(NONE_OR_ZERO),
        pub shield_width: i16 = FieldSpec::i16(68),
        pub shield_height: i16 = FieldSpec::i16(70),
        pub gun_x: Vec<i16> = FieldSpec::i16(72).array(4),
        pub gun_y: Vec<i16> = FieldSpec::i16(80).array(4),
        pub turret_x: Vec<i16> = FieldSpec::i16(88).array(4),
        pub turret_y: Vec<i16> = FieldSpec::i16(96).array(4),
        pub guided_x: Vec<i16> = FieldSpec::i16(104).array(4),
        pub guided_y: Vec<i16> = FieldSpec::i16(112).array(4),
        pub beam_x: Vec<i16> = FieldSpec::i16(120).array(4),
        pub beam_y: Vec<i16> = FieldSpec::i16(128).array(4),
        pub up_compress_x: i16 = FieldSpec::i16(136),
        pub up_compress_y: i16 = FieldSpec::i16(138),
        pub down_compress_x: i16 = FieldSpec::i16(140),
        pub down_compress_y: i16 = FieldSpec::i16(142),
        pub gun_z: Vec<i16> = FieldSpec::i16(144).array(4),
        pub turret_z: Vec<i16> = FieldSpec::i16(152).array(4),
        pub guided_z: Vec<i16> = FieldSpec::i16(160).array(4),
        pub beam_z: Vec<i16> = FieldSpec::i16(168).array(4),
    }
}
