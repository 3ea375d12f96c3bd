use std::time::Duration;

use nova_common::TypeTag;

use crate::field::{CStr, FieldSpec, SplitArray, NONE, NONE_OR_ZERO};
use crate::flags::{FlagNames, FlagSet, FlagSpec};
use crate::ids::{DudeId, GovtId, PictId, RleId, SndId, SpinId, SpobId, WeapId};
use crate::mux::{Commodity, DefenseFleet, ExplosionRef};

pub const SPOB_FLAGS: FlagNames = &[
    (0x0000_0001, "can_land"),
    (0x0000_0002, "commodity_exchange"),
    (0x0000_0004, "outfitter"),
    (0x0000_0008, "shipyard"),
    (0x0000_0010, "station"),
    (0x0000_0020, "uninhabited"),
    (0x0000_0040, "bar"),
    (0x0000_0080, "destroy_to_land"),
];

pub const SPOB_FLAGS2: FlagNames = &[
    (0x0001, "first_frame_between_frames"),
    (0x0002, "random_frames"),
    (0x0010, "sound_loop"),
    (0x0020, "always_dominated"),
    (0x0040, "starts_destroyed"),
    (0x0080, "animated_when_destroyed"),
    (0x0100, "deadly"),
    (0x0200, "attack_only_when_provoked"),
    (0x0400, "buyback_any_tech_level"),
    (0x1000, "hypergate"),
    (0x2000, "wormhole"),
];

/// Special tech levels 1-3 sit early in the record, 4-8 at the end.
const SPECIAL_TECH: SplitArray = FieldSpec::i16(14)
    .absent(NONE_OR_ZERO)
    .array(3)
    .then(FieldSpec::i16(1092).absent(NONE_OR_ZERO).array(5));

/// A stellar's stance on one commodity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum PriceLevel {
    NotTraded,
    Low,
    Medium,
    High,
}

record_type! {
    /// A planet or station.
    pub struct Spob(TypeTag::SPOB, SpobId) {
        pub x: i16 = FieldSpec::i16(0),
        pub y: i16 = FieldSpec::i16(2),
        /// Graphic type; sprite and landscape IDs are derived from it.
        pub graphic: i16 = FieldSpec::i16(4),
        pub flags: FlagSet = FlagSpec::u32(6, SPOB_FLAGS),
        pub tribute: i16 = FieldSpec::i16(10),
        pub tech_level: i16 = FieldSpec::i16(12),
        pub special_tech: Vec<Option<i16>> = SPECIAL_TECH,
        pub govt: Option<GovtId> = FieldSpec::i16(20).absent(NONE),
        pub min_status: i16 = FieldSpec::i16(22),
        pub custom_pict: Option<PictId> = FieldSpec::i16(24).absent(NONE_OR_ZERO),
        pub custom_sound: Option<SndId> = FieldSpec::i16(26).absent(NONE_OR_ZERO),
        pub defense_dude: Option<DudeId> = FieldSpec::i16(28).absent(NONE_OR_ZERO),
        pub defense_count: DefenseFleet = FieldSpec::i16(30),
        pub flags2: FlagSet = FlagSpec::u16(32, SPOB_FLAGS2),
        pub anim_delay: Duration = FieldSpec::u16(34).frames(),
        pub frame0_bias: i16 = FieldSpec::i16(36),
        pub hyper_links: Vec<Option<SpobId>> = FieldSpec::i16(38).absent(NONE_OR_ZERO).array(8),
        pub on_dominate: String = CStr::new(54, 255),
        pub on_release: String = CStr::new(309, 255),
        pub fee: i32 = FieldSpec::i32(564),
        pub gravity: i16 = FieldSpec::i16(568),
        pub weapon: Option<WeapId> = FieldSpec::i16(570).absent(NONE_OR_ZERO),
        pub strength: i32 = FieldSpec::i32(572),
        pub dead_graphic: i16 = FieldSpec::i16(576),
        pub dead_time: i16 = FieldSpec::i16(578),
        pub explosion: ExplosionRef = FieldSpec::i16(580),
        pub on_destroy: String = CStr::new(582, 255),
        pub on_regen: String = CStr::new(837, 255),
    }
}

impl Spob {
    /// Price level for a commodity, from its nibble in the top of the
    /// flag word. Food occupies bits 28-30, equipment bits 8-10.
    pub fn price(&self, commodity: Commodity) -> PriceLevel {
        let shift = match commodity {
            Commodity::Food => 28,
            Commodity::Industrial => 24,
            Commodity::Medical => 20,
            Commodity::Luxury => 16,
            Commodity::Metal => 12,
            Commodity::Equipment => 8,
            Commodity::Unspecified(_) => return PriceLevel::NotTraded,
        };
        let nibble = (self.flags.word() >> shift) & 0x7;
        if nibble & 0x4 != 0 {
            PriceLevel::High
        } else if nibble & 0x2 != 0 {
            PriceLevel::Medium
        } else if nibble & 0x1 != 0 {
            PriceLevel::Low
        } else {
            PriceLevel::NotTraded
        }
    }

    /// Commodities this stellar trades, with their price levels.
    pub fn market(&self) -> impl Iterator<Item = (Commodity, PriceLevel)> + '_ {
        Commodity::ALL
            .into_iter()
            .map(|c| (c, self.price(c)))
            .filter(|&(_, level)| level != PriceLevel::NotTraded)
    }

    pub fn sprite(&self) -> SpinId {
        SpinId(self.graphic.wrapping_add(SpinId::STELLAR_BASE))
    }

    /// The landing screen picture.
    pub fn landscape(&self) -> RleId {
        RleId(self.graphic.wrapping_add(RleId::SPOB_BASE))
    }
}
