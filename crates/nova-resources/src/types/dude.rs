use nova_common::TypeTag;

use crate::field::{FieldSpec, NONE, NONE_OR_ZERO};
use crate::flags::{FlagNames, FlagSet, FlagSpec};
use crate::ids::{DudeId, GovtId, ShipId, StrId};
use crate::mux::AiType;

pub const DUDE_CARGO: FlagNames = &[
    (0x0001, "carries_food"),
    (0x0002, "carries_industrial"),
    (0x0004, "carries_medical"),
    (0x0008, "carries_luxury"),
    (0x0010, "carries_metal"),
    (0x0020, "carries_equipment"),
    (0x0040, "carries_money"),
    (0x0100, "no_hit_box_for_player"),
];

pub const DUDE_INFO: FlagNames = &[
    (0x1000, "goods_prices"),
    (0x2000, "disaster_info"),
    (0x4000, "specific_advice"),
    (0x8000, "generic_hail"),
];

/// Hail quotes for specific advice come from this `STR#` block.
pub const ADVICE_BASE: i16 = 7500;

record_type! {
    /// A population class: the mix of ships flying under one AI and government.
    pub struct Dude(TypeTag::DUDE, DudeId) {
        pub ai: AiType = FieldSpec::i16(0),
        /// `None` for independent ships.
        pub govt: Option<GovtId> = FieldSpec::i16(2).absent(NONE),
        /// What boarding a ship of this class yields.
        pub cargo: FlagSet = FlagSpec::u16(4, DUDE_CARGO),
        /// What is shown when hailed. Shares its word with `cargo`.
        pub info: FlagSet = FlagSpec::u16(4, DUDE_INFO),
        pub ship_types: Vec<Option<ShipId>> = FieldSpec::i16(8).absent(NONE_OR_ZERO).array(16),
        /// Percent chance of each entry in `ship_types`.
        pub probabilities: Vec<i16> = FieldSpec::i16(40).array(16),
    }
}

impl Dude {
    /// The `STR#` hail quotes come from, when the specific advice bit is set.
    ///
    /// The low 12 bits of the info word hold the offset from [`ADVICE_BASE`].
    pub fn specific_advice(&self) -> Option<StrId> {
        self.info
            .get("specific_advice")
            .then(|| StrId(ADVICE_BASE + (self.info.word() & 0x0FFF) as i16))
    }

    /// Ship classes paired with their probability, skipping unused slots.
    pub fn ships(&self) -> impl Iterator<Item = (ShipId, i16)> + '_ {
        self.ship_types
            .iter()
            .zip(&self.probabilities)
            .filter_map(|(ship, &p)| ship.map(|s| (s, p)))
    }
}
