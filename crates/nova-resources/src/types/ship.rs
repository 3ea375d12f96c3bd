use nova_common::TypeTag;

use crate::field::{CStr, FieldSpec, SplitArray, NONE, NONE_OR_ZERO};
use crate::flags::{FlagNames, FlagSet, FlagSpec};
use crate::ids::{BoomId, OutfId, ShipId, WeapId};
use crate::mux::{AiType, ExplosionRef, InherentGovt};

pub const SHIP_FLAGS: FlagNames = &[
    (0x0001, "slow_jump"),
    (0x0002, "semi_fast_jump"),
    (0x0004, "fast_jump"),
    (0x0008, "fuel_regen"),
    (0x0010, "disabled_at_10_percent"),
    (0x0020, "afterburner_at_advanced_rating"),
    (0x0040, "ai_has_afterburner"),
    (0x0100, "show_armor_percent"),
    (0x0200, "no_target_stats"),
    (0x0400, "planet_type"),
    (0x1000, "turret_blind_front"),
    (0x2000, "turret_blind_sides"),
    (0x4000, "turret_blind_rear"),
    (0x8000, "escape_ship"),
];

pub const SHIP_FLAGS2: FlagNames = &[
    (0x0001, "swarming"),
    (0x0002, "standoff_attacks"),
    (0x0004, "untargetable"),
    (0x0008, "point_defense_target"),
    (0x0010, "no_fighter_voices"),
    (0x0020, "jump_without_slowing"),
    (0x0040, "inertialess"),
    (0x0080, "ai_dock_without_ammo"),
    (0x0100, "ai_cloak_on_reload"),
    (0x0200, "ai_cloak_on_retreat"),
    (0x0400, "ai_cloak_on_hyperspace"),
    (0x0800, "ai_cloak_while_flying"),
    (0x1000, "ai_uncloak_near_target"),
    (0x2000, "ai_cloak_when_docking"),
    (0x4000, "ai_cloak_under_attack"),
];

pub const SHIP_FLAGS3: FlagNames = &[
    (0x0001, "destroys_asteroids"),
    (0x0002, "scoops_debris"),
    (0x0010, "ignores_gravity"),
    (0x0020, "ignores_deadly_stellars"),
    (0x0040, "turret_shots_above"),
    (0x0100, "hide_unless_available"),
    (0x0200, "hide_unless_required"),
    (0x4000, "hide_higher_same_weight"),
];

code_enum! {
    /// How an escort of this class is treated.
    pub enum EscortType {
        /// Decided at runtime.
        Auto = -1,
        Fighter = 0,
        Medium = 1,
        Warship = 2,
        Freighter = 3,
    }
}

// Slots 1-4 live near the start of the record, 5-8 were appended later.
const WEAPONS: SplitArray = FieldSpec::i16(18)
    .absent(NONE_OR_ZERO)
    .array(4)
    .then(FieldSpec::i16(1742).absent(NONE_OR_ZERO).array(4));
const WEAPON_COUNTS: SplitArray = FieldSpec::i16(26).array(4).then(FieldSpec::i16(1750).array(4));
const AMMO_LOADS: SplitArray = FieldSpec::i16(34).array(4).then(FieldSpec::i16(1758).array(4));
const ITEMS: SplitArray = FieldSpec::i16(78)
    .absent(NONE_OR_ZERO)
    .array(4)
    .then(FieldSpec::i16(880).absent(NONE_OR_ZERO).array(4));
const ITEM_COUNTS: SplitArray = FieldSpec::i16(86).array(4).then(FieldSpec::i16(888).array(4));

record_type! {
    /// A ship class.
    pub struct Ship(TypeTag::SHIP, ShipId) {
        pub holds: i16 = FieldSpec::i16(0),
        pub shield: i16 = FieldSpec::i16(2),
        pub acceleration: i16 = FieldSpec::i16(4),
        pub speed: i16 = FieldSpec::i16(6),
        pub maneuver: i16 = FieldSpec::i16(8),
        pub fuel: i16 = FieldSpec::i16(10),
        pub free_mass: i16 = FieldSpec::i16(12),
        pub armor: i16 = FieldSpec::i16(14),
        pub shield_recharge: i16 = FieldSpec::i16(16),
        pub weapons: Vec<Option<WeapId>> = WEAPONS,
        pub weapon_counts: Vec<i16> = WEAPON_COUNTS,
        pub ammo_loads: Vec<i16> = AMMO_LOADS,
        pub max_guns: i16 = FieldSpec::i16(42),
        pub max_turrets: i16 = FieldSpec::i16(44),
        pub tech_level: i16 = FieldSpec::i16(46),
        pub cost: i32 = FieldSpec::i32(48),
        pub death_delay: i16 = FieldSpec::i16(52),
        pub armor_recharge: i16 = FieldSpec::i16(54),
        /// Explosion when the ship starts breaking up.
        pub explosion: Option<BoomId> = FieldSpec::i16(56).absent(NONE).bias(128),
        /// Final explosion.
        pub final_explosion: ExplosionRef = FieldSpec::i16(58),
        pub display_weight: i16 = FieldSpec::i16(60),
        pub mass: i16 = FieldSpec::i16(62),
        pub length: i16 = FieldSpec::i16(64),
        pub inherent_ai: AiType = FieldSpec::i16(66),
        pub crew: i16 = FieldSpec::i16(68),
        pub strength: i16 = FieldSpec::i16(70),
        pub inherent_govt: InherentGovt = FieldSpec::i16(72),
        pub flags: FlagSet = FlagSpec::u16(74, SHIP_FLAGS),
        pub pod_count: i16 = FieldSpec::i16(76),
        pub default_items: Vec<Option<OutfId>> = ITEMS,
        pub item_counts: Vec<i16> = ITEM_COUNTS,
        pub fuel_regen: i16 = FieldSpec::i16(94),
        pub skill_var: i16 = FieldSpec::i16(96),
        pub flags2: FlagSet = FlagSpec::u16(98, SHIP_FLAGS2),
        pub contribute: u64 = FieldSpec::u64(100),
        pub availability: String = CStr::new(108, 255),
        pub appear_on: String = CStr::new(363, 255),
        pub on_purchase: String = CStr::new(618, 255),
        pub deionize: i16 = FieldSpec::i16(874),
        pub ionize_max: i16 = FieldSpec::i16(876),
        pub key_carried: Option<ShipId> = FieldSpec::i16(878).absent(NONE_OR_ZERO),
        pub require: u64 = FieldSpec::u64(896),
        pub buy_random: i16 = FieldSpec::i16(904),
        pub hire_random: i16 = FieldSpec::i16(906),
        pub on_capture: String = CStr::new(908, 255),
        pub on_retire: String = CStr::new(1163, 255),
        pub short_name: String = CStr::new(1486, 64),
        pub comm_name: String = CStr::new(1550, 32),
        pub long_name: String = CStr::new(1582, 128),
        pub movie_file: String = CStr::new(1710, 32),
        pub subtitle: String = CStr::new(1766, 64),
        pub flags3: FlagSet = FlagSpec::u16(1830, SHIP_FLAGS3),
        pub upgrade_to: Option<ShipId> = FieldSpec::i16(1832).absent(NONE_OR_ZERO),
        pub escort_upgrade_cost: i32 = FieldSpec::i32(1834),
        pub escort_sell_value: i32 = FieldSpec::i32(1838),
        pub escort_type: EscortType = FieldSpec::i16(1842),
    }
}

impl Ship {
    /// Installed weapons with their counts and ammunition.
    pub fn armament(&self) -> impl Iterator<Item = (WeapId, i16, i16)> + '_ {
        self.weapons
            .iter()
            .zip(&self.weapon_counts)
            .zip(&self.ammo_loads)
            .filter_map(|((weapon, &count), &ammo)| weapon.map(|w| (w, count, ammo)))
    }

    /// Default outfits with their counts.
    pub fn outfits(&self) -> impl Iterator<Item = (OutfId, i16)> + '_ {
        self.default_items
            .iter()
            .zip(&self.item_counts)
            .filter_map(|(item, &count)| item.map(|o| (o, count)))
    }
}
