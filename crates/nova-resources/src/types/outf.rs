use nova_common::TypeTag;

use crate::field::{CStr, FieldSpec, SplitArray};
use crate::flags::{FlagNames, FlagSet, FlagSpec};
use crate::ids::OutfId;
use crate::mux::GovtScope;

pub const OUTF_FLAGS: FlagNames = &[
    (0x0001, "fixed_gun"),
    (0x0002, "turret"),
    (0x0004, "persistent"),
    (0x0008, "cannot_sell"),
    (0x0010, "remove_after_buy"),
    (0x0020, "persistent_on_mission_ship_change"),
    (0x0100, "hide_unless_required_or_owned"),
    (0x0200, "price_scales_with_mass"),
    (0x0400, "mass_scales_with_mass"),
    (0x0800, "sell_anywhere"),
    (0x1000, "hide_higher_same_weight"),
    (0x2000, "rank_outfit"),
    (0x4000, "hide_unless_available_or_owned"),
];

code_enum! {
    /// What an outfit modifies. The value's meaning depends on the kind.
    pub enum ModType {
        Unused = 0,
        Weapon = 1,
        CargoSpace = 2,
        Ammunition = 3,
        ShieldCapacity = 4,
        ShieldRecharge = 5,
        Armor = 6,
        Acceleration = 7,
        Speed = 8,
        TurnRate = 9,
        EscapePod = 11,
        FuelCapacity = 12,
        DensityScanner = 13,
        Iff = 14,
        Afterburner = 15,
        Map = 16,
        CloakingDevice = 17,
        FuelScoop = 18,
        AutoRefueller = 19,
        AutoEject = 20,
        CleanLegalRecord = 21,
        HyperspaceSpeed = 22,
        HyperspaceDistance = 23,
        InterferenceMod = 24,
        Marines = 25,
        IncreaseMaximum = 27,
        MurkMod = 28,
        ArmorRecharge = 29,
        CloakScanner = 30,
        MiningScoop = 31,
        MultiJump = 32,
        Jamming1 = 33,
        Jamming2 = 34,
        Jamming3 = 35,
        Jamming4 = 36,
        FastJump = 37,
        InertialDampener = 38,
        IonDissipater = 39,
        IonAbsorber = 40,
        GravityResistance = 41,
        DeadlyStellarResistance = 42,
        Paint = 43,
        ReinforcementInhibitor = 44,
        MaxGuns = 45,
        MaxTurrets = 46,
        Bomb = 47,
        IffScrambler = 48,
        RepairSystem = 49,
        NonLethalBomb = 50,
    }
}

// Modifier 1 sits before the flags; 2-4 follow the price.
const MOD_TYPES: SplitArray =
    FieldSpec::i16(6).array(1).then(FieldSpec::i16(18).array_strided(3, 4));
const MOD_VALUES: SplitArray =
    FieldSpec::i16(8).array(1).then(FieldSpec::i16(20).array_strided(3, 4));

record_type! {
    /// An item sold in the outfitter.
    pub struct Outf(TypeTag::OUTF, OutfId) {
        pub display_weight: i16 = FieldSpec::i16(0),
        pub mass: i16 = FieldSpec::i16(2),
        pub tech_level: i16 = FieldSpec::i16(4),
        pub mod_types: Vec<ModType> = MOD_TYPES,
        pub mod_values: Vec<i16> = MOD_VALUES,
        pub max: i16 = FieldSpec::i16(10),
        pub flags: FlagSet = FlagSpec::u16(12, OUTF_FLAGS),
        pub cost: i32 = FieldSpec::i32(14),
        pub contribute: u64 = FieldSpec::u64(30),
        pub require: u64 = FieldSpec::u64(38),
        pub availability: String = CStr::new(46, 255),
        pub on_purchase: String = CStr::new(301, 255),
        pub on_sell: String = CStr::new(556, 255),
        pub short_name: String = CStr::new(811, 64),
        pub lc_name: String = CStr::new(875, 64),
        pub lc_plural: String = CStr::new(939, 64),
        pub item_class: i16 = FieldSpec::i16(1004),
        pub scan_mask: u16 = FieldSpec::u16(1006),
        /// Percent chance of being offered on a given visit.
        pub buy_random: i16 = FieldSpec::i16(1008),
        pub require_govt: GovtScope = FieldSpec::i16(1010),
    }
}

impl Outf {
    /// Modifier slots in use, paired with their values.
    pub fn modifiers(&self) -> impl Iterator<Item = (ModType, i16)> + '_ {
        self.mod_types
            .iter()
            .copied()
            .zip(self.mod_values.iter().copied())
            .filter(|(kind, _)| !matches!(kind, ModType::Unused | ModType::Unspecified(-1)))
    }
}
