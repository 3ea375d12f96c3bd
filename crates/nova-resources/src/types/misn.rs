use nova_common::TypeTag;

use crate::field::{CStr, FieldSpec, NONE, NONE_OR_ZERO};
use crate::flags::{FlagNames, FlagSet, FlagSpec};
use crate::ids::{DescId, DudeId, GovtId, MisnId, StrId};

pub const MISN_FLAGS: FlagNames = &[
    (0x0001, "auto_abort"),
    (0x0002, "no_destination_arrows"),
    (0x0004, "cannot_refuse"),
    (0x0008, "take_fuel_on_auto_abort"),
    (0x0010, "infinite_aux_ships"),
    (0x0020, "fail_if_scanned"),
    (0x0040, "reverse_reward_on_abort"),
    (0x0080, "penalty_if_jettisoned"),
    (0x0100, "green_arrow_on_brief"),
    (0x0200, "arrow_for_ship_syst"),
    (0x0400, "invisible"),
    (0x0800, "lock_special_ship_type"),
    (0x2000, "unavailable_for_freighters"),
    (0x4000, "unavailable_for_warships"),
    (0x8000, "fail_if_boarded_by_pirates"),
];

pub const MISN_FLAGS2: FlagNames = &[
    (0x0001, "requires_cargo_space"),
    (0x0002, "pay_on_auto_abort"),
    (0x0004, "fail_if_disabled_or_destroyed"),
];

code_enum! {
    /// Where a mission is offered.
    pub enum AvailLoc {
        MissionComputer = 0,
        Bar = 1,
        /// Offered by a `përs` ship.
        Ship = 2,
        MainSpaceport = 3,
        Trading = 4,
        Shipyard = 5,
        Outfitter = 6,
    }
}

code_enum! {
    /// When mission cargo is loaded.
    pub enum PickupMode {
        Ignored = -1,
        AtStart = 0,
        AtTravelStel = 1,
        BoardSpecialShip = 2,
    }
}

code_enum! {
    pub enum DropOffMode {
        Ignored = -1,
        AtTravelStel = 0,
        AtReturnStel = 1,
    }
}

code_enum! {
    /// What the player must do to the special ships.
    pub enum ShipGoal {
        Destroy = 0,
        Disable = 1,
        Board = 2,
        Escort = 3,
        Observe = 4,
        Rescue = 5,
        ChaseOff = 6,
    }
}

code_enum! {
    pub enum ShipBehaviour {
        /// Standard AI.
        Ignored = -1,
        AttackPlayer = 0,
        ProtectPlayer = 1,
        AttackEnemyStellars = 2,
    }
}

code_enum! {
    /// Where the special ships appear.
    pub enum ShipStart {
        NavDefault4 = -4,
        NavDefault3 = -3,
        NavDefault2 = -2,
        NavDefault1 = -1,
        Random = 0,
        JumpIn = 1,
        RandomCloaked = 2,
    }
}

record_type! {
    /// A mission.
    pub struct Misn(TypeTag::MISN, MisnId) {
        pub avail_stel: i16 = FieldSpec::i16(0),
        pub avail_loc: AvailLoc = FieldSpec::i16(4),
        pub avail_record: i16 = FieldSpec::i16(6),
        pub avail_rating: i16 = FieldSpec::i16(8),
        /// Percent chance of being offered.
        pub avail_random: i16 = FieldSpec::i16(10),
        pub travel_stel: i16 = FieldSpec::i16(12),
        pub return_stel: i16 = FieldSpec::i16(14),
        pub cargo_type: i16 = FieldSpec::i16(16),
        pub cargo_qty: i16 = FieldSpec::i16(18),
        pub pickup_mode: PickupMode = FieldSpec::i16(20),
        pub drop_off_mode: DropOffMode = FieldSpec::i16(22),
        pub scan_mask: u16 = FieldSpec::u16(24),
        pub pay: i32 = FieldSpec::i32(28),
        pub ship_count: i16 = FieldSpec::i16(32),
        pub ship_syst: i16 = FieldSpec::i16(34),
        pub ship_dude: Option<DudeId> = FieldSpec::i16(36).absent(NONE),
        pub ship_goal: ShipGoal = FieldSpec::i16(38),
        pub ship_behaviour: ShipBehaviour = FieldSpec::i16(40),
        pub ship_names: Option<StrId> = FieldSpec::i16(42).absent(NONE),
        pub ship_start: ShipStart = FieldSpec::i16(44),
        pub comp_govt: Option<GovtId> = FieldSpec::i16(46).absent(NONE),
        pub comp_reward: i16 = FieldSpec::i16(48),
        pub ship_subtitles: Option<StrId> = FieldSpec::i16(50).absent(NONE),
        pub brief_text: Option<DescId> = FieldSpec::i16(52).absent(NONE),
        pub quick_brief: Option<DescId> = FieldSpec::i16(54).absent(NONE),
        pub load_cargo_text: Option<DescId> = FieldSpec::i16(56).absent(NONE),
        pub drop_cargo_text: Option<DescId> = FieldSpec::i16(58).absent(NONE),
        pub comp_text: Option<DescId> = FieldSpec::i16(60).absent(NONE),
        pub fail_text: Option<DescId> = FieldSpec::i16(62).absent(NONE),
        /// Days to complete.
        pub time_limit: Option<i16> = FieldSpec::i16(64).absent(NONE_OR_ZERO),
        pub can_abort: i16 = FieldSpec::i16(66),
        pub ship_done_text: Option<DescId> = FieldSpec::i16(68).absent(NONE),
        pub aux_ship_count: i16 = FieldSpec::i16(72),
        pub aux_ship_dude: Option<DudeId> = FieldSpec::i16(74).absent(NONE),
        pub aux_ship_syst: i16 = FieldSpec::i16(76),
        pub flags: FlagSet = FlagSpec::u16(80, MISN_FLAGS),
        pub flags2: FlagSet = FlagSpec::u16(82, MISN_FLAGS2),
        pub refuse_text: Option<DescId> = FieldSpec::i16(88).absent(NONE),
        pub avail_ship_type: i16 = FieldSpec::i16(90),
        pub avail_bits: String = CStr::new(92, 255),
        pub on_accept: String = CStr::new(347, 255),
        pub on_refuse: String = CStr::new(602, 255),
        pub on_success: String = CStr::new(857, 255),
        pub on_failure: String = CStr::new(1112, 255),
        pub on_abort: String = CStr::new(1367, 255),
        pub require: u64 = FieldSpec::u64(1622),
        pub date_increment: i16 = FieldSpec::i16(1630),
        pub on_ship_done: String = CStr::new(1632, 255),
        pub accept_button: String = CStr::new(1887, 32),
        pub refuse_button: String = CStr::new(1919, 32),
        pub display_weight: i16 = FieldSpec::i16(1952),
    }
}

impl Misn {
    pub fn is_abortable(&self) -> bool {
        self.can_abort == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{DecodeContext, DecodeOptions, RecordType};
    use crate::source::RawRecord;

    fn put(bytes: &mut [u8], offset: usize, value: i16) {
        bytes[offset..offset + 2].copy_from_slice(&value.to_be_bytes());
    }

    #[test]
    fn test_decode_misn() {
        let mut bytes = vec![0u8; 1954];
        put(&mut bytes, 4, 1);
        put(&mut bytes, 20, -1);
        put(&mut bytes, 22, 1);
        bytes[28..32].copy_from_slice(&15_000i32.to_be_bytes());
        put(&mut bytes, 36, -1);
        put(&mut bytes, 38, 4);
        put(&mut bytes, 44, -2);
        put(&mut bytes, 52, 4001);
        put(&mut bytes, 64, -1);
        put(&mut bytes, 66, 1);
        put(&mut bytes, 80, 0x2005);
        put(&mut bytes, 82, 0x0002);
        bytes[92..97].copy_from_slice(b"b1&b2");
        bytes[1622..1630].copy_from_slice(&0x0000_0000_0000_0100u64.to_be_bytes());
        put(&mut bytes, 1630, 3);
        bytes[1887..1893].copy_from_slice(b"Sure!\0");
        put(&mut bytes, 1952, 10);

        let record = RawRecord { tag: TypeTag::MISN, id: 129, bytes: &bytes };
        let misn = Misn::decode(&record, &DecodeContext::new(&DecodeOptions::default())).unwrap();

        assert_eq!(misn.avail_loc, AvailLoc::Bar);
        assert_eq!(misn.pickup_mode, PickupMode::Ignored);
        assert_eq!(misn.drop_off_mode, DropOffMode::AtReturnStel);
        assert_eq!(misn.pay, 15_000);
        assert_eq!(misn.ship_dude, None);
        assert_eq!(misn.ship_goal, ShipGoal::Observe);
        assert_eq!(misn.ship_start, ShipStart::NavDefault2);
        assert_eq!(misn.brief_text, Some(DescId(4001)));
        assert_eq!(misn.time_limit, None);
        assert!(misn.is_abortable());
        assert!(misn.flags.get("auto_abort"));
        assert!(misn.flags.get("cannot_refuse"));
        assert!(misn.flags.get("unavailable_for_freighters"));
        assert!(!misn.flags.get("invisible"));
        assert!(misn.flags2.get("pay_on_auto_abort"));
        assert_eq!(misn.avail_bits, "b1&b2");
        assert_eq!(misn.require, 0x100);
        assert_eq!(misn.date_increment, 3);
        assert_eq!(misn.accept_button, "Sure!");
        assert_eq!(misn.display_weight, 10);
        assert_eq!(misn.id.desc(), DescId(4001));
    }

    #[test]
    fn test_unknown_codes_are_kept() {
        assert_eq!(ShipGoal::from(9), ShipGoal::Unspecified(9));
        assert_eq!(i16::from(AvailLoc::Unspecified(42)), 42);
    }
}
