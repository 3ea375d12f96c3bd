use nova_common::TypeTag;

use crate::field::{CStr, FieldSpec, NONE};
use crate::flags::{FlagNames, FlagSet, FlagSpec};
use crate::ids::{GovtId, RankId};

pub const RANK_FLAGS: FlagNames = &[
    (0x0001, "deactivate_others_on_activate"),
    (0x0002, "deactivate_others_on_deactivate"),
    (0x0004, "deactivate_on_attack"),
    (0x0008, "permanent"),
    (0x0010, "deactivate_lower_on_activate"),
    (0x0020, "deactivate_lower_on_deactivate"),
    (0x0040, "deactivate_on_crime"),
    (0x0100, "no_auto_attack"),
    (0x0200, "always_land"),
    (0x0400, "request_assistance"),
    (0x0800, "free_repair_and_fuel"),
];

record_type! {
    /// A rank the player can hold with a government.
    pub struct Rank(TypeTag::RANK, RankId) {
        /// Ranks with higher weights are shown first.
        pub weight: i16 = FieldSpec::i16(0),
        pub govt: Option<GovtId> = FieldSpec::i16(2).absent(NONE),
        /// Percent change to prices in the government's territory.
        pub price_mod: i16 = FieldSpec::i16(4),
        pub salary_cap: i16 = FieldSpec::i16(6),
        pub salary: i16 = FieldSpec::i16(8),
        pub contribute: u64 = FieldSpec::u64(14),
        pub flags: FlagSet = FlagSpec::u16(22, RANK_FLAGS),
        pub name: String = CStr::new(24, 64),
        pub short_name: String = CStr::new(88, 64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{DecodeContext, DecodeOptions, RecordType};
    use crate::source::RawRecord;

    #[test]
    fn test_decode_rank() {
        let mut bytes = vec![0u8; 152];
        bytes[0..2].copy_from_slice(&10i16.to_be_bytes());
        bytes[2..4].copy_from_slice(&(-1i16).to_be_bytes());
        bytes[4..6].copy_from_slice(&(-15i16).to_be_bytes());
        bytes[14..22].copy_from_slice(&250_000u64.to_be_bytes());
        bytes[22..24].copy_from_slice(&0x0208u16.to_be_bytes());
        bytes[24..32].copy_from_slice(b"Captain\0");
        bytes[88..92].copy_from_slice(b"Cpt\0");

        let record = RawRecord { tag: TypeTag::RANK, id: 131, bytes: &bytes };
        let rank = Rank::decode(&record, &DecodeContext::new(&DecodeOptions::default())).unwrap();

        assert_eq!(rank.id, RankId(131));
        assert_eq!(rank.weight, 10);
        assert_eq!(rank.govt, None);
        assert_eq!(rank.price_mod, -15);
        assert_eq!(rank.contribute, 250_000);
        assert!(rank.flags.get("permanent"));
        assert!(rank.flags.get("always_land"));
        assert!(!rank.flags.get("no_auto_attack"));
        assert_eq!(rank.name, "Captain");
        assert_eq!(rank.short_name, "Cpt");
    }
}
