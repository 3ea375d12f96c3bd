use nova_common::TypeTag;

use crate::field::{CStr, FieldSpec, NONE_OR_ZERO};
use crate::flags::{FlagNames, FlagSet, FlagSpec};
use crate::ids::{JunkId, SpobId};

pub const JUNK_FLAGS: FlagNames = &[(0x0001, "tribbles"), (0x0002, "perishable")];

record_type! {
    /// A special commodity traded only at certain planets.
    pub struct Junk(TypeTag::JUNK, JunkId) {
        pub sold_at: Vec<Option<SpobId>> = FieldSpec::i16(0).absent(NONE_OR_ZERO).array(8),
        pub bought_at: Vec<Option<SpobId>> = FieldSpec::i16(16).absent(NONE_OR_ZERO).array(8),
        pub base_price: i16 = FieldSpec::i16(32),
        pub flags: FlagSet = FlagSpec::u16(34, JUNK_FLAGS),
        pub scan_mask: u16 = FieldSpec::u16(36),
        /// Lower-case name used in sentences.
        pub lc_name: String = CStr::new(38, 64),
        pub abbreviation: String = CStr::new(102, 64),
        pub sell_on: String = CStr::new(166, 255),
        pub buy_on: String = CStr::new(421, 255),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{DecodeContext, DecodeOptions, RecordType};
    use crate::source::RawRecord;

    #[test]
    fn test_decode_junk() {
        let mut bytes = vec![0u8; 676];
        bytes[0..2].copy_from_slice(&130i16.to_be_bytes());
        bytes[2..4].copy_from_slice(&[0xFF, 0xFF]);
        bytes[32..34].copy_from_slice(&450i16.to_be_bytes());
        bytes[35] = 0x03;
        bytes[38..46].copy_from_slice(b"spices\0\0");
        bytes[102..106].copy_from_slice(b"Spc\0");

        let record = RawRecord { tag: TypeTag::JUNK, id: 128, bytes: &bytes };
        let junk = Junk::decode(&record, &DecodeContext::new(&DecodeOptions::default())).unwrap();

        assert_eq!(junk.sold_at[0], Some(SpobId(130)));
        assert_eq!(junk.sold_at[1], None);
        assert_eq!(junk.sold_at[2], None);
        assert_eq!(junk.base_price, 450);
        assert!(junk.flags.get("tribbles") && junk.flags.get("perishable"));
        assert_eq!(junk.lc_name, "spices");
        assert_eq!(junk.abbreviation, "Spc");
        assert_eq!(junk.sell_on, "");
    }
}
