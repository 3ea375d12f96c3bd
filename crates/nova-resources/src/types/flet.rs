use nova_common::TypeTag;

use crate::field::{CStr, FieldSpec, NONE, NONE_OR_ZERO};
use crate::flags::{FlagNames, FlagSet, FlagSpec};
use crate::ids::{FletId, GovtId, ShipId, StrId};
use crate::mux::SystemSelector;

pub const FLET_FLAGS: FlagNames = &[(0x0001, "freighters_have_random_cargo")];

record_type! {
    /// A fleet: a flagship and up to four escort types.
    pub struct Flet(TypeTag::FLET, FletId) {
        pub lead_ship: ShipId = FieldSpec::i16(0),
        pub escort_types: Vec<ShipId> = FieldSpec::i16(2).array(4),
        pub min: Vec<i16> = FieldSpec::i16(10).array(4),
        pub max: Vec<i16> = FieldSpec::i16(18).array(4),
        pub govt: Option<GovtId> = FieldSpec::i16(26).absent(NONE),
        pub link_syst: SystemSelector = FieldSpec::i16(28),
        pub appear_on: String = CStr::new(30, 255),
        /// Hyperspace entry quote; `#` is replaced with random digits.
        pub quote: Option<StrId> = FieldSpec::i16(286).absent(NONE_OR_ZERO),
        pub flags: FlagSet = FlagSpec::u16(288, FLET_FLAGS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{DecodeContext, DecodeOptions, RecordType};
    use crate::source::RawRecord;

    #[test]
    fn test_decode_flet() {
        let mut bytes = vec![0u8; 290];
        bytes[0..2].copy_from_slice(&140i16.to_be_bytes());
        bytes[18..20].copy_from_slice(&4i16.to_be_bytes());
        bytes[26..28].copy_from_slice(&[0xFF, 0xFF]);
        bytes[28..30].copy_from_slice(&10_003i16.to_be_bytes());
        bytes[30..34].copy_from_slice(b"b12\0");
        bytes[286..288].copy_from_slice(&[0xFF, 0xFF]);
        bytes[289] = 0x01;

        let record = RawRecord { tag: TypeTag::FLET, id: 128, bytes: &bytes };
        let flet = Flet::decode(&record, &DecodeContext::new(&DecodeOptions::default())).unwrap();

        assert_eq!(flet.lead_ship, ShipId(140));
        assert_eq!(flet.max[0], 4);
        assert_eq!(flet.govt, None);
        assert_eq!(flet.link_syst, SystemSelector::GovtSystem(GovtId(131)));
        assert_eq!(flet.appear_on, "b12");
        assert_eq!(flet.quote, None);
        assert!(flet.flags.get("freighters_have_random_cargo"));
    }
}
