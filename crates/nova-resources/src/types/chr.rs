use std::time::Duration;

use nova_common::TypeTag;

use crate::field::{CStr, FieldSpec, Scale, NONE};
use crate::flags::{FlagNames, FlagSet, FlagSpec};
use crate::ids::{CharId, DescId, GovtId, PictId, ShipId, SystId};

pub const CHAR_FLAGS: FlagNames = &[(0x0001, "default")];

record_type! {
    /// A starting pilot template offered when a new pilot is created.
    pub struct Char(TypeTag::CHAR, CharId) {
        pub cash: i32 = FieldSpec::i32(0),
        pub ship: ShipId = FieldSpec::i16(4),
        /// Candidate starting systems; the game falls back to 128 when all are unset.
        pub systems: Vec<Option<SystId>> = FieldSpec::i16(6).absent(NONE).array(4),
        pub govts: Vec<Option<GovtId>> = FieldSpec::i16(14).absent(NONE).array(4),
        /// Legal status with each of `govts` and their allies.
        pub status: Vec<i16> = FieldSpec::i16(22).array(4),
        pub combat_rating: i16 = FieldSpec::i16(30),
        pub intro_picts: Vec<Option<PictId>> = FieldSpec::i16(32).absent(NONE).array(4),
        pub pict_delays: Vec<Duration> = FieldSpec::u16(40).scale(Scale::Seconds).array(4),
        pub intro_text: Option<DescId> = FieldSpec::i16(48).absent(NONE),
        pub on_start: String = CStr::new(50, 255),
        pub flags: FlagSet = FlagSpec::u16(306, CHAR_FLAGS),
        pub start_day: i16 = FieldSpec::i16(308),
        pub start_month: i16 = FieldSpec::i16(310),
        pub start_year: i16 = FieldSpec::i16(312),
        pub date_prefix: String = CStr::new(314, 15),
        pub date_suffix: String = CStr::new(330, 15),
    }
}

impl Char {
    pub fn is_default(&self) -> bool {
        self.flags.get("default")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{DecodeContext, DecodeOptions, RecordType};
    use crate::source::RawRecord;

    #[test]
    fn test_decode_char() {
        let mut bytes = vec![0u8; 346];
        bytes[0..4].copy_from_slice(&25_000i32.to_be_bytes());
        bytes[4..6].copy_from_slice(&128i16.to_be_bytes());
        bytes[6..14].copy_from_slice(&[0x00, 0x80, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]);
        bytes[40..42].copy_from_slice(&3u16.to_be_bytes());
        bytes[48..50].copy_from_slice(&[0xFF, 0xFF]);
        bytes[50..55].copy_from_slice(b"b100\0");
        bytes[307] = 0x01;
        bytes[312..314].copy_from_slice(&1177i16.to_be_bytes());
        bytes[330..334].copy_from_slice(b" NC\0");

        let record = RawRecord { tag: TypeTag::CHAR, id: 128, bytes: &bytes };
        let chr = Char::decode(&record, &DecodeContext::new(&DecodeOptions::default())).unwrap();

        assert_eq!(chr.cash, 25_000);
        assert_eq!(chr.ship, ShipId(128));
        assert_eq!(chr.systems, vec![Some(SystId(128)), None, None, None]);
        assert_eq!(chr.pict_delays[0], Duration::from_secs(3));
        assert_eq!(chr.intro_text, None);
        assert_eq!(chr.on_start, "b100");
        assert!(chr.is_default());
        assert_eq!(chr.start_year, 1177);
        assert_eq!(chr.date_suffix, " NC");
        assert_eq!(chr.id.desc(), DescId(14000));
    }
}
