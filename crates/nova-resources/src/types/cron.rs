use nova_common::TypeTag;

use crate::field::{CStr, FieldSpec, NONE, NONE_OR_ZERO};
use crate::flags::{FlagNames, FlagSet, FlagSpec};
use crate::ids::{CronId, GovtId, StrId};

pub const CRON_FLAGS: FlagNames = &[(0x0001, "continuous_entry"), (0x0002, "continuous_exit")];

record_type! {
    /// A timed background event driven by control bits.
    ///
    /// Date fields of 0 or -1 are wildcards and decode as `None`.
    pub struct Cron(TypeTag::CRON, CronId) {
        pub first_day: Option<i16> = FieldSpec::i16(0).absent(NONE_OR_ZERO),
        pub first_month: Option<i16> = FieldSpec::i16(2).absent(NONE_OR_ZERO),
        pub first_year: Option<i16> = FieldSpec::i16(4).absent(NONE_OR_ZERO),
        pub last_day: Option<i16> = FieldSpec::i16(6).absent(NONE_OR_ZERO),
        pub last_month: Option<i16> = FieldSpec::i16(8).absent(NONE_OR_ZERO),
        pub last_year: Option<i16> = FieldSpec::i16(10).absent(NONE_OR_ZERO),
        /// Percent chance of activation inside the date range.
        pub random: i16 = FieldSpec::i16(12),
        /// Days the event stays active.
        pub duration: i16 = FieldSpec::i16(14),
        pub pre_holdoff: i16 = FieldSpec::i16(16),
        pub post_holdoff: i16 = FieldSpec::i16(18),
        /// News shown when no local news applies.
        pub independent_news: Option<StrId> = FieldSpec::i16(20).absent(NONE),
        pub flags: FlagSet = FlagSpec::u16(22, CRON_FLAGS),
        pub enable_on: String = CStr::new(24, 255),
        pub on_start: String = CStr::new(279, 255),
        pub on_end: String = CStr::new(534, 255),
        pub contribute: u64 = FieldSpec::u64(790),
        pub require: u64 = FieldSpec::u64(798),
        pub news_govts: Vec<Option<GovtId>> = FieldSpec::i16(806).absent(NONE).array(4),
        pub govt_news: Vec<Option<StrId>> = FieldSpec::i16(814).absent(NONE).array(4),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{DecodeContext, DecodeOptions, RecordType};
    use crate::source::RawRecord;

    #[test]
    fn test_decode_cron() {
        let mut bytes = vec![0u8; 822];
        bytes[0..2].copy_from_slice(&[0xFF, 0xFF]);
        bytes[4..6].copy_from_slice(&1177i16.to_be_bytes());
        bytes[12..14].copy_from_slice(&100i16.to_be_bytes());
        bytes[20..22].copy_from_slice(&[0xFF, 0xFF]);
        bytes[23] = 0x02;
        bytes[24..29].copy_from_slice(b"b1&b2");
        bytes[790..798].copy_from_slice(&0x8000_0000_0000_0001u64.to_be_bytes());
        bytes[806..808].copy_from_slice(&130i16.to_be_bytes());
        bytes[808..814].copy_from_slice(&[0xFF; 6]);

        let record = RawRecord { tag: TypeTag::CRON, id: 200, bytes: &bytes };
        let cron = Cron::decode(&record, &DecodeContext::new(&DecodeOptions::default())).unwrap();

        assert_eq!(cron.first_day, None);
        assert_eq!(cron.first_month, None);
        assert_eq!(cron.first_year, Some(1177));
        assert_eq!(cron.random, 100);
        assert_eq!(cron.independent_news, None);
        assert!(cron.flags.get("continuous_exit"));
        assert!(!cron.flags.get("continuous_entry"));
        assert_eq!(cron.enable_on, "b1&b2");
        assert_eq!(cron.contribute, 0x8000_0000_0000_0001);
        assert_eq!(cron.news_govts, vec![Some(GovtId(130)), None, None, None]);
    }
}
