use nova_common::TypeTag;

use crate::field::{CStr, FieldSpec};
use crate::ids::{OopsId, SpobId};
use crate::mux::Commodity;

record_type! {
    /// A planetary disaster that moves one commodity's price.
    pub struct Oops(TypeTag::OOPS, OopsId) {
        pub stellar: SpobId = FieldSpec::i16(0),
        pub commodity: Commodity = FieldSpec::i16(2),
        pub price_delta: i16 = FieldSpec::i16(4),
        /// Days the disaster lasts.
        pub duration: i16 = FieldSpec::i16(6),
        /// Percent chance per day of starting.
        pub frequency: i16 = FieldSpec::i16(8),
        pub activate_on: String = CStr::new(10, 255),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{DecodeContext, DecodeOptions, RecordType};
    use crate::source::RawRecord;

    #[test]
    fn test_decode_oops() {
        let mut bytes = vec![
            0x00, 0x80, // stellar
            0x00, 0x03, // commodity
            0xFF, 0xCE, // price delta
            0x00, 0x0A, // duration
            0x00, 0x02, // frequency
        ];
        bytes.extend_from_slice(b"b200\0");
        let record = RawRecord { tag: TypeTag::OOPS, id: 128, bytes: &bytes };
        let oops = Oops::decode(&record, &DecodeContext::new(&DecodeOptions::default())).unwrap();

        assert_eq!(oops.id, OopsId(128));
        assert_eq!(oops.stellar, SpobId(128));
        assert_eq!(oops.commodity, Commodity::Luxury);
        assert_eq!(oops.price_delta, -50);
        assert_eq!(oops.duration, 10);
        assert_eq!(oops.frequency, 2);
        assert_eq!(oops.activate_on, "b200");
    }
}
