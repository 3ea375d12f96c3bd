use nova_common::TypeTag;

use crate::field::{CStr, FieldSpec};
use crate::ids::NebuId;

record_type! {
    /// A nebula drawn on the star map.
    pub struct Nebu(TypeTag::NEBU, NebuId) {
        pub x: i16 = FieldSpec::i16(0),
        pub y: i16 = FieldSpec::i16(2),
        pub width: i16 = FieldSpec::i16(4),
        pub height: i16 = FieldSpec::i16(6),
        pub active_on: String = CStr::new(8, 255),
        pub on_explore: String = CStr::new(263, 255),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{DecodeContext, DecodeOptions, RecordType};
    use crate::source::RawRecord;

    #[test]
    fn test_decode_nebu() {
        let mut bytes = vec![0u8; 518];
        bytes[0..8].copy_from_slice(&[0xFF, 0x38, 0x00, 0x64, 0x00, 0x50, 0x00, 0x28]);
        bytes[8..12].copy_from_slice(b"b42\0");
        bytes[263..267].copy_from_slice(b"b43\0");

        let record = RawRecord { tag: TypeTag::NEBU, id: 128, bytes: &bytes };
        let nebu = Nebu::decode(&record, &DecodeContext::new(&DecodeOptions::default())).unwrap();

        assert_eq!((nebu.x, nebu.y), (-200, 100));
        assert_eq!((nebu.width, nebu.height), (80, 40));
        assert_eq!(nebu.active_on, "b42");
        assert_eq!(nebu.on_explore, "b43");
    }
}
