use nova_common::TypeTag;

use crate::field::FieldSpec;
use crate::ids::{PictId, RleId, SpinId};

impl SpinId {
    pub const EXPLOSION_BASE: i16 = 400;
    pub const CARGO_BOX: Self = Self(500);
    pub const MAIN_SCREEN_LOGO: Self = Self(606);
    pub const MAIN_SCREEN_ROLLOVER: Self = Self(607);
    pub const TARGET_CURSOR: Self = Self(650);
    pub const STARFIELD: Self = Self(700);
    pub const ASTEROID_BASE: i16 = 800;
    pub const STELLAR_BASE: i16 = 1000;
    pub const WEAPON_BASE: i16 = 3000;
}

record_type! {
    /// Where an object's sprites live and how they are tiled.
    pub struct Spin(TypeTag::SPIN, SpinId) {
        /// A `PICT` or `rlëD` ID, depending on which exists.
        pub sprites: i16 = FieldSpec::i16(0),
        pub masks: PictId = FieldSpec::i16(2),
        pub sprite_width: i16 = FieldSpec::i16(4),
        pub sprite_height: i16 = FieldSpec::i16(6),
        pub tiles_across: i16 = FieldSpec::i16(8),
        pub tiles_down: i16 = FieldSpec::i16(10),
    }
}

impl Spin {
    pub fn sprites_pict(&self) -> PictId {
        PictId(self.sprites)
    }

    pub fn sprites_rle(&self) -> RleId {
        RleId(self.sprites)
    }

    pub fn frame_count(&self) -> i32 {
        i32::from(self.tiles_across) * i32::from(self.tiles_down)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{DecodeContext, DecodeOptions, RecordType};
    use crate::source::RawRecord;

    #[test]
    fn test_decode_spin() {
        let bytes = [0x00, 0x80, 0x00, 0x81, 0x00, 0x30, 0x00, 0x30, 0x00, 0x06, 0x00, 0x06];
        let record = RawRecord { tag: TypeTag::SPIN, id: 3000, bytes: &bytes };
        let spin = Spin::decode(&record, &DecodeContext::new(&DecodeOptions::default())).unwrap();

        assert_eq!(spin.id, SpinId(SpinId::WEAPON_BASE));
        assert_eq!(spin.sprites_rle(), RleId(128));
        assert_eq!(spin.masks, PictId(129));
        assert_eq!((spin.sprite_width, spin.sprite_height), (48, 48));
        assert_eq!(spin.frame_count(), 36);
    }
}
