use nova_common::TypeTag;

use crate::field::{FieldSpec, NONE};
use crate::ids::{BoomId, SndId, SpinId};

/// Sound resources for explosions start at this ID.
pub const SOUND_BASE: i64 = 300;
/// Sprite resources for explosions start at this ID.
pub const GRAPHIC_BASE: i64 = 400;

record_type! {
    /// Explosion behaviour, one of up to 64 explosion types.
    pub struct Boom(TypeTag::BOOM, BoomId) {
        /// Animation rate; 100 shows each frame for exactly one game frame.
        pub frame_advance: i16 = FieldSpec::i16(0),
        /// `None` for a silent explosion.
        pub sound: Option<SndId> = FieldSpec::i16(2).absent(NONE).bias(SOUND_BASE),
        /// `None` when the index runs past the sprite ID range.
        pub graphic: Option<SpinId> = FieldSpec::i16(4).bias(GRAPHIC_BASE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{DecodeContext, DecodeOptions, RecordType};
    use crate::source::RawRecord;

    #[test]
    fn test_decode_boom() {
        let bytes = [0x00, 0x64, 0x00, 0x02, 0x00, 0x05];
        let record = RawRecord { tag: TypeTag::BOOM, id: 130, bytes: &bytes };
        let boom = Boom::decode(&record, &DecodeContext::new(&DecodeOptions::default())).unwrap();

        assert_eq!(boom.id, BoomId(130));
        assert_eq!(boom.frame_advance, 100);
        assert_eq!(boom.sound, Some(SndId(302)));
        assert_eq!(boom.graphic, Some(SpinId(405)));
    }

    #[test]
    fn test_silent_boom() {
        let bytes = [0x00, 0x64, 0xFF, 0xFF, 0x00, 0x00];
        let record = RawRecord { tag: TypeTag::BOOM, id: 128, bytes: &bytes };
        let boom = Boom::decode(&record, &DecodeContext::new(&DecodeOptions::default())).unwrap();

        assert_eq!(boom.sound, None);
        assert_eq!(boom.graphic, Some(SpinId(400)));
    }

    #[test]
    fn test_graphic_past_id_range() {
        let bytes = [0x00, 0x64, 0x00, 0x00, 0x7F, 0x00];
        let record = RawRecord { tag: TypeTag::BOOM, id: 128, bytes: &bytes };
        let boom = Boom::decode(&record, &DecodeContext::new(&DecodeOptions::default())).unwrap();

        assert_eq!(boom.graphic, None);
        assert_eq!(boom.sound, Some(SndId(300)));
    }
}
