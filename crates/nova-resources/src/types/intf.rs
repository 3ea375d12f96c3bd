use nova_common::{Color, Rect, TypeTag};

use crate::field::{CStr, ColorAt, FieldSpec, RectAt};
use crate::ids::{IntfId, PictId};

record_type! {
    /// Status bar layout and colors.
    pub struct Intf(TypeTag::INTF, IntfId) {
        pub bright_text: Color = ColorAt(0),
        pub dim_text: Color = ColorAt(4),
        pub radar_area: Rect = RectAt(8),
        pub bright_radar: Color = ColorAt(16),
        pub dim_radar: Color = ColorAt(20),
        pub shield_area: Rect = RectAt(24),
        pub shield_color: Color = ColorAt(32),
        pub armor_area: Rect = RectAt(36),
        pub armor_color: Color = ColorAt(44),
        pub fuel_area: Rect = RectAt(48),
        pub fuel_full: Color = ColorAt(56),
        pub fuel_partial: Color = ColorAt(60),
        pub nav_area: Rect = RectAt(64),
        pub weapon_area: Rect = RectAt(72),
        pub target_area: Rect = RectAt(80),
        pub cargo_area: Rect = RectAt(88),
        pub status_font: String = CStr::new(96, 64),
        pub status_font_size: i16 = FieldSpec::i16(160),
        pub subtitle_size: i16 = FieldSpec::i16(162),
        pub status_background: PictId = FieldSpec::i16(164),
    }
}

impl Intf {
    /// The backdrop picture; IDs below 128 mean 128.
    pub fn background_pict(&self) -> PictId {
        PictId(self.status_background.0.max(128))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{DecodeContext, DecodeOptions, RecordType};
    use crate::source::RawRecord;

    #[test]
    fn test_decode_intf() {
        let mut bytes = vec![0u8; 166];
        bytes[8..16].copy_from_slice(&[0x00, 0x10, 0x03, 0x20, 0x00, 0x90, 0x03, 0xF0]);
        bytes[96..103].copy_from_slice(b"Charco\0");
        bytes[160..162].copy_from_slice(&9i16.to_be_bytes());

        let record = RawRecord { tag: TypeTag::INTF, id: 128, bytes: &bytes };
        let intf = Intf::decode(&record, &DecodeContext::new(&DecodeOptions::default())).unwrap();

        assert_eq!(intf.radar_area.top, 16);
        assert_eq!(intf.radar_area.width(), 208);
        assert_eq!(intf.status_font, "Charco");
        assert_eq!(intf.status_font_size, 9);
        assert_eq!(intf.background_pict(), PictId(128));
    }
}
