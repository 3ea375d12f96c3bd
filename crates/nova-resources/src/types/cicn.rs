use image::RgbaImage;
use nova_common::TypeTag;

use crate::ids::CicnId;
use crate::registry::{DecodeContext, RecordType};
use crate::source::RawRecord;
use crate::{Error, Result};

/// A color icon.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Cicn {
    pub id: CicnId,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub image: RgbaImage,
}

impl RecordType for Cicn {
    type Id = CicnId;
    const TAG: TypeTag = TypeTag::CICN;
    const NAME: &'static str = "Cicn";
    const FIELDS: &'static [&'static str] = &["image"];

    fn id(&self) -> CicnId {
        self.id
    }

    fn decode(record: &RawRecord<'_>, ctx: &DecodeContext<'_>) -> Result<Self> {
        let image = ctx.codec.decode_cicn(record.bytes).map_err(Error::Image)?;
        Ok(Self {
            id: CicnId(record.id),
            image,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{ImageCodec, RleSheet};
    use crate::error::CollaboratorError;
    use crate::registry::DecodeOptions;

    /// Hands back a 2x3 canvas for icons and refuses everything else.
    struct IconCodec;

    impl ImageCodec for IconCodec {
        fn decode_pict(&self, _: &[u8]) -> std::result::Result<RgbaImage, CollaboratorError> {
            Err("not an icon".into())
        }

        fn decode_rle(&self, _: &[u8]) -> std::result::Result<RleSheet, CollaboratorError> {
            Err("not an icon".into())
        }

        fn decode_cicn(&self, data: &[u8]) -> std::result::Result<RgbaImage, CollaboratorError> {
            if data.is_empty() {
                return Err("empty icon".into());
            }
            Ok(RgbaImage::new(2, 3))
        }
    }

    #[test]
    fn test_decode_cicn() {
        let options = DecodeOptions::default();
        let ctx = DecodeContext::with_codec(&options, &IconCodec);
        let record = RawRecord { tag: TypeTag::CICN, id: 200, bytes: &[0; 8] };
        let cicn = Cicn::decode(&record, &ctx).unwrap();

        assert_eq!(cicn.id, CicnId(200));
        assert_eq!(cicn.image.dimensions(), (2, 3));
    }

    #[test]
    fn test_codec_failure_surfaces() {
        let options = DecodeOptions::default();
        let ctx = DecodeContext::with_codec(&options, &IconCodec);
        let record = RawRecord { tag: TypeTag::CICN, id: 200, bytes: &[] };

        let err = Cicn::decode(&record, &ctx).unwrap_err();
        assert!(matches!(err, Error::Image(_)));
        assert_eq!(err.to_string(), "image decode failed: empty icon");
    }
}
