use image::RgbaImage;
use nova_common::TypeTag;

use crate::ids::PictId;
use crate::registry::{DecodeContext, DecodeStrategy, RecordType};
use crate::source::RawRecord;
use crate::{Error, Result};

/// A QuickDraw picture.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Pict {
    pub id: PictId,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub image: RgbaImage,
}

impl Pict {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

impl RecordType for Pict {
    type Id = PictId;
    const TAG: TypeTag = TypeTag::PICT;
    const NAME: &'static str = "Pict";
    const FIELDS: &'static [&'static str] = &["image"];
    const STRATEGY: DecodeStrategy = DecodeStrategy::Parallel;

    fn id(&self) -> PictId {
        self.id
    }

    fn decode(record: &RawRecord<'_>, ctx: &DecodeContext<'_>) -> Result<Self> {
        let image = ctx.codec.decode_pict(record.bytes).map_err(Error::Image)?;
        Ok(Self {
            id: PictId(record.id),
            image,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::DecodeOptions;

    #[test]
    fn test_pict_without_codec() {
        let record = RawRecord { tag: TypeTag::PICT, id: 6000, bytes: &[0; 16] };
        let err = Pict::decode(&record, &DecodeContext::new(&DecodeOptions::default())).unwrap_err();

        assert!(matches!(err, Error::Image(_)));
    }
}
