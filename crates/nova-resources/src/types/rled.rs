use image::RgbaImage;
use nova_common::{Rect, TypeTag};

use crate::ids::RleId;
use crate::registry::{DecodeContext, DecodeStrategy, RecordType};
use crate::source::RawRecord;
use crate::{Error, Result};

/// A run-length encoded sprite sheet.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RleD {
    pub id: RleId,
    /// Every frame laid out in a `count_across` by `count_down` grid.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub image: RgbaImage,
    /// Bounds of a single frame.
    pub frame: Rect,
    pub count_across: u32,
    pub count_down: u32,
}

impl RleD {
    pub fn frame_count(&self) -> u32 {
        self.count_across * self.count_down
    }
}

impl RecordType for RleD {
    type Id = RleId;
    const TAG: TypeTag = TypeTag::RLED;
    const NAME: &'static str = "RleD";
    const FIELDS: &'static [&'static str] = &["image", "frame", "count_across", "count_down"];
    const STRATEGY: DecodeStrategy = DecodeStrategy::Parallel;

    fn id(&self) -> RleId {
        self.id
    }

    fn decode(record: &RawRecord<'_>, ctx: &DecodeContext<'_>) -> Result<Self> {
        let sheet = ctx.codec.decode_rle(record.bytes).map_err(Error::Image)?;
        Ok(Self {
            id: RleId(record.id),
            image: sheet.image,
            frame: sheet.frame,
            count_across: sheet.count_across,
            count_down: sheet.count_down,
        })
    }
}
