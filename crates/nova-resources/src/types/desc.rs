use nova_common::TypeTag;

use crate::field::{CStr, FieldSpec, NONE_OR_ZERO};
use crate::flags::{FlagNames, FlagSet, FlagSpec};
use crate::ids::{DescId, PictId};
use crate::layout::RecordView;
use crate::registry::{DecodeContext, RecordType};
use crate::source::RawRecord;
use crate::Result;

pub const DESC_FLAGS: FlagNames = &[
    (0x0001, "movie_after_briefing"),
    (0x0002, "movie_double_size"),
    (0x0004, "cinematic_movie"),
];

// Trailer layout, relative to the byte after the text terminator.
const GRAPHIC: FieldSpec = FieldSpec::i16(0).absent(NONE_OR_ZERO);
const MOVIE_OFFSET: usize = 2;
const MOVIE_MAX: usize = 32;
const FLAGS: FlagSpec = FlagSpec::u16(MOVIE_OFFSET + MOVIE_MAX, DESC_FLAGS);

/// Free-form description text with an optional picture and movie.
///
/// The text runs up to the first NUL and is followed by a short trailer.
/// Older records stop right after the text; their trailer fields read as
/// empty.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Desc {
    pub id: DescId,
    pub text: String,
    pub graphic: Option<PictId>,
    pub movie_file: String,
    pub flags: FlagSet,
}

impl RecordType for Desc {
    type Id = DescId;
    const TAG: TypeTag = TypeTag::DESC;
    const NAME: &'static str = "Desc";
    const FIELDS: &'static [&'static str] = &["text", "graphic", "movie_file", "flags"];

    fn id(&self) -> DescId {
        self.id
    }

    fn decode(record: &RawRecord<'_>, ctx: &DecodeContext<'_>) -> Result<Self> {
        let bytes = record.bytes;
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        let text = ctx.options.text.decode(&bytes[..end]);

        let trailer = bytes.get(end + 1..).unwrap_or_default();
        let view = RecordView::new(trailer, ctx.options);

        let graphic = if trailer.len() >= GRAPHIC.width {
            view.get("graphic", &GRAPHIC)?
        } else {
            None
        };
        let movie_file = match trailer.len().saturating_sub(MOVIE_OFFSET) {
            0 => String::new(),
            available => view.get("movie_file", &CStr::new(MOVIE_OFFSET, available.min(MOVIE_MAX)))?,
        };
        let flags = if trailer.len() >= FLAGS.offset + FLAGS.width {
            view.get("flags", &FLAGS)?
        } else {
            FlagSet::new(0, DESC_FLAGS)
        };

        Ok(Self {
            id: DescId(record.id),
            text,
            graphic,
            movie_file,
            flags,
        })
    }
}
