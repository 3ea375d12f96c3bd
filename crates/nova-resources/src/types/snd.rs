use nova_common::TypeTag;

use crate::ids::SndId;
use crate::registry::{DecodeContext, RecordType};
use crate::source::RawRecord;
use crate::Result;

/// A sound resource, kept as its raw sampled-sound bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Snd {
    pub id: SndId,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub data: Vec<u8>,
}

impl RecordType for Snd {
    type Id = SndId;
    const TAG: TypeTag = TypeTag::SND;
    const NAME: &'static str = "Snd";
    const FIELDS: &'static [&'static str] = &["data"];

    fn id(&self) -> SndId {
        self.id
    }

    fn decode(record: &RawRecord<'_>, _: &DecodeContext<'_>) -> Result<Self> {
        Ok(Self {
            id: SndId(record.id),
            data: record.bytes.to_vec(),
        })
    }
}
