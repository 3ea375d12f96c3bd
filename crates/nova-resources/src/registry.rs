//! The record type registry.
//!
//! Every known type tag has one [`RecordType`] implementation, generated from
//! a declarative layout for fixed records or written out for the few
//! variable-length ones. [`REGISTRY`] lists them in assembly order along with
//! how each is decoded.

use std::fmt;
use std::hash::Hash;

use nova_common::{TextEncoding, TypeTag};

use crate::codec::{ImageCodec, NoImageCodec};
use crate::source::RawRecord;
use crate::types::*;
use crate::Result;

/// Options that affect how record bytes are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecodeOptions {
    /// How legacy text bytes become strings.
    pub text: TextEncoding,
}

/// Everything a decoder may consult besides the record bytes.
#[derive(Clone, Copy)]
pub struct DecodeContext<'a> {
    pub options: &'a DecodeOptions,
    pub codec: &'a dyn ImageCodec,
}

impl<'a> DecodeContext<'a> {
    /// A context without an image codec; image records fail to decode.
    pub fn new(options: &'a DecodeOptions) -> Self {
        Self {
            options,
            codec: &NoImageCodec,
        }
    }

    pub fn with_codec(options: &'a DecodeOptions, codec: &'a dyn ImageCodec) -> Self {
        Self { options, codec }
    }
}

impl fmt::Debug for DecodeContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodeContext")
            .field("options", self.options)
            .finish_non_exhaustive()
    }
}

/// How the assembler schedules a type's records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStrategy {
    /// Decode one record after another on the calling thread.
    Sequential,
    /// One task per record; inserts serialized under a lock.
    Parallel,
}

/// A decodable record type.
pub trait RecordType: Sized + Send {
    type Id: Copy + Eq + Ord + Hash + fmt::Display + From<i16> + Into<i16> + Send;

    const TAG: TypeTag;
    const NAME: &'static str;
    /// Output field names in layout order.
    const FIELDS: &'static [&'static str];
    const STRATEGY: DecodeStrategy = DecodeStrategy::Sequential;

    fn id(&self) -> Self::Id;

    /// Multiplexed ID fields of this record that matched no known range.
    fn unspecified_ids(&self) -> usize {
        0
    }

    fn decode(record: &RawRecord<'_>, ctx: &DecodeContext<'_>) -> Result<Self>;
}

/// Static description of one registered record type.
#[derive(Debug, Clone, Copy)]
pub struct RecordTypeDescriptor {
    pub tag: TypeTag,
    pub name: &'static str,
    pub fields: &'static [&'static str],
    pub strategy: DecodeStrategy,
}

impl RecordTypeDescriptor {
    pub const fn of<T: RecordType>() -> Self {
        Self {
            tag: T::TAG,
            name: T::NAME,
            fields: T::FIELDS,
            strategy: T::STRATEGY,
        }
    }
}

/// All known record types, in assembly order.
pub const REGISTRY: &[RecordTypeDescriptor] = &[
    RecordTypeDescriptor::of::<Colr>(),
    RecordTypeDescriptor::of::<Boom>(),
    RecordTypeDescriptor::of::<Char>(),
    RecordTypeDescriptor::of::<Cicn>(),
    RecordTypeDescriptor::of::<Cron>(),
    RecordTypeDescriptor::of::<Desc>(),
    RecordTypeDescriptor::of::<Dude>(),
    RecordTypeDescriptor::of::<Flet>(),
    RecordTypeDescriptor::of::<Govt>(),
    RecordTypeDescriptor::of::<Intf>(),
    RecordTypeDescriptor::of::<Junk>(),
    RecordTypeDescriptor::of::<Misn>(),
    RecordTypeDescriptor::of::<Nebu>(),
    RecordTypeDescriptor::of::<Oops>(),
    RecordTypeDescriptor::of::<Outf>(),
    RecordTypeDescriptor::of::<Pers>(),
    RecordTypeDescriptor::of::<Pict>(),
    RecordTypeDescriptor::of::<Rank>(),
    RecordTypeDescriptor::of::<RleD>(),
    RecordTypeDescriptor::of::<Roid>(),
    RecordTypeDescriptor::of::<Shan>(),
    RecordTypeDescriptor::of::<Ship>(),
    RecordTypeDescriptor::of::<Snd>(),
    RecordTypeDescriptor::of::<Spin>(),
    RecordTypeDescriptor::of::<Spob>(),
    RecordTypeDescriptor::of::<StrList>(),
    RecordTypeDescriptor::of::<Syst>(),
    RecordTypeDescriptor::of::<Weap>(),
];

/// Look up the descriptor for a tag.
pub fn descriptor(tag: TypeTag) -> Option<&'static RecordTypeDescriptor> {
    REGISTRY.iter().find(|d| d.tag == tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_tags_unique() {
        for (i, a) in REGISTRY.iter().enumerate() {
            for b in &REGISTRY[i + 1..] {
                assert_ne!(a.tag, b.tag, "{} and {} share a tag", a.name, b.name);
            }
        }
        assert_eq!(REGISTRY.len(), 28);
    }

    #[test]
    fn test_parallel_types() {
        let parallel: Vec<_> = REGISTRY
            .iter()
            .filter(|d| d.strategy == DecodeStrategy::Parallel)
            .map(|d| d.tag)
            .collect();

        assert_eq!(parallel, vec![TypeTag::PICT, TypeTag::RLED]);
    }

    #[test]
    fn test_lookup() {
        let ship = descriptor(TypeTag::SHIP).unwrap();
        assert_eq!(ship.name, "Ship");
        assert!(ship.fields.contains(&"inherent_govt"));
        assert!(descriptor(TypeTag::PILOT).is_none());
    }
}
