use nova_common::TypeTag;

use crate::field::read_string_table;
use crate::ids::StrId;
use crate::registry::{DecodeContext, RecordType};
use crate::source::RawRecord;
use crate::Result;

/// A `STR#` string list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StrList {
    pub id: StrId,
    pub strings: Vec<String>,
}

impl StrList {
    /// Entry by zero-based index.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.strings.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl RecordType for StrList {
    type Id = StrId;
    const TAG: TypeTag = TypeTag::STRA;
    const NAME: &'static str = "StrList";
    const FIELDS: &'static [&'static str] = &["strings"];

    fn id(&self) -> StrId {
        self.id
    }

    fn decode(record: &RawRecord<'_>, ctx: &DecodeContext<'_>) -> Result<Self> {
        let (strings, _) = read_string_table(record.bytes, ctx.options.text)?;
        Ok(Self {
            id: StrId(record.id),
            strings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::DecodeOptions;
    use nova_common::TextEncoding;

    fn decode(bytes: &[u8], text: TextEncoding) -> Result<StrList> {
        let options = DecodeOptions { text };
        let record = RawRecord { tag: TypeTag::STRA, id: 150, bytes };
        StrList::decode(&record, &DecodeContext::new(&options))
    }

    #[test]
    fn test_decode_str_list() {
        let list = decode(&[0x00, 0x02, 2, b'O', b'K', 0, 0xEE], TextEncoding::Latin1).unwrap();

        assert_eq!(list.strings, vec!["OK".to_string(), String::new()]);
        assert_eq!(list.get(0), Some("OK"));
        assert_eq!(list.get(2), None);
    }

    #[test]
    fn test_negative_count_is_empty() {
        assert!(decode(&[0xFF, 0xFE], TextEncoding::Latin1).unwrap().is_empty());
    }

    #[test]
    fn test_legacy_encoding_option() {
        let bytes = [0x00, 0x01, 1, 0x8E];

        assert_eq!(decode(&bytes, TextEncoding::Latin1).unwrap().strings[0], "\u{8E}");
        assert_eq!(decode(&bytes, TextEncoding::MacRoman).unwrap().strings[0], "é");
    }

    #[test]
    fn test_truncated_table_fails() {
        assert!(decode(&[0x00, 0x02, 3, b'a'], TextEncoding::Latin1).is_err());
    }
}
