//! Raw record sources.
//!
//! Locating records inside a resource fork is outside this crate. A
//! [`RecordSource`] hands over every record of a type as borrowed bytes;
//! decoders never keep the borrow past a single decode call.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::debug;
use nova_common::TypeTag;

use crate::{Error, Result};

/// One tagged, numbered record body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRecord<'a> {
    pub tag: TypeTag,
    pub id: i16,
    pub bytes: &'a [u8],
}

/// Supplies raw records by type tag.
pub trait RecordSource {
    /// All records filed under `tag`, in any order. Unknown tags yield none.
    fn records(&self, tag: TypeTag) -> Result<Vec<RawRecord<'_>>>;

    /// A single record by ID.
    fn record(&self, tag: TypeTag, id: i16) -> Result<Option<RawRecord<'_>>> {
        Ok(self.records(tag)?.into_iter().find(|r| r.id == id))
    }
}

/// Records held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryRecordSource {
    records: BTreeMap<TypeTag, BTreeMap<i16, Vec<u8>>>,
}

impl MemoryRecordSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a record, returning the previous body.
    pub fn insert(&mut self, tag: TypeTag, id: i16, bytes: impl Into<Vec<u8>>) -> Option<Vec<u8>> {
        self.records.entry(tag).or_default().insert(id, bytes.into())
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, tag: TypeTag, id: i16, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(tag, id, bytes);
        self
    }

    /// Total number of records across all tags.
    pub fn len(&self) -> usize {
        self.records.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn tags(&self) -> impl Iterator<Item = TypeTag> + '_ {
        self.records.keys().copied()
    }
}

impl RecordSource for MemoryRecordSource {
    fn records(&self, tag: TypeTag) -> Result<Vec<RawRecord<'_>>> {
        Ok(self
            .records
            .get(&tag)
            .map(|by_id| {
                by_id
                    .iter()
                    .map(|(&id, bytes)| RawRecord {
                        tag,
                        id,
                        bytes: bytes.as_slice(),
                    })
                    .collect()
            })
            .unwrap_or_default())
    }

    fn record(&self, tag: TypeTag, id: i16) -> Result<Option<RawRecord<'_>>> {
        Ok(self
            .records
            .get(&tag)
            .and_then(|by_id| by_id.get(&id))
            .map(|bytes| RawRecord {
                tag,
                id,
                bytes: bytes.as_slice(),
            }))
    }
}

/// Records previously extracted to a directory tree.
///
/// The expected layout is `<root>/<tag>/<id>.<ext>`, where `<tag>` is the
/// Unicode spelling of the type code (`shïp`, `STR#`, `snd `) and `<id>` the
/// decimal record ID. Everything is read up front. A failure inside a tag
/// directory is reported as [`Error::Source`] naming that tag.
#[derive(Debug, Clone, Default)]
pub struct DirectoryRecordSource {
    inner: MemoryRecordSource,
}

impl DirectoryRecordSource {
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        let mut inner = MemoryRecordSource::new();

        for entry in fs::read_dir(root.as_ref())? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let name = entry.file_name();
            let Some(tag) = name.to_str().and_then(|s| s.parse::<TypeTag>().ok()) else {
                debug!("skipping non-tag directory {:?}", name);
                continue;
            };

            let failed = |e: std::io::Error| Error::Source {
                tag,
                source: Box::new(e),
            };
            for file in fs::read_dir(entry.path()).map_err(failed)? {
                let path = file.map_err(failed)?.path();
                let Some(id) = path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .and_then(|s| s.parse::<i16>().ok())
                else {
                    debug!("skipping {}: not a record ID", path.display());
                    continue;
                };
                inner.insert(tag, id, fs::read(&path).map_err(failed)?);
            }
        }

        debug!("loaded {} raw records", inner.len());
        Ok(Self { inner })
    }

    pub fn into_inner(self) -> MemoryRecordSource {
        self.inner
    }
}

impl RecordSource for DirectoryRecordSource {
    fn records(&self, tag: TypeTag) -> Result<Vec<RawRecord<'_>>> {
        self.inner.records(tag)
    }

    fn record(&self, tag: TypeTag, id: i16) -> Result<Option<RawRecord<'_>>> {
        self.inner.record(tag, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_source() {
        let source = MemoryRecordSource::new()
            .with(TypeTag::SHIP, 128, vec![1, 2])
            .with(TypeTag::SHIP, 129, vec![3])
            .with(TypeTag::WEAP, 128, vec![4]);

        assert_eq!(source.len(), 3);
        assert_eq!(source.records(TypeTag::SHIP).unwrap().len(), 2);
        assert!(source.records(TypeTag::SPOB).unwrap().is_empty());
        assert_eq!(
            source.record(TypeTag::WEAP, 128).unwrap().map(|r| r.bytes),
            Some(&[4u8][..])
        );
    }

    #[test]
    fn test_insert_replaces() {
        let mut source = MemoryRecordSource::new();

        assert_eq!(source.insert(TypeTag::SHIP, 128, vec![1]), None);
        assert_eq!(source.insert(TypeTag::SHIP, 128, vec![2]), Some(vec![1]));
    }

    #[test]
    fn test_directory_source() {
        let root = std::env::temp_dir().join(format!("nova-source-test-{}", std::process::id()));
        let ship_dir = root.join("shïp");
        fs::create_dir_all(&ship_dir).unwrap();
        fs::create_dir_all(root.join("not-a-tag")).unwrap();
        fs::write(ship_dir.join("128.bin"), [9u8, 9]).unwrap();
        fs::write(ship_dir.join("readme.txt"), b"ignored").unwrap();

        let source = DirectoryRecordSource::open(&root).unwrap();
        let ships = source.records(TypeTag::SHIP).unwrap();

        assert_eq!(ships.len(), 1);
        assert_eq!(ships[0].id, 128);
        assert_eq!(ships[0].bytes, &[9, 9]);

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_directory_source_names_failing_tag() {
        let root = std::env::temp_dir().join(format!("nova-source-fail-{}", std::process::id()));
        // A directory where a record file is expected cannot be read.
        fs::create_dir_all(root.join("wëap").join("128.bin")).unwrap();

        let err = DirectoryRecordSource::open(&root).unwrap_err();
        fs::remove_dir_all(&root).unwrap();

        assert!(matches!(err, Error::Source { tag, .. } if tag == TypeTag::WEAP));
        assert!(err.to_string().starts_with("record source failed for wëap"));
    }
}
