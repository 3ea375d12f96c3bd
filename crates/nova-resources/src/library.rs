//! The resource library assembler.
//!
//! [`ResourceLibrary::load`] walks the registry in order, pulls every raw
//! record of each type from a [`RecordSource`] and decodes it into one
//! ID-keyed map per type. Types marked [`DecodeStrategy::Parallel`] fan out
//! one rayon task per record; the map insert is the only step taken under
//! the lock. The first decode failure aborts the whole load.

use std::collections::hash_map::Entry;
use std::fmt;

use log::{debug, info, warn};
use nova_common::TypeTag;
use rustc_hash::FxHashMap;

use crate::ids::ColrId;
use crate::codec::ImageCodec;
use crate::registry::{DecodeContext, DecodeOptions, DecodeStrategy, RecordType};
use crate::source::{RawRecord, RecordSource};
use crate::types::*;
use crate::{Error, Result};

/// Settings for [`ResourceLibrary::load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LibraryOptions {
    pub decode: DecodeOptions,
    /// Fan out image-heavy types across threads. Ignored without the
    /// `parallel` feature.
    pub parallel: bool,
}

impl Default for LibraryOptions {
    fn default() -> Self {
        Self {
            decode: DecodeOptions::default(),
            parallel: true,
        }
    }
}

/// Decoded records of one type, keyed by ID.
pub struct RecordMap<T: RecordType> {
    records: FxHashMap<T::Id, T>,
}

impl<T: RecordType> RecordMap<T> {
    pub fn new() -> Self {
        Self {
            records: FxHashMap::default(),
        }
    }

    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.records.get(&id)
    }

    pub fn contains(&self, id: T::Id) -> bool {
        self.records.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.records.values()
    }

    /// Records ordered by ID.
    pub fn sorted(&self) -> Vec<&T> {
        let mut records: Vec<&T> = self.records.values().collect();
        records.sort_unstable_by_key(|r| r.id());
        records
    }

    /// Insert a record, replacing and returning any previous one with its ID.
    pub fn insert(&mut self, record: T) -> Option<T> {
        match self.records.entry(record.id()) {
            Entry::Occupied(mut slot) => Some(std::mem::replace(slot.get_mut(), record)),
            Entry::Vacant(slot) => {
                slot.insert(record);
                None
            }
        }
    }

    /// Layer `other` over this map. Returns how many records were replaced.
    pub fn overlay(&mut self, other: RecordMap<T>) -> usize {
        other
            .records
            .into_values()
            .filter_map(|record| self.insert(record))
            .count()
    }
}

impl<T: RecordType> Default for RecordMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RecordType + fmt::Debug> fmt::Debug for RecordMap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordMap")
            .field("type", &T::NAME)
            .field("len", &self.records.len())
            .finish()
    }
}

/// Typed access to the map holding `T`.
pub trait Records<T: RecordType> {
    fn records(&self) -> &RecordMap<T>;
}

/// Record count of one type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TypeCount {
    pub tag: TypeTag,
    pub name: &'static str,
    pub count: usize,
}

/// Per-type record counts, in registry order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LibraryStats {
    pub types: Vec<TypeCount>,
    /// Multiplexed ID fields whose value matched no known range.
    pub unspecified_ids: usize,
}

impl LibraryStats {
    pub fn total(&self) -> usize {
        self.types.iter().map(|t| t.count).sum()
    }

    pub fn count(&self, tag: TypeTag) -> usize {
        self.types
            .iter()
            .find(|t| t.tag == tag)
            .map_or(0, |t| t.count)
    }
}

impl fmt::Display for LibraryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for t in self.types.iter().filter(|t| t.count > 0) {
            writeln!(f, "{:<6} {:<8} {:>6}", t.tag.to_string(), t.name, t.count)?;
        }
        write!(f, "{} records", self.total())
    }
}

macro_rules! resource_library {
    ($($field:ident: $ty:ty),* $(,)?) => {
        /// Every decoded record of a data file set, keyed by type and ID.
        ///
        /// Read-only once loaded. Cross-references between records stay as
        /// plain IDs.
        #[derive(Debug, Default)]
        pub struct ResourceLibrary {
            $($field: RecordMap<$ty>,)*
        }

        impl ResourceLibrary {
            fn assemble(
                source: &dyn RecordSource,
                ctx: &DecodeContext<'_>,
                parallel: bool,
            ) -> Result<Self> {
                // Fields initialize in declaration order, which is registry order.
                Ok(Self {
                    $($field: assemble::<$ty>(source, ctx, parallel)?,)*
                })
            }

            $(
                pub fn $field(&self) -> &RecordMap<$ty> {
                    &self.$field
                }
            )*

            /// Layer a plug-in library over this one. Records with the same
            /// type and ID in `overlay` replace the existing ones.
            pub fn merge(&mut self, overlay: ResourceLibrary) {
                let mut replaced = 0;
                $(replaced += self.$field.overlay(overlay.$field);)*
                debug!("merged plug-in library, {} records replaced", replaced);
            }

            pub fn stats(&self) -> LibraryStats {
                LibraryStats {
                    types: vec![$(TypeCount {
                        tag: <$ty>::TAG,
                        name: <$ty>::NAME,
                        count: self.$field.len(),
                    },)*],
                    unspecified_ids: 0 $(+ self.$field.iter().map(<$ty as RecordType>::unspecified_ids).sum::<usize>())*,
                }
            }
        }

        $(
            impl Records<$ty> for ResourceLibrary {
                fn records(&self) -> &RecordMap<$ty> {
                    &self.$field
                }
            }
        )*
    };
}

resource_library! {
    colrs: Colr,
    booms: Boom,
    chars: Char,
    cicns: Cicn,
    crons: Cron,
    descs: Desc,
    dudes: Dude,
    fleets: Flet,
    govts: Govt,
    intfs: Intf,
    junks: Junk,
    missions: Misn,
    nebulae: Nebu,
    disasters: Oops,
    outfits: Outf,
    persons: Pers,
    picts: Pict,
    ranks: Rank,
    sprite_sheets: RleD,
    roids: Roid,
    shans: Shan,
    ships: Ship,
    sounds: Snd,
    spins: Spin,
    stellars: Spob,
    string_lists: StrList,
    systems: Syst,
    weapons: Weap,
}

impl ResourceLibrary {
    /// Decode every registered type from `source`.
    ///
    /// Image records go through `codec`. Fails on the first record that
    /// does not decode; no partial library is returned.
    pub fn load(
        source: &dyn RecordSource,
        codec: &dyn ImageCodec,
        options: &LibraryOptions,
    ) -> Result<Self> {
        let ctx = DecodeContext::with_codec(&options.decode, codec);
        let library = Self::assemble(source, &ctx, options.parallel)?;

        let stats = library.stats();
        if stats.unspecified_ids > 0 {
            warn!(
                "{} multiplexed IDs fell outside every known range",
                stats.unspecified_ids
            );
        }
        info!(
            "loaded resource library: {} records of {} types",
            stats.total(),
            stats.types.iter().filter(|t| t.count > 0).count()
        );
        Ok(library)
    }

    /// Look up any record type by ID.
    pub fn get<T: RecordType>(&self, id: T::Id) -> Option<&T>
    where
        Self: Records<T>,
    {
        Records::<T>::records(self).get(id)
    }

    /// The interface color set (`cölr` 128).
    pub fn interface_colors(&self) -> Option<&Colr> {
        self.colrs.get(ColrId(128))
    }
}

fn assemble<T: RecordType>(
    source: &dyn RecordSource,
    ctx: &DecodeContext<'_>,
    parallel: bool,
) -> Result<RecordMap<T>> {
    let records = source.records(T::TAG)?;

    let map = match T::STRATEGY {
        #[cfg(feature = "parallel")]
        DecodeStrategy::Parallel if parallel => decode_parallel::<T>(&records, ctx)?,
        _ => decode_sequential::<T>(&records, ctx)?,
    };
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    debug!("assembled {} {} records", map.len(), T::TAG);
    Ok(map)
}

fn decode_one<T: RecordType>(record: &RawRecord<'_>, ctx: &DecodeContext<'_>) -> Result<T> {
    T::decode(record, ctx).map_err(|e| e.in_record(record.tag, record.id))
}

fn insert_logged<T: RecordType>(map: &mut RecordMap<T>, record: T) {
    let id = record.id();
    if map.insert(record).is_some() {
        warn!("duplicate {} record #{}, keeping the later one", T::TAG, id);
    }
}

fn decode_sequential<T: RecordType>(
    records: &[RawRecord<'_>],
    ctx: &DecodeContext<'_>,
) -> Result<RecordMap<T>> {
    let mut map = RecordMap::new();
    for record in records {
        insert_logged(&mut map, decode_one::<T>(record, ctx)?);
    }
    Ok(map)
}

#[cfg(feature = "parallel")]
fn decode_parallel<T: RecordType>(
    records: &[RawRecord<'_>],
    ctx: &DecodeContext<'_>,
) -> Result<RecordMap<T>> {
    use parking_lot::Mutex;
    use rayon::prelude::*;

    let map = Mutex::new(RecordMap::new());

    records.par_iter().try_for_each(|record| {
        let decoded = decode_one::<T>(record, ctx)?;
        insert_logged(&mut map.lock(), decoded);
        Ok::<(), Error>(())
    })?;

    Ok(map.into_inner())
}
