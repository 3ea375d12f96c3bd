//! Typed resource identifiers.
//!
//! Every record type has its own ID newtype so that a ship ID cannot be
//! passed where a weapon ID is expected. Cross-references between records are
//! kept as these plain IDs and resolved by the caller through the library.

use std::fmt;

use crate::field::FieldValue;
use crate::layout::FromRaw;
use crate::Result;

macro_rules! resource_ids {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
            #[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
            pub struct $name(pub i16);

            impl From<i16> for $name {
                #[inline]
                fn from(id: i16) -> Self {
                    Self(id)
                }
            }

            impl From<$name> for i16 {
                #[inline]
                fn from(id: $name) -> Self {
                    id.0
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    self.0.fmt(f)
                }
            }

            impl FromRaw<FieldValue> for $name {
                fn from_raw(raw: FieldValue) -> Result<Self> {
                    i16::from_raw(raw).map(Self)
                }
            }
        )*
    };
}

resource_ids! {
    /// `bööm` explosion.
    BoomId,
    /// `chär` starting pilot type.
    CharId,
    /// `cicn` color icon.
    CicnId,
    /// `cölr` interface colors.
    ColrId,
    /// `crön` timed event.
    CronId,
    /// `dësc` description text.
    DescId,
    /// `düde` ship population mix.
    DudeId,
    /// `flët` fleet.
    FletId,
    /// `gövt` government.
    GovtId,
    /// `ïntf` status bar interface.
    IntfId,
    /// `jünk` special commodity.
    JunkId,
    /// `mïsn` mission.
    MisnId,
    /// `nëbu` nebula.
    NebuId,
    /// `öops` planetary disaster.
    OopsId,
    /// `oütf` outfit item.
    OutfId,
    /// `përs` named character.
    PersId,
    /// `PICT` picture.
    PictId,
    /// `ränk` rank.
    RankId,
    /// `rlëD` run-length encoded sprite sheet.
    RleId,
    /// `röid` asteroid type.
    RoidId,
    /// `shän` ship graphics.
    ShanId,
    /// `shïp` ship class.
    ShipId,
    /// `snd ` sound.
    SndId,
    /// `spïn` sprite sheet reference.
    SpinId,
    /// `spöb` stellar object.
    SpobId,
    /// `STR#` string list.
    StrId,
    /// `sÿst` star system.
    SystId,
    /// `wëap` weapon.
    WeapId,
}

impl DescId {
    pub const STELLAR_BASE: i16 = 128;
    pub const OUTFIT_BASE: i16 = 3000;
    pub const MISSION_BASE: i16 = 4000;
    pub const SHIP_CLASS_BASE: i16 = 13000;
    pub const ESCAPE_POD: Self = Self(13999);
    pub const PILOT_BASE: i16 = 14000;
    pub const RESERVED_BASE: i16 = 32760;
}

/// Map a record ID in the `128..` range onto a block of derived IDs.
#[inline]
const fn rebase(id: i16, base: i16) -> i16 {
    base.wrapping_add(id.wrapping_sub(128))
}

impl SpobId {
    /// The description shown when landing.
    pub const fn desc(self) -> DescId {
        DescId(rebase(self.0, DescId::STELLAR_BASE))
    }
}

impl OutfId {
    pub const PICT_BASE: i16 = 6000;

    pub const fn desc(self) -> DescId {
        DescId(rebase(self.0, DescId::OUTFIT_BASE))
    }

    /// The picture shown in the outfitter.
    pub const fn pict(self) -> PictId {
        PictId(rebase(self.0, Self::PICT_BASE))
    }
}

impl MisnId {
    pub const fn desc(self) -> DescId {
        DescId(rebase(self.0, DescId::MISSION_BASE))
    }
}

impl ShipId {
    /// The shipyard description.
    pub const fn desc(self) -> DescId {
        DescId(rebase(self.0, DescId::SHIP_CLASS_BASE))
    }
}

impl CharId {
    pub const fn desc(self) -> DescId {
        DescId(rebase(self.0, DescId::PILOT_BASE))
    }
}

impl BoomId {
    /// Explosion records are referenced by index from 128.
    pub const fn from_index(index: u8) -> Self {
        Self(128 + index as i16)
    }
}

impl RleId {
    /// Planet landscapes are `rlëD` sheets offset from the spöb graphic type.
    pub const SPOB_BASE: i16 = 2000;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_ids() {
        assert_eq!(ShipId(128).desc(), DescId(13000));
        assert_eq!(ShipId(130).desc(), DescId(13002));
        assert_eq!(OutfId(129).pict(), PictId(6001));
        assert_eq!(OutfId(128).desc(), DescId(3000));
        assert_eq!(SpobId(128).desc(), DescId(128));
        assert_eq!(BoomId::from_index(5), BoomId(133));
    }

    #[test]
    fn test_from_field_value() {
        assert_eq!(ShipId::from_raw(FieldValue::Int(200)).unwrap(), ShipId(200));
        assert!(ShipId::from_raw(FieldValue::Int(70000)).is_err());
        assert!(ShipId::from_raw(FieldValue::Absent).is_err());
    }
}
