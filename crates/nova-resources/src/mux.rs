//! Multiplexed identifier schemes.
//!
//! Several record fields pack a second meaning into the numeric range of an
//! ID: an explosion index plus "also spawn small explosions", a government
//! plus who else it applies to, and so on. Each scheme here is a total
//! conversion from `i16`. Values outside every documented range decode to an
//! `Unspecified` variant carrying the raw value; real data files contain such
//! values, so they are never an error.

use std::any::Any;

use crate::ids::{BoomId, GovtId, SystId};

/// An explosion reference (`bööm` index with an optional modifier).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ExplosionRef {
    None,
    Boom {
        /// Index into the explosion table, 0..=63.
        index: u8,
        /// Also spawn random type-0 explosions around the main one.
        random_type0: bool,
    },
    Unspecified(i16),
}

impl ExplosionRef {
    /// `(base index, random type-0 modifier)` for a valid reference.
    pub const fn parts(&self) -> Option<(u8, bool)> {
        match *self {
            ExplosionRef::Boom {
                index,
                random_type0,
            } => Some((index, random_type0)),
            _ => None,
        }
    }

    /// The referenced `bööm` record.
    pub const fn boom(&self) -> Option<BoomId> {
        match self.parts() {
            Some((index, _)) => Some(BoomId::from_index(index)),
            None => None,
        }
    }
}

impl From<i16> for ExplosionRef {
    fn from(value: i16) -> Self {
        match value {
            -1 => ExplosionRef::None,
            0..=63 => ExplosionRef::Boom {
                index: value as u8,
                random_type0: false,
            },
            1000..=1063 => ExplosionRef::Boom {
                index: (value - 1000) as u8,
                random_type0: true,
            },
            other => ExplosionRef::Unspecified(other),
        }
    }
}

/// Which governments an outfit is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum GovtScope {
    /// No restriction.
    All,
    GovtAndAllies(GovtId),
    GovtAlliesAndIndependents(GovtId),
    ExceptGovtAndAllies(GovtId),
    ExceptGovtAlliesAndIndependents(GovtId),
    Unspecified(i16),
}

impl GovtScope {
    pub const fn govt(&self) -> Option<GovtId> {
        match *self {
            GovtScope::GovtAndAllies(g)
            | GovtScope::GovtAlliesAndIndependents(g)
            | GovtScope::ExceptGovtAndAllies(g)
            | GovtScope::ExceptGovtAlliesAndIndependents(g) => Some(g),
            GovtScope::All | GovtScope::Unspecified(_) => None,
        }
    }
}

impl From<i16> for GovtScope {
    fn from(value: i16) -> Self {
        let govt = GovtId(value % 1000);
        match value {
            -1 => GovtScope::All,
            128..=383 => GovtScope::GovtAndAllies(govt),
            1128..=1383 => GovtScope::GovtAlliesAndIndependents(govt),
            2128..=2383 => GovtScope::ExceptGovtAndAllies(govt),
            3128..=3383 => GovtScope::ExceptGovtAlliesAndIndependents(govt),
            other => GovtScope::Unspecified(other),
        }
    }
}

/// A ship class's built-in government.
///
/// The combat government decides who the ship fights alongside; the
/// attribute government lends it that government's behaviour flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum InherentGovt {
    None,
    CombatAndAttributes(GovtId),
    AttributesOnly(GovtId),
    CombatOnly(GovtId),
    Unspecified(i16),
}

impl InherentGovt {
    pub const fn combat(&self) -> Option<GovtId> {
        match *self {
            InherentGovt::CombatAndAttributes(g) | InherentGovt::CombatOnly(g) => Some(g),
            _ => None,
        }
    }

    pub const fn attributes(&self) -> Option<GovtId> {
        match *self {
            InherentGovt::CombatAndAttributes(g) | InherentGovt::AttributesOnly(g) => Some(g),
            _ => None,
        }
    }
}

impl From<i16> for InherentGovt {
    fn from(value: i16) -> Self {
        let govt = GovtId(value % 1000);
        match value {
            -1 => InherentGovt::None,
            128..=383 => InherentGovt::CombatAndAttributes(govt),
            1128..=1383 => InherentGovt::AttributesOnly(govt),
            2128..=2383 => InherentGovt::CombatOnly(govt),
            other => InherentGovt::Unspecified(other),
        }
    }
}

/// Where a fleet or named character may appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SystemSelector {
    Any,
    System(SystId),
    /// A system owned by the government.
    GovtSystem(GovtId),
    /// A system owned by an ally of the government.
    AllySystem(GovtId),
    /// Any system not owned by the government.
    NonGovtSystem(GovtId),
    /// A system owned by an enemy of the government.
    EnemySystem(GovtId),
    Unspecified(i16),
}

impl From<i16> for SystemSelector {
    fn from(value: i16) -> Self {
        // Government ranges are 256 wide, each mapping onto govt IDs 128..=383.
        let govt = |base: i16| GovtId(value - base + 128);
        match value {
            -1 => SystemSelector::Any,
            128..=2175 => SystemSelector::System(SystId(value)),
            10000..=10255 => SystemSelector::GovtSystem(govt(10000)),
            15000..=15255 => SystemSelector::AllySystem(govt(15000)),
            20000..=20255 => SystemSelector::NonGovtSystem(govt(20000)),
            25000..=25255 => SystemSelector::EnemySystem(govt(25000)),
            other => SystemSelector::Unspecified(other),
        }
    }
}

/// A planet's defense fleet size.
///
/// Values of 1000 and up encode waves: the last digit is ships per wave and
/// the remaining digits minus 100 the number of waves (1053 is 5 waves of 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DefenseFleet {
    pub ships: i16,
    pub waves: i16,
}

impl From<i16> for DefenseFleet {
    fn from(value: i16) -> Self {
        if value >= 1000 {
            DefenseFleet {
                ships: value % 10,
                waves: value / 10 - 100,
            }
        } else {
            DefenseFleet {
                ships: value,
                waves: 1,
            }
        }
    }
}

from_i16_raw!(ExplosionRef, GovtScope, InherentGovt, SystemSelector, DefenseFleet);

/// Whether a record field holds a multiplexed ID outside every known range.
/// Fields of any other type never count.
pub fn is_unspecified(field: &dyn Any) -> bool {
    if let Some(v) = field.downcast_ref::<ExplosionRef>() {
        matches!(v, ExplosionRef::Unspecified(_))
    } else if let Some(v) = field.downcast_ref::<GovtScope>() {
        matches!(v, GovtScope::Unspecified(_))
    } else if let Some(v) = field.downcast_ref::<InherentGovt>() {
        matches!(v, InherentGovt::Unspecified(_))
    } else if let Some(v) = field.downcast_ref::<SystemSelector>() {
        matches!(v, SystemSelector::Unspecified(_))
    } else {
        false
    }
}

code_enum! {
    /// Ship AI behaviour.
    pub enum AiType {
        /// Use the ship class's inherent AI.
        Inherent = 0,
        WimpyTrader = 1,
        BraveTrader = 2,
        Warship = 3,
        Interceptor = 4,
    }
}

code_enum! {
    /// The six standard commodities.
    pub enum Commodity {
        Food = 0,
        Industrial = 1,
        Medical = 2,
        Luxury = 3,
        Metal = 4,
        Equipment = 5,
    }
}

impl Commodity {
    pub const ALL: [Commodity; 6] = [
        Commodity::Food,
        Commodity::Industrial,
        Commodity::Medical,
        Commodity::Luxury,
        Commodity::Metal,
        Commodity::Equipment,
    ];
}
