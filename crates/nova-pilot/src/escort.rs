//! Escort slot encoding.
//!
//! The pilot record stores each escort as one `i16` that packs how the ship
//! joined the player together with its ship class.

use nova_resources::ids::ShipId;

/// One entry of the pilot's escort table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum EscortSlot {
    Empty,
    /// A ship taken by boarding.
    Captured(ShipId),
    /// A ship paid to follow the player.
    Hired(ShipId),
    Unspecified(i16),
}

impl EscortSlot {
    pub const fn ship(&self) -> Option<ShipId> {
        match *self {
            EscortSlot::Captured(ship) | EscortSlot::Hired(ship) => Some(ship),
            _ => None,
        }
    }

    pub const fn is_empty(&self) -> bool {
        matches!(self, EscortSlot::Empty)
    }
}

impl From<i16> for EscortSlot {
    fn from(value: i16) -> Self {
        match value {
            -1 => EscortSlot::Empty,
            0..=767 => EscortSlot::Captured(ShipId(value + 128)),
            1000..=1767 => EscortSlot::Hired(ShipId(value - 1000 + 128)),
            other => EscortSlot::Unspecified(other),
        }
    }
}

impl From<EscortSlot> for i16 {
    fn from(slot: EscortSlot) -> Self {
        match slot {
            EscortSlot::Empty => -1,
            EscortSlot::Captured(ship) => ship.0 - 128,
            EscortSlot::Hired(ship) => ship.0 - 128 + 1000,
            EscortSlot::Unspecified(raw) => raw,
        }
    }
}

/// A carried fighter bay entry: `-1` for none, else a ship class index.
pub fn fighter_class(value: i16) -> Option<ShipId> {
    match value {
        0..=767 => Some(ShipId(value + 128)),
        _ => None,
    }
}
