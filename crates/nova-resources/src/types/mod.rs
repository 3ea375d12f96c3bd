//! One module per record type.
//!
//! Fixed-layout types are declared through `record_type!`; `dësc`, `STR#`
//! and the image and sound types decode by hand.

mod boom;
mod chr;
mod cicn;
mod colr;
mod cron;
mod desc;
mod dude;
mod flet;
mod govt;
mod intf;
mod junk;
mod misn;
mod nebu;
mod oops;
mod outf;
mod pers;
mod pict;
mod rank;
mod rled;
mod roid;
mod shan;
mod ship;
mod snd;
mod spin;
mod spob;
mod stra;
mod syst;
mod weap;

pub use boom::Boom;
pub use chr::Char;
pub use cicn::Cicn;
pub use colr::Colr;
pub use cron::Cron;
pub use desc::Desc;
pub use dude::Dude;
pub use flet::Flet;
pub use govt::Govt;
pub use intf::Intf;
pub use junk::Junk;
pub use misn::{AvailLoc, DropOffMode, Misn, PickupMode, ShipBehaviour, ShipGoal, ShipStart};
pub use nebu::Nebu;
pub use oops::Oops;
pub use outf::{ModType, Outf};
pub use pers::{Aggression, Pers};
pub use pict::Pict;
pub use rank::Rank;
pub use rled::RleD;
pub use roid::Roid;
pub use shan::{BlinkMode, Shan};
pub use ship::{EscortType, Ship};
pub use snd::Snd;
pub use spin::Spin;
pub use spob::{PriceLevel, Spob};
pub use stra::StrList;
pub use syst::Syst;
pub use weap::{Ammo, ExitPoint, Guidance, Weap};

/// Flag name tables, for callers that list or test bits by mask.
pub mod flag_names {
    pub use super::chr::CHAR_FLAGS;
    pub use super::cron::CRON_FLAGS;
    pub use super::desc::DESC_FLAGS;
    pub use super::dude::{DUDE_CARGO, DUDE_INFO};
    pub use super::flet::FLET_FLAGS;
    pub use super::govt::{GOVT_FLAGS, GOVT_FLAGS2};
    pub use super::junk::JUNK_FLAGS;
    pub use super::misn::{MISN_FLAGS, MISN_FLAGS2};
    pub use super::outf::OUTF_FLAGS;
    pub use super::pers::PERS_FLAGS;
    pub use super::rank::RANK_FLAGS;
    pub use super::shan::SHAN_FLAGS;
    pub use super::ship::{SHIP_FLAGS, SHIP_FLAGS2, SHIP_FLAGS3};
    pub use super::spob::{SPOB_FLAGS, SPOB_FLAGS2};
    pub use super::syst::ASTEROID_FLAGS;
    pub use super::weap::{SEEKER_FLAGS, WEAP_FLAGS, WEAP_FLAGS2, WEAP_FLAGS3};
}
