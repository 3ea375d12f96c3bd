//! Positional layout of the pilot save data.
//!
//! A pilot is two resources: the pilot record (`NpïL` 128) and the pilot
//! state (`NpïL` 129). Both are plain big-endian structures with no
//! self-describing fields. Arrays indexed by game object hold one entry per
//! possible ID starting at 128.

use zerocopy::byteorder::big_endian::{I16, I32, U16};
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

pub const PILOT_RECORD_SIZE: usize = 0xE9B2;
pub const PILOT_STATE_SIZE: usize = 0x66FE;
pub const SAVE_SIZE: usize = PILOT_RECORD_SIZE + PILOT_STATE_SIZE;

pub const MAX_SYSTEMS: usize = 2048;
pub const MAX_STELLARS: usize = 2048;
pub const MAX_OUTFITS: usize = 512;
pub const MAX_WEAPONS: usize = 256;
pub const MAX_MISSIONS: usize = 16;
pub const MISSION_BITS: usize = 10000;
pub const MAX_ESCORTS: usize = 64;
pub const MAX_PERSONS: usize = 1024;
pub const MAX_DISASTERS: usize = 256;
pub const MAX_JUNKS: usize = 128;
pub const MAX_CRONS: usize = 512;
pub const MAX_RANKS: usize = 128;

pub const MISSION_OBJECTIVE_SIZE: usize = 0x14;
pub const MISSION_DATA_SIZE: usize = 0x8EC;

/// Longest nickname the length byte can describe within its field.
pub const NICKNAME_MAX: usize = 63;
pub const DATE_AFFIX_SIZE: usize = 16;

/// The pilot record.
#[derive(Clone, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
#[repr(C)]
pub struct PilotRecord {
    pub last_stellar: I16,
    pub ship_class: I16,
    /// Tons of each standard commodity aboard.
    pub cargo: [I16; 6],
    pub _reserved0: I16,
    /// Hundredths of a jump.
    pub fuel: I16,
    pub month: I16,
    pub day: I16,
    pub year: I16,
    pub exploration: [I16; MAX_SYSTEMS],
    pub outfit_counts: [I16; MAX_OUTFITS],
    pub legal_status: [I16; MAX_SYSTEMS],
    pub weapon_counts: [I16; MAX_WEAPONS],
    pub ammo: [I16; MAX_WEAPONS],
    pub cash: I32,
    pub mission_objectives: [[u8; MISSION_OBJECTIVE_SIZE]; MAX_MISSIONS],
    pub mission_data: [[u8; MISSION_DATA_SIZE]; MAX_MISSIONS],
    pub mission_bits: [u8; MISSION_BITS],
    pub stellar_dominated: [u8; MAX_STELLARS],
    pub escorts: [I16; MAX_ESCORTS],
    pub fighters: [I16; MAX_ESCORTS],
    pub escort_flags: [[I16; MAX_ESCORTS]; 2],
    pub escort_extra: [I16; MAX_ESCORTS],
    pub combat_rating: I32,
}

/// The pilot state record.
#[derive(Clone, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
#[repr(C)]
pub struct PilotState {
    pub version: I16,
    pub strict_play: I16,
    pub gender: I16,
    pub stellar_ship_count: [I16; MAX_STELLARS],
    pub person_alive: [I16; MAX_PERSONS],
    pub person_grudge: [I16; MAX_PERSONS],
    pub _reserved0: [I16; 64],
    pub stellar_annoyance: [I16; MAX_STELLARS],
    pub seen_intro: u8,
    pub _reserved1: u8,
    pub disaster_time: [I16; MAX_DISASTERS],
    pub disaster_stellar: [I16; MAX_DISASTERS],
    pub junk_quantity: [I16; MAX_JUNKS],
    pub price_fluctuation: [[I16; 2]; 2],
    pub cron_duration: [I16; MAX_CRONS],
    pub cron_holdoff: [I16; MAX_CRONS],
    pub stellar_owned: [I16; MAX_STELLARS],
    pub stellar_destroyed: [I16; MAX_STELLARS],
    pub _reserved2: [I16; 4],
    /// Length byte followed by up to 63 text bytes.
    pub nickname: [u8; 1 + NICKNAME_MAX],
    /// 16-bit red, green and blue.
    pub ship_color: [U16; 3],
    pub rank_active: [I16; MAX_RANKS],
    pub date_prefix: [u8; DATE_AFFIX_SIZE],
    pub date_suffix: [u8; DATE_AFFIX_SIZE],
    pub _reserved3: [I16; 1024],
}

/// Both pilot resources back to back, as stored in a save file.
#[derive(Clone, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
#[repr(C)]
pub struct SaveRecordLayout {
    pub pilot: PilotRecord,
    pub state: PilotState,
}

const _: () = assert!(std::mem::size_of::<PilotRecord>() == PILOT_RECORD_SIZE);
const _: () = assert!(std::mem::size_of::<PilotState>() == PILOT_STATE_SIZE);
const _: () = assert!(std::mem::size_of::<SaveRecordLayout>() == SAVE_SIZE);
