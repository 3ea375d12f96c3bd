//! Pilot file handling.

use std::fmt;
use std::fs;
use std::path::Path;

use log::{debug, info};
use nova_common::{BinaryReader, Color, TextEncoding, TypeTag};
use nova_resources::ids::{OutfId, RankId, ShipId, SpobId, SystId};
use nova_resources::RecordSource;
use zerocopy::byteorder::big_endian::{I16, I32};
use zerocopy::{FromZeros, IntoBytes};

use crate::cipher::{apply_cipher, PILOT_KEY};
use crate::escort::{fighter_class, EscortSlot};
use crate::layout::*;
use crate::{Error, Result};

/// Resource ID of the pilot record.
pub const PILOT_RECORD_ID: i16 = 128;
/// Resource ID of the pilot state.
pub const PILOT_STATE_ID: i16 = 129;

/// Oldest state version this layout understands, exclusive.
const MIN_VERSION: i16 = 0x12B;

/// Exploration state of one system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Exploration {
    Unexplored,
    Explored,
    Visited,
    Unspecified(i16),
}

impl From<i16> for Exploration {
    fn from(value: i16) -> Self {
        match value {
            0 => Exploration::Unexplored,
            1 => Exploration::Explored,
            2 => Exploration::Visited,
            other => Exploration::Unspecified(other),
        }
    }
}

/// The in-game calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GameDate {
    pub day: i16,
    pub month: i16,
    pub year: i16,
}

/// A short overview of a pilot, for display.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PilotSummary {
    pub nickname: String,
    pub date: GameDate,
    pub date_prefix: String,
    pub date_suffix: String,
    pub cash: i32,
    pub ship_class: ShipId,
    pub fuel: i16,
    pub combat_rating: i32,
    pub systems_explored: usize,
    pub active_missions: Vec<usize>,
    pub escorts: Vec<EscortSlot>,
    pub version: i16,
}

/// Map an object ID onto its index in a per-object table.
fn slot(id: i16, len: usize) -> Option<usize> {
    let index = usize::try_from(id.checked_sub(128)?).ok()?;
    (index < len).then_some(index)
}

/// A decoded EV Nova pilot.
///
/// Holds the plain (decrypted) save layout. Encryption happens only at the
/// byte boundary: [`from_bytes`](Self::from_bytes) and
/// [`to_bytes`](Self::to_bytes) for whole save files,
/// [`from_resources`](Self::from_resources) and
/// [`to_resources`](Self::to_resources) for the two `NpïL` resources.
#[derive(Clone)]
pub struct PilotFile {
    layout: Box<SaveRecordLayout>,
    text: TextEncoding,
}

impl PilotFile {
    /// A zeroed pilot at the oldest supported version.
    pub fn new() -> Self {
        let mut layout = Box::new(SaveRecordLayout::new_zeroed());
        layout.state.version = I16::new(MIN_VERSION + 1);
        Self {
            layout,
            text: TextEncoding::default(),
        }
    }

    /// Use `text` for nickname and date affix strings.
    pub fn with_text_encoding(mut self, text: TextEncoding) -> Self {
        self.text = text;
        self
    }

    /// Read and decrypt a save file from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let pilot = Self::from_bytes(&bytes)?;
        info!("loaded pilot {:?} from {}", pilot.nickname(), path.display());
        Ok(pilot)
    }

    /// Decode an encrypted save file buffer.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() != SAVE_SIZE {
            return Err(Error::SizeMismatch {
                expected: SAVE_SIZE,
                actual: data.len(),
            });
        }

        let mut plain = data.to_vec();
        apply_cipher(&mut plain, PILOT_KEY);
        Self::from_plain(&plain)
    }

    /// Decode the two encrypted `NpïL` resources. Each carries its own
    /// cipher stream.
    pub fn from_resources(pilot: &[u8], state: &[u8]) -> Result<Self> {
        for (data, expected) in [(pilot, PILOT_RECORD_SIZE), (state, PILOT_STATE_SIZE)] {
            if data.len() != expected {
                return Err(Error::SizeMismatch {
                    expected,
                    actual: data.len(),
                });
            }
        }

        let mut plain = Vec::with_capacity(SAVE_SIZE);
        for data in [pilot, state] {
            let start = plain.len();
            plain.extend_from_slice(data);
            apply_cipher(&mut plain[start..], PILOT_KEY);
        }
        Self::from_plain(&plain)
    }

    /// Fetch and decode `NpïL` 128 and 129 from a record source.
    pub fn from_record_source(source: &dyn RecordSource) -> Result<Self> {
        let pilot = source
            .record(TypeTag::PILOT, PILOT_RECORD_ID)?
            .ok_or(Error::MissingResource(PILOT_RECORD_ID))?;
        let state = source
            .record(TypeTag::PILOT, PILOT_STATE_ID)?
            .ok_or(Error::MissingResource(PILOT_STATE_ID))?;
        Self::from_resources(pilot.bytes, state.bytes)
    }

    fn from_plain(plain: &[u8]) -> Result<Self> {
        if plain.len() != SAVE_SIZE {
            return Err(Error::SizeMismatch {
                expected: SAVE_SIZE,
                actual: plain.len(),
            });
        }
        let layout = BinaryReader::new(plain).read_struct::<SaveRecordLayout>()?;

        let version = layout.state.version.get();
        if version <= MIN_VERSION {
            return Err(Error::UnsupportedVersion(version));
        }

        Ok(Self {
            layout: Box::new(layout),
            text: TextEncoding::default(),
        })
    }

    /// Encrypt into a whole save file buffer.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = self.layout.as_bytes().to_vec();
        apply_cipher(&mut bytes, PILOT_KEY);
        bytes
    }

    /// Encrypt into the `(NpïL 128, NpïL 129)` resource bodies.
    pub fn to_resources(&self) -> (Vec<u8>, Vec<u8>) {
        let mut pilot = self.layout.pilot.as_bytes().to_vec();
        let mut state = self.layout.state.as_bytes().to_vec();
        apply_cipher(&mut pilot, PILOT_KEY);
        apply_cipher(&mut state, PILOT_KEY);
        (pilot, state)
    }

    /// Encrypt and write a save file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_bytes())?;
        debug!("wrote pilot to {}", path.display());
        Ok(())
    }

    /// The plain positional layout.
    pub fn layout(&self) -> &SaveRecordLayout {
        &self.layout
    }

    pub fn layout_mut(&mut self) -> &mut SaveRecordLayout {
        &mut self.layout
    }

    pub fn version(&self) -> i16 {
        self.layout.state.version.get()
    }

    pub fn nickname(&self) -> String {
        let field = &self.layout.state.nickname;
        let len = usize::from(field[0]).min(NICKNAME_MAX);
        self.text.decode(&field[1..=len])
    }

    pub fn set_nickname(&mut self, nickname: &str) -> Result<()> {
        let bytes = self.text.encode(nickname);
        if bytes.len() > NICKNAME_MAX {
            return Err(Error::TextTooLong {
                len: bytes.len(),
                max: NICKNAME_MAX,
            });
        }

        let field = &mut self.layout.state.nickname;
        field.fill(0);
        field[0] = bytes.len() as u8;
        field[1..=bytes.len()].copy_from_slice(&bytes);
        Ok(())
    }

    pub fn date(&self) -> GameDate {
        let pilot = &self.layout.pilot;
        GameDate {
            day: pilot.day.get(),
            month: pilot.month.get(),
            year: pilot.year.get(),
        }
    }

    /// Text shown before the year, e.g. "UE ".
    pub fn date_prefix(&self) -> Result<String> {
        self.affix(&self.layout.state.date_prefix)
    }

    pub fn date_suffix(&self) -> Result<String> {
        self.affix(&self.layout.state.date_suffix)
    }

    fn affix(&self, field: &[u8; DATE_AFFIX_SIZE]) -> Result<String> {
        Ok(BinaryReader::new(field).read_cstring(DATE_AFFIX_SIZE, self.text)?)
    }

    pub fn cash(&self) -> i32 {
        self.layout.pilot.cash.get()
    }

    pub fn set_cash(&mut self, cash: i32) {
        self.layout.pilot.cash = I32::new(cash);
    }

    pub fn ship_class(&self) -> ShipId {
        ShipId(self.layout.pilot.ship_class.get())
    }

    pub fn last_stellar(&self) -> SpobId {
        SpobId(self.layout.pilot.last_stellar.get())
    }

    pub fn fuel(&self) -> i16 {
        self.layout.pilot.fuel.get()
    }

    pub fn combat_rating(&self) -> i32 {
        self.layout.pilot.combat_rating.get()
    }

    pub fn exploration(&self, system: SystId) -> Option<Exploration> {
        let exploration = &self.layout.pilot.exploration;
        slot(system.0, MAX_SYSTEMS).map(|i| Exploration::from(exploration[i].get()))
    }

    pub fn legal_status(&self, system: SystId) -> Option<i16> {
        slot(system.0, MAX_SYSTEMS).map(|i| self.layout.pilot.legal_status[i].get())
    }

    pub fn outfit_count(&self, outfit: OutfId) -> Option<i16> {
        slot(outfit.0, MAX_OUTFITS).map(|i| self.layout.pilot.outfit_counts[i].get())
    }

    /// Mission bit `bit`, or `None` past the end of the table.
    pub fn mission_bit(&self, bit: usize) -> Option<bool> {
        self.layout.pilot.mission_bits.get(bit).map(|&b| b != 0)
    }

    /// Set mission bit `bit`. Returns false when it is out of range.
    pub fn set_mission_bit(&mut self, bit: usize, value: bool) -> bool {
        match self.layout.pilot.mission_bits.get_mut(bit) {
            Some(b) => {
                *b = u8::from(value);
                true
            }
            None => false,
        }
    }

    /// Indices of occupied mission slots.
    ///
    /// A slot is occupied when the first byte of its objective is set.
    pub fn active_missions(&self) -> impl Iterator<Item = usize> + '_ {
        self.layout
            .pilot
            .mission_objectives
            .iter()
            .enumerate()
            .filter(|(_, objective)| objective[0] != 0)
            .map(|(i, _)| i)
    }

    pub fn escorts(&self) -> impl Iterator<Item = EscortSlot> + '_ {
        self.layout
            .pilot
            .escorts
            .iter()
            .map(|raw| EscortSlot::from(raw.get()))
            .filter(|slot| !slot.is_empty())
    }

    pub fn set_escort(&mut self, index: usize, escort: EscortSlot) -> bool {
        match self.layout.pilot.escorts.get_mut(index) {
            Some(raw) => {
                *raw = I16::new(escort.into());
                true
            }
            None => false,
        }
    }

    pub fn fighters(&self) -> impl Iterator<Item = ShipId> + '_ {
        self.layout
            .pilot
            .fighters
            .iter()
            .filter_map(|raw| fighter_class(raw.get()))
    }

    pub fn rank_active(&self, rank: RankId) -> bool {
        slot(rank.0, MAX_RANKS).is_some_and(|i| self.layout.state.rank_active[i].get() != 0)
    }

    /// Ship tint, reduced from 16-bit channels.
    pub fn ship_color(&self) -> Color {
        let [r, g, b] = self.layout.state.ship_color.map(|c| (c.get() >> 8) as u8);
        Color { a: 0xFF, r, g, b }
    }

    pub fn summary(&self) -> Result<PilotSummary> {
        Ok(PilotSummary {
            nickname: self.nickname(),
            date: self.date(),
            date_prefix: self.date_prefix()?,
            date_suffix: self.date_suffix()?,
            cash: self.cash(),
            ship_class: self.ship_class(),
            fuel: self.fuel(),
            combat_rating: self.combat_rating(),
            systems_explored: self
                .layout
                .pilot
                .exploration
                .iter()
                .filter(|e| e.get() != 0)
                .count(),
            active_missions: self.active_missions().collect(),
            escorts: self.escorts().collect(),
            version: self.version(),
        })
    }
}

impl Default for PilotFile {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PilotFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PilotFile")
            .field("nickname", &self.nickname())
            .field("version", &self.version())
            .field("cash", &self.cash())
            .field("ship_class", &self.ship_class())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nova_resources::MemoryRecordSource;
    use zerocopy::byteorder::big_endian::U16;

    fn sample() -> PilotFile {
        let mut pilot = PilotFile::new();
        pilot.set_nickname("Rook").unwrap();
        pilot.set_cash(25_000);
        {
            let layout = pilot.layout_mut();
            layout.pilot.ship_class = I16::new(129);
            layout.pilot.fuel = I16::new(300);
            layout.pilot.day = I16::new(12);
            layout.pilot.month = I16::new(3);
            layout.pilot.year = I16::new(1177);
            layout.pilot.exploration[2] = I16::new(2);
            layout.pilot.legal_status[2] = I16::new(-50);
            layout.pilot.mission_objectives[4][0] = 1;
            layout.pilot.escorts = [I16::new(-1); MAX_ESCORTS];
            layout.pilot.escorts[0] = I16::new(1003);
            layout.pilot.escorts[2] = I16::new(7);
            layout.pilot.fighters = [I16::new(-1); MAX_ESCORTS];
            layout.pilot.combat_rating = I32::new(400);
            layout.state.date_prefix[..3].copy_from_slice(b"UE ");
            layout.state.ship_color = [0xFF00u16, 0x8000, 0x0000].map(U16::new);
            layout.state.rank_active[1] = I16::new(1);
        }
        pilot
    }

    #[test]
    fn test_accessors() {
        let pilot = sample();

        assert_eq!(pilot.nickname(), "Rook");
        assert_eq!(pilot.cash(), 25_000);
        assert_eq!(pilot.ship_class(), ShipId(129));
        assert_eq!(pilot.date(), GameDate { day: 12, month: 3, year: 1177 });
        assert_eq!(pilot.date_prefix().unwrap(), "UE ");
        assert_eq!(pilot.date_suffix().unwrap(), "");
        assert_eq!(pilot.exploration(SystId(130)), Some(Exploration::Visited));
        assert_eq!(pilot.exploration(SystId(128)), Some(Exploration::Unexplored));
        assert_eq!(pilot.exploration(SystId(127)), None);
        assert_eq!(pilot.exploration(SystId(128 + 2048)), None);
        assert_eq!(pilot.legal_status(SystId(130)), Some(-50));
        assert_eq!(pilot.active_missions().collect::<Vec<_>>(), vec![4]);
        assert_eq!(
            pilot.escorts().collect::<Vec<_>>(),
            vec![EscortSlot::Hired(ShipId(131)), EscortSlot::Captured(ShipId(135))]
        );
        assert_eq!(pilot.fighters().count(), 0);
        assert!(pilot.rank_active(RankId(129)));
        assert!(!pilot.rank_active(RankId(128)));
        assert_eq!(pilot.ship_color(), Color { a: 0xFF, r: 0xFF, g: 0x80, b: 0x00 });
    }

    #[test]
    fn test_save_round_trip() {
        let pilot = sample();
        let bytes = pilot.to_bytes();

        assert_eq!(bytes.len(), SAVE_SIZE);
        assert_ne!(&bytes[..], pilot.layout().as_bytes());

        let loaded = PilotFile::from_bytes(&bytes).unwrap();
        assert_eq!(loaded.layout().as_bytes(), pilot.layout().as_bytes());
        assert_eq!(loaded.summary().unwrap(), pilot.summary().unwrap());
    }

    #[test]
    fn test_resources_round_trip() {
        let pilot = sample();
        let (record, state) = pilot.to_resources();

        assert_eq!(record.len(), PILOT_RECORD_SIZE);
        assert_eq!(state.len(), PILOT_STATE_SIZE);
        // Each resource restarts the cipher stream.
        assert_eq!(&state[..2], &(pilot.version() as u16 ^ 0xB36A).to_be_bytes());

        let loaded = PilotFile::from_resources(&record, &state).unwrap();
        assert_eq!(loaded.layout().as_bytes(), pilot.layout().as_bytes());
    }

    #[test]
    fn test_from_record_source() {
        let (record, state) = sample().to_resources();
        let source = MemoryRecordSource::new()
            .with(TypeTag::PILOT, PILOT_RECORD_ID, record)
            .with(TypeTag::PILOT, PILOT_STATE_ID, state);

        let pilot = PilotFile::from_record_source(&source).unwrap();
        assert_eq!(pilot.nickname(), "Rook");

        let missing = MemoryRecordSource::new();
        assert!(matches!(
            PilotFile::from_record_source(&missing),
            Err(Error::MissingResource(PILOT_RECORD_ID))
        ));
    }

    #[test]
    fn test_size_mismatch() {
        let err = PilotFile::from_bytes(&[0u8; 100]).unwrap_err();
        assert!(matches!(
            err,
            Error::SizeMismatch { expected: SAVE_SIZE, actual: 100 }
        ));
    }

    #[test]
    fn test_old_version_rejected() {
        let mut pilot = sample();
        pilot.layout_mut().state.version = I16::new(0x12B);

        let err = PilotFile::from_bytes(&pilot.to_bytes()).unwrap_err();
        assert!(matches!(err, Error::UnsupportedVersion(0x12B)));
    }

    #[test]
    fn test_nickname_limits() {
        let mut pilot = PilotFile::new();
        let long = "x".repeat(64);

        assert!(matches!(
            pilot.set_nickname(&long),
            Err(Error::TextTooLong { len: 64, max: 63 })
        ));
        pilot.set_nickname(&long[..63]).unwrap();
        assert_eq!(pilot.nickname().len(), 63);
    }

    #[test]
    fn test_mission_bits() {
        let mut pilot = PilotFile::new();

        assert_eq!(pilot.mission_bit(9999), Some(false));
        assert!(pilot.set_mission_bit(9999, true));
        assert_eq!(pilot.mission_bit(9999), Some(true));
        assert!(!pilot.set_mission_bit(10000, true));
        assert_eq!(pilot.mission_bit(10000), None);
    }
}
