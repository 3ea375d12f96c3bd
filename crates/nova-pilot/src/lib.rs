//! EV Nova pilot files.
//!
//! A pilot is stored as two `NpïL` resources: the pilot record (ID 128) and
//! the pilot state (ID 129). Both are encrypted with a running XOR keystream
//! (see [`cipher`]). A plain save file is simply the two records back to
//! back, encrypted as one stream.
//!
//! # Example
//!
//! ```no_run
//! use nova_pilot::PilotFile;
//!
//! let mut pilot = PilotFile::load("Rook.plt")?;
//! println!("{} has {} credits", pilot.nickname(), pilot.cash());
//!
//! pilot.set_cash(pilot.cash() + 10_000);
//! pilot.save("Rook.plt")?;
//! # Ok::<(), nova_pilot::Error>(())
//! ```

pub mod cipher;
mod error;
pub mod escort;
mod file;
pub mod layout;

pub use cipher::{apply_cipher, PILOT_KEY};
pub use error::{Error, Result};
pub use escort::{fighter_class, EscortSlot};
pub use file::{Exploration, GameDate, PilotFile, PilotSummary, PILOT_RECORD_ID, PILOT_STATE_ID};
pub use layout::{PilotRecord, PilotState, SaveRecordLayout, PILOT_RECORD_SIZE, PILOT_STATE_SIZE, SAVE_SIZE};
