//! Nova - EV Nova data file and pilot save library.
//!
//! This crate bundles the Nova library crates behind one import.
//!
//! # Crates
//!
//! - [`nova_common`] - Binary reading, type tags, legacy text, geometry
//! - [`nova_resources`] - Typed record decoding and library assembly
//! - [`nova_pilot`] - Pilot save cipher, layout, load and save
//!
//! # Example
//!
//! ```no_run
//! use nova::prelude::*;
//!
//! let source = DirectoryRecordSource::open("extracted/Nova Files")?;
//! let library = ResourceLibrary::load(&source, &NoImageCodec, &LibraryOptions::default())?;
//! println!("{}", library.stats());
//!
//! let pilot = PilotFile::load("Rook.plt")?;
//! if let Some(ship) = library.ships().get(pilot.ship_class()) {
//!     println!("{} flies a {}", pilot.nickname(), ship.short_name);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use nova_common as common;
pub use nova_pilot as pilot;
pub use nova_resources as resources;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use nova_common::{BinaryReader, Color, Point, Rect, TextEncoding, TypeTag};
    pub use nova_pilot::{EscortSlot, PilotFile, PilotSummary};
    pub use nova_resources::ids::*;
    pub use nova_resources::{
        DecodeOptions, DirectoryRecordSource, ImageCodec, LibraryOptions, MemoryRecordSource,
        NoImageCodec, RecordSource, ResourceLibrary,
    };
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
