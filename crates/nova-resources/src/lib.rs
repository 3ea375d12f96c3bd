//! Typed decoding of EV Nova resource records.
//!
//! Data files store game objects as fixed-layout big-endian records filed
//! under four-character type tags. This crate turns those records into
//! strongly typed values and assembles them into a [`ResourceLibrary`].
//!
//! # Quick Start
//!
//! ```no_run
//! use nova_resources::{DirectoryRecordSource, LibraryOptions, NoImageCodec, ResourceLibrary};
//! use nova_resources::ids::ShipId;
//!
//! let source = DirectoryRecordSource::open("extracted/Nova Files")?;
//! let library = ResourceLibrary::load(&source, &NoImageCodec, &LibraryOptions::default())?;
//!
//! if let Some(ship) = library.ships().get(ShipId(128)) {
//!     println!("{} costs {}", ship.short_name, ship.cost);
//! }
//! # Ok::<(), nova_resources::Error>(())
//! ```
//!
//! # Layers
//!
//! - [`field`] and [`flags`]: big-endian scalars with sentinels and units,
//!   bounded strings, string tables and named flag words
//! - [`mux`]: identifiers that pack a second meaning into their range
//! - [`layout`]: the declarative layout materializer behind every fixed record
//! - [`registry`]: the closed set of record types and how each is scheduled
//! - [`library`]: assembly of all types from a [`RecordSource`]
//!
//! Pixel data is decoded by an [`ImageCodec`] supplied by the caller; with
//! [`NoImageCodec`] any `PICT`, `rlëD` or `cicn` record fails the load.

#[macro_use]
pub mod layout;

pub mod codec;
mod error;
pub mod field;
pub mod flags;
pub mod ids;
pub mod library;
pub mod mux;
pub mod registry;
pub mod source;
pub mod types;

pub use codec::{ImageCodec, NoImageCodec, RleSheet};
pub use error::{CollaboratorError, Error, Result};
pub use library::{LibraryOptions, LibraryStats, RecordMap, Records, ResourceLibrary, TypeCount};
pub use registry::{
    descriptor, DecodeContext, DecodeOptions, DecodeStrategy, RecordType, RecordTypeDescriptor,
    REGISTRY,
};
pub use source::{DirectoryRecordSource, MemoryRecordSource, RawRecord, RecordSource};
pub use types::*;
