//! Common utilities for Nova.
//!
//! This crate provides foundational types and utilities used across all Nova crates:
//!
//! - [`BinaryReader`] - Bounds-checked big-endian reading from byte slices
//! - [`TypeTag`] - The four-character resource type codes
//! - [`TextEncoding`] - Legacy single-byte text decoding
//! - [`Color`], [`Rect`], [`Point`] - Small value types embedded in records

mod error;
mod geometry;
mod reader;
mod tag;

pub mod text;

pub use error::{Error, Result};
pub use geometry::{Color, Point, Rect};
pub use reader::{decode_int, BinaryReader};
pub use tag::TypeTag;
pub use text::TextEncoding;
