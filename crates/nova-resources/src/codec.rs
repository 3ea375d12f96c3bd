//! Image codec collaborator.
//!
//! `PICT`, `rlëD` and `cicn` records hold packed QuickDraw pixel data. Turning
//! that into pixels is the job of an external codec; this crate only defines
//! the seam and wraps the results into typed records.

use image::RgbaImage;
use nova_common::Rect;

use crate::error::CollaboratorError;

/// A decoded `rlëD` sprite sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct RleSheet {
    /// All frames laid out in a grid.
    pub image: RgbaImage,
    /// Bounds of a single frame.
    pub frame: Rect,
    pub count_across: u32,
    pub count_down: u32,
}

/// Decodes QuickDraw image formats.
///
/// Implementations are shared across worker threads during parallel assembly.
pub trait ImageCodec: Sync {
    fn decode_pict(&self, data: &[u8]) -> Result<RgbaImage, CollaboratorError>;

    fn decode_rle(&self, data: &[u8]) -> Result<RleSheet, CollaboratorError>;

    fn decode_cicn(&self, data: &[u8]) -> Result<RgbaImage, CollaboratorError>;
}

/// A codec that rejects every image.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoImageCodec;

impl ImageCodec for NoImageCodec {
    fn decode_pict(&self, _: &[u8]) -> Result<RgbaImage, CollaboratorError> {
        Err("no image codec configured".into())
    }

    fn decode_rle(&self, _: &[u8]) -> Result<RleSheet, CollaboratorError> {
        Err("no image codec configured".into())
    }

    fn decode_cicn(&self, _: &[u8]) -> Result<RgbaImage, CollaboratorError> {
        Err("no image codec configured".into())
    }
}
