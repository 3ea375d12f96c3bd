//! A placeholder image codec for inspection runs.
//!
//! Reads only the frame geometry from each image header and hands back a
//! transparent canvas of that size, so a library can be assembled and
//! summarized without a QuickDraw decoder.

use image::RgbaImage;
use nova::common::{BinaryReader, Rect};
use nova::resources::{CollaboratorError, ImageCodec, RleSheet};

/// Offset of the bounds rectangle inside a `cicn` pixel map.
const CICN_BOUNDS: usize = 6;

#[derive(Debug, Clone, Copy, Default)]
pub struct FrameOnlyCodec;

fn read_rect(data: &[u8], offset: usize) -> Result<Rect, CollaboratorError> {
    let mut reader = BinaryReader::new_at(data, offset);
    Ok(Rect {
        top: reader.read_i16()?,
        left: reader.read_i16()?,
        bottom: reader.read_i16()?,
        right: reader.read_i16()?,
    })
}

fn canvas(rect: &Rect) -> Result<RgbaImage, CollaboratorError> {
    let width = u32::try_from(i32::from(rect.right) - i32::from(rect.left))?;
    let height = u32::try_from(i32::from(rect.bottom) - i32::from(rect.top))?;
    Ok(RgbaImage::new(width, height))
}

impl ImageCodec for FrameOnlyCodec {
    fn decode_pict(&self, data: &[u8]) -> Result<RgbaImage, CollaboratorError> {
        // Size word, then the picture frame.
        canvas(&read_rect(data, 2)?)
    }

    fn decode_rle(&self, data: &[u8]) -> Result<RleSheet, CollaboratorError> {
        let mut reader = BinaryReader::new(data);
        let width = reader.read_i16()?;
        let height = reader.read_i16()?;
        reader.advance(4);
        let frames = u32::try_from(reader.read_i16()?)?;

        let count_across = (frames as f64).sqrt().ceil().max(1.0) as u32;
        let count_down = frames.div_ceil(count_across).max(1);
        let frame = Rect { top: 0, left: 0, bottom: height, right: width };
        let sheet_width = u32::try_from(width)?.checked_mul(count_across);
        let sheet_height = u32::try_from(height)?.checked_mul(count_down);
        let (Some(sheet_width), Some(sheet_height)) = (sheet_width, sheet_height) else {
            return Err("sprite sheet dimensions overflow".into());
        };
        let image = RgbaImage::new(sheet_width, sheet_height);

        Ok(RleSheet { image, frame, count_across, count_down })
    }

    fn decode_cicn(&self, data: &[u8]) -> Result<RgbaImage, CollaboratorError> {
        canvas(&read_rect(data, CICN_BOUNDS)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pict_frame() {
        let data = [0x00, 0x20, 0, 0, 0, 0, 0, 48, 0, 64];
        let image = FrameOnlyCodec.decode_pict(&data).unwrap();

        assert_eq!(image.dimensions(), (64, 48));
    }

    #[test]
    fn test_rle_grid() {
        let data = [0, 32, 0, 24, 0, 16, 0, 0, 0, 36, 0, 0];
        let sheet = FrameOnlyCodec.decode_rle(&data).unwrap();

        assert_eq!((sheet.count_across, sheet.count_down), (6, 6));
        assert_eq!(sheet.image.dimensions(), (192, 144));
        assert_eq!(sheet.frame.right, 32);
    }

    #[test]
    fn test_truncated_header() {
        assert!(FrameOnlyCodec.decode_cicn(&[0; 8]).is_err());
        assert!(FrameOnlyCodec.decode_pict(&[0; 4]).is_err());
    }
}
