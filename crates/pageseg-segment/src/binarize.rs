//! Fixed-threshold binarization
//!
//! Converts a grayscale raster to a binary foreground mask by comparing
//! each sample against a fixed luminance cutoff. Scanned text is dark ink
//! on a light page, so the pipeline uses the inverse comparison
//! ([`Polarity::DarkInk`]): samples *below* the threshold become
//! foreground. The direct comparison ([`Polarity::LightInk`]) is kept for
//! masks where bright pixels are the signal.

use crate::error::SegmentResult;
use image::{DynamicImage, GrayImage};
use pageseg_core::BinMask;

/// Default threshold for the line/word segmentation pipeline.
pub const LINE_THRESHOLD: u8 = 150;

/// Default threshold for the direct-comparison overlay-image variant.
pub const OVERLAY_THRESHOLD: u8 = 128;

/// Which side of the threshold counts as foreground
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Polarity {
    /// Foreground where the gray value is below the threshold
    /// (dark ink on a light page)
    #[default]
    DarkInk,
    /// Foreground where the gray value is above the threshold
    LightInk,
}

impl Polarity {
    #[inline]
    fn is_foreground(self, value: u8, threshold: u8) -> bool {
        match self {
            Polarity::DarkInk => value < threshold,
            Polarity::LightInk => value > threshold,
        }
    }
}

/// Convert any raster to single-channel grayscale using the standard
/// channel-weighted luminance formula.
pub fn to_grayscale(image: &DynamicImage) -> GrayImage {
    image.to_luma8()
}

/// Threshold a grayscale raster into a binary foreground mask.
///
/// The mask has the same dimensions as the input.
///
/// # Errors
///
/// Returns [`pageseg_core::Error::InvalidDimension`] for a zero-area input.
pub fn binarize(gray: &GrayImage, threshold: u8, polarity: Polarity) -> SegmentResult<BinMask> {
    let width = gray.width();
    let height = gray.height();
    let mut mask = BinMask::new(width, height)?;
    for (x, y, pixel) in gray.enumerate_pixels() {
        if polarity.is_foreground(pixel.0[0], threshold) {
            mask.set_unchecked(x, y, 1);
        }
    }
    Ok(mask)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn gray_of(values: &[&[u8]]) -> GrayImage {
        let h = values.len() as u32;
        let w = values[0].len() as u32;
        GrayImage::from_fn(w, h, |x, y| Luma([values[y as usize][x as usize]]))
    }

    #[test]
    fn test_dark_ink_inverts() {
        let gray = gray_of(&[&[0, 100, 150, 200, 255]]);
        let mask = binarize(&gray, 150, Polarity::DarkInk).unwrap();
        // Strictly below 150 is foreground
        assert_eq!(mask.get(0, 0), Some(1));
        assert_eq!(mask.get(1, 0), Some(1));
        assert_eq!(mask.get(2, 0), Some(0));
        assert_eq!(mask.get(3, 0), Some(0));
        assert_eq!(mask.get(4, 0), Some(0));
    }

    #[test]
    fn test_light_ink_direct() {
        let gray = gray_of(&[&[0, 128, 129, 255]]);
        let mask = binarize(&gray, OVERLAY_THRESHOLD, Polarity::LightInk).unwrap();
        assert_eq!(mask.get(0, 0), Some(0));
        assert_eq!(mask.get(1, 0), Some(0));
        assert_eq!(mask.get(2, 0), Some(1));
        assert_eq!(mask.get(3, 0), Some(1));
    }

    #[test]
    fn test_mask_matches_dimensions() {
        let gray = GrayImage::new(7, 5);
        let mask = binarize(&gray, LINE_THRESHOLD, Polarity::DarkInk).unwrap();
        assert_eq!(mask.width(), 7);
        assert_eq!(mask.height(), 5);
    }

    #[test]
    fn test_zero_area_input_fails() {
        let gray = GrayImage::new(0, 0);
        let err = binarize(&gray, LINE_THRESHOLD, Polarity::DarkInk).unwrap_err();
        assert!(matches!(
            err,
            crate::error::SegmentError::Core(pageseg_core::Error::InvalidDimension { .. })
        ));
    }
}
