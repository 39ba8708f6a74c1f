//! pageseg-test - Shared fixtures for the pageseg test suites
//!
//! Builds small synthetic pages and masks so the integration tests do not
//! depend on image files: white pages with black ink rectangles standing in
//! for glyphs, and binary masks assembled from coordinate lists.

use image::{DynamicImage, Rgb, RgbImage};
use pageseg_core::{BinMask, Rect};

/// Ink color used by the synthetic pages (well below any threshold).
pub const INK: Rgb<u8> = Rgb([0, 0, 0]);

/// Paper color used by the synthetic pages (well above any threshold).
pub const PAPER: Rgb<u8> = Rgb([255, 255, 255]);

/// Create an all-white page.
pub fn blank_page(width: u32, height: u32) -> RgbImage {
    RgbImage::from_pixel(width, height, PAPER)
}

/// Paint a filled rectangle of ink onto a page, clipped to the canvas.
pub fn paint_rect(page: &mut RgbImage, rect: Rect) {
    let right = rect.right().min(page.width());
    let bottom = rect.bottom().min(page.height());
    for y in rect.y..bottom {
        for x in rect.x..right {
            page.put_pixel(x, y, INK);
        }
    }
}

/// Build a white page with black ink rectangles standing in for glyphs.
pub fn text_page(width: u32, height: u32, glyphs: &[Rect]) -> DynamicImage {
    let mut page = blank_page(width, height);
    for &g in glyphs {
        paint_rect(&mut page, g);
    }
    DynamicImage::ImageRgb8(page)
}

/// Build a binary mask with foreground at the given pixel coordinates.
pub fn blob_mask(width: u32, height: u32, pixels: &[(u32, u32)]) -> BinMask {
    let mut mask = BinMask::new(width, height).expect("non-zero fixture dimensions");
    for &(x, y) in pixels {
        mask.set(x, y, 1).expect("fixture pixel in bounds");
    }
    mask
}
