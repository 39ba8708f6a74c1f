//! Pageseg - Document image segmentation for Rust
//!
//! Pageseg decomposes a scanned document image into a hierarchy of text
//! lines and words, and overlays recognizer-supplied text boxes on an
//! image for visual inspection.
//!
//! # Overview
//!
//! - Fixed-threshold binarization of color/grayscale pages
//! - Projection profiling and run detection for line/word splitting
//! - Deterministic connected component labeling
//! - Text-box overlay rendering with plain-text transcripts
//!
//! # Example
//!
//! ```
//! use image::{DynamicImage, Rgb, RgbImage};
//! use pageseg::segment::{PageSegmenter, SegmentOptions};
//!
//! let blank = DynamicImage::ImageRgb8(RgbImage::from_pixel(640, 480, Rgb([255, 255, 255])));
//! let segmenter = PageSegmenter::new(SegmentOptions::default());
//! let result = segmenter.segment(&blank).unwrap();
//! assert!(result.lines.is_empty()); // blank page: zero lines, no error
//! ```

// Re-export core types (primary data structures used everywhere)
pub use pageseg_core::*;

// Re-export the image crate; raster types appear throughout the public API
pub use image;

// Re-export domain crates as modules to avoid name conflicts
pub use pageseg_region as region;
pub use pageseg_render as render;
pub use pageseg_segment as segment;
