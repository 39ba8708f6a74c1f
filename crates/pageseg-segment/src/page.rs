//! Page segmentation orchestrator
//!
//! Composes the binarizer, profiler, and run detector into the two-level
//! pipeline: binarize the full page, split it into lines from the
//! horizontal profile, then split each line into words from the vertical
//! profile of its crop. Crops are taken from the original color image, not
//! the mask, so downstream consumers receive the source pixels.
//!
//! The segmenter is constructed per invocation and holds no image state;
//! every run derives its masks, profiles, and crops from the caller's
//! image.

use std::path::Path;

use image::{DynamicImage, RgbImage, imageops};
use pageseg_core::{Axis, Rect, Span};
use pageseg_region::{Connectivity, label_components};

use crate::binarize::{LINE_THRESHOLD, Polarity, binarize, to_grayscale};
use crate::error::{SegmentError, SegmentResult};
use crate::profile::project;
use crate::runs::{active_spans, active_spans_above};

/// Tuning knobs for the two-level pipeline
#[derive(Debug, Clone)]
pub struct SegmentOptions {
    /// Luminance cutoff for the full-page line pass
    pub line_threshold: u8,
    /// Luminance cutoff for the per-line word pass
    pub word_threshold: u8,
    /// Profile counts must exceed this floor to count as active in the
    /// word pass. Zero keeps the plain `> 0` predicate; a positive floor
    /// enables the noise-tolerant event-window splitting.
    pub profile_floor: u32,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            line_threshold: LINE_THRESHOLD,
            word_threshold: LINE_THRESHOLD,
            profile_floor: 0,
        }
    }
}

/// A detected word within a line.
///
/// `index` and `line_index` are 1-based, matching the external artifact
/// naming scheme. `cols` is relative to the owning line's crop; `bounds`
/// locates the word on the original page.
#[derive(Debug, Clone)]
pub struct Word {
    /// 1-based index of the owning line
    pub line_index: usize,
    /// 1-based position within the line
    pub index: usize,
    /// Column range within the line crop
    pub cols: Span,
    /// Absolute position on the original page
    pub bounds: Rect,
    /// Cropped source pixels for this word
    pub image: RgbImage,
}

impl Word {
    /// External artifact name: `{basename}_line_{i}_word_{j}.png`.
    pub fn file_name(&self, basename: &str) -> String {
        format!(
            "{}_line_{}_word_{}.png",
            basename, self.line_index, self.index
        )
    }
}

/// A detected text line.
///
/// `rows` is the range of page rows the line covers; the crop contains
/// exactly those rows at full page width.
#[derive(Debug, Clone)]
pub struct Line {
    /// 1-based line index in top-to-bottom order
    pub index: usize,
    /// Row range on the original page
    pub rows: Span,
    /// Cropped source pixels for this line
    pub image: RgbImage,
    /// Words in left-to-right order
    pub words: Vec<Word>,
}

impl Line {
    /// External artifact name: `{basename}_line_{i}.png`.
    pub fn file_name(&self, basename: &str) -> String {
        format!("{}_line_{}.png", basename, self.index)
    }
}

/// The segmentation result for one page.
#[derive(Debug, Clone)]
pub struct Page {
    /// Source image width
    pub width: u32,
    /// Source image height
    pub height: u32,
    /// Lines in top-to-bottom order
    pub lines: Vec<Line>,
    /// Number of 8-connected foreground components in the full-page mask.
    /// Diagnostic only; segmentation never branches on it.
    pub component_count: u32,
}

impl Page {
    /// Total number of detected words across all lines.
    pub fn word_count(&self) -> usize {
        self.lines.iter().map(|l| l.words.len()).sum()
    }

    /// Iterate over all words in line order, then word order.
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.lines.iter().flat_map(|l| l.words.iter())
    }
}

/// The two-level line/word segmenter.
#[derive(Debug, Clone, Default)]
pub struct PageSegmenter {
    options: SegmentOptions,
}

impl PageSegmenter {
    /// Create a segmenter with the given options.
    pub fn new(options: SegmentOptions) -> Self {
        Self { options }
    }

    /// Segment a decoded page image into ordered lines and words.
    ///
    /// An all-background page yields zero lines and is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`pageseg_core::Error::InvalidDimension`] (wrapped) for a
    /// zero-area image.
    pub fn segment(&self, image: &DynamicImage) -> SegmentResult<Page> {
        let rgb = image.to_rgb8();
        let gray = to_grayscale(image);
        let width = gray.width();
        let height = gray.height();

        let mask = binarize(&gray, self.options.line_threshold, Polarity::DarkInk)?;
        let component_count = label_components(&mask, Connectivity::Eight)?.count();

        let row_profile = project(&mask, Axis::Horizontal);
        let mut lines = Vec::new();
        for (li, rows) in active_spans(&row_profile).into_iter().enumerate() {
            let top = rows.start as u32;
            let line_h = rows.len() as u32;
            let line_rgb = imageops::crop_imm(&rgb, 0, top, width, line_h).to_image();
            let line_gray = imageops::crop_imm(&gray, 0, top, width, line_h).to_image();

            let line_mask = binarize(&line_gray, self.options.word_threshold, Polarity::DarkInk)?;
            let col_profile = project(&line_mask, Axis::Vertical);
            let col_spans = if self.options.profile_floor > 0 {
                active_spans_above(&col_profile, self.options.profile_floor)
            } else {
                active_spans(&col_profile)
            };

            let mut words = Vec::new();
            for (wi, cols) in col_spans.into_iter().enumerate() {
                let left = cols.start as u32;
                let word_w = cols.len() as u32;
                let word_rgb = imageops::crop_imm(&line_rgb, left, 0, word_w, line_h).to_image();
                words.push(Word {
                    line_index: li + 1,
                    index: wi + 1,
                    cols,
                    bounds: Rect::new(left, top, word_w, line_h),
                    image: word_rgb,
                });
            }

            lines.push(Line {
                index: li + 1,
                rows,
                image: line_rgb,
                words,
            });
        }

        Ok(Page {
            width,
            height,
            lines,
            component_count,
        })
    }

    /// Load a page image from disk and segment it.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentError::ImageLoad`] if the file cannot be read or
    /// decoded; no segmentation work happens in that case.
    pub fn segment_path<P: AsRef<Path>>(&self, path: P) -> SegmentResult<Page> {
        let path = path.as_ref();
        let image = image::open(path).map_err(|e| SegmentError::ImageLoad {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        self.segment(&image)
    }
}
