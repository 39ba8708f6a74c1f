//! pageseg-segment - Projection-based line/word segmentation
//!
//! This crate is the segmentation engine of the pageseg workspace. It
//! decomposes a scanned document image into ordered text lines and, within
//! each line, ordered words:
//!
//! - **Binarization** - fixed-threshold foreground masks ([`binarize`])
//! - **Projection profiling** - per-row / per-column foreground counts
//!   ([`project`])
//! - **Run detection** - contiguous active index ranges over a profile
//!   ([`active_spans`], [`active_spans_above`])
//! - **Orchestration** - the two-level page pipeline ([`PageSegmenter`])
//!
//! # Examples
//!
//! ```no_run
//! use pageseg_segment::{PageSegmenter, SegmentOptions};
//!
//! let segmenter = PageSegmenter::new(SegmentOptions::default());
//! let page = segmenter.segment_path("scan.png").unwrap();
//! for line in &page.lines {
//!     println!("{}: {} words", line.file_name("scan"), line.words.len());
//! }
//! ```

pub mod binarize;
pub mod error;
pub mod page;
pub mod profile;
pub mod runs;

// Re-export core types
pub use pageseg_core;

pub use binarize::{LINE_THRESHOLD, OVERLAY_THRESHOLD, Polarity, binarize, to_grayscale};
pub use error::{SegmentError, SegmentResult};
pub use page::{Line, Page, PageSegmenter, SegmentOptions, Word};
pub use profile::project;
pub use runs::{active_spans, active_spans_above};
