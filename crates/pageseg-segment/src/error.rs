//! Error types for pageseg-segment

use thiserror::Error;

/// Errors that can occur while segmenting a page
#[derive(Debug, Error)]
pub enum SegmentError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pageseg_core::Error),

    /// Region analysis error
    #[error("region error: {0}")]
    Region(#[from] pageseg_region::RegionError),

    /// Source image could not be loaded or decoded.
    ///
    /// Surfaced before any segmentation work begins; a failed load never
    /// produces partial output.
    #[error("failed to load image {path}: {message}")]
    ImageLoad { path: String, message: String },
}

/// Result type for segmentation operations
pub type SegmentResult<T> = Result<T, SegmentError>;
