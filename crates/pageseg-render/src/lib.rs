//! pageseg-render - Overlay rendering for detected text boxes
//!
//! Draws recognizer-supplied text bounding boxes onto a copy of a document
//! image for visual inspection, and produces the matching plain-text
//! transcript:
//!
//! - [`draw_text_boxes`] - trace each 4-corner polygon as a closed loop
//! - [`transcript`] - one line of recognized text per annotation
//!
//! # Examples
//!
//! ```
//! use image::RgbImage;
//! use pageseg_render::{OverlayStyle, TextBox, draw_text_boxes, transcript};
//!
//! let page = RgbImage::new(64, 64);
//! let boxes = vec![TextBox::new([(4, 4), (40, 4), (40, 20), (4, 20)], "hello")];
//! let drawn = draw_text_boxes(&page, &boxes, &OverlayStyle::default()).unwrap();
//! assert_eq!(drawn.dimensions(), page.dimensions());
//! assert_eq!(transcript(&boxes), "hello\n");
//! ```

pub mod error;
pub mod overlay;

// Re-export core types
pub use pageseg_core;

pub use error::{RenderError, RenderResult};
pub use overlay::{
    OverlayStyle, TextBox, draw_text_boxes, line_points, transcript, wide_line_points,
};
