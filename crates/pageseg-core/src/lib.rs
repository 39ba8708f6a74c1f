//! Pageseg Core - Basic data structures for document page segmentation
//!
//! This crate provides the fundamental data structures used throughout the
//! pageseg workspace:
//!
//! - [`BinMask`] - Binary foreground/background raster
//! - [`LabelMap`] - Component-id raster produced by labeling
//! - [`Span`] - Half-open index range over a profile axis
//! - [`Rect`] - Axis-aligned pixel rectangle
//! - [`Profile`] / [`Axis`] - 1-D projection of foreground counts
//!
//! Everything here is transient per pipeline run: masks, profiles, spans,
//! and label maps are derived from an immutable source image and owned by
//! the stage that produced them.

pub mod error;
pub mod mask;
pub mod profile;
pub mod rect;
pub mod span;

pub use error::{Error, Result};
pub use mask::{BinMask, LabelMap};
pub use profile::{Axis, Profile};
pub use rect::Rect;
pub use span::Span;
