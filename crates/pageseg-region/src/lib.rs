//! pageseg-region - Connected component analysis for page segmentation
//!
//! This crate labels connected foreground regions in binary masks:
//!
//! - **Component labeling** - deterministic BFS flood fill in raster scan order
//! - **Component statistics** - per-component pixel counts and bounding boxes
//!
//! # Examples
//!
//! ```
//! use pageseg_core::BinMask;
//! use pageseg_region::{Connectivity, label_components};
//!
//! let mut mask = BinMask::new(100, 100).unwrap();
//! mask.set(10, 10, 1).unwrap();
//! mask.set(11, 10, 1).unwrap();
//! mask.set(50, 50, 1).unwrap();
//!
//! let labels = label_components(&mask, Connectivity::Four).unwrap();
//! assert_eq!(labels.count(), 2);
//! ```

pub mod conncomp;
pub mod error;

// Re-export core types
pub use pageseg_core;

pub use conncomp::{
    ComponentStats, Connectivity, component_stats, count_components, label_components,
};
pub use error::{RegionError, RegionResult};
