//! Projection profiling
//!
//! Reduces a binary mask to a 1-D profile of foreground counts along one
//! axis. A horizontal projection yields one count per row and drives line
//! detection; a vertical projection yields one count per column and drives
//! word detection within a line. Pure function, O(width * height).

use pageseg_core::{Axis, BinMask, Profile};

/// Project a binary mask onto one axis.
///
/// `Axis::Horizontal` sums across each row (one entry per row);
/// `Axis::Vertical` sums down each column (one entry per column).
pub fn project(mask: &BinMask, axis: Axis) -> Profile {
    let counts = match axis {
        Axis::Horizontal => (0..mask.height()).map(|y| mask.row_foreground(y)).collect(),
        Axis::Vertical => (0..mask.width())
            .map(|x| mask.column_foreground(x))
            .collect(),
    };
    Profile::new(axis, counts)
}
