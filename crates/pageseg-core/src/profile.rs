//! Profile - a 1-D projection of foreground counts
//!
//! A `Profile` is the ordered sequence of per-row (or per-column) foreground
//! sample counts computed from a binary mask. Its length equals the mask
//! dimension it was summed along: a horizontal profile has one entry per
//! row, a vertical profile one entry per column.
//!
//! A profile of length zero is legal and yields zero spans downstream; it
//! is not an error.

/// Axis a profile was summed along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// One count per row (summing across each row) - used for line detection
    Horizontal,
    /// One count per column (summing down each column) - used for word detection
    Vertical,
}

/// An ordered sequence of non-negative foreground counts along one axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    axis: Axis,
    counts: Vec<u32>,
}

impl Profile {
    /// Create a profile from raw counts.
    pub fn new(axis: Axis, counts: Vec<u32>) -> Self {
        Self { axis, counts }
    }

    /// Axis this profile was summed along.
    #[inline]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Number of entries (rows or columns of the source mask).
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True if the profile has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Get the count at `index`, or `None` if out of bounds.
    pub fn get(&self, index: usize) -> Option<u32> {
        self.counts.get(index).copied()
    }

    /// The raw counts.
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    /// Iterate over `(index, count)` pairs in scan order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.counts.iter().copied().enumerate()
    }
}
