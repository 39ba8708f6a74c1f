//! Span - a half-open index range over a profile axis
//!
//! A `Span` denotes a contiguous run `[start, end)` of profile indices where
//! some activity predicate holds. Lists of spans produced by run detection
//! are pairwise disjoint and strictly increasing in `start`.

use crate::error::{Error, Result};

/// A half-open index range `[start, end)`.
///
/// Small Copy type; invariant `start < end` is enforced by [`Span::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// First index covered by the span
    pub start: usize,
    /// One past the last index covered by the span
    pub end: usize,
}

impl Span {
    /// Create a new span.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `start >= end`.
    pub fn new(start: usize, end: usize) -> Result<Self> {
        if start >= end {
            return Err(Error::InvalidParameter(format!(
                "span must be non-empty: [{}, {})",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    /// Create a span without validation.
    pub const fn new_unchecked(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of indices covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True if the span covers no indices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// True if `index` lies inside the span.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }

    /// Iterate over the covered indices.
    pub fn indices(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty() {
        assert!(Span::new(3, 3).is_err());
        assert!(Span::new(5, 2).is_err());
    }

    #[test]
    fn test_len_and_contains() {
        let s = Span::new(2, 5).unwrap();
        assert_eq!(s.len(), 3);
        assert!(!s.contains(1));
        assert!(s.contains(2));
        assert!(s.contains(4));
        assert!(!s.contains(5));
    }

    #[test]
    fn test_indices_iteration() {
        let s = Span::new_unchecked(7, 9);
        let v: Vec<usize> = s.indices().collect();
        assert_eq!(v, vec![7, 8]);
    }
}
