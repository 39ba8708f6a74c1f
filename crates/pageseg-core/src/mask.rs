//! BinMask and LabelMap - single-channel rasters
//!
//! `BinMask` is the binary foreground/background raster every segmentation
//! stage operates on: one byte per sample, 0 = background, 1 = foreground
//! (text ink). `LabelMap` is the same-shape `u32` raster produced by
//! connected component labeling, where each cell holds its component id
//! (0 = background).
//!
//! Both types own their data; a stage that derives a new raster owns that
//! raster independently. Accessors come in checked (`get`/`set`) and
//! unchecked (`*_unchecked`) pairs; the unchecked variants are for inner
//! scan loops that have already validated bounds.

use crate::error::{Error, Result};

/// A binary foreground/background raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinMask {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl BinMask {
    /// Create a new all-background mask.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            data: vec![0; (width as usize) * (height as usize)],
        })
    }

    /// Create a mask from raw samples in row-major order.
    ///
    /// Any non-zero sample is normalized to 1.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for zero-area dimensions, or
    /// [`Error::InvalidParameter`] if `data.len() != width * height`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = (width as usize) * (height as usize);
        if data.len() != expected {
            return Err(Error::InvalidParameter(format!(
                "sample buffer has {} entries for a {}x{} mask",
                data.len(),
                width,
                height
            )));
        }
        let data = data.into_iter().map(|v| u8::from(v != 0)).collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Raster width in samples.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Raster height in samples.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Get a sample, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x < self.width && y < self.height {
            Some(self.data[self.index(x, y)])
        } else {
            None
        }
    }

    /// Get a sample without bounds checking the coordinates against the
    /// raster dimensions. Callers must guarantee `x < width && y < height`.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> u8 {
        self.data[self.index(x, y)]
    }

    /// Set a sample (normalized to 0/1).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the coordinate is outside the
    /// raster.
    pub fn set(&mut self, x: u32, y: u32, value: u8) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: self.index(x, y),
                len: self.data.len(),
            });
        }
        let idx = self.index(x, y);
        self.data[idx] = u8::from(value != 0);
        Ok(())
    }

    /// Set a sample without bounds checking.
    #[inline]
    pub fn set_unchecked(&mut self, x: u32, y: u32, value: u8) {
        let idx = self.index(x, y);
        self.data[idx] = u8::from(value != 0);
    }

    /// Count the foreground samples in the whole mask.
    pub fn count_foreground(&self) -> u64 {
        self.data.iter().filter(|&&v| v != 0).count() as u64
    }

    /// Count the foreground samples in row `y`.
    pub fn row_foreground(&self, y: u32) -> u32 {
        let start = (y as usize) * (self.width as usize);
        self.data[start..start + self.width as usize]
            .iter()
            .filter(|&&v| v != 0)
            .count() as u32
    }

    /// Count the foreground samples in column `x`.
    pub fn column_foreground(&self, x: u32) -> u32 {
        (0..self.height)
            .filter(|&y| self.get_unchecked(x, y) != 0)
            .count() as u32
    }
}

/// A component-id raster produced by connected component labeling.
///
/// Same shape as the mask it was derived from; each cell holds the id of
/// the component its pixel belongs to, with 0 reserved for background.
/// Ids are assigned in first-encounter order during a fixed raster scan,
/// so labeling is deterministic for identical input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMap {
    width: u32,
    height: u32,
    labels: Vec<u32>,
    count: u32,
}

impl LabelMap {
    /// Create an all-background label map.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            labels: vec![0; (width as usize) * (height as usize)],
            count: 0,
        })
    }

    /// Raster width in cells.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Raster height in cells.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of components labeled so far.
    #[inline]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Record that one more component has been labeled.
    pub fn bump_count(&mut self) -> u32 {
        self.count += 1;
        self.count
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Get a cell's component id, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.labels[self.index(x, y)])
        } else {
            None
        }
    }

    /// Get a cell's component id without bounds checking.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> u32 {
        self.labels[self.index(x, y)]
    }

    /// Set a cell's component id without bounds checking.
    #[inline]
    pub fn set_unchecked(&mut self, x: u32, y: u32, label: u32) {
        let idx = self.index(x, y);
        self.labels[idx] = label;
    }

    /// The raw label cells in row-major order.
    pub fn cells(&self) -> &[u32] {
        &self.labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_area_rejected() {
        assert!(matches!(
            BinMask::new(0, 10),
            Err(Error::InvalidDimension { width: 0, height: 10 })
        ));
        assert!(BinMask::new(10, 0).is_err());
        assert!(LabelMap::new(0, 0).is_err());
    }

    #[test]
    fn test_from_raw_normalizes() {
        let m = BinMask::from_raw(3, 1, vec![0, 7, 255]).unwrap();
        assert_eq!(m.get(0, 0), Some(0));
        assert_eq!(m.get(1, 0), Some(1));
        assert_eq!(m.get(2, 0), Some(1));
        assert_eq!(m.count_foreground(), 2);
    }

    #[test]
    fn test_from_raw_length_mismatch() {
        assert!(BinMask::from_raw(3, 2, vec![0; 5]).is_err());
    }

    #[test]
    fn test_row_and_column_counts() {
        let mut m = BinMask::new(4, 3).unwrap();
        m.set(1, 0, 1).unwrap();
        m.set(2, 0, 1).unwrap();
        m.set(1, 2, 1).unwrap();
        assert_eq!(m.row_foreground(0), 2);
        assert_eq!(m.row_foreground(1), 0);
        assert_eq!(m.row_foreground(2), 1);
        assert_eq!(m.column_foreground(1), 2);
        assert_eq!(m.column_foreground(3), 0);
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut m = BinMask::new(2, 2).unwrap();
        assert_eq!(m.get(2, 0), None);
        assert!(m.set(0, 2, 1).is_err());
    }
}
