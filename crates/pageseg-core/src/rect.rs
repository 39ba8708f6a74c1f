//! Rect - an axis-aligned pixel rectangle
//!
//! Used for component bounding boxes and for locating crops on the
//! original page. Simple Copy type; small and frequently copied.

/// An axis-aligned rectangle in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left x coordinate
    pub x: u32,
    /// Top y coordinate
    pub y: u32,
    /// Width
    pub w: u32,
    /// Height
    pub h: u32,
}

impl Rect {
    /// Create a new rectangle.
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Build the smallest rectangle covering both corner pixels
    /// `(x0, y0)` and `(x1, y1)` inclusive.
    pub fn from_extremes(x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
        let (xa, xb) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let (ya, yb) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        Self {
            x: xa,
            y: ya,
            w: xb - xa + 1,
            h: yb - ya + 1,
        }
    }

    /// Right x coordinate (exclusive).
    #[inline]
    pub fn right(&self) -> u32 {
        self.x + self.w
    }

    /// Bottom y coordinate (exclusive).
    #[inline]
    pub fn bottom(&self) -> u32 {
        self.y + self.h
    }

    /// Pixel area.
    #[inline]
    pub fn area(&self) -> u64 {
        self.w as u64 * self.h as u64
    }

    /// True if the rectangle has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// True if the pixel `(x, y)` lies inside.
    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Grow the rectangle to cover the pixel `(x, y)`.
    pub fn include(&mut self, x: u32, y: u32) {
        if self.is_empty() {
            *self = Rect::new(x, y, 1, 1);
            return;
        }
        let right = self.right().max(x + 1);
        let bottom = self.bottom().max(y + 1);
        self.x = self.x.min(x);
        self.y = self.y.min(y);
        self.w = right - self.x;
        self.h = bottom - self.y;
    }
}
