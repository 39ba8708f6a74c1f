//! Detected-text box overlay rendering
//!
//! Draws externally supplied text bounding boxes onto a copy of the source
//! image. Each box is a 4-corner polygon traced as the closed loop
//! p0 -> p1 -> p2 -> p3 -> p0 with an integer Bresenham line, widened by
//! parallel offsets perpendicular to the dominant direction. Pixels that
//! fall outside the canvas are clipped.
//!
//! The annotations come from an external recognizer; their coordinates
//! must already be in the image's pixel space. The renderer never
//! interprets the text beyond emitting it, one line per annotation, via
//! [`transcript`].

use image::{Rgb, RgbImage};
use pageseg_core::Error;

use crate::error::{RenderError, RenderResult};

/// One recognized text region: a 4-corner polygon plus its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBox {
    /// Polygon corners in drawing order
    pub corners: [(i32, i32); 4],
    /// Recognized text for this region
    pub text: String,
}

impl TextBox {
    /// Create a new annotation.
    pub fn new(corners: [(i32, i32); 4], text: impl Into<String>) -> Self {
        Self {
            corners,
            text: text.into(),
        }
    }
}

/// Stroke color and width for overlay drawing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayStyle {
    /// Stroke color
    pub color: Rgb<u8>,
    /// Stroke width in pixels
    pub stroke_width: u32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            color: Rgb([255, 255, 0]),
            stroke_width: 8,
        }
    }
}

/// Generate the pixel positions of a line using integer Bresenham.
///
/// The line connects `(x1, y1)` to `(x2, y2)` with 8-connectivity; no
/// floating-point arithmetic is involved.
pub fn line_points(x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<(i32, i32)> {
    if x1 == x2 && y1 == y2 {
        return vec![(x1, y1)];
    }

    let dx = (x2 - x1).abs();
    let dy = (y2 - y1).abs();
    let sx = if x2 > x1 { 1i32 } else { -1 };
    let sy = if y2 > y1 { 1i32 } else { -1 };

    let npts = dx.max(dy) + 1;
    let mut pts = Vec::with_capacity(npts as usize);

    let mut x = x1;
    let mut y = y1;

    if dx >= dy {
        // Step along x (more horizontal)
        let mut err = dx / 2;
        for _ in 0..npts {
            pts.push((x, y));
            err -= dy;
            if err < 0 {
                y += sy;
                err += dx;
            }
            x += sx;
        }
    } else {
        // Step along y (more vertical)
        let mut err = dy / 2;
        for _ in 0..npts {
            pts.push((x, y));
            err -= dx;
            if err < 0 {
                x += sx;
                err += dy;
            }
            y += sy;
        }
    }

    pts
}

/// Generate the pixel positions of a line with the given stroke width.
///
/// For width > 1, parallel lines are added on alternating sides of the
/// base line, offset perpendicular to its dominant direction.
pub fn wide_line_points(x1: i32, y1: i32, x2: i32, y2: i32, width: u32) -> Vec<(i32, i32)> {
    let width = width.max(1);
    let mut pts = line_points(x1, y1, x2, y2);
    if width == 1 {
        return pts;
    }

    let dx = (x2 - x1).abs();
    let dy = (y2 - y1).abs();
    let is_horizontal = dx > dy;

    for i in 1..width {
        let offset = (i + 1).div_ceil(2) as i32;
        let sign = if i % 2 == 1 { -1 } else { 1 };
        let actual_offset = offset * sign;

        let (x1a, y1a, x2a, y2a) = if is_horizontal {
            (x1, y1 + actual_offset, x2, y2 + actual_offset)
        } else {
            (x1 + actual_offset, y1, x2 + actual_offset, y2)
        };

        pts.extend(line_points(x1a, y1a, x2a, y2a));
    }

    pts
}

fn plot(canvas: &mut RgbImage, points: &[(i32, i32)], color: Rgb<u8>) {
    let w = canvas.width() as i32;
    let h = canvas.height() as i32;
    for &(x, y) in points {
        if x >= 0 && y >= 0 && x < w && y < h {
            canvas.put_pixel(x as u32, y as u32, color);
        }
    }
}

/// Draw each annotation's polygon on a copy of the source image.
///
/// Polygons are traced as closed loops in input order; the source image is
/// untouched.
///
/// # Errors
///
/// Returns [`RenderError::Core`] for a zero-area source image and
/// [`RenderError::InvalidStyle`] for a zero stroke width.
pub fn draw_text_boxes(
    image: &RgbImage,
    boxes: &[TextBox],
    style: &OverlayStyle,
) -> RenderResult<RgbImage> {
    if image.width() == 0 || image.height() == 0 {
        return Err(RenderError::Core(Error::InvalidDimension {
            width: image.width(),
            height: image.height(),
        }));
    }
    if style.stroke_width == 0 {
        return Err(RenderError::InvalidStyle(
            "stroke width must be at least 1".into(),
        ));
    }

    let mut canvas = image.clone();
    for tb in boxes {
        let c = tb.corners;
        for k in 0..4 {
            let (x1, y1) = c[k];
            let (x2, y2) = c[(k + 1) % 4];
            let pts = wide_line_points(x1, y1, x2, y2, style.stroke_width);
            plot(&mut canvas, &pts, style.color);
        }
    }
    Ok(canvas)
}

/// Produce the plain-text sidecar: one line of recognized text per
/// annotation, in input order, each terminated by a newline.
pub fn transcript(boxes: &[TextBox]) -> String {
    let mut out = String::new();
    for tb in boxes {
        out.push_str(&tb.text);
        out.push('\n');
    }
    out
}
