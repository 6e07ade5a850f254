//! Shape painters.
//!
//! Every painter fills a shape anchored at a (possibly negative) pixel position inside an
//! [`RgbaImage`]. Pixels that fall outside the image are dropped, so a shape hanging over the edge
//! of the buffer is simply cut off.

use image::{Rgba, RgbaImage};

/// Sets a single pixel if it lies inside the image.
fn put_clipped(img: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>) {
    if x < 0 || y < 0 || x >= img.width() as i64 || y >= img.height() as i64 {
        return;
    }
    img.put_pixel(x as u32, y as u32, color);
}

/// Fills the half-open rectangle `[x0, x1) × [y0, y1)`, clipped to the image.
fn fill_rect(img: &mut RgbaImage, x0: i64, y0: i64, x1: i64, y1: i64, color: Rgba<u8>) {
    let x0 = x0.max(0);
    let y0 = y0.max(0);
    let x1 = x1.min(img.width() as i64);
    let y1 = y1.min(img.height() as i64);
    for y in y0..y1 {
        for x in x0..x1 {
            img.put_pixel(x as u32, y as u32, color);
        }
    }
}

/// Fills a `width × height` rectangle whose top-left corner is `(x, y)`.
pub fn fill_square(img: &mut RgbaImage, x: i64, y: i64, width: u32, height: u32, color: Rgba<u8>) {
    fill_rect(img, x, y, x + width as i64, y + height as i64, color);
}

/// Fills a `width × height` rectangle with quarter-disc corners of the given radius.
///
/// The body is drawn as two overlapping rectangles (one missing the corner columns, one missing
/// the corner rows); each `radius × radius` corner is then filled with the pixels `(i, j)` that
/// satisfy `(i - r)² + (j - r)² <= r²`, mirrored into all four corners.
pub fn fill_rounded_square(
    img: &mut RgbaImage,
    x: i64,
    y: i64,
    width: u32,
    height: u32,
    radius: u32,
    color: Rgba<u8>,
) {
    let (w, h) = (width as i64, height as i64);
    let r = (radius as i64).min(w / 2).min(h / 2);

    fill_rect(img, x + r, y, x + w - r, y + h, color);
    fill_rect(img, x, y + r, x + w, y + h - r, color);

    for i in 0..r {
        for j in 0..r {
            if (i - r) * (i - r) + (j - r) * (j - r) <= r * r {
                put_clipped(img, x + i, y + j, color);
                put_clipped(img, x + w - 1 - i, y + j, color);
                put_clipped(img, x + i, y + h - 1 - j, color);
                put_clipped(img, x + w - 1 - i, y + h - 1 - j, color);
            }
        }
    }
}

/// Fills an upward-pointing isosceles triangle inscribed in a `width × height` cell.
///
/// Scanline `dy` covers `[w/2 - w·dy/(2h), w/2 + w·dy/(2h)]`, so the apex is a single pixel on
/// the top row and the base spans the full width on the bottom row.
pub fn fill_triangle(
    img: &mut RgbaImage,
    x: i64,
    y: i64,
    width: u32,
    height: u32,
    color: Rgba<u8>,
) {
    let (w, h) = (width as i64, height as i64);
    if w == 0 || h == 0 {
        return;
    }
    for dy in 0..h {
        let half_span = (w * dy) / (2 * h);
        let left = w / 2 - half_span;
        let right = (w / 2 + half_span).min(w - 1);
        fill_rect(img, x + left, y + dy, x + right + 1, y + dy + 1, color);
    }
}

/// Fills a `size × size` square centered on a `cell × cell` cell anchored at `(x, y)`.
///
/// When `size` exceeds `cell` the offset `(cell - size) / 2` is negative and the square spills
/// into the neighbouring cells.
pub fn fill_centered_square(
    img: &mut RgbaImage,
    x: i64,
    y: i64,
    cell: u32,
    size: u32,
    color: Rgba<u8>,
) {
    let offset = (cell as i64 - size as i64) / 2;
    fill_square(img, x + offset, y + offset, size, size, color);
}
