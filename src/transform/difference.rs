use crate::raster::{PixelBuffer, Rgba};
use crate::PixelError;

/// Per-channel `(a - b) mod 256`. Output alpha is always 255.
pub fn difference(a: &PixelBuffer, b: &PixelBuffer) -> Result<PixelBuffer, PixelError> {
    zip_pixels(a, b, Rgba::wrapping_sub_rgb)
}

/// Per-channel `(base + diff) mod 256`, the inverse of [`difference`]. Output alpha is always 255.
pub fn apply(base: &PixelBuffer, diff: &PixelBuffer) -> Result<PixelBuffer, PixelError> {
    zip_pixels(base, diff, Rgba::wrapping_add_rgb)
}

fn zip_pixels(
    left: &PixelBuffer,
    right: &PixelBuffer,
    op: impl Fn(Rgba, Rgba) -> Rgba,
) -> Result<PixelBuffer, PixelError> {
    if left.dimensions() != right.dimensions() {
        return Err(PixelError::DimensionMismatch {
            left_width: left.width(),
            left_height: left.height(),
            right_width: right.width(),
            right_height: right.height(),
        });
    }

    let pixels = left
        .pixels()
        .iter()
        .zip(right.pixels())
        .map(|(&l, &r)| op(l, r))
        .collect();

    Ok(PixelBuffer::from_matched_pixels(
        left.width(),
        left.height(),
        pixels,
    ))
}
