use crate::raster::PixelBuffer;
use crate::util::AsUsize;
use crate::PixelError;

/// Nearest-neighbor upsampling of `source` to `target_width` x `target_height`.
///
/// Destination `(x, y)` samples source
/// `(round(x * sw / tw), round(y * sh / th))`, rounding half away from zero and
/// clamping to the last source column/row. Downsampling is rejected.
pub fn resize(
    source: &PixelBuffer,
    target_width: u32,
    target_height: u32,
) -> Result<PixelBuffer, PixelError> {
    let (sw, sh) = source.dimensions();
    let fits = sw <= target_width && sh <= target_height;
    let samplable = !source.is_empty() || target_width == 0 || target_height == 0;

    if !fits || !samplable {
        return Err(PixelError::SizeConstraint {
            source_width: sw,
            source_height: sh,
            target_width,
            target_height,
        });
    }

    let xs = sample_positions(sw, target_width);
    let ys = sample_positions(sh, target_height);

    let out = PixelBuffer::from_fn(target_width, target_height, |x, y| {
        // sample positions are clamped to the last column/row of a non-empty source
        source.at(xs[x.as_usize()], ys[y.as_usize()])
    });

    if (sw, sh) != (target_width, target_height) {
        log::info!("Resized {sw}x{sh} to {target_width}x{target_height}");
    }
    Ok(out)
}

/// Source index for every destination index along one axis.
fn sample_positions(source_len: u32, target_len: u32) -> Vec<u32> {
    let last = source_len.saturating_sub(1);

    (0..target_len)
        .map(|i| {
            let pos = (f64::from(i) * f64::from(source_len) / f64::from(target_len)).round();
            (pos as u32).min(last)
        })
        .collect()
}
