use crate::codec::{DecoderStage, EncoderStage};
use crate::raster::{PixelBuffer, Rgba};
use image::codecs::png::PngEncoder as ImagePngEncoder;
use image::error::{ParameterError, ParameterErrorKind};
use image::{
    DynamicImage, ExtendedColorType, ImageEncoder, ImageError, ImageFormat, ImageResult,
};

/// Decodes any PNG color type into 8-bit straight RGBA.
///
/// 16-bit samples keep their high byte; 8-bit, gray and palette images are
/// expanded by the `image` crate.
#[derive(Debug, Default)]
pub struct PngDecoder;

impl DecoderStage for PngDecoder {
    fn decode(&mut self, data: &[u8]) -> ImageResult<PixelBuffer> {
        let img = image::load_from_memory_with_format(data, ImageFormat::Png)?;

        let wide = matches!(
            img,
            DynamicImage::ImageLuma16(_)
                | DynamicImage::ImageLumaA16(_)
                | DynamicImage::ImageRgb16(_)
                | DynamicImage::ImageRgba16(_)
        );

        let buf = if wide {
            let rgba = img.into_rgba16();
            let (w, h) = rgba.dimensions();
            let pixels = rgba
                .pixels()
                .map(|p| {
                    let [r, g, b, a] = p.0;
                    Rgba::new(narrow(r), narrow(g), narrow(b), narrow(a))
                })
                .collect();
            PixelBuffer::from_pixels(w, h, pixels)
        } else {
            let rgba = img.into_rgba8();
            let (w, h) = rgba.dimensions();
            PixelBuffer::from_rgba8(w, h, rgba.as_raw())
        };

        buf.ok_or_else(|| {
            ImageError::Parameter(ParameterError::from_kind(
                ParameterErrorKind::DimensionMismatch,
            ))
        })
    }
}

/// Truncate a 16-bit sample to 8 bits.
#[inline]
fn narrow(sample: u16) -> u8 {
    (sample >> 8) as u8
}

#[derive(Debug, Default)]
pub struct PngEncoder;

impl EncoderStage for PngEncoder {
    fn encode(&mut self, img: &PixelBuffer) -> ImageResult<Vec<u8>> {
        let mut buf = Vec::new();

        ImagePngEncoder::new(&mut buf).write_image(
            img.as_bytes(),
            img.width(),
            img.height(),
            ExtendedColorType::Rgba8,
        )?;

        Ok(buf)
    }
}
