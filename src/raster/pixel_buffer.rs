use crate::raster::Rgba;
use crate::util::AsUsize;

/// Row-major grid of RGBA pixels with dimensions fixed at construction.
///
/// Every constructor fills all `width * height` pixels before returning, and
/// there is no mutable pixel access afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl PixelBuffer {
    /// Build a buffer by evaluating `f` at every `(x, y)`, row by row.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Rgba) -> Self {
        let mut pixels = Vec::with_capacity(pixel_count(width, height));

        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }

        PixelBuffer {
            width,
            height,
            pixels,
        }
    }

    /// Wrap row-major pixels. Returns `None` if the count does not match the dimensions.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgba>) -> Option<Self> {
        if pixels.len() != pixel_count(width, height) {
            return None;
        }

        Some(PixelBuffer {
            width,
            height,
            pixels,
        })
    }

    /// Wrap pixels whose count the caller has already matched to the dimensions.
    pub(crate) fn from_matched_pixels(width: u32, height: u32, pixels: Vec<Rgba>) -> Self {
        debug_assert_eq!(pixels.len(), pixel_count(width, height));

        PixelBuffer {
            width,
            height,
            pixels,
        }
    }

    /// Copy tightly packed RGBA8 bytes. Returns `None` if the length does not match the dimensions.
    pub fn from_rgba8(width: u32, height: u32, bytes: &[u8]) -> Option<Self> {
        let expected = pixel_count(width, height).checked_mul(4)?;
        if bytes.len() != expected {
            return None;
        }

        Some(PixelBuffer {
            width,
            height,
            pixels: bytemuck::cast_slice::<u8, Rgba>(bytes).to_vec(),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }

        Some(self.pixels[self.index(x, y)])
    }

    /// Pixel at an in-bounds `(x, y)`. Panics when out of bounds.
    pub(crate) fn at(&self, x: u32, y: u32) -> Rgba {
        assert!(x < self.width && y < self.height, "({x}, {y}) outside {}x{}", self.width, self.height);
        self.pixels[self.index(x, y)]
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y.as_usize() * self.width.as_usize() + x.as_usize()
    }
}

fn pixel_count(width: u32, height: u32) -> usize {
    usize::checked_mul(width.as_usize(), height.as_usize())
        .expect("pixel count too large to fit in usize")
}
