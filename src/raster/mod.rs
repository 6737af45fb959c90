mod pixel;
mod pixel_buffer;

pub use pixel::Rgba;
pub use pixel_buffer::PixelBuffer;
