pub mod codec;
pub mod error;
pub mod pipeline;
pub mod raster;
pub mod transform;
pub mod util;

pub use error::PixelError;
