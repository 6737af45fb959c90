use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PixelError {
    #[error("i/o error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to decode {} as png", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Resize only fits a smaller image into a larger canvas.
    #[error(
        "source {source_width}x{source_height} does not fit into target {target_width}x{target_height}"
    )]
    SizeConstraint {
        source_width: u32,
        source_height: u32,
        target_width: u32,
        target_height: u32,
    },

    #[error(
        "buffer dimensions differ: {left_width}x{left_height} vs {right_width}x{right_height}"
    )]
    DimensionMismatch {
        left_width: u32,
        left_height: u32,
        right_width: u32,
        right_height: u32,
    },
}
