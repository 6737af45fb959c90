use crate::codec::png::{PngDecoder, PngEncoder};
use crate::codec::{DecoderStage, EncoderStage};
use crate::raster::PixelBuffer;
use crate::PixelError;
use image::ImageError;
use std::fs;
use std::io;
use std::path::Path;

/// Read and decode the PNG file at `path`.
pub fn load(path: impl AsRef<Path>) -> Result<PixelBuffer, PixelError> {
    let path = path.as_ref();

    let data = fs::read(path).map_err(|source| PixelError::Io {
        path: path.to_owned(),
        source,
    })?;

    let img = PngDecoder.decode(&data).map_err(|source| PixelError::Decode {
        path: path.to_owned(),
        source,
    })?;

    log::info!("Loaded {} ({}x{})", path.display(), img.width(), img.height());
    Ok(img)
}

/// Encode `img` as PNG and write it to `path`, truncating any existing file.
pub fn save(path: impl AsRef<Path>, img: &PixelBuffer) -> Result<(), PixelError> {
    let path = path.as_ref();

    let data = PngEncoder.encode(img).map_err(|e| PixelError::Io {
        path: path.to_owned(),
        source: into_io_error(e),
    })?;

    fs::write(path, data).map_err(|source| PixelError::Io {
        path: path.to_owned(),
        source,
    })?;

    log::info!("Wrote {} ({}x{})", path.display(), img.width(), img.height());
    Ok(())
}

fn into_io_error(e: ImageError) -> io::Error {
    match e {
        ImageError::IoError(e) => e,
        other => io::Error::other(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Rgba;

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("img.png");
        let img = PixelBuffer::from_fn(4, 3, |x, y| Rgba::new(x as u8, y as u8, 200, 128));

        save(&path, &img).unwrap();
        assert_eq!(load(&path).unwrap(), img);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(dir.path().join("nope.png")).unwrap_err();

        assert!(matches!(err, PixelError::Io { .. }), "{err:?}");
    }

    #[test]
    fn invalid_png_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.png");
        fs::write(&path, b"\x89PNG but not really").unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, PixelError::Decode { .. }), "{err:?}");
    }

    #[test]
    fn unencodable_buffer_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.png");
        let img = PixelBuffer::from_pixels(0, 0, Vec::new()).unwrap();

        let err = save(&path, &img).unwrap_err();
        assert!(matches!(err, PixelError::Io { .. }), "{err:?}");
        assert!(!path.exists());
    }

    #[test]
    fn save_into_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let img = PixelBuffer::from_fn(1, 1, |_, _| Rgba::default());

        let err = save(dir.path().join("missing").join("out.png"), &img).unwrap_err();
        assert!(matches!(err, PixelError::Io { .. }), "{err:?}");
    }
}
