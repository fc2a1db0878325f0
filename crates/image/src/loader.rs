use image::DynamicImage;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ImageError {
    #[error("decode image error: {source}")]
    Decode {
        #[from]
        source: image::ImageError,
    },

    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

/// Decodes an in-memory encoded image (png, jpeg).
pub fn load_image(bytes: &[u8]) -> Result<DynamicImage, ImageError> {
    let image = image::load_from_memory(bytes)?;
    debug!(len = bytes.len(), width = image.width(), height = image.height(), "decoded image");
    Ok(image)
}

pub fn load_image_from_path<P: AsRef<Path>>(path: P) -> Result<DynamicImage, ImageError> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    debug!(path = %path.display(), "read image bytes");
    load_image(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn encoded_png() -> Vec<u8> {
        let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(3, 2, Rgba([10, 20, 30, 255])));
        let mut bytes = Cursor::new(Vec::new());
        image.write_to(&mut bytes, ImageFormat::Png).unwrap();
        bytes.into_inner()
    }

    #[test]
    fn test_load_image() {
        let image = load_image(&encoded_png()).unwrap();
        assert_eq!((image.width(), image.height()), (3, 2));
    }

    #[test]
    fn test_load_garbage() {
        let result = load_image(b"definitely not an image");
        assert!(matches!(result, Err(ImageError::Decode { .. })));
    }

    #[test]
    fn test_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logo.png");
        fs::write(&path, encoded_png()).unwrap();

        let image = load_image_from_path(&path).unwrap();
        assert_eq!((image.width(), image.height()), (3, 2));
    }

    #[test]
    fn test_load_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_image_from_path(dir.path().join("missing.png"));
        assert!(matches!(result, Err(ImageError::Io { .. })));
    }
}
