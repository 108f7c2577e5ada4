use image::DynamicImage;
use std::path::Path;
use tracing::debug;

use crate::error::ClassifierError;

pub fn decode_bytes(bytes: &[u8]) -> Result<DynamicImage, ClassifierError> {
    let image = image::load_from_memory(bytes)
        .map_err(|e| ClassifierError::DecodeUnavailable(e.to_string()))?;
    ensure_pixels(image)
}

pub fn open_path(path: impl AsRef<Path>) -> Result<DynamicImage, ClassifierError> {
    let path = path.as_ref();
    let image = image::open(path).map_err(|e| {
        ClassifierError::DecodeUnavailable(format!("{}: {}", path.display(), e))
    })?;
    debug!("Decoded {} ({}x{})", path.display(), image.width(), image.height());
    ensure_pixels(image)
}

// A decoder can succeed and still hand back nothing to sample.
fn ensure_pixels(image: DynamicImage) -> Result<DynamicImage, ClassifierError> {
    if image.width() == 0 || image.height() == 0 {
        return Err(ClassifierError::DecodeUnavailable(format!(
            "decoded image is {}x{}",
            image.width(),
            image.height()
        )));
    }
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, ImageFormat, Rgb};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
        let img = DynamicImage::ImageRgb8(ImageBuffer::<Rgb<u8>, Vec<u8>>::from_pixel(
            width,
            height,
            Rgb(rgb),
        ));
        let mut bytes = Cursor::new(Vec::new());
        img.write_to(&mut bytes, ImageFormat::Png)
            .expect("Error encoding PNG.");
        bytes.into_inner()
    }

    #[test]
    fn decodes_png_bytes() {
        let image = decode_bytes(&png_bytes(12, 5, [9, 8, 7])).unwrap();
        assert_eq!((image.width(), image.height()), (12, 5));
        assert_eq!(image.to_rgb8().get_pixel(3, 3).0, [9, 8, 7]);
    }

    #[test]
    fn garbage_is_decode_unavailable() {
        let result = decode_bytes(b"definitely not an image");
        assert!(matches!(result, Err(ClassifierError::DecodeUnavailable(_))));
    }

    #[test]
    fn empty_input_is_decode_unavailable() {
        assert!(matches!(
            decode_bytes(&[]),
            Err(ClassifierError::DecodeUnavailable(_))
        ));
    }

    #[test]
    fn missing_file_is_decode_unavailable() {
        let result = open_path("/nonexistent/night-sky.png");
        assert!(matches!(result, Err(ClassifierError::DecodeUnavailable(_))));
    }

    #[test]
    fn zero_sized_image_is_rejected() {
        let result = ensure_pixels(DynamicImage::new_rgba8(0, 4));
        assert!(matches!(result, Err(ClassifierError::DecodeUnavailable(_))));
    }
}
