use image::{ImageBuffer, Rgba, RgbaImage};

use crate::error::ClassifierError;

pub const CHANNELS: usize = 4;

/// Borrowed, row-major RGBA8 pixel data. Length is always `width * height * 4`.
#[derive(Debug, Clone, Copy)]
pub struct PixelBuffer<'a> {
    width: u32,
    height: u32,
    data: &'a [u8],
}

impl<'a> PixelBuffer<'a> {
    pub fn new(width: u32, height: u32, data: &'a [u8]) -> Result<Self, ClassifierError> {
        if width == 0 || height == 0 {
            return Err(ClassifierError::InvalidDimensions { width, height });
        }

        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(CHANNELS));

        match expected {
            Some(len) if len == data.len() => Ok(Self {
                width,
                height,
                data,
            }),
            _ => Err(ClassifierError::DecodeUnavailable(format!(
                "{}x{} RGBA image needs {} bytes, got {}",
                width,
                height,
                expected.map_or_else(|| "too many".to_string(), |len| len.to_string()),
                data.len()
            ))),
        }
    }

    pub fn from_rgba(image: &'a RgbaImage) -> Result<Self, ClassifierError> {
        Self::new(image.width(), image.height(), image.as_raw())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Zero-copy view usable by `image::imageops`.
    pub fn as_image(&self) -> Result<ImageBuffer<Rgba<u8>, &'a [u8]>, ClassifierError> {
        ImageBuffer::from_raw(self.width, self.height, self.data).ok_or_else(|| {
            ClassifierError::DecodeUnavailable("pixel data does not fit its dimensions".to_string())
        })
    }
}
