use image::{imageops, ImageBuffer, Rgba, RgbaImage};

use crate::config::ResampleFilter;
use crate::error::ClassifierError;
use crate::pipeline::types::PixelBuffer;

/// Fixed-size resample of a source image. Statistics are always taken from
/// the grid, so analysis cost does not depend on the source resolution.
#[derive(Debug, Clone)]
pub struct AnalysisGrid {
    image: RgbaImage,
}

impl AnalysisGrid {
    /// Stretches `source` to exactly `size`x`size`, ignoring aspect ratio.
    pub fn resample(
        source: &PixelBuffer<'_>,
        size: u32,
        filter: ResampleFilter,
    ) -> Result<Self, ClassifierError> {
        if size == 0 {
            return Err(ClassifierError::InvalidDimensions {
                width: size,
                height: size,
            });
        }

        let view = source.as_image()?;
        let image = if view.dimensions() == (size, size) {
            ImageBuffer::from_raw(size, size, source.data().to_vec()).ok_or_else(|| {
                ClassifierError::DecodeUnavailable("failed to copy source pixels".to_string())
            })?
        } else {
            imageops::resize(&view, size, size, filter.filter_type())
        };

        Ok(Self { image })
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn pixel_count(&self) -> u64 {
        let (width, height) = self.dimensions();
        width as u64 * height as u64
    }

    pub fn pixels(&self) -> impl Iterator<Item = &Rgba<u8>> {
        self.image.pixels()
    }
}
