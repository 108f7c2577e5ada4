use chrono::{DateTime, Utc};
use image::DynamicImage;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::ClassifierError;
use crate::pipeline::types::PixelBuffer;

/// A decoded image waiting to be classified.
#[derive(Clone)]
pub struct Frame {
    frame_id: Uuid,
    source: String,
    image: Arc<DynamicImage>,
    received_at: DateTime<Utc>,
}

impl Frame {
    pub fn new(source: impl Into<String>, image: DynamicImage) -> Self {
        Self {
            frame_id: Uuid::new_v4(),
            source: source.into(),
            image: Arc::new(image),
            received_at: Utc::now(),
        }
    }

    pub fn frame_id(&self) -> Uuid {
        self.frame_id
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn received_at(&self) -> DateTime<Utc> {
        self.received_at
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.image.width(), self.image.height())
    }

    /// Converts to 8-bit RGBA and hands a borrowed pixel view to `f`.
    pub fn with_pixels<T>(
        &self,
        f: impl FnOnce(&PixelBuffer<'_>) -> Result<T, ClassifierError>,
    ) -> Result<T, ClassifierError> {
        let rgba = self.image.to_rgba8();
        let pixels = PixelBuffer::from_rgba(&rgba)?;
        f(&pixels)
    }
}
