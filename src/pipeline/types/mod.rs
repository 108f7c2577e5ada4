mod classification_report;
mod classification_result;
mod lighting_label;
mod pixel_buffer;

pub use classification_report::ClassificationReport;
pub use classification_result::{ClassificationResult, LightingDetails, WarmthTone};
pub use lighting_label::LightingLabel;
pub use pixel_buffer::{PixelBuffer, CHANNELS};
