pub mod services;
pub mod types;

pub use services::{LightingClassifier, LightingService};
pub use types::{ClassificationReport, ClassificationResult, LightingDetails, LightingLabel, PixelBuffer};
