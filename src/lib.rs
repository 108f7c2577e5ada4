pub mod common;
pub mod config;
pub mod error;
pub mod pipeline;

pub use crate::config::{ClassifierConfig, Configuration, ResampleFilter};
pub use crate::error::{AppError, ClassifierError, ConfigError};

pub use common::Frame;
pub use pipeline::services::image::{AmbiguityPolicy, FixedBoost, LightingStats, RandomBoost};
pub use pipeline::{
    ClassificationReport, ClassificationResult, LightingClassifier, LightingDetails,
    LightingLabel, LightingService, PixelBuffer,
};
