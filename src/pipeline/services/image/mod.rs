pub mod analysis_grid;
pub mod channel_accumulator;
pub mod confidence_policy;
pub mod decoding;
pub mod lighting_classifier;
pub mod lighting_service;

pub use analysis_grid::AnalysisGrid;
pub use channel_accumulator::{ChannelAccumulator, LightingStats};
pub use confidence_policy::{AmbiguityPolicy, FixedBoost, RandomBoost};
pub use decoding::{decode_bytes, open_path};
pub use lighting_classifier::LightingClassifier;
pub use lighting_service::LightingService;
