use thiserror::Error;

// Main Application Error Type

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Classifier Error: {0}")]
    Classifier(#[from] ClassifierError),
    #[error("Configuration Error: {0}")]
    Config(#[from] ConfigError),
    #[error("Usage: {0}")]
    Usage(String),
    #[error("Background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
    #[error("Failed to serialize result: {0}")]
    Serialize(#[from] serde_json::Error),
}

// Classification Error Type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifierError {
    #[error("Image data is unavailable: {0}")]
    DecodeUnavailable(String),
    #[error("Invalid image dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
