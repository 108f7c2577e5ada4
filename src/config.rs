use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File, FileFormat};
use image::imageops::FilterType;
use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_CONFIG_FILE: &str = "day-night.toml";
pub const CONFIG_PATH_VAR: &str = "DAYNIGHT_CONFIG";
pub const ENV_PREFIX: &str = "DAYNIGHT";

/// Side length of the square analysis grid every image is resampled to.
pub const DEFAULT_GRID_SIZE: u32 = 100;
/// Mean luminance (0-255) above which a scene counts as daylight.
pub const DEFAULT_BRIGHTNESS_THRESHOLD: f64 = 80.0;
/// Distance from the threshold at which raw confidence saturates at 100%.
pub const DEFAULT_CONFIDENCE_SCALE: f64 = 50.0;
/// Raw confidence below this is treated as ambiguous.
pub const DEFAULT_AMBIGUOUS_BELOW: f64 = 60.0;
pub const DEFAULT_AMBIGUOUS_MIN: u8 = 60;
pub const DEFAULT_AMBIGUOUS_MAX: u8 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResampleFilter {
    Bilinear,
    Nearest,
}

impl ResampleFilter {
    pub fn filter_type(self) -> FilterType {
        match self {
            ResampleFilter::Bilinear => FilterType::Triangle,
            ResampleFilter::Nearest => FilterType::Nearest,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub grid_size: u32,
    pub resample: ResampleFilter,
    pub brightness_threshold: f64,
    pub confidence_scale: f64,
    pub ambiguous_below: f64,
    pub ambiguous_min: u8,
    pub ambiguous_max: u8, // exclusive
    pub seed: Option<u64>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            resample: ResampleFilter::Bilinear,
            brightness_threshold: DEFAULT_BRIGHTNESS_THRESHOLD,
            confidence_scale: DEFAULT_CONFIDENCE_SCALE,
            ambiguous_below: DEFAULT_AMBIGUOUS_BELOW,
            ambiguous_min: DEFAULT_AMBIGUOUS_MIN,
            ambiguous_max: DEFAULT_AMBIGUOUS_MAX,
            seed: None,
        }
    }
}

impl ClassifierConfig {
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.brightness_threshold = threshold;
        self
    }

    pub fn with_grid_size(mut self, grid_size: u32) -> Self {
        self.grid_size = grid_size;
        self
    }

    pub fn with_resample(mut self, resample: ResampleFilter) -> Self {
        self.resample = resample;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::Invalid(
                "Grid size must be greater than 0".to_string(),
            ));
        }

        if !self.brightness_threshold.is_finite() {
            return Err(ConfigError::Invalid(
                "Brightness threshold must be a finite number".to_string(),
            ));
        }

        if !self.confidence_scale.is_finite() || self.confidence_scale <= 0.0 {
            return Err(ConfigError::Invalid(
                "Confidence scale must be a positive number".to_string(),
            ));
        }

        if !(0.0..=100.0).contains(&self.ambiguous_below) {
            return Err(ConfigError::Invalid(
                "Ambiguity cutoff must be between 0 and 100".to_string(),
            ));
        }

        // Otherwise a confident raw score could be lowered into the ambiguous range.
        if self.ambiguous_below > self.ambiguous_min as f64 {
            return Err(ConfigError::Invalid(format!(
                "Ambiguity cutoff {} exceeds the minimum ambiguous confidence {}",
                self.ambiguous_below, self.ambiguous_min
            )));
        }

        if self.ambiguous_min >= self.ambiguous_max {
            return Err(ConfigError::Invalid(format!(
                "Ambiguous confidence range [{}, {}) is empty",
                self.ambiguous_min, self.ambiguous_max
            )));
        }

        if self.ambiguous_max > 100 {
            return Err(ConfigError::Invalid(
                "Ambiguous confidence cannot exceed 100".to_string(),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub log_level: String,
    pub classifier: ClassifierConfig,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            classifier: ClassifierConfig::default(),
        }
    }
}

impl Configuration {
    /// Defaults, then the optional config file, then `DAYNIGHT_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let path =
            std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

        let builder = config::Config::builder()
            .add_source(File::with_name(&path).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::from_builder(builder)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Self::from_builder(
            config::Config::builder().add_source(File::from_str(contents, FileFormat::Toml)),
        )
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let configuration: Configuration = builder.build()?.try_deserialize()?;
        configuration.classifier.validate()?;
        Ok(configuration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_calibration_constants() {
        let config = Configuration::default();
        assert_eq!(config.classifier.grid_size, 100);
        assert_eq!(config.classifier.brightness_threshold, 80.0);
        assert_eq!(config.classifier.confidence_scale, 50.0);
        assert_eq!(config.classifier.resample, ResampleFilter::Bilinear);
        assert!(config.classifier.validate().is_ok());
    }

    #[test]
    fn toml_overrides_only_named_fields() {
        let config = Configuration::from_toml(
            r#"
            log_level = "debug"

            [classifier]
            brightness_threshold = 95.5
            resample = "nearest"
            seed = 7
            "#,
        )
        .unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.classifier.brightness_threshold, 95.5);
        assert_eq!(config.classifier.resample, ResampleFilter::Nearest);
        assert_eq!(config.classifier.seed, Some(7));
        assert_eq!(config.classifier.grid_size, 100);
    }

    #[test]
    fn empty_toml_yields_defaults() {
        assert_eq!(Configuration::from_toml("").unwrap(), Configuration::default());
    }

    #[test]
    fn rejects_empty_ambiguous_range() {
        let result = Configuration::from_toml(
            r#"
            [classifier]
            ambiguous_min = 80
            ambiguous_max = 80
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn rejects_bad_ambiguity_cutoff() {
        for cutoff in [f64::NAN, f64::INFINITY, -1.0, 100.5, 61.0] {
            let config = ClassifierConfig {
                ambiguous_below: cutoff,
                ..ClassifierConfig::default()
            };
            assert!(
                matches!(config.validate(), Err(ConfigError::Invalid(_))),
                "cutoff {cutoff} accepted"
            );
        }

        let lowered = ClassifierConfig {
            ambiguous_below: 40.0,
            ..ClassifierConfig::default()
        };
        assert!(lowered.validate().is_ok());
    }

    // The only test that touches DAYNIGHT_* variables, so nothing races on them.
    #[test]
    fn load_layers_file_then_environment() {
        let path = std::env::temp_dir().join(format!(
            "day-night-{}.toml",
            uuid::Uuid::new_v4()
        ));
        std::fs::write(
            &path,
            r#"
            log_level = "warn"

            [classifier]
            grid_size = 64
            brightness_threshold = 70.0
            "#,
        )
        .unwrap();

        std::env::set_var(CONFIG_PATH_VAR, &path);
        std::env::set_var("DAYNIGHT_CLASSIFIER__BRIGHTNESS_THRESHOLD", "90");
        std::env::set_var("DAYNIGHT_CLASSIFIER__SEED", "5");

        let loaded = Configuration::load();

        std::env::set_var("DAYNIGHT_CLASSIFIER__AMBIGUOUS_MIN", "90");
        let invalid = Configuration::load();

        std::env::remove_var("DAYNIGHT_CLASSIFIER__AMBIGUOUS_MIN");
        std::env::remove_var("DAYNIGHT_CLASSIFIER__SEED");
        std::env::remove_var("DAYNIGHT_CLASSIFIER__BRIGHTNESS_THRESHOLD");
        std::env::remove_var(CONFIG_PATH_VAR);
        let _ = std::fs::remove_file(&path);

        let config = loaded.unwrap();
        // environment beats file
        assert_eq!(config.classifier.brightness_threshold, 90.0);
        assert_eq!(config.classifier.seed, Some(5));
        // file beats defaults
        assert_eq!(config.classifier.grid_size, 64);
        assert_eq!(config.log_level, "warn");
        // untouched fields keep defaults
        assert_eq!(config.classifier.confidence_scale, DEFAULT_CONFIDENCE_SCALE);
        assert_eq!(config.classifier.resample, ResampleFilter::Bilinear);

        assert!(matches!(invalid, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn rejects_zero_grid() {
        let config = ClassifierConfig::default().with_grid_size(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_non_positive_scale() {
        let config = ClassifierConfig {
            confidence_scale: 0.0,
            ..ClassifierConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
