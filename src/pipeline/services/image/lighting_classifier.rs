use std::sync::{Mutex, PoisonError};
use tracing::debug;

use super::analysis_grid::AnalysisGrid;
use super::channel_accumulator::{ChannelAccumulator, LightingStats};
use super::confidence_policy::{AmbiguityPolicy, RandomBoost};
use crate::config::ClassifierConfig;
use crate::error::{ClassifierError, ConfigError};
use crate::pipeline::types::{ClassificationResult, LightingDetails, LightingLabel, PixelBuffer};

/// Rounds halves toward positive infinity, so `-0.5` becomes `0`.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Brightness-threshold Day/Night classifier. Only the ambiguity draw is
/// serialised; pixel work runs without a lock.
pub struct LightingClassifier<P = RandomBoost> {
    config: ClassifierConfig,
    policy: Mutex<P>,
}

impl LightingClassifier<RandomBoost> {
    /// Seeds the ambiguity draw from `config.seed`, or from the OS when unset.
    pub fn from_config(config: ClassifierConfig) -> Result<Self, ConfigError> {
        let policy = match config.seed {
            Some(seed) => RandomBoost::seeded(seed),
            None => RandomBoost::from_os_rng(),
        };
        Self::with_policy(config, policy)
    }
}

impl<P: AmbiguityPolicy> LightingClassifier<P> {
    pub fn with_policy(config: ClassifierConfig, policy: P) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            policy: Mutex::new(policy),
        })
    }

    /// Resamples to the analysis grid and averages its channels.
    pub fn analyze(&self, image: &PixelBuffer<'_>) -> Result<LightingStats, ClassifierError> {
        let grid = AnalysisGrid::resample(image, self.config.grid_size, self.config.resample)?;
        let accumulator: ChannelAccumulator = grid.pixels().collect();

        let stats = accumulator.averages().ok_or_else(|| {
            ClassifierError::DecodeUnavailable("analysis grid has no pixels".to_string())
        })?;

        debug!(
            "Lighting stats for {}x{} source: brightness={:.3} red={:.3} blue={:.3}",
            image.width(),
            image.height(),
            stats.avg_brightness,
            stats.avg_red,
            stats.avg_blue
        );

        Ok(stats)
    }

    pub fn is_day(&self, stats: &LightingStats) -> bool {
        stats.avg_brightness > self.config.brightness_threshold
    }

    /// 0 at the threshold, 100 at `confidence_scale` units away or further.
    pub fn raw_confidence(&self, stats: &LightingStats) -> f64 {
        let distance = (stats.avg_brightness - self.config.brightness_threshold).abs();
        (distance / self.config.confidence_scale).min(1.0) * 100.0
    }

    /// Ambiguous results are never reported below `ambiguous_min`.
    pub fn confidence(&self, stats: &LightingStats) -> u8 {
        let raw = self.raw_confidence(stats);
        if raw < self.config.ambiguous_below {
            let range = self.config.ambiguous_min..self.config.ambiguous_max;
            // The policy keeps no invariant a panicking draw could break.
            let mut policy = self.policy.lock().unwrap_or_else(PoisonError::into_inner);
            let boosted = policy
                .ambiguous_confidence(raw, range.clone())
                .clamp(range.start, range.end.saturating_sub(1).max(range.start));
            debug!(
                "Ambiguous raw confidence {:.2}, reporting {} via {}",
                raw,
                boosted,
                policy.name()
            );
            boosted
        } else {
            round_half_up(raw).clamp(0.0, 100.0) as u8
        }
    }

    pub fn classify(
        &self,
        image: &PixelBuffer<'_>,
    ) -> Result<ClassificationResult, ClassifierError> {
        let stats = self.analyze(image)?;
        let label = LightingLabel::from_daylight(self.is_day(&stats));
        let confidence = self.confidence(&stats);

        let details = LightingDetails {
            brightness: round_half_up(stats.avg_brightness).clamp(0.0, 255.0) as u8,
            warmth: round_half_up(stats.warmth()).clamp(-255.0, 255.0) as i16,
        };

        Ok(ClassificationResult {
            label,
            confidence,
            details,
        })
    }
}
