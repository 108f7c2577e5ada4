use serde::{Deserialize, Serialize};
use std::fmt;

use super::LightingLabel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarmthTone {
    Warm,
    Cool,
}

impl fmt::Display for WarmthTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarmthTone::Warm => write!(f, "Warm"),
            WarmthTone::Cool => write!(f, "Cool"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightingDetails {
    pub brightness: u8, // rounded mean luminance
    pub warmth: i16,    // rounded mean red minus mean blue
}

impl LightingDetails {
    pub fn brightness_percent(&self) -> f64 {
        self.brightness as f64 / 255.0 * 100.0
    }

    pub fn warmth_tone(&self) -> WarmthTone {
        if self.warmth > 0 {
            WarmthTone::Warm
        } else {
            WarmthTone::Cool
        }
    }

    /// Position of the warmth marker on a cool-to-warm scale, in percent.
    pub fn warmth_marker_percent(&self) -> f64 {
        (50.0 + self.warmth as f64 / 5.0).clamp(0.0, 100.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub label: LightingLabel,
    pub confidence: u8,
    pub details: LightingDetails,
}
