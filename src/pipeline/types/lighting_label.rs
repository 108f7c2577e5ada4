use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LightingLabel {
    Day,
    Night,
}

impl LightingLabel {
    pub fn from_daylight(is_day: bool) -> Self {
        if is_day {
            LightingLabel::Day
        } else {
            LightingLabel::Night
        }
    }

    pub fn is_day(self) -> bool {
        self == LightingLabel::Day
    }

    /// Explanation shown alongside the label.
    pub fn summary(self) -> &'static str {
        match self {
            LightingLabel::Day => {
                "High luminance detected combined with daylight color spectrum patterns."
            }
            LightingLabel::Night => {
                "Low luminance levels detected consistent with nighttime environmental lighting."
            }
        }
    }
}

impl fmt::Display for LightingLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LightingLabel::Day => write!(f, "Day"),
            LightingLabel::Night => write!(f, "Night"),
        }
    }
}
