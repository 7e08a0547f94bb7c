//! # Imagery Selection
//!
//! Maps years remaining to one of four presentation buckets. The thresholds are strict
//! `>` comparisons, so a value sitting exactly on a boundary falls into the grimmer bucket.
//!
//! | years remaining   | bucket     | image                |
//! |-------------------|------------|----------------------|
//! | > 50              | `Gentle`   | `time-gentle.svg`    |
//! | (20, 50]          | `Mild`     | `death-mild.svg`     |
//! | (5, 20]           | `Moderate` | `death-moderate.svg` |
//! | ≤ 5 (and NaN)     | `Severe`   | `death-severe.svg`   |

use serde::Serialize;

/// URL prefix the image files are served under.
pub const IMAGE_URL_PREFIX: &str = "/static/images";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageBucket {
    Gentle,
    Mild,
    Moderate,
    Severe,
}

impl ImageBucket {
    /// Total over f64: every input, NaN included, maps to exactly one bucket.
    pub fn select(years_remaining: f64) -> Self {
        if years_remaining > 50.0 {
            ImageBucket::Gentle
        } else if years_remaining > 20.0 {
            ImageBucket::Mild
        } else if years_remaining > 5.0 {
            ImageBucket::Moderate
        } else {
            ImageBucket::Severe
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            ImageBucket::Gentle => "time-gentle.svg",
            ImageBucket::Mild => "death-mild.svg",
            ImageBucket::Moderate => "death-moderate.svg",
            ImageBucket::Severe => "death-severe.svg",
        }
    }

    pub fn url(&self) -> String {
        format!("{IMAGE_URL_PREFIX}/{}", self.file_name())
    }

    pub fn alt_text(&self) -> &'static str {
        match self {
            ImageBucket::Gentle => "An hourglass with plenty of sand left",
            ImageBucket::Mild => "A skull resting beside a candle",
            ImageBucket::Moderate => "A skull beside a guttering candle",
            ImageBucket::Severe => "A skull beside a snuffed candle",
        }
    }
}
