use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::gap::StatusCategory;

pub const DEFAULT_SEVERE_THRESHOLD_KG: f64 = 20.0;
pub const DEFAULT_MODERATE_THRESHOLD_KG: f64 = 5.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationScheme {
    #[default]
    Banded,
    SignOnly,
}

impl ClassificationScheme {
    pub fn as_slug(&self) -> &'static str {
        match self {
            Self::Banded => "banded",
            Self::SignOnly => "sign_only",
        }
    }
}

impl Display for ClassificationScheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_slug())
    }
}

#[derive(Debug, Error)]
#[error("unknown classification scheme: {0}")]
pub struct SchemeParseError(pub String);

impl FromStr for ClassificationScheme {
    type Err = SchemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "banded" | "five_band" | "bands" => Ok(Self::Banded),
            "sign_only" | "sign" | "three_way" => Ok(Self::SignOnly),
            _ => Err(SchemeParseError(s.to_string())),
        }
    }
}

/// Gap magnitudes (kg) separating the five bands. A gap whose magnitude is at
/// most `moderate` is stable; above `severe` it is severe.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BandThresholds {
    pub severe: f64,
    pub moderate: f64,
}

impl Default for BandThresholds {
    fn default() -> Self {
        Self {
            severe: DEFAULT_SEVERE_THRESHOLD_KG,
            moderate: DEFAULT_MODERATE_THRESHOLD_KG,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid band thresholds: moderate ({moderate}) and severe ({severe}) must be finite with 0 <= moderate <= severe")]
pub struct ThresholdError {
    pub severe: f64,
    pub moderate: f64,
}

impl BandThresholds {
    pub fn new(severe: f64, moderate: f64) -> Result<Self, ThresholdError> {
        let valid = severe.is_finite()
            && moderate.is_finite()
            && moderate >= 0.0
            && moderate <= severe;
        if !valid {
            return Err(ThresholdError { severe, moderate });
        }
        Ok(Self { severe, moderate })
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "scheme", rename_all = "snake_case")]
pub enum ClassificationPolicy {
    Banded(BandThresholds),
    SignOnly,
}

impl Default for ClassificationPolicy {
    fn default() -> Self {
        Self::Banded(BandThresholds::default())
    }
}

impl ClassificationPolicy {
    pub fn scheme(&self) -> ClassificationScheme {
        match self {
            Self::Banded(_) => ClassificationScheme::Banded,
            Self::SignOnly => ClassificationScheme::SignOnly,
        }
    }

    pub fn classify(&self, gap: f64) -> StatusCategory {
        match self {
            Self::Banded(bands) => classify_banded(gap, bands),
            Self::SignOnly => classify_sign(gap),
        }
    }
}

pub fn classify_banded(gap: f64, bands: &BandThresholds) -> StatusCategory {
    if gap > bands.severe {
        StatusCategory::SevereShortfall
    } else if gap > bands.moderate {
        StatusCategory::ModerateShortfall
    } else if gap >= -bands.moderate {
        StatusCategory::Stable
    } else if gap >= -bands.severe {
        StatusCategory::ModerateSurplus
    } else {
        StatusCategory::SevereSurplus
    }
}

pub fn classify_sign(gap: f64) -> StatusCategory {
    if gap > 0.0 {
        StatusCategory::Undersupply
    } else if gap < 0.0 {
        StatusCategory::Oversupply
    } else {
        StatusCategory::Matched
    }
}
