pub mod classify;
pub mod compute;
pub mod parse;
pub mod summary;
pub mod validate;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

pub use classify::{BandThresholds, ClassificationPolicy, ClassificationScheme, ThresholdError};
pub use compute::{compute_gap, gap_percent, round2};
pub use parse::{parse, parse_labels, parse_quantities, title_case};
pub use summary::{aggregate_gap_percent, mean_record_gap_percent, summarize, AveragePolicy};
pub use validate::validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputRecord {
    pub label: String,
    pub forecast: f64,
    pub actual: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapRecord {
    pub label: String,
    pub forecast: f64,
    pub actual: f64,
    pub gap: f64,
    pub gap_percent: f64,
    pub status: StatusCategory,
}

impl GapRecord {
    pub fn input(&self) -> InputRecord {
        InputRecord {
            label: self.label.clone(),
            forecast: self.forecast,
            actual: self.actual,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum StatusCategory {
    SevereShortfall,
    ModerateShortfall,
    Stable,
    ModerateSurplus,
    SevereSurplus,
    Undersupply,
    Matched,
    Oversupply,
}

impl StatusCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::SevereShortfall => "Severe Shortfall",
            Self::ModerateShortfall => "Moderate Shortfall",
            Self::Stable => "Stable",
            Self::ModerateSurplus => "Moderate Surplus",
            Self::SevereSurplus => "Severe Surplus",
            Self::Undersupply => "Undersupply",
            Self::Matched => "Matched",
            Self::Oversupply => "Oversupply",
        }
    }

    /// Actual supply fell short of the forecast.
    pub fn is_shortfall(self) -> bool {
        matches!(
            self,
            Self::SevereShortfall | Self::ModerateShortfall | Self::Undersupply
        )
    }

    pub fn is_surplus(self) -> bool {
        matches!(
            self,
            Self::SevereSurplus | Self::ModerateSurplus | Self::Oversupply
        )
    }
}

impl std::fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub total_forecast: f64,
    pub total_actual: f64,
    pub net_gap: f64,
    pub average_gap_percent: f64,
    pub average_policy: AveragePolicy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    pub classification: ClassificationPolicy,
    pub average: AveragePolicy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapReport {
    pub generated_at: DateTime<Utc>,
    pub options: AnalysisOptions,
    pub records: Vec<GapRecord>,
    pub summary: SummaryReport,
}

/// Runs the whole pipeline over the three raw comma-separated fields.
pub fn analyze(
    labels_text: &str,
    forecast_text: &str,
    actual_text: &str,
    options: &AnalysisOptions,
) -> Result<GapReport> {
    let (labels, forecasts, actuals) = parse(labels_text, forecast_text, actual_text)?;
    let records = compute_gap(&labels, &forecasts, &actuals, &options.classification)?;
    let summary = summarize(&records, options.average)?;
    debug!(
        items = records.len(),
        net_gap = summary.net_gap,
        "gap analysis complete"
    );
    Ok(GapReport {
        generated_at: Utc::now(),
        options: *options,
        records,
        summary,
    })
}
