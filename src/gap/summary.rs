use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::error::StateError;
use crate::gap::compute::{gap_percent, round2};
use crate::gap::{GapRecord, SummaryReport};

/// How `average_gap_percent` is derived from the computed records.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum AveragePolicy {
    /// Net gap over total forecast.
    #[default]
    AggregateRatio,
    /// Mean of each record's own gap percent.
    MeanOfRecords,
}

impl AveragePolicy {
    pub fn as_slug(&self) -> &'static str {
        match self {
            Self::AggregateRatio => "aggregate_ratio",
            Self::MeanOfRecords => "mean_of_records",
        }
    }
}

impl Display for AveragePolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_slug())
    }
}

#[derive(Debug, Error)]
#[error("unknown average policy: {0}")]
pub struct AveragePolicyParseError(pub String);

impl FromStr for AveragePolicy {
    type Err = AveragePolicyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "aggregate_ratio" | "aggregate" | "ratio" => Ok(Self::AggregateRatio),
            "mean_of_records" | "mean" | "records" => Ok(Self::MeanOfRecords),
            _ => Err(AveragePolicyParseError(s.to_string())),
        }
    }
}

pub fn summarize(records: &[GapRecord], policy: AveragePolicy) -> Result<SummaryReport, StateError> {
    if records.is_empty() {
        return Err(StateError);
    }

    let total_forecast: f64 = records.iter().map(|r| r.forecast).sum();
    let total_actual: f64 = records.iter().map(|r| r.actual).sum();
    let net_gap = total_forecast - total_actual;
    let average_gap_percent = match policy {
        AveragePolicy::AggregateRatio => gap_percent(net_gap, total_forecast),
        AveragePolicy::MeanOfRecords => mean_of(records),
    };
    debug!(%policy, total_forecast, total_actual, net_gap, "summarized records");

    Ok(SummaryReport {
        total_forecast,
        total_actual,
        net_gap,
        average_gap_percent,
        average_policy: policy,
    })
}

/// Ratio of sums: net gap as a percentage of total forecast.
pub fn aggregate_gap_percent(records: &[GapRecord]) -> Result<f64, StateError> {
    if records.is_empty() {
        return Err(StateError);
    }
    let total_forecast: f64 = records.iter().map(|r| r.forecast).sum();
    let total_actual: f64 = records.iter().map(|r| r.actual).sum();
    Ok(gap_percent(total_forecast - total_actual, total_forecast))
}

/// Mean of ratios: average of the per-record (already rounded) gap percents.
pub fn mean_record_gap_percent(records: &[GapRecord]) -> Result<f64, StateError> {
    if records.is_empty() {
        return Err(StateError);
    }
    Ok(mean_of(records))
}

fn mean_of(records: &[GapRecord]) -> f64 {
    let sum: f64 = records.iter().map(|r| r.gap_percent).sum();
    round2(sum / records.len() as f64)
}
