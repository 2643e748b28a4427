use tracing::{debug, warn};

use crate::error::Result;
use crate::gap::validate::validate;
use crate::gap::{ClassificationPolicy, GapRecord};

pub fn compute_gap(
    labels: &[String],
    forecasts: &[f64],
    actuals: &[f64],
    policy: &ClassificationPolicy,
) -> Result<Vec<GapRecord>> {
    validate(labels, forecasts, actuals)?;
    debug!(items = labels.len(), scheme = %policy.scheme(), "computing gaps");

    let records = labels
        .iter()
        .zip(forecasts)
        .zip(actuals)
        .map(|((label, &forecast), &actual)| {
            if forecast == 0.0 {
                warn!(label = %label, "zero forecast; gap percent reported as 0");
            }
            let gap = forecast - actual;
            GapRecord {
                label: label.clone(),
                forecast,
                actual,
                gap,
                gap_percent: gap_percent(gap, forecast),
                status: policy.classify(gap),
            }
        })
        .collect();
    Ok(records)
}

/// `gap` as a percentage of `base`, rounded to 2 decimals; 0 when `base` is 0.
pub fn gap_percent(gap: f64, base: f64) -> f64 {
    if base == 0.0 {
        return 0.0;
    }
    round2(gap / base * 100.0)
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::{GapError, ValidationError};
    use crate::gap::StatusCategory;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn computes_reference_scenario() {
        let records = compute_gap(
            &labels(&["Tomato", "Wheat", "Rice"]),
            &[100.0, 200.0, 150.0],
            &[90.0, 180.0, 160.0],
            &ClassificationPolicy::default(),
        )
        .expect("compute failed");

        assert_eq!(
            records,
            vec![
                GapRecord {
                    label: "Tomato".to_string(),
                    forecast: 100.0,
                    actual: 90.0,
                    gap: 10.0,
                    gap_percent: 10.0,
                    status: StatusCategory::ModerateShortfall,
                },
                GapRecord {
                    label: "Wheat".to_string(),
                    forecast: 200.0,
                    actual: 180.0,
                    gap: 20.0,
                    gap_percent: 10.0,
                    status: StatusCategory::ModerateShortfall,
                },
                GapRecord {
                    label: "Rice".to_string(),
                    forecast: 150.0,
                    actual: 160.0,
                    gap: -10.0,
                    gap_percent: -6.67,
                    status: StatusCategory::ModerateSurplus,
                },
            ]
        );
    }

    #[test]
    fn zero_forecast_reports_zero_percent() {
        let records = compute_gap(
            &labels(&["Onion"]),
            &[0.0],
            &[35.0],
            &ClassificationPolicy::default(),
        )
        .expect("compute failed");
        assert_eq!(records[0].gap, -35.0);
        assert_eq!(records[0].gap_percent, 0.0);
        assert_eq!(records[0].status, StatusCategory::SevereSurplus);
    }

    #[test]
    fn refuses_invalid_input() {
        let err = compute_gap(
            &labels(&["A", "B"]),
            &[1.0],
            &[1.0, 2.0],
            &ClassificationPolicy::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            GapError::Validation(ValidationError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn sign_only_policy_flows_through() {
        let records = compute_gap(
            &labels(&["A", "B", "C"]),
            &[10.0, 10.0, 10.0],
            &[9.0, 10.0, 11.0],
            &ClassificationPolicy::SignOnly,
        )
        .expect("compute failed");
        let statuses = records.iter().map(|r| r.status).collect::<Vec<_>>();
        assert_eq!(
            statuses,
            vec![
                StatusCategory::Undersupply,
                StatusCategory::Matched,
                StatusCategory::Oversupply,
            ]
        );
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round2(-6.666_666), -6.67);
        assert_eq!(round2(12.345_9), 12.35);
        assert_eq!(gap_percent(1.0, 3.0), 33.33);
    }
}
