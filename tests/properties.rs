use proptest::prelude::*;
use supply_gap::gap::{
    compute_gap, summarize, AveragePolicy, BandThresholds, ClassificationPolicy, StatusCategory,
};

fn quantity() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), 0.0..1_000_000.0f64]
}

fn aligned_inputs() -> impl Strategy<Value = (Vec<String>, Vec<f64>, Vec<f64>)> {
    (1usize..40).prop_flat_map(|n| {
        (
            prop::collection::vec("[A-Z][a-z]{0,8}", n),
            prop::collection::vec(quantity(), n),
            prop::collection::vec(quantity(), n),
        )
    })
}

fn any_policy() -> impl Strategy<Value = ClassificationPolicy> {
    prop_oneof![
        Just(ClassificationPolicy::default()),
        Just(ClassificationPolicy::SignOnly),
        (0.0..50.0f64, 0.0..50.0f64).prop_map(|(a, b)| {
            ClassificationPolicy::Banded(BandThresholds {
                severe: a.max(b),
                moderate: a.min(b),
            })
        }),
    ]
}

fn any_average() -> impl Strategy<Value = AveragePolicy> {
    prop_oneof![
        Just(AveragePolicy::AggregateRatio),
        Just(AveragePolicy::MeanOfRecords)
    ]
}

proptest! {
    #[test]
    fn one_record_per_label_in_order((labels, forecasts, actuals) in aligned_inputs(), policy in any_policy()) {
        let records = compute_gap(&labels, &forecasts, &actuals, &policy).unwrap();
        prop_assert_eq!(records.len(), labels.len());
        for (idx, record) in records.iter().enumerate() {
            prop_assert_eq!(&record.label, &labels[idx]);
            prop_assert_eq!(record.forecast, forecasts[idx]);
            prop_assert_eq!(record.actual, actuals[idx]);
            prop_assert_eq!(record.gap, forecasts[idx] - actuals[idx]);
            if record.forecast == 0.0 {
                prop_assert_eq!(record.gap_percent, 0.0);
            }
        }
    }

    #[test]
    fn compute_is_idempotent((labels, forecasts, actuals) in aligned_inputs(), policy in any_policy()) {
        let first = compute_gap(&labels, &forecasts, &actuals, &policy).unwrap();
        let second = compute_gap(&labels, &forecasts, &actuals, &policy).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn net_gap_matches_totals((labels, forecasts, actuals) in aligned_inputs(), average in any_average()) {
        let records = compute_gap(&labels, &forecasts, &actuals, &ClassificationPolicy::default()).unwrap();
        let summary = summarize(&records, average).unwrap();
        prop_assert_eq!(summary.net_gap, summary.total_forecast - summary.total_actual);
        prop_assert_eq!(summary.total_forecast, forecasts.iter().sum::<f64>());
        prop_assert_eq!(summary.total_actual, actuals.iter().sum::<f64>());
    }

    #[test]
    fn bands_partition_the_line(gap in -1.0e6..1.0e6f64) {
        let bands = BandThresholds::default();
        let hits = [
            gap > bands.severe,
            gap > bands.moderate && gap <= bands.severe,
            gap >= -bands.moderate && gap <= bands.moderate,
            gap >= -bands.severe && gap < -bands.moderate,
            gap < -bands.severe,
        ];
        prop_assert_eq!(hits.iter().filter(|h| **h).count(), 1);

        let expected = match hits.iter().position(|h| *h).unwrap() {
            0 => StatusCategory::SevereShortfall,
            1 => StatusCategory::ModerateShortfall,
            2 => StatusCategory::Stable,
            3 => StatusCategory::ModerateSurplus,
            _ => StatusCategory::SevereSurplus,
        };
        prop_assert_eq!(ClassificationPolicy::Banded(bands).classify(gap), expected);
    }

    #[test]
    fn sign_only_tracks_direction(gap in -1.0e6..1.0e6f64) {
        let status = ClassificationPolicy::SignOnly.classify(gap);
        prop_assert_eq!(status.is_shortfall(), gap > 0.0);
        prop_assert_eq!(status.is_surplus(), gap < 0.0);
    }
}
