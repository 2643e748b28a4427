use anyhow::Result;

use crate::gap::{GapRecord, SummaryReport};

pub fn gaps_to_csv(records: &[GapRecord]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record([
        "label",
        "forecast_kg",
        "actual_kg",
        "gap_kg",
        "gap_percent",
        "status",
    ])?;
    for record in records {
        writer.write_record([
            record.label.clone(),
            record.forecast.to_string(),
            record.actual.to_string(),
            record.gap.to_string(),
            format!("{:.2}", record.gap_percent),
            record.status.label().to_string(),
        ])?;
    }
    let data = writer.into_inner()?;
    Ok(String::from_utf8_lossy(&data).to_string())
}

pub fn summary_to_csv(summary: &SummaryReport) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(["metric", "value"])?;
    writer.write_record(["total_forecast_kg", &summary.total_forecast.to_string()])?;
    writer.write_record(["total_actual_kg", &summary.total_actual.to_string()])?;
    writer.write_record(["net_gap_kg", &summary.net_gap.to_string()])?;
    writer.write_record([
        "average_gap_percent",
        &format!("{:.2}", summary.average_gap_percent),
    ])?;
    writer.write_record(["average_policy", summary.average_policy.as_slug()])?;
    let data = writer.into_inner()?;
    Ok(String::from_utf8_lossy(&data).to_string())
}
